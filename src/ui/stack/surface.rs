// SPDX-License-Identifier: MPL-2.0
//! Review surface view: a modal layer listing every image with its
//! caption.
//!
//! The surface fades with the progress value the component animates, so
//! the backdrop, the panel, and the figures move as one transition. A
//! press on the backdrop itself (not on the panel or its descendants)
//! requests a close; the panel is opaque to pointer events.

use super::component::Message;
use crate::stack::StackImage;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::stylesheet;
use iced::widget::{
    button, center, column, container, horizontal_space, mouse_area, opaque, row, scrollable, text,
    Column,
};
use iced::{ContentFit, Element, Length};

/// Width of the figure column inside the surface.
const FIGURE_WIDTH: f32 = 640.0;

/// Everything the surface view needs from the component.
pub struct ViewModel<'a> {
    /// Subject line composing the surface title.
    pub subject: &'a str,
    /// Images listed in order, one captioned figure each.
    pub images: &'a [StackImage],
    /// Width/height ratio figures adopt, when the stack enforces one.
    pub aspect_ratio: Option<f32>,
    /// Fade progress of the open/close transition, 0.0–1.0.
    pub fade: f32,
}

/// Builds the modal surface layer. The caller stacks it over the page.
pub fn view(model: ViewModel<'_>) -> Element<'_, Message> {
    let sheet = stylesheet::install();

    let header = row![
        text(format!("{} Images", model.subject)).size(sheet.surface_title_size),
        horizontal_space(),
        button(text("\u{00d7}").size(typography::HEADING))
            .on_press(Message::CloseRequested)
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::close),
    ]
    .align_y(iced::Alignment::Center)
    .spacing(spacing::MD);

    let mut figures = Column::new().spacing(spacing::LG);
    for image in model.images {
        figures = figures.push(figure(image, model.aspect_ratio, model.fade));
    }

    let panel = container(
        column![
            header,
            scrollable(container(figures).padding(spacing::XS)).height(Length::Fill),
        ]
        .spacing(spacing::LG)
        .height(Length::Fill),
    )
    .style(styles::container::surface_panel(model.fade))
    .padding(spacing::LG)
    .width(Length::Fixed(FIGURE_WIDTH + 4.0 * spacing::LG))
    .height(Length::Fill)
    .max_height(760.0);

    // A press reaching the backdrop layer itself closes the surface; the
    // opaque panel consumes presses on its own content first.
    let layer = mouse_area(center(opaque(panel))).on_press(Message::CloseRequested);

    opaque(
        container(layer)
            .style(styles::container::backdrop(model.fade))
            .width(Length::Fill)
            .height(Length::Fill),
    )
}

fn figure<'a>(
    image: &'a StackImage,
    aspect_ratio: Option<f32>,
    fade: f32,
) -> Element<'a, Message> {
    let mut photo = iced::widget::image(image.handle.clone())
        .content_fit(ContentFit::Cover)
        .width(Length::Fixed(FIGURE_WIDTH))
        .opacity(fade);

    if let Some(ratio) = aspect_ratio {
        photo = photo.height(Length::Fixed(FIGURE_WIDTH / ratio));
    }

    container(
        column![
            photo,
            text(image.caption.clone()).size(typography::BODY),
        ]
        .spacing(spacing::XS),
    )
    .style(styles::container::card)
    .padding(spacing::SM)
    .into()
}
