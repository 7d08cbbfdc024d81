// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::stylesheet;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card surface framing each stack image.
pub fn card(_theme: &Theme) -> container::Style {
    let sheet = stylesheet::install();

    container::Style {
        background: Some(Background::Color(sheet.card_background)),
        border: Border {
            color: sheet.card_border,
            width: sheet.card_border_width,
            radius: sheet.card_radius.into(),
        },
        shadow: sheet.card_shadow,
        ..Default::default()
    }
}

/// Caption bar over the current card.
pub fn caption(_theme: &Theme) -> container::Style {
    let sheet = stylesheet::install();

    container::Style {
        background: Some(Background::Color(sheet.caption_background)),
        text_color: Some(sheet.caption_text),
        border: Border {
            radius: sheet.card_radius.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dimming layer behind the review surface, faded by `progress` so the
/// backdrop and the surface share one transition.
pub fn backdrop(progress: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let sheet = stylesheet::install();

        container::Style {
            background: Some(Background::Color(Color {
                a: sheet.backdrop.a * progress,
                ..sheet.backdrop
            })),
            ..Default::default()
        }
    }
}

/// Review surface panel, faded by `progress`.
pub fn surface_panel(progress: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let sheet = stylesheet::install();

        container::Style {
            background: Some(Background::Color(Color {
                a: sheet.surface_background.a * progress,
                ..sheet.surface_background
            })),
            border: Border {
                radius: sheet.surface_radius.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
