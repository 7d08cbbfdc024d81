// SPDX-License-Identifier: MPL-2.0
//! Demo application: a scrollable showcase page with one stack per size
//! variant, mirroring the widget's upstream test app.
//!
//! Each section hosts an independent widget instance, which exercises
//! per-instance state isolation and the idempotent stylesheet install.
//! The app owns the page-level concerns the widget cannot: stacking open
//! review surfaces over the whole window, routing the Escape key, and
//! fanning scroll events out to every instance's visibility probe.

pub mod gallery;

use crate::error::Error;
use crate::stack::size::{NamedRatio, Ratio, SizeConfig};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::stack::{component, Props};
use crate::ui::theming::ThemeMode;
use iced::widget::{column, container, scrollable, text, Column, Id, Stack};
use iced::{keyboard, window, Element, Length, Subscription, Task, Theme};
use std::path::PathBuf;

const SCROLLABLE_ID: &str = "showcase-scroll";

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 600;
pub const MIN_WINDOW_HEIGHT: u32 = 400;

/// Launch options parsed in `main.rs`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Overrides the subject line of every showcase stack.
    pub subject: Option<String>,
    /// Optional gallery manifest; placeholders are generated without it.
    pub manifest: Option<PathBuf>,
    /// Theme override; follows the system preference by default.
    pub theme: ThemeMode,
}

/// One showcase section: a header plus a stack instance.
#[derive(Debug)]
struct Section {
    title: &'static str,
    stack: component::State,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Message of the stack instance at this section index.
    Stack(usize, component::Message),
    /// The showcase page scrolled.
    Scrolled,
    /// Escape pressed anywhere; intercepted and routed to every surface.
    EscapePressed,
}

/// Root application state for the showcase.
#[derive(Debug)]
pub struct App {
    sections: Vec<Section>,
    theme_mode: ThemeMode,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait
    // requirement while only consuming flags once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// The size configuration shown by each showcase section.
fn section_plan() -> Vec<(&'static str, Option<SizeConfig>)> {
    let mut plan: Vec<(&'static str, Option<SizeConfig>)> = vec![
        ("Default (100% width)", None),
        (
            "Fixed (300 × 300)",
            Some(SizeConfig::Fixed {
                width: 300.0,
                height: 300.0,
            }),
        ),
    ];

    for named in NamedRatio::ALL {
        let width = match named {
            NamedRatio::Square | NamedRatio::Tall => 200.0,
            _ => 300.0,
        };
        plan.push((
            named.label(),
            Some(SizeConfig::AspectRatio {
                width,
                ratio: Ratio::Named(named),
            }),
        ));
    }

    plan.push((
        "Custom (2.35:1)",
        Some(SizeConfig::AspectRatio {
            width: 300.0,
            ratio: Ratio::Custom(2.35),
        }),
    ));

    plan
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let manifest_images = flags.manifest.as_deref().map(gallery::load_manifest);
        if let Some(Err(error)) = &manifest_images {
            report_manifest_error(error);
        }
        let manifest_images = manifest_images.and_then(Result::ok);

        let mut sections = Vec::new();
        let mut tasks = Vec::new();

        for (index, (title, size)) in section_plan().into_iter().enumerate() {
            let images = match &manifest_images {
                Some(images) => images.clone(),
                None => gallery::placeholders(3, index as u32),
            };

            let mut props = Props::new(images);
            if let Some(subject) = &flags.subject {
                props = props.subject(subject.clone());
            }
            if let Some(size) = size {
                props = props.size(size);
            }

            let (stack, task) = component::State::new(props);
            sections.push(Section { title, stack });
            tasks.push(task.map(move |message| Message::Stack(index, message)));
        }

        (
            App {
                sections,
                theme_mode: flags.theme,
            },
            Task::batch(tasks),
        )
    }

    fn title(&self) -> String {
        String::from("Iced Stack Showcase")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Stack(index, inner) => match self.sections.get_mut(index) {
                Some(section) => section
                    .stack
                    .update(inner)
                    .map(move |message| Message::Stack(index, message)),
                // A message for a section that no longer exists is stale.
                None => Task::none(),
            },
            Message::Scrolled => self.broadcast(component::Message::HostScrolled),
            Message::EscapePressed => self.broadcast(component::Message::CancelRequested),
        }
    }

    /// Sends one widget message to every section; instances it does not
    /// concern treat it as a no-op.
    fn broadcast(&mut self, message: component::Message) -> Task<Message> {
        Task::batch(self.sections.iter_mut().enumerate().map(|(index, section)| {
            section
                .stack
                .update(message.clone())
                .map(move |message| Message::Stack(index, message))
        }))
    }

    fn view(&self) -> Element<'_, Message> {
        let mut sections = Column::new().spacing(spacing::XL);
        for (index, section) in self.sections.iter().enumerate() {
            let stack = section
                .stack
                .view()
                .map(move |message| Message::Stack(index, message));

            sections = sections.push(
                column![text(section.title).size(typography::HEADING), stack]
                    .spacing(spacing::SM),
            );
        }

        let page = scrollable(
            container(sections)
                .padding(spacing::XL)
                .width(Length::Fill)
                .align_x(iced::alignment::Horizontal::Center),
        )
        .id(Id::new(SCROLLABLE_ID))
        .on_scroll(|_viewport| Message::Scrolled)
        .width(Length::Fill)
        .height(Length::Fill);

        // Open review surfaces stack over the whole page so the modal
        // covers the window rather than one section's bounds.
        let mut layers = Stack::new().push(page);
        for (index, section) in self.sections.iter().enumerate() {
            if let Some(surface) = section.stack.surface() {
                layers = layers.push(surface.map(move |message| Message::Stack(index, message)));
            }
        }

        layers.into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let stacks = Subscription::batch(self.sections.iter().enumerate().map(
            |(index, section)| {
                section
                    .stack
                    .subscription()
                    .with(index)
                    .map(|(index, message)| Message::Stack(index, message))
            },
        ));

        // Escape is intercepted here so the surface closes through its
        // fade rather than disappearing outright.
        let cancel = keyboard::on_key_press(|key, _modifiers| match key {
            keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::EscapePressed),
            _ => None,
        });

        Subscription::batch([stacks, cancel])
    }
}

fn report_manifest_error(error: &Error) {
    eprintln!("gallery manifest ignored: {error}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_plan_covers_every_size_variant() {
        let plan = section_plan();
        // Default + fixed + six named ratios + custom.
        assert_eq!(plan.len(), 9);
        assert!(plan[0].1.is_none());
        assert!(matches!(plan[1].1, Some(SizeConfig::Fixed { .. })));
        assert!(matches!(
            plan.last().unwrap().1,
            Some(SizeConfig::AspectRatio {
                ratio: Ratio::Custom(_),
                ..
            })
        ));
    }

    #[test]
    fn named_sections_use_the_presentation_order() {
        let plan = section_plan();
        assert_eq!(plan[2].0, NamedRatio::Square.label());
        assert_eq!(plan[7].0, NamedRatio::Tall.label());
    }
}
