// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::palette::{BLACK, GRAY_100, WHITE};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Close button in the review surface header.
pub fn close(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => 0.35,
        button::Status::Pressed => 0.5,
        _ => 0.2,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: WHITE,
        border: Border {
            color: GRAY_100,
            width: 1.0,
            radius: 999.0.into(),
        },
        ..Default::default()
    }
}
