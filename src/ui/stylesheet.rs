// SPDX-License-Identifier: MPL-2.0
//! Process-wide stylesheet installation.
//!
//! Every widget instance asks for the stylesheet at construction. The
//! first call resolves the design tokens into a `'static` sheet; later
//! calls, from any instance on any thread, return the same reference.
//! There is no teardown: the sheet lives for the process.

use crate::ui::design_tokens::{opacity, palette, radius, shadow, typography};
use iced::{Color, Shadow};
use std::sync::OnceLock;

/// Resolved visual constants shared by every stack instance.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSheet {
    /// Card surface behind each image.
    pub card_background: Color,
    /// Thin border framing each card.
    pub card_border: Color,
    pub card_border_width: f32,
    pub card_radius: f32,
    pub card_shadow: Shadow,
    /// Caption bar over the current card.
    pub caption_background: Color,
    pub caption_text: Color,
    pub caption_size: f32,
    /// Dimming layer behind the review surface.
    pub backdrop: Color,
    /// Review surface panel.
    pub surface_background: Color,
    pub surface_radius: f32,
    pub surface_title_size: f32,
}

impl StyleSheet {
    fn resolve() -> Self {
        Self {
            card_background: palette::WHITE,
            card_border: palette::GRAY_200,
            card_border_width: 1.0,
            card_radius: radius::MD,
            card_shadow: shadow::card(),
            caption_background: Color {
                a: opacity::CAPTION,
                ..palette::BLACK
            },
            caption_text: palette::WHITE,
            caption_size: typography::CAPTION,
            backdrop: Color {
                a: opacity::BACKDROP,
                ..palette::BLACK
            },
            surface_background: Color {
                a: opacity::SURFACE,
                ..palette::GRAY_900
            },
            surface_radius: radius::LG,
            surface_title_size: typography::TITLE,
        }
    }
}

/// Ensures the stylesheet is installed and returns it.
///
/// Idempotent and safe to call from every widget instance on every
/// mount; only the first call does the work.
pub fn install() -> &'static StyleSheet {
    static SHEET: OnceLock<StyleSheet> = OnceLock::new();
    SHEET.get_or_init(StyleSheet::resolve)
}
