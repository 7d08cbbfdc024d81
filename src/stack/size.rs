// SPDX-License-Identifier: MPL-2.0
//! Size resolution for the stack container.
//!
//! A [`SizeConfig`] describes the caller's sizing intent, either exact
//! pixel dimensions or a width plus an aspect ratio; [`resolve`] turns it
//! into the concrete layout values the view applies. Resolution is pure
//! and total: every variant of the closed configuration type is handled,
//! so there are no run-time error paths.

use crate::config::DEFAULT_STACK_HEIGHT;
use iced::Length;
use std::fmt;

/// One of the predefined width:height ratios.
///
/// # Example
///
/// ```
/// use iced_stack::stack::size::NamedRatio;
///
/// assert_eq!(NamedRatio::Wide.dimensions(), (16, 9));
/// assert_eq!(NamedRatio::Tall.dimensions(), (9, 16));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedRatio {
    /// 1:1
    Square,
    /// 4:3
    Landscape,
    /// 16:9
    Wide,
    /// 21:9
    Ultrawide,
    /// 3:4
    Portrait,
    /// 9:16
    Tall,
}

impl NamedRatio {
    /// All named ratios, in presentation order.
    pub const ALL: [Self; 6] = [
        Self::Square,
        Self::Landscape,
        Self::Wide,
        Self::Ultrawide,
        Self::Portrait,
        Self::Tall,
    ];

    /// Returns the `(width, height)` pair of the ratio.
    #[must_use]
    pub fn dimensions(self) -> (u16, u16) {
        match self {
            Self::Square => (1, 1),
            Self::Landscape => (4, 3),
            Self::Wide => (16, 9),
            Self::Ultrawide => (21, 9),
            Self::Portrait => (3, 4),
            Self::Tall => (9, 16),
        }
    }

    /// Returns the ratio as a width/height value.
    #[must_use]
    pub fn value(self) -> f32 {
        let (w, h) = self.dimensions();
        f32::from(w) / f32::from(h)
    }

    /// Human-readable label, used by the demo section headers.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Square => "Square (1:1)",
            Self::Landscape => "Landscape (4:3)",
            Self::Wide => "Wide (16:9)",
            Self::Ultrawide => "Ultrawide (21:9)",
            Self::Portrait => "Portrait (3:4)",
            Self::Tall => "Tall (9:16)",
        }
    }
}

/// Aspect ratio: a named preset or a custom width/height value
/// (e.g. `2.35` for cinemascope).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ratio {
    Named(NamedRatio),
    Custom(f32),
}

impl Ratio {
    /// Returns the ratio as a width/height value.
    #[must_use]
    pub fn value(self) -> f32 {
        match self {
            Self::Named(named) => named.value(),
            Self::Custom(value) => value,
        }
    }
}

impl From<NamedRatio> for Ratio {
    fn from(named: NamedRatio) -> Self {
        Self::Named(named)
    }
}

/// Sizing intent for a stack instance.
///
/// Absence of a configuration (`Option::None` at the call sites) means
/// 100% width with a fixed default height and no enforced aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeConfig {
    /// Exact pixel dimensions.
    Fixed { width: f32, height: f32 },
    /// Pixel width; height follows from the aspect ratio.
    AspectRatio { width: f32, ratio: Ratio },
}

impl SizeConfig {
    /// The width/height value implied by the configuration.
    #[must_use]
    pub fn ratio_value(&self) -> f32 {
        match self {
            Self::Fixed { width, height } => width / height,
            Self::AspectRatio { ratio, .. } => ratio.value(),
        }
    }
}

/// A CSS-style length. Rendered as the literal strings the upstream
/// stylesheet expects (`"300px"`, `"100%"`, `"100vw"`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CssLength {
    Px(f32),
    Percent(f32),
    ViewportWidth(f32),
}

impl CssLength {
    /// Maps the length onto an Iced layout length. Relative lengths fill
    /// the parent; pixel lengths are fixed.
    #[must_use]
    pub fn to_length(self) -> Length {
        match self {
            Self::Px(px) => Length::Fixed(px),
            Self::Percent(_) | Self::ViewportWidth(_) => Length::Fill,
        }
    }
}

impl fmt::Display for CssLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{}px", v),
            Self::Percent(v) => write!(f, "{}%", v),
            Self::ViewportWidth(v) => write!(f, "{}vw", v),
        }
    }
}

/// A vertical dimension: a concrete length or automatic (derived from the
/// aspect ratio by the layout pass).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    Css(CssLength),
    Auto,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Css(length) => length.fmt(f),
            Self::Auto => write!(f, "auto"),
        }
    }
}

/// Concrete layout values derived from a [`SizeConfig`]. Recomputed
/// whenever the configuration changes; never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDimensions {
    pub width: CssLength,
    pub height: Dimension,
    pub max_width: Option<CssLength>,
    pub aspect_ratio: Option<String>,
}

/// Resolves a size configuration into concrete layout dimensions.
///
/// # Example
///
/// ```
/// use iced_stack::stack::size::{resolve, SizeConfig};
///
/// let dims = resolve(Some(&SizeConfig::Fixed { width: 300.0, height: 300.0 }));
/// assert_eq!(dims.width.to_string(), "300px");
/// assert_eq!(dims.height.to_string(), "300px");
/// ```
#[must_use]
pub fn resolve(config: Option<&SizeConfig>) -> ResolvedDimensions {
    let Some(config) = config else {
        return ResolvedDimensions {
            width: CssLength::Percent(100.0),
            height: Dimension::Css(CssLength::Px(DEFAULT_STACK_HEIGHT)),
            max_width: None,
            aspect_ratio: None,
        };
    };

    match *config {
        SizeConfig::Fixed { width, height } => ResolvedDimensions {
            width: CssLength::Px(width),
            height: Dimension::Css(CssLength::Px(height)),
            max_width: None,
            aspect_ratio: None,
        },
        SizeConfig::AspectRatio { width, ratio } => ResolvedDimensions {
            width: CssLength::Px(width),
            height: Dimension::Auto,
            max_width: Some(CssLength::ViewportWidth(100.0)),
            aspect_ratio: Some(ratio_string(ratio)),
        },
    }
}

/// Returns the `"W/H"` aspect-ratio string for a configuration, or `None`
/// when no configuration is supplied (the default layout enforces none).
#[must_use]
pub fn aspect_ratio(config: Option<&SizeConfig>) -> Option<String> {
    let config = config?;

    Some(match *config {
        SizeConfig::Fixed { width, height } => format!("{}/{}", width, height),
        SizeConfig::AspectRatio { ratio, .. } => ratio_string(ratio),
    })
}

fn ratio_string(ratio: Ratio) -> String {
    match ratio {
        Ratio::Named(named) => {
            let (w, h) = named.dimensions();
            format!("{}/{}", w, h)
        }
        Ratio::Custom(value) => format!("{}/1", value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn no_config_resolves_to_default() {
        let dims = resolve(None);
        assert_eq!(dims.width.to_string(), "100%");
        assert_eq!(dims.height.to_string(), "180px");
        assert_eq!(dims.max_width, None);
        assert_eq!(dims.aspect_ratio, None);
    }

    #[test]
    fn no_config_has_no_aspect_ratio() {
        assert_eq!(aspect_ratio(None), None);
    }

    #[test]
    fn fixed_resolves_to_exact_pixels() {
        let config = SizeConfig::Fixed {
            width: 300.0,
            height: 300.0,
        };
        let dims = resolve(Some(&config));
        assert_eq!(dims.width.to_string(), "300px");
        assert_eq!(dims.height.to_string(), "300px");
        assert_eq!(dims.max_width, None);
        assert_eq!(dims.aspect_ratio, None);
    }

    #[test]
    fn fixed_aspect_string_uses_raw_dimensions() {
        let config = SizeConfig::Fixed {
            width: 300.0,
            height: 300.0,
        };
        assert_eq!(aspect_ratio(Some(&config)).as_deref(), Some("300/300"));
    }

    #[test]
    fn custom_ratio_resolves_to_auto_height() {
        let config = SizeConfig::AspectRatio {
            width: 300.0,
            ratio: Ratio::Custom(2.35),
        };
        let dims = resolve(Some(&config));
        assert_eq!(dims.width.to_string(), "300px");
        assert_eq!(dims.height.to_string(), "auto");
        assert_eq!(dims.max_width.map(|w| w.to_string()).as_deref(), Some("100vw"));
        assert_eq!(dims.aspect_ratio.as_deref(), Some("2.35/1"));
    }

    #[test]
    fn named_ratio_resolves_from_table() {
        let config = SizeConfig::AspectRatio {
            width: 300.0,
            ratio: NamedRatio::Wide.into(),
        };
        let dims = resolve(Some(&config));
        assert_eq!(dims.width.to_string(), "300px");
        assert_eq!(dims.height.to_string(), "auto");
        assert_eq!(dims.aspect_ratio.as_deref(), Some("16/9"));
        assert_eq!(aspect_ratio(Some(&config)).as_deref(), Some("16/9"));
    }

    #[test]
    fn every_named_ratio_produces_its_table_entry() {
        let expected = [
            (NamedRatio::Square, "1/1"),
            (NamedRatio::Landscape, "4/3"),
            (NamedRatio::Wide, "16/9"),
            (NamedRatio::Ultrawide, "21/9"),
            (NamedRatio::Portrait, "3/4"),
            (NamedRatio::Tall, "9/16"),
        ];
        for (named, string) in expected {
            let config = SizeConfig::AspectRatio {
                width: 200.0,
                ratio: named.into(),
            };
            assert_eq!(aspect_ratio(Some(&config)).as_deref(), Some(string));
        }
    }

    #[test]
    fn ratio_value_divides_width_by_height() {
        assert_abs_diff_eq!(
            SizeConfig::Fixed {
                width: 300.0,
                height: 150.0
            }
            .ratio_value(),
            2.0
        );
        let wide = SizeConfig::AspectRatio {
            width: 300.0,
            ratio: NamedRatio::Wide.into(),
        };
        assert_abs_diff_eq!(wide.ratio_value(), 16.0 / 9.0);
    }

    #[test]
    fn css_lengths_map_to_iced_lengths() {
        assert_eq!(CssLength::Px(300.0).to_length(), Length::Fixed(300.0));
        assert_eq!(CssLength::Percent(100.0).to_length(), Length::Fill);
        assert_eq!(CssLength::ViewportWidth(100.0).to_length(), Length::Fill);
    }

    #[test]
    fn resolution_is_deterministic() {
        let config = SizeConfig::AspectRatio {
            width: 240.0,
            ratio: NamedRatio::Portrait.into(),
        };
        assert_eq!(resolve(Some(&config)), resolve(Some(&config)));
    }
}
