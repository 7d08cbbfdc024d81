// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for the widget's tunable constants.
//!
//! This module serves as the single source of truth for timing and geometry
//! constants used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Stack geometry**: card fan-out offsets and rotation bounds
//! - **Gesture**: swipe recognition thresholds
//! - **Reveal**: entrance animation arming and stagger timing
//! - **Review surface**: fade transition timing

use std::time::Duration;

// ==========================================================================
// Stack Geometry Defaults
// ==========================================================================

/// Vertical fan-out offset per card, in pixels.
pub const CARD_FAN_STEP: f32 = 4.0;

/// Horizontal shift applied to each card, in pixels. Even-indexed cards
/// shift left by this amount, odd-indexed cards shift right.
pub const CARD_SHIFT: f32 = 8.0;

/// Additional horizontal spread applied while the trigger is hovered.
pub const HOVER_SPREAD: f32 = 4.0;

/// Rotation magnitude used when no random seeds are available yet.
pub const DEFAULT_ROTATION_DEGREES: f32 = 4.0;

/// Lower bound (inclusive) of the random card rotation magnitude.
pub const MIN_ROTATION_DEGREES: f32 = 2.0;

/// Upper bound (exclusive) of the random card rotation magnitude.
pub const MAX_ROTATION_DEGREES: f32 = 8.0;

/// Number of persisted rotation seeds per widget instance. Cards beyond
/// this count reuse seeds cyclically.
pub const ROTATION_SEED_COUNT: usize = 5;

/// Number of cards shown at once, anchored at the current index.
pub const VISIBLE_WINDOW: usize = 3;

/// Stack height when no size configuration is supplied, in pixels.
pub const DEFAULT_STACK_HEIGHT: f32 = 180.0;

/// Subject used for labels when the caller does not provide one.
pub const DEFAULT_SUBJECT: &str = "Project";

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Minimum horizontal drag distance, in pixels, for a swipe to navigate.
pub const MIN_SWIPE_DISTANCE: f32 = 50.0;

// ==========================================================================
// Reveal Defaults
// ==========================================================================

/// Delay between mounting and arming the visibility observation, so the
/// first layout pass has committed before bounds are probed.
pub const REVEAL_SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Margin around the viewport within which the reveal pre-triggers, in
/// pixels, so cards start animating slightly before they scroll into view.
pub const REVEAL_MARGIN: f32 = 50.0;

/// Delay between consecutive card reveals once triggered.
pub const REVEAL_STAGGER: Duration = Duration::from_millis(100);

/// Duration of a single card's entrance fade.
pub const CARD_FADE: Duration = Duration::from_millis(300);

// ==========================================================================
// Review Surface Defaults
// ==========================================================================

/// Duration of the review surface's fade transition. The fade animation,
/// its completion signal, and the fallback completion timer all read this
/// one constant, so the visual transition and the state machine cannot
/// drift apart.
pub const SURFACE_FADE: Duration = Duration::from_millis(200);

/// Interval between animation ticks while a transition is in flight, and
/// the delay used to defer work to the next frame.
pub const FRAME: Duration = Duration::from_millis(16);

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Geometry validation
    assert!(CARD_FAN_STEP > 0.0);
    assert!(CARD_SHIFT > 0.0);
    assert!(MIN_ROTATION_DEGREES > 0.0);
    assert!(MAX_ROTATION_DEGREES > MIN_ROTATION_DEGREES);
    assert!(DEFAULT_ROTATION_DEGREES >= MIN_ROTATION_DEGREES);
    assert!(DEFAULT_ROTATION_DEGREES < MAX_ROTATION_DEGREES);
    assert!(ROTATION_SEED_COUNT > 0);
    assert!(VISIBLE_WINDOW > 0);

    // Gesture validation
    assert!(MIN_SWIPE_DISTANCE > 0.0);

    // Timing validation
    assert!(!REVEAL_STAGGER.is_zero());
    assert!(!SURFACE_FADE.is_zero());
    assert!(FRAME.as_millis() < SURFACE_FADE.as_millis());
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_defaults_are_valid() {
        assert_eq!(CARD_FAN_STEP, 4.0);
        assert_eq!(CARD_SHIFT, 8.0);
        assert_eq!(VISIBLE_WINDOW, 3);
        assert_eq!(ROTATION_SEED_COUNT, 5);
    }

    #[test]
    fn rotation_bounds_bracket_the_default() {
        assert!(MIN_ROTATION_DEGREES <= DEFAULT_ROTATION_DEGREES);
        assert!(DEFAULT_ROTATION_DEGREES < MAX_ROTATION_DEGREES);
    }

    #[test]
    fn swipe_threshold_matches_contract() {
        assert_eq!(MIN_SWIPE_DISTANCE, 50.0);
    }

    #[test]
    fn reveal_timing_defaults_are_valid() {
        assert_eq!(REVEAL_SETTLE_DELAY, Duration::from_millis(100));
        assert_eq!(REVEAL_STAGGER, Duration::from_millis(100));
        assert_eq!(REVEAL_MARGIN, 50.0);
    }

    #[test]
    fn surface_fade_is_single_source_of_truth() {
        // The fallback timer and the fade animation both read this value.
        assert_eq!(SURFACE_FADE, Duration::from_millis(200));
        assert!(FRAME < SURFACE_FADE);
    }
}
