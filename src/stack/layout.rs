// SPDX-License-Identifier: MPL-2.0
//! Per-card layout attributes for the stack presentation.
//!
//! [`card_attributes`] is a pure function from the widget's navigation and
//! reveal state to the visual attributes of every card: fan-out offsets,
//! rotation, stacking order, and the sliding three-card visible window.
//! Rotation randomness lives in [`RotationSeeds`], generated once per
//! widget instance and held for its lifetime so the fan never jitters
//! between renders.

use crate::config::{
    CARD_FAN_STEP, CARD_SHIFT, DEFAULT_ROTATION_DEGREES, MAX_ROTATION_DEGREES,
    MIN_ROTATION_DEGREES, ROTATION_SEED_COUNT, VISIBLE_WINDOW,
};
use rand::Rng;
use std::collections::BTreeSet;

/// Five rotation angles, in degrees, fixed at widget construction.
///
/// Cards index into the seeds cyclically (`seed[i % 5]`), so stacks with
/// more than five images reuse angles. Odd seeds lean one way and even
/// seeds the other, which keeps the fan visually balanced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationSeeds([f32; ROTATION_SEED_COUNT]);

impl RotationSeeds {
    /// Draws fresh seeds: magnitudes uniform in
    /// [`MIN_ROTATION_DEGREES`, `MAX_ROTATION_DEGREES`), sign alternating
    /// by index (even positive, odd negative).
    #[must_use]
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let mut angles = [0.0; ROTATION_SEED_COUNT];
        for (i, angle) in angles.iter_mut().enumerate() {
            let magnitude = rng.random_range(MIN_ROTATION_DEGREES..MAX_ROTATION_DEGREES);
            *angle = if i % 2 == 1 { -magnitude } else { magnitude };
        }
        Self(angles)
    }

    /// Builds seeds from explicit angles. Used by tests and callers that
    /// want a reproducible fan.
    #[must_use]
    pub fn from_angles(angles: [f32; ROTATION_SEED_COUNT]) -> Self {
        Self(angles)
    }

    /// Returns the angle for card `index`, reusing seeds cyclically.
    #[must_use]
    pub fn angle(&self, index: usize) -> f32 {
        self.0[index % ROTATION_SEED_COUNT]
    }
}

/// Rotation used before seeds are available: a fixed alternating fan.
#[must_use]
pub fn default_rotation(index: usize) -> f32 {
    if index % 2 == 1 {
        -DEFAULT_ROTATION_DEGREES
    } else {
        DEFAULT_ROTATION_DEGREES
    }
}

/// Visual attributes of a single card in the stack.
#[derive(Debug, Clone, PartialEq)]
pub struct CardAttributes {
    /// Position of the card within the image sequence.
    pub index: usize,
    /// Vertical fan-out offset from the top of the stack, in pixels.
    pub top_offset: f32,
    /// Rotation applied to the card, in degrees.
    pub rotation_degrees: f32,
    /// Horizontal shift, in pixels; negative is left.
    pub translate_x: f32,
    /// Stacking order; the first card carries the highest value.
    pub z_index: usize,
    /// Whether the card falls inside the sliding visible window.
    pub visible: bool,
    /// Whether this card carries the caption overlay.
    pub caption_visible: bool,
    /// Whether the entrance reveal has reached this card.
    pub entrance_active: bool,
}

/// Computes the attributes of every card for the current widget state.
///
/// Pure: same inputs, same output; an empty stack yields an empty
/// sequence. `current_index` anchors the visible window; `revealed`
/// drives the one-shot entrance flags; absent `seeds` fall back to the
/// fixed alternating fan.
#[must_use]
pub fn card_attributes(
    count: usize,
    current_index: usize,
    revealed: &BTreeSet<usize>,
    seeds: Option<&RotationSeeds>,
) -> Vec<CardAttributes> {
    (0..count)
        .map(|i| {
            let rotation_degrees = match seeds {
                Some(seeds) => seeds.angle(i),
                None => default_rotation(i),
            };
            let translate_x = if i % 2 == 1 { CARD_SHIFT } else { -CARD_SHIFT };

            CardAttributes {
                index: i,
                top_offset: i as f32 * CARD_FAN_STEP,
                rotation_degrees,
                translate_x,
                z_index: count - i,
                visible: i >= current_index && i < current_index + VISIBLE_WINDOW,
                caption_visible: i == current_index,
                entrance_active: revealed.contains(&i),
            }
        })
        .collect()
}
