// SPDX-License-Identifier: MPL-2.0
//! Domain logic of the image stack: size resolution, card layout, the
//! entrance reveal, swipe navigation, and the review-surface lifecycle.
//!
//! Everything in this module is UI-toolkit-agnostic state and policy; the
//! widgets in [`crate::ui`] render it. The state machines communicate
//! through messages and effects so their transitions stay testable
//! without a running event loop.

pub mod gesture;
pub mod layout;
pub mod reveal;
pub mod review;
pub mod size;
pub mod timers;

pub use layout::{card_attributes, CardAttributes, RotationSeeds};
pub use size::{NamedRatio, Ratio, SizeConfig};

use iced::widget::image;

/// One image in the stack: pixels plus its accessibility and caption text.
///
/// Identity is positional; the widget never reorders or deduplicates the
/// sequence it is given.
#[derive(Debug, Clone, PartialEq)]
pub struct StackImage {
    /// Decoded image data (or a path-backed handle).
    pub handle: image::Handle,
    /// Alternative text for assistive technology.
    pub alt: String,
    /// Caption shown under the image in the review surface.
    pub caption: String,
}

impl StackImage {
    pub fn new(
        handle: image::Handle,
        alt: impl Into<String>,
        caption: impl Into<String>,
    ) -> Self {
        Self {
            handle,
            alt: alt.into(),
            caption: caption.into(),
        }
    }
}

/// Accessible label of the activation control: `"View {n} {subject}
/// image"` with a plural `images` whenever `n != 1` (including zero).
#[must_use]
pub fn activation_label(count: usize, subject: &str) -> String {
    if count == 1 {
        format!("View 1 {} image", subject)
    } else {
        format!("View {} {} images", count, subject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singular_label_for_one_image() {
        assert_eq!(activation_label(1, "Project"), "View 1 Project image");
    }

    #[test]
    fn plural_label_for_many_images() {
        assert_eq!(activation_label(3, "Garden"), "View 3 Garden images");
    }

    #[test]
    fn zero_images_is_plural() {
        assert_eq!(activation_label(0, "Project"), "View 0 Project images");
    }
}
