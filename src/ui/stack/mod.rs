// SPDX-License-Identifier: MPL-2.0
//! The image-stack widget: trigger control, fanned card layers, and the
//! modal review surface.

pub mod component;
pub mod surface;

pub use component::{Message, Props, State};
