// SPDX-License-Identifier: MPL-2.0
//! `iced_stack` renders a small stack of overlapping images as a single
//! interactive control that expands, on activation, into a full-window
//! review surface listing every image with a caption.
//!
//! The widget's logic lives in [`stack`] as toolkit-agnostic state
//! machines and pure layout; [`ui`] renders them with Iced widgets; and
//! [`app`] is a demo showcase exercising every size variant.

#![doc(html_root_url = "https://docs.rs/iced_stack/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod stack;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
