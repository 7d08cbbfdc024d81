// SPDX-License-Identifier: MPL-2.0
//! Widget views, styles, and the process-wide stylesheet.

pub mod design_tokens;
pub mod stack;
pub mod styles;
pub mod stylesheet;
pub mod theming;
