// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the stack widget's components.

pub mod button;
pub mod container;
