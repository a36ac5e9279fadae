// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components.
//!
//! - [`error_display`] - Inline error presentation with severity levels and
//!   an optional action button
//! - [`result_panel`] - Rendering of a parsed pipeline response

pub mod error_display;
pub mod result_panel;
