// SPDX-License-Identifier: MPL-2.0
//! User interface building blocks.
//!
//! Follows the Elm-style "state down, messages up" pattern:
//!
//! - [`components`] - Reusable UI components (error display, result panel)
//! - [`widgets`] - Custom Iced widgets (animated spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod components;
pub mod design_tokens;
pub mod styles;
pub mod widgets;
