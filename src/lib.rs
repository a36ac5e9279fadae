// SPDX-License-Identifier: MPL-2.0
//! `fishfoto` is a small desktop uploader for the Fishfoto processing
//! pipeline, built with the Iced GUI framework.
//!
//! It covers one interaction from end to end: pick an image, preview it
//! locally, submit it to the configured pipeline endpoint as multipart form
//! data, and render whichever of the known JSON response shapes comes back.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
