// SPDX-License-Identifier: MPL-2.0
//! Internationalization support via Fluent.
//!
//! Translations live in `assets/i18n/*.ftl`, one file per locale, and are
//! embedded into the binary at build time.

pub mod fluent;

pub use fluent::I18n;
