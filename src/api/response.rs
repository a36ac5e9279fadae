// SPDX-License-Identifier: MPL-2.0
//! Response payloads returned by the pipeline endpoint.
//!
//! The service has been observed answering with three different shapes on
//! the same route. Rather than guessing one canonical schema, the result is
//! an untagged union selected by which fields are present, tried from the
//! most specific shape down to bare JSON.

use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::Deserialize;

/// Prefix a browser-oriented deployment may put in front of the overlay.
const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Detection counts for a whole photo, with an optional annotated overlay.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountsResult {
    pub total_fish: u64,
    pub num_kilu: u64,
    pub num_raim: u64,
    #[serde(default)]
    pub image_base64: Option<String>,
}

impl CountsResult {
    /// Decodes the overlay into PNG bytes, tolerating a data-URI prefix.
    ///
    /// `Ok(None)` when the response carried no overlay at all.
    pub fn overlay_png(&self) -> Result<Option<Vec<u8>>> {
        let Some(encoded) = &self.image_base64 else {
            return Ok(None);
        };
        let raw = encoded.strip_prefix(DATA_URI_PREFIX).unwrap_or(encoded);
        BASE64
            .decode(raw.trim())
            .map(Some)
            .map_err(|e| Error::Parse(e.to_string()))
    }
}

/// A single-label verdict for a whole photo.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClassificationResult {
    pub predicted_class: String,
    /// Confidence fraction in `[0, 1]`.
    pub confidence: f64,
}

/// Visual category of the classification badge, keyed by the label value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    Kilu,
    Raim,
    Other,
}

impl ClassificationResult {
    /// Confidence as a whole percentage, rounded to the nearest integer.
    pub fn confidence_percent(&self) -> i64 {
        (self.confidence * 100.0).round() as i64
    }

    /// Badge label, e.g. `kilu (84%)`.
    pub fn badge_text(&self) -> String {
        format!("{} ({}%)", self.predicted_class, self.confidence_percent())
    }

    pub fn badge_kind(&self) -> BadgeKind {
        match self.predicted_class.as_str() {
            "kilu" => BadgeKind::Kilu,
            "raim" => BadgeKind::Raim,
            _ => BadgeKind::Other,
        }
    }
}

/// Parsed pipeline response.
///
/// Variants are tried in declaration order, so a payload only lands in
/// `Raw` when it matches neither known schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PipelineResult {
    Counts(CountsResult),
    Classification(ClassificationResult),
    Raw(serde_json::Value),
}

impl PipelineResult {
    /// Pretty-printed JSON for the fallback rendering path.
    pub fn raw_pretty(value: &serde_json::Value) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
    }
}
