// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the pipeline endpoint.
//!
//! The whole contract is one call: POST the selected image as multipart form
//! data (single part, field name `"file"`) and decode the JSON body. Any
//! transport problem, timeout, or non-success status collapses into
//! [`Error::Transport`]; a 2xx with an undecodable body is [`Error::Parse`].

pub mod response;

pub use response::{BadgeKind, ClassificationResult, CountsResult, PipelineResult};

use crate::error::{Error, Result};
use crate::media::SelectedFile;
use std::time::Duration;
use tracing::{debug, warn};

/// Form field the backend expects the upload under.
const FILE_FIELD: &str = "file";

/// Client for one configured pipeline endpoint.
///
/// The underlying HTTP client is built per request, with the configured
/// timeout so a hung request can never leave the UI disabled indefinitely.
#[derive(Debug, Clone)]
pub struct PipelineClient {
    endpoint: String,
    timeout: Duration,
}

impl PipelineClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submits the file and returns the parsed response.
    ///
    /// Issues exactly one request; retrying is the user's decision.
    pub async fn run_pipeline(&self, file: &SelectedFile) -> Result<PipelineResult> {
        let bytes = std::fs::read(&file.path)?;
        debug!(
            endpoint = %self.endpoint,
            file = %file.file_name,
            size = bytes.len(),
            "submitting image to pipeline"
        );

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("Fishfoto/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Transport(e.to_string()))?;

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file.file_name.clone())
            .mime_str(&file.mime_type)
            .map_err(|e| Error::Transport(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part(FILE_FIELD, part);

        let response = client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // The body is never parsed on failure; it is only logged.
            let body = response.text().await.unwrap_or_default();
            warn!(%status, body = %body, "pipeline returned a failure status");
            return Err(Error::Transport(format!("HTTP status {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, "pipeline response was not valid JSON");
            Error::Parse(e.to_string())
        })
    }
}
