// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::api::PipelineResult;
use crate::error::Error;
use crate::media::PreviewImage;
use std::path::PathBuf;
use std::time::Instant;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Open the system file dialog.
    OpenFileDialog,
    /// Result of the file dialog, or a file dropped onto the window.
    /// `None` means the dialog was dismissed.
    FileSelected(Option<PathBuf>),
    /// Result of reading and decoding the selected file.
    PreviewLoaded(Result<PreviewImage, Error>),
    /// The submit trigger was pressed.
    Submit,
    /// The pipeline request finished, one way or the other.
    UploadFinished(Result<PipelineResult, Error>),
    /// Periodic tick while a request is in flight (spinner animation).
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `et`, `en-US`).
    pub lang: Option<String>,
    /// Optional pipeline endpoint override. Takes precedence over the
    /// `endpoint_url` setting.
    pub endpoint: Option<String>,
    /// Optional image path to preselect on startup.
    pub file_path: Option<String>,
}
