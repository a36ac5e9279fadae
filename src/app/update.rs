// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! All failures end here: they are converted to an inline error surface and
//! the widget is left interactive. Nothing retries, nothing propagates.

use super::{App, Message, Phase};
use crate::api::PipelineResult;
use crate::error::{Error, Result};
use crate::media::{self, PreviewImage, SelectedFile, IMAGE_EXTENSIONS};
use iced::widget::image;
use iced::Task;
use std::path::PathBuf;
use tracing::warn;

/// Radians per 100 ms tick; one full turn in a bit over a second.
const SPINNER_STEP: f32 = 0.55;

pub fn handle(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::OpenFileDialog => open_file_dialog(),
        Message::FileSelected(None) => Task::none(),
        Message::FileSelected(Some(path)) => select_file(app, path),
        Message::PreviewLoaded(result) => preview_loaded(app, result),
        Message::Submit => submit(app),
        Message::UploadFinished(result) => upload_finished(app, result),
        Message::Tick(_) => tick(app),
    }
}

fn open_file_dialog() -> Task<Message> {
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .add_filter("Images", &IMAGE_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::FileSelected,
    )
}

/// Installs a new selection. The previous preview is released before the
/// replacement is created, and stale result/error surfaces are hidden.
pub(super) fn select_file(app: &mut App, path: PathBuf) -> Task<Message> {
    app.preview = None;
    app.result = None;
    app.overlay = None;
    app.error = None;
    app.selected = Some(SelectedFile::from_path(path.clone()));
    app.phase = Phase::Idle;

    Task::perform(
        async move { media::load_preview(&path) },
        Message::PreviewLoaded,
    )
}

fn preview_loaded(app: &mut App, result: Result<PreviewImage>) -> Task<Message> {
    match result {
        Ok(preview) => {
            app.preview = Some(preview);
            app.phase = Phase::PreviewReady;
        }
        Err(err) => {
            warn!(error = %err, "could not build a preview for the selected file");
            // A file that cannot be read cannot be submitted either.
            app.selected = None;
            app.error = Some(err);
            app.phase = Phase::Idle;
        }
    }
    Task::none()
}

fn submit(app: &mut App) -> Task<Message> {
    // The trigger is disabled while submitting; this guard is for
    // programmatic callers.
    if app.phase == Phase::Submitting {
        return Task::none();
    }

    let Some(file) = app.selected.clone() else {
        app.result = None;
        app.overlay = None;
        app.error = Some(Error::Validation("no file selected".to_string()));
        return Task::none();
    };

    app.phase = Phase::Submitting;
    app.error = None;
    app.result = None;
    app.overlay = None;
    app.spinner_rotation = 0.0;

    let client = app.client.clone();
    Task::perform(
        async move { client.run_pipeline(&file).await },
        Message::UploadFinished,
    )
}

fn upload_finished(app: &mut App, result: Result<PipelineResult>) -> Task<Message> {
    // Both arms leave `Submitting`, so the trigger is re-enabled and its
    // label restored regardless of the outcome.
    match result {
        Ok(result) => {
            app.overlay = decode_overlay(&result);
            app.result = Some(result);
            app.phase = Phase::Success;
        }
        Err(err) => {
            warn!(error = %err, "pipeline submission failed");
            app.error = Some(err);
            app.phase = Phase::Failed;
        }
    }
    Task::none()
}

fn tick(app: &mut App) -> Task<Message> {
    if app.phase == Phase::Submitting {
        app.spinner_rotation += SPINNER_STEP;
    }
    Task::none()
}

/// Counts still render when their overlay fails to decode; the overlay is
/// dropped and the failure goes to the log.
fn decode_overlay(result: &PipelineResult) -> Option<image::Handle> {
    let PipelineResult::Counts(counts) = result else {
        return None;
    };
    match counts.overlay_png() {
        Ok(Some(png)) => Some(image::Handle::from_bytes(png)),
        Ok(None) => None,
        Err(err) => {
            warn!(error = %err, "detection overlay could not be decoded");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::CountsResult;
    use tempfile::tempdir;

    fn write_test_png(dir: &std::path::Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let img = ::image::RgbaImage::from_pixel(2, 2, ::image::Rgba([10, 120, 140, 255]));
        img.save(&path).expect("failed to write test png");
        path
    }

    fn counts(image_base64: Option<&str>) -> PipelineResult {
        PipelineResult::Counts(CountsResult {
            total_fish: 12,
            num_kilu: 5,
            num_raim: 7,
            image_base64: image_base64.map(str::to_string),
        })
    }

    #[test]
    fn submit_without_file_shows_validation_and_stays_interactive() {
        let mut app = App::default();

        let _ = handle(&mut app, Message::Submit);

        assert_eq!(app.phase, Phase::Idle);
        assert!(matches!(app.error, Some(Error::Validation(_))));
        assert!(app.result.is_none());
    }

    #[test]
    fn dismissed_dialog_leaves_prior_state_untouched() {
        let mut app = App::default();
        app.error = Some(Error::Transport("HTTP status 500".into()));
        app.phase = Phase::Failed;

        let _ = handle(&mut app, Message::FileSelected(None));

        assert_eq!(app.phase, Phase::Failed);
        assert!(app.error.is_some());
    }

    #[test]
    fn selecting_a_file_hides_stale_result_and_error() {
        let mut app = App::default();
        app.result = Some(counts(None));
        app.error = Some(Error::Transport("HTTP status 500".into()));
        app.phase = Phase::Failed;

        let _ = handle(
            &mut app,
            Message::FileSelected(Some(PathBuf::from("/tmp/catch.png"))),
        );

        assert!(app.result.is_none());
        assert!(app.error.is_none());
        assert!(app.preview.is_none());
        assert_eq!(
            app.selected.as_ref().map(|f| f.file_name.as_str()),
            Some("catch.png")
        );
    }

    #[test]
    fn preview_loaded_marks_preview_ready() {
        let dir = tempdir().expect("temp dir");
        let path = write_test_png(dir.path(), "catch.png");
        let mut app = App::default();
        let _ = handle(&mut app, Message::FileSelected(Some(path.clone())));

        let preview = media::load_preview(&path).expect("preview loads");
        let _ = handle(&mut app, Message::PreviewLoaded(Ok(preview)));

        assert_eq!(app.phase, Phase::PreviewReady);
        assert!(app.preview.is_some());
    }

    #[test]
    fn preview_failure_clears_the_selection() {
        let mut app = App::default();
        let _ = handle(
            &mut app,
            Message::FileSelected(Some(PathBuf::from("/tmp/notes.txt"))),
        );

        let _ = handle(
            &mut app,
            Message::PreviewLoaded(Err(Error::Io("not an image".into()))),
        );

        assert!(app.selected.is_none());
        assert!(app.preview.is_none());
        assert!(matches!(app.error, Some(Error::Io(_))));
        assert_eq!(app.phase, Phase::Idle);
    }

    #[test]
    fn a_second_selection_supersedes_the_first_preview() {
        let dir = tempdir().expect("temp dir");
        let first = write_test_png(dir.path(), "first.png");
        let second = write_test_png(dir.path(), "second.png");
        let mut app = App::default();

        let _ = handle(&mut app, Message::FileSelected(Some(first.clone())));
        let preview = media::load_preview(&first).expect("preview loads");
        let _ = handle(&mut app, Message::PreviewLoaded(Ok(preview)));
        assert!(app.preview.is_some());

        // The old preview is dropped before the replacement arrives.
        let _ = handle(&mut app, Message::FileSelected(Some(second.clone())));
        assert!(app.preview.is_none());

        let preview = media::load_preview(&second).expect("preview loads");
        let _ = handle(&mut app, Message::PreviewLoaded(Ok(preview)));
        assert!(app.preview.is_some());
        assert_eq!(
            app.selected.as_ref().map(|f| f.file_name.as_str()),
            Some("second.png")
        );
    }

    #[test]
    fn submit_with_a_file_enters_submitting() {
        let dir = tempdir().expect("temp dir");
        let path = write_test_png(dir.path(), "catch.png");
        let mut app = App::default();
        let _ = handle(&mut app, Message::FileSelected(Some(path)));

        let _ = handle(&mut app, Message::Submit);

        assert_eq!(app.phase, Phase::Submitting);
        assert!(app.error.is_none());
        assert!(app.result.is_none());
    }

    #[test]
    fn submit_while_submitting_is_a_noop() {
        let dir = tempdir().expect("temp dir");
        let path = write_test_png(dir.path(), "catch.png");
        let mut app = App::default();
        let _ = handle(&mut app, Message::FileSelected(Some(path)));
        let _ = handle(&mut app, Message::Submit);
        assert_eq!(app.phase, Phase::Submitting);

        let _ = handle(&mut app, Message::Submit);
        assert_eq!(app.phase, Phase::Submitting);
        assert!(app.error.is_none());
    }

    #[test]
    fn upload_success_renders_counts_and_reenables_trigger() {
        let mut app = App::default();
        app.phase = Phase::Submitting;

        let _ = handle(&mut app, Message::UploadFinished(Ok(counts(None))));

        assert_eq!(app.phase, Phase::Success);
        assert!(app.result.is_some());
        // No image_base64 in the payload, so no overlay is shown.
        assert!(app.overlay.is_none());
    }

    #[test]
    fn upload_failure_shows_error_and_reenables_trigger() {
        let mut app = App::default();
        app.phase = Phase::Submitting;

        let _ = handle(
            &mut app,
            Message::UploadFinished(Err(Error::Transport("HTTP status 500".into()))),
        );

        assert_eq!(app.phase, Phase::Failed);
        assert!(app.result.is_none());
        assert!(matches!(app.error, Some(Error::Transport(_))));
    }

    #[test]
    fn overlay_is_decoded_when_counts_carry_an_image() {
        let mut app = App::default();
        app.phase = Phase::Submitting;

        let _ = handle(
            &mut app,
            Message::UploadFinished(Ok(counts(Some("aGVsbG8=")))),
        );

        assert_eq!(app.phase, Phase::Success);
        assert!(app.overlay.is_some());
    }

    #[test]
    fn corrupt_overlay_degrades_to_counts_only() {
        let mut app = App::default();
        app.phase = Phase::Submitting;

        let _ = handle(
            &mut app,
            Message::UploadFinished(Ok(counts(Some("!!! not base64 !!!")))),
        );

        assert_eq!(app.phase, Phase::Success);
        assert!(app.result.is_some());
        assert!(app.overlay.is_none());
    }

    #[test]
    fn tick_spins_only_while_submitting() {
        let mut app = App::default();
        let _ = handle(&mut app, Message::Tick(std::time::Instant::now()));
        assert_eq!(app.spinner_rotation, 0.0);

        app.phase = Phase::Submitting;
        let _ = handle(&mut app, Message::Tick(std::time::Instant::now()));
        assert!(app.spinner_rotation > 0.0);
    }
}
