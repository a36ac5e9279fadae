// SPDX-License-Identifier: MPL-2.0
//! Application root state and the select → preview → submit → render loop.
//!
//! The `App` struct owns every surface the widget mutates (preview, result,
//! error, trigger) explicitly, so the whole interaction is a pure function
//! of this state. Policy decisions, like which phase re-enables the submit
//! trigger, live next to the update loop where they are easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::api::{PipelineClient, PipelineResult};
use crate::config;
use crate::error::Error;
use crate::i18n::I18n;
use crate::media::{PreviewImage, SelectedFile};
use iced::widget::image;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Duration;

/// Interaction phase of the upload widget.
///
/// Drives which surfaces are visible and whether the submit trigger is
/// enabled. `Submitting` is the only phase with the trigger disabled, which
/// is what keeps a second upload from starting while one is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// A file is selected and its thumbnail is on screen.
    PreviewReady,
    /// Exactly one request is in flight.
    Submitting,
    Success,
    Failed,
}

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    client: PipelineClient,
    phase: Phase,
    selected: Option<SelectedFile>,
    /// At most one preview is live; replacing it drops the predecessor.
    preview: Option<PreviewImage>,
    result: Option<PipelineResult>,
    /// Decoded detection overlay, present only for counts with an image.
    overlay: Option<image::Handle>,
    error: Option<Error>,
    spinner_rotation: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("phase", &self.phase)
            .field("selected", &self.selected.as_ref().map(|s| &s.file_name))
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 540;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 680;
pub const MIN_WINDOW_WIDTH: u32 = 440;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            client: PipelineClient::new(
                config::DEFAULT_ENDPOINT_URL,
                Duration::from_secs(config::DEFAULT_REQUEST_TIMEOUT_SECS),
            ),
            phase: Phase::default(),
            selected: None,
            preview: None,
            result: None,
            overlay: None,
            error: None,
            spinner_rotation: 0.0,
        }
    }
}

impl App {
    /// Initializes application state from settings and CLI flags, optionally
    /// preselecting an image passed on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "could not load settings; using defaults");
            config::Config::default()
        });
        let i18n = I18n::new(flags.lang.clone(), &config);

        let endpoint = flags
            .endpoint
            .unwrap_or_else(|| config.endpoint_url().to_string());
        let timeout = Duration::from_secs(config.request_timeout_secs());
        tracing::info!(%endpoint, "pipeline endpoint configured");

        let mut app = App {
            i18n,
            client: PipelineClient::new(endpoint, timeout),
            ..Self::default()
        };

        let task = match flags.file_path {
            Some(path) => update::select_file(&mut app, path.into()),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match &self.selected {
            Some(file) => format!("{} - {}", file.file_name, app_name),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::handle(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create(self.phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn title_is_plain_without_a_selection() {
        let app = App::default();
        assert_eq!(app.title(), "Fishfoto");
    }

    #[test]
    fn title_leads_with_the_selected_file() {
        let mut app = App::default();
        app.selected = Some(SelectedFile::from_path(PathBuf::from("/tmp/catch.png")));
        assert_eq!(app.title(), "catch.png - Fishfoto");
    }

    #[test]
    fn default_phase_is_idle() {
        let app = App::default();
        assert_eq!(app.phase, Phase::Idle);
        assert!(app.selected.is_none());
        assert!(app.preview.is_none());
    }
}
