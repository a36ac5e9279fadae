// SPDX-License-Identifier: MPL-2.0
//! Reusable inline error display.
//!
//! Renders a short title and message with a severity-keyed accent color and
//! an optional action button (e.g. "Choose image…" after a validation nudge).

use crate::ui::design_tokens::{palette, radius, spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, container, text, Column, Container, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Severity level determines the accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorSeverity {
    /// The operation failed (red).
    #[default]
    Error,
    /// A nudge; nothing is broken yet (amber).
    Warning,
}

impl ErrorSeverity {
    pub fn color(&self) -> Color {
        match self {
            ErrorSeverity::Error => palette::ERROR_500,
            ErrorSeverity::Warning => palette::WARNING_500,
        }
    }
}

/// Configuration for the error display.
#[derive(Debug, Clone)]
pub struct ErrorDisplay<Message> {
    severity: ErrorSeverity,
    title: Option<String>,
    message: Option<String>,
    action_label: Option<String>,
    action_message: Option<Message>,
}

impl<Message> Default for ErrorDisplay<Message> {
    fn default() -> Self {
        Self {
            severity: ErrorSeverity::default(),
            title: None,
            message: None,
            action_label: None,
            action_message: None,
        }
    }
}

impl<Message: Clone + 'static> ErrorDisplay<Message> {
    pub fn new(severity: ErrorSeverity) -> Self {
        Self {
            severity,
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the action button label and message.
    pub fn action(mut self, label: impl Into<String>, message: Message) -> Self {
        self.action_label = Some(label.into());
        self.action_message = Some(message);
        self
    }

    pub fn view(self) -> Element<'static, Message> {
        let accent_color = self.severity.color();

        let mut content = Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill);

        if let Some(title_text) = self.title {
            let title = Text::new(title_text)
                .size(typography::TITLE_SM)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(accent_color),
                });
            content = content.push(title);
        }

        if let Some(message_text) = self.message {
            content = content.push(Text::new(message_text).size(typography::BODY));
        }

        if let (Some(label), Some(msg)) = (self.action_label, self.action_message) {
            let action_btn = button(Text::new(label))
                .on_press(msg)
                .style(button_styles::secondary);
            content = content.push(
                Container::new(action_btn)
                    .padding(spacing::XS)
                    .align_x(alignment::Horizontal::Center),
            );
        }

        Container::new(content)
            .width(Length::Fill)
            .padding(spacing::MD)
            .style(move |theme: &Theme| container::Style {
                background: Some(iced::Background::Color(
                    theme.extended_palette().background.weak.color,
                )),
                border: iced::Border {
                    color: accent_color,
                    width: 1.0,
                    radius: radius::MD.into(),
                },
                text_color: Some(theme.palette().text),
                ..Default::default()
            })
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    enum TestMessage {
        ChooseFile,
    }

    #[test]
    fn severity_colors_are_distinct() {
        assert_ne!(
            ErrorSeverity::Error.color(),
            ErrorSeverity::Warning.color()
        );
    }

    #[test]
    fn builder_collects_all_parts() {
        let display: ErrorDisplay<TestMessage> = ErrorDisplay::new(ErrorSeverity::Warning)
            .title("No file selected.")
            .message("Pick an image first.")
            .action("Choose image…", TestMessage::ChooseFile);

        assert_eq!(display.severity, ErrorSeverity::Warning);
        assert_eq!(display.title, Some("No file selected.".to_string()));
        assert_eq!(display.message, Some("Pick an image first.".to_string()));
        assert_eq!(display.action_label, Some("Choose image…".to_string()));
    }

    #[test]
    fn default_severity_is_error() {
        let display: ErrorDisplay<TestMessage> = ErrorDisplay::default();
        assert_eq!(display.severity, ErrorSeverity::Error);
    }
}
