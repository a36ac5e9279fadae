// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window is a single column: header, file picker, preview, submit
//! trigger, then whichever of the result or error surfaces applies. All of
//! it is derived from `App` state; nothing here mutates anything.

use super::{App, Message, Phase};
use crate::ui::components::error_display::{ErrorDisplay, ErrorSeverity};
use crate::ui::components::result_panel;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::animated_spinner::AnimatedSpinner;
use iced::widget::{button, image, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

pub fn view(app: &App) -> Element<'_, Message> {
    let mut content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(header(app))
        .push(picker_row(app));

    if let Some(preview) = &app.preview {
        content = content.push(preview_card(preview));
    }

    content = content.push(submit_button(app));

    if app.phase == Phase::Success {
        if let Some(result) = &app.result {
            content = content.push(result_panel::view(
                &app.i18n,
                result,
                app.overlay.as_ref(),
            ));
        }
    }

    if let Some(error) = &app.error {
        content = content.push(error_surface(app, error));
    }

    content = content.push(
        Text::new(app.i18n.tr("picker-drop-hint"))
            .size(typography::CAPTION)
            .color(palette::GRAY_400),
    );

    Container::new(Container::new(content).max_width(sizing::PANEL_MAX_WIDTH))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::LG)
        .into()
}

fn header(app: &App) -> Element<'_, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(app.i18n.tr("window-title"))
                .size(typography::TITLE_LG)
                .color(palette::PRIMARY_600),
        )
        .push(
            Text::new(app.i18n.tr("app-tagline"))
                .size(typography::BODY)
                .color(palette::GRAY_400),
        )
        .into()
}

fn picker_row(app: &App) -> Element<'_, Message> {
    let picker = button(Text::new(app.i18n.tr("picker-button")))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::secondary)
        .on_press(Message::OpenFileDialog);

    let file_label = match &app.selected {
        Some(file) => Text::new(file.file_name.clone())
            .size(typography::BODY_SM)
            .color(palette::GRAY_700),
        None => Text::new(app.i18n.tr("picker-no-file"))
            .size(typography::BODY_SM)
            .color(palette::GRAY_400),
    };

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(picker)
        .push(file_label)
        .into()
}

fn preview_card(preview: &crate::media::PreviewImage) -> Element<'_, Message> {
    let thumbnail =
        image(preview.handle().clone()).height(Length::Fixed(sizing::PREVIEW_MAX_HEIGHT));

    let caption = Text::new(preview.caption())
        .size(typography::CAPTION)
        .color(palette::GRAY_400);

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .push(thumbnail)
            .push(caption),
    )
    .padding(spacing::XS)
    .style(styles::container::card)
    .into()
}

/// The submit trigger. While a request is in flight the button is disabled
/// (no `on_press`) and its label is swapped for the in-progress indicator;
/// both revert as soon as the request resolves.
fn submit_button(app: &App) -> Element<'_, Message> {
    let submitting = app.phase == Phase::Submitting;

    let label_key = if submitting {
        "submit-button-busy"
    } else {
        "submit-button"
    };

    let mut label_row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(app.i18n.tr(label_key)).size(typography::BODY));

    if submitting {
        label_row = label_row.push(
            AnimatedSpinner::new(palette::GRAY_400, app.spinner_rotation, sizing::SPINNER)
                .into_element(),
        );
    }

    let mut trigger = button(label_row)
        .padding([spacing::XS, spacing::XL])
        .style(styles::button::primary);

    if !submitting {
        trigger = trigger.on_press(Message::Submit);
    }

    trigger.into()
}

fn error_surface<'a>(app: &'a App, error: &'a crate::error::Error) -> Element<'a, Message> {
    let message = app.i18n.tr(error.i18n_key());

    if error.is_validation() {
        // A nudge, not a failure: amber, with a shortcut to the picker.
        ErrorDisplay::new(ErrorSeverity::Warning)
            .message(message)
            .action(app.i18n.tr("error-action-choose"), Message::OpenFileDialog)
            .view()
    } else {
        ErrorDisplay::new(ErrorSeverity::Error)
            .title(app.i18n.tr("error-title"))
            .message(message)
            .view()
    }
}
