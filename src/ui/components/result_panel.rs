// SPDX-License-Identifier: MPL-2.0
//! Rendering of a parsed pipeline response.
//!
//! Pure mapping from payload shape to widgets: counts become a small table
//! with an optional detection overlay, a classification becomes a species
//! badge, and anything else is shown as formatted JSON.

use crate::api::{BadgeKind, ClassificationResult, CountsResult, PipelineResult};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{image, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Font, Length};

/// Renders the result surface for any of the three payload shapes.
pub fn view<Message: Clone + 'static>(
    i18n: &I18n,
    result: &PipelineResult,
    overlay: Option<&image::Handle>,
) -> Element<'static, Message> {
    let heading = Text::new(i18n.tr("result-heading"))
        .size(typography::TITLE_SM)
        .color(palette::GRAY_700);

    let body: Element<'static, Message> = match result {
        PipelineResult::Counts(counts) => counts_view(i18n, counts, overlay),
        PipelineResult::Classification(classification) => badge_view(classification),
        PipelineResult::Raw(value) => raw_view(value),
    };

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(heading)
        .push(body);

    Container::new(content)
        .width(Length::Fill)
        .max_width(sizing::PANEL_MAX_WIDTH)
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}

fn counts_view<Message: Clone + 'static>(
    i18n: &I18n,
    counts: &CountsResult,
    overlay: Option<&image::Handle>,
) -> Element<'static, Message> {
    let mut column = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(count_row(i18n.tr("result-total"), counts.total_fish))
        .push(count_row(i18n.tr("result-kilu"), counts.num_kilu))
        .push(count_row(i18n.tr("result-raim"), counts.num_raim));

    if let Some(handle) = overlay {
        let caption = Text::new(i18n.tr("result-overlay-caption"))
            .size(typography::CAPTION)
            .color(palette::GRAY_400);
        column = column
            .push(
                image(handle.clone())
                    .height(Length::Shrink)
                    .width(Length::Fill),
            )
            .push(caption);
    }

    column.into()
}

fn count_row<Message: Clone + 'static>(label: String, value: u64) -> Element<'static, Message> {
    Row::new()
        .spacing(spacing::MD)
        .push(
            Text::new(label)
                .size(typography::BODY)
                .width(Length::Fill),
        )
        .push(
            Text::new(value.to_string())
                .size(typography::BODY)
                .font(Font::MONOSPACE),
        )
        .width(Length::Fixed(220.0))
        .into()
}

fn badge_view<Message: Clone + 'static>(
    classification: &ClassificationResult,
) -> Element<'static, Message> {
    let label = Text::new(classification.badge_text())
        .size(typography::TITLE_SM)
        .color(palette::WHITE);

    Container::new(label)
        .padding([spacing::XS, spacing::LG])
        .style(styles::container::badge(badge_color(
            classification.badge_kind(),
        )))
        .into()
}

fn raw_view<Message: Clone + 'static>(value: &serde_json::Value) -> Element<'static, Message> {
    Container::new(
        text(PipelineResult::raw_pretty(value))
            .size(typography::BODY_SM)
            .font(Font::MONOSPACE),
    )
    .width(Length::Fill)
    .padding(spacing::XS)
    .into()
}

/// Species color for the classification badge.
fn badge_color(kind: BadgeKind) -> Color {
    match kind {
        BadgeKind::Kilu => palette::KILU_500,
        BadgeKind::Raim => palette::RAIM_500,
        BadgeKind::Other => palette::SPECIES_OTHER,
    }
}
