// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Subtle framed card for the preview and result surfaces.
pub fn card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        border: Border {
            color: theme.extended_palette().background.strong.color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Pill-shaped badge in the given species color.
pub fn badge(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            color,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}
