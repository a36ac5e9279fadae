// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::button;
use iced::{Background, Border, Shadow, Theme};

/// Primary action button (the submit trigger).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: palette::WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: Shadow::default(),
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: palette::WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: Shadow::default(),
            snap: true,
        },
        button::Status::Disabled => disabled_style(),
    }
}

/// Secondary button (the file picker).
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.weak.color;
    let background = match status {
        button::Status::Hovered => theme.extended_palette().background.strong.color,
        _ => base,
    };

    match status {
        button::Status::Disabled => disabled_style(),
        _ => button::Style {
            background: Some(Background::Color(background)),
            text_color: theme.palette().text,
            border: Border {
                color: palette::GRAY_200,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: Shadow::default(),
            snap: true,
        },
    }
}

/// Grayed-out, non-interactive look shared by every disabled state.
fn disabled_style() -> button::Style {
    button::Style {
        background: Some(Background::Color(palette::GRAY_200)),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: Shadow::default(),
        snap: true,
    }
}
