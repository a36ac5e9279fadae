// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens.
//!
//! Tokens keep spacing on an 8px grid and colors in one place. Species
//! colors key the classification badge; everything else is shared chrome.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.45, 0.45);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand colors (sea-teal scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.28, 0.68, 0.64);
    pub const PRIMARY_500: Color = Color::from_rgb(0.16, 0.6, 0.56);
    pub const PRIMARY_600: Color = Color::from_rgb(0.11, 0.49, 0.46);

    // Species colors, used for the classification badge
    pub const KILU_500: Color = Color::from_rgb(0.16, 0.6, 0.56);
    pub const RAIM_500: Color = Color::from_rgb(0.33, 0.42, 0.72);
    pub const SPECIES_OTHER: Color = Color::from_rgb(0.45, 0.45, 0.45);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.78, 0.52, 0.05);
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const SPINNER: f32 = 18.0;
    pub const BUTTON_HEIGHT: f32 = 36.0;

    /// Tallest the local thumbnail is allowed to grow.
    pub const PREVIEW_MAX_HEIGHT: f32 = 260.0;

    /// Tallest the returned detection overlay is allowed to grow.
    pub const OVERLAY_MAX_HEIGHT: f32 = 320.0;

    pub const PANEL_MAX_WIDTH: f32 = 480.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const TITLE_LG: f32 = 24.0;
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radii
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}
