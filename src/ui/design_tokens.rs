// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens for the portfolio UI.
//!
//! - **Palette**: base colors for both appearances
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes and layout breakpoint-dependent widths
//! - **Typography**: font size scale
//! - **Radius**: border radii

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Dark appearance (the site's native look)
    /// Page background, `#181818`.
    pub const INK_900: Color = Color::from_rgb(0.094, 0.094, 0.094);
    /// Card and panel background, `#222222`.
    pub const INK_800: Color = Color::from_rgb(0.133, 0.133, 0.133);
    /// Primary text, a pale ice blue, `#d8f7ff`.
    pub const MIST_100: Color = Color::from_rgb(0.847, 0.969, 1.0);
    /// Secondary text.
    pub const MIST_300: Color = Color::from_rgb(0.68, 0.8, 0.84);

    // Light appearance
    pub const PAPER_100: Color = Color::from_rgb(0.98, 0.98, 0.97);
    pub const PAPER_200: Color = Color::from_rgb(0.93, 0.93, 0.92);
    pub const SLATE_900: Color = Color::from_rgb(0.12, 0.14, 0.15);
    pub const SLATE_600: Color = Color::from_rgb(0.33, 0.38, 0.4);

    // Accent (shared by both appearances)
    pub const ACCENT_400: Color = Color::from_rgb(0.38, 0.71, 0.84);
    pub const ACCENT_600: Color = Color::from_rgb(0.22, 0.51, 0.64);

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Fixed navigation bar height (matches the original 56px header).
    pub const NAVBAR_HEIGHT: f32 = 56.0;

    /// Maximum content width for wide pages (home, technology, music).
    pub const CONTENT_MAX_WIDTH: f32 = 1300.0;

    /// Maximum content width for reading-heavy pages (theory).
    pub const READING_MAX_WIDTH: f32 = 1000.0;

    /// Minimum width of a project card column.
    pub const CARD_MIN_WIDTH: f32 = 340.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page headings.
    pub const TITLE_LG: f32 = 34.0;

    /// Page headings at the mobile breakpoint.
    pub const TITLE_LG_MOBILE: f32 = 28.0;

    /// Section headings.
    pub const TITLE_MD: f32 = 24.0;

    /// Brand text in the navigation bar.
    pub const TITLE_SM: f32 = 20.0;

    /// Body text.
    pub const BODY: f32 = 16.0;

    /// Secondary labels, dates, captions.
    pub const CAPTION: f32 = 14.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(sizing::READING_MAX_WIDTH < sizing::CONTENT_MAX_WIDTH);
};
