// SPDX-License-Identifier: MPL-2.0
//! Light/Dark theme management.
//!
//! The active [`ThemeMode`] is part of the persisted preference pair and is
//! the single presentation signal observed by every styled widget: the root
//! application derives its Iced theme and its [`ColorScheme`] from the same
//! mode, so the persisted value and the rendered appearance cannot drift
//! apart within a frame.

use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// The opposite mode. Toggling twice returns to the original value.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// Detects the system appearance for first launches with no stored
    /// preference. Falls back to dark (the site's native look) when the
    /// platform cannot report one.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => ThemeMode::Light,
            _ => ThemeMode::Dark,
        }
    }
}

/// Color palette for one appearance.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    pub background: Color,
    pub surface: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub accent: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: palette::INK_900,
            surface: palette::INK_800,
            text_primary: palette::MIST_100,
            text_secondary: palette::MIST_300,
            accent: palette::ACCENT_400,
        }
    }

    #[must_use]
    pub fn light() -> Self {
        Self {
            background: palette::PAPER_100,
            surface: palette::PAPER_200,
            text_primary: palette::SLATE_900,
            text_secondary: palette::SLATE_600,
            accent: palette::ACCENT_600,
        }
    }

    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggled_flips_between_modes() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    }

    #[test]
    fn toggling_twice_is_identity() {
        for mode in [ThemeMode::Dark, ThemeMode::Light] {
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }

    #[test]
    fn default_mode_is_dark() {
        assert!(ThemeMode::default().is_dark());
    }

    #[test]
    fn dark_scheme_has_dark_background() {
        let scheme = ColorScheme::dark();
        assert!(scheme.background.r < 0.2);
    }

    #[test]
    fn light_scheme_has_light_background() {
        let scheme = ColorScheme::light();
        assert!(scheme.background.r > 0.9);
    }

    #[test]
    fn detect_does_not_panic() {
        // System dependent; only verify totality.
        let _ = ThemeMode::detect();
    }
}
