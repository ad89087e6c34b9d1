// SPDX-License-Identifier: MPL-2.0
//! In-memory preference state with write-through persistence.
//!
//! One store instance exists per application and is passed explicitly to the
//! code that needs it; tests construct a fresh store over a temporary
//! directory per case. Every mutation rewrites the full preference pair so
//! the persisted file can never hold a locale from one session and a theme
//! from another.

use super::{Config, GeneralConfig};
use crate::i18n::table;
use crate::ui::theming::ThemeMode;
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

/// The persisted preference pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Preference {
    /// The locale the user selected. Stays as selected even when the
    /// matching translation table failed to load and display text fell back
    /// to the default locale.
    pub locale: LanguageIdentifier,
    pub theme: ThemeMode,
}

/// Owns the active [`Preference`] and writes it through on every change.
#[derive(Debug)]
pub struct PreferenceStore {
    prefs: Preference,
    /// Explicit config directory; `None` resolves through
    /// [`crate::app::paths`] (CLI flag, environment, platform default).
    config_dir: Option<PathBuf>,
}

impl PreferenceStore {
    /// Initializes the store from persisted storage, exactly once per
    /// process. Missing values fall back to the default locale and the
    /// detected system appearance.
    #[must_use]
    pub fn load(config_dir: Option<PathBuf>) -> Self {
        let config = super::load_from_dir(config_dir.as_deref());

        let locale = config
            .general
            .language
            .as_deref()
            .and_then(|code| code.parse().ok())
            .unwrap_or_else(table::default_locale);
        let theme = config.general.theme_mode.unwrap_or_else(ThemeMode::detect);

        Self {
            prefs: Preference { locale, theme },
            config_dir,
        }
    }

    #[must_use]
    pub fn get(&self) -> &Preference {
        &self.prefs
    }

    #[must_use]
    pub fn locale(&self) -> &LanguageIdentifier {
        &self.prefs.locale
    }

    #[must_use]
    pub fn theme(&self) -> ThemeMode {
        self.prefs.theme
    }

    /// Records a new locale selection and persists the full pair.
    pub fn set_locale(&mut self, locale: &LanguageIdentifier) {
        if self.prefs.locale == *locale {
            return;
        }
        self.prefs.locale = locale.clone();
        self.persist();
    }

    /// Records a new theme and persists the full pair. The presentation
    /// layer reads the theme back from this store, so by the time this
    /// returns, no observer can see a stale appearance.
    pub fn set_theme(&mut self, theme: ThemeMode) {
        if self.prefs.theme == theme {
            return;
        }
        self.prefs.theme = theme;
        self.persist();
    }

    /// Applies a session-only locale override (the `--lang` flag) without
    /// touching persisted storage.
    pub fn set_session_locale(&mut self, locale: LanguageIdentifier) {
        self.prefs.locale = locale;
    }

    fn persist(&self) {
        let config = Config {
            general: GeneralConfig {
                language: Some(self.prefs.locale.to_string()),
                theme_mode: Some(self.prefs.theme),
            },
        };

        if let Err(error) = super::save_to_dir(&config, self.config_dir.as_deref()) {
            log::warn!("failed to persist preferences: {error}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn fresh_store_uses_the_default_locale() {
        let dir = tempdir().expect("temp dir");
        let store = PreferenceStore::load(Some(dir.path().to_path_buf()));
        assert_eq!(*store.locale(), table::default_locale());
    }

    #[test]
    fn set_locale_survives_a_reload() {
        let dir = tempdir().expect("temp dir");
        let ja: LanguageIdentifier = "ja".parse().unwrap();

        let mut store = PreferenceStore::load(Some(dir.path().to_path_buf()));
        store.set_locale(&ja);

        let reloaded = PreferenceStore::load(Some(dir.path().to_path_buf()));
        assert_eq!(*reloaded.locale(), ja);
    }

    #[test]
    fn set_theme_survives_a_reload() {
        let dir = tempdir().expect("temp dir");

        let mut store = PreferenceStore::load(Some(dir.path().to_path_buf()));
        let flipped = store.theme().toggled();
        store.set_theme(flipped);

        let reloaded = PreferenceStore::load(Some(dir.path().to_path_buf()));
        assert_eq!(reloaded.theme(), flipped);
    }

    #[test]
    fn both_fields_persist_together() {
        let dir = tempdir().expect("temp dir");
        let ja: LanguageIdentifier = "ja".parse().unwrap();

        let mut store = PreferenceStore::load(Some(dir.path().to_path_buf()));
        store.set_locale(&ja);
        store.set_theme(ThemeMode::Light);

        let reloaded = PreferenceStore::load(Some(dir.path().to_path_buf()));
        assert_eq!(*reloaded.locale(), ja);
        assert_eq!(reloaded.theme(), ThemeMode::Light);
    }

    #[test]
    fn unavailable_locale_is_still_recorded() {
        // Selecting a locale with no translation table keeps the selection;
        // only the displayed table falls back.
        let dir = tempdir().expect("temp dir");
        let fr: LanguageIdentifier = "fr".parse().unwrap();

        let mut store = PreferenceStore::load(Some(dir.path().to_path_buf()));
        store.set_locale(&fr);

        let reloaded = PreferenceStore::load(Some(dir.path().to_path_buf()));
        assert_eq!(*reloaded.locale(), fr);
    }

    #[test]
    fn session_locale_is_not_persisted() {
        let dir = tempdir().expect("temp dir");
        let ja: LanguageIdentifier = "ja".parse().unwrap();

        let mut store = PreferenceStore::load(Some(dir.path().to_path_buf()));
        store.set_session_locale(ja.clone());
        assert_eq!(*store.locale(), ja);

        let reloaded = PreferenceStore::load(Some(dir.path().to_path_buf()));
        assert_eq!(*reloaded.locale(), table::default_locale());
    }

    #[test]
    fn setting_the_same_locale_is_a_no_op() {
        let dir = tempdir().expect("temp dir");
        let mut store = PreferenceStore::load(Some(dir.path().to_path_buf()));

        let before = store.get().clone();
        let locale = before.locale.clone();
        store.set_locale(&locale);
        assert_eq!(*store.get(), before);
    }
}
