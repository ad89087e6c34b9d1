// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Localized strings live in per-locale JSON trees embedded into the binary
//! and are addressed by dot-delimited keys (`"nav.home"`,
//! `"bio.research_1_title"`). The module provides:
//!
//! - loading with fallback to the default locale ([`table`])
//! - pure dotted-key resolution with key-echo on misses ([`resolver`])
//! - [`I18n`], the handle holding the currently displayed table

pub mod resolver;
pub mod table;

use table::Table;
use unic_langid::LanguageIdentifier;

/// Holds the translation table currently backing rendered text.
///
/// Which locale the user *selected* lives in the preference store; this type
/// only owns the loaded tree, which may be the default locale's content when
/// the selected locale failed to load.
#[derive(Debug, Clone)]
pub struct I18n {
    table: Table,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(&table::default_locale())
    }
}

impl I18n {
    /// Loads the table for `locale`, falling back to the default locale.
    #[must_use]
    pub fn new(locale: &LanguageIdentifier) -> Self {
        Self {
            table: table::load_or_default(locale),
        }
    }

    /// Replaces the active table wholesale.
    pub fn install(&mut self, table: Table) {
        self.table = table;
    }

    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Resolves a dotted key against the active table.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        resolver::resolve(key, &self.table)
    }
}

/// Picks the locale to display at startup.
///
/// A `--lang` override wins when it names an available locale; otherwise the
/// stored preference stands. There is deliberately no OS locale probe: the
/// stored preference is the only automatic source.
#[must_use]
pub fn resolve_startup_locale(
    cli_lang: Option<String>,
    stored: &LanguageIdentifier,
) -> LanguageIdentifier {
    if let Some(lang_str) = cli_lang {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if table::available_locales().contains(&lang) {
                return lang;
            }
        }
    }

    stored.clone()
}
