// SPDX-License-Identifier: MPL-2.0
//! Embedded translation tables, one JSON tree per locale.
//!
//! Tables are immutable once loaded and are replaced wholesale on locale
//! change; nothing in the crate mutates a table in place.

use crate::error::{Result, TranslationError};
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Locale whose table backs every other locale on load failure.
pub const DEFAULT_LOCALE: &str = "en";

/// One node of a translation tree: either a localized string or a subtree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Leaf(String),
    Branch(HashMap<String, Node>),
}

/// A full translation tree for one locale, keyed by path segment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table {
    root: HashMap<String, Node>,
}

impl Table {
    /// Looks up a top-level segment.
    #[must_use]
    pub fn get(&self, segment: &str) -> Option<&Node> {
        self.root.get(segment)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

/// The parsed default locale.
#[must_use]
pub fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE.parse().unwrap()
}

/// Locales with an embedded table, in asset order.
#[must_use]
pub fn available_locales() -> Vec<LanguageIdentifier> {
    let mut locales = Vec::new();
    for file in Asset::iter() {
        if let Some(locale_str) = file.as_ref().strip_suffix(".json") {
            if let Ok(locale) = locale_str.parse::<LanguageIdentifier>() {
                locales.push(locale);
            }
        }
    }
    locales
}

/// Loads the table for `locale`, failing when no embedded resource exists
/// or the resource is not a valid string tree.
pub fn load(locale: &LanguageIdentifier) -> Result<Table> {
    let filename = format!("{locale}.json");
    let content = Asset::get(&filename)
        .ok_or_else(|| TranslationError::MissingTable(locale.to_string()))?;

    let table = serde_json::from_slice(content.data.as_ref()).map_err(|err| {
        TranslationError::InvalidTable {
            locale: locale.to_string(),
            detail: err.to_string(),
        }
    })?;

    Ok(table)
}

/// Loads the table for `locale`, silently substituting the default locale's
/// table when loading fails. The requested locale stays recorded as active
/// in the preference store; only the displayed text falls back.
#[must_use]
pub fn load_or_default(locale: &LanguageIdentifier) -> Table {
    match load(locale) {
        Ok(table) => table,
        Err(err) => {
            let default = default_locale();
            if *locale == default {
                log::error!("default translation table unavailable: {err}");
                return Table::default();
            }

            log::warn!("falling back to '{DEFAULT_LOCALE}' after load failure: {err}");
            load(&default).unwrap_or_else(|err| {
                log::error!("default translation table unavailable: {err}");
                Table::default()
            })
        }
    }
}
