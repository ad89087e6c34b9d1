// SPDX-License-Identifier: MPL-2.0
//! Preference persistence logic for the locale and theme controllers.

use super::Message;
use crate::config::PreferenceStore;
use crate::i18n::table;
use iced::Task;
use unic_langid::LanguageIdentifier;

/// Records the newly selected locale and kicks off the table load.
///
/// The preference write happens synchronously, so the language toggle
/// reflects the user's intent before the table arrives; rendered text keeps
/// showing the previous table until the load completes. The returned task
/// carries `generation` so the caller can drop results superseded by a
/// later switch.
pub fn apply_language_change(
    prefs: &mut PreferenceStore,
    generation: u64,
    locale: LanguageIdentifier,
) -> Task<Message> {
    prefs.set_locale(&locale);

    Task::perform(
        async move { table::load_or_default(&locale) },
        move |table| Message::TranslationsLoaded { generation, table },
    )
}

/// Flips the theme and persists the pair. The rendered appearance is derived
/// from the store, so it matches the persisted value as soon as this returns.
pub fn apply_theme_toggle(prefs: &mut PreferenceStore) {
    prefs.set_theme(prefs.theme().toggled());
}
