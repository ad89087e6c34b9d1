// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::i18n::table::Table;
use crate::ui::navbar;
use iced::Size;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    /// The window reported a new size; recomputes the breakpoint.
    WindowResized(Size),
    /// An asynchronous translation table load finished. Only the result
    /// carrying the latest generation is installed; superseded loads are
    /// dropped on arrival.
    TranslationsLoaded { generation: u64, table: Table },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `en`, `ja`).
    /// Applies to the session only; it is never persisted.
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
