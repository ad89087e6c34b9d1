// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! All state mutations run synchronously inside the handlers below; the one
//! exception is translation loading, whose continuation arrives back here as
//! [`Message::TranslationsLoaded`] and is gated by the generation counter.

use super::{persistence, Message, Screen};
use crate::config::PreferenceStore;
use crate::i18n::table::Table;
use crate::i18n::I18n;
use crate::ui::breakpoint::Breakpoint;
use crate::ui::navbar::{self, Event as NavbarEvent};
use iced::{Size, Task};
use unic_langid::LanguageIdentifier;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub prefs: &'a mut PreferenceStore,
    pub screen: &'a mut Screen,
    pub menu_open: &'a mut bool,
    pub window_size: &'a mut Size,
    /// Sequence number of the most recent locale-switch request. A load
    /// result is installed only when its tag matches this value, making the
    /// last-requested switch the winner regardless of completion order.
    pub table_generation: &'a mut u64,
}

impl UpdateContext<'_> {
    #[must_use]
    pub fn breakpoint(&self) -> Breakpoint {
        Breakpoint::classify(self.window_size.width)
    }
}

/// Single update entrypoint dispatched from `App::update`.
pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(message) => handle_navbar(ctx, message),
        Message::WindowResized(size) => {
            handle_window_resized(ctx, size);
            Task::none()
        }
        Message::TranslationsLoaded { generation, table } => {
            handle_translations_loaded(ctx, generation, table);
            Task::none()
        }
    }
}

fn handle_navbar(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    let breakpoint = ctx.breakpoint();
    match navbar::update(message, ctx.menu_open, breakpoint) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::Navigate(screen) => {
            *ctx.screen = screen;
            Task::none()
        }
        NavbarEvent::SwitchLanguage(locale) => switch_language(ctx, locale),
        NavbarEvent::ToggleTheme => {
            persistence::apply_theme_toggle(ctx.prefs);
            Task::none()
        }
    }
}

/// Switches the display language. A request for the already-active locale is
/// a no-op; otherwise the preference updates synchronously and the table
/// load runs asynchronously under a fresh generation tag.
fn switch_language(ctx: &mut UpdateContext<'_>, locale: LanguageIdentifier) -> Task<Message> {
    if *ctx.prefs.locale() == locale {
        return Task::none();
    }

    *ctx.table_generation += 1;
    persistence::apply_language_change(ctx.prefs, *ctx.table_generation, locale)
}

/// Stores the new viewport size and enforces the menu invariant: any size
/// that classifies above mobile forces the overlay closed.
pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) {
    *ctx.window_size = size;
    if !ctx.breakpoint().is_mobile() {
        *ctx.menu_open = false;
    }
}

fn handle_translations_loaded(ctx: &mut UpdateContext<'_>, generation: u64, table: Table) {
    if generation != *ctx.table_generation {
        // Superseded by a later switch; the later load owns the table.
        return;
    }
    ctx.i18n.install(table);
}
