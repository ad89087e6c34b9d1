// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the domains (localization, preferences,
//! navigation, viewport) and translates messages into side effects like
//! preference persistence or translation loading. Policy decisions (default
//! window size, the generation-counter rule for table loads) stay close to
//! the main update loop so user-facing behavior is easy to audit.

mod message;
pub mod paths;
mod persistence;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::PreferenceStore;
use crate::i18n::{self, I18n};
use iced::{window, Element, Size, Subscription, Task, Theme};

pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Root Iced application state bridging UI components, localization, and
/// persisted preferences.
#[derive(Debug)]
pub struct App {
    i18n: I18n,
    prefs: PreferenceStore,
    screen: Screen,
    /// Whether the mobile navigation overlay is open.
    menu_open: bool,
    /// Current viewport size. Seeded from the window settings at startup so
    /// layout code always has a real measurement, then kept current by the
    /// resize subscription.
    window_size: Size,
    /// Generation tag of the latest locale-switch request (see
    /// [`update::UpdateContext::table_generation`]).
    table_generation: u64,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from persisted preferences and CLI
    /// flags received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);

        let mut prefs = PreferenceStore::load(None);
        let startup_locale = i18n::resolve_startup_locale(flags.lang, prefs.locale());
        if startup_locale != *prefs.locale() {
            prefs.set_session_locale(startup_locale.clone());
        }

        let app = App {
            i18n: I18n::new(&startup_locale),
            prefs,
            screen: Screen::Home,
            menu_open: false,
            window_size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            table_generation: 0,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window.title")
    }

    fn theme(&self) -> Theme {
        if self.prefs.theme().is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            prefs: &mut self.prefs,
            screen: &mut self.screen,
            menu_open: &mut self.menu_open,
            window_size: &mut self.window_size,
            table_generation: &mut self.table_generation,
        };

        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            prefs: &self.prefs,
            screen: self.screen,
            menu_open: self.menu_open,
            window_size: self.window_size,
        })
    }
}
