// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the navbar and the active page for the current breakpoint and
//! color scheme. Pages scroll; the navbar stays pinned above them.

use super::{Message, Screen};
use crate::config::PreferenceStore;
use crate::i18n::I18n;
use crate::ui::breakpoint::Breakpoint;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::pages::{self, PageContext};
use crate::ui::theming::ColorScheme;
use iced::widget::{container, scrollable, Column, Container};
use iced::{Element, Length, Size, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub prefs: &'a PreferenceStore,
    pub screen: Screen,
    pub menu_open: bool,
    pub window_size: Size,
}

/// Renders the full window: navbar on top, the active page below.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let breakpoint = Breakpoint::classify(ctx.window_size.width);
    let scheme = ColorScheme::for_mode(ctx.prefs.theme());

    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        active_locale: ctx.prefs.locale(),
        theme_mode: ctx.prefs.theme(),
        scheme,
        screen: ctx.screen,
        breakpoint,
        menu_open: ctx.menu_open,
    })
    .map(Message::Navbar);

    let page_ctx = PageContext {
        i18n: ctx.i18n,
        scheme,
        breakpoint,
    };
    let page: Element<'_, Message> = match ctx.screen {
        Screen::Home => pages::home::view(&page_ctx),
        Screen::Technology => pages::technology::view(&page_ctx),
        Screen::Theory => pages::theory::view(&page_ctx),
        Screen::Music => pages::music::view(&page_ctx),
        Screen::Contact => pages::contact::view(&page_ctx),
    };

    let content = Column::new()
        .push(navbar_view)
        .push(scrollable(page).height(Length::Fill).width(Length::Fill));

    let page_bg = scheme.background;
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(page_bg.into()),
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn every_screen_renders_at_mobile_and_desktop_widths() {
        let dir = tempdir().expect("temp dir");
        let prefs = PreferenceStore::load(Some(dir.path().to_path_buf()));
        let i18n = I18n::default();

        for screen in Screen::ALL {
            for width in [500.0, 1400.0] {
                let _element = view(ViewContext {
                    i18n: &i18n,
                    prefs: &prefs,
                    screen,
                    menu_open: false,
                    window_size: Size::new(width, 700.0),
                });
            }
        }
    }
}
