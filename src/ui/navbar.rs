// SPDX-License-Identifier: MPL-2.0
//! Navigation bar with responsive layout.
//!
//! Above the mobile breakpoint the bar shows the brand and an inline row of
//! page links; at the mobile breakpoint the links collapse behind a
//! hamburger button into an overlay column. The overlay's open/closed state
//! is owned by the application and mutated only through [`update`], which
//! enforces the state machine: toggling only works while mobile, and
//! navigation always closes the overlay.

use crate::app::Screen;
use crate::i18n::table;
use crate::i18n::I18n;
use crate::ui::breakpoint::Breakpoint;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::widget::{button, container, Column, Container, Row, Text};
use iced::{alignment::Vertical, Border, Color, Element, Length, Shadow, Theme, Vector};
use unic_langid::LanguageIdentifier;

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// The locale the user selected (drives the language toggle highlight,
    /// independently of which table is actually displayed).
    pub active_locale: &'a LanguageIdentifier,
    pub theme_mode: ThemeMode,
    pub scheme: ColorScheme,
    pub screen: Screen,
    pub breakpoint: Breakpoint,
    pub menu_open: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    Navigate(Screen),
    SwitchLanguage(LanguageIdentifier),
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Navigate(Screen),
    SwitchLanguage(LanguageIdentifier),
    ToggleTheme,
}

/// Process a navbar message and return the corresponding event.
///
/// The menu only toggles at the mobile breakpoint; wider layouts render the
/// inline link row, so a stray toggle must not leave an invisible open
/// overlay behind.
pub fn update(message: Message, menu_open: &mut bool, breakpoint: Breakpoint) -> Event {
    match message {
        Message::ToggleMenu => {
            if breakpoint.is_mobile() {
                *menu_open = !*menu_open;
            }
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::Navigate(screen) => {
            *menu_open = false;
            Event::Navigate(screen)
        }
        Message::SwitchLanguage(locale) => Event::SwitchLanguage(locale),
        Message::ToggleTheme => Event::ToggleTheme,
    }
}

/// Render the navigation bar (and the overlay column when open).
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);

    content = content.push(build_top_bar(&ctx));

    if ctx.breakpoint.is_mobile() && ctx.menu_open {
        content = content.push(build_overlay(&ctx));
    }

    content.into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = button(
        Text::new(ctx.i18n.tr("nav.brand"))
            .size(typography::TITLE_SM)
            .color(ctx.scheme.text_primary),
    )
    .on_press(Message::Navigate(Screen::Home))
    .style(link_style(ctx.scheme.text_primary, ctx.scheme.accent))
    .padding(spacing::XS);

    let mut row = Row::new()
        .spacing(spacing::LG)
        .padding([0.0, spacing::LG])
        .height(sizing::NAVBAR_HEIGHT)
        .align_y(Vertical::Center)
        .push(brand)
        .push(iced::widget::space().width(Length::Fill));

    if ctx.breakpoint.is_mobile() {
        let hamburger = button(
            Text::new("\u{2630}")
                .size(typography::TITLE_SM)
                .color(ctx.scheme.text_primary),
        )
        .on_press(Message::ToggleMenu)
        .style(link_style(ctx.scheme.text_primary, ctx.scheme.accent))
        .padding(spacing::XS);

        row = row.push(hamburger);
    } else {
        row = row.push(build_link_row(ctx)).push(build_controls(ctx));
    }

    let bar_bg = ctx.scheme.surface;
    Container::new(row)
        .width(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(bar_bg.into()),
            shadow: Shadow {
                color: Color {
                    a: 0.1,
                    ..Color::BLACK
                },
                offset: Vector { x: 0.0, y: 2.0 },
                blur_radius: 8.0,
            },
            ..Default::default()
        })
        .into()
}

fn build_link_row<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::LG).align_y(Vertical::Center);
    for screen in Screen::ALL {
        row = row.push(build_link(ctx, screen));
    }
    row.into()
}

/// Theme toggle and language toggle, shared by both layouts.
fn build_controls<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    // The label names the mode a press switches to.
    let theme_key = match ctx.theme_mode {
        ThemeMode::Dark => "nav.theme.light",
        ThemeMode::Light => "nav.theme.dark",
    };
    let theme_toggle = button(
        Text::new(ctx.i18n.tr(theme_key))
            .size(typography::CAPTION)
            .color(ctx.scheme.text_secondary),
    )
    .on_press(Message::ToggleTheme)
    .style(link_style(ctx.scheme.text_secondary, ctx.scheme.accent))
    .padding(spacing::XS);

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(theme_toggle);

    for locale in table::available_locales() {
        let is_active = locale == *ctx.active_locale;
        let color = if is_active {
            ctx.scheme.accent
        } else {
            ctx.scheme.text_secondary
        };

        let mut toggle = button(
            Text::new(locale_label(&locale))
                .size(typography::CAPTION)
                .color(color),
        )
        .style(link_style(color, ctx.scheme.accent))
        .padding(spacing::XS);

        if !is_active {
            toggle = toggle.on_press(Message::SwitchLanguage(locale));
        }

        row = row.push(toggle);
    }

    row.into()
}

fn build_overlay<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XXS)
        .padding(spacing::SM)
        .width(Length::Fill);

    for screen in Screen::ALL {
        column = column.push(build_link(ctx, screen));
    }

    column = column.push(build_controls(ctx));

    let overlay_bg = ctx.scheme.surface;
    let border_color = ctx.scheme.text_secondary;
    Container::new(column)
        .width(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(overlay_bg.into()),
            border: Border {
                radius: radius::SM.into(),
                width: 1.0,
                color: Color {
                    a: 0.3,
                    ..border_color
                },
            },
            ..Default::default()
        })
        .into()
}

fn build_link<'a>(ctx: &ViewContext<'a>, screen: Screen) -> Element<'a, Message> {
    let is_active = screen == ctx.screen;
    let color = if is_active {
        ctx.scheme.accent
    } else {
        ctx.scheme.text_primary
    };

    button(
        Text::new(ctx.i18n.tr(screen.nav_key()))
            .size(typography::BODY)
            .color(color),
    )
    .on_press(Message::Navigate(screen))
    .style(link_style(color, ctx.scheme.accent))
    .padding(spacing::XS)
    .into()
}

/// Human-facing label for a locale toggle.
fn locale_label(locale: &LanguageIdentifier) -> String {
    match locale.language.as_str() {
        "en" => "EN".to_string(),
        "ja" => "\u{65e5}\u{672c}\u{8a9e}".to_string(),
        other => other.to_uppercase(),
    }
}

/// Text-like button: no background, hover tint only.
fn link_style(color: Color, hover: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered | button::Status::Pressed => hover,
            _ => color,
        },
        ..button::Style::default()
    }
}
