// SPDX-License-Identifier: MPL-2.0
//! Static content pages.
//!
//! Every page is a pure view function over a [`PageContext`]: localized
//! strings come from the active translation table, colors from the active
//! scheme, and layout metrics from the current breakpoint. Pages emit no
//! messages of their own, so they are generic over the parent message type.

pub mod contact;
pub mod home;
pub mod music;
pub mod technology;
pub mod theory;

use crate::i18n::I18n;
use crate::ui::breakpoint::Breakpoint;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{Column, Container, Text};
use iced::{Element, Length};

/// Everything a page needs to render itself.
pub struct PageContext<'a> {
    pub i18n: &'a I18n,
    pub scheme: ColorScheme,
    pub breakpoint: Breakpoint,
}

impl PageContext<'_> {
    /// Outer page padding, tighter at the mobile breakpoint.
    #[must_use]
    pub fn page_padding(&self) -> f32 {
        if self.breakpoint.is_mobile() {
            spacing::MD
        } else {
            spacing::XL
        }
    }

    #[must_use]
    pub fn title_size(&self) -> f32 {
        if self.breakpoint.is_mobile() {
            typography::TITLE_LG_MOBILE
        } else {
            typography::TITLE_LG
        }
    }
}

/// Wraps page content in a centered, width-capped container.
pub fn shell<'a, M: 'a>(
    ctx: &PageContext<'a>,
    max_width: f32,
    content: Column<'a, M>,
) -> Element<'a, M> {
    Container::new(content.max_width(max_width).spacing(spacing::LG))
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(ctx.page_padding())
        .into()
}

/// A localized page heading.
pub fn heading<'a, M: 'a>(ctx: &PageContext<'a>, key: &str) -> Element<'a, M> {
    Text::new(ctx.i18n.tr(key))
        .size(ctx.title_size())
        .color(ctx.scheme.text_primary)
        .into()
}

/// A localized section heading.
pub fn section_heading<'a, M: 'a>(ctx: &PageContext<'a>, key: &str) -> Element<'a, M> {
    Text::new(ctx.i18n.tr(key))
        .size(typography::TITLE_MD)
        .color(ctx.scheme.text_primary)
        .into()
}

/// A localized body paragraph.
pub fn paragraph<'a, M: 'a>(ctx: &PageContext<'a>, key: &str) -> Element<'a, M> {
    Text::new(ctx.i18n.tr(key))
        .size(typography::BODY)
        .color(ctx.scheme.text_primary)
        .into()
}

/// A localized secondary line (dates, locations, captions).
pub fn caption<'a, M: 'a>(ctx: &PageContext<'a>, key: &str) -> Element<'a, M> {
    Text::new(ctx.i18n.tr(key))
        .size(typography::CAPTION)
        .color(ctx.scheme.text_secondary)
        .into()
}
