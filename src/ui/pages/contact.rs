// SPDX-License-Identifier: MPL-2.0
//! Contact page.

use super::{caption, heading, paragraph, PageContext};
use crate::ui::design_tokens::{sizing, spacing};
use iced::widget::Column;
use iced::Element;

const CHANNELS: [&str; 3] = [
    "pages.contact.email",
    "pages.contact.github",
    "pages.contact.linkedin",
];

pub fn view<'a, M: 'a>(ctx: &PageContext<'a>) -> Element<'a, M> {
    let mut content = Column::new()
        .push(heading(ctx, "pages.contact.title"))
        .push(paragraph(ctx, "pages.contact.intro"));

    for prefix in CHANNELS {
        content = content.push(
            Column::new()
                .spacing(spacing::XXS)
                .push(caption(ctx, &format!("{prefix}.label")))
                .push(paragraph(ctx, &format!("{prefix}.value"))),
        );
    }

    super::shell(ctx, sizing::READING_MAX_WIDTH, content)
}
