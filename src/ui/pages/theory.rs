// SPDX-License-Identifier: MPL-2.0
//! Theory page: essay sections adapted from the thesis chapter.

use super::{caption, heading, paragraph, section_heading, PageContext};
use crate::ui::design_tokens::{sizing, spacing};
use iced::widget::Column;
use iced::Element;

const ESSAYS: [&str; 3] = [
    "pages.theory.essay_1",
    "pages.theory.essay_2",
    "pages.theory.essay_3",
];

pub fn view<'a, M: 'a>(ctx: &PageContext<'a>) -> Element<'a, M> {
    let mut content = Column::new()
        .push(heading(ctx, "pages.theory.title"))
        .push(caption(ctx, "pages.theory.intro"));

    for prefix in ESSAYS {
        content = content.push(
            Column::new()
                .spacing(spacing::SM)
                .push(section_heading(ctx, &format!("{prefix}.title")))
                .push(paragraph(ctx, &format!("{prefix}.body"))),
        );
    }

    super::shell(ctx, sizing::READING_MAX_WIDTH, content)
}
