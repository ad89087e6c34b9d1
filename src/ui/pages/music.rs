// SPDX-License-Identifier: MPL-2.0
//! Music page: composition and performance samples.

use super::{caption, heading, paragraph, section_heading, PageContext};
use crate::ui::design_tokens::{sizing, spacing};
use iced::widget::Column;
use iced::Element;

const SAMPLES: [&str; 3] = [
    "pages.music.sample_1",
    "pages.music.sample_2",
    "pages.music.sample_3",
];

pub fn view<'a, M: 'a>(ctx: &PageContext<'a>) -> Element<'a, M> {
    let mut content = Column::new()
        .push(heading(ctx, "pages.music.title"))
        .push(paragraph(ctx, "pages.music.intro"));

    for prefix in SAMPLES {
        content = content.push(
            Column::new()
                .spacing(spacing::XXS)
                .push(section_heading(ctx, &format!("{prefix}.title")))
                .push(caption(ctx, &format!("{prefix}.description"))),
        );
    }

    super::shell(ctx, sizing::CONTENT_MAX_WIDTH, content)
}
