// SPDX-License-Identifier: MPL-2.0
//! Technology page: the project portfolio, rendered as a responsive card
//! grid (one column on mobile, two on tablet, three on desktop).

use super::{heading, paragraph, PageContext};
use crate::ui::breakpoint::Breakpoint;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use iced::widget::{Column, Container, Row, Text};
use iced::{Element, Length, Theme};

const PROJECT_ENTRIES: [&str; 10] = [
    "pages.technology.project_1",
    "pages.technology.project_2",
    "pages.technology.project_3",
    "pages.technology.project_4",
    "pages.technology.project_5",
    "pages.technology.project_6",
    "pages.technology.project_7",
    "pages.technology.project_8",
    "pages.technology.project_9",
    "pages.technology.project_10",
];

pub fn view<'a, M: 'a>(ctx: &PageContext<'a>) -> Element<'a, M> {
    let columns = match ctx.breakpoint {
        Breakpoint::Mobile => 1,
        Breakpoint::Tablet => 2,
        Breakpoint::Desktop => 3,
    };

    let mut grid = Column::new().spacing(spacing::LG);
    for chunk in PROJECT_ENTRIES.chunks(columns) {
        let mut row = Row::new().spacing(spacing::LG);
        for &prefix in chunk {
            row = row.push(project_card(ctx, prefix));
        }
        // Pad the last row so cards keep a uniform width.
        for _ in chunk.len()..columns {
            row = row.push(iced::widget::space().width(Length::FillPortion(1)));
        }
        grid = grid.push(row);
    }

    let content = Column::new()
        .push(heading(ctx, "pages.technology.title"))
        .push(paragraph(ctx, "pages.technology.intro"))
        .push(grid);

    super::shell(ctx, sizing::CONTENT_MAX_WIDTH, content)
}

fn project_card<'a, M: 'a>(ctx: &PageContext<'a>, prefix: &str) -> Element<'a, M> {
    let card_bg = ctx.scheme.surface;

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(
                Text::new(ctx.i18n.tr(&format!("{prefix}.title")))
                    .size(typography::BODY)
                    .color(ctx.scheme.accent),
            )
            .push(paragraph(ctx, &format!("{prefix}.description"))),
    )
    .padding(spacing::MD)
    .width(Length::FillPortion(1))
    .style(move |_theme: &Theme| iced::widget::container::Style {
        background: Some(card_bg.into()),
        border: iced::Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    })
    .into()
}
