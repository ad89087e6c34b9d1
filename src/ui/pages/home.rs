// SPDX-License-Identifier: MPL-2.0
//! Home page: bio, education, professional experience, and recent projects.

use super::{caption, heading, paragraph, section_heading, PageContext};
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use iced::widget::{Column, Container, Row, Text};
use iced::{Element, Length, Theme};

const EDUCATION_ENTRIES: [&str; 2] = ["education.entry_1", "education.entry_2"];
const EXPERIENCE_ENTRIES: [&str; 3] = [
    "experience.entry_1",
    "experience.entry_2",
    "experience.entry_3",
];

pub fn view<'a, M: 'a>(ctx: &PageContext<'a>) -> Element<'a, M> {
    let content = Column::new()
        .push(heading(ctx, "bio.title"))
        .push(bio_section(ctx))
        .push(history_section(ctx))
        .push(projects_section(ctx));

    super::shell(ctx, sizing::CONTENT_MAX_WIDTH, content)
}

fn bio_section<'a, M: 'a>(ctx: &PageContext<'a>) -> Element<'a, M> {
    Column::new()
        .spacing(spacing::MD)
        .push(paragraph(ctx, "bio.intro_1"))
        .push(paragraph(ctx, "bio.intro_2"))
        .push(section_heading(ctx, "bio.research_1_title"))
        .push(paragraph(ctx, "bio.research_1_text"))
        .into()
}

/// Education and professional experience, side by side except on mobile.
fn history_section<'a, M: 'a>(ctx: &PageContext<'a>) -> Element<'a, M> {
    let mut education = Column::new()
        .spacing(spacing::LG)
        .width(Length::FillPortion(1))
        .push(section_heading(ctx, "education.title"));
    for &prefix in &EDUCATION_ENTRIES {
        education = education.push(education_entry(ctx, prefix));
    }

    let mut experience = Column::new()
        .spacing(spacing::LG)
        .width(Length::FillPortion(1))
        .push(section_heading(ctx, "experience.title"));
    for &prefix in &EXPERIENCE_ENTRIES {
        experience = experience.push(experience_entry(ctx, prefix));
    }

    if ctx.breakpoint.is_mobile() {
        Column::new()
            .spacing(spacing::XL)
            .push(education)
            .push(experience)
            .into()
    } else {
        Row::new()
            .spacing(spacing::XXL)
            .push(education)
            .push(experience)
            .into()
    }
}

fn education_entry<'a, M: 'a>(ctx: &PageContext<'a>, prefix: &str) -> Element<'a, M> {
    Column::new()
        .spacing(spacing::XXS)
        .push(paragraph(ctx, &format!("{prefix}.institution")))
        .push(caption(ctx, &format!("{prefix}.location")))
        .push(caption(ctx, &format!("{prefix}.date")))
        .push(paragraph(ctx, &format!("{prefix}.degree")))
        .push(caption(ctx, &format!("{prefix}.advisor")))
        .into()
}

fn experience_entry<'a, M: 'a>(ctx: &PageContext<'a>, prefix: &str) -> Element<'a, M> {
    Column::new()
        .spacing(spacing::XXS)
        .push(paragraph(ctx, &format!("{prefix}.organization")))
        .push(caption(ctx, &format!("{prefix}.location")))
        .push(paragraph(ctx, &format!("{prefix}.role")))
        .push(caption(ctx, &format!("{prefix}.dates")))
        .into()
}

fn projects_section<'a, M: 'a>(ctx: &PageContext<'a>) -> Element<'a, M> {
    let card_bg = ctx.scheme.surface;
    let card = Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(
                Text::new(ctx.i18n.tr("projects.soundink.title"))
                    .size(typography::BODY)
                    .color(ctx.scheme.accent),
            )
            .push(paragraph(ctx, "projects.soundink.description"))
            .push(caption(ctx, "projects.link_label")),
    )
    .padding(spacing::MD)
    .max_width(sizing::CARD_MIN_WIDTH * 1.5)
    .style(move |_theme: &Theme| iced::widget::container::Style {
        background: Some(card_bg.into()),
        border: iced::Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    });

    Column::new()
        .spacing(spacing::MD)
        .push(section_heading(ctx, "projects.title"))
        .push(card)
        .into()
}
