use iced::widget::{column, row, text, Column, Container, Row};
use iced::{Alignment, Length};
use crate::app::{App, Message};
use crate::data::{self, MILESTONES, PLATFORM_STATS, VALUES};
use crate::models::Tone;
use crate::ui::{avatar, badge, card, icon, page_header};

pub fn about_screen(app: &App) -> Container<'_, Message> {
    let per_row = if app.is_compact() { 1 } else { 3 };

    let mission = card(
        column![
            text("Our Mission").size(26),
            text("We started EduPlatform to make world-class education available to anyone willing to learn. \
                  Our instructors are practitioners who teach the skills they use every day, \
                  and our consultations give every learner a direct line to an expert.")
                .style(text::secondary),
        ]
        .spacing(12),
    );

    let stats = PLATFORM_STATS.iter().fold(Row::new().spacing(16), |r, stat| {
        r.push(card(
            column![text(stat.value).size(28), text(stat.label).style(text::secondary)]
                .align_x(Alignment::Center)
                .width(Length::Fill),
        ))
    });

    let values = VALUES.iter().fold(Column::new().spacing(16), |c, value| {
        c.push(card(
            row![
                icon(value.icon, 28.0),
                column![text(value.title).size(20), text(value.description).style(text::secondary)]
                    .spacing(6),
            ]
            .spacing(16)
            .align_y(Alignment::Center),
        ))
    });

    let timeline = MILESTONES.iter().fold(Column::new().spacing(12), |c, m| {
        c.push(
            row![
                badge(m.year, Tone::Primary),
                column![text(m.title).size(18), text(m.description).style(text::secondary)]
                    .spacing(4),
            ]
            .spacing(16),
        )
    });

    let team_members = data::get_team();
    let mut team = Column::new().spacing(16);
    for chunk in team_members.chunks(per_row) {
        team = team.push(chunk.iter().fold(Row::new().spacing(16), |r, member| {
            r.push(card(
                column![
                    avatar(&member.name, 72.0),
                    text(member.name.clone()).size(18),
                    text(member.role.clone()).style(text::secondary),
                    badge(member.specialty.clone(), Tone::Secondary),
                    text(member.bio.clone()).size(14),
                ]
                .spacing(8)
                .align_x(Alignment::Center)
                .width(Length::Fill),
            ))
        }));
    }

    let content = column![
        page_header(
            "About EduPlatform",
            "Empowering learners worldwide with expert-led education",
        ),
        mission,
        stats,
        text("Our Values").size(28),
        values,
        text("Our Journey").size(28),
        card(timeline),
        text("Meet Our Team").size(28),
        team,
    ]
    .spacing(28);

    Container::new(content).width(Length::Fill).padding(40)
}
