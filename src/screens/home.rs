use iced::widget::{button, column, row, text, Column, Container, Row};
use iced::{Alignment, Length};
use crate::app::{App, Message};
use crate::data::{FEATURES, PLATFORM_STATS, TESTIMONIALS};
use crate::route::Route;
use crate::ui::{avatar, card, icon, icon_button_content, page_header, stars};

pub fn home_screen(app: &App) -> Container<'_, Message> {
    let hero = column![
        text("Transform Your Future with Expert-Led Learning").size(44),
        text("Join thousands of learners advancing their careers through personalized courses, one-on-one consultations, and a supportive community.")
            .size(18)
            .style(text::secondary),
        row![
            button(icon_button_content(icon("book-open", 16.0), "Explore Courses"))
                .on_press(Message::Navigate(Route::Courses))
                .padding(12),
            button(icon_button_content(icon("calendar", 16.0), "Book Consultation"))
                .on_press(Message::Navigate(Route::Consultation))
                .style(button::secondary)
                .padding(12),
        ]
        .spacing(12),
    ]
    .spacing(20)
    .max_width(800)
    .align_x(Alignment::Center);

    let stats = PLATFORM_STATS.iter().fold(Row::new().spacing(16), |r, stat| {
        r.push(card(
            column![text(stat.value).size(32), text(stat.label).style(text::secondary)]
                .align_x(Alignment::Center)
                .width(Length::Fill),
        ))
    });

    let per_row = if app.is_compact() { 1 } else { 2 };
    let mut features = Column::new().spacing(16);
    for chunk in FEATURES.chunks(per_row) {
        features = features.push(chunk.iter().fold(Row::new().spacing(16), |r, feature| {
            r.push(card(
                column![
                    icon(feature.icon, 28.0),
                    text(feature.title).size(20),
                    text(feature.description).style(text::secondary),
                ]
                .spacing(8),
            ))
        }));
    }

    let testimonials = TESTIMONIALS.iter().fold(Column::new().spacing(16), |c, t| {
        c.push(card(
            column![
                stars(5.0),
                text(format!("\"{}\"", t.content)),
                row![
                    avatar(t.name, 40.0),
                    column![text(t.name), text(t.role).size(14).style(text::secondary)],
                ]
                .spacing(10)
                .align_y(Alignment::Center),
            ]
            .spacing(12),
        ))
    });

    let cta = card(
        column![
            text("Ready to Start Learning?").size(28),
            text("Create a free account and get access to our course catalog today.")
                .style(text::secondary),
            button("Get Started").on_press(Message::Navigate(Route::Login)).padding(12),
        ]
        .spacing(12)
        .align_x(Alignment::Center)
        .width(Length::Fill),
    );

    let content = column![
        Container::new(hero).center_x(Length::Fill),
        stats,
        page_header(
            "Why Choose EduPlatform?",
            "Everything you need to succeed in your learning journey",
        ),
        features,
        page_header("What Our Students Say", "Real stories from real learners"),
        testimonials,
        cta,
    ]
    .spacing(32);

    Container::new(content).width(Length::Fill).padding(40)
}
