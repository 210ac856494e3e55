use iced::widget::{button, column, horizontal_space, progress_bar, row, text, Column, Container, Row};
use iced::{Alignment, Length};
use crate::app::{App, Message};
use crate::data::{CURRENT_COURSES, DASHBOARD_STATS};
use crate::dates;
use crate::ui::{card, card_title, icon, icon_button_content, muted_icon};

const QUICK_ACTIONS: &[(&str, &str, &str)] = &[
    ("book-open", "Browse Courses", "/courses"),
    ("calendar", "Book Consultation", "/consultation"),
    ("clock", "View Schedule", "/schedule"),
    ("gear", "Settings", "/settings"),
];

fn stats_row<'a>() -> Row<'a, Message> {
    DASHBOARD_STATS.iter().fold(Row::new().spacing(16), |r, stat| {
        r.push(card(
            column![
                row![text(stat.title).size(14).style(text::secondary), horizontal_space(), icon(stat.icon, 16.0)],
                text(stat.value).size(28),
                text(stat.change).size(12).style(text::secondary),
            ]
            .spacing(6),
        ))
    })
}

fn progress_list<'a>() -> Column<'a, Message> {
    CURRENT_COURSES.iter().fold(
        column![card_title("book-open", "Continue Learning")].spacing(16),
        |c, course| {
            c.push(
                column![
                    row![text(course.title).size(17), horizontal_space(), text(format!("{}%", course.progress))],
                    progress_bar(0.0..=100.0, f32::from(course.progress)).height(Length::Fixed(8.0)),
                    row![
                        text(format!("Next: {}", course.next_lesson)).size(13).style(text::secondary),
                        horizontal_space(),
                        text(course.instructor).size(13).style(text::secondary),
                    ],
                ]
                .spacing(6),
            )
        },
    )
}

fn upcoming(app: &App) -> Column<'_, Message> {
    app.schedule.upcoming.iter().take(3).fold(
        column![card_title("calendar", "Upcoming Sessions")].spacing(10),
        |c, event| {
            c.push(
                column![
                    text(&event.title),
                    text(format!(
                        "{} at {}",
                        dates::short_date(event.starts_at.date()),
                        dates::clock_time(event.starts_at)
                    ))
                    .size(13)
                    .style(text::secondary),
                ]
                .spacing(2),
            )
        },
    )
}

fn quick_actions<'a>() -> Column<'a, Message> {
    QUICK_ACTIONS.iter().fold(
        column![card_title("bolt", "Quick Actions")].spacing(8),
        |c, &(icon_name, label, path)| {
            c.push(
                button(icon_button_content(muted_icon(icon_name, 14.0), label))
                    .on_press(Message::NavigatePath(path.to_string()))
                    .style(button::secondary)
                    .width(Length::Fill),
            )
        },
    )
}

pub fn dashboard_screen(app: &App) -> Container<'_, Message> {
    let side = column![card(upcoming(app)), card(quick_actions())].spacing(16);
    let main = card(progress_list());

    let body: iced::Element<Message> = if app.is_compact() {
        column![main, side].spacing(20).into()
    } else {
        row![main.width(Length::FillPortion(2)), side.width(Length::FillPortion(1))]
            .spacing(24)
            .into()
    };

    let content = column![
        text(format!("Welcome back, {}!", app.profile.first_name)).size(32),
        text("Here's an overview of your learning progress").style(text::secondary),
        stats_row(),
        body,
    ]
    .spacing(20)
    .align_x(Alignment::Start);

    Container::new(content).width(Length::Fill).padding(40)
}
