use chrono::NaiveDate;
use iced::widget::{button, column, horizontal_space, row, text, Column, Container, Row};
use iced::{Alignment, Element, Length};
use iced_aw::date_picker;
use crate::app::{App, Message};
use crate::data::WEEK_STATS;
use crate::dates;
use crate::models::ScheduleEvent;
use crate::route::Route;
use crate::schedule::ScheduleTab;
use crate::ui::{badge, card, card_title, icon, icon_button_content, label_value, muted_icon, page_header};

fn event_row(event: &ScheduleEvent, today: NaiveDate) -> Container<'_, Message> {
    let day = event.starts_at.date();
    let when = format!(
        "{} • {} • {} min",
        dates::display_label(day, today),
        dates::clock_time(event.starts_at),
        event.duration_minutes
    );

    let mut info = column![
        row![
            text(&event.title).size(18),
            horizontal_space(),
            badge(&event.kind, event.kind.tone()),
            badge(&event.status, event.status.tone()),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
        row![muted_icon("clock", 12.0), text(when).size(14)].spacing(6),
        row![muted_icon("user", 12.0), text(&event.instructor).size(14)].spacing(6),
    ]
    .spacing(6);
    if let Some(count) = event.attendees {
        info = info.push(row![muted_icon("users", 12.0), text(format!("{} attendees", count)).size(14)].spacing(6));
    }
    if let Some(notes) = &event.notes {
        info = info.push(text(notes).size(14).style(text::secondary));
    }

    if event.awaits_confirmation() {
        info = info.push(
            row![
                muted_icon("hourglass-half", 12.0),
                text("Waiting for instructor confirmation").size(14).style(text::secondary),
            ]
            .spacing(6),
        );
    }

    let mut actions = Row::new().spacing(8);
    if let Some(link) = event.joinable_link() {
        actions = actions.push(
            button(icon_button_content(muted_icon("video", 13.0), "Join Meeting"))
                .on_press(Message::OpenLink(link.to_string())),
        );
    }
    if let Some(recording) = &event.recording {
        actions = actions.push(
            button(icon_button_content(muted_icon("circle-play", 13.0), "View Recording"))
                .on_press(Message::OpenLink(recording.clone()))
                .style(button::secondary),
        );
    }
    info = info.push(actions);

    card(
        row![icon(event.kind.icon(), 22.0), info]
            .spacing(14)
            .align_y(Alignment::Start),
    )
}

fn day_card(app: &App, today: NaiveDate) -> Column<'_, Message> {
    let label = dates::display_label(app.schedule_date, today);
    let picker_button = button(
        row![muted_icon("calendar", 14.0), text(dates::long_date(app.schedule_date))].spacing(8),
    )
    .on_press(Message::ChooseScheduleDate)
    .style(button::secondary)
    .width(Length::Fill);
    let picker = date_picker(
        app.schedule_picker_open,
        dates::to_picker(app.schedule_date),
        picker_button,
        Message::CancelScheduleDate,
        Message::SubmitScheduleDate,
    );

    let events = app.schedule.events_on(app.schedule_date);
    let mut list = Column::new().spacing(10);
    if events.is_empty() {
        list = list.push(
            column![
                muted_icon("calendar-xmark", 24.0),
                text("No events scheduled for this day").style(text::secondary),
            ]
            .spacing(6)
            .align_x(Alignment::Center)
            .width(Length::Fill),
        );
    } else {
        for event in events {
            list = list.push(
                row![
                    text(dates::clock_time(event.starts_at)).size(14),
                    text(&event.title),
                    horizontal_space(),
                    badge(&event.kind, event.kind.tone()),
                ]
                .spacing(10)
                .align_y(Alignment::Center),
            );
        }
    }

    column![
        card(column![card_title("calendar", "Calendar"), picker].spacing(12)),
        card(column![card_title("list", format!("{} Events", label)), list].spacing(12)),
        week_card(),
    ]
    .spacing(16)
}

fn week_card<'a>() -> Container<'a, Message> {
    let stats = WEEK_STATS.iter().fold(
        column![card_title("chart-simple", "This Week")].spacing(8),
        |c, stat| c.push(label_value(stat.label, stat.value)),
    );
    card(stats)
}

pub fn schedule_screen(app: &App, today: NaiveDate) -> Container<'_, Message> {
    let tabs = ScheduleTab::ALL.iter().fold(Row::new().spacing(6), |r, tab| {
        let style = if *tab == app.schedule_tab { button::primary } else { button::secondary };
        r.push(
            button(text(tab.to_string()))
                .on_press(Message::ScheduleTabSelected(*tab))
                .style(style)
                .width(Length::Fill),
        )
    });
    let events = app
        .schedule
        .events(app.schedule_tab)
        .iter()
        .fold(Column::new().spacing(12), |c, event| c.push(event_row(event, today)));

    let main = column![
        row![
            text("Your Sessions").size(24),
            horizontal_space(),
            button(icon_button_content(muted_icon("plus", 13.0), "Book Session"))
                .on_press(Message::Navigate(Route::Consultation)),
        ]
        .align_y(Alignment::Center),
        tabs,
        events,
    ]
    .spacing(16);

    let side = day_card(app, today);
    let body: Element<Message> = if app.is_compact() {
        column![side, main].spacing(20).into()
    } else {
        row![side.width(Length::FillPortion(1)), main.width(Length::FillPortion(2))]
            .spacing(24)
            .into()
    };

    let content = column![
        page_header("My Schedule", "Manage your courses, consultations, and learning sessions"),
        body,
    ]
    .spacing(28);

    Container::new(content).width(Length::Fill).padding(40)
}
