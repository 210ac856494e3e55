use chrono::Local;
use iced::widget::{button, column, horizontal_rule, horizontal_space, row, text, text_input, Column, Container, Row};
use iced::{Alignment, Element, Length};
use iced_aw::date_picker;
use crate::app::{App, Message};
use crate::booking::{BookingSummary, ContactDetailsField};
use crate::data::TIME_SLOTS;
use crate::dates;
use crate::models::{ConsultationType, Expert};
use crate::ui::{avatar, badge, card, card_title, icon, label_value, muted_icon, page_header, selectable_card, stars};

fn type_card<'a>(kind: &'a ConsultationType, selected: bool) -> Element<'a, Message> {
    selectable_card(
        column![
            row![icon(kind.icon, 20.0), text(&kind.title).size(18)]
                .spacing(10)
                .align_y(Alignment::Center),
            text(&kind.description).size(14).style(text::secondary),
            row![muted_icon("clock", 12.0), text(&kind.duration).size(13)].spacing(6),
        ]
        .spacing(8),
        selected,
        Message::ConsultationTypeSelected(kind.key.clone()),
    )
}

fn expert_card<'a>(expert: &'a Expert, selected: bool) -> Element<'a, Message> {
    let availability = expert.availability_bucket();
    selectable_card(
        row![
            avatar(&expert.name, 56.0),
            column![
                row![
                    text(&expert.name).size(18),
                    horizontal_space(),
                    text(format!("${}/session", expert.price)).size(16),
                ],
                text(&expert.specialty).style(text::secondary),
                row![
                    stars(expert.rating),
                    text(format!("({} reviews)", expert.reviews)).size(13),
                    text(&expert.experience).size(13).style(text::secondary),
                ]
                .spacing(8)
                .align_y(Alignment::Center),
                text(&expert.bio).size(14),
                badge(&expert.availability, availability.tone()),
            ]
            .spacing(6),
        ]
        .spacing(14),
        selected,
        Message::ExpertSelected(expert.id.clone()),
    )
}

fn details_field<'a>(
    placeholder: &'a str,
    value: &'a str,
    which: ContactDetailsField,
) -> iced::widget::TextInput<'a, Message> {
    text_input(placeholder, value)
        .on_input(move |v| Message::BookingDetailsChanged(which, v))
        .padding(10)
}

fn details_form(app: &App) -> Column<'_, Message> {
    let d = &app.booking_details;
    column![
        card_title("user", "Your Information"),
        row![
            details_field("First name", &d.first_name, ContactDetailsField::FirstName),
            details_field("Last name", &d.last_name, ContactDetailsField::LastName),
        ]
        .spacing(12),
        details_field("Email", &d.email, ContactDetailsField::Email),
        details_field("Phone", &d.phone, ContactDetailsField::Phone),
        details_field("What would you like to discuss?", &d.goals, ContactDetailsField::Goals),
    ]
    .spacing(12)
}

fn date_time_card(app: &App) -> Column<'_, Message> {
    let chosen = app.booking.date_label();
    let picker_button = button(row![muted_icon("calendar", 14.0), text(chosen)].spacing(8))
        .on_press(Message::ChooseBookingDate)
        .style(button::secondary)
        .width(Length::Fill);
    let initial = app.booking.date.unwrap_or_else(|| Local::now().date_naive());
    let picker = date_picker(
        app.booking_picker_open,
        dates::to_picker(initial),
        picker_button,
        Message::CancelBookingDate,
        Message::SubmitBookingDate,
    );

    let mut slots = Column::new().spacing(8);
    for chunk in TIME_SLOTS.chunks(5) {
        slots = slots.push(chunk.iter().fold(Row::new().spacing(8), |r, slot| {
            let style = if app.booking.is_time_selected(slot) {
                button::primary
            } else {
                button::secondary
            };
            r.push(
                button(text(*slot).size(14))
                    .on_press(Message::TimeSlotSelected(slot.to_string()))
                    .style(style)
                    .width(Length::Fill),
            )
        }));
    }

    column![
        card_title("calendar", "Select Date & Time"),
        picker,
        text("Available times").size(14).style(text::secondary),
        slots,
    ]
    .spacing(12)
}

fn summary_card<'a>(summary: BookingSummary<'a>, app: &App) -> Container<'a, Message> {
    let when = match (app.booking.date, &app.booking.time) {
        (Some(date), Some(time)) => format!("{} at {}", dates::short_date(date), time),
        (Some(date), None) => dates::short_date(date),
        (None, _) => "-".to_string(),
    };
    let total = summary.total().map_or_else(|| "-".to_string(), |t| format!("${}", t));
    card(
        column![
            card_title("receipt", "Booking Summary"),
            label_value("Type", summary.type_title().to_string()),
            label_value("Duration", summary.duration().to_string()),
            label_value("Expert", summary.expert_name().to_string()),
            label_value("When", when),
            horizontal_rule(1),
            row![text("Total").size(18), horizontal_space(), text(total).size(18)],
        ]
        .spacing(8),
    )
}

pub fn consultation_screen(app: &App) -> Container<'_, Message> {
    let types = app.consultation_types.iter().fold(Column::new().spacing(12), |c, kind| {
        c.push(type_card(kind, app.booking.is_type_selected(&kind.key)))
    });
    let experts = app.experts.iter().fold(Column::new().spacing(12), |c, expert| {
        c.push(expert_card(expert, app.booking.is_expert_selected(&expert.id)))
    });

    let mut side = Column::new().spacing(16).push(card(date_time_card(app)));
    if let Some(summary) = app.booking.summary(&app.consultation_types, &app.experts) {
        side = side.push(summary_card(summary, app));
    }
    let book = button(
        row![icon("calendar-check", 16.0), text("Book Consultation")]
            .spacing(8)
            .align_y(Alignment::Center),
    )
    .on_press_maybe(app.booking.can_submit().then_some(Message::BookConsultation))
    .width(Length::Fill)
    .padding(12);
    side = side.push(book);

    let main = column![
        text("1. Choose Consultation Type").size(22),
        types,
        text("2. Select Your Expert").size(22),
        experts,
        text("3. Your Details").size(22),
        card(details_form(app)),
    ]
    .spacing(16);

    let body: Element<Message> = if app.is_compact() {
        column![main, side].spacing(20).into()
    } else {
        row![main.width(Length::FillPortion(2)), side.width(Length::FillPortion(1))]
            .spacing(24)
            .into()
    };

    let content = column![
        page_header(
            "Book a Consultation",
            "Get personalized guidance from industry experts",
        ),
        body,
    ]
    .spacing(28);

    Container::new(content).width(Length::Fill).padding(40)
}
