use iced::widget::{button, column, pick_list, row, text, text_input, Column, Container};
use iced::{Alignment, Length};
use crate::app::{App, Message};
use crate::data::{CONTACT_CHANNELS, FAQS, SUPPORT_HOURS};
use crate::forms::{ContactField, InquiryType};
use crate::ui::{card, card_title, icon, page_header};

fn field<'a>(
    placeholder: &'a str,
    value: &'a str,
    which: ContactField,
) -> iced::widget::TextInput<'a, Message> {
    text_input(placeholder, value)
        .on_input(move |v| Message::ContactFieldChanged(which, v))
        .padding(10)
}

fn message_form(app: &App) -> Column<'_, Message> {
    let form = &app.contact;
    let names = row![
        field("First name", &form.first_name, ContactField::FirstName),
        field("Last name", &form.last_name, ContactField::LastName),
    ]
    .spacing(12);

    let mut col = column![
        card_title("paper-plane", "Send us a message"),
        names,
        field("Email", &form.email, ContactField::Email),
        field("Phone (optional)", &form.phone, ContactField::Phone),
        pick_list(InquiryType::ALL, form.inquiry, Message::InquirySelected)
            .placeholder("Select inquiry type")
            .width(Length::Fill),
        field("Subject", &form.subject, ContactField::Subject),
        field("Message", &form.message, ContactField::Message),
        button("Send Message")
            .on_press(Message::SendContactMessage)
            .width(Length::Fill)
            .padding(12),
    ]
    .spacing(12);

    if form.sent {
        col = col.push(text("Thanks! We'll get back to you within 24 hours.").style(text::success));
    }
    col
}

fn channels<'a>() -> Column<'a, Message> {
    CONTACT_CHANNELS.iter().fold(Column::new().spacing(12), |c, channel| {
        let detail: iced::Element<'a, Message> = match channel.link {
            Some(link) => button(text(channel.detail))
                .on_press(Message::OpenLink(link.to_string()))
                .style(button::text)
                .padding(0)
                .into(),
            None => text(channel.detail).into(),
        };
        c.push(card(
            row![
                icon(channel.icon, 22.0),
                column![
                    text(channel.title).size(18),
                    detail,
                    text(channel.note).size(14).style(text::secondary),
                ]
                .spacing(4),
            ]
            .spacing(14)
            .align_y(Alignment::Start),
        ))
    })
}

fn faq<'a>() -> Column<'a, Message> {
    FAQS.iter().fold(
        column![text("Frequently Asked Questions").size(28)].spacing(12),
        |c, item| {
            c.push(card(
                column![text(item.question).size(18), text(item.answer).style(text::secondary)]
                    .spacing(6),
            ))
        },
    )
}

pub fn contact_screen(app: &App) -> Container<'_, Message> {
    let hours = SUPPORT_HOURS
        .iter()
        .fold(column![card_title("clock", "Support Hours")].spacing(6), |c, line| {
            c.push(text(*line).style(text::secondary))
        });

    let side = column![channels(), card(hours)].spacing(12);
    let form = card(message_form(app));

    let body: iced::Element<Message> = if app.is_compact() {
        column![side, form].spacing(20).into()
    } else {
        row![side.width(Length::FillPortion(1)), form.width(Length::FillPortion(2))]
            .spacing(20)
            .into()
    };

    let content = column![
        page_header(
            "Get in Touch",
            "Have questions about our courses or need help? We'd love to hear from you.",
        ),
        body,
        faq(),
    ]
    .spacing(32);

    Container::new(content).width(Length::Fill).padding(40)
}
