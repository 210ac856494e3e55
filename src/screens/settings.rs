use iced::widget::{button, column, pick_list, row, text_input, toggler, Container};
use iced::{Length, Theme};
use crate::app::{App, Message};
use crate::forms::ProfileField;
use crate::ui::{card, card_title, page_header};

pub fn settings_screen(app: &App) -> Container<'_, Message> {
    let profile = &app.profile;

    let profile_card = card(
        column![
            card_title("user", "Profile"),
            row![
                text_input("First name", &profile.first_name)
                    .on_input(|v| Message::ProfileFieldChanged(ProfileField::FirstName, v))
                    .padding(10),
                text_input("Last name", &profile.last_name)
                    .on_input(|v| Message::ProfileFieldChanged(ProfileField::LastName, v))
                    .padding(10),
            ]
            .spacing(12),
            text_input("Email", &profile.email)
                .on_input(|v| Message::ProfileFieldChanged(ProfileField::Email, v))
                .padding(10),
            button("Save Changes").on_press(Message::SaveProfile).padding(10),
        ]
        .spacing(12),
    );

    let notifications = card(
        column![
            card_title("bell", "Notifications"),
            toggler(profile.course_updates)
                .label("Course updates")
                .on_toggle(Message::CourseUpdatesToggled),
            toggler(profile.email_reminders)
                .label("Email reminders")
                .on_toggle(Message::EmailRemindersToggled),
        ]
        .spacing(12),
    );

    let appearance = card(
        column![
            card_title("palette", "Appearance"),
            pick_list(Theme::ALL, Some(app.theme.clone()), Message::ThemeSelected)
                .placeholder("Choose a theme")
                .width(Length::Fill),
        ]
        .spacing(12),
    );

    let content = column![
        page_header("Settings", "Manage your account and preferences"),
        profile_card,
        notifications,
        appearance,
    ]
    .spacing(20)
    .max_width(720);

    Container::new(content).width(Length::Fill).center_x(Length::Fill).padding(40)
}
