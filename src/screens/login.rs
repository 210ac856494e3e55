use iced::widget::{button, checkbox, column, horizontal_rule, horizontal_space, row, text, text_input, Column, Container};
use iced::{Alignment, Length};
use crate::app::{App, Message};
use crate::forms::{LoginField, LoginForm};
use crate::route::Route;
use crate::ui::{icon, icon_button_content, muted_icon};

fn field<'a>(placeholder: &'a str, value: &'a str, which: LoginField) -> iced::widget::TextInput<'a, Message> {
    text_input(placeholder, value)
        .on_input(move |v| Message::LoginFieldChanged(which, v))
        .padding(10)
        .size(16)
}

fn password_row(form: &LoginForm) -> iced::widget::Row<'_, Message> {
    let eye = if form.show_password { "eye-slash" } else { "eye" };
    row![
        field("Password", &form.password, LoginField::Password).secure(!form.show_password),
        button(muted_icon(eye, 14.0))
            .on_press(Message::TogglePasswordVisibility)
            .style(button::text),
    ]
    .spacing(6)
    .align_y(Alignment::Center)
}

fn form_fields(form: &LoginForm) -> Column<'_, Message> {
    let mut col = Column::new().spacing(12);
    if form.is_sign_up() {
        col = col.push(
            row![
                field("First name", &form.first_name, LoginField::FirstName),
                field("Last name", &form.last_name, LoginField::LastName),
            ]
            .spacing(10),
        );
    }
    col = col
        .push(field("Email", &form.email, LoginField::Email))
        .push(password_row(form));
    if form.is_sign_up() {
        col = col
            .push(
                field("Confirm password", &form.confirm_password, LoginField::ConfirmPassword)
                    .secure(!form.show_password),
            )
            .push(
                checkbox("I agree to the Terms of Service and Privacy Policy", form.accepted_terms)
                    .on_toggle(Message::TermsToggled),
            );
    } else {
        col = col.push(
            row![
                checkbox("Remember me", form.remember_me).on_toggle(Message::RememberMeToggled),
                horizontal_space(),
                button(text("Forgot password?").size(14)).on_press(Message::NoOp).style(button::text),
            ]
            .align_y(Alignment::Center),
        );
    }
    col
}

pub fn login_screen(app: &App) -> Container<'_, Message> {
    let form = &app.login;
    let (prompt, action) = form.switch_prompt();

    let content = column![
        button(row![muted_icon("arrow-left", 12.0), text("Back to home")].spacing(6))
            .on_press(Message::Navigate(Route::Home))
            .style(button::text),
        row![icon("graduation-cap", 28.0), text("EduPlatform").size(28)]
            .spacing(10)
            .align_y(Alignment::Center),
        text(form.title()).size(30),
        text(form.subtitle()).style(text::secondary),
        form_fields(form),
        button(text(form.submit_label()))
            .on_press(Message::LoginSubmitted)
            .width(Length::Fill)
            .padding(12),
        row![horizontal_rule(1), text("Or continue with").size(13).style(text::secondary), horizontal_rule(1)]
            .spacing(8)
            .align_y(Alignment::Center),
        row![
            button(icon_button_content(iced_font_awesome::fa_icon_brands("google").size(14.0), "Google"))
                .on_press(Message::NoOp)
                .style(button::secondary)
                .width(Length::Fill),
            button(icon_button_content(iced_font_awesome::fa_icon_brands("github").size(14.0), "GitHub"))
                .on_press(Message::NoOp)
                .style(button::secondary)
                .width(Length::Fill),
        ]
        .spacing(10),
        row![
            text(prompt).style(text::secondary),
            button(text(action)).on_press(Message::ToggleAuthMode).style(button::text),
        ]
        .align_y(Alignment::Center),
    ]
    .spacing(16)
    .width(Length::Fixed(420.0))
    .align_x(Alignment::Center);

    Container::new(content)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(40)
}
