use iced::widget::{button, column, horizontal_space, row, text, Column, Container, Row};
use iced::{Alignment, Length};
use iced_font_awesome::fa_icon_solid;
use crate::app::{App, Message};
use crate::route::{Route, NAV_PAGES};
use crate::ui::{icon, icon_button_content};

fn nav_link<'a>(app: &App, route: Route, label: &'a str) -> iced::widget::Button<'a, Message> {
    let style = if route.is_section_of(&app.route) {
        button::primary
    } else {
        button::text
    };
    button(text(label)).on_press(Message::Navigate(route)).style(style)
}

fn brand<'a>() -> Row<'a, Message> {
    row![icon("graduation-cap", 22.0), text("EduPlatform").size(22)]
        .spacing(8)
        .align_y(Alignment::Center)
}

fn account_buttons<'a>() -> [iced::widget::Button<'a, Message>; 3] {
    [
        button(icon_button_content(fa_icon_solid("gauge").size(14.0), "Dashboard"))
            .on_press(Message::Navigate(Route::Dashboard))
            .style(button::text),
        button(icon_button_content(fa_icon_solid("gear").size(14.0), "Settings"))
            .on_press(Message::Navigate(Route::Settings))
            .style(button::text),
        button(icon_button_content(fa_icon_solid("right-to-bracket").size(14.0), "Login"))
            .on_press(Message::Navigate(Route::Login)),
    ]
}

/// Top navigation bar. Below the compact width the links fold into a
/// toggled column under the brand row.
pub fn nav_menu(app: &App) -> Container<'_, Message> {
    let content: Column<Message> = if app.is_compact() {
        let toggle_icon = if app.nav_open { "xmark" } else { "bars" };
        let top = row![
            mouse_brand(),
            horizontal_space(),
            button(fa_icon_solid(toggle_icon).size(18.0))
                .on_press(Message::ToggleNav)
                .style(button::text),
        ]
        .align_y(Alignment::Center);

        let mut col = Column::new().push(top).spacing(8);
        if app.nav_open {
            for (route, label) in NAV_PAGES {
                col = col.push(nav_link(app, *route, label).width(Length::Fill));
            }
            for b in account_buttons() {
                col = col.push(b.width(Length::Fill));
            }
        }
        col
    } else {
        let links = NAV_PAGES
            .iter()
            .fold(Row::new().spacing(4), |r, (route, label)| r.push(nav_link(app, *route, label)));
        let account = account_buttons()
            .into_iter()
            .fold(Row::new().spacing(4), |r, b| r.push(b));
        column![
            row![mouse_brand(), horizontal_space(), links, horizontal_space(), account]
                .align_y(Alignment::Center)
        ]
    };

    Container::new(content)
        .width(Length::Fill)
        .padding([10, 20])
        .style(iced::widget::container::bordered_box)
}

fn mouse_brand<'a>() -> iced::widget::MouseArea<'a, Message> {
    iced::widget::mouse_area(brand()).on_press(Message::Navigate(Route::Home))
}
