use chrono::Local;
use iced::widget::{Column, Container, Scrollable};
use iced::{Element, Length};
use crate::route::Route;
use crate::screens::{
    about_screen, consultation_screen, contact_screen, course_details_screen, courses_screen,
    dashboard_screen, home_screen, login_screen, nav_menu, schedule_screen, settings_screen,
};
use super::{App, Message};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let today = Local::now().date_naive();
        let page = match self.route {
            Route::Home => home_screen(self),
            Route::Courses => courses_screen(self),
            Route::CourseDetails { id } => course_details_screen(self, id),
            Route::Consultation => consultation_screen(self),
            Route::Schedule => schedule_screen(self, today),
            Route::About => about_screen(self),
            Route::Contact => contact_screen(self),
            Route::Login => login_screen(self),
            Route::Dashboard => dashboard_screen(self),
            Route::Settings => settings_screen(self),
        };

        let body = Scrollable::new(page.width(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill);

        // The login card stands alone, without the navigation bar.
        let mut layout = Column::new();
        if self.route != Route::Login {
            layout = layout.push(nav_menu(self));
        }
        Container::new(layout.push(body))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
