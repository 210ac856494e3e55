use iced::{Subscription, Task};
use tokio::task::spawn_blocking;
use tracing::{debug, info, warn};
use crate::config::save_config;
use crate::dates;
use crate::route::Route;
use super::{App, Message};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(route) => {
                if route != self.route {
                    info!(from = %self.route, to = %route, "navigate");
                    self.reset_page_state();
                    self.route = route;
                }
                self.nav_open = false;
                Task::none()
            }
            Message::NavigatePath(path) => match Route::parse(&path) {
                Some(route) => self.update(Message::Navigate(route)),
                None => {
                    warn!(%path, "ignoring navigation to unknown path");
                    Task::none()
                }
            },
            Message::ToggleNav => {
                self.nav_open = !self.nav_open;
                Task::none()
            }
            Message::WindowResized(size) => {
                self.window_width = size.width;
                if !self.is_compact() {
                    self.nav_open = false;
                }
                Task::none()
            }
            Message::SearchChanged(term) => {
                self.catalog_filter.search = term;
                Task::none()
            }
            Message::CategorySelected(category) => {
                self.catalog_filter.category = category;
                Task::none()
            }
            Message::ClearFilters => {
                self.catalog_filter.reset();
                Task::none()
            }
            Message::DetailsTabSelected(tab) => {
                self.details_tab = tab;
                Task::none()
            }
            Message::ConsultationTypeSelected(key) => {
                self.booking.select_consultation_type(key);
                Task::none()
            }
            Message::ExpertSelected(id) => {
                self.booking.select_expert(id);
                Task::none()
            }
            Message::ChooseBookingDate => {
                self.booking_picker_open = true;
                Task::none()
            }
            Message::SubmitBookingDate(date) => {
                if let Some(date) = dates::from_picker(date) {
                    self.booking.select_date(date);
                }
                self.booking_picker_open = false;
                Task::none()
            }
            Message::CancelBookingDate => {
                self.booking_picker_open = false;
                Task::none()
            }
            Message::TimeSlotSelected(slot) => {
                self.booking.select_time(slot);
                Task::none()
            }
            Message::BookingDetailsChanged(field, value) => {
                self.booking_details.set(field, value);
                Task::none()
            }
            Message::BookConsultation => {
                if !self.booking.submit() {
                    debug!("booking gate closed, ignoring submit");
                }
                Task::none()
            }
            Message::ChooseScheduleDate => {
                self.schedule_picker_open = true;
                Task::none()
            }
            Message::SubmitScheduleDate(date) => {
                if let Some(date) = dates::from_picker(date) {
                    self.schedule_date = date;
                }
                self.schedule_picker_open = false;
                Task::none()
            }
            Message::CancelScheduleDate => {
                self.schedule_picker_open = false;
                Task::none()
            }
            Message::ScheduleTabSelected(tab) => {
                self.schedule_tab = tab;
                Task::none()
            }
            Message::OpenLink(url) => {
                debug!(%url, "opening link");
                Task::perform(open_link(url), Message::LinkOpened)
            }
            Message::LinkOpened(result) => {
                if let Err(err) = result {
                    warn!(error = %err, "failed to open link");
                }
                Task::none()
            }
            Message::LoginFieldChanged(field, value) => {
                self.login.set(field, value);
                Task::none()
            }
            Message::TogglePasswordVisibility => {
                self.login.toggle_password_visibility();
                Task::none()
            }
            Message::ToggleAuthMode => {
                self.login.toggle_mode();
                Task::none()
            }
            Message::RememberMeToggled(value) => {
                self.login.remember_me = value;
                Task::none()
            }
            Message::TermsToggled(value) => {
                self.login.accepted_terms = value;
                Task::none()
            }
            Message::LoginSubmitted => {
                info!(mode = ?self.login.mode, "login form submitted");
                self.update(Message::Navigate(Route::Dashboard))
            }
            Message::ContactFieldChanged(field, value) => {
                self.contact.set(field, value);
                Task::none()
            }
            Message::InquirySelected(inquiry) => {
                self.contact.select_inquiry(inquiry);
                Task::none()
            }
            Message::SendContactMessage => {
                self.contact.send();
                Task::none()
            }
            Message::ProfileFieldChanged(field, value) => {
                self.profile.set(field, value);
                Task::none()
            }
            Message::SaveProfile => {
                info!(
                    course_updates = self.profile.course_updates,
                    email_reminders = self.profile.email_reminders,
                    "profile changes saved for this session"
                );
                Task::none()
            }
            Message::CourseUpdatesToggled(value) => {
                self.profile.course_updates = value;
                Task::none()
            }
            Message::EmailRemindersToggled(value) => {
                self.profile.email_reminders = value;
                Task::none()
            }
            Message::ThemeSelected(theme) => {
                self.config.theme_name = theme.to_string();
                if let Err(err) = save_config(&self.config) {
                    warn!(error = %err, "could not persist theme");
                }
                self.theme = theme;
                Task::none()
            }
            Message::NoOp => Task::none(),
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size))
    }
}

async fn open_link(url: String) -> Result<(), String> {
    spawn_blocking(move || open::that(&url))
        .await
        .map_err(|e| e.to_string())?
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::app::DetailsTab;
    use crate::dates::to_picker;
    use crate::forms::{AuthMode, LoginField};
    use crate::route::Route;
    use crate::schedule::ScheduleTab;
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn catalog_scenario_through_messages() {
        let mut app = App::default();
        let _ = app.update(Message::Navigate(Route::Courses));
        let _ = app.update(Message::SearchChanged("react".to_string()));
        let view = app.catalog_filter.view(app.courses.as_slice());
        assert_eq!(view.shown.len(), 1);
        assert_eq!(view.shown[0].title, "Full-Stack Web Development");

        let _ = app.update(Message::CategorySelected("Design".to_string()));
        assert!(app.catalog_filter.view(app.courses.as_slice()).is_empty());

        let _ = app.update(Message::ClearFilters);
        assert_eq!(app.catalog_filter.search, "");
        assert_eq!(app.catalog_filter.category, "all");
    }

    #[test]
    fn booking_gate_through_messages() {
        let mut app = App::default();
        let _ = app.update(Message::Navigate(Route::Consultation));
        let _ = app.update(Message::ConsultationTypeSelected("technical-review".to_string()));
        let _ = app.update(Message::ExpertSelected("2".to_string()));
        assert!(app.booking.shows_summary());
        assert!(!app.booking.can_submit());

        let _ = app.update(Message::ChooseBookingDate);
        assert!(app.booking_picker_open);
        let _ = app.update(Message::SubmitBookingDate(to_picker(ymd(2024, 12, 18))));
        assert!(!app.booking_picker_open);
        assert!(app.booking.time.is_none());
        assert!(app.booking.can_submit());

        let _ = app.update(Message::BookConsultation);
        assert!(app.booking.can_submit());
    }

    #[test]
    fn leaving_a_page_resets_its_state() {
        let mut app = App::default();
        let _ = app.update(Message::Navigate(Route::Courses));
        let _ = app.update(Message::SearchChanged("aws".to_string()));
        let _ = app.update(Message::Navigate(Route::Consultation));
        let _ = app.update(Message::ExpertSelected("1".to_string()));
        let _ = app.update(Message::Navigate(Route::Courses));
        assert_eq!(app.catalog_filter.search, "");
        assert_eq!(app.booking.expert_id, None);
    }

    #[test]
    fn navigating_to_the_current_page_keeps_state() {
        let mut app = App::default();
        let _ = app.update(Message::Navigate(Route::Schedule));
        let _ = app.update(Message::ScheduleTabSelected(ScheduleTab::Past));
        let _ = app.update(Message::Navigate(Route::Schedule));
        assert_eq!(app.schedule_tab, ScheduleTab::Past);
    }

    #[test]
    fn schedule_day_selection_filters_upcoming_events() {
        let mut app = App::default();
        let _ = app.update(Message::Navigate(Route::Schedule));
        let _ = app.update(Message::SubmitScheduleDate(to_picker(ymd(2024, 12, 20))));
        let titles: Vec<&str> = app
            .schedule
            .events_on(app.schedule_date)
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, ["Code Review Session"]);
    }

    #[test]
    fn details_without_id_show_first_course() {
        let mut app = App::default();
        let _ = app.update(Message::NavigatePath("/course-details".to_string()));
        assert_eq!(app.route, Route::CourseDetails { id: 1 });
        let course = app.displayed_course(1).expect("course");
        assert_eq!(course.title, "Full-Stack Web Development");

        let _ = app.update(Message::DetailsTabSelected(DetailsTab::Reviews));
        assert_eq!(app.details_tab, DetailsTab::Reviews);
    }

    #[test]
    fn unknown_course_id_falls_back_to_first_course() {
        let app = App::default();
        assert_eq!(app.displayed_course(77).map(|c| c.id), Some(1));
        assert_eq!(app.displayed_course(5).map(|c| c.id), Some(5));
        assert!(app.displayed_course_details(5).is_none());
        assert!(app.displayed_course_details(77).is_some());
    }

    #[test]
    fn unknown_path_is_ignored() {
        let mut app = App::default();
        let _ = app.update(Message::Navigate(Route::About));
        let _ = app.update(Message::NavigatePath("/nowhere".to_string()));
        assert_eq!(app.route, Route::About);
    }

    #[test]
    fn login_submit_goes_to_dashboard() {
        let mut app = App::default();
        let _ = app.update(Message::Navigate(Route::Login));
        let _ = app.update(Message::ToggleAuthMode);
        assert_eq!(app.login.mode, AuthMode::SignUp);
        let _ = app.update(Message::LoginFieldChanged(LoginField::Email, String::new()));
        let _ = app.update(Message::LoginSubmitted);
        assert_eq!(app.route, Route::Dashboard);
        assert_eq!(app.login.mode, AuthMode::SignIn);
    }

    #[test]
    fn mobile_menu_closes_on_navigation_and_wide_window() {
        let mut app = App::default();
        let _ = app.update(Message::WindowResized(iced::Size::new(500.0, 800.0)));
        assert!(app.is_compact());
        let _ = app.update(Message::ToggleNav);
        assert!(app.nav_open);
        let _ = app.update(Message::Navigate(Route::Contact));
        assert!(!app.nav_open);

        let _ = app.update(Message::ToggleNav);
        let _ = app.update(Message::WindowResized(iced::Size::new(1200.0, 800.0)));
        assert!(!app.nav_open);
    }
}
