use std::fmt;
use chrono::{Local, NaiveDate};
use iced::Theme;
use crate::booking::{BookingSelection, ContactDetails};
use crate::catalog::CatalogFilter;
use crate::config::Config;
use crate::data;
use crate::forms::{ContactForm, LoginForm, ProfileSettings};
use crate::models::{ConsultationType, Course, CourseDetails, Expert};
use crate::records::RecordSet;
use crate::route::{Route, DEFAULT_COURSE_ID};
use crate::schedule::{Schedule, ScheduleTab};

/// Below this window width the navigation bar collapses behind a toggle.
pub const COMPACT_WIDTH: f32 = 768.0;

pub struct App {
    pub config: Config,
    pub theme: Theme,
    pub route: Route,
    pub window_width: f32,
    pub nav_open: bool,
    //
    pub courses: RecordSet<Course>,
    pub experts: RecordSet<Expert>,
    pub consultation_types: RecordSet<ConsultationType>,
    pub schedule: Schedule,
    // Courses / details
    pub catalog_filter: CatalogFilter,
    pub details_tab: DetailsTab,
    // Consultation
    pub booking: BookingSelection,
    pub booking_details: ContactDetails,
    pub booking_picker_open: bool,
    // Schedule
    pub schedule_date: NaiveDate,
    pub schedule_tab: ScheduleTab,
    pub schedule_picker_open: bool,
    //
    pub login: LoginForm,
    pub contact: ContactForm,
    pub profile: ProfileSettings,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            theme: config.theme(),
            window_width: config.window_width,
            config,
            route: Route::default(),
            nav_open: false,
            courses: RecordSet::new(data::get_courses()),
            experts: RecordSet::new(data::get_experts()),
            consultation_types: RecordSet::new(data::get_consultation_types()),
            schedule: Schedule::load(),
            catalog_filter: CatalogFilter::default(),
            details_tab: DetailsTab::default(),
            booking: BookingSelection::default(),
            booking_details: ContactDetails::default(),
            booking_picker_open: false,
            schedule_date: Local::now().date_naive(),
            schedule_tab: ScheduleTab::default(),
            schedule_picker_open: false,
            login: LoginForm::default(),
            contact: ContactForm::default(),
            profile: ProfileSettings::default(),
        }
    }

    pub fn is_compact(&self) -> bool {
        self.window_width < COMPACT_WIDTH
    }

    /// Course shown on the details page: the requested one, or the first
    /// course when the id is unknown.
    pub fn displayed_course(&self, id: u32) -> Option<&Course> {
        self.courses.get(&id).or_else(|| self.courses.get(&DEFAULT_COURSE_ID))
    }

    pub fn displayed_course_details(&self, id: u32) -> Option<CourseDetails> {
        self.displayed_course(id).and_then(|course| data::get_course_details(course.id))
    }

    /// Page-local state does not survive leaving the page.
    pub(crate) fn reset_page_state(&mut self) {
        self.catalog_filter.reset();
        self.details_tab = DetailsTab::default();
        self.booking = BookingSelection::default();
        self.booking_details = ContactDetails::default();
        self.booking_picker_open = false;
        self.schedule_date = Local::now().date_naive();
        self.schedule_tab = ScheduleTab::default();
        self.schedule_picker_open = false;
        self.login = LoginForm::default();
        self.contact = ContactForm::default();
        self.profile = ProfileSettings::default();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailsTab {
    #[default]
    Overview,
    Curriculum,
    Instructor,
    Reviews,
}

impl DetailsTab {
    pub const ALL: &'static [DetailsTab] = &[
        DetailsTab::Overview,
        DetailsTab::Curriculum,
        DetailsTab::Instructor,
        DetailsTab::Reviews,
    ];
}

impl fmt::Display for DetailsTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", match self {
            DetailsTab::Overview => "Overview",
            DetailsTab::Curriculum => "Curriculum",
            DetailsTab::Instructor => "Instructor",
            DetailsTab::Reviews => "Reviews",
        })
    }
}
