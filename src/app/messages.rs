use iced::{Size, Theme};
use iced_aw::date_picker::Date;
use crate::app::state::DetailsTab;
use crate::booking::ContactDetailsField;
use crate::forms::{ContactField, InquiryType, LoginField, ProfileField};
use crate::route::Route;
use crate::schedule::ScheduleTab;

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Route),
    NavigatePath(String),
    ToggleNav,
    WindowResized(Size),
    // Courses
    SearchChanged(String),
    CategorySelected(String),
    ClearFilters,
    DetailsTabSelected(DetailsTab),
    // Consultation
    ConsultationTypeSelected(String),
    ExpertSelected(String),
    ChooseBookingDate,
    SubmitBookingDate(Date),
    CancelBookingDate,
    TimeSlotSelected(String),
    BookingDetailsChanged(ContactDetailsField, String),
    BookConsultation,
    // Schedule
    ChooseScheduleDate,
    SubmitScheduleDate(Date),
    CancelScheduleDate,
    ScheduleTabSelected(ScheduleTab),
    OpenLink(String),
    LinkOpened(Result<(), String>),
    // Login
    LoginFieldChanged(LoginField, String),
    TogglePasswordVisibility,
    ToggleAuthMode,
    RememberMeToggled(bool),
    TermsToggled(bool),
    LoginSubmitted,
    // Contact
    ContactFieldChanged(ContactField, String),
    InquirySelected(InquiryType),
    SendContactMessage,
    // Settings
    ProfileFieldChanged(ProfileField, String),
    SaveProfile,
    CourseUpdatesToggled(bool),
    EmailRemindersToggled(bool),
    ThemeSelected(Theme),
    NoOp,
}
