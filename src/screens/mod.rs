pub mod about;
pub mod consultation;
pub mod contact;
pub mod course_details;
pub mod courses;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod nav_menu;
pub mod schedule;
pub mod settings;

pub use about::about_screen;
pub use consultation::consultation_screen;
pub use contact::contact_screen;
pub use course_details::course_details_screen;
pub use courses::courses_screen;
pub use dashboard::dashboard_screen;
pub use home::home_screen;
pub use login::login_screen;
pub use nav_menu::nav_menu;
pub use schedule::schedule_screen;
pub use settings::settings_screen;
