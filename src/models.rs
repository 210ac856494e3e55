use std::fmt;
use chrono::NaiveDateTime;

/// Visual emphasis for badges and highlights. `Muted` is the neutral style
/// every unrecognized enum value falls back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    Primary,
    Secondary,
    Accent,
    Destructive,
    #[default]
    Muted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: u32,
    pub title: String,
    pub instructor: String,
    pub category: String,
    pub level: Level,
    pub duration: String,
    pub students: u32,
    pub rating: f32,
    pub price: u32,
    pub description: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Unrecognized(String),
}

impl Level {
    pub fn tone(&self) -> Tone {
        match self {
            Level::Beginner => Tone::Secondary,
            Level::Intermediate => Tone::Accent,
            Level::Advanced => Tone::Destructive,
            Level::Unrecognized(_) => Tone::Muted,
        }
    }
}

impl From<&str> for Level {
    fn from(label: &str) -> Self {
        match label {
            "Beginner" => Level::Beginner,
            "Intermediate" => Level::Intermediate,
            "Advanced" => Level::Advanced,
            other => Level::Unrecognized(other.to_string()),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Beginner => write!(f, "Beginner"),
            Level::Intermediate => write!(f, "Intermediate"),
            Level::Advanced => write!(f, "Advanced"),
            Level::Unrecognized(label) => write!(f, "{}", label),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expert {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub experience: String,
    pub rating: f32,
    pub reviews: u32,
    pub price: u32,
    pub bio: String,
    pub availability: String,
}

impl Expert {
    pub fn availability_bucket(&self) -> Availability {
        Availability::from_label(&self.availability)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Today,
    Tomorrow,
    Other,
}

impl Availability {
    pub fn from_label(label: &str) -> Self {
        if label.contains("today") {
            Availability::Today
        } else if label.contains("tomorrow") {
            Availability::Tomorrow
        } else {
            Availability::Other
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Availability::Today => Tone::Secondary,
            Availability::Tomorrow => Tone::Accent,
            Availability::Other => Tone::Muted,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConsultationType {
    pub key: String,
    pub title: String,
    pub duration: String,
    pub description: String,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleEvent {
    pub id: u32,
    pub title: String,
    pub kind: EventKind,
    pub starts_at: NaiveDateTime,
    pub duration_minutes: u32,
    pub instructor: String,
    pub attendees: Option<u32>,
    pub status: EventStatus,
    pub meeting_link: Option<String>,
    pub recording: Option<String>,
    pub notes: Option<String>,
}

impl ScheduleEvent {
    /// Only confirmed sessions expose a join action.
    pub fn joinable_link(&self) -> Option<&str> {
        match self.status {
            EventStatus::Confirmed => self.meeting_link.as_deref(),
            _ => None,
        }
    }

    pub fn awaits_confirmation(&self) -> bool {
        self.status == EventStatus::Pending
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Course,
    Consultation,
    Workshop,
    Unrecognized(String),
}

impl EventKind {
    pub fn tone(&self) -> Tone {
        match self {
            EventKind::Course => Tone::Primary,
            EventKind::Consultation => Tone::Secondary,
            EventKind::Workshop => Tone::Accent,
            EventKind::Unrecognized(_) => Tone::Muted,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            EventKind::Course => "book-open",
            EventKind::Consultation => "message",
            EventKind::Workshop => "users",
            EventKind::Unrecognized(_) => "calendar",
        }
    }
}

impl From<&str> for EventKind {
    fn from(label: &str) -> Self {
        match label {
            "course" => EventKind::Course,
            "consultation" => EventKind::Consultation,
            "workshop" => EventKind::Workshop,
            other => EventKind::Unrecognized(other.to_string()),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Course => write!(f, "course"),
            EventKind::Consultation => write!(f, "consultation"),
            EventKind::Workshop => write!(f, "workshop"),
            EventKind::Unrecognized(label) => write!(f, "{}", label),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventStatus {
    Confirmed,
    Pending,
    Completed,
    Cancelled,
    Unrecognized(String),
}

impl EventStatus {
    pub fn tone(&self) -> Tone {
        match self {
            EventStatus::Confirmed => Tone::Secondary,
            EventStatus::Pending => Tone::Accent,
            EventStatus::Completed => Tone::Muted,
            EventStatus::Cancelled => Tone::Destructive,
            EventStatus::Unrecognized(_) => Tone::Muted,
        }
    }
}

impl From<&str> for EventStatus {
    fn from(label: &str) -> Self {
        match label {
            "confirmed" => EventStatus::Confirmed,
            "pending" => EventStatus::Pending,
            "completed" => EventStatus::Completed,
            "cancelled" => EventStatus::Cancelled,
            other => EventStatus::Unrecognized(other.to_string()),
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventStatus::Confirmed => write!(f, "confirmed"),
            EventStatus::Pending => write!(f, "pending"),
            EventStatus::Completed => write!(f, "completed"),
            EventStatus::Cancelled => write!(f, "cancelled"),
            EventStatus::Unrecognized(label) => write!(f, "{}", label),
        }
    }
}

// Extended content shown on the course details page.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseDetails {
    pub course_id: u32,
    pub reviews: u32,
    pub original_price: u32,
    pub long_description: String,
    pub what_you_learn: Vec<String>,
    pub requirements: Vec<String>,
    pub extra_tags: Vec<String>,
    pub curriculum: Vec<CurriculumWeek>,
    pub reviews_list: Vec<Review>,
}

impl CourseDetails {
    /// Whole-percent discount of `price` against the original price.
    pub fn discount_percent(&self, price: u32) -> Option<u32> {
        if self.original_price == 0 || price >= self.original_price {
            return None;
        }
        let saved = (self.original_price - price) as f64 / self.original_price as f64;
        Some((saved * 100.0).round() as u32)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurriculumWeek {
    pub week: u32,
    pub title: String,
    pub lessons: u32,
    pub duration: String,
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub name: String,
    pub rating: u8,
    pub date: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub specialty: String,
    pub bio: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InstructorProfile {
    pub name: String,
    pub bio: String,
    pub rating: f32,
    pub students: u32,
    pub courses: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_level_falls_back_to_neutral_tone() {
        let level = Level::from("Expert");
        assert_eq!(level, Level::Unrecognized("Expert".to_string()));
        assert_eq!(level.tone(), Tone::Muted);
        assert_eq!(level.to_string(), "Expert");
    }

    #[test]
    fn known_levels_have_distinct_tones() {
        assert_eq!(Level::from("Beginner").tone(), Tone::Secondary);
        assert_eq!(Level::from("Intermediate").tone(), Tone::Accent);
        assert_eq!(Level::from("Advanced").tone(), Tone::Destructive);
    }

    #[test]
    fn unknown_status_and_kind_use_neutral_style() {
        assert_eq!(EventStatus::from("rescheduled").tone(), Tone::Muted);
        assert_eq!(EventKind::from("webinar").tone(), Tone::Muted);
        assert_eq!(EventKind::from("webinar").icon(), "calendar");
        assert_eq!(EventStatus::from("cancelled").tone(), Tone::Destructive);
    }

    #[test]
    fn only_pending_events_await_confirmation() {
        let pending = crate::data::get_upcoming_events()
            .into_iter()
            .find(|e| e.status == EventStatus::Pending)
            .expect("seeded pending event");
        assert!(pending.awaits_confirmation());
        assert!(pending.joinable_link().is_none());

        let confirmed = ScheduleEvent { status: EventStatus::Confirmed, ..pending.clone() };
        assert!(!confirmed.awaits_confirmation());
        let done = ScheduleEvent { status: EventStatus::Completed, ..pending };
        assert!(!done.awaits_confirmation());
    }

    #[test]
    fn availability_is_bucketed_by_label() {
        assert_eq!(Availability::from_label("Available today"), Availability::Today);
        assert_eq!(Availability::from_label("Available tomorrow"), Availability::Tomorrow);
        assert_eq!(Availability::from_label("Available next week"), Availability::Other);
        assert_eq!(Availability::Other.tone(), Tone::Muted);
    }

    #[test]
    fn discount_is_rounded_to_whole_percent() {
        let details = CourseDetails {
            course_id: 1,
            reviews: 0,
            original_price: 399,
            long_description: String::new(),
            what_you_learn: vec![],
            requirements: vec![],
            extra_tags: vec![],
            curriculum: vec![],
            reviews_list: vec![],
        };
        assert_eq!(details.discount_percent(299), Some(25));
        assert_eq!(details.discount_percent(399), None);
    }
}
