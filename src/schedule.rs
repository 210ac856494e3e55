use std::fmt;
use chrono::NaiveDate;
use crate::data;
use crate::dates::day_key;
use crate::models::ScheduleEvent;

/// Upcoming and past events are kept as two separate collections, fixed when
/// the schedule is loaded. Nothing moves an event between them.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    pub upcoming: Vec<ScheduleEvent>,
    pub past: Vec<ScheduleEvent>,
}

impl Schedule {
    pub fn new(upcoming: Vec<ScheduleEvent>, past: Vec<ScheduleEvent>) -> Self {
        Self { upcoming, past }
    }

    pub fn load() -> Self {
        Self::new(data::get_upcoming_events(), data::get_past_events())
    }

    /// Upcoming events whose calendar day equals `date`, time-of-day ignored.
    pub fn events_on(&self, date: NaiveDate) -> Vec<&ScheduleEvent> {
        let key = day_key(date);
        self.upcoming
            .iter()
            .filter(|event| day_key(event.starts_at.date()) == key)
            .collect()
    }

    pub fn events(&self, tab: ScheduleTab) -> &[ScheduleEvent] {
        match tab {
            ScheduleTab::Upcoming => &self.upcoming,
            ScheduleTab::Past => &self.past,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScheduleTab {
    #[default]
    Upcoming,
    Past,
}

impl ScheduleTab {
    pub const ALL: &'static [ScheduleTab] = &[ScheduleTab::Upcoming, ScheduleTab::Past];
}

impl fmt::Display for ScheduleTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleTab::Upcoming => write!(f, "Upcoming"),
            ScheduleTab::Past => write!(f, "Past Events"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventKind, EventStatus};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn event(id: u32, date: NaiveDate, hour: u32, minute: u32) -> ScheduleEvent {
        ScheduleEvent {
            id,
            title: format!("Event {id}"),
            kind: EventKind::Course,
            starts_at: date.and_hms_opt(hour, minute, 0).expect("valid time"),
            duration_minutes: 30,
            instructor: "Alex Kim".to_string(),
            attendees: None,
            status: EventStatus::Confirmed,
            meeting_link: None,
            recording: None,
            notes: None,
        }
    }

    #[test]
    fn events_on_matches_seeded_day() {
        let schedule = Schedule::load();
        let ids: Vec<u32> = schedule.events_on(ymd(2024, 12, 16)).iter().map(|e| e.id).collect();
        assert_eq!(ids, [2]);
        assert!(schedule.events_on(ymd(2024, 12, 17)).is_empty());
    }

    #[test]
    fn events_on_ignores_time_of_day() {
        let day = ymd(2025, 3, 9);
        let schedule = Schedule::new(
            vec![
                event(1, day, 0, 0),
                event(2, ymd(2025, 3, 10), 0, 0),
                event(3, day, 23, 59),
                event(4, ymd(2025, 3, 8), 23, 59),
            ],
            vec![],
        );
        let ids: Vec<u32> = schedule.events_on(day).iter().map(|e| e.id).collect();
        assert_eq!(ids, [1, 3]);
    }

    #[test]
    fn past_events_never_match_a_day() {
        let schedule = Schedule::load();
        // Portfolio review is a past event on Dec 8.
        assert!(schedule.events_on(ymd(2024, 12, 8)).is_empty());
        assert_eq!(schedule.events(ScheduleTab::Past).len(), 2);
        assert_eq!(schedule.events(ScheduleTab::Upcoming).len(), 4);
    }

    #[test]
    fn joinable_only_when_confirmed() {
        let schedule = Schedule::load();
        let joinable: Vec<u32> = schedule
            .upcoming
            .iter()
            .filter(|e| e.joinable_link().is_some())
            .map(|e| e.id)
            .collect();
        assert_eq!(joinable, [1, 2, 4]);
    }
}
