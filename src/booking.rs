use chrono::NaiveDate;
use tracing::info;
use crate::dates;
use crate::models::{ConsultationType, Expert};
use crate::records::RecordSet;

/// Choices made on the consultation page. Fields are independent: setting one
/// never clears another, and they may be set in any order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingSelection {
    pub consultation_type: Option<String>,
    pub expert_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
}

impl BookingSelection {
    pub fn select_consultation_type(&mut self, key: impl Into<String>) {
        self.consultation_type = Some(key.into());
    }

    pub fn select_expert(&mut self, id: impl Into<String>) {
        self.expert_id = Some(id.into());
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.date = Some(date);
    }

    pub fn select_time(&mut self, slot: impl Into<String>) {
        self.time = Some(slot.into());
    }

    pub fn is_type_selected(&self, key: &str) -> bool {
        self.consultation_type.as_deref() == Some(key)
    }

    pub fn is_expert_selected(&self, id: &str) -> bool {
        self.expert_id.as_deref() == Some(id)
    }

    pub fn is_time_selected(&self, slot: &str) -> bool {
        self.time.as_deref() == Some(slot)
    }

    /// Caption of the date button: the chosen day, or a prompt to pick one.
    pub fn date_label(&self) -> String {
        self.date.map_or_else(|| "Pick a date".to_string(), dates::long_date)
    }

    pub fn shows_summary(&self) -> bool {
        self.consultation_type.is_some() && self.expert_id.is_some()
    }

    /// The time slot is collected but does not take part in the gate.
    pub fn can_submit(&self) -> bool {
        self.consultation_type.is_some() && self.expert_id.is_some() && self.date.is_some()
    }

    pub fn summary<'a>(
        &self,
        types: &'a RecordSet<ConsultationType>,
        experts: &'a RecordSet<Expert>,
    ) -> Option<BookingSummary<'a>> {
        if !self.shows_summary() {
            return None;
        }
        Some(BookingSummary {
            consultation: self.consultation_type.as_deref().and_then(|key| types.get(key)),
            expert: self.expert_id.as_deref().and_then(|id| experts.get(id)),
        })
    }

    /// Terminal action of the page. Returns whether the request was accepted;
    /// nothing is stored or sent either way.
    pub fn submit(&self) -> bool {
        if !self.can_submit() {
            return false;
        }
        info!(
            consultation_type = ?self.consultation_type,
            expert_id = ?self.expert_id,
            date = ?self.date,
            time = ?self.time,
            "consultation booking requested"
        );
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookingSummary<'a> {
    pub consultation: Option<&'a ConsultationType>,
    pub expert: Option<&'a Expert>,
}

impl BookingSummary<'_> {
    pub fn type_title(&self) -> &str {
        self.consultation.map_or("-", |c| c.title.as_str())
    }

    pub fn duration(&self) -> &str {
        self.consultation.map_or("-", |c| c.duration.as_str())
    }

    pub fn expert_name(&self) -> &str {
        self.expert.map_or("-", |e| e.name.as_str())
    }

    pub fn total(&self) -> Option<u32> {
        self.expert.map(|e| e.price)
    }
}

/// "Your information" block of the consultation page. Never validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub goals: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactDetailsField {
    FirstName,
    LastName,
    Email,
    Phone,
    Goals,
}

impl ContactDetails {
    pub fn set(&mut self, field: ContactDetailsField, value: String) {
        match field {
            ContactDetailsField::FirstName => self.first_name = value,
            ContactDetailsField::LastName => self.last_name = value,
            ContactDetailsField::Email => self.email = value,
            ContactDetailsField::Phone => self.phone = value,
            ContactDetailsField::Goals => self.goals = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 16).expect("valid date")
    }

    #[test]
    fn gate_requires_type_expert_and_date_but_not_time() {
        for mask in 0u8..16 {
            let mut selection = BookingSelection::default();
            if mask & 1 != 0 {
                selection.select_consultation_type("career-guidance");
            }
            if mask & 2 != 0 {
                selection.select_expert("1");
            }
            if mask & 4 != 0 {
                selection.select_date(date());
            }
            if mask & 8 != 0 {
                selection.select_time("10:00 AM");
            }
            let expected = mask & 0b111 == 0b111;
            assert_eq!(selection.can_submit(), expected, "mask {mask:04b}");
        }
    }

    // Documented behavior: a missing time slot does not block booking.
    #[test]
    fn technical_review_with_expert_two_needs_only_a_date() {
        let mut selection = BookingSelection::default();
        selection.select_consultation_type("technical-review");
        selection.select_expert("2");
        assert!(!selection.can_submit());
        assert!(!selection.submit());

        selection.select_date(date());
        assert!(selection.time.is_none());
        assert!(selection.can_submit());
        assert!(selection.submit());
    }

    #[test]
    fn summary_visibility_ignores_date() {
        let mut selection = BookingSelection::default();
        selection.select_expert("3");
        assert!(!selection.shows_summary());
        selection.select_consultation_type("interview-prep");
        assert!(selection.shows_summary());
        assert!(selection.date.is_none());
    }

    #[test]
    fn selections_do_not_cascade() {
        let mut selection = BookingSelection::default();
        selection.select_consultation_type("career-guidance");
        selection.select_expert("4");
        selection.select_date(date());
        selection.select_time("01:00 PM");

        selection.select_consultation_type("project-consultation");
        assert_eq!(selection.expert_id.as_deref(), Some("4"));
        assert_eq!(selection.date, Some(date()));
        assert_eq!(selection.time.as_deref(), Some("01:00 PM"));

        selection.select_expert("4");
        assert!(selection.is_expert_selected("4"));
    }

    #[test]
    fn reselecting_a_type_keeps_it_selected() {
        let mut selection = BookingSelection::default();
        selection.select_consultation_type("technical-review");
        selection.select_consultation_type("technical-review");
        assert!(selection.is_type_selected("technical-review"));
        assert_eq!(selection.consultation_type.as_deref(), Some("technical-review"));
    }

    #[test]
    fn date_label_prompts_until_a_day_is_chosen() {
        let mut selection = BookingSelection::default();
        assert_eq!(selection.date_label(), "Pick a date");
        selection.select_date(date());
        assert_eq!(selection.date_label(), "December 16th, 2024");
    }

    #[test]
    fn summary_resolves_records_by_id() {
        let types = RecordSet::new(data::get_consultation_types());
        let experts = RecordSet::new(data::get_experts());
        let mut selection = BookingSelection::default();
        assert!(selection.summary(&types, &experts).is_none());

        selection.select_consultation_type("technical-review");
        selection.select_expert("2");
        let summary = selection.summary(&types, &experts).expect("summary shown");
        assert_eq!(summary.type_title(), "Technical Review");
        assert_eq!(summary.duration(), "60 minutes");
        assert_eq!(summary.expert_name(), "Prof. Michael Chen");
        assert_eq!(summary.total(), Some(85));
    }

    #[test]
    fn unknown_ids_leave_summary_parts_absent() {
        let types = RecordSet::new(data::get_consultation_types());
        let experts = RecordSet::new(data::get_experts());
        let mut selection = BookingSelection::default();
        selection.select_consultation_type("mentoring");
        selection.select_expert("99");
        let summary = selection.summary(&types, &experts).expect("summary shown");
        assert_eq!(summary.type_title(), "-");
        assert_eq!(summary.total(), None);
    }

    #[test]
    fn contact_details_are_plain_fields() {
        let mut details = ContactDetails::default();
        details.set(ContactDetailsField::Email, "not-an-email".to_string());
        details.set(ContactDetailsField::Goals, "Learn Rust".to_string());
        assert_eq!(details.email, "not-an-email");
        assert_eq!(details.goals, "Learn Rust");
    }
}
