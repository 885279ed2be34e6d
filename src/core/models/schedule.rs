//! Schedule model

use serde::{Deserialize, Serialize};

/// A scheduled class meeting
///
/// References its course and professor by id, plus display names resolved at
/// creation time. The time slot is an opaque descriptive string (e.g.
/// "Mon 9-11") compared only for exact equality by the classroom conflict
/// check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Schedule id (unique across the schedule repository)
    pub id: String,

    /// Id of the scheduled course
    course_id: String,

    /// Course name at creation time
    course_name: String,

    /// Id of the teaching professor
    professor_id: String,

    /// Professor name at creation time
    professor_name: String,

    /// Opaque time-slot string
    time_slot: String,

    /// Location string (classroom location at allocation time)
    location: String,
}

impl Schedule {
    /// Create a new schedule entry
    #[must_use]
    pub const fn new(
        id: String,
        course_id: String,
        course_name: String,
        professor_id: String,
        professor_name: String,
        time_slot: String,
        location: String,
    ) -> Self {
        Self {
            id,
            course_id,
            course_name,
            professor_id,
            professor_name,
            time_slot,
            location,
        }
    }

    /// Id of the scheduled course
    #[must_use]
    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    /// Id of the teaching professor
    #[must_use]
    pub fn professor_id(&self) -> &str {
        &self.professor_id
    }

    /// The opaque time-slot string
    #[must_use]
    pub fn time_slot(&self) -> &str {
        &self.time_slot
    }

    /// The location string
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Apply a controlled update
    ///
    /// Each field, if supplied non-empty, overwrites the existing value;
    /// absent or empty fields are left untouched. The update is NOT
    /// re-validated against the owning classroom's other schedules, and the
    /// room's recorded booking keeps its original slot.
    ///
    /// # Returns
    /// `true` if any field changed
    pub fn update(&mut self, time_slot: Option<&str>, location: Option<&str>) -> bool {
        let mut changed = false;
        if let Some(slot) = time_slot {
            if !slot.is_empty() {
                self.time_slot = slot.to_string();
                changed = true;
            }
        }
        if let Some(loc) = location {
            if !loc.is_empty() {
                self.location = loc.to_string();
                changed = true;
            }
        }
        changed
    }

    /// One-line description for display
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "Schedule ID: {}, Course: {}, Professor: {}, Time Slot: {}, Location: {}",
            self.id, self.course_name, self.professor_name, self.time_slot, self.location
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monday_slot() -> Schedule {
        Schedule::new(
            "sch_1".to_string(),
            "C101".to_string(),
            "Calculus I".to_string(),
            "P1".to_string(),
            "Dr. Chen".to_string(),
            "Mon 9-11".to_string(),
            "Hall A".to_string(),
        )
    }

    #[test]
    fn test_update_both_fields() {
        let mut schedule = monday_slot();

        assert!(schedule.update(Some("Tue 9-11"), Some("Hall B")));
        assert_eq!(schedule.time_slot(), "Tue 9-11");
        assert_eq!(schedule.location(), "Hall B");
    }

    #[test]
    fn test_update_partial() {
        let mut schedule = monday_slot();

        assert!(schedule.update(Some("Tue 9-11"), None));
        assert_eq!(schedule.time_slot(), "Tue 9-11");
        assert_eq!(schedule.location(), "Hall A");
    }

    #[test]
    fn test_update_empty_strings_are_ignored() {
        let mut schedule = monday_slot();

        assert!(!schedule.update(Some(""), Some("")));
        assert_eq!(schedule.time_slot(), "Mon 9-11");
        assert_eq!(schedule.location(), "Hall A");
    }

    #[test]
    fn test_describe() {
        let schedule = monday_slot();
        let line = schedule.describe();
        assert!(line.contains("sch_1"));
        assert!(line.contains("Calculus I"));
        assert!(line.contains("Mon 9-11"));
    }
}
