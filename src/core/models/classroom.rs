//! Classroom model

use super::schedule::Schedule;
use crate::core::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// A schedule slot held by a classroom
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Id of the allocated schedule
    pub schedule_id: String,
    /// Time slot recorded at allocation time
    pub time_slot: String,
}

/// Represents a physical classroom with its bookings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classroom {
    /// Classroom id (unique across the classroom repository)
    pub id: String,

    /// Location string (e.g. "Science Building 204")
    pub location: String,

    /// Seat capacity
    pub capacity: u32,

    /// Allocated bookings, in allocation order
    bookings: Vec<Booking>,
}

impl Classroom {
    /// Create a new classroom with no bookings
    #[must_use]
    pub const fn new(id: String, location: String, capacity: u32) -> Self {
        Self {
            id,
            location,
            capacity,
            bookings: Vec::new(),
        }
    }

    /// Whether the given time slot is free in this room
    ///
    /// Conflict detection is exact string equality on the time-slot value; no
    /// interval or day-of-week reasoning is performed.
    #[must_use]
    pub fn is_available(&self, time_slot: &str) -> bool {
        !self.bookings.iter().any(|b| b.time_slot == time_slot)
    }

    /// Allocate a schedule into this room
    ///
    /// # Errors
    /// Returns `Conflict` if another booking already holds the exact same
    /// time-slot string; the booking list is left unchanged
    pub fn allocate(&mut self, schedule: &Schedule) -> DomainResult<()> {
        if !self.is_available(schedule.time_slot()) {
            return Err(DomainError::conflict(format!(
                "time slot {} is already taken in {}",
                schedule.time_slot(),
                self.location
            )));
        }
        self.bookings.push(Booking {
            schedule_id: schedule.id.clone(),
            time_slot: schedule.time_slot().to_string(),
        });
        Ok(())
    }

    /// The room's bookings, in allocation order
    #[must_use]
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hall_a() -> Classroom {
        Classroom::new("R1".to_string(), "Hall A".to_string(), 60)
    }

    fn schedule(id: &str, slot: &str) -> Schedule {
        Schedule::new(
            id.to_string(),
            "C101".to_string(),
            "Calculus I".to_string(),
            "P1".to_string(),
            "Dr. Chen".to_string(),
            slot.to_string(),
            "Hall A".to_string(),
        )
    }

    #[test]
    fn test_availability_is_exact_string_equality() {
        let mut room = hall_a();
        room.allocate(&schedule("sch_1", "Mon 9-11")).unwrap();

        assert!(!room.is_available("Mon 9-11"));
        // Overlapping interval but different string: considered free
        assert!(room.is_available("Mon 10-12"));
    }

    #[test]
    fn test_double_booking_rejected() {
        let mut room = hall_a();
        room.allocate(&schedule("sch_1", "Mon 9-11")).unwrap();

        let result = room.allocate(&schedule("sch_2", "Mon 9-11"));
        assert!(matches!(result, Err(DomainError::Conflict(_))));
        assert_eq!(room.bookings().len(), 1);
    }

    #[test]
    fn test_distinct_slots_coexist() {
        let mut room = hall_a();
        room.allocate(&schedule("sch_1", "Mon 9-11")).unwrap();
        room.allocate(&schedule("sch_2", "Wed 9-11")).unwrap();

        assert_eq!(room.bookings().len(), 2);
        assert_eq!(room.bookings()[1].schedule_id, "sch_2");
    }
}
