//! Course model

use super::professor::Professor;
use super::student::Student;
use crate::core::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Snapshot of a course's public state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseInfo {
    /// Course id
    pub id: String,
    /// Course name
    pub name: String,
    /// Department name
    pub department: String,
    /// Credit hours
    pub credits: f32,
    /// Id of the owning professor
    pub professor_id: String,
    /// Ids of enrolled students, ordered by id
    pub enrolled_students: Vec<String>,
}

/// Represents an offered course
///
/// Every course has exactly one professor, assigned at construction; the
/// course id is recorded in that professor's taught list as a creation-time
/// side effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course id (unique across the course repository)
    pub id: String,

    /// Course name
    pub name: String,

    /// Department name
    pub department: String,

    /// Credit hours
    pub credits: f32,

    /// Id of the owning professor
    professor_id: String,

    /// Roster of enrolled student ids, ordered by id
    enrolled_students: BTreeSet<String>,
}

impl Course {
    /// Create a new course owned by `professor`
    ///
    /// Side effect: appends this course's id to the professor's taught list.
    #[must_use]
    pub fn new(
        id: String,
        name: String,
        department: String,
        credits: f32,
        professor: &mut Professor,
    ) -> Self {
        professor.record_taught_course(id.clone());
        Self {
            id,
            name,
            department,
            credits,
            professor_id: professor.id.clone(),
            enrolled_students: BTreeSet::new(),
        }
    }

    /// Id of the owning professor
    #[must_use]
    pub fn professor_id(&self) -> &str {
        &self.professor_id
    }

    /// Add a student to the roster (idempotent, keyed by student id)
    ///
    /// # Returns
    /// `true` if the student was added, `false` if already on the roster
    pub fn add_student(&mut self, student: &Student) -> bool {
        self.enrolled_students.insert(student.id.clone())
    }

    /// Whether the given student id is on the roster
    #[must_use]
    pub fn has_student(&self, student_id: &str) -> bool {
        self.enrolled_students.contains(student_id)
    }

    /// Remove a student from both sides of the enrollment relation
    ///
    /// Removes the id from this course's roster and the course entry from the
    /// student's enrollment map. Both entries must exist; otherwise nothing is
    /// mutated on either side.
    ///
    /// # Errors
    /// Returns `NotFound` if the student is not on this course's roster, or
    /// `Conflict` if the roster entry exists but the student's reciprocal
    /// enrollment entry is missing
    pub fn remove_student(&mut self, student: &mut Student) -> DomainResult<()> {
        if !self.enrolled_students.contains(&student.id) {
            return Err(DomainError::not_found(format!(
                "{} is not enrolled in {}",
                student.name, self.name
            )));
        }
        if !student.is_enrolled_in(&self.id) {
            return Err(DomainError::conflict(format!(
                "enrollment records for {} and {} are out of sync",
                student.name, self.name
            )));
        }
        self.enrolled_students.remove(&student.id);
        student.drop_course(&self.id)?;
        Ok(())
    }

    /// Roster of enrolled student ids, ordered by id
    pub fn roster(&self) -> impl Iterator<Item = &String> {
        self.enrolled_students.iter()
    }

    /// Number of enrolled students
    #[must_use]
    pub fn roster_count(&self) -> usize {
        self.enrolled_students.len()
    }

    /// Build a snapshot of the course's public state (defensive copy)
    #[must_use]
    pub fn info(&self) -> CourseInfo {
        CourseInfo {
            id: self.id.clone(),
            name: self.name.clone(),
            department: self.department.clone(),
            credits: self.credits,
            professor_id: self.professor_id.clone(),
            enrolled_students: self.enrolled_students.iter().cloned().collect(),
        }
    }
}
