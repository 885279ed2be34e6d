//! Professor model

use super::student::Student;
use crate::core::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Represents a faculty member who teaches courses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Professor {
    /// Professor id (unique across the professor repository)
    pub id: String,

    /// Full name
    pub name: String,

    /// Department name
    pub department: String,

    /// Contact info (phone, office, ...)
    pub contact: String,

    /// Contact email
    pub email: String,

    /// Ids of courses this professor teaches
    courses_taught: Vec<String>,
}

impl Professor {
    /// Create a new professor with an empty taught-course list
    #[must_use]
    pub const fn new(
        id: String,
        name: String,
        department: String,
        contact: String,
        email: String,
    ) -> Self {
        Self {
            id,
            name,
            department,
            contact,
            email,
            courses_taught: Vec::new(),
        }
    }

    /// Ids of courses this professor teaches
    #[must_use]
    pub fn courses_taught(&self) -> &[String] {
        &self.courses_taught
    }

    /// Whether this professor teaches the given course
    #[must_use]
    pub fn teaches(&self, course_id: &str) -> bool {
        self.courses_taught.iter().any(|id| id == course_id)
    }

    /// Record a course id in the taught list.
    ///
    /// Called by `Course::new` when a course is assigned to this professor at
    /// creation time. Nothing ever removes an id from this list; a taught id
    /// outlives its course (no cascading delete).
    pub(crate) fn record_taught_course(&mut self, course_id: String) {
        if !self.courses_taught.contains(&course_id) {
            self.courses_taught.push(course_id);
        }
    }

    /// Assign a grade to a student for one of this professor's courses
    ///
    /// Succeeds only if `course_id` is in this professor's taught list AND in
    /// the student's enrollment map. This is the one place outside `Student`
    /// allowed to write into a student's enrollment record.
    ///
    /// # Errors
    /// Returns `NotFound` if either side of the condition fails; the student's
    /// record is left unchanged
    pub fn assign_grade(
        &self,
        student: &mut Student,
        course_id: &str,
        grade: &str,
    ) -> DomainResult<()> {
        if !self.teaches(course_id) || !student.is_enrolled_in(course_id) {
            return Err(DomainError::not_found(
                "cannot assign grade: course not taught or student not enrolled".to_string(),
            ));
        }
        student.set_grade(course_id, grade)
    }

    /// List (student name, course name) pairs for every supplied student
    /// enrolled in one of this professor's courses.
    ///
    /// Pure query; iterates the supplied collection without mutating anything.
    #[must_use]
    pub fn students_taught(&self, students: &[Student]) -> Vec<(String, String)> {
        let mut found = Vec::new();
        for student in students {
            for (course_id, entry) in student.enrollments() {
                if self.teaches(course_id) {
                    found.push((student.name.clone(), entry.name.clone()));
                }
            }
        }
        found
    }
}
