//! Student model

use crate::core::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single entry in a student's enrollment map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrolledCourse {
    /// Course name at enrollment time
    pub name: String,

    /// Grade, once assigned; `None` until graded
    pub grade: Option<String>,
}

/// Snapshot of a student's public state, safe to hand to any front end.
///
/// Field names serialize to the wire keys used by the network protocol's
/// `GET_STUDENT_INFO` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentInfo {
    /// Student id
    #[serde(rename = "ID")]
    pub id: String,
    /// Full name
    #[serde(rename = "Name")]
    pub name: String,
    /// Declared major
    #[serde(rename = "Major")]
    pub major: String,
    /// Contact email
    #[serde(rename = "Email")]
    pub email: String,
    /// Enrollments rendered as `"courseId - courseName"` lines
    #[serde(rename = "Courses Enrolled")]
    pub courses_enrolled: Vec<String>,
}

/// Represents an enrolled student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Student id (unique across the student repository)
    pub id: String,

    /// Full name
    pub name: String,

    /// Declared major
    pub major: String,

    /// Contact email
    pub email: String,

    /// Enrollment map keyed by course id, ordered by course id
    courses_enrolled: BTreeMap<String, EnrolledCourse>,
}

impl Student {
    /// Create a new student with an empty enrollment map
    #[must_use]
    pub const fn new(id: String, name: String, major: String, email: String) -> Self {
        Self {
            id,
            name,
            major,
            email,
            courses_enrolled: BTreeMap::new(),
        }
    }

    /// Enroll in a course (idempotent)
    ///
    /// # Returns
    /// `true` if the enrollment was added, `false` if the student was already
    /// enrolled in that course; re-enrolling changes nothing
    pub fn enroll(&mut self, course_id: &str, course_name: &str) -> bool {
        if self.courses_enrolled.contains_key(course_id) {
            return false;
        }
        self.courses_enrolled.insert(
            course_id.to_string(),
            EnrolledCourse {
                name: course_name.to_string(),
                grade: None,
            },
        );
        true
    }

    /// Drop a course
    ///
    /// # Returns
    /// The name of the dropped course
    ///
    /// # Errors
    /// Returns `NotFound` if the student is not enrolled in `course_id`
    pub fn drop_course(&mut self, course_id: &str) -> DomainResult<String> {
        self.courses_enrolled.remove(course_id).map_or_else(
            || {
                Err(DomainError::not_found(format!(
                    "{} is not enrolled in course {course_id}",
                    self.name
                )))
            },
            |entry| Ok(entry.name),
        )
    }

    /// Set the grade for an enrolled course
    ///
    /// # Errors
    /// Returns `NotFound` if the student is not enrolled in `course_id`
    pub fn set_grade(&mut self, course_id: &str, grade: &str) -> DomainResult<()> {
        match self.courses_enrolled.get_mut(course_id) {
            Some(entry) => {
                entry.grade = Some(grade.to_string());
                Ok(())
            }
            None => Err(DomainError::not_found(format!(
                "{} is not enrolled in course {course_id}",
                self.name
            ))),
        }
    }

    /// Whether the student is enrolled in the given course
    #[must_use]
    pub fn is_enrolled_in(&self, course_id: &str) -> bool {
        self.courses_enrolled.contains_key(course_id)
    }

    /// Look up a single enrollment entry
    #[must_use]
    pub fn enrollment(&self, course_id: &str) -> Option<&EnrolledCourse> {
        self.courses_enrolled.get(course_id)
    }

    /// Iterate over (course id, entry) pairs, ordered by course id
    pub fn enrollments(&self) -> impl Iterator<Item = (&String, &EnrolledCourse)> {
        self.courses_enrolled.iter()
    }

    /// Number of enrolled courses
    #[must_use]
    pub fn enrollment_count(&self) -> usize {
        self.courses_enrolled.len()
    }

    /// Build a snapshot of the student's public state
    ///
    /// The snapshot is a defensive copy; mutating it never touches the
    /// student's own enrollment map.
    #[must_use]
    pub fn info(&self) -> StudentInfo {
        StudentInfo {
            id: self.id.clone(),
            name: self.name.clone(),
            major: self.major.clone(),
            email: self.email.clone(),
            courses_enrolled: self
                .courses_enrolled
                .iter()
                .map(|(course_id, entry)| format!("{course_id} - {}", entry.name))
                .collect(),
        }
    }
}
