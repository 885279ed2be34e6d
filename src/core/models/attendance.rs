//! Attendance records, reporting, and the role-gated proxy

use super::course::Course;
use super::student::Student;
use super::user::Role;
use crate::core::error::{DomainError, DomainResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Attendance status for a single day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    /// The student attended
    Present,
    /// The student did not attend
    Absent,
}

impl FromStr for AttendanceStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Present" | "present" => Ok(Self::Present),
            "Absent" | "absent" => Ok(Self::Absent),
            _ => Err(DomainError::validation(
                "status must be 'Present' or 'Absent'",
            )),
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present => write!(f, "Present"),
            Self::Absent => write!(f, "Absent"),
        }
    }
}

/// Validate a strict `YYYY-MM-DD` date string
///
/// # Errors
/// Returns `Validation` if the string does not parse as a calendar date
pub fn validate_date(date: &str) -> DomainResult<()> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| DomainError::validation("invalid date format, use YYYY-MM-DD"))
}

/// One attendance row for a (student, course, date)
///
/// Rows have no id of their own; (student id, date) is the conventional
/// lookup key, and nothing prevents recording several rows for the same day
/// across different courses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendance {
    /// Id of the student the row belongs to
    pub student_id: String,
    /// Student name at recording time
    pub student_name: String,
    /// Id of the course the row belongs to
    pub course_id: String,
    /// Course name at recording time
    pub course_name: String,
    /// Date in `YYYY-MM-DD`
    date: String,
    /// Recorded status
    status: AttendanceStatus,
}

impl Attendance {
    /// Create an attendance row
    ///
    /// # Errors
    /// Returns `Validation` if `date` is not a valid `YYYY-MM-DD` date;
    /// construction fails entirely
    pub fn new(
        student: &Student,
        course: &Course,
        date: &str,
        status: AttendanceStatus,
    ) -> DomainResult<Self> {
        validate_date(date)?;
        Ok(Self {
            student_id: student.id.clone(),
            student_name: student.name.clone(),
            course_id: course.id.clone(),
            course_name: course.name.clone(),
            date: date.to_string(),
            status,
        })
    }

    /// The row's date
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// The recorded status
    #[must_use]
    pub const fn status(&self) -> AttendanceStatus {
        self.status
    }

    /// Overwrite the recorded status
    pub fn set_status(&mut self, status: AttendanceStatus) {
        self.status = status;
    }

    /// One-line description for display
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "Student: {} | Course: {} | Date: {} | Status: {}",
            self.student_name, self.course_name, self.date, self.status
        )
    }
}

/// Attendance percentage for a student, optionally filtered by course
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceSummary {
    /// Rows with status Present
    pub present: usize,
    /// All matching rows
    pub total: usize,
}

impl AttendanceSummary {
    /// Present/total as a percentage; 0 when there are no rows
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.present as f64 / self.total as f64 * 100.0
        }
    }

    /// Whether there were no matching rows (callers should surface a notice)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }
}

impl fmt::Display for AttendanceSummary {
    /// Two-decimal percentage, e.g. `3/4 (75.00%)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({:.2}%)", self.present, self.total, self.percent())
    }
}

/// Ordered ledger of attendance rows with aggregation queries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceReport {
    records: Vec<Attendance>,
}

impl AttendanceReport {
    /// Create an empty ledger
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a row
    pub fn add(&mut self, record: Attendance) {
        self.records.push(record);
    }

    /// All rows in recording order
    #[must_use]
    pub fn records(&self) -> &[Attendance] {
        &self.records
    }

    /// Rows for one student, in recording order
    #[must_use]
    pub fn for_student(&self, student_id: &str) -> Vec<&Attendance> {
        self.records
            .iter()
            .filter(|r| r.student_id == student_id)
            .collect()
    }

    /// Rows for one course, in recording order
    #[must_use]
    pub fn for_course(&self, course_id: &str) -> Vec<&Attendance> {
        self.records
            .iter()
            .filter(|r| r.course_id == course_id)
            .collect()
    }

    /// Attendance percentage for a student, optionally filtered by course
    #[must_use]
    pub fn percentage(&self, student_id: &str, course_id: Option<&str>) -> AttendanceSummary {
        let mut present = 0;
        let mut total = 0;
        for record in &self.records {
            if record.student_id == student_id
                && course_id.is_none_or(|cid| record.course_id == cid)
            {
                total += 1;
                if record.status() == AttendanceStatus::Present {
                    present += 1;
                }
            }
        }
        AttendanceSummary { present, total }
    }
}

/// Role-gated facade over an attendance ledger
///
/// Only `admin` and `professor` roles may mutate records through the proxy;
/// unauthorized calls fail without touching the ledger. The proxy holds the
/// caller's role, not the records; the ledger is passed to each call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceProxy {
    role: Role,
}

impl AttendanceProxy {
    /// Create a proxy acting on behalf of `role`
    #[must_use]
    pub const fn new(role: Role) -> Self {
        Self { role }
    }

    /// The role this proxy acts for
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    fn authorize(&self) -> DomainResult<()> {
        if self.role.can_manage_attendance() {
            Ok(())
        } else {
            Err(DomainError::unauthorized(
                "only admins and professors can manage attendance",
            ))
        }
    }

    /// Append a row to the ledger
    ///
    /// # Errors
    /// Returns `Unauthorized` if the proxy's role may not manage attendance
    pub fn add_record(&self, report: &mut AttendanceReport, record: Attendance) -> DomainResult<()> {
        self.authorize()?;
        report.add(record);
        Ok(())
    }

    /// View rows, optionally filtered by student and/or course
    #[must_use]
    pub fn view_records<'a>(
        &self,
        report: &'a AttendanceReport,
        student_id: Option<&str>,
        course_id: Option<&str>,
    ) -> Vec<&'a Attendance> {
        report
            .records()
            .iter()
            .filter(|r| {
                student_id.is_none_or(|sid| r.student_id == sid)
                    && course_id.is_none_or(|cid| r.course_id == cid)
            })
            .collect()
    }

    /// Update every row matching (student id, date) to `new_status`
    ///
    /// A student may have rows for several courses on the same day; all of
    /// them are updated.
    ///
    /// # Returns
    /// The number of rows updated
    ///
    /// # Errors
    /// - `Unauthorized` if the proxy's role may not manage attendance
    /// - `Validation` if `date` is not a valid `YYYY-MM-DD` date
    /// - `NotFound` if no row matches; the ledger is unchanged
    pub fn update_status(
        &self,
        report: &mut AttendanceReport,
        student_id: &str,
        date: &str,
        new_status: AttendanceStatus,
    ) -> DomainResult<usize> {
        self.authorize()?;
        validate_date(date)?;

        let mut updated = 0;
        for record in &mut report.records {
            if record.student_id == student_id && record.date() == date {
                record.set_status(new_status);
                updated += 1;
            }
        }
        if updated == 0 {
            return Err(DomainError::not_found(
                "no matching attendance record found",
            ));
        }
        Ok(updated)
    }
}
