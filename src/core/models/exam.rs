//! Final exam model

use crate::core::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// A recorded exam score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamResult {
    /// Student name the score is keyed by
    pub student_name: String,
    /// Score in [0, 100]
    pub score: f64,
}

/// Represents a final exam for a course
///
/// The course is referenced loosely by name string, not by id; the exam
/// survives independently of the course object's lifecycle. Results are keyed
/// by student name, so duplicate names collide (the later score replaces the
/// earlier one in place).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalExam {
    /// Exam id (unique across the exam repository)
    pub id: String,

    /// Course name (loose reference, not an id)
    pub course_name: String,

    /// Exam date string
    pub date: String,

    /// Duration in hours
    pub duration_hours: f32,

    /// Minimum passing score
    pub passing_score: f64,

    /// Recorded results, in insertion order
    results: Vec<ExamResult>,
}

impl FinalExam {
    /// Create a new final exam with no recorded results
    #[must_use]
    pub const fn new(
        id: String,
        course_name: String,
        date: String,
        duration_hours: f32,
        passing_score: f64,
    ) -> Self {
        Self {
            id,
            course_name,
            date,
            duration_hours,
            passing_score,
            results: Vec::new(),
        }
    }

    /// Record a student's score
    ///
    /// A repeated name replaces the earlier score in place, keeping its
    /// original position.
    ///
    /// # Errors
    /// Returns `Validation` if the score is not a finite number in [0, 100];
    /// the results list is left unchanged
    pub fn record_result(&mut self, student_name: &str, score: f64) -> DomainResult<()> {
        if !score.is_finite() {
            return Err(DomainError::validation("score must be a number"));
        }
        if !(0.0..=100.0).contains(&score) {
            return Err(DomainError::validation(
                "score must be between 0 and 100",
            ));
        }
        if let Some(existing) = self
            .results
            .iter_mut()
            .find(|r| r.student_name == student_name)
        {
            existing.score = score;
        } else {
            self.results.push(ExamResult {
                student_name: student_name.to_string(),
                score,
            });
        }
        Ok(())
    }

    /// Recorded results in insertion order
    #[must_use]
    pub fn results(&self) -> &[ExamResult] {
        &self.results
    }

    /// One-line scheduling announcement for display
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "Final Exam {} for course '{}' is scheduled on {}.",
            self.id, self.course_name, self.date
        )
    }
}
