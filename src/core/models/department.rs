//! Department model

use serde::{Deserialize, Serialize};

/// Represents an academic department
///
/// Departments aggregate course and professor ids by append only; nothing is
/// ever removed from either list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Department id (unique across the department repository)
    pub id: String,

    /// Department name
    pub name: String,

    /// Name of the head of department
    pub head_of_department: String,

    /// Ids of offered courses, in registration order
    courses_offered: Vec<String>,

    /// Ids of faculty members, in registration order
    faculty_members: Vec<String>,
}

impl Department {
    /// Create a new department with empty course and faculty rosters
    #[must_use]
    pub const fn new(id: String, name: String, head_of_department: String) -> Self {
        Self {
            id,
            name,
            head_of_department,
            courses_offered: Vec::new(),
            faculty_members: Vec::new(),
        }
    }

    /// Record an offered course id (append-only)
    pub fn add_course(&mut self, course_id: String) {
        self.courses_offered.push(course_id);
    }

    /// Record a faculty member id (append-only)
    pub fn add_professor(&mut self, professor_id: String) {
        self.faculty_members.push(professor_id);
    }

    /// Ids of offered courses
    #[must_use]
    pub fn courses_offered(&self) -> &[String] {
        &self.courses_offered
    }

    /// Ids of faculty members
    #[must_use]
    pub fn faculty_members(&self) -> &[String] {
        &self.faculty_members
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_creation() {
        let dept = Department::new(
            "D1".to_string(),
            "Mathematics".to_string(),
            "Dr. Chen".to_string(),
        );

        assert_eq!(dept.id, "D1");
        assert_eq!(dept.name, "Mathematics");
        assert_eq!(dept.head_of_department, "Dr. Chen");
        assert!(dept.courses_offered().is_empty());
        assert!(dept.faculty_members().is_empty());
    }

    #[test]
    fn test_append_only_rosters() {
        let mut dept = Department::new(
            "D1".to_string(),
            "Mathematics".to_string(),
            "Dr. Chen".to_string(),
        );

        dept.add_course("C101".to_string());
        dept.add_course("C202".to_string());
        dept.add_professor("P1".to_string());

        assert_eq!(
            dept.courses_offered(),
            &["C101".to_string(), "C202".to_string()]
        );
        assert_eq!(dept.faculty_members(), &["P1".to_string()]);
    }
}
