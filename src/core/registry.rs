//! Entity stores and the registry aggregate
//!
//! Each entity kind lives in its own [`Store`] keyed by id; cross-entity
//! operations (enrollment, grading, scheduling, attendance) go through
//! [`Registry`] methods so both sides of a relation are updated together.

use crate::core::error::{DomainError, DomainResult};
use crate::core::models::{
    Admin, Attendance, AttendanceProxy, AttendanceReport, AttendanceStatus, Classroom, Course,
    Department, FinalExam, Library, Professor, Schedule, Student, StudentInfo, UserDirectory,
};

/// An entity addressable by a string id
pub trait Keyed {
    /// The entity's unique id within its store
    fn key(&self) -> &str;
}

impl Keyed for Student {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Professor {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Course {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Department {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Classroom {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Schedule {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for FinalExam {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Library {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Insertion-ordered collection of one entity kind, unique by id
#[derive(Debug, Clone, PartialEq)]
pub struct Store<T: Keyed> {
    kind: &'static str,
    items: Vec<T>,
}

impl<T: Keyed> Store<T> {
    /// Create an empty store; `kind` names the entity in error messages
    #[must_use]
    pub const fn new(kind: &'static str) -> Self {
        Self {
            kind,
            items: Vec::new(),
        }
    }

    /// Add an entity
    ///
    /// # Errors
    /// Returns `Validation` if an entity with the same id is already stored;
    /// the store is left unchanged
    pub fn add(&mut self, item: T) -> DomainResult<()> {
        if self.contains(item.key()) {
            return Err(DomainError::validation(format!(
                "a {} with ID {} already exists",
                self.kind,
                item.key()
            )));
        }
        self.items.push(item);
        Ok(())
    }

    /// Whether an entity with this id is stored
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.key() == id)
    }

    /// Look up an entity by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.key() == id)
    }

    /// Look up an entity mutably by id
    pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.key() == id)
    }

    /// Remove and return an entity
    ///
    /// # Errors
    /// Returns `NotFound` if no entity has this id
    pub fn remove(&mut self, id: &str) -> DomainResult<T> {
        let position = self
            .items
            .iter()
            .position(|item| item.key() == id)
            .ok_or_else(|| {
                DomainError::not_found(format!("no {} with ID {id} found", self.kind))
            })?;
        Ok(self.items.remove(position))
    }

    /// All entities in insertion order
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Iterate over entities in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Number of stored entities
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, T: Keyed> IntoIterator for &'a Store<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// The whole university's state
///
/// Owns one store per entity kind plus the attendance ledger and the account
/// directory. Cross-entity operations live here: the stores are separate
/// fields, so two sides of a relation can be borrowed mutably at once.
#[derive(Debug, Clone, PartialEq)]
pub struct Registry {
    /// Students, keyed by id
    pub students: Store<Student>,
    /// Professors, keyed by id
    pub professors: Store<Professor>,
    /// Courses, keyed by id
    pub courses: Store<Course>,
    /// Departments, keyed by id
    pub departments: Store<Department>,
    /// Classrooms, keyed by id
    pub classrooms: Store<Classroom>,
    /// Schedules, keyed by id
    pub schedules: Store<Schedule>,
    /// Final exams, keyed by id
    pub exams: Store<FinalExam>,
    /// Libraries, keyed by id
    pub libraries: Store<Library>,
    /// Administrators, keyed by numeric id
    admins: Vec<Admin>,
    /// The attendance ledger, shared by every course
    pub attendance: AttendanceReport,
    /// Account directory with the single-session rule
    pub users: UserDirectory,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            students: Store::new("student"),
            professors: Store::new("professor"),
            courses: Store::new("course"),
            departments: Store::new("department"),
            classrooms: Store::new("classroom"),
            schedules: Store::new("schedule"),
            exams: Store::new("exam"),
            libraries: Store::new("library"),
            admins: Vec::new(),
            attendance: AttendanceReport::new(),
            users: UserDirectory::new(),
        }
    }

    /// Add an administrator
    ///
    /// # Errors
    /// Returns `Validation` if an admin with the same numeric id exists
    pub fn add_admin(&mut self, admin: Admin) -> DomainResult<()> {
        if self.admins.iter().any(|a| a.id() == admin.id()) {
            return Err(DomainError::validation(format!(
                "an admin with ID {} already exists",
                admin.id()
            )));
        }
        self.admins.push(admin);
        Ok(())
    }

    /// Look up an administrator by numeric id
    #[must_use]
    pub fn find_admin(&self, id: i64) -> Option<&Admin> {
        self.admins.iter().find(|a| a.id() == id)
    }

    /// Look up an administrator mutably by numeric id
    pub fn find_admin_mut(&mut self, id: i64) -> Option<&mut Admin> {
        self.admins.iter_mut().find(|a| a.id() == id)
    }

    /// All administrators in insertion order
    #[must_use]
    pub fn admins(&self) -> &[Admin] {
        &self.admins
    }

    /// Create a course owned by an existing professor
    ///
    /// The course id lands in the professor's taught list as part of
    /// construction.
    ///
    /// # Errors
    /// - `Validation` if a course with this id already exists
    /// - `NotFound` if the professor does not exist
    pub fn create_course(
        &mut self,
        id: &str,
        name: &str,
        department: &str,
        credits: f32,
        professor_id: &str,
    ) -> DomainResult<()> {
        if self.courses.contains(id) {
            return Err(DomainError::validation(format!(
                "a course with ID {id} already exists"
            )));
        }
        let professor = self.professors.get_mut(professor_id).ok_or_else(|| {
            DomainError::not_found(format!("no professor with ID {professor_id} found"))
        })?;
        let course = Course::new(
            id.to_string(),
            name.to_string(),
            department.to_string(),
            credits,
            professor,
        );
        self.courses.add(course)
    }

    /// Enroll a student in a course, updating both sides
    ///
    /// # Returns
    /// `true` if the enrollment was added, `false` if the student was already
    /// enrolled (no change on either side)
    ///
    /// # Errors
    /// Returns `NotFound` if either the student or the course does not exist
    pub fn enroll(&mut self, student_id: &str, course_id: &str) -> DomainResult<bool> {
        let student = self.students.get_mut(student_id).ok_or_else(|| {
            DomainError::not_found(format!("no student with ID {student_id} found"))
        })?;
        let course = self.courses.get_mut(course_id).ok_or_else(|| {
            DomainError::not_found(format!("no course with ID {course_id} found"))
        })?;
        let added = student.enroll(&course.id, &course.name);
        if added {
            course.add_student(student);
        }
        Ok(added)
    }

    /// Remove a student from a course, updating both sides
    ///
    /// # Errors
    /// - `NotFound` if either entity is missing or the student is not on the
    ///   course's roster
    /// - `Conflict` if the two sides of the relation are out of sync; nothing
    ///   is mutated
    pub fn unenroll(&mut self, student_id: &str, course_id: &str) -> DomainResult<()> {
        let student = self.students.get_mut(student_id).ok_or_else(|| {
            DomainError::not_found(format!("no student with ID {student_id} found"))
        })?;
        let course = self.courses.get_mut(course_id).ok_or_else(|| {
            DomainError::not_found(format!("no course with ID {course_id} found"))
        })?;
        course.remove_student(student)
    }

    /// Have a professor assign a grade to a student
    ///
    /// # Errors
    /// Returns `NotFound` if any entity is missing, if the professor does not
    /// teach the course, or if the student is not enrolled in it
    pub fn assign_grade(
        &mut self,
        professor_id: &str,
        student_id: &str,
        course_id: &str,
        grade: &str,
    ) -> DomainResult<()> {
        let professor = self.professors.get(professor_id).ok_or_else(|| {
            DomainError::not_found(format!("no professor with ID {professor_id} found"))
        })?;
        let student = self.students.get_mut(student_id).ok_or_else(|| {
            DomainError::not_found(format!("no student with ID {student_id} found"))
        })?;
        professor.assign_grade(student, course_id, grade)
    }

    /// Create a schedule and allocate it into a classroom
    ///
    /// Display names are resolved from the referenced course, professor, and
    /// classroom at creation time. If the room already holds the exact
    /// time-slot string, nothing is stored anywhere.
    ///
    /// # Errors
    /// - `Validation` if a schedule with this id already exists
    /// - `NotFound` if the course, professor, or classroom is missing
    /// - `Conflict` if the room's slot is taken
    pub fn create_schedule(
        &mut self,
        id: &str,
        course_id: &str,
        professor_id: &str,
        time_slot: &str,
        classroom_id: &str,
    ) -> DomainResult<()> {
        if self.schedules.contains(id) {
            return Err(DomainError::validation(format!(
                "a schedule with ID {id} already exists"
            )));
        }
        let course = self.courses.get(course_id).ok_or_else(|| {
            DomainError::not_found(format!("no course with ID {course_id} found"))
        })?;
        let professor = self.professors.get(professor_id).ok_or_else(|| {
            DomainError::not_found(format!("no professor with ID {professor_id} found"))
        })?;
        let room = self.classrooms.get_mut(classroom_id).ok_or_else(|| {
            DomainError::not_found(format!("no classroom with ID {classroom_id} found"))
        })?;
        let schedule = Schedule::new(
            id.to_string(),
            course.id.clone(),
            course.name.clone(),
            professor.id.clone(),
            professor.name.clone(),
            time_slot.to_string(),
            room.location.clone(),
        );
        room.allocate(&schedule)?;
        self.schedules.add(schedule)
    }

    /// Record an attendance row through the role-gated proxy
    ///
    /// # Errors
    /// - `Unauthorized` if the proxy's role may not manage attendance
    /// - `NotFound` if the student or course is missing
    /// - `Validation` if the date is malformed
    pub fn record_attendance(
        &mut self,
        proxy: &AttendanceProxy,
        student_id: &str,
        course_id: &str,
        date: &str,
        status: AttendanceStatus,
    ) -> DomainResult<()> {
        let student = self.students.get(student_id).ok_or_else(|| {
            DomainError::not_found(format!("no student with ID {student_id} found"))
        })?;
        let course = self.courses.get(course_id).ok_or_else(|| {
            DomainError::not_found(format!("no course with ID {course_id} found"))
        })?;
        let record = Attendance::new(student, course, date, status)?;
        proxy.add_record(&mut self.attendance, record)
    }

    /// Number of registered students
    #[must_use]
    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// Register a student with the given attributes
    ///
    /// # Errors
    /// Returns `Validation` if a student with this id already exists
    pub fn add_student(
        &mut self,
        id: &str,
        name: &str,
        major: &str,
        email: &str,
    ) -> DomainResult<()> {
        self.students.add(Student::new(
            id.to_string(),
            name.to_string(),
            major.to_string(),
            email.to_string(),
        ))
    }

    /// Snapshot of one student's public state, if the student exists
    #[must_use]
    pub fn student_info(&self, student_id: &str) -> Option<StudentInfo> {
        self.students.get(student_id).map(Student::info)
    }
}
