//! Integration tests for cross-entity registry flows

use uni_registry::models::{
    Admin, AttendanceProxy, AttendanceStatus, Classroom, Department, FinalExam, Library,
    Professor, ReturnOutcome, Role,
};
use uni_registry::{DomainError, Registry};

fn university() -> Registry {
    let mut registry = Registry::new();

    registry
        .students
        .add(uni_registry::models::Student::new(
            "S1".to_string(),
            "Amy".to_string(),
            "Mathematics".to_string(),
            "amy@uni.edu".to_string(),
        ))
        .unwrap();
    registry
        .students
        .add(uni_registry::models::Student::new(
            "S2".to_string(),
            "Bob".to_string(),
            "Physics".to_string(),
            "bob@uni.edu".to_string(),
        ))
        .unwrap();
    registry
        .professors
        .add(Professor::new(
            "P1".to_string(),
            "Dr. Chen".to_string(),
            "Mathematics".to_string(),
            "office 302".to_string(),
            "chen@uni.edu".to_string(),
        ))
        .unwrap();
    registry
        .departments
        .add(Department::new(
            "D1".to_string(),
            "Mathematics".to_string(),
            "Dr. Chen".to_string(),
        ))
        .unwrap();
    registry
        .create_course("C101", "Calculus I", "Mathematics", 4.0, "P1")
        .unwrap();
    registry
        .classrooms
        .add(Classroom::new("R1".to_string(), "Hall A".to_string(), 60))
        .unwrap();
    registry
}

#[test]
fn test_full_enrollment_and_grading_flow() {
    let mut registry = university();

    assert!(registry.enroll("S1", "C101").unwrap());
    assert!(registry.enroll("S2", "C101").unwrap());

    // Re-enrolling is a no-op, not an error
    assert!(!registry.enroll("S1", "C101").unwrap());
    assert_eq!(registry.courses.get("C101").unwrap().roster_count(), 2);

    registry.assign_grade("P1", "S1", "C101", "A-").unwrap();
    let amy = registry.students.get("S1").unwrap();
    assert_eq!(amy.enrollment("C101").unwrap().grade.as_deref(), Some("A-"));

    // Bob remains ungraded
    let bob = registry.students.get("S2").unwrap();
    assert!(bob.enrollment("C101").unwrap().grade.is_none());

    registry.unenroll("S2", "C101").unwrap();
    assert_eq!(registry.courses.get("C101").unwrap().roster_count(), 1);
    assert!(!registry.students.get("S2").unwrap().is_enrolled_in("C101"));
}

#[test]
fn test_grading_requires_both_relations() {
    let mut registry = university();
    registry
        .professors
        .add(Professor::new(
            "P2".to_string(),
            "Dr. Ruiz".to_string(),
            "Physics".to_string(),
            "office 101".to_string(),
            "ruiz@uni.edu".to_string(),
        ))
        .unwrap();
    registry.enroll("S1", "C101").unwrap();

    // P2 does not teach C101
    let result = registry.assign_grade("P2", "S1", "C101", "A");
    assert!(matches!(result, Err(DomainError::NotFound(_))));
    assert!(registry
        .students
        .get("S1")
        .unwrap()
        .enrollment("C101")
        .unwrap()
        .grade
        .is_none());
}

#[test]
fn test_scheduling_respects_exact_slot_strings() {
    let mut registry = university();

    registry
        .create_schedule("sch_1", "C101", "P1", "Mon 9-11", "R1")
        .unwrap();

    // Same slot string in the same room: rejected, nothing stored
    let clash = registry.create_schedule("sch_2", "C101", "P1", "Mon 9-11", "R1");
    assert!(matches!(clash, Err(DomainError::Conflict(_))));
    assert!(!registry.schedules.contains("sch_2"));

    // Overlapping interval but a different string: accepted
    registry
        .create_schedule("sch_3", "C101", "P1", "Mon 10-12", "R1")
        .unwrap();
    assert_eq!(registry.schedules.len(), 2);

    // Same slot string in another room: accepted
    registry
        .classrooms
        .add(Classroom::new("R2".to_string(), "Hall B".to_string(), 30))
        .unwrap();
    registry
        .create_schedule("sch_4", "C101", "P1", "Mon 9-11", "R2")
        .unwrap();
}

#[test]
fn test_schedule_update_does_not_rewrite_booking() {
    let mut registry = university();
    registry
        .create_schedule("sch_1", "C101", "P1", "Mon 9-11", "R1")
        .unwrap();

    let schedule = registry.schedules.get_mut("sch_1").unwrap();
    assert!(schedule.update(Some("Tue 9-11"), None));
    assert_eq!(schedule.time_slot(), "Tue 9-11");

    // The room's recorded booking keeps the original slot string
    let room = registry.classrooms.get("R1").unwrap();
    assert_eq!(room.bookings()[0].time_slot, "Mon 9-11");
    assert!(!room.is_available("Mon 9-11"));
    assert!(room.is_available("Tue 9-11"));
}

#[test]
fn test_course_creation_wires_professor_once() {
    let mut registry = university();

    let chen = registry.professors.get("P1").unwrap();
    assert_eq!(chen.courses_taught(), &["C101"]);

    // A second course appends; the first entry is untouched
    registry
        .create_course("C201", "Linear Algebra", "Mathematics", 3.0, "P1")
        .unwrap();
    let chen = registry.professors.get("P1").unwrap();
    assert_eq!(chen.courses_taught(), &["C101", "C201"]);

    // A duplicate course id is rejected before the professor is touched
    let dup = registry.create_course("C101", "Calculus II", "Mathematics", 4.0, "P1");
    assert!(matches!(dup, Err(DomainError::Validation(_))));
    assert_eq!(
        registry.professors.get("P1").unwrap().courses_taught(),
        &["C101", "C201"]
    );
}

#[test]
fn test_exam_results_keyed_by_student_name() {
    let mut registry = university();
    registry
        .exams
        .add(FinalExam::new(
            "exam_1".to_string(),
            "Calculus I".to_string(),
            "2025-06-10".to_string(),
            2.0,
            60.0,
        ))
        .unwrap();

    let exam = registry.exams.get_mut("exam_1").unwrap();
    exam.record_result("Amy", 72.0).unwrap();
    exam.record_result("Bob", 55.0).unwrap();
    exam.record_result("Amy", 88.0).unwrap();

    assert_eq!(exam.results().len(), 2);
    assert_eq!(exam.results()[0].student_name, "Amy");
    assert!((exam.results()[0].score - 88.0).abs() < f64::EPSILON);
    assert_eq!(exam.results()[1].student_name, "Bob");
}

#[test]
fn test_library_lending_walkthrough() {
    let mut registry = university();
    registry.libraries.add(Library::new("L1".to_string())).unwrap();

    let library = registry.libraries.get_mut("L1").unwrap();
    assert_eq!(library.add_book("Calculus", "Stewart", "Math", 2), 2);
    library.register_student("S1", "Amy");

    library.borrow("S1", "Calculus").unwrap();
    library.borrow("S1", "Calculus").unwrap();
    assert_eq!(library.copies_available("Calculus"), 0);
    assert_eq!(
        library.member("S1").unwrap().borrowed(),
        &["Calculus", "Calculus"]
    );

    // Third copy is unavailable
    assert!(matches!(
        library.borrow("S1", "Calculus"),
        Err(DomainError::Conflict(_))
    ));

    // Return one, then a stray return that was never borrowed
    assert_eq!(
        library.return_book("S1", "Calculus").unwrap(),
        ReturnOutcome::Returned
    );
    assert_eq!(
        library.return_book("S1", "Calculus").unwrap(),
        ReturnOutcome::Returned
    );
    assert_eq!(
        library.return_book("S1", "Calculus").unwrap(),
        ReturnOutcome::NotBorrowed
    );
    // The stray return still reshelved a copy
    assert_eq!(library.copies_available("Calculus"), 3);
    assert!(library.member("S1").unwrap().borrowed().is_empty());
}

#[test]
fn test_independent_libraries() {
    let mut registry = university();
    registry.libraries.add(Library::new("L1".to_string())).unwrap();
    registry.libraries.add(Library::new("L2".to_string())).unwrap();

    registry
        .libraries
        .get_mut("L1")
        .unwrap()
        .register_student("S1", "Amy");

    // Registration in one library says nothing about another
    assert!(registry.libraries.get("L1").unwrap().is_registered("S1"));
    assert!(!registry.libraries.get("L2").unwrap().is_registered("S1"));
}

#[test]
fn test_attendance_lifecycle() {
    let mut registry = university();
    registry.enroll("S1", "C101").unwrap();

    let proxy = AttendanceProxy::new(Role::Professor);
    for (date, status) in [
        ("2025-03-10", AttendanceStatus::Present),
        ("2025-03-11", AttendanceStatus::Absent),
        ("2025-03-12", AttendanceStatus::Present),
        ("2025-03-13", AttendanceStatus::Present),
    ] {
        registry
            .record_attendance(&proxy, "S1", "C101", date, status)
            .unwrap();
    }

    let summary = registry.attendance.percentage("S1", Some("C101"));
    assert_eq!((summary.present, summary.total), (3, 4));
    assert!((summary.percent() - 75.0).abs() < f64::EPSILON);
    assert_eq!(summary.to_string(), "3/4 (75.00%)");

    // Flip the absence to present
    let updated = proxy
        .update_status(
            &mut registry.attendance,
            "S1",
            "2025-03-11",
            AttendanceStatus::Present,
        )
        .unwrap();
    assert_eq!(updated, 1);
    let summary = registry.attendance.percentage("S1", Some("C101"));
    assert!((summary.percent() - 100.0).abs() < f64::EPSILON);
}

#[test]
fn test_user_session_lifecycle() {
    let mut registry = university();
    registry
        .users
        .register("U1", "Amy", Role::Student, "amy@uni.edu", "pw1")
        .unwrap();
    registry
        .users
        .register("U2", "Nadia", Role::Admin, "nadia@uni.edu", "pw2")
        .unwrap();

    registry.users.login("amy@uni.edu", "pw1").unwrap();

    // Second session is refused while the first is active
    assert!(matches!(
        registry.users.login("nadia@uni.edu", "pw2"),
        Err(DomainError::Conflict(_))
    ));

    registry.users.logout("amy@uni.edu").unwrap();
    let nadia = registry.users.login("nadia@uni.edu", "pw2").unwrap();
    assert_eq!(nadia.role, Role::Admin);
}

#[test]
fn test_store_remove() {
    let mut registry = university();
    registry.enroll("S2", "C101").unwrap();

    let removed = registry.students.remove("S2").unwrap();
    assert_eq!(removed.name, "Bob");
    assert!(registry.students.get("S2").is_none());
    assert_eq!(registry.students.len(), 1);

    // No cascading cleanup: the roster still lists the removed student
    assert_eq!(registry.courses.get("C101").unwrap().roster_count(), 1);

    assert!(matches!(
        registry.students.remove("S2"),
        Err(DomainError::NotFound(_))
    ));
}

#[test]
fn test_admin_store_and_lookup() {
    let mut registry = university();
    registry
        .add_admin(Admin::new(
            7,
            "Nadia".to_string(),
            "Registrar".to_string(),
            "office 110".to_string(),
            "nadia@uni.edu".to_string(),
        ))
        .unwrap();

    let admin = registry.find_admin_mut(7).unwrap();
    assert!(admin.set_id_from_str("not a number").is_err());
    assert_eq!(admin.id(), 7);

    admin.set_id_from_str("12").unwrap();
    assert!(registry.find_admin(12).is_some());
    assert!(registry.find_admin(7).is_none());
}
