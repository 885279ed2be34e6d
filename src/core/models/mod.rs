//! Data models for the university registry

pub mod admin;
pub mod attendance;
pub mod classroom;
pub mod course;
pub mod department;
pub mod exam;
pub mod library;
pub mod professor;
pub mod schedule;
pub mod student;
pub mod user;

pub use admin::Admin;
pub use attendance::{
    Attendance, AttendanceProxy, AttendanceReport, AttendanceStatus, AttendanceSummary,
};
pub use classroom::{Booking, Classroom};
pub use course::{Course, CourseInfo};
pub use department::Department;
pub use exam::{ExamResult, FinalExam};
pub use library::{Book, BookMatch, Library, Member, ReturnOutcome};
pub use professor::Professor;
pub use schedule::Schedule;
pub use student::{EnrolledCourse, Student, StudentInfo};
pub use user::{Role, User, UserDirectory};
