//! Interactive console command handler
//!
//! Presents the numbered management menu over an in-memory [`Registry`].
//! Every mutation goes through the registry so both sides of a relation stay
//! consistent; errors come back as values and are printed, never panicked.

use logger::debug;
use std::io::{self, Write};
use std::str::FromStr;
use uni_registry::models::{
    Admin, AttendanceProxy, AttendanceStatus, Classroom, Department, FinalExam, Library,
    Professor, ReturnOutcome, Role,
};
use uni_registry::Registry;

/// Run the interactive console until the user exits
pub fn run() {
    let mut registry = Registry::new();

    loop {
        print_menu();
        let choice = prompt("Enter your choice: ");
        debug!("Menu choice: {choice}");
        if !dispatch(&mut registry, &choice) {
            break;
        }
    }
}

fn print_menu() {
    println!("\nUniversity Management System");
    println!("1. Add Student");
    println!("2. Add Professor");
    println!("3. Add Course");
    println!("4. Enroll Student in Course");
    println!("5. Remove Student from Course");
    println!("6. Show Student Courses");
    println!("7. Show Course Students");
    println!("8. Add Department");
    println!("9. Show Department Info");
    println!("10. Add Administrator");
    println!("11. Show Administrator Info");
    println!("12. Add Classroom");
    println!("13. Create Schedule");
    println!("14. Update Schedule");
    println!("15. View All Schedules");
    println!("16. Add Exam");
    println!("17. Schedule Exam");
    println!("18. Record Exam Results");
    println!("19. View Exam Results");
    println!("20. Add Library");
    println!("21. Add Book to Library");
    println!("22. Register Student to Library");
    println!("23. Borrow Book from Library");
    println!("24. Return Book to Library");
    println!("25. Search Book in Library");
    println!("26. Record Attendance");
    println!("27. View Student Attendance");
    println!("28. View Course Attendance");
    println!("29. Calculate Attendance Percentage");
    println!("30. Update Attendance Status");
    println!("31. Login");
    println!("32. Logout");
    println!("33. View Dashboard");
    println!("34. Register User");
    println!("35. Exit");
}

/// Handle one menu choice; returns `false` when the user exits
#[allow(clippy::too_many_lines)]
fn dispatch(registry: &mut Registry, choice: &str) -> bool {
    match choice {
        "1" => add_student(registry),
        "2" => add_professor(registry),
        "3" => add_course(registry),
        "4" => enroll_student(registry),
        "5" => remove_student(registry),
        "6" => show_student_courses(registry),
        "7" => show_course_students(registry),
        "8" => add_department(registry),
        "9" => show_department_info(registry),
        "10" => add_administrator(registry),
        "11" => show_administrator_info(registry),
        "12" => add_classroom(registry),
        "13" => create_schedule(registry),
        "14" => update_schedule(registry),
        "15" => view_all_schedules(registry),
        "16" => add_exam(registry),
        "17" => schedule_exam(registry),
        "18" => record_exam_results(registry),
        "19" => view_exam_results(registry),
        "20" => add_library(registry),
        "21" => add_book(registry),
        "22" => register_library_member(registry),
        "23" => borrow_book(registry),
        "24" => return_book(registry),
        "25" => search_books(registry),
        "26" => record_attendance(registry),
        "27" => view_student_attendance(registry),
        "28" => view_course_attendance(registry),
        "29" => attendance_percentage(registry),
        "30" => update_attendance_status(registry),
        "31" => login(registry),
        "32" => logout(registry),
        "33" => view_dashboard(registry),
        "34" => register_user(registry),
        "35" => {
            println!("Exiting University Management System. Goodbye!");
            return false;
        }
        _ => println!("Invalid choice. Please try again."),
    }
    true
}

/// Read one trimmed line from stdin
fn prompt(label: &str) -> String {
    print!("{label}");
    io::stdout().flush().ok();
    let mut input = String::new();
    io::stdin().read_line(&mut input).ok();
    input.trim().to_string()
}

/// Read and parse a value, reprompting is left to the caller (one shot)
fn prompt_parse<T: FromStr>(label: &str) -> Option<T> {
    prompt(label).parse().ok()
}

fn add_student(registry: &mut Registry) {
    let name = prompt("Enter student name: ");
    let id = prompt("Enter student ID: ");
    let major = prompt("Enter student major: ");
    let email = prompt("Enter student email: ");
    match registry.add_student(&id, &name, &major, &email) {
        Ok(()) => println!("Student added successfully!"),
        Err(e) => println!("Error: {e}"),
    }
}

fn add_professor(registry: &mut Registry) {
    let name = prompt("Enter professor name: ");
    let id = prompt("Enter professor ID: ");
    let department = prompt("Enter department: ");
    let contact = prompt("Enter contact info: ");
    let email = prompt("Enter professor email: ");
    let professor = Professor::new(id.clone(), name, department.clone(), contact, email);
    match registry.professors.add(professor) {
        Ok(()) => {
            // Link into a same-named department, if one exists
            if let Some(dept_id) = find_department_by_name(registry, &department) {
                if let Some(dept) = registry.departments.get_mut(&dept_id) {
                    dept.add_professor(id);
                }
            }
            println!("Professor added successfully!");
        }
        Err(e) => println!("Error: {e}"),
    }
}

fn add_course(registry: &mut Registry) {
    if registry.professors.is_empty() {
        println!("No professors available. Add a professor first.");
        return;
    }
    let name = prompt("Enter course name: ");
    let id = prompt("Enter course ID: ");
    let department = prompt("Enter course department: ");
    let Some(credits) = prompt_parse::<f32>("Enter course credits: ") else {
        println!("Invalid input. Please enter a number.");
        return;
    };
    let professor_id = prompt("Enter professor ID: ");
    match registry.create_course(&id, &name, &department, credits, &professor_id) {
        Ok(()) => {
            if let Some(dept_id) = find_department_by_name(registry, &department) {
                if let Some(dept) = registry.departments.get_mut(&dept_id) {
                    dept.add_course(id);
                }
            }
            println!("Course added successfully!");
        }
        Err(e) => println!("Error: {e}"),
    }
}

fn find_department_by_name(registry: &Registry, name: &str) -> Option<String> {
    registry
        .departments
        .iter()
        .find(|d| d.name == name)
        .map(|d| d.id.clone())
}

fn enroll_student(registry: &mut Registry) {
    let student_id = prompt("Enter student ID: ");
    let course_id = prompt("Enter course ID: ");
    match registry.enroll(&student_id, &course_id) {
        Ok(true) => println!("Student enrolled successfully!"),
        Ok(false) => println!("Student is already enrolled in this course."),
        Err(e) => println!("Error: {e}"),
    }
}

fn remove_student(registry: &mut Registry) {
    let student_id = prompt("Enter student ID: ");
    let course_id = prompt("Enter course ID: ");
    match registry.unenroll(&student_id, &course_id) {
        Ok(()) => println!("Student removed from course."),
        Err(e) => println!("Error: {e}"),
    }
}

fn show_student_courses(registry: &Registry) {
    let student_id = prompt("Enter student ID: ");
    match registry.student_info(&student_id) {
        Some(info) => match serde_json::to_string_pretty(&info) {
            Ok(rendered) => println!("{rendered}"),
            Err(e) => println!("Error: {e}"),
        },
        None => println!("Student not found."),
    }
}

fn show_course_students(registry: &Registry) {
    let course_id = prompt("Enter course ID: ");
    match registry.courses.get(&course_id) {
        Some(course) => {
            let info = course.info();
            println!(
                "Course: {} (ID: {}), Department: {}, Credits: {}, Professor: {}",
                info.name, info.id, info.department, info.credits, info.professor_id
            );
            if info.enrolled_students.is_empty() {
                println!("No students enrolled.");
            } else {
                for student_id in &info.enrolled_students {
                    let name = registry
                        .students
                        .get(student_id)
                        .map_or("<unknown>", |s| s.name.as_str());
                    println!("  {student_id} - {name}");
                }
            }
        }
        None => println!("Course not found."),
    }
}

fn add_department(registry: &mut Registry) {
    let name = prompt("Enter department name: ");
    let id = prompt("Enter department ID: ");
    let head = prompt("Enter head of department: ");
    match registry.departments.add(Department::new(id, name, head)) {
        Ok(()) => println!("Department added successfully!"),
        Err(e) => println!("Error: {e}"),
    }
}

fn show_department_info(registry: &Registry) {
    if registry.departments.is_empty() {
        println!("No departments added yet.");
        return;
    }
    let id = prompt("Enter department ID: ");
    match registry.departments.get(&id) {
        Some(dept) => {
            println!("Department: {} (ID: {})", dept.name, dept.id);
            println!("Head of Department: {}", dept.head_of_department);
            println!("Courses Offered: {:?}", dept.courses_offered());
            println!("Faculty Members: {:?}", dept.faculty_members());
        }
        None => println!("Department not found."),
    }
}

fn add_administrator(registry: &mut Registry) {
    let name = prompt("Enter administrator name: ");
    let Some(id) = prompt_parse::<i64>("Enter administrator ID: ") else {
        println!("Error: admin id must be an integer");
        return;
    };
    let role = prompt("Enter role: ");
    let contact = prompt("Enter contact info: ");
    let email = prompt("Enter email: ");
    match registry.add_admin(Admin::new(id, name, role, contact, email)) {
        Ok(()) => println!("Administrator added successfully!"),
        Err(e) => println!("Error: {e}"),
    }
}

fn show_administrator_info(registry: &Registry) {
    if registry.admins().is_empty() {
        println!("No administrators added yet.");
        return;
    }
    for admin in registry.admins() {
        println!(
            "Admin ID: {}, Name: {}, Role: {}, Contact: {}, Email: {}",
            admin.id(),
            admin.name,
            admin.role,
            admin.contact,
            admin.email
        );
    }
}

fn add_classroom(registry: &mut Registry) {
    let id = prompt("Enter classroom ID: ");
    let location = prompt("Enter classroom location: ");
    let Some(capacity) = prompt_parse::<u32>("Enter classroom capacity: ") else {
        println!("Invalid input. Please enter a number.");
        return;
    };
    match registry.classrooms.add(Classroom::new(id, location, capacity)) {
        Ok(()) => println!("Classroom added successfully!"),
        Err(e) => println!("Error: {e}"),
    }
}

fn create_schedule(registry: &mut Registry) {
    if registry.courses.is_empty() || registry.professors.is_empty() || registry.classrooms.is_empty()
    {
        println!("Need at least one course, professor, and classroom to create schedule.");
        return;
    }
    let course_id = prompt("Enter course ID: ");
    let professor_id = prompt("Enter professor ID: ");
    let classroom_id = prompt("Enter classroom ID: ");
    let time_slot = prompt("Enter time slot (e.g., 'Mon 9-11'): ");
    let schedule_id = format!("sch_{}", registry.schedules.len() + 1);
    match registry.create_schedule(&schedule_id, &course_id, &professor_id, &time_slot, &classroom_id)
    {
        Ok(()) => println!("Schedule created successfully!"),
        Err(e) => println!("Error: {e}"),
    }
}

fn update_schedule(registry: &mut Registry) {
    if registry.schedules.is_empty() {
        println!("No schedules available to update.");
        return;
    }
    for schedule in &registry.schedules {
        println!("{}", schedule.describe());
    }
    let id = prompt("Enter schedule ID to update: ");
    let Some(schedule) = registry.schedules.get_mut(&id) else {
        println!("Schedule not found.");
        return;
    };
    let time_slot = prompt("Enter new time slot (leave blank to keep current): ");
    let location = prompt("Enter new location (leave blank to keep current): ");
    let changed = schedule.update(
        (!time_slot.is_empty()).then_some(time_slot.as_str()),
        (!location.is_empty()).then_some(location.as_str()),
    );
    if changed {
        println!("Schedule updated successfully!");
    } else {
        println!("No changes made.");
    }
}

fn view_all_schedules(registry: &Registry) {
    if registry.schedules.is_empty() {
        println!("No schedules available.");
        return;
    }
    for schedule in &registry.schedules {
        println!("{}", schedule.describe());
    }
}

fn add_exam(registry: &mut Registry) {
    if registry.courses.is_empty() {
        println!("No courses available. Add a course first.");
        return;
    }
    let course_id = prompt("Enter course ID: ");
    let Some(course_name) = registry.courses.get(&course_id).map(|c| c.name.clone()) else {
        println!("Course not found.");
        return;
    };
    let exam_id = format!("exam_{}", registry.exams.len() + 1);
    let date = prompt("Enter exam date (YYYY-MM-DD): ");
    let Some(duration) = prompt_parse::<f32>("Enter exam duration (hours): ") else {
        println!("Invalid input. Please enter a number.");
        return;
    };
    let Some(passing_score) = prompt_parse::<f64>("Enter passing score: ") else {
        println!("Invalid input. Please enter a number.");
        return;
    };
    let exam = FinalExam::new(exam_id, course_name, date, duration, passing_score);
    match registry.exams.add(exam) {
        Ok(()) => println!("Exam added successfully!"),
        Err(e) => println!("Error: {e}"),
    }
}

fn schedule_exam(registry: &Registry) {
    if registry.exams.is_empty() {
        println!("No exams available to schedule.");
        return;
    }
    let id = prompt("Enter exam ID: ");
    match registry.exams.get(&id) {
        Some(exam) => println!("{}", exam.describe()),
        None => println!("Exam not found."),
    }
}

fn record_exam_results(registry: &mut Registry) {
    if registry.exams.is_empty() || registry.students.is_empty() {
        println!("Need at least one exam and one student to record results.");
        return;
    }
    let exam_id = prompt("Enter exam ID: ");
    let student_id = prompt("Enter student ID: ");
    let Some(student_name) = registry.students.get(&student_id).map(|s| s.name.clone()) else {
        println!("Student not found.");
        return;
    };
    let Some(score) = prompt_parse::<f64>("Enter score (0-100): ") else {
        println!("Invalid input. Please enter a number.");
        return;
    };
    let Some(exam) = registry.exams.get_mut(&exam_id) else {
        println!("Exam not found.");
        return;
    };
    match exam.record_result(&student_name, score) {
        Ok(()) => println!("Result recorded successfully!"),
        Err(e) => println!("Error: {e}"),
    }
}

fn view_exam_results(registry: &Registry) {
    if registry.exams.is_empty() {
        println!("No exams available.");
        return;
    }
    let id = prompt("Enter exam ID: ");
    match registry.exams.get(&id) {
        Some(exam) => {
            if exam.results().is_empty() {
                println!("No results recorded yet.");
            } else {
                println!("Student Results:");
                for result in exam.results() {
                    println!("  {}: {}", result.student_name, result.score);
                }
            }
        }
        None => println!("Exam not found."),
    }
}

fn add_library(registry: &mut Registry) {
    let id = prompt("Enter library ID: ");
    match registry.libraries.add(Library::new(id)) {
        Ok(()) => println!("Library added successfully!"),
        Err(e) => println!("Error: {e}"),
    }
}

fn add_book(registry: &mut Registry) {
    let Some(library_id) = pick_library(registry) else {
        return;
    };
    let title = prompt("Enter book title: ");
    let author = prompt("Enter author: ");
    let category = prompt("Enter category: ");
    let Some(copies) = prompt_parse::<u32>("Enter number of copies: ") else {
        println!("Invalid input. Please enter a number.");
        return;
    };
    if let Some(library) = registry.libraries.get_mut(&library_id) {
        let total = library.add_book(&title, &author, &category, copies);
        println!("Book '{title}' added. Copies on shelf: {total}");
    }
}

fn register_library_member(registry: &mut Registry) {
    let Some(library_id) = pick_library(registry) else {
        return;
    };
    let student_id = prompt("Enter student ID: ");
    let Some(student_name) = registry.students.get(&student_id).map(|s| s.name.clone()) else {
        println!("Student not found.");
        return;
    };
    if let Some(library) = registry.libraries.get_mut(&library_id) {
        if library.register_student(&student_id, &student_name) {
            println!("Student {student_name} registered to the library.");
        } else {
            println!("Student is already registered.");
        }
    }
}

fn borrow_book(registry: &mut Registry) {
    let Some(library_id) = pick_library(registry) else {
        return;
    };
    let student_id = prompt("Enter student ID: ");
    let title = prompt("Enter book title to borrow: ");
    if let Some(library) = registry.libraries.get_mut(&library_id) {
        match library.borrow(&student_id, &title) {
            Ok(()) => println!("Book '{title}' borrowed."),
            Err(e) => println!("Error: {e}"),
        }
    }
}

fn return_book(registry: &mut Registry) {
    let Some(library_id) = pick_library(registry) else {
        return;
    };
    let student_id = prompt("Enter student ID: ");
    let title = prompt("Enter book title to return: ");
    if let Some(library) = registry.libraries.get_mut(&library_id) {
        match library.return_book(&student_id, &title) {
            Ok(ReturnOutcome::Returned) => println!("Book '{title}' returned."),
            Ok(ReturnOutcome::NotBorrowed) => {
                println!("Book '{title}' was not on the borrowed list; copies reshelved anyway.");
            }
            Err(e) => println!("Error: {e}"),
        }
    }
}

fn search_books(registry: &Registry) {
    let Some(library_id) = pick_library(registry) else {
        return;
    };
    let keyword = prompt("Enter search keyword (title/author/category): ");
    if let Some(library) = registry.libraries.get(&library_id) {
        let matches = library.search(&keyword);
        if matches.is_empty() {
            println!("No matching books found.");
        } else {
            for hit in matches {
                println!(
                    "  {} by {} [{}] - {} copies",
                    hit.title, hit.author, hit.category, hit.copies
                );
            }
        }
    }
}

/// Resolve which library an operation targets
///
/// With a single library it is picked automatically; with several, the user
/// is asked for its id.
fn pick_library(registry: &Registry) -> Option<String> {
    match registry.libraries.len() {
        0 => {
            println!("No libraries available. Add a library first.");
            None
        }
        1 => registry.libraries.iter().next().map(|l| l.id.clone()),
        _ => {
            for library in &registry.libraries {
                println!("  Library ID: {}", library.id);
            }
            let id = prompt("Enter library ID: ");
            if registry.libraries.contains(&id) {
                Some(id)
            } else {
                println!("Library not found.");
                None
            }
        }
    }
}

fn record_attendance(registry: &mut Registry) {
    if registry.students.is_empty() || registry.courses.is_empty() {
        println!("Need at least one student and one course.");
        return;
    }
    let student_id = prompt("Enter student ID: ");
    let course_id = prompt("Enter course ID: ");
    let date = prompt("Enter date (YYYY-MM-DD): ");
    let Some(status) = prompt_parse::<AttendanceStatus>("Enter status (Present/Absent): ") else {
        println!("Invalid status. Must be 'Present' or 'Absent'");
        return;
    };
    // Console operator acts with admin authority
    let proxy = AttendanceProxy::new(Role::Admin);
    match registry.record_attendance(&proxy, &student_id, &course_id, &date, status) {
        Ok(()) => println!("Attendance recorded successfully!"),
        Err(e) => println!("Error: {e}"),
    }
}

fn view_student_attendance(registry: &Registry) {
    if registry.attendance.records().is_empty() {
        println!("No attendance records available");
        return;
    }
    let student_id = prompt("Enter student ID: ");
    let rows = registry.attendance.for_student(&student_id);
    if rows.is_empty() {
        println!("No matching records found");
    } else {
        for row in rows {
            println!("{}", row.describe());
        }
    }
}

fn view_course_attendance(registry: &Registry) {
    if registry.attendance.records().is_empty() {
        println!("No attendance records available");
        return;
    }
    let course_id = prompt("Enter course ID: ");
    let rows = registry.attendance.for_course(&course_id);
    if rows.is_empty() {
        println!("No matching records found");
    } else {
        for row in rows {
            println!("{}", row.describe());
        }
    }
}

fn attendance_percentage(registry: &Registry) {
    if registry.attendance.records().is_empty() {
        println!("No attendance records available");
        return;
    }
    let student_id = prompt("Enter student ID: ");
    let course_id = prompt("Enter course ID (leave blank for all courses): ");
    let filter = (!course_id.is_empty()).then_some(course_id.as_str());
    let summary = registry.attendance.percentage(&student_id, filter);
    if summary.is_empty() {
        println!("No matching records found");
    } else {
        println!("Attendance: {summary}");
    }
}

fn update_attendance_status(registry: &mut Registry) {
    if registry.attendance.records().is_empty() {
        println!("No attendance records available.");
        return;
    }
    let Some(role) = prompt_parse::<Role>("Enter your role (admin/professor): ") else {
        println!("Unauthorized: Only admins and professors can update attendance");
        return;
    };
    let proxy = AttendanceProxy::new(role);
    let student_id = prompt("Enter student ID: ");
    let date = prompt("Enter date (YYYY-MM-DD) to update: ");
    let Some(status) = prompt_parse::<AttendanceStatus>("Enter new status (Present/Absent): ")
    else {
        println!("Invalid status. Must be 'Present' or 'Absent'");
        return;
    };
    match proxy.update_status(&mut registry.attendance, &student_id, &date, status) {
        Ok(updated) => println!("Attendance status updated ({updated} record(s))."),
        Err(e) => println!("Error: {e}"),
    }
}

fn login(registry: &mut Registry) {
    let email = prompt("Enter your email: ");
    let password = prompt("Enter your password: ");
    match registry.users.login(&email, &password) {
        Ok(user) => println!("Login successful. Welcome, {}!", user.name),
        Err(e) => println!("Error: {e}"),
    }
}

fn logout(registry: &mut Registry) {
    let Some(email) = registry.users.current_user().map(|u| u.email.clone()) else {
        println!("No user is currently logged in.");
        return;
    };
    match registry.users.logout(&email) {
        Ok(()) => println!("Logged out."),
        Err(e) => println!("Error: {e}"),
    }
}

fn view_dashboard(registry: &Registry) {
    match registry.users.current_user() {
        Some(user) => {
            for line in user.dashboard() {
                println!("{line}");
            }
        }
        None => println!("No user is currently logged in."),
    }
}

fn register_user(registry: &mut Registry) {
    println!("Select user type:");
    println!("1. Student");
    println!("2. Professor");
    println!("3. Administrator");
    let role = match prompt("Enter choice: ").as_str() {
        "1" => Role::Student,
        "2" => Role::Professor,
        "3" => Role::Admin,
        _ => {
            println!("Invalid role choice.");
            return;
        }
    };
    let user_id = prompt("Enter user ID: ");
    let name = prompt("Enter name: ");
    let email = prompt("Enter email: ");
    let password = prompt("Enter password: ");
    match registry.users.register(&user_id, &name, role, &email, &password) {
        Ok(_) => println!("You can now log in using your credentials."),
        Err(e) => println!("Error: {e}"),
    }
}
