#![cfg(test)]
use cursus_common::model::{Course, Student, Teacher};
use cursus_core::Registry;

#[test]
fn overview_reflects_assignments_and_roster_size() {
    let mut registry = Registry::new();
    registry.add_teacher(Teacher::new(1, "Maria Sidorova", "Mathematics"));
    registry.add_student(Student::new(1, "Alex", "a@x.com"));
    registry.add_student(Student::new(2, "Elena", "e@x.com"));
    registry.add_course(Course::online(1, "Rust", "Teams", "teams.com/rust"));

    assert!(
        registry
            .course_overview(1)
            .unwrap()
            .contains("Teacher: not assigned")
    );

    registry.assign_teacher(1, 1);
    registry.enroll_student(1, 1);
    registry.enroll_student(2, 1);

    let overview = registry.course_overview(1).unwrap();
    assert!(overview.starts_with("Online course: Rust\n"));
    assert!(overview.contains("Platform: Teams\n"));
    assert!(overview.contains("Teacher: Maria Sidorova\n"));
    assert!(overview.ends_with("Students: 2"));
}

#[test]
fn roster_report_follows_enrollment_and_withdrawal() {
    let mut registry = Registry::new();
    registry.add_student(Student::new(1, "Alex", "a@x.com"));
    registry.add_student(Student::new(2, "Elena", "e@x.com"));
    registry.add_course(Course::offline(1, "Math", "Room 301", "Mon 10:00"));

    assert_eq!(
        registry.roster_report(1),
        "Students on course 'Math':\nNo students enrolled\n"
    );

    registry.enroll_student(1, 1);
    registry.enroll_student(2, 1);
    registry.withdraw_student(1, 1);

    assert_eq!(
        registry.roster_report(1),
        "Students on course 'Math':\n- Elena (ID: 2, Email: e@x.com)\n"
    );
}

#[test]
fn reports_on_unknown_courses() {
    let registry = Registry::new();

    assert_eq!(registry.roster_report(5), "Course not found!");
    assert!(registry.course_overview(5).is_none());
    assert!(registry.students_on_course(5).is_empty());
}
