#![cfg(test)]
use cursus_common::model::{Course, CourseKind, Student, Teacher};
use cursus_core::Registry;

fn seeded() -> Registry {
    let mut registry = Registry::new();
    registry.add_teacher(Teacher::new(1, "Ivan Petrov", "Computer Science"));
    registry.add_student(Student::new(1, "Alex", "a@x.com"));
    registry.add_course(Course::online(1, "Rust", "Zoom", "zoom.com/rust"));
    registry
}

/// End-to-end pass over one teacher, one student, and one course:
/// assign, enroll, withdraw, then withdraw again. Every step must leave
/// the registry in the exact state the previous step produced plus the
/// requested change, and the second withdraw must change nothing.
#[test]
fn assign_enroll_withdraw_lifecycle() {
    let mut registry = seeded();

    registry.assign_teacher(1, 1);
    assert_eq!(registry.course(1).unwrap().teacher, Some(1));

    registry.enroll_student(1, 1);
    assert_eq!(registry.course(1).unwrap().roster(), &[1]);

    registry.withdraw_student(1, 1);
    assert!(registry.course(1).unwrap().roster().is_empty());

    registry.withdraw_student(1, 1);
    assert!(
        registry.course(1).unwrap().roster().is_empty(),
        "second withdraw must be a no-op"
    );
}

#[test]
fn double_enrollment_keeps_first_position() {
    let mut registry = seeded();
    registry.add_student(Student::new(2, "Elena", "e@x.com"));

    registry.enroll_student(1, 1);
    registry.enroll_student(2, 1);
    registry.enroll_student(1, 1);

    assert_eq!(
        registry.course(1).unwrap().roster(),
        &[1, 2],
        "re-enrolling must not move or duplicate the first entry"
    );
}

#[test]
fn failed_lookups_leave_state_untouched() {
    let mut registry = seeded();
    registry.enroll_student(1, 1);

    // Missing course, missing student, missing teacher: all silent no-ops.
    registry.enroll_student(1, 99);
    registry.enroll_student(99, 1);
    registry.withdraw_student(99, 1);
    registry.assign_teacher(99, 1);

    let course = registry.course(1).unwrap();
    assert_eq!(course.roster(), &[1]);
    assert_eq!(course.teacher, None);
}

#[test]
fn round_trip_preserves_variant_fields() {
    let mut registry = Registry::new();
    registry.add_course(Course::offline(
        7,
        "Advanced Mathematics",
        "Room 301",
        "Mon/Wed 10:00-11:30",
    ));

    let course = registry.course(7).expect("course must be found after add");
    assert_eq!(course.id, 7);
    assert_eq!(course.name, "Advanced Mathematics");
    match &course.kind {
        CourseKind::Offline { room, schedule } => {
            assert_eq!(room, "Room 301");
            assert_eq!(schedule, "Mon/Wed 10:00-11:30");
        }
        CourseKind::Online { .. } => panic!("variant must survive the round trip"),
    }
}

#[test]
fn defensive_copies_do_not_leak_internal_state() {
    let mut registry = seeded();
    registry.enroll_student(1, 1);

    let mut students = registry.all_students();
    students.clear();
    let mut courses = registry.all_courses();
    courses[0].withdraw(1);
    courses.clear();

    assert_eq!(registry.all_students().len(), 1);
    assert_eq!(registry.course(1).unwrap().roster(), &[1]);
}

#[test]
fn teacher_with_two_courses_is_listed_in_registry_order() {
    let mut registry = seeded();
    registry.add_course(Course::offline(2, "Math", "Room 301", "Mon 10:00"));
    registry.add_course(Course::online(3, "Physics", "Zoom", "zoom.com/p"));

    registry.assign_teacher(1, 3);
    registry.assign_teacher(1, 1);

    let taught: Vec<u32> = registry.courses_by_teacher(1).iter().map(|c| c.id).collect();
    assert_eq!(taught, vec![1, 3], "registry order, not assignment order");
}

#[test]
fn removing_a_course_does_not_touch_its_students() {
    let mut registry = seeded();
    registry.enroll_student(1, 1);

    registry.remove_course(1);

    assert!(registry.course(1).is_none());
    assert!(registry.student(1).is_some(), "students are never removed");
}
