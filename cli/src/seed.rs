//! Demo dataset loaded at startup unless `--no-seed` is given.

use cursus_common::model::{Course, Student, Teacher};
use cursus_core::Registry;

pub fn populate(registry: &mut Registry) {
    registry.add_teacher(Teacher::new(1, "Ivan Petrov", "Computer Science"));
    registry.add_teacher(Teacher::new(2, "Maria Sidorova", "Mathematics"));
    registry.add_teacher(Teacher::new(3, "Alexey Kozlov", "Physics"));

    registry.add_student(Student::new(1, "Alexey Ivanov", "alex@email.com"));
    registry.add_student(Student::new(2, "Elena Kozlova", "elena@email.com"));
    registry.add_student(Student::new(3, "Petr Sidorov", "petr@email.com"));
    registry.add_student(Student::new(4, "Olga Novikova", "olga@email.com"));
    registry.add_student(Student::new(5, "Dmitry Volkov", "dmitry@email.com"));

    registry.add_course(Course::online(
        1,
        "Programming in Rust",
        "Microsoft Teams",
        "teams.com/rust",
    ));
    registry.add_course(Course::offline(
        2,
        "Advanced Mathematics",
        "Room 301",
        "Mon/Wed 10:00-11:30",
    ));
    registry.add_course(Course::online(
        3,
        "Physics for Beginners",
        "Zoom",
        "zoom.com/physics",
    ));
    registry.add_course(Course::offline(
        4,
        "Algorithms and Data Structures",
        "Room 205",
        "Tue/Thu 14:00-15:30",
    ));

    registry.assign_teacher(1, 1);
    registry.assign_teacher(2, 2);
    registry.assign_teacher(3, 3);
    registry.assign_teacher(1, 4);

    registry.enroll_student(1, 1);
    registry.enroll_student(2, 1);
    registry.enroll_student(3, 2);
    registry.enroll_student(4, 2);
    registry.enroll_student(5, 3);
    registry.enroll_student(1, 4);
    registry.enroll_student(5, 4);
}
