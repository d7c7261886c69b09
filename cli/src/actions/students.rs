use colored::*;
use console::Term;
use cursus_common::config::Config;
use cursus_common::{success, warn};
use cursus_core::Registry;

use crate::actions::courses;
use crate::cprint;
use crate::terminal::{colors, print, prompt};

pub fn show_all(registry: &Registry, cfg: &Config) {
    print::header("all students", cfg.quiet);

    let students = registry.all_students();
    if students.is_empty() {
        warn!("No students registered.");
        return;
    }

    for (idx, student) in students.iter().enumerate() {
        print::tree_head(idx, &student.name);
        print::as_tree_one_level(vec![
            (
                "Id".to_string(),
                student.id.to_string().color(colors::ACCENT),
            ),
            ("Email".to_string(), student.email.clone().color(colors::EMAIL)),
        ]);

        if idx + 1 != students.len() {
            cprint!();
        }
    }
}

pub fn roster(registry: &Registry, term: &Term, cfg: &Config) {
    courses::show_all(registry, cfg);
    cprint!();

    let Some(course_id) = prompt::id_or_report(term, "Course id:") else {
        return;
    };

    print::header("students on course", cfg.quiet);
    print::block(&registry.roster_report(course_id));
}

pub fn enroll(registry: &mut Registry, term: &Term, cfg: &Config) {
    show_all(registry, cfg);
    cprint!();
    let Some(student_id) = prompt::id_or_report(term, "Student id:") else {
        return;
    };

    courses::show_all(registry, cfg);
    cprint!();
    let Some(course_id) = prompt::id_or_report(term, "Course id:") else {
        return;
    };

    let Some(student_name) = registry.student(student_id).map(|s| s.name.clone()) else {
        warn!("No student with id {student_id}.");
        return;
    };
    let Some(course_name) = registry.course(course_id).map(|c| c.name.clone()) else {
        warn!("No course with id {course_id}.");
        return;
    };

    registry.enroll_student(student_id, course_id);
    success!("{student_name} enrolled in '{course_name}'.");
}

pub fn withdraw(registry: &mut Registry, term: &Term, cfg: &Config) {
    courses::show_all(registry, cfg);
    cprint!();
    let Some(course_id) = prompt::id_or_report(term, "Course id:") else {
        return;
    };

    print::block(&registry.roster_report(course_id));
    cprint!();
    let Some(student_id) = prompt::id_or_report(term, "Student id to withdraw:") else {
        return;
    };

    let Some(student_name) = registry.student(student_id).map(|s| s.name.clone()) else {
        warn!("No student with id {student_id}.");
        return;
    };
    let Some(course_name) = registry.course(course_id).map(|c| c.name.clone()) else {
        warn!("No course with id {course_id}.");
        return;
    };

    registry.withdraw_student(student_id, course_id);
    success!("{student_name} withdrawn from '{course_name}'.");
}
