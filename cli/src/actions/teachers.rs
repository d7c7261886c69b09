use colored::*;
use console::Term;
use cursus_common::config::Config;
use cursus_common::{success, warn};
use cursus_core::Registry;

use crate::actions::courses;
use crate::cprint;
use crate::terminal::{colors, print, prompt};

pub fn show_all(registry: &Registry, cfg: &Config) {
    print::header("all teachers", cfg.quiet);

    let teachers = registry.all_teachers();
    if teachers.is_empty() {
        warn!("No teachers registered.");
        return;
    }

    for (idx, teacher) in teachers.iter().enumerate() {
        print::tree_head(idx, &teacher.name);

        let taught = registry.courses_by_teacher(teacher.id).len();
        print::as_tree_one_level(vec![
            (
                "Id".to_string(),
                teacher.id.to_string().color(colors::ACCENT),
            ),
            ("Department".to_string(), teacher.department.clone().normal()),
            ("Courses".to_string(), taught.to_string().normal()),
        ]);

        if idx + 1 != teachers.len() {
            cprint!();
        }
    }
}

pub fn assign(registry: &mut Registry, term: &Term, cfg: &Config) {
    show_all(registry, cfg);
    cprint!();
    let Some(teacher_id) = prompt::id_or_report(term, "Teacher id:") else {
        return;
    };

    courses::show_all(registry, cfg);
    cprint!();
    let Some(course_id) = prompt::id_or_report(term, "Course id:") else {
        return;
    };

    let Some(teacher_name) = registry.teacher(teacher_id).map(|t| t.name.clone()) else {
        warn!("No teacher with id {teacher_id}.");
        return;
    };
    let Some(course_name) = registry.course(course_id).map(|c| c.name.clone()) else {
        warn!("No course with id {course_id}.");
        return;
    };

    registry.assign_teacher(teacher_id, course_id);
    success!("{teacher_name} now teaches '{course_name}'.");
}
