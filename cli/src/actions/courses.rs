use colored::*;
use console::Term;
use cursus_common::config::Config;
use cursus_common::model::Course;
use cursus_common::{success, warn};
use cursus_core::Registry;

use crate::cprint;
use crate::terminal::{colors, print, prompt};

type Detail = (String, ColoredString);

pub fn show_all(registry: &Registry, cfg: &Config) {
    print::header("all courses", cfg.quiet);

    let courses = registry.all_courses();
    if courses.is_empty() {
        warn!("No courses registered.");
        return;
    }

    for (idx, course) in courses.iter().enumerate() {
        print_course_tree(registry, course, idx);
        if idx + 1 != courses.len() {
            cprint!();
        }
    }
}

fn print_course_tree(registry: &Registry, course: &Course, idx: usize) {
    print::tree_head(idx, &course.name);

    let teacher: ColoredString = match course.teacher.and_then(|id| registry.teacher(id)) {
        Some(t) => t.name.clone().color(colors::TEXT_DEFAULT),
        None => "not assigned".dimmed(),
    };

    let details: Vec<Detail> = vec![
        ("Id".to_string(), course.id.to_string().color(colors::ACCENT)),
        ("Type".to_string(), course.kind_label().normal()),
        ("Teacher".to_string(), teacher),
        (
            "Students".to_string(),
            course.roster().len().to_string().normal(),
        ),
    ];

    print::as_tree_one_level(details);
}

pub fn add(registry: &mut Registry, term: &Term, cfg: &Config) {
    print::header("add a new course", cfg.quiet);

    let Some(id) = prompt::id_or_report(term, "Course id:") else {
        return;
    };
    if registry.course(id).is_some() {
        warn!("A course with id {id} already exists.");
        return;
    }

    let Some(name) = prompt::text_or_report(term, "Course name:") else {
        return;
    };

    print::status("1. Online course");
    print::status("2. Offline course");
    let Some(kind) = prompt::text_or_report(term, "Course type:") else {
        return;
    };

    let course = match kind.as_str() {
        "1" => {
            let Some(platform) = prompt::text_or_report(term, "Platform:") else {
                return;
            };
            let Some(link) = prompt::text_or_report(term, "Meeting link:") else {
                return;
            };
            Course::online(id, name.clone(), platform, link)
        }
        "2" => {
            let Some(room) = prompt::text_or_report(term, "Room:") else {
                return;
            };
            let Some(schedule) = prompt::text_or_report(term, "Schedule:") else {
                return;
            };
            Course::offline(id, name.clone(), room, schedule)
        }
        other => {
            warn!("Unknown course type '{other}'.");
            return;
        }
    };

    registry.add_course(course);
    success!("Course '{name}' added.");
}

pub fn remove(registry: &mut Registry, term: &Term, cfg: &Config) {
    show_all(registry, cfg);
    cprint!();

    let Some(id) = prompt::id_or_report(term, "Course id to remove:") else {
        return;
    };

    match registry.course(id) {
        Some(course) => {
            let name = course.name.clone();
            registry.remove_course(id);
            success!("Course '{name}' removed.");
        }
        None => warn!("No course with id {id}."),
    }
}

pub fn details(registry: &Registry, term: &Term, cfg: &Config) {
    show_all(registry, cfg);
    cprint!();

    let Some(id) = prompt::id_or_report(term, "Course id:") else {
        return;
    };

    match registry.course_overview(id) {
        Some(overview) => {
            print::header("course details", cfg.quiet);
            print::block(&overview);
            cprint!();
            print::block(&registry.roster_report(id));
        }
        None => warn!("No course with id {id}."),
    }
}
