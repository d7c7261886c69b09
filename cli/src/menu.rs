use anyhow::Result;
use console::Term;
use cursus_common::config::Config;
use cursus_common::{success, warn};
use cursus_core::Registry;

use crate::actions::{courses, students, teachers};
use crate::cprint;
use crate::terminal::{print, prompt};

const MENU: &[(&str, &str)] = &[
    ("1", "List all courses"),
    ("2", "Add a new course"),
    ("3", "Remove a course"),
    ("4", "List all teachers"),
    ("5", "Assign a teacher to a course"),
    ("6", "List all students"),
    ("7", "Show students on a course"),
    ("8", "Enroll a student in a course"),
    ("9", "Withdraw a student from a course"),
    ("10", "Course details"),
    ("0", "Exit"),
];

/// Runs the interactive loop until the user exits.
///
/// Each round: render the menu, read a choice, dispatch, then wait for a
/// keypress before clearing the screen and starting over. Unknown choices
/// warn and continue.
pub fn run(registry: &mut Registry, cfg: &Config) -> Result<()> {
    let term = Term::stdout();

    loop {
        print::header("course management", cfg.quiet);
        for (key, label) in MENU {
            print::menu_entry(key, label);
        }
        cprint!();

        let choice = prompt::line(&term, "Select an option:")?;
        cprint!();

        match choice.as_str() {
            "1" => courses::show_all(registry, cfg),
            "2" => courses::add(registry, &term, cfg),
            "3" => courses::remove(registry, &term, cfg),
            "4" => teachers::show_all(registry, cfg),
            "5" => teachers::assign(registry, &term, cfg),
            "6" => students::show_all(registry, cfg),
            "7" => students::roster(registry, &term, cfg),
            "8" => students::enroll(registry, &term, cfg),
            "9" => students::withdraw(registry, &term, cfg),
            "10" => courses::details(registry, &term, cfg),
            "0" => {
                success!("Leaving the registry.");
                print::end_of_program();
                return Ok(());
            }
            other => warn!("Unknown option '{other}', try again."),
        }

        prompt::pause();
        if cfg.quiet == 0 {
            term.clear_screen()?;
        }
    }
}
