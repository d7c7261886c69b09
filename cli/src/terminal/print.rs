//! Terminal output helpers.
//!
//! Everything the user sees goes through [`print`], which emits a raw
//! tracing event on the `cursus::print` target. The formatter installed by
//! [`super::logging::init`] passes those through untouched, so listings and
//! log lines share one pipeline and one `RUST_LOG` switch.

use colored::*;
use cursus_common::config::Config;
use cursus_common::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

// Widest key printed in a detail tree ("Department").
const KEY_PAD: usize = 11;

#[macro_export]
macro_rules! cprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn print(msg: &str) {
    info!(target: "cursus::print", "{msg}");
}

pub fn banner(cfg: &Config) {
    if cfg.no_banner || cfg.quiet > 0 {
        return;
    }

    let text_content: String = format!("⟦ CURSUS v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═"
        .repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2)
        .bright_black();

    print(&format!("{}{}{}", sep, text, sep));
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    print(&format!(
        "{} {}",
        prefix,
        msg.as_ref().color(colors::TEXT_DEFAULT)
    ));
}

/// Indexed head line of a detail tree, e.g. `[0] Advanced Mathematics`.
pub fn tree_head(idx: usize, name: &str) {
    let idx_str: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
    print(&format!(
        "{} {}",
        idx_str.color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    ));
}

pub fn as_tree_one_level(key_value_pairs: Vec<(String, ColoredString)>) {
    for (i, (key, value)) in key_value_pairs.iter().enumerate() {
        let last: bool = i + 1 == key_value_pairs.len();
        let branch: ColoredString = if !last {
            "├─".bright_black()
        } else {
            "└─".bright_black()
        };
        let dots: String = ".".repeat(KEY_PAD.saturating_sub(key.chars().count()));
        print(&format!(
            " {} {}{}{} {}",
            branch,
            key.color(colors::TEXT_DEFAULT),
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        ));
    }
}

/// Numbered menu entry, e.g. `[10] Course details`.
pub fn menu_entry(key: &str, label: &str) {
    print(&format!(
        " {}{}{} {}",
        "[".color(colors::SEPARATOR),
        key.color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        label.color(colors::TEXT_DEFAULT)
    ));
}

/// Prints a multi-line report produced by the core, line by line.
pub fn block(text: &str) {
    for line in text.lines() {
        print(line);
    }
}

pub fn end_of_program() {
    print(&format!(
        "{}",
        "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)
    ));
}
