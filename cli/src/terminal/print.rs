//! Terminal output. Everything goes through `tracing` on [`PRINT_TARGET`] so
//! the formatter writes it verbatim next to the status lines.

use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;
use crate::terminal::format::Detail;

pub const PRINT_TARGET: &str = "rentr::print";
pub const TOTAL_WIDTH: usize = 64;

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    let title: String = format!("⟦ RENTR v{} ⟧", env!("CARGO_PKG_VERSION"));
    print(&padded_line(&title.bright_green().bold(), title.width(), '═'));
}

/// Section title centred in a dashed line, e.g. `────⟦ RENT A CAR ⟧────`.
pub fn header(title: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let title: String = format!("⟦ {} ⟧", title.to_uppercase());
    print(&padded_line(&title.bright_green(), title.width(), '─'));
}

/// `> msg`, the prefix every menu line carries.
pub fn status<T: AsRef<str>>(msg: T) {
    print(&format!("{} {}", ">".color(colors::SEPARATOR), msg.as_ref()));
}

/// A block of `key: value` lines whose colons line up on the longest key.
pub fn key_values(pairs: &[(&str, ColoredString)]) {
    let key_width: usize = pairs.iter().map(|(key, _)| key.width()).max().unwrap_or(0);
    for (key, value) in pairs {
        let dots: String = ".".repeat(key_width - key.width());
        status(format!(
            "{}{}{} {}",
            key.color(colors::PRIMARY),
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        ));
    }
}

/// `[idx] name` followed by one branch per detail.
pub fn tree(idx: usize, name: &str, details: &[Detail]) {
    print(&format!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    ));

    let key_width: usize = details.iter().map(|(key, _)| key.width()).max().unwrap_or(0);
    for (i, (key, value)) in details.iter().enumerate() {
        let branch: &str = if i + 1 == details.len() { "└─" } else { "├─" };
        print(&format!(
            " {} {}{}{} {}",
            branch.color(colors::SEPARATOR),
            key.color(colors::TEXT_DEFAULT),
            ".".repeat(key_width - key.width()).color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        ));
    }
}

pub fn rule() {
    print(&format!("{}", "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)));
}

/// Closing line of a command: a rule with `msg` centred under it.
pub fn summary(msg: &str) {
    rule();
    let pad: String = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{pad}{msg}"));
}

fn padded_line(text: &ColoredString, text_width: usize, fill: char) -> String {
    let fill_count: usize = TOTAL_WIDTH.saturating_sub(text_width);
    let left: String = fill.to_string().repeat(fill_count / 2);
    let right: String = fill.to_string().repeat(fill_count - fill_count / 2);
    format!(
        "{}{}{}",
        left.color(colors::SEPARATOR),
        text,
        right.color(colors::SEPARATOR)
    )
}
