use colored::*;
use kennel_common::config::Config;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;
use crate::terminal::logging::PRINT_TARGET;

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

/// Banner, headers and summaries are shown only at the default quiet level.
pub fn shows_decoration(q_level: u8) -> bool {
    q_level == 0
}

/// The closing separator survives `-q` but not `-qq`.
pub fn shows_closing(q_level: u8) -> bool {
    q_level < 2
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn banner(cfg: &Config) {
    if cfg.no_banner || !shows_decoration(cfg.quiet) {
        return;
    }

    let text_content: String = format!("⟦ KENNEL v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2).bright_black();
    let output: String = format!("{}{}{}", sep, text, sep);

    print(&output);
}

pub fn header(msg: &str, q_level: u8) {
    if !shows_decoration(q_level) {
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

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).bright_black();
    print(&format!("{}", sep));
}

/// `key....: value`, with keys padded to `key_width` so values line up.
pub fn aligned_line(key: &str, value: &str, key_width: usize) {
    let dots: ColoredString = ".".repeat((key_width + 1).saturating_sub(key.len())).color(colors::SEPARATOR);
    let colon: ColoredString = ":".color(colors::SEPARATOR);
    print_status(format!("{}{}{} {}", key.color(colors::PRIMARY), dots, colon, value));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    let message: String = format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT));
    print(&message);
}

pub fn tree_head(idx: usize, name: &str) {
    let idx_str: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
    let output: String = format!(
        "{} {}",
        idx_str.color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    );
    print(&output);
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}{}", space, msg, space));
}

/// Closing line of a command that made creatures speak.
pub fn summary(spoken: usize, q_level: u8) {
    if !shows_decoration(q_level) {
        return;
    }

    let count: ColoredString = format!("{spoken} lines").bold().green();
    let output: String = format!("{}", format!("Spoken: {count}").color(colors::TEXT_DEFAULT));

    fat_separator();
    centerln(&output);
}

pub fn end_of_program(q_level: u8) {
    if !shows_closing(q_level) {
        return;
    }

    print(&format!(
        "{}",
        "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_levels() {
        assert!(shows_decoration(0));
        assert!(shows_closing(0));

        assert!(!shows_decoration(1));
        assert!(shows_closing(1));

        assert!(!shows_decoration(2));
        assert!(!shows_closing(2));
        assert!(!shows_closing(3));
    }
}
