//! zsh prompt escapes.
//!
//! Fragments are written with zsh's `%F`/`%K`/`%B` sequences, which the
//! shell expands when it draws `PROMPT`.

pub const FG_RESET: &str = "%f";
pub const BG_RESET: &str = "%k";
pub const BOLD: &str = "%B";
pub const BOLD_RESET: &str = "%b";

/// Powerline separator arrow.
pub const ARROW: char = '\u{e0b0}';

/// Start a foreground color.
pub fn fg(color: &str) -> String {
    format!("%F{{{}}}", color)
}

/// Start a background color.
pub fn bg(color: &str) -> String {
    format!("%K{{{}}}", color)
}

/// Closing arrows drawn in the accent color after the last line.
pub fn trailer(color: &str) -> String {
    format!(
        "{}{}{} {}{}{}{} {}",
        bg(color),
        fg("black"),
        ARROW,
        FG_RESET,
        BG_RESET,
        fg(color),
        ARROW,
        FG_RESET
    )
}
