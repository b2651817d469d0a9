//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait wraps the handful of ANSI styles the engine uses
//! so string literals can be styled directly, via the `colored` crate.

use colored::{ColoredString, Colorize};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn choice_index_style(&self) -> ColoredString;
    fn message_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn banner_style(&self) -> ColoredString;
    fn area_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn choice_index_style(&self) -> ColoredString {
        self.bold().truecolor(220, 180, 40)
    }
    fn message_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn prompt_style(&self) -> ColoredString {
        self.bold()
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn banner_style(&self) -> ColoredString {
        self.bright_yellow().underline()
    }
    fn area_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10)
    }
}

impl GameStyle for String {
    fn choice_index_style(&self) -> ColoredString {
        self.as_str().choice_index_style()
    }
    fn message_style(&self) -> ColoredString {
        self.as_str().message_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn banner_style(&self) -> ColoredString {
        self.as_str().banner_style()
    }
    fn area_style(&self) -> ColoredString {
        self.as_str().area_style()
    }
}
