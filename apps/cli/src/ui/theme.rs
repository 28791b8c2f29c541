use console::style;
use std::fmt;

/// Colour palette for terminal output.
pub struct Theme;

impl Theme {
    pub fn primary(text: impl fmt::Display) -> String {
        style(text).cyan().bold().to_string()
    }

    pub fn bold(text: impl fmt::Display) -> String {
        style(text).bold().to_string()
    }

    pub fn success(text: impl fmt::Display) -> String {
        style(text).green().bold().to_string()
    }

    pub fn warning(text: impl fmt::Display) -> String {
        style(text).yellow().bold().to_string()
    }

    /// Metadata such as paths and how they were found.
    pub fn muted(text: impl fmt::Display) -> String {
        style(text).dim().to_string()
    }
}
