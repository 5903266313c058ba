//! Consistent styling utilities for CLI output.
//!
//! Provides color and formatting helpers using owo-colors. Every helper falls
//! back to plain text when colors are disabled.

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::output;

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    fn paint<T: Display>(text: T, colored: impl FnOnce(&T) -> String) -> String {
        if output::is_no_color() {
            text.to_string()
        } else {
            colored(&text)
        }
    }

    /// Style for section headers (e.g., "Built-in presets")
    pub fn header<T: Display>(text: T) -> String {
        Self::paint(text, |t| t.bold().to_string())
    }

    /// Style for labels/keys (e.g., "Name:", attribute keys)
    pub fn label<T: Display>(text: T) -> String {
        Self::paint(text, |t| t.dimmed().to_string())
    }

    /// Style for primary values (e.g., preset names)
    pub fn value<T: Display>(text: T) -> String {
        Self::paint(text, |t| t.cyan().to_string())
    }

    /// Style for secondary/supplementary info (e.g., descriptions)
    pub fn secondary<T: Display>(text: T) -> String {
        Self::paint(text, |t| t.dimmed().to_string())
    }

    pub fn success<T: Display>(text: T) -> String {
        Self::paint(text, |t| t.green().to_string())
    }

    pub fn error<T: Display>(text: T) -> String {
        Self::paint(text, |t| t.red().bold().to_string())
    }

    pub fn warning<T: Display>(text: T) -> String {
        Self::paint(text, |t| t.yellow().to_string())
    }

    /// Style for the default marker
    pub fn default_marker() -> String {
        Self::paint("(default)", |t| t.dimmed().to_string())
    }
}
