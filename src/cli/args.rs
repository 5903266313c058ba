use clap::{ArgAction, Parser, Subcommand};

use crate::config::OutputFormat;
use crate::html::is_attribute_name;
use crate::value::OptionValue;

/// A `key=value` pair from the command line.
pub type Assignment = (String, OptionValue);

#[derive(Parser, Debug)]
#[command(name = "htmlopts")]
#[command(about = "Merge, normalize and render HTML attribute options")]
#[command(version)]
pub struct Args {
    /// JSON file with the option map (reads from stdin if not provided)
    pub file: Option<String>,

    /// Preset whose options are used as defaults
    #[arg(short = 'p', long)]
    pub preset: Option<String>,

    /// Set an option, replacing its value (KEY=VALUE, repeatable)
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE", value_parser = parse_assignment)]
    pub set: Vec<Assignment>,

    /// Append to an option, merging class-like tokens (KEY=VALUE, repeatable)
    #[arg(short = 'a', long = "append", value_name = "KEY=VALUE", value_parser = parse_assignment)]
    pub append: Vec<Assignment>,

    /// Remove an explicit option (repeatable)
    #[arg(short = 'd', long = "delete", value_name = "KEY")]
    pub delete: Vec<String>,

    /// Expand `tooltip` and `tooltip-align` into tooltip attributes
    #[arg(long)]
    pub tooltip: bool,

    /// Add Bootstrap button classes (e.g. --button primary,outline-info; repeatable)
    #[arg(
        short = 'b',
        long,
        value_name = "KIND",
        num_args = 0..=1,
        value_delimiter = ',',
        action = ArgAction::Append
    )]
    pub button: Option<Vec<String>>,

    /// Output format
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Suppress status messages
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Normalize class-like token lists
    Normalize {
        /// Token lists (whitespace-separated)
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// List and manage presets
    Presets {
        #[command(subcommand)]
        command: Option<PresetsCommand>,
    },
}

#[derive(Subcommand, Debug)]
pub enum PresetsCommand {
    /// Show the options of a preset
    Show {
        /// Preset name
        name: String,
    },
    /// Add a custom preset
    Add {
        /// Preset name
        name: String,

        /// Short description
        #[arg(long)]
        description: Option<String>,

        /// Default option (KEY=VALUE, repeatable)
        #[arg(short = 's', long = "set", value_name = "KEY=VALUE", value_parser = parse_assignment, required = true)]
        set: Vec<Assignment>,
    },
    /// Remove a custom preset
    Remove {
        /// Preset name
        name: String,
    },
}

/// Parses `KEY=VALUE`; the value is typed by [`OptionValue::parse_loose`].
pub fn parse_assignment(raw: &str) -> Result<Assignment, String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in '{raw}'"));
    }
    if !is_attribute_name(key) {
        return Err(format!("invalid attribute name '{key}'"));
    }

    Ok((key.to_string(), OptionValue::parse_loose(value)))
}
