//! Global output configuration and utilities.
//!
//! Rendered attributes go to stdout so they can be piped. Status messages
//! and warnings go to stderr; quiet mode suppresses status messages only.
//! Colors can be disabled via flag or the `NO_COLOR` environment variable.

use std::sync::OnceLock;

static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

/// Output configuration settings.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Disable colored output.
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            // https://no-color.org/
            no_color: std::env::var_os("NO_COLOR").is_some(),
        }
    }
}

/// Initialize the global output configuration.
///
/// Only the first call has an effect.
pub fn init(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

pub fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default)
}

pub fn is_quiet() -> bool {
    config().quiet
}

pub fn is_no_color() -> bool {
    config().no_color
}

/// Print a status message to stderr (respects quiet mode).
#[macro_export]
macro_rules! status {
    ($($arg:tt)*) => {
        if !$crate::output::is_quiet() {
            eprintln!($($arg)*);
        }
    };
}

/// Print a warning message to stderr (always shown, even in quiet mode).
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        eprintln!($($arg)*);
    };
}
