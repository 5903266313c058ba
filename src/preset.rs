//! Default-map presets.
//!
//! A preset is a named map of defaults handed to the options parser. The
//! built-in presets carry the defaults of common markup helpers; custom
//! presets come from the config file.

use std::collections::HashMap;

use crate::config::CustomPreset;
use crate::value::{OptionMap, OptionValue};

/// A default value that can live in a `const` table.
#[derive(Debug, Clone, Copy)]
pub enum PresetValue {
    Bool(bool),
    Int(i64),
    Str(&'static str),
}

impl From<PresetValue> for OptionValue {
    fn from(value: PresetValue) -> Self {
        match value {
            PresetValue::Bool(b) => Self::Bool(b),
            PresetValue::Int(i) => Self::Int(i),
            PresetValue::Str(s) => Self::String(s.to_string()),
        }
    }
}

/// A built-in preset (hardcoded, not modifiable by users).
#[derive(Debug, Clone)]
pub struct BuiltinPreset {
    /// The preset key (e.g., "button", "youtube").
    pub key: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Default options applied by the preset.
    pub defaults: &'static [(&'static str, PresetValue)],
}

impl BuiltinPreset {
    pub fn defaults(&self) -> OptionMap {
        self.defaults
            .iter()
            .map(|(key, value)| ((*key).to_string(), OptionValue::from(*value)))
            .collect()
    }
}

/// All built-in presets, sorted by key.
pub const BUILTINS: &[BuiltinPreset] = &[
    BuiltinPreset {
        key: "button",
        description: "Button element with an explicit role",
        defaults: &[("role", PresetValue::Str("button"))],
    },
    BuiltinPreset {
        key: "css",
        description: "Stylesheet link appended to the css block",
        defaults: &[("block", PresetValue::Bool(true))],
    },
    BuiltinPreset {
        key: "link",
        description: "Anchor whose title is not escaped twice",
        defaults: &[("escape", PresetValue::Bool(false))],
    },
    BuiltinPreset {
        key: "meta",
        description: "Meta tag appended to the meta block",
        defaults: &[("block", PresetValue::Bool(true))],
    },
    BuiltinPreset {
        key: "script",
        description: "Script tag appended to the script block",
        defaults: &[("block", PresetValue::Bool(true))],
    },
    BuiltinPreset {
        key: "script-start",
        description: "Captured script appended to the bottom script block",
        defaults: &[("block", PresetValue::Str("script_bottom"))],
    },
    BuiltinPreset {
        key: "youtube",
        description: "Responsive 16:9 YouTube embed",
        defaults: &[
            ("allowfullscreen", PresetValue::Str("allowfullscreen")),
            ("height", PresetValue::Int(480)),
            ("ratio", PresetValue::Str("16by9")),
            ("width", PresetValue::Int(640)),
        ],
    },
];

/// Resolved preset information.
#[derive(Debug, Clone)]
pub enum ResolvedPreset {
    /// A built-in preset.
    Builtin(&'static BuiltinPreset),
    /// A custom user-defined preset.
    Custom { key: String, defaults: OptionMap },
}

impl ResolvedPreset {
    /// Returns the default map of this preset.
    pub fn defaults(&self) -> OptionMap {
        match self {
            Self::Builtin(preset) => preset.defaults(),
            Self::Custom { defaults, .. } => defaults.clone(),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Self::Builtin(preset) => preset.key,
            Self::Custom { key, .. } => key,
        }
    }
}

pub fn get_builtin(key: &str) -> Option<&'static BuiltinPreset> {
    BUILTINS.iter().find(|p| p.key == key)
}

pub fn is_builtin(key: &str) -> bool {
    get_builtin(key).is_some()
}

/// Returns custom preset keys sorted alphabetically.
#[allow(clippy::implicit_hasher)]
pub fn sorted_custom_keys(presets: &HashMap<String, CustomPreset>) -> Vec<&String> {
    let mut keys: Vec<_> = presets.keys().collect();
    keys.sort();
    keys
}

/// Resolves a preset key, checking built-ins before custom presets.
#[allow(clippy::implicit_hasher)]
pub fn resolve_preset(
    key: &str,
    custom_presets: &HashMap<String, CustomPreset>,
) -> Result<ResolvedPreset, PresetError> {
    if let Some(builtin) = get_builtin(key) {
        return Ok(ResolvedPreset::Builtin(builtin));
    }

    if let Some(custom) = custom_presets.get(key) {
        return Ok(ResolvedPreset::Custom {
            key: key.to_string(),
            defaults: custom.attributes.clone(),
        });
    }

    let custom_keys = sorted_custom_keys(custom_presets)
        .into_iter()
        .cloned()
        .collect();
    Err(PresetError::NotFound {
        key: key.to_string(),
        custom_keys,
    })
}

/// Preset-related errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresetError {
    /// Preset not found. Contains the key and list of custom preset keys.
    NotFound {
        key: String,
        custom_keys: Vec<String>,
    },
    /// Attempted to modify a built-in preset.
    BuiltinImmutable(String),
    /// Preset key already exists.
    AlreadyExists(String),
    /// Invalid preset key format.
    InvalidName(String),
}

impl std::fmt::Display for PresetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { key, custom_keys } => {
                let mut all_keys: Vec<&str> = BUILTINS.iter().map(|p| p.key).collect();
                all_keys.extend(custom_keys.iter().map(String::as_str));
                write!(
                    f,
                    "Preset '{key}' not found\n\nAvailable presets: {}",
                    all_keys.join(", ")
                )
            }
            Self::BuiltinImmutable(key) => {
                write!(f, "Cannot modify built-in preset '{key}'")
            }
            Self::AlreadyExists(key) => {
                write!(f, "Preset '{key}' already exists")
            }
            Self::InvalidName(key) => {
                write!(
                    f,
                    "Invalid preset name '{key}': must start with a letter and contain only alphanumeric characters, dashes and underscores"
                )
            }
        }
    }
}

impl std::error::Error for PresetError {}

/// Validates a custom preset name.
pub fn validate_custom_name(key: &str) -> Result<(), PresetError> {
    if !key.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
        return Err(PresetError::InvalidName(key.to_string()));
    }

    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(PresetError::InvalidName(key.to_string()));
    }

    if is_builtin(key) {
        return Err(PresetError::BuiltinImmutable(key.to_string()));
    }

    Ok(())
}
