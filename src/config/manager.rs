use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::fs::atomic_write;
use crate::paths;
use crate::preset::resolve_preset;
use crate::value::OptionMap;

/// How the rendered options are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `key="value"` attribute string.
    #[default]
    Attrs,
    /// Normalized JSON object.
    Json,
}

/// Default settings in the `[htmlopts]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HtmloptsConfig {
    /// Preset applied when none is given on the command line.
    pub preset: Option<String>,
    /// Default output format.
    pub format: Option<OutputFormat>,
}

/// A user-defined preset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomPreset {
    /// Short description for display.
    #[serde(default)]
    pub description: String,
    /// Default options applied by the preset.
    #[serde(default)]
    pub attributes: OptionMap,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/htmlopts/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub htmlopts: HtmloptsConfig,
    /// Custom presets keyed by name.
    #[serde(default)]
    pub presets: HashMap<String, CustomPreset>,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// The selected preset, if any.
    pub preset_name: Option<String>,
    /// Defaults handed to the options parser.
    pub defaults: OptionMap,
    pub format: OutputFormat,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub preset: Option<String>,
    pub format: Option<OutputFormat>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// # Errors
///
/// Returns an error if the selected preset does not exist.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let preset = options
        .preset
        .as_deref()
        .or(config_file.htmlopts.preset.as_deref())
        .map(|name| resolve_preset(name, &config_file.presets))
        .transpose()?;

    let preset_name = preset.as_ref().map(|p| p.key().to_string());
    let defaults = preset.map_or_else(OptionMap::new, |p| p.defaults());

    let format = options
        .format
        .or(config_file.htmlopts.format)
        .unwrap_or_default();

    Ok(ResolvedConfig {
        preset_name,
        defaults,
        format,
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/htmlopts/config.toml`
    /// or `~/.config/htmlopts/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        atomic_write(&self.config_path, &contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    /// Loads the config file, or the default config when there is none.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }
}
