//! Presets command handler for listing and managing default maps.

use anyhow::{Result, bail};

use crate::cli::args::Assignment;
use crate::config::{ConfigFile, ConfigManager, CustomPreset};
use crate::preset::{
    BUILTINS, PresetError, get_builtin, is_builtin, sorted_custom_keys, validate_custom_name,
};
use crate::ui::Style;
use crate::value::{OptionMap, OptionValue};

/// Lists all available presets (built-in and custom).
pub fn list_presets() -> Result<()> {
    let manager = ConfigManager::new()?;
    let config = manager.load_or_default()?;
    let default_preset = config.htmlopts.preset.as_deref();

    let marker = |key: &str| {
        if default_preset == Some(key) {
            format!(" {}", Style::default_marker())
        } else {
            String::new()
        }
    };

    println!("{}", Style::header("Built-in presets"));
    for preset in BUILTINS {
        println!(
            "  {}  {}{}",
            Style::value(format!("{:14}", preset.key)),
            Style::secondary(preset.description),
            marker(preset.key)
        );
    }

    if !config.presets.is_empty() {
        println!();
        println!("{}", Style::header("Custom presets"));
        for key in sorted_custom_keys(&config.presets) {
            let description = config
                .presets
                .get(key)
                .map_or("", |p| p.description.as_str());
            println!(
                "  {}  {}{}",
                Style::value(format!("{key:14}")),
                Style::secondary(description),
                marker(key.as_str())
            );
        }
    }

    Ok(())
}

/// Shows the default options of a preset.
pub fn show_preset(name: &str) -> Result<()> {
    if let Some(preset) = get_builtin(name) {
        print_preset("Built-in preset", name, preset.description, &preset.defaults());
        return Ok(());
    }

    let manager = ConfigManager::new()?;
    let config = manager.load_or_default()?;

    let custom = config.presets.get(name).ok_or_else(|| PresetError::NotFound {
        key: name.to_string(),
        custom_keys: sorted_custom_keys(&config.presets)
            .into_iter()
            .cloned()
            .collect(),
    })?;

    print_preset("Custom preset", name, &custom.description, &custom.attributes);
    Ok(())
}

fn print_preset(title: &str, name: &str, description: &str, defaults: &OptionMap) {
    println!("{}", Style::header(title));
    println!();
    println!("  {}  {}", Style::label("Name:"), Style::value(name));
    if !description.is_empty() {
        println!("  {}  {}", Style::label("Desc:"), Style::secondary(description));
    }
    println!();
    println!("{}", Style::label("Options:"));
    for (key, value) in defaults {
        println!("  {} = {}", Style::label(key), render_value(value));
    }
}

fn render_value(value: &OptionValue) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| value.to_string())
}

/// Adds a custom preset to the config file.
pub fn add_preset(name: &str, description: Option<&str>, set: &[Assignment]) -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default()?;

    insert_preset(&mut config, name, description, set)?;
    manager.save(&config)?;

    crate::status!(
        "{} Preset '{}' added",
        Style::success("✓"),
        Style::value(name)
    );
    Ok(())
}

/// Validates and inserts a custom preset.
///
/// TOML has no null, so null values are rejected here rather than failing
/// when the config is saved.
pub fn insert_preset(
    config: &mut ConfigFile,
    name: &str,
    description: Option<&str>,
    set: &[Assignment],
) -> Result<()> {
    let name = name.trim();
    validate_custom_name(name)?;

    if config.presets.contains_key(name) {
        return Err(PresetError::AlreadyExists(name.to_string()).into());
    }

    if let Some((key, _)) = set.iter().find(|(_, value)| contains_null(value)) {
        bail!("Option '{key}' is null; presets cannot store null values");
    }

    config.presets.insert(
        name.to_string(),
        CustomPreset {
            description: description.unwrap_or_default().trim().to_string(),
            attributes: set.iter().cloned().collect(),
        },
    );
    Ok(())
}

fn contains_null(value: &OptionValue) -> bool {
    match value {
        OptionValue::List(items) => items.iter().any(contains_null),
        other => other.is_null(),
    }
}

/// Removes a custom preset from the config file.
pub fn remove_preset(name: &str) -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default()?;

    take_preset(&mut config, name)?;
    manager.save(&config)?;

    crate::status!(
        "{} Preset '{}' removed",
        Style::success("✓"),
        Style::value(name)
    );
    Ok(())
}

/// Removes a custom preset, clearing it as the default preset.
pub fn take_preset(config: &mut ConfigFile, name: &str) -> Result<CustomPreset> {
    if is_builtin(name) {
        return Err(PresetError::BuiltinImmutable(name.to_string()).into());
    }

    let removed = config.presets.remove(name).ok_or_else(|| PresetError::NotFound {
        key: name.to_string(),
        custom_keys: sorted_custom_keys(&config.presets)
            .into_iter()
            .cloned()
            .collect(),
    })?;

    if config.htmlopts.preset.as_deref() == Some(name) {
        config.htmlopts.preset = None;
        crate::warn!(
            "{} '{name}' was the default preset; no preset is applied by default now",
            Style::warning("Warning:")
        );
    }

    Ok(removed)
}
