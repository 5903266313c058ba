//! Default command: merge an option map with a preset and render it.

use anyhow::{Context, Result};

use crate::cli::args::Assignment;
use crate::config::{ConfigManager, OutputFormat, ResolveOptions, resolve_config};
use crate::input::{InputReader, parse_option_map};
use crate::parser::OptionsParser;

pub struct RenderOptions {
    pub file: Option<String>,
    pub preset: Option<String>,
    pub set: Vec<Assignment>,
    pub append: Vec<Assignment>,
    pub delete: Vec<String>,
    pub tooltip: bool,
    pub button: Option<Vec<String>>,
    pub format: Option<OutputFormat>,
}

pub fn run_render(options: RenderOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let config_file = manager.load_or_default()?;

    let resolved = resolve_config(
        &ResolveOptions {
            preset: options.preset.clone(),
            format: options.format,
        },
        &config_file,
    )?;

    let text = InputReader::read(options.file.as_deref())?;
    let map = parse_option_map(&text)?;

    let mut parser = OptionsParser::new(map, resolved.defaults);
    apply_mutations(&mut parser, &options);

    println!("{}", render(&parser, resolved.format)?);

    Ok(())
}

/// Applies the command-line mutations in a fixed order: set, append,
/// delete, tooltip, then button classes.
pub fn apply_mutations(parser: &mut OptionsParser, options: &RenderOptions) {
    parser.add_many(options.set.iter().cloned());

    for (key, value) in &options.append {
        parser.append(key, value.clone());
    }

    parser.delete_many(&options.delete);

    if options.tooltip {
        parser.tooltip();
    }

    if let Some(kinds) = &options.button {
        parser.add_button_classes(kinds);
    }
}

pub fn render(parser: &OptionsParser, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Attrs => Ok(parser.to_attr_string()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&parser.to_map()).context("Failed to serialize options")
        }
    }
}
