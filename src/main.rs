use anyhow::Result;
use clap::Parser;

use htmlopts::cli::commands::{normalize, presets, render};
use htmlopts::cli::{Args, Command, PresetsCommand};
use htmlopts::output::{self, OutputConfig};
use htmlopts::preset::PresetError;
use htmlopts::ui::Style;

fn main() {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || OutputConfig::default().no_color,
    });

    if let Err(err) = run(args) {
        eprintln!("{} {err:#}", Style::error("Error:"));
        std::process::exit(exit_code(&err));
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Command::Normalize { values }) => {
            normalize::print_normalized(&values);
        }
        Some(Command::Presets { command }) => match command {
            None => presets::list_presets()?,
            Some(PresetsCommand::Show { name }) => presets::show_preset(&name)?,
            Some(PresetsCommand::Add {
                name,
                description,
                set,
            }) => presets::add_preset(&name, description.as_deref(), &set)?,
            Some(PresetsCommand::Remove { name }) => presets::remove_preset(&name)?,
        },
        None => {
            let options = render::RenderOptions {
                file: args.file,
                preset: args.preset,
                set: args.set,
                append: args.append,
                delete: args.delete,
                tooltip: args.tooltip,
                button: args.button,
                format: args.format,
            };
            render::run_render(options)?;
        }
    }

    Ok(())
}

fn exit_code(err: &anyhow::Error) -> exitcode::ExitCode {
    for cause in err.chain() {
        if cause.is::<PresetError>() {
            return exitcode::USAGE;
        }
        if cause.is::<serde_json::Error>() {
            return exitcode::DATAERR;
        }
        if cause.is::<toml::de::Error>() || cause.is::<toml::ser::Error>() {
            return exitcode::CONFIG;
        }
        if cause.is::<std::io::Error>() {
            return exitcode::IOERR;
        }
    }
    exitcode::SOFTWARE
}
