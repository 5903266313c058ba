mod manager;

pub use manager::{
    ConfigFile, ConfigManager, CustomPreset, HtmloptsConfig, OutputFormat, ResolveOptions,
    ResolvedConfig, resolve_config,
};
