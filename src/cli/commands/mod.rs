//! Subcommand implementations.

/// Normalize command handler.
pub mod normalize;

/// Preset management command handler.
pub mod presets;

/// Default render command handler.
pub mod render;
