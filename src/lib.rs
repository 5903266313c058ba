//! # htmlopts - HTML attribute options
//!
//! `htmlopts` merges caller-supplied option maps with a map of defaults,
//! normalizes class-like token lists and renders the result as an attribute
//! string or a key-sorted map.
//!
//! ## Features
//!
//! - **Lazy defaults**: defaults are consulted on read and never copied, so
//!   deleting an option cannot hide its default
//! - **Token normalization**: `class` and `data-*` values are flattened,
//!   de-duplicated and sorted
//! - **Fluent mutation**: `add`, `append`, `consume`, `delete` chain on `&mut`
//! - **Presets**: named default maps, built in or from the config file
//!
//! ## Quick Start
//!
//! ```
//! use htmlopts::{options, OptionsParser};
//!
//! let mut parser = OptionsParser::new(
//!     options! { "class" => "second first", "alt" => " logo " },
//!     options! { "role" => "img" },
//! );
//! parser.append("class", ["first", "third"].to_vec());
//!
//! assert_eq!(
//!     parser.to_string(),
//!     r#"alt="logo" class="first second third" role="img""#
//! );
//! ```
//!
//! ## Command line
//!
//! ```bash
//! # Render a JSON option map with the youtube preset
//! echo '{"class": "video main"}' | htmlopts --preset youtube
//!
//! # Build attributes from flags alone
//! htmlopts --set title=Save --append class=btn-lg --button primary < /dev/null
//!
//! # Normalize a token list
//! htmlopts normalize "b a" "c a"
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/htmlopts/config.toml`:
//!
//! ```toml
//! [htmlopts]
//! preset = "card"
//! format = "attrs"
//!
//! [presets.card]
//! description = "Card container"
//!
//! [presets.card.attributes]
//! class = "card shadow"
//! role = "region"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and custom presets.
pub mod config;

/// File system utilities.
pub mod fs;

/// HTML escaping and tag stripping.
pub mod html;

/// Option map input from files and stdin.
pub mod input;

/// Token normalization for class-like keys.
pub mod normalize;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// The options parser.
pub mod parser;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Built-in and custom default-map presets.
pub mod preset;

/// Terminal UI styling.
pub mod ui;

/// Option values.
pub mod value;

pub use parser::OptionsParser;
pub use value::{OptionMap, OptionValue};
