//! Data models for gopaper.
//!
//! - [`ConfigDocument`]: the full `gopaper.yaml` document
//! - [`Configuration`]: global logging settings from the `configuration` section
//! - [`Category`]: a named wallpaper source directory with a [`DisplayMode`]
//! - [`OutputTarget`] and [`LogLevel`]: logging enums shared by the config file and the CLI flags
//!
//! All config structs derive `Serialize`/`Deserialize` for YAML persistence. Categories are
//! never mutated by the selection services.

pub mod config;

pub use config::{Category, ConfigDocument, Configuration, DisplayMode, LogLevel, OutputTarget};
