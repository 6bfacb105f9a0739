// gopaper - random desktop wallpapers from configurable categories
//
// This is the library crate containing the selection logic, config handling and CLI shell.
// The binary crate (main.rs) only parses arguments and maps the result to an exit code.

pub mod cli;
pub mod config;
pub mod logging;
pub mod models;
pub mod services;
pub mod wizard;

// Re-export commonly used types for convenience
pub use config::{ConfigError, ConfigStore};
pub use models::{Category, ConfigDocument, Configuration, DisplayMode, LogLevel, OutputTarget};
pub use services::{ChangeError, ChangeOutcome, SystemWallpaper, WallpaperBackend, WallpaperChanger};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
