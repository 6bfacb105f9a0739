//! Built-in configuration templates used by `gopaper init`.

use crate::models::{Category, ConfigDocument, Configuration, DisplayMode, LogLevel, OutputTarget};
use camino::Utf8PathBuf;
use indexmap::IndexMap;

/// Template used when none (or an unknown one) is requested.
pub const DEFAULT_TEMPLATE: &str = "basic";

/// Names accepted by `init --template`, in display order.
pub const TEMPLATE_NAMES: [&str; 2] = ["basic", "full"];

fn registry() -> IndexMap<&'static str, fn() -> ConfigDocument> {
    let mut templates: IndexMap<&'static str, fn() -> ConfigDocument> = IndexMap::new();
    templates.insert("basic", basic_template);
    templates.insert("full", full_template);
    templates
}

/// Look up a template by name (case-insensitive).
pub fn template(name: &str) -> Option<ConfigDocument> {
    let name = name.trim().to_ascii_lowercase();
    registry().get(name.as_str()).map(|build| build())
}

/// Console logging and a single enabled category.
pub fn basic_template() -> ConfigDocument {
    ConfigDocument {
        configuration: Configuration {
            output: OutputTarget::Console,
            log_file: None,
            log_level: LogLevel::Info,
            show_caller: false,
        },
        categories: vec![default_category()],
    }
}

/// Console and file logging plus a spread of disabled example categories.
pub fn full_template() -> ConfigDocument {
    let walls = walls_dir();
    ConfigDocument {
        configuration: Configuration {
            output: OutputTarget::Both,
            log_file: Some(default_log_path()),
            log_level: LogLevel::Info,
            show_caller: false,
        },
        categories: vec![
            default_category(),
            Category::new("Wallhaven", walls.join("Wallhaven")).with_enabled(false),
            Category::new("Wallpapers Wide", walls.join("WallpapersWide")).with_enabled(false),
            Category::new("UHD Wallpaper", walls.join("UHDPaper")).with_enabled(false),
            Category::new("Landscapes", walls.join("Landscapes"))
                .with_mode(DisplayMode::Fit)
                .with_enabled(false),
            Category::new("Panoramas", walls.join("Panoramas"))
                .with_mode(DisplayMode::Span)
                .with_enabled(false),
            Category::new("Patterns", walls.join("Patterns"))
                .with_mode(DisplayMode::Tile)
                .with_enabled(false),
        ],
    }
}

/// Category written when a config would otherwise have none.
pub fn default_category() -> Category {
    Category::new("Custom Selection", default_source_path("Custom Selection"))
}

/// Suggested source directory for a category: `<pictures>/Walls/<name without spaces>`.
pub fn default_source_path(category_name: &str) -> Utf8PathBuf {
    let folder: String = category_name.split_whitespace().collect();
    walls_dir().join(folder)
}

/// Suggested log file location.
pub fn default_log_path() -> Utf8PathBuf {
    dirs::data_local_dir()
        .and_then(|dir| Utf8PathBuf::try_from(dir).ok())
        .map(|dir| dir.join("gopaper").join("logs"))
        .unwrap_or_else(|| Utf8PathBuf::from("logs"))
        .join("gopaper.log")
}

fn walls_dir() -> Utf8PathBuf {
    dirs::picture_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Pictures")))
        .and_then(|dir| Utf8PathBuf::try_from(dir).ok())
        .unwrap_or_else(|| Utf8PathBuf::from("Pictures"))
        .join("Walls")
}
