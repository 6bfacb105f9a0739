use camino::Utf8PathBuf;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// The whole `gopaper.yaml` document.
///
/// Categories keep their file order, but order has no influence on selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDocument {
    #[serde(default)]
    pub configuration: Configuration,

    #[serde(default)]
    pub categories: Vec<Category>,
}

/// Global settings from the `configuration` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Configuration {
    #[serde(default)]
    pub output: OutputTarget,

    #[serde(
        default,
        deserialize_with = "empty_path_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub log_file: Option<Utf8PathBuf>,

    #[serde(default)]
    pub log_level: LogLevel,

    #[serde(default)]
    pub show_caller: bool,
}

/// `log-file: ""` is written by older generators and means "not set".
fn empty_path_as_none<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Utf8PathBuf>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .filter(|value| !value.trim().is_empty())
        .map(Utf8PathBuf::from))
}

/// A named wallpaper source directory.
///
/// A missing `name` or `source` still loads; an empty source only fails if the category is
/// picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub source: Utf8PathBuf,

    #[serde(default)]
    pub mode: DisplayMode,

    #[serde(default)]
    pub enabled: bool,
}

impl Category {
    pub fn new(name: impl Into<String>, source: impl Into<Utf8PathBuf>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            mode: DisplayMode::default(),
            enabled: true,
        }
    }

    pub fn with_mode(mut self, mode: DisplayMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// How the OS scales and positions the wallpaper image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Crop,
    Tile,
    Stretch,
    Span,
    Fit,
    Center,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 6] = [
        DisplayMode::Crop,
        DisplayMode::Tile,
        DisplayMode::Stretch,
        DisplayMode::Span,
        DisplayMode::Fit,
        DisplayMode::Center,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Crop => "crop",
            DisplayMode::Tile => "tile",
            DisplayMode::Stretch => "stretch",
            DisplayMode::Span => "span",
            DisplayMode::Fit => "fit",
            DisplayMode::Center => "center",
        }
    }

    /// Parse a mode name, falling back to [`DisplayMode::Crop`] for anything unknown.
    pub fn parse_lenient(value: &str) -> Self {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(value))
            .unwrap_or_default()
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DisplayMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Self::parse_lenient).unwrap_or_default())
    }
}

/// Where log lines are routed.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum OutputTarget {
    #[default]
    Console,
    #[value(alias = "log")]
    File,
    Both,
    None,
}

impl OutputTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputTarget::Console => "console",
            OutputTarget::File => "file",
            OutputTarget::Both => "both",
            OutputTarget::None => "none",
        }
    }

    pub fn writes_console(self) -> bool {
        matches!(self, OutputTarget::Console | OutputTarget::Both)
    }

    pub fn writes_file(self) -> bool {
        matches!(self, OutputTarget::File | OutputTarget::Both)
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "console" => Ok(OutputTarget::Console),
            "file" | "log" => Ok(OutputTarget::File),
            "both" => Ok(OutputTarget::Both),
            "none" => Ok(OutputTarget::None),
            other => Err(format!(
                "unknown output '{other}', expected one of: console, file, both, none"
            )),
        }
    }
}

impl TryFrom<String> for OutputTarget {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Log verbosity as written in the config file.
///
/// `Fatal` exists for compatibility with existing config files and behaves like `Error`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    #[value(alias = "warning")]
    Warn,
    Error,
    Fatal,
}

impl LogLevel {
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Fatal => "fatal",
        }
    }

    pub fn as_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error | LogLevel::Fatal => tracing::Level::ERROR,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "info" => Ok(LogLevel::Info),
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "fatal" => Ok(LogLevel::Fatal),
            other => Err(format!(
                "unknown log level '{other}', expected one of: trace, debug, info, warn, error, fatal"
            )),
        }
    }
}

impl TryFrom<String> for LogLevel {
    type Error = String;

    // `Self::Error` would be ambiguous with the `Error` variant.
    fn try_from(value: String) -> Result<Self, String> {
        value.parse()
    }
}
