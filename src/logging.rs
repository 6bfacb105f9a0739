use crate::config::templates::default_log_path;
use crate::models::{Configuration, LogLevel, OutputTarget};
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Effective logging settings after merging the config file with command line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingOptions {
    pub output: OutputTarget,
    pub log_file: Option<Utf8PathBuf>,
    pub level: LogLevel,
    pub show_caller: bool,
}

impl LoggingOptions {
    pub fn from_configuration(configuration: &Configuration) -> Self {
        Self {
            output: configuration.output,
            log_file: configuration.log_file.clone(),
            level: configuration.log_level,
            show_caller: configuration.show_caller,
        }
    }

    /// Apply command line overrides. `show_caller` can only be switched on from the CLI.
    pub fn with_overrides(
        mut self,
        output: Option<OutputTarget>,
        level: Option<LogLevel>,
        show_caller: bool,
    ) -> Self {
        if let Some(output) = output {
            self.output = output;
        }
        if let Some(level) = level {
            self.level = level;
        }
        self.show_caller |= show_caller;
        self
    }

    /// The file that receives log lines, if file output is enabled.
    pub fn resolved_log_file(&self) -> Option<Utf8PathBuf> {
        if !self.output.writes_file() {
            return None;
        }
        Some(
            self.log_file
                .clone()
                .filter(|path| !path.as_str().trim().is_empty())
                .unwrap_or_else(default_log_path),
        )
    }
}

/// Setup logging from the effective options.
///
/// `RUST_LOG` overrides the configured level when set.
///
/// # Returns
/// A guard that must be held for the duration of the program when file output is enabled,
/// so buffered lines are flushed on exit.
pub fn setup_logging(options: &LoggingOptions) -> Result<Option<WorkerGuard>> {
    let env_directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    let env_filter = level_filter(options.level, &env_directives);

    let console_layer = options.output.writes_console().then(|| {
        tracing_subscriber::fmt::layer()
            .with_ansi(true)
            .with_target(false)
            .with_file(options.show_caller)
            .with_line_number(options.show_caller)
    });

    let (file_layer, guard) = match options.resolved_log_file() {
        Some(log_file) => {
            let (directory, file_name) = split_log_file(&log_file)?;
            if !directory.exists() {
                fs::create_dir_all(&directory)
                    .with_context(|| format!("Failed to create log directory: {}", directory))?;
            }

            let file_appender = rolling::never(&directory, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false) // No ANSI codes in log files
                .with_target(true)
                .with_file(options.show_caller)
                .with_line_number(options.show_caller);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install the tracing subscriber")?;

    tracing::debug!(
        "Logging initialized: output={}, level={}, show_caller={}, file={:?}",
        options.output,
        options.level,
        options.show_caller,
        options.resolved_log_file()
    );

    Ok(guard)
}

/// Directives from `RUST_LOG` win; the configured level applies only when there are none.
fn level_filter(level: LogLevel, env_directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level.as_tracing_level()).into())
        .parse_lossy(env_directives)
}

fn split_log_file(log_file: &Utf8Path) -> Result<(Utf8PathBuf, String)> {
    let file_name = log_file
        .file_name()
        .with_context(|| format!("Log file path has no file name: {}", log_file))?;
    let directory = match log_file.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent.to_path_buf(),
        _ => Utf8PathBuf::from("."),
    };
    Ok((directory, file_name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tracing_subscriber::{Layer, Registry};

    #[test]
    fn test_setup_logging_creates_log_directory() {
        let temp_dir = TempDir::new().unwrap();
        let root = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
        let log_file = root.join("logs").join("gopaper.log");

        let options = LoggingOptions {
            output: OutputTarget::File,
            log_file: Some(log_file.clone()),
            level: LogLevel::Debug,
            show_caller: true,
        };

        // Only this test installs the global subscriber in this binary.
        let guard = setup_logging(&options).unwrap();
        assert!(guard.is_some());
        assert!(root.join("logs").exists());
    }

    #[test]
    fn test_flags_override_configuration() {
        let configuration = Configuration {
            output: OutputTarget::Both,
            log_file: Some(Utf8PathBuf::from("/var/log/gopaper.log")),
            log_level: LogLevel::Warn,
            show_caller: false,
        };

        let options = LoggingOptions::from_configuration(&configuration).with_overrides(
            Some(OutputTarget::Console),
            Some(LogLevel::Trace),
            true,
        );

        assert_eq!(options.output, OutputTarget::Console);
        assert_eq!(options.level, LogLevel::Trace);
        assert!(options.show_caller);
        assert_eq!(options.resolved_log_file(), None);
    }

    #[test]
    fn test_missing_flags_keep_configuration() {
        let configuration = Configuration {
            output: OutputTarget::File,
            log_file: None,
            log_level: LogLevel::Error,
            show_caller: true,
        };

        let options =
            LoggingOptions::from_configuration(&configuration).with_overrides(None, None, false);

        assert_eq!(options.level, LogLevel::Error);
        assert!(options.show_caller);
        assert_eq!(options.resolved_log_file(), Some(default_log_path()));
    }

    fn max_level(filter: &EnvFilter) -> Option<LevelFilter> {
        <EnvFilter as Layer<Registry>>::max_level_hint(filter)
    }

    #[test]
    fn test_rust_log_overrides_configured_level() {
        let filter = level_filter(LogLevel::Error, "debug");
        assert_eq!(max_level(&filter), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_configured_level_applies_without_rust_log() {
        assert_eq!(
            max_level(&level_filter(LogLevel::Warn, "")),
            Some(LevelFilter::WARN)
        );
        assert_eq!(
            max_level(&level_filter(LogLevel::Fatal, "")),
            Some(LevelFilter::ERROR)
        );
    }

    #[test]
    fn test_empty_log_file_uses_default_path() {
        let options = LoggingOptions {
            output: OutputTarget::Both,
            log_file: Some(Utf8PathBuf::from("")),
            level: LogLevel::Info,
            show_caller: false,
        };

        let resolved = options.resolved_log_file().unwrap();
        assert_eq!(resolved, default_log_path());
        assert!(split_log_file(&resolved).is_ok());
    }

    #[test]
    fn test_split_log_file_without_directory() {
        let (directory, name) = split_log_file(Utf8Path::new("gopaper.log")).unwrap();
        assert_eq!(directory, Utf8PathBuf::from("."));
        assert_eq!(name, "gopaper.log");
    }
}
