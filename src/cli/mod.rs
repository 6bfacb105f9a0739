//! Command line shell.
//!
//! `gopaper` with no subcommand (or `gopaper change`) loads the config and changes the
//! wallpaper. `init` and `baseconfig` generate config files next to the executable.

pub mod baseconfig;
pub mod change;
pub mod init;

use crate::config::{self, CONFIG_DIR_NAME, ConfigStore};
use crate::logging::{LoggingOptions, setup_logging};
use crate::models::{ConfigDocument, LogLevel, OutputTarget};
use crate::services::SystemWallpaper;
use crate::wizard::TerminalPrompter;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, Parser, Subcommand};
use std::process::ExitCode;
use tracing_appender::non_blocking::WorkerGuard;

pub use baseconfig::BaseConfigArgs;
pub use init::InitArgs;

/// Commandline arguments.
#[derive(Parser, Debug)]
#[command(
    name = "gopaper",
    version,
    about = "Change the desktop wallpaper based on configurable categories",
    long_about = "gopaper picks a random image from a randomly chosen enabled category and sets it \
                  as the desktop wallpaper, using the category's display mode."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Flags accepted by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Where to send log output (overrides the config file)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputTarget>,

    /// Minimum log level (overrides the config file)
    #[arg(short = 'l', long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Include source file and line in log lines
    #[arg(long, global = true)]
    pub show_caller: bool,

    /// Path to configuration file (e.g., /path/to/gopaper.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Change the desktop wallpaper (default when no subcommand is given)
    Change,

    /// Initialize gopaper configuration
    Init(InitArgs),

    /// Generate a base configuration file
    #[command(name = "baseconfig")]
    BaseConfig(BaseConfigArgs),
}

/// Everything a wallpaper change needs, resolved once per invocation.
pub struct RunContext {
    pub config_path: Utf8PathBuf,
    pub document: ConfigDocument,
    pub logging: LoggingOptions,
    log_guard: Option<WorkerGuard>,
}

impl RunContext {
    /// Locate and load the config file, then merge the logging flags over it.
    ///
    /// `search_root` is where `gopaper.yaml` is looked up when `--config` is not given.
    pub fn load(args: &GlobalArgs, search_root: &Utf8Path) -> Result<Self> {
        let store = ConfigStore::locate(args.config.as_deref(), search_root)?;
        let document = store.load()?;
        let logging = LoggingOptions::from_configuration(&document.configuration)
            .with_overrides(args.output, args.log_level, args.show_caller);

        Ok(Self {
            config_path: store.path().to_path_buf(),
            document,
            logging,
            log_guard: None,
        })
    }

    /// Install the global tracing subscriber for this run.
    pub fn install_logging(&mut self) -> Result<()> {
        self.log_guard = setup_logging(&self.logging)?;
        Ok(())
    }
}

/// Run the parsed command line.
///
/// An `Err` has not been shown to the user yet; the caller must report it.
pub fn run(cli: Cli) -> Result<ExitCode> {
    let exe_dir = config::executable_dir()?;

    match cli.command {
        None | Some(Commands::Change) => {
            let mut ctx = RunContext::load(&cli.global, &exe_dir)?;
            ctx.install_logging()?;
            let result = change::run(&ctx, SystemWallpaper::new(), &mut rand::rng());
            finish_change(result.map(drop), ctx.logging.output)
        }
        Some(Commands::Init(args)) => {
            let _guard = flag_only_logging(&cli.global)?;
            let conf_dir = exe_dir.join(CONFIG_DIR_NAME);
            init::run(&args, &conf_dir, &mut TerminalPrompter::stdio())
                .context("Failed to initialize configuration")?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::BaseConfig(args)) => {
            let _guard = flag_only_logging(&cli.global)?;
            let conf_dir = exe_dir.join(CONFIG_DIR_NAME);
            baseconfig::run(&args, &conf_dir, &mut TerminalPrompter::stdio())
                .context("Failed to create base configuration")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// A failed change is already logged; only hand it back when the log is not on the console.
fn finish_change(result: Result<()>, output: OutputTarget) -> Result<ExitCode> {
    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(_) if output.writes_console() => Ok(ExitCode::FAILURE),
        Err(e) => Err(e),
    }
}

/// Config-generation commands run before any config exists, so only the flags apply.
fn flag_only_logging(args: &GlobalArgs) -> Result<Option<WorkerGuard>> {
    let options = LoggingOptions::default().with_overrides(
        args.output,
        args.log_level,
        args.show_caller,
    );
    setup_logging(&options)
}
