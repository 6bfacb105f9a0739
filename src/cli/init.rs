use crate::config::templates::{DEFAULT_TEMPLATE, TEMPLATE_NAMES, basic_template, template};
use crate::config::{CONFIG_FILE_NAME, ConfigStore};
use crate::wizard::{self, Prompter};
use anyhow::Result;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;

#[derive(Args, Debug, Clone)]
#[command(
    long_about = "Initialize the gopaper configuration file from a predefined template or \
                  through interactive prompts.\n\nAvailable templates:\n  \
                  basic: a single enabled category with console logging\n  \
                  full:  several example categories with console and file logging\n\n\
                  The configuration file is created at <executable_dir>/conf/gopaper.yaml",
    after_help = "Examples:\n  gopaper init -i          # interactive mode\n  \
                  gopaper init -t full     # use a template\n  \
                  gopaper init -f          # overwrite an existing config"
)]
pub struct InitArgs {
    /// Overwrite existing configuration file
    #[arg(short, long)]
    pub force: bool,

    /// Interactive mode with prompts
    #[arg(short, long)]
    pub interactive: bool,

    /// Template to use (basic, full)
    #[arg(short, long, default_value = DEFAULT_TEMPLATE)]
    pub template: String,
}

impl Default for InitArgs {
    fn default() -> Self {
        Self {
            force: false,
            interactive: false,
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    Created(Utf8PathBuf),
    /// A config already existed and `--force` was not given; nothing was written.
    AlreadyExists(Utf8PathBuf),
}

/// Write `conf_dir/gopaper.yaml` from a template or the interactive wizard.
pub fn run<P: Prompter + ?Sized>(
    args: &InitArgs,
    conf_dir: &Utf8Path,
    prompter: &mut P,
) -> Result<InitOutcome> {
    let store = ConfigStore::at(conf_dir.join(CONFIG_FILE_NAME));

    if store.exists() && !args.force {
        prompter.note(&format!(
            "Configuration file already exists at: {}",
            store.path()
        ))?;
        prompter.note("Use --force to overwrite")?;
        return Ok(InitOutcome::AlreadyExists(store.path().to_path_buf()));
    }

    let document = if args.interactive {
        wizard::init_wizard(prompter)?
    } else {
        template(&args.template).unwrap_or_else(|| {
            tracing::warn!(
                "Unknown template '{}', using '{}' (available: {})",
                args.template,
                DEFAULT_TEMPLATE,
                TEMPLATE_NAMES.join(", ")
            );
            basic_template()
        })
    };

    store.save(&document)?;
    tracing::info!("Configuration file created at: {}", store.path());

    prompter.note(&format!("Configuration file created at: {}", store.path()))?;
    prompter.note("")?;
    prompter.note("Next steps:")?;
    prompter.note("  1. Edit the configuration file to customize categories")?;
    prompter.note("  2. Add your wallpaper images to the source directories")?;
    prompter.note("  3. Run 'gopaper' to change your wallpaper")?;

    Ok(InitOutcome::Created(store.path().to_path_buf()))
}
