use crate::config::templates::default_category;
use crate::config::{BASE_CONFIG_DIR_NAME, CONFIG_FILE_NAME, ConfigStore};
use crate::models::{ConfigDocument, Configuration};
use crate::wizard::{self, Prompter};
use anyhow::Result;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;

#[derive(Args, Debug, Clone, Default)]
#[command(
    long_about = "Generates a base configuration file in <executable_dir>/conf/base with a \
                  default category.\nThe file can then be customized with category names and \
                  source directories.\nAn existing base configuration file is never overwritten."
)]
pub struct BaseConfigArgs {
    /// Interactive mode for creating a base configuration file
    #[arg(long)]
    pub interactive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseConfigOutcome {
    Created(Utf8PathBuf),
    AlreadyExists(Utf8PathBuf),
}

/// Write `conf_dir/base/gopaper.yaml` unless it already exists.
pub fn run<P: Prompter + ?Sized>(
    args: &BaseConfigArgs,
    conf_dir: &Utf8Path,
    prompter: &mut P,
) -> Result<BaseConfigOutcome> {
    tracing::info!("Creating a base configuration file");
    let store = ConfigStore::at(conf_dir.join(BASE_CONFIG_DIR_NAME).join(CONFIG_FILE_NAME));

    if store.exists() {
        tracing::warn!(
            "Base configuration file already exists, not overwriting: {}",
            store.path()
        );
        return Ok(BaseConfigOutcome::AlreadyExists(store.path().to_path_buf()));
    }

    let document = if args.interactive {
        wizard::base_config_wizard(prompter)?
    } else {
        ConfigDocument {
            configuration: Configuration::default(),
            categories: vec![default_category()],
        }
    };

    store.save(&document)?;
    tracing::info!("Base configuration file created: {}", store.path());

    Ok(BaseConfigOutcome::Created(store.path().to_path_buf()))
}
