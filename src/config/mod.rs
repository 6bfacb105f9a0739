use crate::models::ConfigDocument;
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use std::io;
use thiserror::Error;

pub mod templates;

pub use templates::{TEMPLATE_NAMES, template};

/// File name of the configuration document.
pub const CONFIG_FILE_NAME: &str = "gopaper.yaml";

/// Directory next to the executable that holds generated configs.
pub const CONFIG_DIR_NAME: &str = "conf";

/// Subdirectory of [`CONFIG_DIR_NAME`] used by `baseconfig`.
pub const BASE_CONFIG_DIR_NAME: &str = "base";

/// Errors raised while locating, reading or writing `gopaper.yaml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration file not found at '{0}'")]
    NotFound(Utf8PathBuf),

    #[error(
        "configuration file not found (searched: {searched})\n\nPlease run 'gopaper init' to create a configuration file"
    )]
    NotInSearchPath { searched: String },

    #[error("failed to read configuration file '{path}'")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse configuration file '{path}'")]
    Parse {
        path: Utf8PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    #[error("failed to serialize configuration")]
    Serialize(#[source] serde_yaml_ng::Error),

    #[error("failed to write configuration file '{path}'")]
    Write {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to determine the executable directory: {0}")]
    ExecutableDir(String),
}

impl ConfigError {
    /// True for both "not found" variants, which should send the user to `gopaper init`.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ConfigError::NotFound(_) | ConfigError::NotInSearchPath { .. }
        )
    }
}

/// Loads and saves a single `gopaper.yaml` document.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: Utf8PathBuf,
}

impl ConfigStore {
    /// Create a store bound to an explicit file path. The file does not need to exist yet.
    pub fn at<P: AsRef<Utf8Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Resolve which config file to use.
    ///
    /// An explicit path always wins and must exist. Otherwise `gopaper.yaml` is searched in
    /// `search_root` and then in `search_root/conf`.
    pub fn locate(
        explicit: Option<&Utf8Path>,
        search_root: &Utf8Path,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Ok(Self::at(path));
        }

        let candidates = search_paths(search_root);
        match candidates.iter().find(|candidate| candidate.is_file()) {
            Some(found) => {
                tracing::debug!("Using config file found in search path: {}", found);
                Ok(Self::at(found))
            }
            None => Err(ConfigError::NotInSearchPath {
                searched: candidates
                    .iter()
                    .map(|p| p.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Load the configuration document.
    pub fn load(&self) -> Result<ConfigDocument, ConfigError> {
        let contents = fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                ConfigError::NotFound(self.path.clone())
            } else {
                ConfigError::Read {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;

        let document: ConfigDocument =
            serde_yaml_ng::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!(
            "Loaded config from {} ({} categories)",
            self.path,
            document.categories.len()
        );
        Ok(document)
    }

    /// Save the configuration document, creating parent directories as needed.
    pub fn save(&self, document: &ConfigDocument) -> Result<(), ConfigError> {
        let yaml_string = serde_yaml_ng::to_string(document).map_err(ConfigError::Serialize)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: self.path.clone(),
                source,
            })?;
        }

        fs::write(&self.path, yaml_string).map_err(|source| ConfigError::Write {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!("Saved config to {}", self.path);
        Ok(())
    }
}

/// Default locations searched for `gopaper.yaml`, in priority order.
pub fn search_paths(root: &Utf8Path) -> Vec<Utf8PathBuf> {
    vec![
        root.join(CONFIG_FILE_NAME),
        root.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME),
    ]
}

/// Directory containing the running executable.
pub fn executable_dir() -> Result<Utf8PathBuf, ConfigError> {
    let exe = std::env::current_exe().map_err(|e| ConfigError::ExecutableDir(e.to_string()))?;
    let exe = Utf8PathBuf::try_from(exe).map_err(|e| ConfigError::ExecutableDir(e.to_string()))?;
    exe.parent()
        .map(Utf8Path::to_path_buf)
        .ok_or_else(|| ConfigError::ExecutableDir(format!("'{exe}' has no parent directory")))
}
