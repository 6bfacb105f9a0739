use crate::models::{Category, DisplayMode};
use crate::services::selection::{self, SelectionError};
use crate::services::wallpaper::{WallpaperBackend, WallpaperError};
use camino::Utf8PathBuf;
use rand::Rng;
use thiserror::Error;

/// Errors that abort a wallpaper change
#[derive(Error, Debug)]
pub enum ChangeError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error("category '{category}' has no usable wallpaper")]
    Source {
        category: String,
        #[source]
        source: SelectionError,
    },

    #[error("failed to apply wallpaper from category '{category}'")]
    Apply {
        category: String,
        #[source]
        source: WallpaperError,
    },
}

/// What a successful change did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeOutcome {
    pub category: String,
    pub mode: DisplayMode,
    pub wallpaper: Utf8PathBuf,
    /// `None` when the backend could not report the previous wallpaper.
    pub previous: Option<String>,
}

/// Runs the select-then-apply pipeline against a [`WallpaperBackend`].
pub struct WallpaperChanger<B> {
    backend: B,
}

impl<B: WallpaperBackend> WallpaperChanger<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Choose an enabled category, choose a file from it and apply it.
    ///
    /// Failing to read the previous wallpaper or to set the mode is logged and ignored;
    /// everything else is returned as a [`ChangeError`].
    pub fn change<R: Rng>(
        &self,
        categories: &[Category],
        rng: &mut R,
    ) -> Result<ChangeOutcome, ChangeError> {
        let enabled = selection::enabled_categories(categories);
        tracing::debug!(
            "{} of {} categories enabled",
            enabled.len(),
            categories.len()
        );

        let category = selection::pick_category(&enabled, rng)?;
        tracing::debug!(
            "Selected category '{}' ({})",
            category.name,
            category.source
        );

        let source_error = |source: SelectionError| ChangeError::Source {
            category: category.name.clone(),
            source,
        };
        let files = selection::list_candidates(&category.source).map_err(source_error)?;
        let wallpaper =
            selection::pick_file(&category.source, &files, rng).map_err(source_error)?;

        let previous = match self.backend.current() {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!("Could not read previous wallpaper: {}", e);
                None
            }
        };

        self.backend
            .set_from_file(&wallpaper)
            .map_err(|source| ChangeError::Apply {
                category: category.name.clone(),
                source,
            })?;

        if let Err(e) = self.backend.set_mode(category.mode) {
            tracing::warn!("{}", e);
        }

        Ok(ChangeOutcome {
            category: category.name.clone(),
            mode: category.mode,
            wallpaper,
            previous,
        })
    }
}
