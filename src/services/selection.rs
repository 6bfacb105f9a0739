//! Category and file selection.
//!
//! Everything here is a pure function over slices except [`list_candidates`], which reads
//! one directory level. Randomness comes from a caller-supplied [`Rng`] so tests can seed it.

use crate::models::Category;
use camino::{Utf8Path, Utf8PathBuf};
use rand::Rng;
use std::fs;
use std::io;
use thiserror::Error;

/// Errors that can occur while choosing a category or a file
#[derive(Error, Debug)]
pub enum SelectionError {
    #[error("no enabled category found to select a wallpaper from")]
    NoEnabledCategory,

    #[error("failed to read source directory '{path}'")]
    DirectoryUnreadable {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no files found in directory '{path}'")]
    NoFiles { path: Utf8PathBuf },
}

/// Return the enabled categories in their original order.
pub fn enabled_categories(categories: &[Category]) -> Vec<&Category> {
    categories.iter().filter(|c| c.enabled).collect()
}

/// Pick one element uniformly at random, or `None` for an empty slice.
pub fn pick_random<'a, T, R>(items: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng,
{
    if items.is_empty() {
        return None;
    }
    items.get(rng.random_range(0..items.len()))
}

/// Pick one of the enabled categories.
pub fn pick_category<'a, R>(
    enabled: &[&'a Category],
    rng: &mut R,
) -> Result<&'a Category, SelectionError>
where
    R: Rng,
{
    pick_random(enabled, rng)
        .copied()
        .ok_or(SelectionError::NoEnabledCategory)
}

/// List the regular files directly inside `dir`, sorted by name.
///
/// Subdirectories are never candidates. Symlinks count when they resolve to a file.
pub fn list_candidates(dir: &Utf8Path) -> Result<Vec<Utf8PathBuf>, SelectionError> {
    let unreadable = |source: io::Error| SelectionError::DirectoryUnreadable {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        let path = match Utf8PathBuf::try_from(entry.path()) {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("Skipping non UTF-8 entry in {}: {}", dir, e);
                continue;
            }
        };

        if path.is_file() {
            files.push(path);
        } else {
            tracing::trace!("Skipping non-file entry: {}", path);
        }
    }

    files.sort();
    tracing::debug!("Found {} candidate files in {}", files.len(), dir);
    Ok(files)
}

/// Pick one file from a listing produced by [`list_candidates`].
pub fn pick_file<R>(
    dir: &Utf8Path,
    files: &[Utf8PathBuf],
    rng: &mut R,
) -> Result<Utf8PathBuf, SelectionError>
where
    R: Rng,
{
    pick_random(files, rng)
        .cloned()
        .ok_or_else(|| SelectionError::NoFiles {
            path: dir.to_path_buf(),
        })
}
