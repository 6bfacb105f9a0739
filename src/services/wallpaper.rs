use crate::models::DisplayMode;
use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

/// Errors reported by a [`WallpaperBackend`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WallpaperError {
    #[error("failed to get the current wallpaper: {0}")]
    Get(String),

    #[error("failed to set wallpaper '{path}': {message}")]
    Set { path: Utf8PathBuf, message: String },

    #[error("failed to set wallpaper mode '{mode}': {message}")]
    Mode { mode: DisplayMode, message: String },
}

/// The host OS wallpaper mechanism.
///
/// The change pipeline only talks to this trait, so tests can substitute a fake.
#[cfg_attr(test, mockall::automock)]
pub trait WallpaperBackend {
    /// Path of the wallpaper currently shown.
    fn current(&self) -> Result<String, WallpaperError>;

    /// Show the image at `path`.
    fn set_from_file(&self, path: &Utf8Path) -> Result<(), WallpaperError>;

    /// Change how the image is scaled and positioned.
    fn set_mode(&self, mode: DisplayMode) -> Result<(), WallpaperError>;
}

/// [`WallpaperBackend`] backed by the `wallpaper` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemWallpaper;

impl SystemWallpaper {
    pub fn new() -> Self {
        Self
    }
}

impl WallpaperBackend for SystemWallpaper {
    fn current(&self) -> Result<String, WallpaperError> {
        wallpaper::get().map_err(|e| WallpaperError::Get(e.to_string()))
    }

    fn set_from_file(&self, path: &Utf8Path) -> Result<(), WallpaperError> {
        tracing::debug!("Setting wallpaper from {}", path);
        wallpaper::set_from_path(path.as_str()).map_err(|e| WallpaperError::Set {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    fn set_mode(&self, mode: DisplayMode) -> Result<(), WallpaperError> {
        tracing::debug!("Setting wallpaper mode to {}", mode);
        wallpaper::set_mode(os_mode(mode)).map_err(|e| WallpaperError::Mode {
            mode,
            message: e.to_string(),
        })
    }
}

fn os_mode(mode: DisplayMode) -> wallpaper::Mode {
    match mode {
        DisplayMode::Center => wallpaper::Mode::Center,
        DisplayMode::Fit => wallpaper::Mode::Fit,
        DisplayMode::Span => wallpaper::Mode::Span,
        DisplayMode::Stretch => wallpaper::Mode::Stretch,
        DisplayMode::Tile => wallpaper::Mode::Tile,
        DisplayMode::Crop => wallpaper::Mode::Crop,
    }
}
