//! Services module - wallpaper selection and application.
//!
//! # Components
//!
//! - [`selection`]: filtering enabled categories and uniform random picks of a category and
//!   of a file inside the category's source directory. Directories are never candidates.
//! - [`wallpaper`]: the [`WallpaperBackend`] seam over the host OS, with [`SystemWallpaper`]
//!   as the real implementation.
//! - [`changer`]: [`WallpaperChanger`], the linear pipeline
//!   `select category -> select file -> read previous -> set file -> set mode`.
//!
//! The services hold no state between runs and take their randomness from the caller.

pub mod changer;
pub mod selection;
pub mod wallpaper;

pub use changer::{ChangeError, ChangeOutcome, WallpaperChanger};
pub use selection::{
    SelectionError, enabled_categories, list_candidates, pick_category, pick_file, pick_random,
};
pub use wallpaper::{SystemWallpaper, WallpaperBackend, WallpaperError};
