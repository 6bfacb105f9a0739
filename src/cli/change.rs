use super::RunContext;
use crate::services::{ChangeOutcome, WallpaperBackend, WallpaperChanger};
use anyhow::Result;
use rand::Rng;

/// Change the wallpaper using the categories from the loaded config.
pub fn run<B, R>(ctx: &RunContext, backend: B, rng: &mut R) -> Result<ChangeOutcome>
where
    B: WallpaperBackend,
    R: Rng,
{
    tracing::info!("Starting wallpaper change");
    tracing::debug!(
        "Using configuration: output={}, log-level={}, show-caller={}, log-file={:?}, config-file={}",
        ctx.logging.output,
        ctx.logging.level,
        ctx.logging.show_caller,
        ctx.logging.resolved_log_file(),
        ctx.config_path
    );

    let changer = WallpaperChanger::new(backend);
    match changer.change(&ctx.document.categories, rng) {
        Ok(outcome) => {
            tracing::info!(
                "Wallpaper changed successfully: category={}, new wallpaper={}, previous wallpaper={}, mode={}",
                outcome.category,
                outcome.wallpaper,
                outcome.previous.as_deref().unwrap_or("unknown"),
                outcome.mode
            );
            Ok(outcome)
        }
        Err(e) => {
            let err = anyhow::Error::new(e).context(format!(
                "Failed to change wallpaper using {}",
                ctx.config_path
            ));
            tracing::error!("{:#}", err);
            Err(err)
        }
    }
}
