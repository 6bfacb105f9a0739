//! gopaper - change the desktop wallpaper based on configurable categories.
//!
//! # Execution Flow
//!
//! 1. Parse command line flags (clap)
//! 2. For a wallpaper change: locate and load `gopaper.yaml`, merge logging flags over the
//!    file's `configuration` section and install the tracing subscriber
//! 3. Pick an enabled category, pick a file from its source directory and apply it
//! 4. For `init` / `baseconfig`: write a config file under `<executable_dir>/conf`
//!
//! Exit code is 0 on success and 1 on any unrecoverable error.

use clap::Parser;
use gopaper::cli::{self, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Cli::parse();

    match cli::run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
