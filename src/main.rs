mod clock;
mod cmd;
mod config;
mod error;
mod fs;
mod installer;
mod pkg;
mod state;
mod steps;
mod ui;

#[cfg(test)]
mod testing;

use std::path::Path;

use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::EnvFilter;

use clock::SystemClock;
use cmd::{CommandRunner, DryRunRunner, SystemRunner};
use config::Config;
use error::InstallerError;
use fs::{DryRunFs, FileSystem, RealFs};
use installer::Installer;
use state::{ProgressStore, STATE_FILE};
use steps::{Env, Step};

const LOG_FILE: &str = "dotfiles-install.log";

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // The only supported flag. In dry-run mode nothing is installed,
    // linked or saved; every change is printed instead.
    let dry_run = std::env::args().any(|a| a == "--dry-run");

    let guard = match init_logging() {
        Ok(guard) => guard,
        Err(e) => {
            ui::print_error(&e.to_string());
            std::process::exit(1);
        }
    };
    tracing::info!("starting dotfiles installation");

    let code = match run(dry_run) {
        Ok(()) => {
            tracing::info!("installation completed successfully");
            println!();
            ui::print_success("Installation completed successfully!");
            ui::print_info("Please restart your shell or run: source ~/.zshrc");
            0
        }
        Err(e) => {
            tracing::error!("installation failed: {e}");
            println!();
            ui::print_error(&format!("Installation failed: {}", e));
            ui::print_info(&format!("Check the log file for details: {}", LOG_FILE));
            1
        }
    };

    // exit() skips destructors; flush the log writer first.
    drop(guard);
    std::process::exit(code);
}

fn run(dry_run: bool) -> Result<(), InstallerError> {
    ui::print_banner();

    if dry_run {
        ui::print_warning("DRY-RUN MODE — nothing will be installed, linked or saved.");
    }

    let mut store = ProgressStore::new(STATE_FILE);
    if dry_run {
        store = store.read_only();
    }
    let mut installer = Installer::new(store, Step::sequence());

    let config = Config::ask()?;

    let (cmd, fs): (&dyn CommandRunner, &dyn FileSystem) = if dry_run {
        (&DryRunRunner, &DryRunFs)
    } else {
        (&SystemRunner, &RealFs)
    };

    installer.run(Env {
        config: &config,
        cmd,
        fs,
        clock: &SystemClock,
    })?;

    tracing::debug!(progress = ?installer.progress(), "final state");
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Appends timestamped log lines to [`LOG_FILE`] in the working directory.
/// The returned guard flushes the writer when dropped.
fn init_logging() -> Result<WorkerGuard, InstallerError> {
    let file_appender = log_appender(Path::new("."))?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("dotfiles_installer=info,subprocess=info"));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_env_filter(filter)
        .init();

    Ok(guard)
}

/// Opens `dir/LOG_FILE` for appending, never rotated.
fn log_appender(dir: &Path) -> Result<RollingFileAppender, InstallerError> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE)
        .build(dir)?;
    Ok(appender)
}
