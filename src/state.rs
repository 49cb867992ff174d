use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::Clock;

/// Default location, relative to the working directory.
pub const STATE_FILE: &str = ".setup-state.json";

// ── Progress record ───────────────────────────────────────────────────────────

/// Which steps have completed, across runs.
/// Flags only ever go from `false` to `true`. Keys missing from the file
/// load as `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Progress {
    pub dependencies_installed: bool,
    pub zsh_installed: bool,
    pub oh_my_zsh_installed: bool,
    pub dotfiles_cloned: bool,
    pub symlinks_created: bool,
    pub last_updated: DateTime<Utc>,
}

// ── Store ─────────────────────────────────────────────────────────────────────

/// Reads and writes the progress record as pretty JSON at a fixed path.
#[derive(Debug, Clone)]
pub struct ProgressStore {
    path: PathBuf,
    read_only: bool,
}

impl ProgressStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            read_only: false,
        }
    }

    /// A store that loads normally but never writes (dry-run).
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the saved record, or an all-false one when the file is
    /// missing or unreadable. Never fails.
    pub fn load(&self) -> Progress {
        let data = match fs::read_to_string(&self.path) {
            Ok(d) => d,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no state file at {}, starting fresh", self.path.display());
                return Progress::default();
            }
            Err(e) => {
                tracing::warn!("could not read state file {}: {e}", self.path.display());
                return Progress::default();
            }
        };

        match serde_json::from_str::<Progress>(&data) {
            Ok(progress) => {
                tracing::info!(
                    "loaded previous state from {}",
                    progress.last_updated.to_rfc3339()
                );
                progress
            }
            Err(e) => {
                tracing::warn!("could not parse state file {}: {e}", self.path.display());
                Progress::default()
            }
        }
    }

    /// Stamps `progress` with the current time and overwrites the file.
    /// Write errors are logged; losing one update only repeats a step.
    pub fn save(&self, progress: &mut Progress, clock: &dyn Clock) {
        progress.last_updated = clock.now();

        if self.read_only {
            tracing::debug!("dry-run: not writing {}", self.path.display());
            return;
        }

        if let Err(e) = self.write(progress) {
            tracing::warn!("failed to save state to {}: {e}", self.path.display());
        }
    }

    fn write(&self, progress: &Progress) -> std::io::Result<()> {
        let data = serde_json::to_string_pretty(progress)?;
        fs::write(&self.path, data)
    }
}
