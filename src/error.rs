use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstallerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Command '{0}' failed with exit code {1}")]
    CommandFailed(String, i32),

    #[error("Command '{0}' not found — is it installed?")]
    CommandNotFound(String),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Failed to initialize logging: {0}")]
    Logging(#[from] tracing_appender::rolling::InitError),

    #[error("Could not determine the current user's home directory")]
    HomeDirNotFound,

    #[error("Could not detect a package manager to install {0}")]
    NoPackageManager(String),

    #[error("Dotfiles directory does not exist: {}", .0.display())]
    MissingDotfiles(PathBuf),

    #[error("{step} failed: {source}")]
    Step {
        step: String,
        #[source]
        source: Box<InstallerError>,
    },
}

impl InstallerError {
    /// Wraps `self` with the name of the step that produced it.
    pub fn in_step(self, step: &str) -> Self {
        InstallerError::Step {
            step: step.to_string(),
            source: Box::new(self),
        }
    }
}
