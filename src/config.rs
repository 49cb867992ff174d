use std::path::PathBuf;

use dialoguer::{Confirm, Input};

use crate::{error::InstallerError, ui};

/// Repository cloned when the user just presses Enter.
pub const DEFAULT_REPO: &str = "https://github.com/Lance-N3rdlov3/dot-master.git";

/// Holds the user's answers plus the resolved home directory.
/// Built once at the start of a run and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub dotfiles_repo: String,
    pub install_zsh: bool,
    pub install_oh_my_zsh: bool,
    pub home_dir: PathBuf,
}

impl Config {
    /// Asks the three setup questions on the terminal.
    pub fn ask() -> Result<Self, InstallerError> {
        let home_dir = dirs::home_dir().ok_or(InstallerError::HomeDirNotFound)?;

        let repo: String = Input::new()
            .with_prompt("Dotfiles repository URL")
            .default(DEFAULT_REPO.to_string())
            .interact_text()?;

        let install_zsh = Confirm::new()
            .with_prompt("Install Zsh if not present?")
            .default(true)
            .interact()?;

        let install_oh_my_zsh = Confirm::new()
            .with_prompt("Install Oh My Zsh?")
            .default(true)
            .interact()?;

        let config = Config {
            dotfiles_repo: normalize_repo(&repo),
            install_zsh,
            install_oh_my_zsh,
            home_dir,
        };
        config.print_summary();

        Ok(config)
    }

    fn print_summary(&self) {
        let yes_no = |b: bool| if b { "yes" } else { "no" };
        println!();
        ui::print_kv_box(
            "Configuration",
            &[
                ("Dotfiles", self.dotfiles_repo.as_str()),
                ("Zsh", yes_no(self.install_zsh)),
                ("Oh My Zsh", yes_no(self.install_oh_my_zsh)),
            ],
        );
        println!();
    }

    // ── Derived paths ─────────────────────────────────────────────────────────

    /// Clone target for the dotfiles repository.
    pub fn dotfiles_dir(&self) -> PathBuf {
        self.home_dir.join(".dotfiles")
    }

    pub fn backup_dir(&self) -> PathBuf {
        self.home_dir.join(".dotfiles-backup")
    }

    /// Presence of this directory means Oh My Zsh is installed.
    pub fn oh_my_zsh_dir(&self) -> PathBuf {
        self.home_dir.join(".oh-my-zsh")
    }

    pub fn plugins_dir(&self) -> PathBuf {
        self.oh_my_zsh_dir().join("custom").join("plugins")
    }
}

/// Blank answers fall back to [`DEFAULT_REPO`].
fn normalize_repo(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        DEFAULT_REPO.to_string()
    } else {
        trimmed.to_string()
    }
}
