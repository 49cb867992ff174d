pub mod clone;
pub mod dependencies;
pub mod oh_my_zsh;
pub mod symlinks;
pub mod zsh;

use crate::{
    clock::Clock, cmd::CommandRunner, config::Config, error::InstallerError, fs::FileSystem,
    state::Progress,
};

// ── Execution environment ─────────────────────────────────────────────────────

/// Everything a step may touch. Passed explicitly to every step.
#[derive(Clone, Copy)]
pub struct Env<'a> {
    pub config: &'a Config,
    pub cmd: &'a dyn CommandRunner,
    pub fs: &'a dyn FileSystem,
    pub clock: &'a dyn Clock,
}

// ── Step kinds ────────────────────────────────────────────────────────────────

/// A third-party Oh My Zsh plugin cloned from git.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plugin {
    pub name: &'static str,
    pub repo: &'static str,
}

/// One unit of installation work, carrying its own parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Dependencies { packages: &'static [&'static str] },
    Zsh,
    OhMyZsh {
        installer_url: &'static str,
        plugins: &'static [Plugin],
    },
    CloneDotfiles,
    Symlinks { dotfiles: &'static [&'static str] },
}

pub const DEPENDENCIES: &[&str] = &["curl", "git"];

/// Upstream installer pinned to a commit so the script cannot drift.
pub const OH_MY_ZSH_INSTALLER: &str = "https://raw.githubusercontent.com/ohmyzsh/ohmyzsh/c0b0cf2e66217f6e85e45726e97941287c568126/tools/install.sh";

pub const PLUGINS: &[Plugin] = &[
    Plugin {
        name: "zsh-autosuggestions",
        repo: "https://github.com/zsh-users/zsh-autosuggestions.git",
    },
    Plugin {
        name: "zsh-syntax-highlighting",
        repo: "https://github.com/zsh-users/zsh-syntax-highlighting.git",
    },
];

pub const DOTFILES: &[&str] = &[".zshrc", ".bashrc", ".vimrc", ".gitconfig", ".tmux.conf"];

impl Step {
    /// The fixed installation order.
    pub fn sequence() -> Vec<Step> {
        vec![
            Step::Dependencies {
                packages: DEPENDENCIES,
            },
            Step::Zsh,
            Step::OhMyZsh {
                installer_url: OH_MY_ZSH_INSTALLER,
                plugins: PLUGINS,
            },
            Step::CloneDotfiles,
            Step::Symlinks { dotfiles: DOTFILES },
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Step::Dependencies { .. } => "Installing dependencies",
            Step::Zsh => "Installing Zsh",
            Step::OhMyZsh { .. } => "Installing Oh My Zsh",
            Step::CloneDotfiles => "Cloning dotfiles repository",
            Step::Symlinks { .. } => "Creating symlinks",
        }
    }

    pub fn skip_reason(&self) -> &'static str {
        match self {
            Step::Dependencies { .. } => "Dependencies already installed",
            Step::Zsh => "Zsh installation skipped",
            Step::OhMyZsh { .. } => "Oh My Zsh installation skipped",
            Step::CloneDotfiles => "Dotfiles already cloned",
            Step::Symlinks { .. } => "Symlinks already created",
        }
    }

    /// Whether a previous run already finished this step.
    pub fn is_done(&self, progress: &Progress) -> bool {
        match self {
            Step::Dependencies { .. } => progress.dependencies_installed,
            Step::Zsh => progress.zsh_installed,
            Step::OhMyZsh { .. } => progress.oh_my_zsh_installed,
            Step::CloneDotfiles => progress.dotfiles_cloned,
            Step::Symlinks { .. } => progress.symlinks_created,
        }
    }

    /// Done steps are always skipped; optional ones also when declined.
    pub fn should_skip(&self, progress: &Progress, config: &Config) -> bool {
        if self.is_done(progress) {
            return true;
        }
        match self {
            Step::Zsh => !config.install_zsh,
            Step::OhMyZsh { .. } => !config.install_oh_my_zsh,
            _ => false,
        }
    }

    pub fn mark_done(&self, progress: &mut Progress) {
        let flag = match self {
            Step::Dependencies { .. } => &mut progress.dependencies_installed,
            Step::Zsh => &mut progress.zsh_installed,
            Step::OhMyZsh { .. } => &mut progress.oh_my_zsh_installed,
            Step::CloneDotfiles => &mut progress.dotfiles_cloned,
            Step::Symlinks { .. } => &mut progress.symlinks_created,
        };
        *flag = true;
    }

    pub fn execute(&self, env: Env<'_>) -> Result<(), InstallerError> {
        match self {
            Step::Dependencies { packages } => dependencies::run(env, packages),
            Step::Zsh => zsh::run(env),
            Step::OhMyZsh {
                installer_url,
                plugins,
            } => oh_my_zsh::run(env, installer_url, plugins),
            Step::CloneDotfiles => clone::run(env),
            Step::Symlinks { dotfiles } => symlinks::run(env, dotfiles),
        }
    }
}
