use crate::{error::InstallerError, steps::Env, ui};

/// Clones the dotfiles repository into `~/.dotfiles`, unless that
/// directory already exists. Clone failures are not retried.
pub fn run(env: Env<'_>) -> Result<(), InstallerError> {
    let target = env.config.dotfiles_dir();
    if env.fs.exists(&target) {
        tracing::info!("dotfiles directory already exists: {}", target.display());
        ui::print_success("Dotfiles directory already exists.");
        return Ok(());
    }

    tracing::info!("cloning dotfiles from {}", env.config.dotfiles_repo);
    env.cmd.run(
        "git",
        &["clone", &env.config.dotfiles_repo, &target.to_string_lossy()],
    )?;

    tracing::info!("dotfiles cloned successfully");
    ui::print_success(&format!("Cloned into {}.", target.display()));
    Ok(())
}
