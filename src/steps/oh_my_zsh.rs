use crate::{
    error::InstallerError,
    steps::{Env, Plugin},
    ui,
};

/// Installs Oh My Zsh from the pinned upstream script, then its plugins.
/// Does nothing when `~/.oh-my-zsh` already exists.
pub fn run(env: Env<'_>, installer_url: &str, plugins: &[Plugin]) -> Result<(), InstallerError> {
    let target = env.config.oh_my_zsh_dir();
    if env.fs.exists(&target) {
        tracing::info!("oh my zsh is already installed at {}", target.display());
        ui::print_success("Oh My Zsh is already installed.");
        return Ok(());
    }

    tracing::info!("installing oh my zsh from {installer_url}");
    env.cmd.run("sh", &["-c", &install_script(installer_url)])?;

    install_plugins(env, plugins);

    tracing::info!("oh my zsh installed successfully");
    ui::print_success("Oh My Zsh installed.");
    Ok(())
}

/// Shell line that downloads and runs the installer without prompting
/// or switching the login shell mid-run.
fn install_script(url: &str) -> String {
    format!(r#"sh -c "$(curl -fsSL {url})" "" --unattended"#)
}

/// Clones each plugin not already present. Failures are only warnings.
fn install_plugins(env: Env<'_>, plugins: &[Plugin]) {
    let plugins_dir = env.config.plugins_dir();

    for plugin in plugins {
        let dir = plugins_dir.join(plugin.name);
        if env.fs.exists(&dir) {
            tracing::info!("plugin {} already installed", plugin.name);
            continue;
        }

        tracing::info!("installing plugin: {}", plugin.name);
        let dir_str = dir.to_string_lossy();
        if let Err(e) = env.cmd.run("git", &["clone", plugin.repo, &dir_str]) {
            tracing::warn!("failed to install plugin {}: {e}", plugin.name);
            ui::print_warning(&format!("Plugin {} could not be installed.", plugin.name));
        }
    }
}
