use crate::{error::InstallerError, pkg::PackageManager, steps::Env, ui};

/// Installs the tools later steps rely on (`curl`, `git`).
///
/// A machine without a recognised package manager is accepted as-is:
/// the step succeeds with a warning and later steps fail if the tools
/// are really missing.
pub fn run(env: Env<'_>, packages: &[&str]) -> Result<(), InstallerError> {
    if packages.iter().all(|p| env.cmd.exists(p)) {
        tracing::info!("dependencies already present: {}", packages.join(", "));
        ui::print_success("Dependencies already present.");
        return Ok(());
    }

    let Some(pm) = PackageManager::detect(env.cmd) else {
        tracing::warn!("could not detect package manager, assuming dependencies are installed");
        ui::print_warning("No package manager found — assuming dependencies are installed.");
        return Ok(());
    };

    pm.install(env.cmd, packages)?;

    tracing::info!("dependencies installed successfully");
    ui::print_success(&format!("Installed {}.", packages.join(", ")));
    Ok(())
}
