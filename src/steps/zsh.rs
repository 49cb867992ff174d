use crate::{error::InstallerError, pkg::PackageManager, steps::Env, ui};

const SHELL: &str = "zsh";

/// Installs Zsh unless it is already on the search path.
/// Unlike the dependency step, a missing package manager is fatal here.
pub fn run(env: Env<'_>) -> Result<(), InstallerError> {
    if env.cmd.exists(SHELL) {
        tracing::info!("zsh is already installed");
        ui::print_success("Zsh is already installed.");
        return Ok(());
    }

    let pm = PackageManager::detect(env.cmd)
        .ok_or_else(|| InstallerError::NoPackageManager(SHELL.to_string()))?;

    tracing::info!("installing zsh");
    pm.install(env.cmd, &[SHELL])?;

    tracing::info!("zsh installed successfully");
    ui::print_success("Zsh installed.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        fs::RealFs,
        testing::{config_in, with_env, FakeRunner},
    };
    use std::path::Path;

    fn install(runner: &FakeRunner) -> Result<(), InstallerError> {
        let config = config_in(Path::new("/nonexistent"));
        with_env(&config, runner, &RealFs, 0, run)
    }

    #[test]
    fn already_installed_is_noop() {
        let runner = FakeRunner::with_programs(&["zsh", "apt-get"]);
        install(&runner).unwrap();
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn installs_through_apt() {
        let runner = FakeRunner::with_programs(&["apt-get"]);
        install(&runner).unwrap();
        assert_eq!(
            runner.calls(),
            ["sudo apt-get update", "sudo apt-get install -y zsh"]
        );
    }

    #[test]
    fn missing_manager_is_fatal() {
        let err = install(&FakeRunner::default()).unwrap_err();
        assert!(matches!(err, InstallerError::NoPackageManager(s) if s == "zsh"));
    }
}
