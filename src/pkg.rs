use crate::{cmd::CommandRunner, error::InstallerError};

/// Supported system package managers, in detection priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Apt,
    Yum,
    Dnf,
    Pacman,
    Brew,
}

impl PackageManager {
    pub const ALL: [PackageManager; 5] = [
        PackageManager::Apt,
        PackageManager::Yum,
        PackageManager::Dnf,
        PackageManager::Pacman,
        PackageManager::Brew,
    ];

    /// The binary whose presence identifies this manager.
    pub fn binary(self) -> &'static str {
        match self {
            PackageManager::Apt => "apt-get",
            PackageManager::Yum => "yum",
            PackageManager::Dnf => "dnf",
            PackageManager::Pacman => "pacman",
            PackageManager::Brew => "brew",
        }
    }

    /// First manager found on the search path, if any.
    pub fn detect(runner: &dyn CommandRunner) -> Option<Self> {
        Self::ALL.into_iter().find(|pm| runner.exists(pm.binary()))
    }

    /// Non-interactive command lines that install `packages`, in order.
    pub fn install_commands(self, packages: &[&str]) -> Vec<Vec<String>> {
        let with = |prefix: &[&str]| -> Vec<String> {
            prefix
                .iter()
                .chain(packages.iter())
                .map(|s| s.to_string())
                .collect()
        };

        match self {
            PackageManager::Apt => vec![
                ["sudo", "apt-get", "update"].map(String::from).to_vec(),
                with(&["sudo", "apt-get", "install", "-y"]),
            ],
            PackageManager::Yum => vec![with(&["sudo", "yum", "install", "-y"])],
            PackageManager::Dnf => vec![with(&["sudo", "dnf", "install", "-y"])],
            PackageManager::Pacman => vec![with(&["sudo", "pacman", "-S", "--noconfirm"])],
            PackageManager::Brew => vec![with(&["brew", "install"])],
        }
    }

    /// Runs [`install_commands`](Self::install_commands), stopping at the first failure.
    pub fn install(self, runner: &dyn CommandRunner, packages: &[&str]) -> Result<(), InstallerError> {
        tracing::info!("installing {} with {}", packages.join(", "), self.binary());
        for line in self.install_commands(packages) {
            let args: Vec<&str> = line[1..].iter().map(String::as_str).collect();
            runner.run(&line[0], &args)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeRunner;

    #[test]
    fn detection_follows_priority() {
        let runner = FakeRunner::with_programs(&["brew", "dnf", "pacman"]);
        assert_eq!(PackageManager::detect(&runner), Some(PackageManager::Dnf));

        let runner = FakeRunner::with_programs(&["apt-get", "brew"]);
        assert_eq!(PackageManager::detect(&runner), Some(PackageManager::Apt));

        assert_eq!(PackageManager::detect(&FakeRunner::default()), None);
    }

    #[test]
    fn apt_updates_before_installing() {
        let cmds = PackageManager::Apt.install_commands(&["curl", "git"]);
        assert_eq!(
            cmds,
            vec![
                vec!["sudo", "apt-get", "update"],
                vec!["sudo", "apt-get", "install", "-y", "curl", "git"],
            ]
        );
    }

    #[test]
    fn brew_runs_without_sudo() {
        let cmds = PackageManager::Brew.install_commands(&["zsh"]);
        assert_eq!(cmds, vec![vec!["brew", "install", "zsh"]]);
    }

    #[test]
    fn install_stops_at_first_failure() {
        let runner = FakeRunner::default().failing("sudo");
        let err = PackageManager::Apt.install(&runner, &["zsh"]).unwrap_err();

        assert!(matches!(err, InstallerError::CommandFailed(..)));
        assert_eq!(runner.calls(), vec!["sudo apt-get update"]);
    }
}
