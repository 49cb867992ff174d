use std::{
    io,
    process::{Command, Stdio},
};

use crate::{error::InstallerError, ui};

// ── Capability ────────────────────────────────────────────────────────────────

/// Runs external programs. Every call blocks until the child exits.
pub trait CommandRunner {
    /// `true` when `program` resolves on the search path.
    fn exists(&self, program: &str) -> bool;

    /// Runs `program` to completion. A non-zero exit is an error.
    fn run(&self, program: &str, args: &[&str]) -> Result<(), InstallerError>;
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn not_found_or_io(program: &str, err: io::Error) -> InstallerError {
    if err.kind() == io::ErrorKind::NotFound {
        InstallerError::CommandNotFound(program.to_string())
    } else {
        InstallerError::Io(err)
    }
}

/// Mirrors captured child output into the log file, line by line.
fn log_captured_output(program: &str, stdout: &[u8], stderr: &[u8]) {
    for line in String::from_utf8_lossy(stdout).lines() {
        tracing::info!(target: "subprocess", "[{program}] {line}");
    }
    for line in String::from_utf8_lossy(stderr).lines() {
        tracing::info!(target: "subprocess", "[{program}!] {line}");
    }
}

fn display_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

// ── Real runner ───────────────────────────────────────────────────────────────

/// Executes commands for real, showing a spinner while they run.
/// Output is captured and written to the log rather than the terminal.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn exists(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }

    fn run(&self, program: &str, args: &[&str]) -> Result<(), InstallerError> {
        let shown = display_command(program, args);
        tracing::info!("running command: {shown}");

        let pb = ui::spinner(format!("{shown}…"));
        let result = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| not_found_or_io(program, e));
        pb.finish_and_clear();

        let output = result?;
        log_captured_output(program, &output.stdout, &output.stderr);

        if !output.status.success() {
            return Err(InstallerError::CommandFailed(
                shown,
                output.status.code().unwrap_or(-1),
            ));
        }
        Ok(())
    }
}

// ── Dry-run runner ────────────────────────────────────────────────────────────

/// Looks commands up for real but only prints what it would execute.
pub struct DryRunRunner;

impl CommandRunner for DryRunRunner {
    fn exists(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }

    fn run(&self, program: &str, args: &[&str]) -> Result<(), InstallerError> {
        let shown = display_command(program, args);
        tracing::info!("dry-run: would run {shown}");
        ui::print_info(&format!("[dry-run] {shown}"));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_program_and_args() {
        assert_eq!(
            display_command("sudo", &["apt-get", "install", "-y", "zsh"]),
            "sudo apt-get install -y zsh"
        );
        assert_eq!(display_command("true", &[]), "true");
    }

    #[test]
    fn missing_program_maps_to_not_found() {
        let err = not_found_or_io("nope", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, InstallerError::CommandNotFound(p) if p == "nope"));

        let err = not_found_or_io("nope", io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, InstallerError::Io(_)));
    }

    #[test]
    fn dry_run_never_fails() {
        assert!(DryRunRunner
            .run("definitely-not-a-real-binary", &["--flag"])
            .is_ok());
    }
}
