use std::path::Path;

use crate::{
    clock,
    error::InstallerError,
    fs::EntryKind,
    steps::Env,
    ui,
};

/// Links the tracked dotfiles from `~/.dotfiles` into `$HOME`, then every
/// direct entry of `~/.dotfiles/.config` into `~/.config`.
///
/// Pre-existing real files are moved into `~/.dotfiles-backup` with a
/// timestamp suffix; pre-existing symlinks are just replaced. Per-file
/// problems are warnings. Only a missing checkout or an uncreatable
/// backup directory fails the step.
pub fn run(env: Env<'_>, dotfiles: &[&str]) -> Result<(), InstallerError> {
    let config = env.config;
    let source_dir = config.dotfiles_dir();
    if !env.fs.exists(&source_dir) {
        if env.fs.simulated() {
            announce_planned_links(env, dotfiles);
            return Ok(());
        }
        return Err(InstallerError::MissingDotfiles(source_dir));
    }

    tracing::info!("creating symlinks for dotfiles");

    let backup_dir = config.backup_dir();
    env.fs.create_dir_all(&backup_dir)?;

    let stamp = clock::backup_stamp(env.clock.now());
    let mut linked = 0usize;

    for name in dotfiles {
        let source = source_dir.join(name);
        if !env.fs.exists(&source) {
            tracing::info!("skipping {name} (not found in dotfiles)");
            continue;
        }

        let target = config.home_dir.join(name);
        let backup = backup_dir.join(format!("{name}.{stamp}"));
        if link_with_backup(env, &source, &target, &backup, name) {
            linked += 1;
        }
    }

    let config_source = source_dir.join(".config");
    if env.fs.exists(&config_source) {
        match link_config_entries(env, &config_source, &stamp) {
            Ok(n) => linked += n,
            Err(e) => {
                tracing::warn!("failed to symlink .config directory: {e}");
                ui::print_warning("Could not link entries under .config.");
            }
        }
    }

    tracing::info!("symlinks created successfully ({linked} linked)");
    ui::print_success(&format!("{linked} symlink(s) in place."));
    Ok(())
}

/// Dry-run without a checkout: nothing to inspect, so list what the
/// first pass would link once the repository is cloned.
fn announce_planned_links(env: Env<'_>, dotfiles: &[&str]) {
    let source_dir = env.config.dotfiles_dir();
    tracing::info!("dry-run: {} not cloned yet", source_dir.display());
    for name in dotfiles {
        let target = env.config.home_dir.join(name);
        let source = source_dir.join(name);
        tracing::info!("dry-run: would link {} -> {} if present", target.display(), source.display());
        ui::print_info(&format!(
            "[dry-run] link {} → {} (if present after clone)",
            target.display(),
            source.display()
        ));
    }
}

/// Second pass: one level of `~/.dotfiles/.config` into `~/.config`.
fn link_config_entries(env: Env<'_>, source_dir: &Path, stamp: &str) -> Result<usize, InstallerError> {
    let target_dir = env.config.home_dir.join(".config");
    let backup_dir = env.config.backup_dir();

    env.fs.create_dir_all(&target_dir)?;

    let mut linked = 0;
    for source in env.fs.read_dir(source_dir)? {
        let Some(entry) = source.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };

        let target = target_dir.join(&entry);
        let backup = backup_dir.join(format!(".config-{entry}-{stamp}"));
        let label = format!(".config/{entry}");
        if link_with_backup(env, &source, &target, &backup, &label) {
            linked += 1;
        }
    }
    Ok(linked)
}

/// Clears `target` out of the way and points it at `source`.
/// Returns `false` (after logging) when this file had to be skipped.
fn link_with_backup(env: Env<'_>, source: &Path, target: &Path, backup: &Path, label: &str) -> bool {
    match env.fs.entry_kind(target) {
        Some(EntryKind::Symlink) => {
            if let Err(e) = env.fs.remove_file(target) {
                tracing::warn!("failed to remove existing symlink {}: {e}", target.display());
                ui::print_warning(&format!("Skipped {label}: could not remove old link."));
                return false;
            }
        }
        Some(EntryKind::Other) => {
            tracing::info!("backing up existing {label} to {}", backup.display());
            if let Err(e) = env.fs.rename(target, backup) {
                tracing::warn!("failed to back up {label}: {e}");
                ui::print_warning(&format!("Skipped {label}: backup failed."));
                return false;
            }
        }
        None => {}
    }

    tracing::info!("creating symlink: {} -> {}", target.display(), source.display());
    if let Err(e) = env.fs.symlink(source, target) {
        tracing::warn!("failed to create symlink for {label}: {e}");
        ui::print_warning(&format!("Skipped {label}: could not create link."));
        return false;
    }
    true
}
