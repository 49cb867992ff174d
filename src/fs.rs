use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::ui;

/// What sits at a path, without following a final symlink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Symlink,
    Other,
}

/// The filesystem operations the installer performs.
pub trait FileSystem {
    /// Follows symlinks; a dangling link does not exist.
    fn exists(&self, path: &Path) -> bool;

    /// `lstat`-style lookup. `None` when nothing is there.
    fn entry_kind(&self, path: &Path) -> Option<EntryKind>;

    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Creates `link` pointing at `target`.
    fn symlink(&self, target: &Path, link: &Path) -> io::Result<()>;

    /// Direct children of `dir`, sorted by name.
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;

    /// `true` when mutations are only announced, so paths an earlier
    /// step would have created may be missing.
    fn simulated(&self) -> bool {
        false
    }
}

// ── Real filesystem ───────────────────────────────────────────────────────────

pub struct RealFs;

impl FileSystem for RealFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn entry_kind(&self, path: &Path) -> Option<EntryKind> {
        let meta = fs::symlink_metadata(path).ok()?;
        if meta.file_type().is_symlink() {
            Some(EntryKind::Symlink)
        } else {
            Some(EntryKind::Other)
        }
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn symlink(&self, target: &Path, link: &Path) -> io::Result<()> {
        std::os::unix::fs::symlink(target, link)
    }

    fn read_dir(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut entries = fs::read_dir(dir)?
            .map(|e| e.map(|e| e.path()))
            .collect::<io::Result<Vec<_>>>()?;
        entries.sort();
        Ok(entries)
    }
}

// ── Dry-run filesystem ────────────────────────────────────────────────────────

/// Reads from the real filesystem; mutations are only announced.
pub struct DryRunFs;

impl DryRunFs {
    fn announce(&self, what: String) -> io::Result<()> {
        tracing::info!("dry-run: would {what}");
        ui::print_info(&format!("[dry-run] {what}"));
        Ok(())
    }
}

impl FileSystem for DryRunFs {
    fn exists(&self, path: &Path) -> bool {
        RealFs.exists(path)
    }

    fn entry_kind(&self, path: &Path) -> Option<EntryKind> {
        RealFs.entry_kind(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.announce(format!("create {}", path.display()))
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        self.announce(format!("move {} → {}", from.display(), to.display()))
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        self.announce(format!("remove {}", path.display()))
    }

    fn symlink(&self, target: &Path, link: &Path) -> io::Result<()> {
        self.announce(format!("link {} → {}", link.display(), target.display()))
    }

    fn read_dir(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        RealFs.read_dir(dir)
    }

    fn simulated(&self) -> bool {
        true
    }
}
