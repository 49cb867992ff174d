//! Fakes shared by unit tests.

use std::{
    cell::{Cell, RefCell},
    collections::HashSet,
    io,
    path::{Path, PathBuf},
};

use chrono::{DateTime, TimeZone, Utc};

use crate::{
    clock::Clock,
    cmd::CommandRunner,
    config::Config,
    error::InstallerError,
    fs::{EntryKind, FileSystem, RealFs},
    steps::Env,
};

// ── Environment ───────────────────────────────────────────────────────────────

/// A config that says yes to everything, rooted at `home`.
pub fn config_in(home: &Path) -> Config {
    Config {
        dotfiles_repo: "https://example.com/me/dots.git".to_string(),
        install_zsh: true,
        install_oh_my_zsh: true,
        home_dir: home.to_path_buf(),
    }
}

/// Calls `f` with an [`Env`] whose clock starts at `clock_start`.
pub fn with_env<R>(
    config: &Config,
    cmd: &dyn CommandRunner,
    fs: &dyn FileSystem,
    clock_start: i64,
    f: impl FnOnce(Env<'_>) -> R,
) -> R {
    let clock = FakeClock::starting_at(clock_start);
    f(Env {
        config,
        cmd,
        fs,
        clock: &clock,
    })
}

// ── Clock ─────────────────────────────────────────────────────────────────────

/// Advances by one second on every read.
pub struct FakeClock {
    next: Cell<i64>,
}

impl FakeClock {
    pub fn starting_at(secs: i64) -> Self {
        Self { next: Cell::new(secs) }
    }
}

impl Clock for FakeClock {
    fn now(&self) -> DateTime<Utc> {
        let secs = self.next.get();
        self.next.set(secs + 1);
        Utc.timestamp_opt(secs, 0).single().expect("valid timestamp")
    }
}

// ── Command runner ────────────────────────────────────────────────────────────

type Effect = Box<dyn Fn(&[&str])>;

/// Records every command line; commands containing a `failing` pattern
/// exit with status 1, the rest succeed and trigger matching effects.
#[derive(Default)]
pub struct FakeRunner {
    programs: HashSet<String>,
    failing: Vec<String>,
    effects: Vec<(String, Effect)>,
    calls: RefCell<Vec<String>>,
}

impl FakeRunner {
    pub fn with_programs(programs: &[&str]) -> Self {
        Self {
            programs: programs.iter().map(|p| p.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn failing(mut self, pattern: &str) -> Self {
        self.failing.push(pattern.to_string());
        self
    }

    /// Runs `effect` with the argument list after any call whose program is `program`.
    pub fn on(mut self, program: &str, effect: impl Fn(&[&str]) + 'static) -> Self {
        self.effects.push((program.to_string(), Box::new(effect)));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for FakeRunner {
    fn exists(&self, program: &str) -> bool {
        self.programs.contains(program)
    }

    fn run(&self, program: &str, args: &[&str]) -> Result<(), InstallerError> {
        let line = std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");
        self.calls.borrow_mut().push(line.clone());

        if self.failing.iter().any(|p| line.contains(p.as_str())) {
            return Err(InstallerError::CommandFailed(line, 1));
        }
        for (name, effect) in &self.effects {
            if name == program {
                effect(args);
            }
        }
        Ok(())
    }
}

// ── Filesystem ────────────────────────────────────────────────────────────────

/// Real filesystem, except that operations touching a path whose file
/// name is listed in `broken` fail with `PermissionDenied`.
#[derive(Default)]
pub struct FlakyFs {
    broken: Vec<String>,
}

impl FlakyFs {
    pub fn breaking(names: &[&str]) -> Self {
        Self {
            broken: names.iter().map(|n| n.to_string()).collect(),
        }
    }

    fn check(&self, path: &Path) -> io::Result<()> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if self.broken.iter().any(|b| name.starts_with(b.as_str())) {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        Ok(())
    }
}

impl FileSystem for FlakyFs {
    fn exists(&self, path: &Path) -> bool {
        RealFs.exists(path)
    }

    fn entry_kind(&self, path: &Path) -> Option<EntryKind> {
        RealFs.entry_kind(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.check(path)?;
        RealFs.create_dir_all(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        self.check(from)?;
        RealFs.rename(from, to)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        self.check(path)?;
        RealFs.remove_file(path)
    }

    fn symlink(&self, target: &Path, link: &Path) -> io::Result<()> {
        self.check(link)?;
        RealFs.symlink(target, link)
    }

    fn read_dir(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        RealFs.read_dir(dir)
    }
}
