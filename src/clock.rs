use chrono::{DateTime, Local, Utc};

/// Source of "now", injected so tests control timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Backup suffix with second resolution in local time, e.g. `20250301-142233`.
/// Two backups of the same file within one second share a suffix.
pub fn backup_stamp(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y%m%d-%H%M%S").to_string()
}
