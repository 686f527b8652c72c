use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use barangay_types::models::User;
use chrono::NaiveDateTime;
use tracing::{error, info};

use crate::files;

pub const LOGINS_FILE: &str = "logins.txt";

/// Timestamp layout at the start of every activity line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Append-only login history mirrored to `logins.txt`.
///
/// Entries are never rewritten or trimmed; the file grows without bound.
pub struct ActivityLog {
    path: PathBuf,
    entries: Vec<String>,
}

impl ActivityLog {
    pub fn open(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir)
            .with_context(|| format!("creating data directory {}", data_dir.display()))?;

        let path = data_dir.join(LOGINS_FILE);
        let entries = match files::read_lines(&path) {
            Ok(lines) => lines.into_iter().filter(|l| !l.trim().is_empty()).collect(),
            Err(e) => {
                error!("Failed to read {}: {}", path.display(), e);
                Vec::new()
            }
        };

        info!("Loaded {} activity entries from {}", entries.len(), path.display());
        Ok(Self { path, entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn record(&mut self, entry: impl Into<String>) {
        let entry = entry.into();
        if let Err(e) = files::append_line(&self.path, &entry) {
            error!("Failed to persist activity entry: {}", e);
        }
        self.entries.push(entry);
    }

    /// Record `<timestamp> - <full name> (<role>)` for a successful login and
    /// return the line written.
    pub fn record_login(&mut self, user: &User, at: NaiveDateTime) -> String {
        let entry = format!(
            "{} - {} ({})",
            at.format(TIMESTAMP_FORMAT),
            user.full_name,
            user.role
        );
        self.record(entry.clone());
        entry
    }

    /// Entries in the order they were recorded.
    pub fn get_all(&self) -> Vec<String> {
        self.entries.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barangay_types::models::Role;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    #[test]
    fn keeps_insertion_order() {
        let tmp = tempdir().unwrap();
        let mut log = ActivityLog::open(tmp.path()).unwrap();
        log.record("e1");
        log.record("e2");
        assert_eq!(log.get_all(), vec!["e1", "e2"]);
    }

    #[test]
    fn get_all_is_a_copy() {
        let tmp = tempdir().unwrap();
        let mut log = ActivityLog::open(tmp.path()).unwrap();
        log.record("only");

        let mut copy = log.get_all();
        copy.push("extra".into());
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn entries_survive_reopen() {
        let tmp = tempdir().unwrap();
        {
            let mut log = ActivityLog::open(tmp.path()).unwrap();
            log.record("first");
            log.record("second");
        }
        let text = std::fs::read_to_string(tmp.path().join(LOGINS_FILE)).unwrap();
        assert_eq!(text, "first\nsecond\n");

        let mut log = ActivityLog::open(tmp.path()).unwrap();
        log.record("third");
        assert_eq!(log.get_all(), vec!["first", "second", "third"]);
    }

    #[test]
    fn login_entry_format() {
        let tmp = tempdir().unwrap();
        let mut log = ActivityLog::open(tmp.path()).unwrap();
        let user = User {
            username: "admin".into(),
            password: "password123".into(),
            full_name: "System Administrator".into(),
            employee_id: "ADM1-0001".into(),
            role: Role::Administrator,
            suspended: false,
        };
        let at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 2)
            .unwrap();

        let entry = log.record_login(&user, at);
        assert_eq!(entry, "2024-03-09 07:05:02 - System Administrator (Administrator)");
        assert_eq!(log.get_all(), vec![entry]);
    }

    #[test]
    fn unwritable_file_keeps_entries_in_memory() {
        let tmp = tempdir().unwrap();
        std::fs::create_dir(tmp.path().join(LOGINS_FILE)).unwrap();

        let mut log = ActivityLog::open(tmp.path()).unwrap();
        assert!(log.is_empty());
        log.record("kept");
        assert_eq!(log.get_all(), vec!["kept"]);
    }
}
