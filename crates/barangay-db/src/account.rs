use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use barangay_types::models::{Role, User, UserUpdate};
use tracing::{debug, error, info, warn};

use crate::files;
use crate::models::{FIELD_SEPARATOR, UserLineError, format_user_line, parse_user_line};

pub const USERS_FILE: &str = "users.txt";

/// User accounts cached in memory and mirrored to `users.txt`.
///
/// Registration appends one line; suspension and updates rewrite the file.
/// A failed write is logged and otherwise ignored, so memory may run ahead
/// of the file until the next successful rewrite.
///
/// Rows whose role is not one of the known roles cannot be loaded as users,
/// but they still own their username and are written back verbatim on every
/// rewrite.
pub struct AccountStore {
    path: PathBuf,
    users: BTreeMap<String, User>,
    unparsed: BTreeMap<String, String>,
}

impl AccountStore {
    /// Create the data directory if needed and load every readable row.
    pub fn open(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir)
            .with_context(|| format!("creating data directory {}", data_dir.display()))?;

        let path = data_dir.join(USERS_FILE);
        let (users, unparsed) = load_users(&path);

        info!("Loaded {} accounts from {}", users.len(), path.display());
        if !unparsed.is_empty() {
            warn!(
                "{} rows in {} have an unknown role and are kept as written",
                unparsed.len(),
                path.display()
            );
        }
        Ok(Self {
            path,
            users,
            unparsed,
        })
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// True for loaded accounts and for rows kept only as raw text.
    pub fn user_exists(&self, username: &str) -> bool {
        self.users.contains_key(username) || self.unparsed.contains_key(username)
    }

    pub fn get(&self, username: &str) -> Option<User> {
        self.users.get(username).cloned()
    }

    /// Returns false if the username is taken. No format checks happen here.
    pub fn register(
        &mut self,
        username: &str,
        password: &str,
        full_name: &str,
        employee_id: &str,
        role: Role,
    ) -> bool {
        if self.user_exists(username) {
            return false;
        }

        let user = User {
            username: username.to_string(),
            password: password.to_string(),
            full_name: full_name.to_string(),
            employee_id: employee_id.to_string(),
            role,
            suspended: false,
        };

        if let Err(e) = files::append_line(&self.path, &format_user_line(&user)) {
            error!("Failed to persist user {}: {}", username, e);
        }
        self.users.insert(user.username.clone(), user);
        true
    }

    /// Unknown users, wrong passwords and suspended accounts all yield `None`.
    pub fn authenticate(&self, username: &str, password: &str) -> Option<User> {
        let user = self.users.get(username)?;
        if user.suspended || !user.check_password(password) {
            return None;
        }
        Some(user.clone())
    }

    pub fn set_suspended(&mut self, username: &str, suspended: bool) -> bool {
        let Some(user) = self.users.get_mut(username) else {
            return false;
        };
        user.suspended = suspended;
        self.save_all();
        true
    }

    /// Replace name, employee id and role. Password and suspension change
    /// only when the update carries them.
    pub fn update(&mut self, username: &str, changes: UserUpdate) -> bool {
        let Some(user) = self.users.get_mut(username) else {
            return false;
        };

        user.full_name = changes.full_name;
        user.employee_id = changes.employee_id;
        user.role = changes.role;
        if let Some(password) = changes.password {
            user.password = password;
        }
        if let Some(suspended) = changes.suspended {
            user.suspended = suspended;
        }

        self.save_all();
        true
    }

    /// Snapshot of every account, ordered by username.
    pub fn list_all(&self) -> Vec<User> {
        self.users.values().cloned().collect()
    }

    /// Rewrite `users.txt` from memory, followed by the rows kept as raw text.
    pub fn save_all(&self) {
        let lines = self
            .users
            .values()
            .map(format_user_line)
            .chain(self.unparsed.values().cloned());
        if let Err(e) = files::rewrite(&self.path, lines) {
            error!("Failed to save users to {}: {}", self.path.display(), e);
        }
    }
}

type LoadedUsers = (BTreeMap<String, User>, BTreeMap<String, String>);

/// Parsed accounts plus raw unknown-role rows, both keyed by username. A later
/// row for the same username replaces an earlier one of either kind.
fn load_users(path: &Path) -> LoadedUsers {
    let mut users = BTreeMap::new();
    let mut unparsed = BTreeMap::new();

    let lines = match files::read_lines(path) {
        Ok(lines) => lines,
        Err(e) => {
            error!("Failed to read {}: {}", path.display(), e);
            return (users, unparsed);
        }
    };

    for (n, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_user_line(line) {
            Ok(user) => {
                unparsed.remove(&user.username);
                users.insert(user.username.clone(), user);
            }
            Err(UserLineError::UnknownRole(role)) => {
                let username = line.split(FIELD_SEPARATOR).next().unwrap_or_default().to_string();
                debug!("Keeping {} line {} as written: {}", path.display(), n + 1, role);
                users.remove(&username);
                unparsed.insert(username, line.clone());
            }
            Err(e) => debug!("Skipping {} line {}: {}", path.display(), n + 1, e),
        }
    }
    (users, unparsed)
}
