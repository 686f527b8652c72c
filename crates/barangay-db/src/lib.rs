pub mod account;
pub mod activity;
pub mod analytics;
mod files;
pub mod ledger;
pub mod models;

use anyhow::Result;
use std::path::Path;
use std::sync::Mutex;
use tracing::info;

pub use account::AccountStore;
pub use activity::ActivityLog;
pub use ledger::{Ledger, Ledgers};

/// Everything the service keeps: the two file-backed stores plus the
/// transient ledgers.
///
/// The stores themselves assume a single caller. Each one sits behind its
/// own mutex here so the HTTP layer can share a `Database` across tasks.
pub struct Database {
    accounts: Mutex<AccountStore>,
    activity: Mutex<ActivityLog>,
    ledgers: Mutex<Ledgers>,
}

impl Database {
    pub fn open(data_dir: &Path) -> Result<Self> {
        Self::open_with_ledgers(data_dir, Ledgers::default())
    }

    /// Open the stores with pre-filled ledgers (demo data, tests).
    pub fn open_with_ledgers(data_dir: &Path, ledgers: Ledgers) -> Result<Self> {
        let accounts = AccountStore::open(data_dir)?;
        let activity = ActivityLog::open(data_dir)?;

        info!(
            "Data directory {} ({} accounts, {} activity entries)",
            data_dir.display(),
            accounts.len(),
            activity.len()
        );
        Ok(Self {
            accounts: Mutex::new(accounts),
            activity: Mutex::new(activity),
            ledgers: Mutex::new(ledgers),
        })
    }

    pub fn with_accounts<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut AccountStore) -> T,
    {
        let mut accounts = self
            .accounts
            .lock()
            .map_err(|e| anyhow::anyhow!("Account store lock poisoned: {}", e))?;
        Ok(f(&mut accounts))
    }

    pub fn with_activity<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut ActivityLog) -> T,
    {
        let mut activity = self
            .activity
            .lock()
            .map_err(|e| anyhow::anyhow!("Activity log lock poisoned: {}", e))?;
        Ok(f(&mut activity))
    }

    pub fn with_ledgers<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Ledgers) -> T,
    {
        let mut ledgers = self
            .ledgers
            .lock()
            .map_err(|e| anyhow::anyhow!("Ledger lock poisoned: {}", e))?;
        Ok(f(&mut ledgers))
    }
}
