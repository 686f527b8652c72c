use std::path::PathBuf;

use anyhow::{Context, Result};

/// Secrets that must not reach a real deployment.
pub const PLACEHOLDER_SECRETS: &[&str] = &["dev-secret-change-me", "change-me-to-a-random-string"];

/// Server configuration, read from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Directory holding `users.txt` and `logins.txt`.
    pub data_dir: PathBuf,
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
    /// Fill the ledgers with demo rows at startup.
    pub seed_sample_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = var("BARANGAY_PORT", "3000");
        let ttl = var("BARANGAY_TOKEN_TTL_HOURS", "12");

        Ok(Self {
            host: var("BARANGAY_HOST", "0.0.0.0"),
            port: port
                .parse()
                .with_context(|| format!("BARANGAY_PORT is not a port number: {port}"))?,
            data_dir: var("BARANGAY_DATA_DIR", "data").into(),
            jwt_secret: var("BARANGAY_JWT_SECRET", "dev-secret-change-me"),
            token_ttl_hours: ttl
                .parse()
                .with_context(|| format!("BARANGAY_TOKEN_TTL_HOURS is not a number: {ttl}"))?,
            seed_sample_data: matches!(
                var("BARANGAY_SEED_SAMPLE_DATA", "false").to_ascii_lowercase().as_str(),
                "1" | "true" | "yes"
            ),
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn uses_placeholder_secret(&self) -> bool {
        self.jwt_secret.is_empty() || PLACEHOLDER_SECRETS.contains(&self.jwt_secret.as_str())
    }
}
