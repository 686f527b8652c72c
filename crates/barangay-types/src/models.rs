use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Account roles. The display text is also the on-disk value in `users.txt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Administrator")]
    Administrator,
    #[serde(rename = "Garbage Collector")]
    GarbageCollector,
    #[serde(rename = "Barangay Official")]
    BarangayOfficial,
}

impl Role {
    pub const ALL: [Role; 3] = [
        Role::Administrator,
        Role::GarbageCollector,
        Role::BarangayOfficial,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Administrator => "Administrator",
            Role::GarbageCollector => "Garbage Collector",
            Role::BarangayOfficial => "Barangay Official",
        }
    }

    pub fn is_admin(self) -> bool {
        self == Role::Administrator
    }

    /// First block of the employee id handed out for this role.
    pub fn employee_id_prefix(self) -> &'static str {
        match self {
            Role::Administrator => "ADM1",
            Role::GarbageCollector => "TRK0",
            Role::BarangayOfficial => "BRGY",
        }
    }

    /// `PREFIX-NNNN` with a random zero-padded suffix.
    pub fn generate_employee_id<R: Rng + ?Sized>(self, rng: &mut R) -> String {
        format!(
            "{}-{:04}",
            self.employee_id_prefix(),
            rng.random_range(0..10_000u32)
        )
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0:?}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// A user account as held by the account store.
///
/// The password is kept and compared in plaintext to stay compatible with
/// existing `users.txt` files. Production use needs a salted hash here, which
/// in turn changes the on-disk format of the password column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub employee_id: String,
    pub role: Role,
    pub suspended: bool,
}

impl User {
    pub fn check_password(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

/// Fields an account update may touch. `None` keeps the stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUpdate {
    pub full_name: String,
    pub employee_id: String,
    pub role: Role,
    pub password: Option<String>,
    pub suspended: Option<bool>,
}

// -- Ledgers --

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WasteType {
    Biodegradable,
    Recyclable,
    Residual,
}

/// One household contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteGiverRecord {
    pub date: String,
    pub purok: String,
    pub giver_name: String,
    pub waste_type: WasteType,
    pub weight_kg: f64,
}

/// A table cell holding a weight. Cells edited by hand may carry text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Kg(f64),
    Text(String),
}

impl Amount {
    /// Numeric value of the cell, if it has one.
    pub fn to_kg(&self) -> Option<f64> {
        let value = match self {
            Amount::Kg(v) => *v,
            Amount::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for Amount {
    fn from(v: f64) -> Self {
        Amount::Kg(v)
    }
}

/// One truck collection run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionLogRecord {
    pub date: String,
    pub truck_id: String,
    pub route: String,
    pub driver: String,
    pub biodegradable_kg: Amount,
    pub recyclable_kg: Amount,
    pub residual_kg: Amount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_min: Option<u32>,
}

// -- Analytics --

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub rows_matched: usize,
    pub total_kg: f64,
    pub biodegradable_kg: f64,
    pub recyclable_kg: f64,
    pub residual_kg: f64,
    pub biodegradable_pct: f64,
    pub recyclable_pct: f64,
    pub residual_pct: f64,
}

/// Every figure of an [`AnalyticsSummary`] rendered with two decimals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedSummary {
    pub total_kg: String,
    pub biodegradable_kg: String,
    pub recyclable_kg: String,
    pub residual_kg: String,
    pub biodegradable_pct: String,
    pub recyclable_pct: String,
    pub residual_pct: String,
}

impl AnalyticsSummary {
    pub fn formatted(&self) -> FormattedSummary {
        let two = |v: f64| format!("{:.2}", v);
        FormattedSummary {
            total_kg: two(self.total_kg),
            biodegradable_kg: two(self.biodegradable_kg),
            recyclable_kg: two(self.recyclable_kg),
            residual_kg: two(self.residual_kg),
            biodegradable_pct: two(self.biodegradable_pct),
            recyclable_pct: two(self.recyclable_pct),
            residual_pct: two(self.residual_pct),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn role_parses_display_text() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        }
        assert_eq!("garbage collector".parse::<Role>(), Ok(Role::GarbageCollector));
        assert!("Janitor".parse::<Role>().is_err());
    }

    #[test]
    fn role_serializes_with_spaces() {
        let json = serde_json::to_string(&Role::BarangayOfficial).unwrap();
        assert_eq!(json, "\"Barangay Official\"");
    }

    #[test]
    fn employee_id_has_role_prefix() {
        let mut rng = StdRng::seed_from_u64(7);
        let id = Role::GarbageCollector.generate_employee_id(&mut rng);
        assert!(id.starts_with("TRK0-"));
        assert_eq!(id.len(), 9);
        assert!(id[5..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn amount_accepts_numbers_and_text() {
        let cells: Vec<Amount> = serde_json::from_str(r#"[12.5, "3", "n/a", " 4.25 "]"#).unwrap();
        let values: Vec<Option<f64>> = cells.iter().map(Amount::to_kg).collect();
        assert_eq!(values, vec![Some(12.5), Some(3.0), None, Some(4.25)]);
        assert_eq!(Amount::Kg(f64::NAN).to_kg(), None);
    }

    #[test]
    fn formatted_summary_uses_two_decimals() {
        let summary = AnalyticsSummary {
            total_kg: 30.0,
            biodegradable_pct: 100.0 / 3.0,
            recyclable_pct: 200.0 / 3.0,
            ..Default::default()
        };
        let f = summary.formatted();
        assert_eq!(f.total_kg, "30.00");
        assert_eq!(f.biodegradable_pct, "33.33");
        assert_eq!(f.recyclable_pct, "66.67");
        assert_eq!(f.residual_pct, "0.00");
    }
}
