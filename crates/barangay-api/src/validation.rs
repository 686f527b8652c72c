//! Input checks the stores deliberately leave to the caller.

use axum::http::StatusCode;
use barangay_types::models::{Amount, CollectionLogRecord, WasteGiverRecord};
use tracing::debug;

pub const PUROK_OPTIONS: [&str; 6] = [
    "Purok 1", "Purok 2", "Purok 3", "Purok 4", "Purok 5", "Purok 6",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invalid {
    Missing(&'static str),
    /// Would break the `users.txt` line layout.
    Unstorable(&'static str),
    EmployeeIdFormat,
    Purok,
    Weight(&'static str),
}

impl From<Invalid> for StatusCode {
    fn from(reason: Invalid) -> Self {
        debug!("Rejected input: {:?}", reason);
        StatusCode::BAD_REQUEST
    }
}

/// Four blocks of `A-Z`/`0-9` separated by a dash, e.g. `TRK0-0005`.
pub fn is_valid_employee_id(id: &str) -> bool {
    let bytes = id.as_bytes();
    bytes.len() == 9
        && bytes[4] == b'-'
        && bytes
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != 4)
            .all(|(_, b)| b.is_ascii_uppercase() || b.is_ascii_digit())
}

fn storable(field: &'static str, value: &str) -> Result<(), Invalid> {
    if value.contains(['|', '\n', '\r']) {
        return Err(Invalid::Unstorable(field));
    }
    Ok(())
}

fn required(field: &'static str, value: &str) -> Result<(), Invalid> {
    if value.trim().is_empty() {
        return Err(Invalid::Missing(field));
    }
    Ok(())
}

pub fn account_fields(
    username: &str,
    password: &str,
    full_name: &str,
    employee_id: &str,
) -> Result<(), Invalid> {
    for (field, value) in [
        ("username", username),
        ("password", password),
        ("full_name", full_name),
        ("employee_id", employee_id),
    ] {
        required(field, value)?;
        storable(field, value)?;
    }
    if !is_valid_employee_id(employee_id) {
        return Err(Invalid::EmployeeIdFormat);
    }
    Ok(())
}

/// Same as [`account_fields`] minus the username, with an optional password.
pub fn account_update(
    full_name: &str,
    employee_id: &str,
    password: Option<&str>,
) -> Result<(), Invalid> {
    for (field, value) in [("full_name", full_name), ("employee_id", employee_id)] {
        required(field, value)?;
        storable(field, value)?;
    }
    if let Some(password) = password {
        required("password", password)?;
        storable("password", password)?;
    }
    if !is_valid_employee_id(employee_id) {
        return Err(Invalid::EmployeeIdFormat);
    }
    Ok(())
}

pub fn giver_record(row: &WasteGiverRecord) -> Result<(), Invalid> {
    required("date", &row.date)?;
    required("giver_name", &row.giver_name)?;
    if !PUROK_OPTIONS.contains(&row.purok.as_str()) {
        return Err(Invalid::Purok);
    }
    if !(row.weight_kg.is_finite() && row.weight_kg > 0.0) {
        return Err(Invalid::Weight("weight_kg"));
    }
    Ok(())
}

/// Weights must not be negative, whether sent as numbers or as numeric text.
/// Other text cells are accepted as typed; analytics counts them as zero.
pub fn collection_record(row: &CollectionLogRecord) -> Result<(), Invalid> {
    required("date", &row.date)?;
    required("truck_id", &row.truck_id)?;
    for (field, cell) in [
        ("biodegradable_kg", &row.biodegradable_kg),
        ("recyclable_kg", &row.recyclable_kg),
        ("residual_kg", &row.residual_kg),
    ] {
        let negative = match cell {
            Amount::Kg(v) => !(v.is_finite() && *v >= 0.0),
            Amount::Text(_) => cell.to_kg().is_some_and(|v| v < 0.0),
        };
        if negative {
            return Err(Invalid::Weight(field));
        }
    }
    if row.distance_km.is_some_and(|d| !(d.is_finite() && d >= 0.0)) {
        return Err(Invalid::Weight("distance_km"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use barangay_types::models::WasteType;

    #[test]
    fn employee_id_pattern() {
        assert!(is_valid_employee_id("ADM1-0001"));
        assert!(is_valid_employee_id("BRGY-9999"));
        assert!(!is_valid_employee_id("adm1-0001"));
        assert!(!is_valid_employee_id("ADM10001"));
        assert!(!is_valid_employee_id("ADM1-00012"));
        assert!(!is_valid_employee_id("ADM1_0001"));
    }

    #[test]
    fn account_fields_reject_separator_and_blanks() {
        assert_eq!(account_fields("juan", "pw", "Juan", "TRK0-0005"), Ok(()));
        assert_eq!(
            account_fields("juan", "p|w", "Juan", "TRK0-0005"),
            Err(Invalid::Unstorable("password"))
        );
        assert_eq!(
            account_fields("juan", "pw", "  ", "TRK0-0005"),
            Err(Invalid::Missing("full_name"))
        );
        assert_eq!(
            account_fields("juan", "pw", "Juan", "T-5"),
            Err(Invalid::EmployeeIdFormat)
        );
    }

    #[test]
    fn giver_weight_must_be_positive() {
        let mut row = WasteGiverRecord {
            date: "Oct 1".into(),
            purok: "Purok 2".into(),
            giver_name: "Elisa Garcia".into(),
            waste_type: WasteType::Residual,
            weight_kg: 1.8,
        };
        assert_eq!(giver_record(&row), Ok(()));

        row.weight_kg = 0.0;
        assert_eq!(giver_record(&row), Err(Invalid::Weight("weight_kg")));

        row.weight_kg = 1.0;
        row.purok = "Purok 9".into();
        assert_eq!(giver_record(&row), Err(Invalid::Purok));
    }

    #[test]
    fn collection_rejects_negative_numbers_but_keeps_text() {
        let mut row = CollectionLogRecord {
            date: "Oct 1".into(),
            truck_id: "T-001".into(),
            route: "Route A".into(),
            driver: "Ramon Cruz".into(),
            biodegradable_kg: Amount::Kg(1.0),
            recyclable_kg: Amount::Text("unknown".into()),
            residual_kg: Amount::Kg(0.0),
            distance_km: None,
            duration_min: None,
        };
        assert_eq!(collection_record(&row), Ok(()));

        row.residual_kg = Amount::Kg(-2.0);
        assert_eq!(collection_record(&row), Err(Invalid::Weight("residual_kg")));

        row.residual_kg = Amount::Kg(0.0);
        row.recyclable_kg = Amount::Text("-10".into());
        assert_eq!(collection_record(&row), Err(Invalid::Weight("recyclable_kg")));

        row.recyclable_kg = Amount::Text(" 12.5 ".into());
        assert_eq!(collection_record(&row), Ok(()));
    }
}
