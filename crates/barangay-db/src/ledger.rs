use barangay_types::models::{Amount, CollectionLogRecord, WasteGiverRecord, WasteType};
use chrono::{Days, NaiveDate};

/// Rows addressed only by position. Nothing here is persisted.
#[derive(Debug, Clone)]
pub struct Ledger<T> {
    rows: Vec<T>,
}

impl<T> Default for Ledger<T> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<T: Clone> Ledger<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a row and return its index.
    pub fn add(&mut self, row: T) -> usize {
        self.rows.push(row);
        self.rows.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<T> {
        self.rows.get(index).cloned()
    }

    pub fn update(&mut self, index: usize, row: T) -> bool {
        match self.rows.get_mut(index) {
            Some(slot) => {
                *slot = row;
                true
            }
            None => false,
        }
    }

    /// Later rows shift down by one.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        (index < self.rows.len()).then(|| self.rows.remove(index))
    }

    pub fn list(&self) -> Vec<T> {
        self.rows.clone()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.rows
    }
}

/// Date label used in both tables, e.g. `Oct 17`.
pub const LEDGER_DATE_FORMAT: &str = "%b %-d";

pub fn ledger_date(day: NaiveDate) -> String {
    day.format(LEDGER_DATE_FORMAT).to_string()
}

#[derive(Debug, Clone, Default)]
pub struct Ledgers {
    pub givers: Ledger<WasteGiverRecord>,
    pub collections: Ledger<CollectionLogRecord>,
}

impl Ledgers {
    /// Demo rows dated relative to `today`.
    pub fn with_sample_data(today: NaiveDate) -> Self {
        let day = |back: u64| ledger_date(today.checked_sub_days(Days::new(back)).unwrap_or(today));
        let (today, yesterday, two_days_ago) = (day(0), day(1), day(2));

        let mut ledgers = Self::default();

        let giver = |date: &str, purok: &str, name: &str, waste_type, weight_kg| WasteGiverRecord {
            date: date.to_string(),
            purok: purok.to_string(),
            giver_name: name.to_string(),
            waste_type,
            weight_kg,
        };
        ledgers.givers.add(giver(&yesterday, "Purok 1", "Maria Santos", WasteType::Recyclable, 3.5));
        ledgers.givers.add(giver(&yesterday, "Purok 1", "Ricardo Reyes", WasteType::Biodegradable, 6.1));
        ledgers.givers.add(giver(&two_days_ago, "Purok 2", "Elisa Garcia", WasteType::Residual, 1.8));
        ledgers.givers.add(giver(&two_days_ago, "Purok 3", "Benito Jose", WasteType::Recyclable, 4.0));

        let run = |date: &str, truck: &str, route: &str, driver: &str, kg: [f64; 3], distance_km, duration_min| {
            CollectionLogRecord {
                date: date.to_string(),
                truck_id: truck.to_string(),
                route: route.to_string(),
                driver: driver.to_string(),
                biodegradable_kg: Amount::Kg(kg[0]),
                recyclable_kg: Amount::Kg(kg[1]),
                residual_kg: Amount::Kg(kg[2]),
                distance_km: Some(distance_km),
                duration_min: Some(duration_min),
            }
        };
        ledgers.collections.add(run(&today, "T-001", "Route A (Puroks 1, 2)", "Ramon Cruz", [125.5, 45.2, 80.0], 18.2, 45));
        ledgers.collections.add(run(&today, "T-002", "Route B (Puroks 3, 4)", "Liza Morales", [98.0, 31.7, 65.5], 25.5, 60));
        ledgers.collections.add(run(&yesterday, "T-003", "Route C (Puroks 5, 6)", "Jose Alvarez", [150.0, 50.0, 70.0], 30.0, 55));

        ledgers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_update_remove_by_position() {
        let mut ledger: Ledger<&str> = Ledger::new();
        assert_eq!(ledger.add("a"), 0);
        assert_eq!(ledger.add("b"), 1);
        assert_eq!(ledger.add("c"), 2);

        assert!(ledger.update(1, "B"));
        assert!(!ledger.update(9, "x"));

        assert_eq!(ledger.remove(0), Some("a"));
        assert_eq!(ledger.remove(5), None);
        assert_eq!(ledger.list(), vec!["B", "c"]);
        assert_eq!(ledger.get(0), Some("B"));
    }

    #[test]
    fn sample_data_uses_relative_dates() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let ledgers = Ledgers::with_sample_data(today);

        assert_eq!(ledgers.givers.len(), 4);
        assert_eq!(ledgers.collections.len(), 3);
        assert_eq!(ledgers.collections.get(0).unwrap().date, "Mar 1");
        assert_eq!(ledgers.givers.get(0).unwrap().date, "Feb 29");
        assert_eq!(ledgers.givers.get(2).unwrap().date, "Feb 28");
    }
}
