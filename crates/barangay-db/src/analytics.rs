use barangay_types::models::{Amount, AnalyticsSummary, CollectionLogRecord};
use tracing::warn;

/// Sum the three waste categories over `rows`, optionally only those whose
/// date equals `date`, and work out each category's share of the total.
///
/// A cell that does not hold a number counts as zero; the rest of the row
/// and the other rows still count.
pub fn aggregate(rows: &[CollectionLogRecord], date: Option<&str>) -> AnalyticsSummary {
    let mut summary = AnalyticsSummary::default();

    for (i, row) in rows.iter().enumerate() {
        if date.is_some_and(|d| row.date != d) {
            continue;
        }
        summary.rows_matched += 1;

        let bio = kg_or_zero(&row.biodegradable_kg, i, "biodegradable");
        let recy = kg_or_zero(&row.recyclable_kg, i, "recyclable");
        let resi = kg_or_zero(&row.residual_kg, i, "residual");

        summary.biodegradable_kg += bio;
        summary.recyclable_kg += recy;
        summary.residual_kg += resi;
        summary.total_kg += bio + recy + resi;
    }

    if !summary.total_kg.is_finite() {
        warn!("Analytics: totals overflowed over {} rows, shares left at zero", summary.rows_matched);
    } else if summary.total_kg > 0.0 {
        summary.biodegradable_pct = summary.biodegradable_kg / summary.total_kg * 100.0;
        summary.recyclable_pct = summary.recyclable_kg / summary.total_kg * 100.0;
        summary.residual_pct = summary.residual_kg / summary.total_kg * 100.0;
    }

    summary
}

fn kg_or_zero(cell: &Amount, row: usize, column: &str) -> f64 {
    cell.to_kg().unwrap_or_else(|| {
        warn!("Analytics: row {} has a non-numeric {} value {:?}", row, column, cell);
        0.0
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(date: &str, bio: Amount, recy: Amount, resi: Amount) -> CollectionLogRecord {
        CollectionLogRecord {
            date: date.to_string(),
            truck_id: "T-001".into(),
            route: "Route A".into(),
            driver: "Ramon Cruz".into(),
            biodegradable_kg: bio,
            recyclable_kg: recy,
            residual_kg: resi,
            distance_km: None,
            duration_min: None,
        }
    }

    fn kg(v: f64) -> Amount {
        Amount::Kg(v)
    }

    #[test]
    fn percentages_of_total() {
        let rows = vec![
            row("Oct 1", kg(10.0), kg(0.0), kg(0.0)),
            row("Oct 2", kg(0.0), kg(20.0), kg(0.0)),
        ];
        let f = aggregate(&rows, None).formatted();

        assert_eq!(f.total_kg, "30.00");
        assert_eq!(f.biodegradable_pct, "33.33");
        assert_eq!(f.recyclable_pct, "66.67");
        assert_eq!(f.residual_pct, "0.00");
    }

    #[test]
    fn date_filter_matching_nothing_is_all_zero() {
        let rows = vec![row("Oct 1", kg(10.0), kg(5.0), kg(1.0))];
        let summary = aggregate(&rows, Some("Dec 25"));
        let f = summary.formatted();

        assert_eq!(summary.rows_matched, 0);
        assert_eq!(f.total_kg, "0.00");
        assert_eq!(f.biodegradable_pct, "0.00");
        assert_eq!(f.recyclable_pct, "0.00");
        assert_eq!(f.residual_pct, "0.00");
    }

    #[test]
    fn date_filter_is_exact() {
        let rows = vec![
            row("Oct 1", kg(10.0), kg(0.0), kg(0.0)),
            row("Oct 10", kg(0.0), kg(40.0), kg(0.0)),
            row("Oct 1", kg(0.0), kg(0.0), kg(10.0)),
        ];
        let summary = aggregate(&rows, Some("Oct 1"));

        assert_eq!(summary.rows_matched, 2);
        assert_eq!(summary.total_kg, 20.0);
        assert_eq!(summary.formatted().residual_pct, "50.00");
    }

    #[test]
    fn non_numeric_cells_count_as_zero() {
        let rows = vec![
            row("Oct 1", Amount::Text("heavy".into()), kg(5.0), kg(5.0)),
            row("Oct 1", Amount::Text("10".into()), kg(0.0), kg(0.0)),
        ];
        let summary = aggregate(&rows, None);

        assert_eq!(summary.rows_matched, 2);
        assert_eq!(summary.biodegradable_kg, 10.0);
        assert_eq!(summary.total_kg, 20.0);
        assert_eq!(summary.formatted().recyclable_pct, "25.00");
    }

    #[test]
    fn empty_input() {
        assert_eq!(aggregate(&[], None), AnalyticsSummary::default());
    }

    #[test]
    fn overflowing_total_leaves_shares_at_zero() {
        let rows = vec![
            row("Oct 1", kg(f64::MAX), kg(f64::MAX), kg(0.0)),
            row("Oct 2", kg(f64::MAX), kg(0.0), kg(0.0)),
        ];
        let f = aggregate(&rows, None).formatted();

        assert_eq!(f.biodegradable_pct, "0.00");
        assert_eq!(f.recyclable_pct, "0.00");
        assert_eq!(f.residual_pct, "0.00");
    }
}
