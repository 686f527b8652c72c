use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use barangay_db::analytics::aggregate;
use barangay_types::api::{AnalyticsQuery, AnalyticsResponse};

use crate::auth::AppState;

/// Waste totals and category shares over the collection log. An empty
/// `date` parameter means no filter.
pub async fn get_analytics(
    State(state): State<AppState>,
    Query(query): Query<AnalyticsQuery>,
) -> Result<impl IntoResponse, StatusCode> {
    let date = query.date.filter(|d| !d.trim().is_empty());

    let summary = state
        .db
        .with_ledgers(|ledgers| aggregate(ledgers.collections.as_slice(), date.as_deref()))
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(AnalyticsResponse {
        formatted: summary.formatted(),
        date,
        summary,
    }))
}
