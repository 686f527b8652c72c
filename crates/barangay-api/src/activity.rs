use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};

use barangay_types::api::{ActivityResponse, Claims};

use crate::auth::AppState;
use crate::middleware::require_admin;

/// Login history, oldest first.
pub async fn list_activity(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, StatusCode> {
    require_admin(&claims)?;

    let entries = state
        .db
        .with_activity(|log| log.get_all())
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(ActivityResponse { entries }))
}
