use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::info;

use barangay_types::api::{Claims, RowCreated};
use barangay_types::models::{CollectionLogRecord, WasteGiverRecord};

use crate::auth::AppState;
use crate::validation;

// -- Waste givers --

pub async fn list_givers(State(state): State<AppState>) -> Result<impl IntoResponse, StatusCode> {
    let rows = state
        .db
        .with_ledgers(|ledgers| ledgers.givers.list())
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(rows))
}

pub async fn add_giver(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(row): Json<WasteGiverRecord>,
) -> Result<impl IntoResponse, StatusCode> {
    validation::giver_record(&row)?;

    let index = state
        .db
        .with_ledgers(|ledgers| ledgers.givers.add(row))
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    info!("{} added waste giver row {}", claims.sub, index);
    Ok((StatusCode::CREATED, Json(RowCreated { index })))
}

pub async fn update_giver(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(row): Json<WasteGiverRecord>,
) -> Result<impl IntoResponse, StatusCode> {
    validation::giver_record(&row)?;

    let updated = state
        .db
        .with_ledgers(|ledgers| ledgers.givers.update(index, row))
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    if updated { Ok(StatusCode::NO_CONTENT) } else { Err(StatusCode::NOT_FOUND) }
}

pub async fn delete_giver(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<impl IntoResponse, StatusCode> {
    state
        .db
        .with_ledgers(|ledgers| ledgers.givers.remove(index))
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(StatusCode::NO_CONTENT)
}

// -- Collection logs --

pub async fn list_collections(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, StatusCode> {
    let rows = state
        .db
        .with_ledgers(|ledgers| ledgers.collections.list())
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(rows))
}

pub async fn add_collection(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(row): Json<CollectionLogRecord>,
) -> Result<impl IntoResponse, StatusCode> {
    validation::collection_record(&row)?;

    let index = state
        .db
        .with_ledgers(|ledgers| ledgers.collections.add(row))
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    info!("{} added collection log row {}", claims.sub, index);
    Ok((StatusCode::CREATED, Json(RowCreated { index })))
}

pub async fn update_collection(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(row): Json<CollectionLogRecord>,
) -> Result<impl IntoResponse, StatusCode> {
    validation::collection_record(&row)?;

    let updated = state
        .db
        .with_ledgers(|ledgers| ledgers.collections.update(index, row))
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    if updated { Ok(StatusCode::NO_CONTENT) } else { Err(StatusCode::NOT_FOUND) }
}

pub async fn delete_collection(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<impl IntoResponse, StatusCode> {
    state
        .db
        .with_ledgers(|ledgers| ledgers.collections.remove(index))
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(StatusCode::NO_CONTENT)
}
