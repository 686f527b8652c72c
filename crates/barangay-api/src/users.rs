use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::info;

use barangay_types::api::{Claims, UpdateUserRequest, UserResponse};
use barangay_types::models::UserUpdate;

use crate::auth::AppState;
use crate::middleware::require_admin;
use crate::validation;

pub async fn list_users(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, StatusCode> {
    require_admin(&claims)?;

    let users = state
        .db
        .with_accounts(|accounts| accounts.list_all())
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(users.iter().map(UserResponse::from).collect::<Vec<_>>()))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, StatusCode> {
    require_admin(&claims)?;

    let full_name = req.full_name.trim().to_string();
    let employee_id = req.employee_id.trim().to_string();
    validation::account_update(&full_name, &employee_id, req.password.as_deref())?;

    let changes = UserUpdate {
        full_name,
        employee_id,
        role: req.role,
        password: req.password,
        suspended: req.suspended,
    };

    let user = state
        .db
        .with_accounts(|accounts| {
            accounts
                .update(&username, changes)
                .then(|| accounts.get(&username))
                .flatten()
        })
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::NOT_FOUND)?;

    info!("{} updated account {}", claims.sub, username);
    Ok(Json(UserResponse::from(&user)))
}

pub async fn suspend_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, StatusCode> {
    set_suspended(&state, &claims, &username, true)
}

pub async fn unsuspend_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, StatusCode> {
    set_suspended(&state, &claims, &username, false)
}

fn set_suspended(
    state: &AppState,
    claims: &Claims,
    username: &str,
    suspended: bool,
) -> Result<Json<UserResponse>, StatusCode> {
    require_admin(claims)?;

    let user = state
        .db
        .with_accounts(|accounts| {
            accounts
                .set_suspended(username, suspended)
                .then(|| accounts.get(username))
                .flatten()
        })
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::NOT_FOUND)?;

    info!(
        "{} {} account {}",
        claims.sub,
        if suspended { "suspended" } else { "reinstated" },
        username
    );
    Ok(Json(UserResponse::from(&user)))
}
