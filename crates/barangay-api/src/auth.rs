use std::sync::Arc;

use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use jsonwebtoken::{EncodingKey, Header, encode};
use tracing::{info, warn};

use barangay_db::Database;
use barangay_types::api::{
    Claims, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserResponse,
};
use barangay_types::models::User;

use crate::validation;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
    pub jwt_secret: String,
    pub token_ttl: chrono::Duration,
}

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, StatusCode> {
    if req.password != req.confirm_password {
        return Err(StatusCode::BAD_REQUEST);
    }

    let employee_id = match req.employee_id {
        Some(id) => id.trim().to_string(),
        None => req.role.generate_employee_id(&mut rand::rng()),
    };
    let username = req.username.trim();
    let full_name = req.full_name.trim();

    validation::account_fields(username, &req.password, full_name, &employee_id)?;

    let user = state
        .db
        .with_accounts(|accounts| {
            accounts
                .register(username, &req.password, full_name, &employee_id, req.role)
                .then(|| accounts.get(username))
                .flatten()
        })
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::CONFLICT)?;

    info!("Registered {} as {}", user.username, user.role);

    // Registration logs the new account straight in.
    let token = start_session(&state, &user)?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            user: UserResponse::from(&user),
            token,
        }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, StatusCode> {
    if req.username.is_empty() || req.password.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let user = state
        .db
        .with_accounts(|accounts| accounts.authenticate(&req.username, &req.password))
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or_else(|| {
            warn!("Login failed for {}", req.username);
            StatusCode::UNAUTHORIZED
        })?;

    let token = start_session(&state, &user)?;

    Ok(Json(LoginResponse {
        user: UserResponse::from(&user),
        token,
    }))
}

pub async fn me(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, StatusCode> {
    let user = state
        .db
        .with_accounts(|accounts| accounts.get(&claims.sub))
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(UserResponse::from(&user)))
}

/// Record the login in the activity log and issue a token.
fn start_session(state: &AppStateInner, user: &User) -> Result<String, StatusCode> {
    let now = chrono::Local::now().naive_local();
    state
        .db
        .with_activity(|log| log.record_login(user, now))
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    create_token(&state.jwt_secret, user, state.token_ttl)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

fn create_token(secret: &str, user: &User, ttl: chrono::Duration) -> anyhow::Result<String> {
    let claims = Claims {
        sub: user.username.clone(),
        role: user.role,
        exp: (chrono::Utc::now() + ttl).timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok(token)
}
