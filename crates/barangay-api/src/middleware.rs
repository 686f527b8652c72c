use axum::{
    extract::{Request, State},
    http::{StatusCode, header},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{DecodingKey, Validation, decode};
use tracing::warn;

use barangay_types::api::Claims;

use crate::auth::AppState;

/// Extract and validate the JWT from the Authorization header.
///
/// The account is looked up again on every request: a user suspended after
/// the token was issued is refused, and the role in the claims is refreshed
/// from the store.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let mut claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(state.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| StatusCode::UNAUTHORIZED)?
    .claims;

    let user = state
        .db
        .with_accounts(|accounts| accounts.get(&claims.sub))
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::UNAUTHORIZED)?;

    if user.suspended {
        warn!("Rejected request from suspended account {}", user.username);
        return Err(StatusCode::FORBIDDEN);
    }
    claims.role = user.role;

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

/// Administrator-only gate for handlers behind `require_auth`.
pub fn require_admin(claims: &Claims) -> Result<(), StatusCode> {
    if claims.role.is_admin() {
        Ok(())
    } else {
        Err(StatusCode::FORBIDDEN)
    }
}
