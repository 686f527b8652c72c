pub mod activity;
pub mod analytics;
pub mod auth;
pub mod ledgers;
pub mod middleware;
pub mod users;
pub mod validation;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post, put},
};

use crate::auth::AppState;
use crate::middleware::require_auth;

/// All routes, without transport layers (CORS, tracing). Those are added by
/// the server binary.
pub fn router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login));

    let protected_routes = Router::new()
        .route("/me", get(auth::me))
        .route("/users", get(users::list_users))
        .route("/users/{username}", put(users::update_user))
        .route("/users/{username}/suspend", post(users::suspend_user))
        .route("/users/{username}/unsuspend", post(users::unsuspend_user))
        .route("/activity", get(activity::list_activity))
        .route("/givers", get(ledgers::list_givers).post(ledgers::add_giver))
        .route(
            "/givers/{index}",
            put(ledgers::update_giver).delete(ledgers::delete_giver),
        )
        .route(
            "/collections",
            get(ledgers::list_collections).post(ledgers::add_collection),
        )
        .route(
            "/collections/{index}",
            put(ledgers::update_collection).delete(ledgers::delete_collection),
        )
        .route("/analytics", get(analytics::get_analytics))
        .layer(axum_middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
