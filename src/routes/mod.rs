use axum::{
    Json, Router,
    http::{StatusCode, Uri},
    routing::get,
};

use crate::{
    response::{ApiResponse, Meta},
    state::AppState,
};

pub mod doc;
pub mod extract;
pub mod favorites;
pub mod health;
pub mod meals;
pub mod orders;
pub mod params;
pub mod payments;
pub mod requests;
pub mod reviews;
pub mod users;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/meals", meals::router())
        .nest("/users", users::router())
        .nest("/reviews", reviews::router())
        .nest("/favorites", favorites::router())
        .nest("/orders", orders::router())
        .nest("/requests", requests::router())
        .merge(payments::router())
}

/// Every route the service exposes, before middleware layers and state.
pub fn create_app_router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health::health_check))
        .merge(create_api_router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
}

async fn root() -> &'static str {
    "Chef Bazaar server is running"
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ApiResponse<serde_json::Value>>) {
    let body = ApiResponse::success(
        "Not Found",
        serde_json::json!({ "path": uri.path() }),
        Some(Meta::empty()),
    );
    (StatusCode::NOT_FOUND, Json(body))
}
