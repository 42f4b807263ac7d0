use axum::{
    Json, Router,
    extract::State,
    routing::{delete, get},
};
use uuid::Uuid;

use crate::{
    dto::favorites::AddFavoriteRequest,
    error::AppResult,
    middleware::auth::AuthUser,
    models::Favorite,
    response::ApiResponse,
    routes::{
        extract::{AppJson, AppPath, AppQuery},
        params::FavoriteQuery,
    },
    services::favorite_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_favorites).post(add_favorite))
        .route("/{id}", delete(remove_favorite))
}

#[utoipa::path(
    delete,
    path = "/favorites/{id}",
    params(
        ("id" = Uuid, Path, description = "Favorite ID")
    ),
    responses(
        (status = 200, description = "Removed from favorites", body = ApiResponse<serde_json::Value>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Favorite not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Favorites"
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = favorite_service::remove_favorite(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/favorites",
    params(FavoriteQuery),
    responses(
        (status = 200, description = "List favorites", body = ApiResponse<Vec<Favorite>>)
    ),
    tag = "Favorites"
)]
pub async fn list_favorites(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<FavoriteQuery>,
) -> AppResult<Json<ApiResponse<Vec<Favorite>>>> {
    let resp = favorite_service::list_favorites(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/favorites",
    request_body = AddFavoriteRequest,
    responses(
        (status = 200, description = "Added to favorites", body = ApiResponse<Favorite>),
        (status = 400, description = "Meal not found"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Meal is already a favorite of this user")
    ),
    security(("bearer_auth" = [])),
    tag = "Favorites"
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(payload): AppJson<AddFavoriteRequest>,
) -> AppResult<Json<ApiResponse<Favorite>>> {
    let resp = favorite_service::add_favorite(&state, &user, payload).await?;
    Ok(Json(resp))
}
