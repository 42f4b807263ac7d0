use axum::{Json, Router, extract::State, routing::get};
use uuid::Uuid;

use crate::{
    dto::requests::{CreateRoleRequest, TransitionOutcome, TransitionRequest},
    error::AppResult,
    middleware::auth::AuthUser,
    models::RoleRequest,
    response::ApiResponse,
    routes::{
        extract::{AppJson, AppPath, AppQuery},
        params::RequestQuery,
    },
    services::request_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_requests).post(create_request))
        .route("/{id}", get(get_request).patch(update_request))
}

#[utoipa::path(
    get,
    path = "/requests",
    params(RequestQuery),
    responses(
        (status = 200, description = "List role requests", body = ApiResponse<Vec<RoleRequest>>)
    ),
    tag = "Requests"
)]
pub async fn list_requests(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<RequestQuery>,
) -> AppResult<Json<ApiResponse<Vec<RoleRequest>>>> {
    let resp = request_service::list_requests(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/requests",
    request_body = CreateRoleRequest,
    responses(
        (status = 200, description = "Request created as pending", body = ApiResponse<RoleRequest>),
        (status = 400, description = "Unknown request type"),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer_auth" = [])),
    tag = "Requests"
)]
pub async fn create_request(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(payload): AppJson<CreateRoleRequest>,
) -> AppResult<Json<ApiResponse<RoleRequest>>> {
    let resp = request_service::create_request(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/requests/{id}",
    params(
        ("id" = Uuid, Path, description = "Request ID")
    ),
    responses(
        (status = 200, description = "Get role request", body = ApiResponse<RoleRequest>),
        (status = 404, description = "Not Found"),
    ),
    tag = "Requests"
)]
pub async fn get_request(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<ApiResponse<RoleRequest>>> {
    let resp = request_service::get_request(&state, id).await?;
    Ok(Json(resp))
}

/// Approve or reject a request. Approval also updates the requesting user's role.
#[utoipa::path(
    patch,
    path = "/requests/{id}",
    params(
        ("id" = Uuid, Path, description = "Request ID")
    ),
    request_body = TransitionRequest,
    responses(
        (status = 200, description = "Request transitioned", body = ApiResponse<TransitionOutcome>),
        (status = 400, description = "Target status is not approved or rejected"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Status stored but the user update failed"),
    ),
    security(("bearer_auth" = [])),
    tag = "Requests"
)]
pub async fn update_request(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<TransitionRequest>,
) -> AppResult<Json<ApiResponse<TransitionOutcome>>> {
    let resp = request_service::update_request(&state, &user, id, payload).await?;
    Ok(Json(resp))
}
