use axum::{
    Json, Router,
    extract::State,
    routing::{get, patch},
};

use crate::{
    dto::users::{CreateUserRequest, UpdateProfileRequest, UpdateRoleRequest, UpdateStatusRequest},
    error::AppResult,
    middleware::auth::AuthUser,
    models::User,
    response::ApiResponse,
    routes::{
        extract::{AppJson, AppPath, AppQuery},
        params::UserQuery,
    },
    services::user_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{email}", get(get_user).patch(update_profile))
        .route("/{email}/role", patch(update_role))
        .route("/{email}/status", patch(update_status))
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "Created user, or the existing user with that email", body = ApiResponse<User>),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(payload): AppJson<CreateUserRequest>,
) -> AppResult<Json<ApiResponse<User>>> {
    let resp = user_service::create_user(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/users",
    params(UserQuery),
    responses(
        (status = 200, description = "List users", body = ApiResponse<Vec<User>>)
    ),
    tag = "Users"
)]
pub async fn list_users(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<UserQuery>,
) -> AppResult<Json<ApiResponse<Vec<User>>>> {
    let resp = user_service::list_users(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/users/{email}",
    params(
        ("email" = String, Path, description = "User email")
    ),
    responses(
        (status = 200, description = "Get user", body = ApiResponse<User>),
        (status = 404, description = "User not found"),
    ),
    tag = "Users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    AppPath(email): AppPath<String>,
) -> AppResult<Json<ApiResponse<User>>> {
    let resp = user_service::get_user(&state, &email).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/users/{email}",
    params(
        ("email" = String, Path, description = "User email")
    ),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated profile", body = ApiResponse<User>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn update_profile(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(email): AppPath<String>,
    AppJson(payload): AppJson<UpdateProfileRequest>,
) -> AppResult<Json<ApiResponse<User>>> {
    let resp = user_service::update_profile(&state, &user, &email, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/users/{email}/role",
    params(
        ("email" = String, Path, description = "User email")
    ),
    request_body = UpdateRoleRequest,
    responses(
        (status = 200, description = "Updated role, status or chef id", body = ApiResponse<User>),
        (status = 400, description = "Nothing to update"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn update_role(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(email): AppPath<String>,
    AppJson(payload): AppJson<UpdateRoleRequest>,
) -> AppResult<Json<ApiResponse<User>>> {
    let resp = user_service::update_role(&state, &user, &email, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/users/{email}/status",
    params(
        ("email" = String, Path, description = "User email")
    ),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Updated status", body = ApiResponse<User>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn update_status(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(email): AppPath<String>,
    AppJson(payload): AppJson<UpdateStatusRequest>,
) -> AppResult<Json<ApiResponse<User>>> {
    let resp = user_service::update_status(&state, &user, &email, payload).await?;
    Ok(Json(resp))
}
