use axum::{
    Json, Router,
    extract::State,
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::meals::{CreateMealRequest, MealPage, UpdateMealRequest},
    error::AppResult,
    middleware::auth::AuthUser,
    models::Meal,
    response::ApiResponse,
    routes::{
        extract::{AppJson, AppPath, AppQuery},
        params::MealQuery,
    },
    services::meal_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_meals).post(create_meal))
        .route(
            "/{id}",
            get(get_meal).patch(update_meal).delete(delete_meal),
        )
}

#[utoipa::path(
    get,
    path = "/meals",
    params(MealQuery),
    responses(
        (status = 200, description = "List meals, optionally paginated", body = ApiResponse<MealPage>),
        (status = 400, description = "Bad query"),
    ),
    tag = "Meals"
)]
pub async fn list_meals(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<MealQuery>,
) -> AppResult<Json<ApiResponse<MealPage>>> {
    let resp = meal_service::list_meals(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/meals/{id}",
    params(
        ("id" = Uuid, Path, description = "Meal ID")
    ),
    responses(
        (status = 200, description = "Get meal", body = ApiResponse<Meal>),
        (status = 404, description = "Meal not found"),
    ),
    tag = "Meals"
)]
pub async fn get_meal(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<ApiResponse<Meal>>> {
    let resp = meal_service::get_meal(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/meals",
    request_body = CreateMealRequest,
    responses(
        (status = 200, description = "Create meal", body = ApiResponse<Meal>),
        (status = 400, description = "Missing or invalid fields"),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer_auth" = [])),
    tag = "Meals"
)]
pub async fn create_meal(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(payload): AppJson<CreateMealRequest>,
) -> AppResult<Json<ApiResponse<Meal>>> {
    let resp = meal_service::create_meal(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/meals/{id}",
    params(
        ("id" = Uuid, Path, description = "Meal ID")
    ),
    request_body = UpdateMealRequest,
    responses(
        (status = 200, description = "Updated meal", body = ApiResponse<Meal>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Meal not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Meals"
)]
pub async fn update_meal(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateMealRequest>,
) -> AppResult<Json<ApiResponse<Meal>>> {
    let resp = meal_service::update_meal(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/meals/{id}",
    params(
        ("id" = Uuid, Path, description = "Meal ID")
    ),
    responses(
        (status = 200, description = "Deleted meal", body = ApiResponse<serde_json::Value>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Meal not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Meals"
)]
pub async fn delete_meal(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = meal_service::delete_meal(&state, &user, id).await?;
    Ok(Json(resp))
}
