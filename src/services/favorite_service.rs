use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::{
    dto::favorites::AddFavoriteRequest,
    entity::{
        Favorites, Meals,
        favorites::{ActiveModel, Column},
    },
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::Favorite,
    response::{ApiResponse, Meta},
    routes::params::FavoriteQuery,
    services::fetch_page,
    state::AppState,
    validation::optional_text,
};

pub async fn list_favorites(
    state: &AppState,
    query: FavoriteQuery,
) -> AppResult<ApiResponse<Vec<Favorite>>> {
    let mut condition = Condition::all();
    if let Some(email) = query.user_email.as_ref().filter(|s| !s.is_empty()) {
        condition = condition.add(Column::UserEmail.eq(email.clone()));
    }

    let finder = Favorites::find()
        .filter(condition)
        .order_by_desc(Column::AddedAt);

    let (items, meta) = fetch_page(&state.orm, finder, query.pagination()).await?;
    let favorites = items.into_iter().map(Favorite::from).collect();

    Ok(ApiResponse::success("OK", favorites, Some(meta)))
}

/// At most one favorite per (user, meal). The duplicate check is a read before
/// the insert, not a store constraint.
pub async fn add_favorite(
    state: &AppState,
    user: &AuthUser,
    payload: AddFavoriteRequest,
) -> AppResult<ApiResponse<Favorite>> {
    let user_email = user.email_or(payload.user_email);

    let meal = Meals::find_by_id(payload.meal_id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::BadRequest("Meal not found".into()))?;

    let existing = Favorites::find()
        .filter(
            Condition::all()
                .add(Column::UserEmail.eq(user_email.clone()))
                .add(Column::MealId.eq(payload.meal_id)),
        )
        .one(&state.orm)
        .await?;

    if existing.is_some() {
        return Err(AppError::Conflict("Already exists".into()));
    }

    // Display fields default to the meal's current values.
    let favorite = ActiveModel {
        id: Set(Uuid::new_v4()),
        user_email: Set(user_email),
        meal_id: Set(meal.id),
        meal_name: Set(optional_text(payload.meal_name).or(Some(meal.name))),
        chef_id: Set(optional_text(payload.chef_id).or(meal.chef_id)),
        chef_name: Set(optional_text(payload.chef_name).or(Some(meal.chef_name))),
        price: Set(payload.price.or(Some(meal.price))),
        image: Set(optional_text(payload.image).or(meal.image)),
        added_at: Set(Utc::now().into()),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(favorite_id = %favorite.id, meal_id = %favorite.meal_id, "favorite added");

    Ok(ApiResponse::success(
        "Added to favorites",
        Favorite::from(favorite),
        Some(Meta::empty()),
    ))
}

pub async fn remove_favorite(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Favorites::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    tracing::info!(favorite_id = %id, actor = %user.email, "favorite removed");

    Ok(ApiResponse::success(
        "Removed from favorites",
        serde_json::json!({ "deletedCount": result.rows_affected }),
        Some(Meta::empty()),
    ))
}
