use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::{
    dto::reviews::{CreateReviewRequest, UpdateReviewRequest},
    entity::{
        Reviews,
        reviews::{ActiveModel, Column},
    },
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::Review,
    response::{ApiResponse, Meta},
    routes::params::ReviewQuery,
    services::{fetch_page, rating_service::sync_after_review_change},
    state::AppState,
    validation::{self, optional_text},
};

pub async fn list_reviews(
    state: &AppState,
    query: ReviewQuery,
) -> AppResult<ApiResponse<Vec<Review>>> {
    let mut condition = Condition::all();
    if let Some(food_id) = query.food_id {
        condition = condition.add(Column::FoodId.eq(food_id));
    }
    if let Some(email) = query.reviewer_email.as_ref().filter(|s| !s.is_empty()) {
        condition = condition.add(Column::ReviewerEmail.eq(email.clone()));
    }

    let finder = Reviews::find()
        .filter(condition)
        .order_by_desc(Column::Date);

    let (items, meta) = fetch_page(&state.orm, finder, query.pagination()).await?;
    let reviews = items.into_iter().map(Review::from).collect();

    Ok(ApiResponse::success("Reviews", reviews, Some(meta)))
}

pub async fn create_review(
    state: &AppState,
    user: &AuthUser,
    payload: CreateReviewRequest,
) -> AppResult<ApiResponse<Review>> {
    let rating = validation::rating(payload.rating)?;
    let now = Utc::now();

    let review = ActiveModel {
        id: Set(Uuid::new_v4()),
        food_id: Set(payload.food_id),
        meal_name: Set(optional_text(payload.meal_name)),
        reviewer_email: Set(user.email_or(payload.reviewer_email)),
        reviewer_name: Set(optional_text(payload.reviewer_name)),
        reviewer_image: Set(optional_text(payload.reviewer_image)),
        rating: Set(rating),
        comment: Set(payload.comment.trim().to_string()),
        date: Set(now.into()),
        created_at: Set(now.into()),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(review_id = %review.id, food_id = %review.food_id, "review created");
    sync_after_review_change(&state.orm, review.food_id).await;

    Ok(ApiResponse::success(
        "Review created",
        Review::from(review),
        Some(Meta::empty()),
    ))
}

pub async fn update_review(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateReviewRequest,
) -> AppResult<ApiResponse<Review>> {
    if payload.rating.is_none() && payload.comment.is_none() {
        return Err(AppError::BadRequest(
            "rating or comment is required".into(),
        ));
    }

    let existing = Reviews::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: ActiveModel = existing.into();
    if let Some(rating) = payload.rating {
        active.rating = Set(validation::rating(rating)?);
    }
    if let Some(comment) = payload.comment {
        active.comment = Set(comment.trim().to_string());
    }
    active.date = Set(Utc::now().into());

    let review = active.update(&state.orm).await?;

    tracing::info!(review_id = %review.id, actor = %user.email, "review updated");
    sync_after_review_change(&state.orm, review.food_id).await;

    Ok(ApiResponse::success(
        "Review updated",
        Review::from(review),
        Some(Meta::empty()),
    ))
}

pub async fn delete_review(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    // The meal id is needed after the row is gone.
    let existing = Reviews::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let result = Reviews::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    tracing::info!(review_id = %id, actor = %user.email, "review deleted");
    sync_after_review_change(&state.orm, existing.food_id).await;

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({ "deletedCount": result.rows_affected }),
        Some(Meta::empty()),
    ))
}
