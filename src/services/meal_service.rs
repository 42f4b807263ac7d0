use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::{
    dto::meals::{CreateMealRequest, MealPage, UpdateMealRequest},
    entity::{
        Meals,
        meals::{ActiveModel, Column},
    },
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::Meal,
    response::{ApiResponse, Meta},
    routes::params::{MealQuery, SortOrder},
    services::fetch_page,
    state::AppState,
    validation::{optional_text, positive_amount, required_text},
};

pub async fn list_meals(state: &AppState, query: MealQuery) -> AppResult<ApiResponse<MealPage>> {
    let mut condition = Condition::all();
    if let Some(chef_id) = query.chef_id.as_ref().filter(|s| !s.is_empty()) {
        condition = condition.add(Column::ChefId.eq(chef_id.clone()));
    }
    if let Some(chef_email) = query.chef_email.as_ref().filter(|s| !s.is_empty()) {
        condition = condition.add(Column::ChefEmail.eq(chef_email.clone()));
    }

    let finder = Meals::find().filter(condition);
    let finder = match query.sort {
        Some(SortOrder::Asc) => finder.order_by_asc(Column::Price),
        Some(SortOrder::Desc) => finder.order_by_desc(Column::Price),
        None => finder.order_by_desc(Column::CreatedAt),
    };

    let (items, meta) = fetch_page(&state.orm, finder, query.pagination()).await?;

    let data = MealPage {
        meals: items.into_iter().map(Meal::from).collect(),
        total_meals: meta.total.unwrap_or_default(),
        current_page: meta.page.unwrap_or(1),
        total_pages: meta.total_pages.unwrap_or_default(),
    };
    Ok(ApiResponse::success("Meals", data, Some(meta)))
}

pub async fn get_meal(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Meal>> {
    let meal = Meals::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Meal", Meal::from(meal), None))
}

pub async fn create_meal(
    state: &AppState,
    user: &AuthUser,
    payload: CreateMealRequest,
) -> AppResult<ApiResponse<Meal>> {
    let name = required_text("name", payload.name)?;
    let chef_name = required_text("chefName", payload.chef_name)?;
    let price = positive_amount("price", payload.price)?;

    let meal = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name),
        chef_name: Set(chef_name),
        chef_id: Set(optional_text(payload.chef_id)),
        chef_email: Set(Some(user.email_or(payload.chef_email))),
        image: Set(optional_text(payload.image)),
        price: Set(price),
        rating: Set(0.0),
        ingredients: Set(serde_json::json!(payload.ingredients)),
        estimated_delivery_time: Set(optional_text(payload.estimated_delivery_time)),
        delivery_area: Set(optional_text(payload.delivery_area)),
        chef_experience: Set(optional_text(payload.chef_experience)),
        details: Set(payload.details),
        created_at: Set(Utc::now().into()),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(meal_id = %meal.id, chef = %user.email, "meal created");

    Ok(ApiResponse::success(
        "Meal created",
        Meal::from(meal),
        Some(Meta::empty()),
    ))
}

pub async fn update_meal(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateMealRequest,
) -> AppResult<ApiResponse<Meal>> {
    let existing = Meals::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: ActiveModel = existing.clone().into();
    if payload.name.is_some() {
        active.name = Set(required_text("name", payload.name)?);
    }
    if payload.chef_name.is_some() {
        active.chef_name = Set(required_text("chefName", payload.chef_name)?);
    }
    if let Some(price) = payload.price {
        active.price = Set(positive_amount("price", price)?);
    }
    if let Some(image) = payload.image {
        active.image = Set(optional_text(Some(image)));
    }
    if let Some(ingredients) = payload.ingredients {
        active.ingredients = Set(serde_json::json!(ingredients));
    }
    if let Some(time) = payload.estimated_delivery_time {
        active.estimated_delivery_time = Set(optional_text(Some(time)));
    }
    if let Some(area) = payload.delivery_area {
        active.delivery_area = Set(optional_text(Some(area)));
    }
    if let Some(experience) = payload.chef_experience {
        active.chef_experience = Set(optional_text(Some(experience)));
    }
    if let Some(details) = payload.details {
        active.details = Set(Some(details));
    }

    let meal = if active.is_changed() {
        active.update(&state.orm).await?
    } else {
        existing
    };

    tracing::info!(meal_id = %meal.id, actor = %user.email, "meal updated");

    Ok(ApiResponse::success(
        "Updated",
        Meal::from(meal),
        Some(Meta::empty()),
    ))
}

pub async fn delete_meal(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Meals::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    tracing::info!(meal_id = %id, actor = %user.email, "meal deleted");

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({ "deletedCount": result.rows_affected }),
        Some(Meta::empty()),
    ))
}
