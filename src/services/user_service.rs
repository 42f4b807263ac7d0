use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::{
    dto::users::{CreateUserRequest, UpdateProfileRequest, UpdateRoleRequest, UpdateStatusRequest},
    entity::{
        Users,
        users::{ActiveModel, Column, Model as UserModel},
    },
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::{Role, USER_STATUS_ACTIVE, User},
    response::{ApiResponse, Meta},
    routes::params::UserQuery,
    state::AppState,
    validation::{optional_text, required_text},
};

async fn find_by_email(db: &DatabaseConnection, email: &str) -> AppResult<Option<UserModel>> {
    let user = Users::find()
        .filter(Column::Email.eq(email))
        .one(db)
        .await?;
    Ok(user)
}

async fn require_by_email(db: &DatabaseConnection, email: &str) -> AppResult<UserModel> {
    find_by_email(db, email).await?.ok_or(AppError::NotFound)
}

/// Create-or-fetch by email. The existence check and the insert are separate
/// calls, so two concurrent first logins can still insert twice.
pub async fn create_user(
    state: &AppState,
    user: &AuthUser,
    payload: CreateUserRequest,
) -> AppResult<ApiResponse<User>> {
    let email = user.email_or(payload.email);

    if let Some(existing) = find_by_email(&state.orm, &email).await? {
        tracing::debug!(%email, "user already exists");
        return Ok(ApiResponse::success(
            "User already exists",
            User::from(existing),
            Some(Meta::empty()),
        ));
    }

    let created = ActiveModel {
        id: Set(Uuid::new_v4()),
        email: Set(email),
        name: Set(optional_text(payload.name)),
        photo_url: Set(optional_text(payload.photo_url)),
        address: Set(optional_text(payload.address)),
        role: Set(Role::User.as_str().to_string()),
        status: Set(USER_STATUS_ACTIVE.to_string()),
        chef_id: Set(None),
        created_at: Set(Utc::now().into()),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(user_id = %created.id, email = %created.email, "user created");

    Ok(ApiResponse::success(
        "User created",
        User::from(created),
        Some(Meta::empty()),
    ))
}

pub async fn list_users(state: &AppState, query: UserQuery) -> AppResult<ApiResponse<Vec<User>>> {
    let mut finder = Users::find().order_by_desc(Column::CreatedAt);
    if let Some(email) = query.email.as_ref().filter(|s| !s.is_empty()) {
        finder = finder.filter(Column::Email.eq(email.clone()));
    }

    let users: Vec<User> = finder
        .all(&state.orm)
        .await?
        .into_iter()
        .map(User::from)
        .collect();

    let meta = Meta::all(users.len() as u64);
    Ok(ApiResponse::success("Users", users, Some(meta)))
}

pub async fn get_user(state: &AppState, email: &str) -> AppResult<ApiResponse<User>> {
    let user = require_by_email(&state.orm, email).await?;
    Ok(ApiResponse::success("User", User::from(user), None))
}

pub async fn update_profile(
    state: &AppState,
    user: &AuthUser,
    email: &str,
    payload: UpdateProfileRequest,
) -> AppResult<ApiResponse<User>> {
    let existing = require_by_email(&state.orm, email).await?;

    let mut active: ActiveModel = existing.clone().into();
    if let Some(name) = payload.name {
        active.name = Set(optional_text(Some(name)));
    }
    if let Some(photo_url) = payload.photo_url {
        active.photo_url = Set(optional_text(Some(photo_url)));
    }
    if let Some(address) = payload.address {
        active.address = Set(optional_text(Some(address)));
    }

    let updated = save(&state.orm, active, existing).await?;
    tracing::info!(email = %updated.email, actor = %user.email, "profile updated");

    Ok(ApiResponse::success(
        "Profile updated",
        User::from(updated),
        Some(Meta::empty()),
    ))
}

pub async fn update_role(
    state: &AppState,
    user: &AuthUser,
    email: &str,
    payload: UpdateRoleRequest,
) -> AppResult<ApiResponse<User>> {
    if payload.role.is_none() && payload.status.is_none() && payload.chef_id.is_none() {
        return Err(AppError::BadRequest(
            "one of role, status or chefId is required".into(),
        ));
    }

    let existing = require_by_email(&state.orm, email).await?;

    let mut active: ActiveModel = existing.clone().into();
    if let Some(role) = payload.role {
        active.role = Set(role.as_str().to_string());
    }
    if payload.status.is_some() {
        active.status = Set(required_text("status", payload.status)?);
    }
    if let Some(chef_id) = payload.chef_id {
        active.chef_id = Set(optional_text(Some(chef_id)));
    }

    let updated = save(&state.orm, active, existing).await?;
    tracing::info!(
        email = %updated.email,
        role = %updated.role,
        status = %updated.status,
        actor = %user.email,
        "user role updated"
    );

    Ok(ApiResponse::success(
        "User updated",
        User::from(updated),
        Some(Meta::empty()),
    ))
}

pub async fn update_status(
    state: &AppState,
    user: &AuthUser,
    email: &str,
    payload: UpdateStatusRequest,
) -> AppResult<ApiResponse<User>> {
    let status = required_text("status", Some(payload.status))?;
    let existing = require_by_email(&state.orm, email).await?;

    let mut active: ActiveModel = existing.clone().into();
    active.status = Set(status);

    let updated = save(&state.orm, active, existing).await?;
    tracing::info!(email = %updated.email, status = %updated.status, actor = %user.email, "user status updated");

    Ok(ApiResponse::success(
        "User status updated",
        User::from(updated),
        Some(Meta::empty()),
    ))
}

async fn save(
    db: &DatabaseConnection,
    active: ActiveModel,
    existing: UserModel,
) -> AppResult<UserModel> {
    if active.is_changed() {
        Ok(active.update(db).await?)
    } else {
        Ok(existing)
    }
}
