//! Role-change requests: `pending -> approved | rejected`, and the user update an
//! approval implies.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, sea_query::Expr,
};
use uuid::Uuid;

use crate::{
    dto::requests::{CreateRoleRequest, TransitionOutcome, TransitionRequest},
    entity::{
        Requests, Users,
        requests::{ActiveModel as RequestActive, Column as RequestCol},
        users::Column as UserCol,
    },
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::{RequestStatus, Role, RoleRequest},
    response::{ApiResponse, Meta},
    routes::params::RequestQuery,
    saga::retry_step,
    services::fetch_page,
    state::AppState,
    validation::optional_text,
};

/// `CHEF-` followed by the current millisecond timestamp and four random digits.
pub fn generate_chef_id() -> String {
    let suffix = Uuid::new_v4().as_u128() % 10_000;
    format!("CHEF-{}{:04}", Utc::now().timestamp_millis(), suffix)
}

pub async fn create_request(
    state: &AppState,
    user: &AuthUser,
    payload: CreateRoleRequest,
) -> AppResult<ApiResponse<RoleRequest>> {
    let user_email = user.email_or(payload.user_email);

    let request = RequestActive {
        id: Set(Uuid::new_v4()),
        user_email: Set(user_email),
        user_name: Set(optional_text(payload.user_name)),
        request_type: Set(payload.request_type.as_str().to_string()),
        request_status: Set(RequestStatus::Pending.as_str().to_string()),
        request_time: Set(Utc::now().into()),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(
        request_id = %request.id,
        user_email = %request.user_email,
        request_type = %request.request_type,
        "role request created"
    );

    Ok(ApiResponse::success(
        "Request created",
        RoleRequest::from(request),
        Some(Meta::empty()),
    ))
}

pub async fn list_requests(
    state: &AppState,
    query: RequestQuery,
) -> AppResult<ApiResponse<Vec<RoleRequest>>> {
    let mut condition = Condition::all();
    if let Some(email) = query.user_email.as_ref().filter(|s| !s.is_empty()) {
        condition = condition.add(RequestCol::UserEmail.eq(email.clone()));
    }
    if let Some(status) = query.request_status.as_ref().filter(|s| !s.is_empty()) {
        condition = condition.add(RequestCol::RequestStatus.eq(status.clone()));
    }

    let finder = Requests::find()
        .filter(condition)
        .order_by_desc(RequestCol::RequestTime);

    let (items, meta) = fetch_page(&state.orm, finder, query.pagination()).await?;
    let requests = items.into_iter().map(RoleRequest::from).collect();

    Ok(ApiResponse::success("Requests", requests, Some(meta)))
}

pub async fn get_request(state: &AppState, id: Uuid) -> AppResult<ApiResponse<RoleRequest>> {
    let request = Requests::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success(
        "Request",
        RoleRequest::from(request),
        Some(Meta::empty()),
    ))
}

pub async fn update_request(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: TransitionRequest,
) -> AppResult<ApiResponse<TransitionOutcome>> {
    let outcome = transition_request(&state.orm, id, payload.request_status).await?;

    tracing::info!(
        request_id = %id,
        actor = %user.email,
        request_status = outcome.request_status.as_str(),
        "role request transitioned"
    );

    Ok(ApiResponse::success(
        outcome.message.clone(),
        outcome,
        Some(Meta::empty()),
    ))
}

/// Move request `id` to `target` and, on approval, give the requesting user the
/// requested role.
///
/// The request row is updated first; the user update is a separate, retried
/// step. A terminal request can be transitioned again: nothing here guards
/// against re-processing, and concurrent transitions of the same id are not
/// serialized.
pub async fn transition_request(
    db: &DatabaseConnection,
    id: Uuid,
    target: RequestStatus,
) -> AppResult<TransitionOutcome> {
    if !target.is_terminal() {
        return Err(AppError::BadRequest(
            "requestStatus must be approved or rejected".into(),
        ));
    }

    let request = Requests::find_by_id(id)
        .one(db)
        .await?
        .ok_or(AppError::NotFound)?;

    if let Some(current) = RequestStatus::parse(&request.request_status).filter(|s| s.is_terminal())
    {
        tracing::warn!(
            request_id = %id,
            current = current.as_str(),
            target = target.as_str(),
            "request already processed, applying again"
        );
    }

    let updated = Requests::update_many()
        .col_expr(RequestCol::RequestStatus, Expr::value(target.as_str()))
        .filter(RequestCol::Id.eq(id))
        .exec(db)
        .await?;

    if target == RequestStatus::Approved {
        // Generated once so a retried step writes the same value.
        let chef_id = (request.request_type == Role::Chef.as_str()).then(generate_chef_id);
        let email = request.user_email.as_str();
        let role = request.request_type.as_str();
        let chef_id = chef_id.as_deref();

        let matched = retry_step("user_role", || apply_role(db, email, role, chef_id)).await?;
        if matched == 0 {
            tracing::warn!(request_id = %id, user_email = %email, "no user matches the request email");
        }
    }

    Ok(TransitionOutcome {
        modified_count: updated.rows_affected.min(1),
        request_status: target,
        message: format!("Request {}", target.as_str()),
    })
}

async fn apply_role(
    db: &DatabaseConnection,
    email: &str,
    role: &str,
    chef_id: Option<&str>,
) -> AppResult<u64> {
    let mut update = Users::update_many().col_expr(UserCol::Role, Expr::value(role));
    if let Some(chef_id) = chef_id {
        update = update.col_expr(UserCol::ChefId, Expr::value(chef_id));
    }
    let result = update.filter(UserCol::Email.eq(email)).exec(db).await?;
    Ok(result.rows_affected)
}
