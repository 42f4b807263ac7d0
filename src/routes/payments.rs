use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    dto::payments::{CreatePaymentIntentRequest, PaymentIntentResponse, RecordPaymentRequest},
    error::AppResult,
    middleware::auth::AuthUser,
    models::PaymentRecord,
    response::ApiResponse,
    routes::{
        extract::{AppJson, AppQuery},
        params::PaymentHistoryQuery,
    },
    services::payment_service,
    state::AppState,
};

// Mounted at the root: the paths are part of the public contract.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create-payment-intent", post(create_payment_intent))
        .route(
            "/payment-history",
            get(list_payment_history).post(record_payment),
        )
}

#[utoipa::path(
    post,
    path = "/create-payment-intent",
    request_body = CreatePaymentIntentRequest,
    responses(
        (status = 200, description = "Client secret for the new intent", body = ApiResponse<PaymentIntentResponse>),
        (status = 400, description = "Price missing or not positive"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Payment provider error"),
    ),
    security(("bearer_auth" = [])),
    tag = "Payments"
)]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(payload): AppJson<CreatePaymentIntentRequest>,
) -> AppResult<Json<ApiResponse<PaymentIntentResponse>>> {
    let resp = payment_service::create_payment_intent(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/payment-history",
    params(PaymentHistoryQuery),
    responses(
        (status = 200, description = "Payment history, newest first", body = ApiResponse<Vec<PaymentRecord>>)
    ),
    tag = "Payments"
)]
pub async fn list_payment_history(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<PaymentHistoryQuery>,
) -> AppResult<Json<ApiResponse<Vec<PaymentRecord>>>> {
    let resp = payment_service::list_payments(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/payment-history",
    request_body = RecordPaymentRequest,
    responses(
        (status = 200, description = "Payment recorded", body = ApiResponse<PaymentRecord>),
        (status = 400, description = "Invalid amount or transaction id"),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer_auth" = [])),
    tag = "Payments"
)]
pub async fn record_payment(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(payload): AppJson<RecordPaymentRequest>,
) -> AppResult<Json<ApiResponse<PaymentRecord>>> {
    let resp = payment_service::record_payment(&state, &user, payload).await?;
    Ok(Json(resp))
}
