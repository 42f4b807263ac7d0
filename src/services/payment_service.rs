use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::{
    dto::payments::{CreatePaymentIntentRequest, PaymentIntentResponse, RecordPaymentRequest},
    entity::{
        PaymentHistory,
        payment_history::{ActiveModel, Column},
    },
    error::AppResult,
    middleware::auth::AuthUser,
    models::PaymentRecord,
    payments::to_minor_units,
    response::{ApiResponse, Meta},
    routes::params::PaymentHistoryQuery,
    state::AppState,
    validation::{non_negative_amount, optional_text, positive_amount, required_text},
};

fn currency_or_default(state: &AppState, currency: Option<String>) -> String {
    optional_text(currency)
        .map(|c| c.to_lowercase())
        .unwrap_or_else(|| state.currency.clone())
}

pub async fn create_payment_intent(
    state: &AppState,
    user: &AuthUser,
    payload: CreatePaymentIntentRequest,
) -> AppResult<ApiResponse<PaymentIntentResponse>> {
    let price = positive_amount("price", payload.price)?;
    let amount = to_minor_units(price);
    let currency = currency_or_default(state, payload.currency);

    let intent = state.payments.create_intent(amount, &currency).await?;

    tracing::info!(intent_id = %intent.id, amount, %currency, actor = %user.email, "payment intent created");

    Ok(ApiResponse::success(
        "Payment intent created",
        PaymentIntentResponse {
            client_secret: intent.client_secret,
            amount: intent.amount,
            currency: intent.currency,
        },
        Some(Meta::empty()),
    ))
}

/// Append a completed payment. Records are never updated or deleted.
pub async fn record_payment(
    state: &AppState,
    user: &AuthUser,
    payload: RecordPaymentRequest,
) -> AppResult<ApiResponse<PaymentRecord>> {
    let amount = non_negative_amount("amount", payload.amount)?;
    let transaction_id = required_text("transactionId", Some(payload.transaction_id))?;
    let currency = currency_or_default(state, payload.currency);

    let record = ActiveModel {
        id: Set(Uuid::new_v4()),
        order_id: Set(payload.order_id),
        user_email: Set(user.email_or(payload.user_email)),
        amount: Set(amount),
        currency: Set(currency),
        transaction_id: Set(transaction_id),
        paid_at: Set(Utc::now().into()),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(payment_id = %record.id, transaction_id = %record.transaction_id, "payment recorded");

    Ok(ApiResponse::success(
        "Payment recorded",
        PaymentRecord::from(record),
        Some(Meta::empty()),
    ))
}

pub async fn list_payments(
    state: &AppState,
    query: PaymentHistoryQuery,
) -> AppResult<ApiResponse<Vec<PaymentRecord>>> {
    let mut finder = PaymentHistory::find().order_by_desc(Column::PaidAt);
    if let Some(email) = query.user_email.as_ref().filter(|s| !s.is_empty()) {
        finder = finder.filter(Column::UserEmail.eq(email.clone()));
    }

    let records: Vec<PaymentRecord> = finder
        .all(&state.orm)
        .await?
        .into_iter()
        .map(PaymentRecord::from)
        .collect();

    let meta = Meta::all(records.len() as u64);
    Ok(ApiResponse::success("Payment history", records, Some(meta)))
}
