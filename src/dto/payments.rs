use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::validation::de_number;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentRequest {
    /// Amount in major currency units.
    #[serde(alias = "amount", deserialize_with = "de_number")]
    #[schema(value_type = f64)]
    pub price: f64,
    pub currency: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    pub client_secret: String,
    /// Amount in minor currency units, as sent to the gateway.
    pub amount: i64,
    pub currency: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordPaymentRequest {
    pub order_id: Option<Uuid>,
    /// Defaults to the caller's verified email.
    pub user_email: Option<String>,
    #[serde(deserialize_with = "de_number")]
    #[schema(value_type = f64)]
    pub amount: f64,
    pub currency: Option<String>,
    pub transaction_id: String,
}
