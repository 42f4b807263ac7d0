use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::validation::de_number;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineInput {
    pub meal_id: Uuid,
    pub meal_name: String,
    #[serde(deserialize_with = "de_number")]
    #[schema(value_type = f64)]
    pub price: f64,
    pub quantity: u32,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    /// Defaults to the caller's verified email.
    pub user_email: Option<String>,
    pub user_address: Option<String>,
    pub chef_id: Option<String>,
    pub items: Vec<OrderLineInput>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderStatusRequest {
    pub order_status: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaymentStatusRequest {
    pub payment_status: String,
}
