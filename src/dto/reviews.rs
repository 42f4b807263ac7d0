use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::validation::{de_number, de_opt_number};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub food_id: Uuid,
    pub meal_name: Option<String>,
    /// Defaults to the caller's verified email.
    pub reviewer_email: Option<String>,
    pub reviewer_name: Option<String>,
    pub reviewer_image: Option<String>,
    #[serde(deserialize_with = "de_number")]
    #[schema(value_type = f64)]
    pub rating: f64,
    #[serde(default)]
    pub comment: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReviewRequest {
    #[serde(default, deserialize_with = "de_opt_number")]
    #[schema(value_type = Option<f64>)]
    pub rating: Option<f64>,
    pub comment: Option<String>,
}
