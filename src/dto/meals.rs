use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    models::Meal,
    validation::{de_number, de_opt_number},
};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMealRequest {
    pub name: Option<String>,
    pub chef_name: Option<String>,
    pub chef_id: Option<String>,
    pub chef_email: Option<String>,
    pub image: Option<String>,
    #[serde(deserialize_with = "de_number")]
    #[schema(value_type = f64)]
    pub price: f64,
    #[serde(default)]
    pub ingredients: Vec<String>,
    pub estimated_delivery_time: Option<String>,
    pub delivery_area: Option<String>,
    pub chef_experience: Option<String>,
    pub details: Option<serde_json::Value>,
}

/// Partial update. `rating` is derived from reviews and cannot be set here.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMealRequest {
    pub name: Option<String>,
    pub chef_name: Option<String>,
    pub image: Option<String>,
    #[serde(default, deserialize_with = "de_opt_number")]
    #[schema(value_type = Option<f64>)]
    pub price: Option<f64>,
    pub ingredients: Option<Vec<String>>,
    pub estimated_delivery_time: Option<String>,
    pub delivery_area: Option<String>,
    pub chef_experience: Option<String>,
    pub details: Option<serde_json::Value>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MealPage {
    pub meals: Vec<Meal>,
    pub total_meals: u64,
    pub current_page: u64,
    pub total_pages: u64,
}
