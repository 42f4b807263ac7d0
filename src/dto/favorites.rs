use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::validation::de_opt_number;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddFavoriteRequest {
    /// Defaults to the caller's verified email.
    pub user_email: Option<String>,
    pub meal_id: Uuid,
    pub meal_name: Option<String>,
    pub chef_id: Option<String>,
    pub chef_name: Option<String>,
    #[serde(default, deserialize_with = "de_opt_number")]
    #[schema(value_type = Option<f64>)]
    pub price: Option<f64>,
    pub image: Option<String>,
}
