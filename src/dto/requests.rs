use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{RequestStatus, Role};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoleRequest {
    /// Defaults to the caller's verified email.
    pub user_email: Option<String>,
    pub user_name: Option<String>,
    pub request_type: Role,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransitionRequest {
    pub request_status: RequestStatus,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransitionOutcome {
    pub modified_count: u64,
    pub request_status: RequestStatus,
    pub message: String,
}
