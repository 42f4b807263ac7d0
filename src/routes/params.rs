use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::error::{AppError, AppResult};

pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;

#[derive(Debug, Default, Clone, Copy, Deserialize, ToSchema)]
pub struct Pagination {
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl Pagination {
    /// `(page, limit, offset)`, or `None` when the caller asked for no paging at all.
    ///
    /// The offset must fit the store's signed 64-bit OFFSET; larger pages are
    /// rejected as bad input.
    pub fn normalize(&self) -> AppResult<Option<(u64, u64, u64)>> {
        if self.page.is_none() && self.limit.is_none() {
            return Ok(None);
        }
        let page = self.page.unwrap_or(1).max(1);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let offset = (page - 1)
            .checked_mul(limit)
            .filter(|offset| i64::try_from(*offset).is_ok())
            .ok_or_else(|| AppError::BadRequest("page out of range".into()))?;
        Ok(Some((page, limit, offset)))
    }
}

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

// Query structs repeat `page`/`limit` rather than flattening `Pagination`:
// flattened numeric fields do not deserialize from query strings.

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct MealQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub chef_id: Option<String>,
    pub chef_email: Option<String>,
    /// Sort by price.
    pub sort: Option<SortOrder>,
}

impl MealQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            limit: self.limit,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserQuery {
    pub email: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ReviewQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub food_id: Option<Uuid>,
    pub reviewer_email: Option<String>,
}

impl ReviewQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            limit: self.limit,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct FavoriteQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub user_email: Option<String>,
}

impl FavoriteQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            limit: self.limit,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct OrderQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub user_email: Option<String>,
    pub chef_id: Option<String>,
    pub order_status: Option<String>,
}

impl OrderQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            limit: self.limit,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct RequestQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub user_email: Option<String>,
    pub request_status: Option<String>,
}

impl RequestQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            limit: self.limit,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PaymentHistoryQuery {
    pub user_email: Option<String>,
}
