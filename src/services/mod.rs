use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QuerySelect, Select};

use crate::{error::AppResult, response::Meta, routes::params::Pagination};

pub mod favorite_service;
pub mod meal_service;
pub mod order_service;
pub mod payment_service;
pub mod rating_service;
pub mod request_service;
pub mod review_service;
pub mod user_service;

/// Run `finder` either as one page (with the total count) or in full when the
/// caller sent no paging parameters.
pub(crate) async fn fetch_page<E>(
    db: &DatabaseConnection,
    finder: Select<E>,
    pagination: Pagination,
) -> AppResult<(Vec<E::Model>, Meta)>
where
    E: EntityTrait,
    E::Model: Send + Sync + 'static,
{
    match pagination.normalize()? {
        Some((page, limit, offset)) => {
            let total = finder.clone().count(db).await?;
            let items = finder.limit(limit).offset(offset).all(db).await?;
            Ok((items, Meta::new(page, limit, total)))
        }
        None => {
            let items = finder.all(db).await?;
            let total = items.len() as u64;
            Ok((items, Meta::all(total)))
        }
    }
}
