//! Keeps `meals.rating` equal to the rounded mean of the meal's reviews.

use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QuerySelect, sea_query::Expr,
};
use uuid::Uuid;

use crate::{
    entity::{
        Meals, Reviews,
        meals::Column as MealCol,
        reviews::Column as ReviewCol,
    },
    error::AppResult,
    saga::retry_step,
};

/// Mean of `ratings` rounded to one decimal place, `0` for an empty set.
pub fn average_rating(ratings: &[f64]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;
    (mean * 10.0).round() / 10.0
}

/// Recompute and store the rating of meal `food_id` from its current reviews.
///
/// Idempotent: the value is always derived from scratch. A `food_id` that
/// matches no meal updates nothing and is not an error.
pub async fn refresh_meal_rating(db: &DatabaseConnection, food_id: Uuid) -> AppResult<f64> {
    let ratings: Vec<f64> = Reviews::find()
        .select_only()
        .column(ReviewCol::Rating)
        .filter(ReviewCol::FoodId.eq(food_id))
        .into_tuple()
        .all(db)
        .await?;

    let rating = average_rating(&ratings);

    let result = Meals::update_many()
        .col_expr(MealCol::Rating, Expr::value(rating))
        .filter(MealCol::Id.eq(food_id))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        tracing::debug!(%food_id, "reviews reference a meal that does not exist");
    }

    Ok(rating)
}

/// Follow-up step after a review insert, edit or delete.
///
/// The review mutation has already been stored; if the recompute keeps failing
/// the rating stays stale until the next review change and the failure is only
/// logged.
pub async fn sync_after_review_change(db: &DatabaseConnection, food_id: Uuid) -> Option<f64> {
    match retry_step("meal_rating", || refresh_meal_rating(db, food_id)).await {
        Ok(rating) => {
            tracing::info!(%food_id, rating, "meal rating refreshed");
            Some(rating)
        }
        Err(err) => {
            tracing::warn!(%food_id, error = ?err, "meal rating left stale");
            None
        }
    }
}

/// Re-derive the rating of every meal. Returns how many meals were processed.
pub async fn recompute_all(db: &DatabaseConnection) -> AppResult<usize> {
    let ids: Vec<Uuid> = Meals::find()
        .select_only()
        .column(MealCol::Id)
        .into_tuple()
        .all(db)
        .await?;

    for id in &ids {
        refresh_meal_rating(db, *id).await?;
    }

    Ok(ids.len())
}

#[cfg(test)]
mod tests {
    use super::average_rating;

    #[test]
    fn empty_review_set_rates_zero() {
        assert_eq!(average_rating(&[]), 0.0);
    }

    #[test]
    fn mean_is_rounded_to_one_decimal() {
        assert_eq!(average_rating(&[4.0, 2.0]), 3.0);
        assert_eq!(average_rating(&[5.0, 4.0, 4.0]), 4.3);
        assert_eq!(average_rating(&[5.0, 4.0]), 4.5);
        assert_eq!(average_rating(&[1.0, 2.0, 2.0]), 1.7);
    }
}
