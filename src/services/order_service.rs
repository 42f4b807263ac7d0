use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::{
    dto::orders::{CreateOrderRequest, UpdateOrderStatusRequest, UpdatePaymentStatusRequest},
    entity::{
        Orders,
        orders::{ActiveModel as OrderActive, Column as OrderCol},
    },
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::{ORDER_STATUSES, Order, OrderLine, PAYMENT_STATUSES},
    response::{ApiResponse, Meta},
    routes::params::OrderQuery,
    services::fetch_page,
    state::AppState,
    validation::{non_negative_amount, one_of, optional_text, required_text},
};

const INITIAL_STATUS: &str = "pending";
const PAID: &str = "paid";

pub async fn list_orders(state: &AppState, query: OrderQuery) -> AppResult<ApiResponse<Vec<Order>>> {
    let mut condition = Condition::all();
    if let Some(email) = query.user_email.as_ref().filter(|s| !s.is_empty()) {
        condition = condition.add(OrderCol::UserEmail.eq(email.clone()));
    }
    if let Some(chef_id) = query.chef_id.as_ref().filter(|s| !s.is_empty()) {
        condition = condition.add(OrderCol::ChefId.eq(chef_id.clone()));
    }
    if let Some(status) = query.order_status.as_ref().filter(|s| !s.is_empty()) {
        condition = condition.add(OrderCol::OrderStatus.eq(status.clone()));
    }

    let finder = Orders::find()
        .filter(condition)
        .order_by_desc(OrderCol::OrderTime);

    let (items, meta) = fetch_page(&state.orm, finder, query.pagination()).await?;
    let orders = items.into_iter().map(Order::from).collect();

    Ok(ApiResponse::success("Ok", orders, Some(meta)))
}

pub async fn get_order(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Order>> {
    let order = Orders::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("OK", Order::from(order), Some(Meta::empty())))
}

pub async fn create_order(
    state: &AppState,
    user: &AuthUser,
    payload: CreateOrderRequest,
) -> AppResult<ApiResponse<Order>> {
    if payload.items.is_empty() {
        return Err(AppError::BadRequest("Order has no items".into()));
    }

    let mut lines = Vec::with_capacity(payload.items.len());
    for item in payload.items {
        if item.quantity == 0 {
            return Err(AppError::BadRequest("Order has invalid quantity".into()));
        }
        lines.push(OrderLine {
            meal_id: item.meal_id,
            meal_name: required_text("mealName", Some(item.meal_name))?,
            price: non_negative_amount("price", item.price)?,
            quantity: item.quantity,
        });
    }
    let total_price = order_total(&lines);

    let order = OrderActive {
        id: Set(Uuid::new_v4()),
        user_email: Set(user.email_or(payload.user_email)),
        user_address: Set(optional_text(payload.user_address)),
        chef_id: Set(optional_text(payload.chef_id)),
        items: Set(serde_json::json!(lines)),
        total_price: Set(total_price),
        order_status: Set(INITIAL_STATUS.into()),
        payment_status: Set(INITIAL_STATUS.into()),
        order_time: Set(Utc::now().into()),
        paid_at: Set(None),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(order_id = %order.id, total_price, "order placed");

    Ok(ApiResponse::success(
        "Order placed",
        Order::from(order),
        Some(Meta::empty()),
    ))
}

pub async fn update_order_status(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateOrderStatusRequest,
) -> AppResult<ApiResponse<Order>> {
    one_of("orderStatus", &payload.order_status, &ORDER_STATUSES)?;

    let existing = Orders::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: OrderActive = existing.into();
    active.order_status = Set(payload.order_status);
    let order = active.update(&state.orm).await?;

    tracing::info!(order_id = %order.id, status = %order.order_status, actor = %user.email, "order status updated");

    Ok(ApiResponse::success(
        "Order updated",
        Order::from(order),
        Some(Meta::empty()),
    ))
}

pub async fn update_payment_status(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdatePaymentStatusRequest,
) -> AppResult<ApiResponse<Order>> {
    one_of("paymentStatus", &payload.payment_status, &PAYMENT_STATUSES)?;

    let existing = Orders::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    if existing.payment_status == PAID && payload.payment_status == PAID {
        return Err(AppError::BadRequest("Order already paid".into()));
    }

    let mut active: OrderActive = existing.into();
    active.paid_at = Set((payload.payment_status == PAID).then(|| Utc::now().into()));
    active.payment_status = Set(payload.payment_status);
    let order = active.update(&state.orm).await?;

    tracing::info!(order_id = %order.id, payment_status = %order.payment_status, actor = %user.email, "payment status updated");

    Ok(ApiResponse::success(
        "Payment recorded",
        Order::from(order),
        Some(Meta::empty()),
    ))
}

/// Sum of `price * quantity`, rounded to cents.
pub fn order_total(lines: &[OrderLine]) -> f64 {
    let total: f64 = lines
        .iter()
        .map(|line| line.price * f64::from(line.quantity))
        .sum();
    (total * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_multiplies_quantities() {
        let lines = vec![
            OrderLine {
                meal_id: Uuid::new_v4(),
                meal_name: "Khichuri".into(),
                price: 4.5,
                quantity: 2,
            },
            OrderLine {
                meal_id: Uuid::new_v4(),
                meal_name: "Pitha".into(),
                price: 1.1,
                quantity: 3,
            },
        ];
        assert_eq!(order_total(&lines), 12.3);
    }
}
