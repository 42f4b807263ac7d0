mod common;

use chef_bazaar_api::{
    dto::{
        orders::{CreateOrderRequest, OrderLineInput, UpdateOrderStatusRequest, UpdatePaymentStatusRequest},
        payments::{CreatePaymentIntentRequest, RecordPaymentRequest},
    },
    error::AppError,
    routes::params::{OrderQuery, PaymentHistoryQuery},
    services::{order_service, payment_service},
};
use uuid::Uuid;

fn order_with(items: Vec<OrderLineInput>) -> CreateOrderRequest {
    CreateOrderRequest {
        user_email: None,
        user_address: Some("House 7, Road 3".into()),
        chef_id: Some("CHEF-1".into()),
        items,
    }
}

fn line(price: f64, quantity: u32) -> OrderLineInput {
    OrderLineInput {
        meal_id: Uuid::new_v4(),
        meal_name: "Biryani".into(),
        price,
        quantity,
    }
}

#[tokio::test]
async fn order_lifecycle_from_placement_to_payment() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::customer();

    let order = order_service::create_order(&state, &user, order_with(vec![line(12.5, 2), line(1.25, 4)]))
        .await?
        .data
        .expect("order");
    assert_eq!(order.user_email, common::CUSTOMER_EMAIL);
    assert_eq!(order.total_price, 30.0);
    assert_eq!(order.order_status, "pending");
    assert_eq!(order.payment_status, "pending");
    assert!(order.paid_at.is_none());
    assert_eq!(order.items.len(), 2);

    let accepted = order_service::update_order_status(
        &state,
        &common::admin(),
        order.id,
        UpdateOrderStatusRequest {
            order_status: "accepted".into(),
        },
    )
    .await?
    .data
    .expect("order");
    assert_eq!(accepted.order_status, "accepted");

    let paid = order_service::update_payment_status(
        &state,
        &user,
        order.id,
        UpdatePaymentStatusRequest {
            payment_status: "paid".into(),
        },
    )
    .await?
    .data
    .expect("order");
    assert_eq!(paid.payment_status, "paid");
    assert!(paid.paid_at.is_some());

    let err = order_service::update_payment_status(
        &state,
        &user,
        order.id,
        UpdatePaymentStatusRequest {
            payment_status: "paid".into(),
        },
    )
    .await
    .expect_err("paid twice");
    assert!(matches!(err, AppError::BadRequest(_)));

    let listed = order_service::list_orders(
        &state,
        OrderQuery {
            user_email: Some(common::CUSTOMER_EMAIL.into()),
            ..Default::default()
        },
    )
    .await?
    .data
    .expect("orders");
    assert_eq!(listed.len(), 1);
    Ok(())
}

#[tokio::test]
async fn invalid_orders_are_rejected() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::customer();

    let err = order_service::create_order(&state, &user, order_with(vec![]))
        .await
        .expect_err("no items");
    assert!(matches!(err, AppError::BadRequest(_)));

    let err = order_service::create_order(&state, &user, order_with(vec![line(5.0, 0)]))
        .await
        .expect_err("zero quantity");
    assert!(matches!(err, AppError::BadRequest(_)));

    let order = order_service::create_order(&state, &user, order_with(vec![line(5.0, 1)]))
        .await?
        .data
        .expect("order");
    let err = order_service::update_order_status(
        &state,
        &user,
        order.id,
        UpdateOrderStatusRequest {
            order_status: "teleported".into(),
        },
    )
    .await
    .expect_err("unknown status");
    assert!(matches!(err, AppError::BadRequest(_)));

    let err = order_service::get_order(&state, Uuid::new_v4())
        .await
        .expect_err("missing order");
    assert!(matches!(err, AppError::NotFound));
    Ok(())
}

#[tokio::test]
async fn payment_intent_uses_minor_units() -> anyhow::Result<()> {
    let (state, gateway) = common::setup_state_with_gateway().await?;

    let intent = payment_service::create_payment_intent(
        &state,
        &common::customer(),
        CreatePaymentIntentRequest {
            price: 19.99,
            currency: None,
        },
    )
    .await?
    .data
    .expect("intent");
    assert_eq!(intent.amount, 1999);
    assert_eq!(intent.currency, "usd");
    assert!(intent.client_secret.starts_with("pi_1"));

    let calls = gateway.calls.lock().expect("gateway lock").clone();
    assert_eq!(calls, vec![(1999, "usd".to_string())]);

    let err = payment_service::create_payment_intent(
        &state,
        &common::customer(),
        CreatePaymentIntentRequest {
            price: 0.0,
            currency: None,
        },
    )
    .await
    .expect_err("zero price");
    assert!(matches!(err, AppError::BadRequest(_)));
    assert_eq!(gateway.calls.lock().expect("gateway lock").len(), 1);
    Ok(())
}

#[tokio::test]
async fn payment_history_is_appended_and_filtered() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    for (user, tx) in [
        (common::customer(), "tx_1"),
        (common::customer(), "tx_2"),
        (common::admin(), "tx_3"),
    ] {
        payment_service::record_payment(
            &state,
            &user,
            RecordPaymentRequest {
                order_id: None,
                user_email: None,
                amount: 10.0,
                currency: Some("USD".into()),
                transaction_id: tx.into(),
            },
        )
        .await?;
    }

    let mine = payment_service::list_payments(
        &state,
        PaymentHistoryQuery {
            user_email: Some(common::CUSTOMER_EMAIL.into()),
        },
    )
    .await?
    .data
    .expect("payments");
    assert_eq!(mine.len(), 2);
    assert!(mine.iter().all(|p| p.currency == "usd"));

    let err = payment_service::record_payment(
        &state,
        &common::customer(),
        RecordPaymentRequest {
            order_id: None,
            user_email: None,
            amount: 10.0,
            currency: None,
            transaction_id: "  ".into(),
        },
    )
    .await
    .expect_err("blank transaction id");
    assert!(matches!(err, AppError::BadRequest(_)));
    Ok(())
}
