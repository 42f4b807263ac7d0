mod common;

use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use chef_bazaar_api::routes::create_app_router;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn send(app: axum::Router, request: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
    let response = app.oneshot(request).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), 1024 * 1024).await?;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    Ok((status, body))
}

fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("request")
}

#[tokio::test]
async fn mutations_without_bearer_are_unauthorized() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let app = create_app_router().with_state(state);

    let (status, body) = send(
        app.clone(),
        json_request("POST", "/meals", None, json!({ "name": "Biryani" })),
    )
    .await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["data"]["error"].is_string());

    let (status, _) = send(
        app,
        json_request("POST", "/favorites", Some("forged"), json!({})),
    )
    .await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn reads_are_anonymous() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let app = create_app_router().with_state(state);

    let request = Request::builder().uri("/meals").body(Body::empty())?;
    let (status, body) = send(app.clone(), request).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["totalMeals"], 0);

    let request = Request::builder().uri("/").body(Body::empty())?;
    let response = app.oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn meal_created_with_string_price_is_listed() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let app = create_app_router().with_state(state);

    let (status, body) = send(
        app.clone(),
        json_request(
            "POST",
            "/meals",
            Some(common::CUSTOMER_TOKEN),
            json!({
                "name": "Biryani",
                "chefName": "Rahima",
                "price": "12.50",
                "ingredients": ["rice", "chicken"]
            }),
        ),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["price"], 12.5);
    assert_eq!(body["data"]["rating"], 0.0);
    assert_eq!(body["data"]["chefEmail"], common::CUSTOMER_EMAIL);

    let request = Request::builder()
        .uri("/meals?page=1&limit=5")
        .body(Body::empty())?;
    let (status, body) = send(app, request).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["totalMeals"], 1);
    assert_eq!(body["data"]["meals"][0]["name"], "Biryani");
    Ok(())
}

#[tokio::test]
async fn bad_input_maps_to_client_errors() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let app = create_app_router().with_state(state);

    let request = Request::builder().uri("/meals/not-a-uuid").body(Body::empty())?;
    let (status, _) = send(app.clone(), request).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let request = Request::builder()
        .uri(format!("/orders/{}", uuid::Uuid::new_v4()))
        .body(Body::empty())?;
    let (status, _) = send(app.clone(), request).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        app.clone(),
        json_request(
            "PATCH",
            &format!("/requests/{}", uuid::Uuid::new_v4()),
            Some(common::ADMIN_TOKEN),
            json!({ "requestStatus": "approved" }),
        ),
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let request = Request::builder().uri("/nowhere").body(Body::empty())?;
    let (status, body) = send(app, request).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["data"]["path"], "/nowhere");
    Ok(())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

#[tokio::test]
async fn huge_page_is_a_bad_request() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let app = create_app_router().with_state(state);

    let (status, body) = send(app.clone(), get("/meals?page=18446744073709551615&limit=100")).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["data"]["error"].is_string());

    let (status, _) = send(app, get("/orders?page=18446744073709551615")).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn chef_request_approval_over_http() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let app = create_app_router().with_state(state);

    let (status, body) = send(
        app.clone(),
        json_request(
            "POST",
            "/users",
            Some(common::CUSTOMER_TOKEN),
            json!({ "name": "Home Cook", "photoURL": "https://img.example/cook.png" }),
        ),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["role"], "user");

    let (status, body) = send(
        app.clone(),
        json_request(
            "POST",
            "/requests",
            Some(common::CUSTOMER_TOKEN),
            json!({ "userName": "Home Cook", "requestType": "chef" }),
        ),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["requestStatus"], "pending");
    assert_eq!(body["data"]["userEmail"], common::CUSTOMER_EMAIL);
    let request_id = body["data"]["id"].as_str().expect("request id").to_string();

    let (status, body) = send(
        app.clone(),
        json_request(
            "PATCH",
            &format!("/requests/{request_id}"),
            Some(common::ADMIN_TOKEN),
            json!({ "requestStatus": "approved" }),
        ),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["modifiedCount"], 1);
    assert_eq!(body["data"]["requestStatus"], "approved");

    let (status, body) = send(app, get(&format!("/users/{}", common::CUSTOMER_EMAIL))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["role"], "chef");
    let chef_id = body["data"]["chefId"].as_str().expect("chef id");
    let digits = chef_id.strip_prefix("CHEF-").expect("CHEF- prefix");
    assert!(!digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()));
    Ok(())
}

#[tokio::test]
async fn review_changes_update_meal_rating_over_http() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let app = create_app_router().with_state(state);

    let (status, body) = send(
        app.clone(),
        json_request(
            "POST",
            "/meals",
            Some(common::CUSTOMER_TOKEN),
            json!({ "name": "Biryani", "chefName": "Rahima", "price": 12.5 }),
        ),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    let meal_id = body["data"]["id"].as_str().expect("meal id").to_string();

    let mut review_ids = Vec::new();
    for rating in [json!(4), json!("2")] {
        let (status, body) = send(
            app.clone(),
            json_request(
                "POST",
                "/reviews",
                Some(common::CUSTOMER_TOKEN),
                json!({ "foodId": meal_id, "rating": rating, "comment": "ok" }),
            ),
        )
        .await?;
        assert_eq!(status, StatusCode::OK);
        review_ids.push(body["data"]["id"].as_str().expect("review id").to_string());
    }

    let (_, body) = send(app.clone(), get(&format!("/meals/{meal_id}"))).await?;
    assert_eq!(body["data"]["rating"], 3.0);

    let (status, _) = send(
        app.clone(),
        json_request(
            "DELETE",
            &format!("/reviews/{}", review_ids[0]),
            Some(common::CUSTOMER_TOKEN),
            json!({}),
        ),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(app.clone(), get(&format!("/meals/{meal_id}"))).await?;
    assert_eq!(body["data"]["rating"], 2.0);

    send(
        app.clone(),
        json_request(
            "DELETE",
            &format!("/reviews/{}", review_ids[1]),
            Some(common::CUSTOMER_TOKEN),
            json!({}),
        ),
    )
    .await?;

    let (_, body) = send(app, get(&format!("/meals/{meal_id}"))).await?;
    assert_eq!(body["data"]["rating"], 0.0);
    Ok(())
}
