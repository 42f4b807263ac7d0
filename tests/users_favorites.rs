mod common;

use chef_bazaar_api::{
    dto::{
        favorites::AddFavoriteRequest,
        users::{CreateUserRequest, UpdateRoleRequest, UpdateStatusRequest},
    },
    entity::{Favorites, Users},
    error::AppError,
    models::Role,
    routes::params::FavoriteQuery,
    services::{favorite_service, user_service},
};
use sea_orm::{EntityTrait, PaginatorTrait};
use uuid::Uuid;

fn favorite(meal_id: Uuid) -> AddFavoriteRequest {
    AddFavoriteRequest {
        user_email: None,
        meal_id,
        meal_name: None,
        chef_id: None,
        chef_name: None,
        price: None,
        image: None,
    }
}

#[tokio::test]
async fn creating_the_same_user_twice_returns_the_existing_record() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::customer();

    let first = user_service::create_user(
        &state,
        &user,
        CreateUserRequest {
            name: Some("First Name".into()),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(first.message, "User created");
    let first = first.data.expect("user");
    assert_eq!(first.email, common::CUSTOMER_EMAIL);
    assert_eq!(first.role, "user");
    assert_eq!(first.status, "active");

    let second = user_service::create_user(
        &state,
        &user,
        CreateUserRequest {
            name: Some("Other Name".into()),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(second.message, "User already exists");
    let second = second.data.expect("user");
    assert_eq!(second.id, first.id);
    assert_eq!(second.name.as_deref(), Some("First Name"));

    assert_eq!(Users::find().count(&state.orm).await?, 1);
    Ok(())
}

#[tokio::test]
async fn role_and_status_updates_target_the_email() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    common::insert_user(&state, "cook@example.com", "user").await?;

    let updated = user_service::update_role(
        &state,
        &common::admin(),
        "cook@example.com",
        UpdateRoleRequest {
            role: Some(Role::Chef),
            chef_id: Some("CHEF-42".into()),
            ..Default::default()
        },
    )
    .await?
    .data
    .expect("user");
    assert_eq!(updated.role, "chef");
    assert_eq!(updated.chef_id.as_deref(), Some("CHEF-42"));

    let updated = user_service::update_status(
        &state,
        &common::admin(),
        "cook@example.com",
        UpdateStatusRequest {
            status: "fraud".into(),
        },
    )
    .await?
    .data
    .expect("user");
    assert_eq!(updated.status, "fraud");

    let err = user_service::update_status(
        &state,
        &common::admin(),
        "missing@example.com",
        UpdateStatusRequest {
            status: "active".into(),
        },
    )
    .await
    .expect_err("unknown email");
    assert!(matches!(err, AppError::NotFound));
    Ok(())
}

#[tokio::test]
async fn duplicate_favorite_conflicts_and_stores_one_record() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::customer();
    let meal_id = common::insert_meal(&state, "Biryani", 12.5).await?;

    let added = favorite_service::add_favorite(&state, &user, favorite(meal_id))
        .await?
        .data
        .expect("favorite");
    assert_eq!(added.user_email, common::CUSTOMER_EMAIL);
    assert_eq!(added.meal_name.as_deref(), Some("Biryani"));
    assert_eq!(added.price, Some(12.5));

    let err = favorite_service::add_favorite(&state, &user, favorite(meal_id))
        .await
        .expect_err("duplicate favorite");
    assert!(matches!(err, AppError::Conflict(_)));
    assert_eq!(Favorites::find().count(&state.orm).await?, 1);

    // Another user may favorite the same meal.
    favorite_service::add_favorite(&state, &common::admin(), favorite(meal_id)).await?;
    assert_eq!(Favorites::find().count(&state.orm).await?, 2);
    Ok(())
}

#[tokio::test]
async fn favorite_requires_an_existing_meal() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    let err = favorite_service::add_favorite(&state, &common::customer(), favorite(Uuid::new_v4()))
        .await
        .expect_err("unknown meal");
    assert!(matches!(err, AppError::BadRequest(_)));
    assert_eq!(Favorites::find().count(&state.orm).await?, 0);
    Ok(())
}

#[tokio::test]
async fn favorites_list_filters_by_user_and_remove_deletes() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let first = common::insert_meal(&state, "Biryani", 12.5).await?;
    let second = common::insert_meal(&state, "Pitha", 5.5).await?;

    let mine = favorite_service::add_favorite(&state, &common::customer(), favorite(first))
        .await?
        .data
        .expect("favorite");
    favorite_service::add_favorite(&state, &common::customer(), favorite(second)).await?;
    favorite_service::add_favorite(&state, &common::admin(), favorite(first)).await?;

    let listed = favorite_service::list_favorites(
        &state,
        FavoriteQuery {
            user_email: Some(common::CUSTOMER_EMAIL.into()),
            page: Some(1),
            limit: Some(1),
        },
    )
    .await?;
    let meta = listed.meta.expect("meta");
    assert_eq!(meta.total, Some(2));
    assert_eq!(meta.total_pages, Some(2));
    assert_eq!(listed.data.expect("favorites").len(), 1);

    favorite_service::remove_favorite(&state, &common::customer(), mine.id).await?;
    let err = favorite_service::remove_favorite(&state, &common::customer(), mine.id)
        .await
        .expect_err("already removed");
    assert!(matches!(err, AppError::NotFound));
    assert_eq!(Favorites::find().count(&state.orm).await?, 2);
    Ok(())
}
