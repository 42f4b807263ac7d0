use chef_bazaar_api::{
    auth::{JwtVerifier, Principal},
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    entity::{
        Meals, Users,
        meals::{ActiveModel as MealActive, Column as MealCol},
        users::{ActiveModel as UserActive, Column as UserCol},
    },
    models::{Role, USER_STATUS_ACTIVE},
    services::{rating_service, request_service::generate_chef_id},
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    let admin = ensure_user(&orm, "admin@example.com", "Admin", Role::Admin, None).await?;
    let chef_id = generate_chef_id();
    let chef = ensure_user(&orm, "chef@example.com", "Rahima Begum", Role::Chef, Some(&chef_id)).await?;
    let customer = ensure_user(&orm, "user@example.com", "Customer", Role::User, None).await?;

    let chef_id = chef.chef_id.clone().unwrap_or(chef_id);
    seed_meals(&orm, &chef, &chef_id).await?;

    let refreshed = rating_service::recompute_all(&orm).await?;
    println!("Recomputed ratings for {refreshed} meals");

    // Development credentials, signed with JWT_SECRET.
    let verifier = JwtVerifier::new(&config.jwt_secret);
    for user in [&admin, &chef, &customer] {
        let principal = Principal {
            email: user.email.clone(),
            subject: user.id.to_string(),
        };
        let token = verifier.issue(&principal, chrono::Duration::days(7))?;
        println!("{} ({}): {token}", user.email, user.role);
    }

    println!("Seed completed");
    Ok(())
}

async fn ensure_user(
    orm: &DatabaseConnection,
    email: &str,
    name: &str,
    role: Role,
    chef_id: Option<&str>,
) -> anyhow::Result<chef_bazaar_api::entity::users::Model> {
    if let Some(existing) = Users::find()
        .filter(UserCol::Email.eq(email))
        .one(orm)
        .await?
    {
        return Ok(existing);
    }

    let user = UserActive {
        id: Set(Uuid::new_v4()),
        email: Set(email.to_string()),
        name: Set(Some(name.to_string())),
        photo_url: Set(None),
        address: Set(None),
        role: Set(role.as_str().to_string()),
        status: Set(USER_STATUS_ACTIVE.to_string()),
        chef_id: Set(chef_id.map(str::to_string)),
        created_at: Set(Utc::now().into()),
    }
    .insert(orm)
    .await?;

    Ok(user)
}

async fn seed_meals(
    orm: &DatabaseConnection,
    chef: &chef_bazaar_api::entity::users::Model,
    chef_id: &str,
) -> anyhow::Result<()> {
    let meals = vec![
        ("Chicken Biryani", 12.5, vec!["rice", "chicken", "saffron", "ghee"]),
        ("Vegetable Khichuri", 7.0, vec!["rice", "lentils", "turmeric"]),
        ("Beef Bhuna", 14.0, vec!["beef", "onion", "garlic", "chili"]),
        ("Pitha Platter", 5.5, vec!["rice flour", "jaggery", "coconut"]),
    ];

    let chef_name = chef.name.clone().unwrap_or_else(|| chef.email.clone());

    for (name, price, ingredients) in meals {
        let exists = Meals::find()
            .filter(MealCol::Name.eq(name))
            .filter(MealCol::ChefEmail.eq(chef.email.clone()))
            .one(orm)
            .await?
            .is_some();
        if exists {
            continue;
        }

        MealActive {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            chef_name: Set(chef_name.clone()),
            chef_id: Set(Some(chef_id.to_string())),
            chef_email: Set(Some(chef.email.clone())),
            image: Set(None),
            price: Set(price),
            rating: Set(0.0),
            ingredients: Set(serde_json::json!(ingredients)),
            estimated_delivery_time: Set(Some("45 minutes".to_string())),
            delivery_area: Set(Some("Dhaka".to_string())),
            chef_experience: Set(Some("5 years".to_string())),
            details: Set(None),
            created_at: Set(Utc::now().into()),
        }
        .insert(orm)
        .await?;
    }

    println!("Seeded meals");
    Ok(())
}
