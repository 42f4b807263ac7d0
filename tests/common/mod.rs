#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use chef_bazaar_api::{
    auth::{AuthError, IdentityVerifier, Principal},
    db::{create_memory_conn, run_migrations},
    entity::{meals::ActiveModel as MealActive, users::ActiveModel as UserActive},
    middleware::auth::AuthUser,
    payments::{GatewayError, PaymentGateway, PaymentIntent},
    state::AppState,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, Set};
use uuid::Uuid;

pub const CUSTOMER_TOKEN: &str = "customer-token";
pub const CUSTOMER_EMAIL: &str = "customer@example.com";
pub const ADMIN_TOKEN: &str = "admin-token";
pub const ADMIN_EMAIL: &str = "admin@example.com";

/// Accepts a fixed set of tokens.
pub struct StaticVerifier {
    tokens: HashMap<String, Principal>,
}

impl StaticVerifier {
    pub fn new() -> Self {
        let mut tokens = HashMap::new();
        for (token, email) in [(CUSTOMER_TOKEN, CUSTOMER_EMAIL), (ADMIN_TOKEN, ADMIN_EMAIL)] {
            tokens.insert(
                token.to_string(),
                Principal {
                    email: email.to_string(),
                    subject: format!("uid-{email}"),
                },
            );
        }
        Self { tokens }
    }
}

#[async_trait]
impl IdentityVerifier for StaticVerifier {
    async fn verify(&self, token: &str) -> Result<Principal, AuthError> {
        self.tokens
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}

/// Records every intent request instead of calling a provider.
#[derive(Default)]
pub struct FakeGateway {
    pub calls: Mutex<Vec<(i64, String)>>,
}

#[async_trait]
impl PaymentGateway for FakeGateway {
    async fn create_intent(
        &self,
        amount_minor: i64,
        currency: &str,
    ) -> Result<PaymentIntent, GatewayError> {
        let mut calls = self.calls.lock().expect("gateway lock");
        calls.push((amount_minor, currency.to_string()));
        Ok(PaymentIntent {
            id: format!("pi_{}", calls.len()),
            client_secret: format!("pi_{}_secret_test", calls.len()),
            amount: amount_minor,
            currency: currency.to_string(),
        })
    }
}

pub async fn setup_state() -> anyhow::Result<AppState> {
    let (state, _) = setup_state_with_gateway().await?;
    Ok(state)
}

pub async fn setup_state_with_gateway() -> anyhow::Result<(AppState, Arc<FakeGateway>)> {
    let orm = create_memory_conn().await?;
    run_migrations(&orm).await?;
    let gateway = Arc::new(FakeGateway::default());
    let state = AppState::new(orm, Arc::new(StaticVerifier::new()), gateway.clone());
    Ok((state, gateway))
}

pub fn customer() -> AuthUser {
    AuthUser {
        email: CUSTOMER_EMAIL.to_string(),
        subject: format!("uid-{CUSTOMER_EMAIL}"),
    }
}

pub fn admin() -> AuthUser {
    AuthUser {
        email: ADMIN_EMAIL.to_string(),
        subject: format!("uid-{ADMIN_EMAIL}"),
    }
}

pub async fn insert_meal(state: &AppState, name: &str, price: f64) -> anyhow::Result<Uuid> {
    let meal = MealActive {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        chef_name: Set("Test Chef".to_string()),
        chef_id: Set(Some("CHEF-1".to_string())),
        chef_email: Set(Some("chef@example.com".to_string())),
        image: Set(None),
        price: Set(price),
        rating: Set(0.0),
        ingredients: Set(serde_json::json!(["rice"])),
        estimated_delivery_time: Set(None),
        delivery_area: Set(None),
        chef_experience: Set(None),
        details: Set(None),
        created_at: Set(Utc::now().into()),
    }
    .insert(&state.orm)
    .await?;
    Ok(meal.id)
}

pub async fn insert_user(state: &AppState, email: &str, role: &str) -> anyhow::Result<Uuid> {
    insert_user_with_chef_id(state, email, role, None).await
}

pub async fn insert_user_with_chef_id(
    state: &AppState,
    email: &str,
    role: &str,
    chef_id: Option<&str>,
) -> anyhow::Result<Uuid> {
    let user = UserActive {
        id: Set(Uuid::new_v4()),
        email: Set(email.to_string()),
        name: Set(None),
        photo_url: Set(None),
        address: Set(None),
        role: Set(role.to_string()),
        status: Set("active".to_string()),
        chef_id: Set(chef_id.map(str::to_string)),
        created_at: Set(Utc::now().into()),
    }
    .insert(&state.orm)
    .await?;
    Ok(user.id)
}
