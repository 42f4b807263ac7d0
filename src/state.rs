use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{auth::IdentityVerifier, payments::PaymentGateway};

pub const DEFAULT_CURRENCY: &str = "usd";

/// Handles shared by every request. Built once in `main` and injected through axum state.
#[derive(Clone)]
pub struct AppState {
    pub orm: DatabaseConnection,
    pub verifier: Arc<dyn IdentityVerifier>,
    pub payments: Arc<dyn PaymentGateway>,
    pub currency: String,
}

impl AppState {
    pub fn new(
        orm: DatabaseConnection,
        verifier: Arc<dyn IdentityVerifier>,
        payments: Arc<dyn PaymentGateway>,
    ) -> Self {
        Self {
            orm,
            verifier,
            payments,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }
}
