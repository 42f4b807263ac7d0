use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Gateway rejected the request ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("Gateway response has no client secret")]
    MissingClientSecret,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
    pub amount: i64,
    pub currency: String,
}

/// Creates payment intents at an external provider. Amounts are in minor units.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_intent(
        &self,
        amount_minor: i64,
        currency: &str,
    ) -> Result<PaymentIntent, GatewayError>;
}

/// Converts a major-unit amount (e.g. dollars) to minor units (cents).
pub fn to_minor_units(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

pub struct StripeGateway {
    http: Client,
    api_base: String,
    secret_key: String,
}

#[derive(Debug, Deserialize)]
struct StripeIntent {
    id: String,
    client_secret: Option<String>,
    amount: i64,
    currency: String,
}

impl StripeGateway {
    pub fn new(http: Client, api_base: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            http,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            secret_key: secret_key.into(),
        }
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_intent(
        &self,
        amount_minor: i64,
        currency: &str,
    ) -> Result<PaymentIntent, GatewayError> {
        let url = format!("{}/v1/payment_intents", self.api_base);
        let amount = amount_minor.to_string();
        let params = [
            ("amount", amount.as_str()),
            ("currency", currency),
            ("payment_method_types[]", "card"),
        ];

        let response = self
            .http
            .post(url)
            .bearer_auth(&self.secret_key)
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(GatewayError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let intent = response.json::<StripeIntent>().await?;
        let client_secret = intent
            .client_secret
            .ok_or(GatewayError::MissingClientSecret)?;

        Ok(PaymentIntent {
            id: intent.id,
            client_secret,
            amount: intent.amount,
            currency: intent.currency,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minor_units_round_to_nearest_cent() {
        assert_eq!(to_minor_units(12.5), 1250);
        assert_eq!(to_minor_units(19.99), 1999);
        assert_eq!(to_minor_units(3.0), 300);
    }
}
