//! Stripe payment-intent client.
//!
//! Only the one call this site needs: create a usd payment intent with
//! donor metadata. Stripe's API is form-encoded with bearer auth.

use serde::Deserialize;

use super::ProviderError;

const DEFAULT_BASE_URL: &str = "https://api.stripe.com";

/// Parameters for a new payment intent
#[derive(Debug, Clone)]
pub struct PaymentIntentParams {
    pub amount_cents: i64,
    pub donor_email: Option<String>,
    pub donor_name: Option<String>,
    pub recurring: bool,
}

/// The slice of Stripe's payment-intent object we use
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
}

#[derive(Clone)]
pub struct StripeClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl StripeClient {
    pub fn new(api_key: String) -> Result<Self, ProviderError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_owned())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Result<Self, ProviderError> {
        if api_key.trim().is_empty() {
            return Err(ProviderError::MissingApiKey);
        }
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            api_key,
            base_url,
        })
    }

    /// POST /v1/payment_intents
    pub async fn create_payment_intent(
        &self,
        params: PaymentIntentParams,
    ) -> Result<PaymentIntent, ProviderError> {
        let amount = params.amount_cents.to_string();
        let recurring = if params.recurring { "true" } else { "false" };
        let form = [
            ("amount", amount.as_str()),
            ("currency", "usd"),
            (
                "metadata[donor_email]",
                params.donor_email.as_deref().unwrap_or(""),
            ),
            (
                "metadata[donor_name]",
                params.donor_name.as_deref().unwrap_or(""),
            ),
            ("metadata[recurring]", recurring),
        ];

        let intent = self
            .http
            .post(format!("{}/v1/payment_intents", self.base_url))
            .bearer_auth(&self.api_key)
            .form(&form)
            .send()
            .await?
            .error_for_status()?
            .json::<PaymentIntent>()
            .await?;

        tracing::debug!(intent_id = %intent.id, "payment intent created");
        Ok(intent)
    }
}
