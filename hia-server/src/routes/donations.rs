//! Donation endpoints: payment-intent creation, bookkeeping, and stats.
//!
//! The flow mirrors the payment processor's: the front end asks for a
//! payment intent, completes the charge client-side, then posts back the
//! confirmed intent so the donation is recorded.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use hia_core::Donation;

use crate::clients::stripe::PaymentIntentParams;
use crate::error::ApiError;
use crate::models::{DonationNotice, PaymentIntentRequest};
use crate::state::AppState;

/// How many donations /donation-stats echoes back
const RECENT_DONATIONS: usize = 10;

#[derive(Serialize)]
pub struct PaymentIntentCreated {
    pub client_secret: String,
}

#[derive(Serialize)]
pub struct DonationRecorded {
    pub success: bool,
    pub donation: Donation,
}

#[derive(Serialize)]
pub struct DonationStats {
    pub total_donations: usize,
    pub total_amount_cents: i64,
    pub recent_donations: Vec<Donation>,
}

/// POST /api/create-payment-intent
async fn create_payment_intent(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PaymentIntentRequest>,
) -> Result<Json<PaymentIntentCreated>, ApiError> {
    req.validate()?;

    let intent = state
        .stripe
        .create_payment_intent(PaymentIntentParams {
            amount_cents: req.amount_cents,
            donor_email: req.donor_email,
            donor_name: req.donor_name,
            recurring: req.recurring,
        })
        .await
        .map_err(|source| ApiError::Upstream {
            service: "stripe",
            source,
        })?;

    Ok(Json(PaymentIntentCreated {
        client_secret: intent.client_secret,
    }))
}

/// POST /api/donation-success - record a confirmed donation
async fn donation_success(
    State(state): State<Arc<AppState>>,
    Json(notice): Json<DonationNotice>,
) -> Result<(StatusCode, Json<DonationRecorded>), ApiError> {
    let input = notice.validate()?;
    let donation = state.store.create_donation(input);
    tracing::info!(
        id = donation.id,
        amount_cents = donation.amount_cents,
        recurring = donation.recurring,
        "donation recorded"
    );

    Ok((
        StatusCode::CREATED,
        Json(DonationRecorded {
            success: true,
            donation,
        }),
    ))
}

/// GET /api/donation-stats
async fn donation_stats(State(state): State<Arc<AppState>>) -> Json<DonationStats> {
    let donations = state.store.donations();
    let total_amount_cents = state.store.total_donated_cents();
    let skip = donations.len().saturating_sub(RECENT_DONATIONS);

    Json(DonationStats {
        total_donations: donations.len(),
        total_amount_cents,
        recent_donations: donations.into_iter().skip(skip).collect(),
    })
}

/// Donation routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/create-payment-intent", post(create_payment_intent))
        .route("/donation-success", post(donation_success))
        .route("/donation-stats", get(donation_stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{test_state, test_state_with_urls};
    use httpmock::prelude::*;

    fn notice(amount_cents: i64, intent: &str) -> DonationNotice {
        DonationNotice {
            payment_intent_id: intent.into(),
            amount_cents,
            donor_email: None,
            donor_name: None,
            recurring: false,
        }
    }

    #[tokio::test]
    async fn undersized_amount_never_reaches_stripe() {
        let state = Arc::new(test_state());
        let result = create_payment_intent(
            State(state),
            Json(PaymentIntentRequest {
                amount_cents: 10,
                donor_email: None,
                donor_name: None,
                recurring: false,
            }),
        )
        .await;

        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[tokio::test]
    async fn payment_intent_returns_client_secret() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/payment_intents");
                then.status(200).json_body(serde_json::json!({
                    "id": "pi_abc",
                    "client_secret": "pi_abc_secret"
                }));
            })
            .await;

        let state = Arc::new(test_state_with_urls(
            server.base_url(),
            "http://127.0.0.1:1".into(),
        ));
        let Json(created) = create_payment_intent(
            State(state),
            Json(PaymentIntentRequest {
                amount_cents: 5000,
                donor_email: Some("ada@example.org".into()),
                donor_name: Some("Ada".into()),
                recurring: true,
            }),
        )
        .await
        .unwrap();

        assert_eq!(created.client_secret, "pi_abc_secret");
    }

    #[tokio::test]
    async fn stripe_failure_maps_to_upstream_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/payment_intents");
                then.status(500);
            })
            .await;

        let state = Arc::new(test_state_with_urls(
            server.base_url(),
            "http://127.0.0.1:1".into(),
        ));
        let result = create_payment_intent(
            State(state),
            Json(PaymentIntentRequest {
                amount_cents: 5000,
                donor_email: None,
                donor_name: None,
                recurring: false,
            }),
        )
        .await;

        assert!(matches!(
            result,
            Err(ApiError::Upstream {
                service: "stripe",
                ..
            })
        ));
    }

    #[tokio::test]
    async fn recorded_donations_show_up_in_stats() {
        let state = Arc::new(test_state());

        for (amount, intent) in [(500, "pi_1"), (250, "pi_2"), (1000, "pi_3")] {
            let (status, Json(recorded)) =
                donation_success(State(Arc::clone(&state)), Json(notice(amount, intent)))
                    .await
                    .unwrap();
            assert_eq!(status, StatusCode::CREATED);
            assert!(recorded.success);
        }

        let Json(stats) = donation_stats(State(state)).await;
        assert_eq!(stats.total_donations, 3);
        assert_eq!(stats.total_amount_cents, 1750);
        assert_eq!(stats.recent_donations.len(), 3);
    }

    #[tokio::test]
    async fn stats_keep_only_the_last_ten() {
        let state = Arc::new(test_state());
        for i in 0..13 {
            donation_success(
                State(Arc::clone(&state)),
                Json(notice(100, &format!("pi_{i}"))),
            )
            .await
            .unwrap();
        }

        let Json(stats) = donation_stats(State(state)).await;
        assert_eq!(stats.total_donations, 13);
        assert_eq!(stats.recent_donations.len(), 10);
        // Oldest three dropped, insertion order preserved
        assert_eq!(stats.recent_donations[0].payment_intent_id, "pi_3");
        assert_eq!(stats.recent_donations[9].payment_intent_id, "pi_12");
    }

    #[tokio::test]
    async fn missing_intent_id_is_rejected() {
        let state = Arc::new(test_state());
        let result = donation_success(State(state), Json(notice(500, ""))).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }
}
