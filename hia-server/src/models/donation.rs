//! Donation request models.
//!
//! Amounts are integer cents on the wire and in the store; the front end
//! owns dollar formatting.

use hia_core::NewDonation;
use serde::Deserialize;

use super::validation::{required, ValidationError};

/// Minimum accepted donation: $0.50, Stripe's own floor for card charges.
pub const MIN_DONATION_CENTS: i64 = 50;

/// Body for POST /api/create-payment-intent
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntentRequest {
    pub amount_cents: i64,
    #[serde(default)]
    pub donor_email: Option<String>,
    #[serde(default)]
    pub donor_name: Option<String>,
    #[serde(default)]
    pub recurring: bool,
}

impl PaymentIntentRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.amount_cents < MIN_DONATION_CENTS {
            return Err(ValidationError::TooSmall {
                field: "amount_cents",
                min: MIN_DONATION_CENTS,
            });
        }
        Ok(())
    }
}

/// Body for POST /api/donation-success, sent after the payment processor
/// confirms the charge
#[derive(Debug, Clone, Deserialize)]
pub struct DonationNotice {
    pub payment_intent_id: String,
    pub amount_cents: i64,
    #[serde(default)]
    pub donor_email: Option<String>,
    #[serde(default)]
    pub donor_name: Option<String>,
    #[serde(default)]
    pub recurring: bool,
}

impl DonationNotice {
    /// Validate and produce store input. The processor reference is the one
    /// required field; donor identity stays optional (anonymous donations).
    /// The amount is recorded as confirmed, whatever it is - the charge
    /// already happened.
    pub fn validate(self) -> Result<NewDonation, ValidationError> {
        let payment_intent_id = required("payment_intent_id", &self.payment_intent_id)?;
        Ok(NewDonation {
            amount_cents: self.amount_cents,
            donor_email: self.donor_email.filter(|e| !e.trim().is_empty()),
            donor_name: self.donor_name.filter(|n| !n.trim().is_empty()),
            payment_intent_id,
            recurring: self.recurring,
        })
    }
}
