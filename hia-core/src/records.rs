//! Domain records held by the store.
//!
//! Stored records (`Account`, `ContactSubmission`, `Donation`) are immutable
//! once inserted: ids and `created_at` timestamps are assigned by the store,
//! never taken from input. The `New*` structs carry caller-validated input;
//! shape validation happens in the handler layer before the store is invoked.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A registered account. No uniqueness beyond username is tracked.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Account {
    pub id: u64,
    pub username: String,
    /// Opaque credential secret, stored verbatim
    pub password: String,
}

/// Input for account creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub username: String,
    pub password: String,
}

/// A contact-form submission, retained indefinitely for admin review
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ContactSubmission {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Free-form interest category ("volunteering", "donating", ...)
    pub interest: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Input for contact-form submission. All fields required non-empty,
/// enforced by the handler layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub interest: String,
    pub message: String,
}

/// A recorded donation, created after external payment confirmation.
///
/// Amounts are integer cents throughout; conversion to display dollars is a
/// front-end concern.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Donation {
    pub id: u64,
    pub amount_cents: i64,
    pub donor_email: Option<String>,
    pub donor_name: Option<String>,
    /// Opaque reference id issued by the payment processor
    pub payment_intent_id: String,
    pub recurring: bool,
    pub created_at: DateTime<Utc>,
}

/// Input for recording a donation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDonation {
    pub amount_cents: i64,
    pub donor_email: Option<String>,
    pub donor_name: Option<String>,
    pub payment_intent_id: String,
    /// Defaults to false when the caller omits it
    pub recurring: bool,
}
