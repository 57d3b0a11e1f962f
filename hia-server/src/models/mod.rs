//! Request models with validation.
//!
//! The store trusts its input, so every request body is validated here
//! before anything is inserted or forwarded. Invalid input returns
//! ValidationError, not panic.

pub mod chat;
pub mod contact;
pub mod donation;
pub mod validation;

pub use chat::ChatRequest;
pub use contact::ContactForm;
pub use donation::{DonationNotice, PaymentIntentRequest, MIN_DONATION_CENTS};
pub use validation::ValidationError;
