//! Thin reqwest clients for the payment and language-model providers.
//!
//! Both clients take a base URL so tests can point them at a local mock
//! server; production code uses the defaults.

pub mod assistant;
pub mod stripe;

pub use assistant::AssistantClient;
pub use stripe::{PaymentIntent, StripeClient};

use thiserror::Error;

/// Error from an outbound provider call
#[derive(Error, Debug)]
pub enum ProviderError {
    /// API key missing or empty at construction
    #[error("API key is missing or empty")]
    MissingApiKey,

    /// HTTP transport or non-2xx status
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response parsed but didn't contain what we need
    #[error("unexpected response: {reason}")]
    UnexpectedResponse { reason: &'static str },
}
