//! Shared application state

use std::sync::Arc;

use hia_core::MemStore;

use crate::clients::{AssistantClient, StripeClient};

/// Application state shared across handlers.
///
/// The store is constructed once at startup and injected here; handlers
/// never reach for a global.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MemStore>,
    pub stripe: StripeClient,
    pub assistant: AssistantClient,
}

impl AppState {
    pub fn new(store: Arc<MemStore>, stripe: StripeClient, assistant: AssistantClient) -> Self {
        Self {
            store,
            stripe,
            assistant,
        }
    }
}

/// State with a fresh store and clients pointed at nothing in particular.
/// For handler tests that never reach a provider.
#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    test_state_with_urls("http://127.0.0.1:1".into(), "http://127.0.0.1:1".into())
}

/// State with provider clients pointed at mock servers.
#[cfg(test)]
pub(crate) fn test_state_with_urls(stripe_url: String, assistant_url: String) -> AppState {
    AppState::new(
        Arc::new(MemStore::new()),
        StripeClient::with_base_url("sk_test_key".into(), stripe_url).unwrap(),
        AssistantClient::with_base_url("test-key".into(), assistant_url).unwrap(),
    )
}
