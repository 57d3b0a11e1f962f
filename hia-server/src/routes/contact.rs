//! Contact-form endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use hia_core::ContactSubmission;

use crate::error::ApiError;
use crate::models::ContactForm;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ContactCreated {
    pub success: bool,
    pub contact: ContactSubmission,
}

/// POST /api/contact - submit the contact form
async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(form): Json<ContactForm>,
) -> Result<(StatusCode, Json<ContactCreated>), ApiError> {
    let input = form.validate()?;
    let contact = state.store.create_contact(input);
    tracing::info!(id = contact.id, interest = %contact.interest, "contact submission recorded");

    Ok((
        StatusCode::CREATED,
        Json(ContactCreated {
            success: true,
            contact,
        }),
    ))
}

/// GET /api/contacts - list all submissions (admin use)
async fn list_contacts(State(state): State<Arc<AppState>>) -> Json<Vec<ContactSubmission>> {
    Json(state.store.contacts())
}

/// Contact routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/contact", post(submit_contact))
        .route("/contacts", get(list_contacts))
}
