//! Census-assistant chat request model

use serde::Deserialize;

use super::validation::{required, ValidationError};

/// Body for POST /api/ai-census
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    pub fn validate(self) -> Result<String, ValidationError> {
        required("message", &self.message)
    }
}
