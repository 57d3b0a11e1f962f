//! Contact-form request model

use hia_core::NewContact;
use serde::Deserialize;

use super::validation::{required, required_email, ValidationError};

/// Contact form body as posted by the site
#[derive(Debug, Clone, Deserialize)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Interest category ("volunteering", "donating", "partnership", ...)
    pub interest: String,
    pub message: String,
}

impl ContactForm {
    /// Validate every field and produce store input.
    ///
    /// All five fields are required non-empty; email must look like an
    /// email. The store does not re-check any of this.
    pub fn validate(self) -> Result<NewContact, ValidationError> {
        Ok(NewContact {
            first_name: required("first_name", &self.first_name)?,
            last_name: required("last_name", &self.last_name)?,
            email: required_email("email", &self.email)?,
            interest: required("interest", &self.interest)?,
            message: required("message", &self.message)?,
        })
    }
}
