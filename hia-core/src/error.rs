//! Store error type.
//!
//! The store signals lookup misses with `None`, never an error. The only
//! failure it can produce is a duplicate username on account creation.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Username is already registered to another account
    #[error("username '{username}' is already taken")]
    UsernameTaken { username: String },
}
