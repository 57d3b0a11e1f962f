//! hia-core: domain records and the in-memory store backing the HIA site.
//!
//! Everything in this crate is synchronous, in-memory computation. Handlers
//! own validation and serialization; the store owns identity, timestamps,
//! and insertion order.

pub mod error;
pub mod records;
pub mod store;

pub use error::StoreError;
pub use records::{Account, ContactSubmission, Donation, NewAccount, NewContact, NewDonation};
pub use store::MemStore;
