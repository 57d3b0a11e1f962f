//! Route handlers organized by resource

pub mod assistant;
pub mod contact;
pub mod donations;
pub mod health;
