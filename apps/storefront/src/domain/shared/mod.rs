//! Shared Domain Types
//!
//! Value objects and errors shared across the storefront workflows.

pub mod errors;
pub mod value_objects;

pub use errors::DomainError;
pub use value_objects::{CurrencyCode, EmailAddress, Money};
