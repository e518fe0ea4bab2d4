//! Shared Value Objects
//!
//! Immutable domain types compared by value, not identity.

mod currency;
mod email;
mod money;

pub use currency::CurrencyCode;
pub use email::EmailAddress;
pub use money::Money;
