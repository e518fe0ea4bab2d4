//! Application Layer
//!
//! The application layer runs storefront rules against external systems.
//! It defines:
//!
//! - **Ports**: Interfaces for the collaborators the storefront calls
//! - **Use Cases**: One workflow each (pricing, shipping, checkout, accounts)
//! - **Services**: Clock-driven store status

pub mod ports;
pub mod services;
pub mod use_cases;

pub use ports::*;
pub use services::*;
pub use use_cases::*;
