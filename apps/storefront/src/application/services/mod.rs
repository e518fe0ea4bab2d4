//! Application Services
//!
//! Long-lived services that read ambient state through ports.

mod store_status;

pub use store_status::StoreStatusService;
