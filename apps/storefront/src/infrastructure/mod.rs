//! Infrastructure Layer
//!
//! Adapters for the ports defined in the application layer:
//!
//! - `rates/`, `shipping/`: table-driven providers loaded from configuration
//! - `payment/`: sandbox payment processor
//! - `email/`: email sender that records deliveries in the log
//! - `analytics/`: page-view tracking through tracing and metrics
//! - `security_code/`: random one-time codes
//! - `clock/`: system and fixed clocks
//! - `config/`: dependency injection container

pub mod analytics;
pub mod clock;
pub mod config;
pub mod email;
pub mod payment;
pub mod rates;
pub mod security_code;
pub mod shipping;
