// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::needless_pass_by_value
    )
)]

//! Storefront - Rust Core Library
//!
//! Checkout, account and store-status rules for a small web shop.
//!
//! # Architecture (Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Pure rules (no I/O, no clock)
//!   - `intro`: `max`, `fizz_buzz`
//!   - `ordering`: orders, payment instruments, charge and submit results
//!   - `shipping`: quotes and their checkout description
//!   - `store_hours`, `promotions`: time-based rules
//!
//! - **Application**: Workflows over ports
//!   - `ports`: one trait per collaborator (rates, shipping, analytics,
//!     payments, email, security codes, clock)
//!   - `use_cases`: pricing, shipping info, page render, order submission,
//!     sign-up, login
//!   - `services`: `StoreStatusService` (online check, daily discount)
//!
//! - **Infrastructure**: Local adapters and the `Container` that wires them
//!
//! Every collaborator is injected, so tests substitute doubles (see the
//! `mockall`-based tests next to each use case and under `tests/`).

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Layers
// =============================================================================

/// Domain layer - Pure storefront rules.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and wiring.
pub mod infrastructure;

// =============================================================================
// Cross-cutting
// =============================================================================

pub mod config;
pub mod error;
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

// Domain re-exports
pub use domain::intro::{fizz_buzz, max};
pub use domain::ordering::{ChargeResult, ChargeStatus, Order, PaymentInstrument, SubmitResult};
pub use domain::shared::{CurrencyCode, DomainError, EmailAddress, Money};
pub use domain::shipping::ShippingQuote;

// Application re-exports
pub use application::ports::{
    AnalyticsPort, ClockPort, EmailError, EmailMessage, EmailPort, ExchangeRateError,
    ExchangeRatePort, PaymentError, PaymentPort, SecurityCodePort, ShippingError, ShippingPort,
};
pub use application::services::StoreStatusService;
pub use application::use_cases::{
    GetPriceInCurrencyUseCase, GetShippingInfoUseCase, LoginUseCase, PricingError,
    RenderPageUseCase, SignUpUseCase, SubmitOrderUseCase,
};

// Infrastructure re-exports
pub use infrastructure::config::{Container, StorefrontContainer};

pub use error::ErrorCode;
