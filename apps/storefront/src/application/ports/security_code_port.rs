//! Security Code Port (Driven Port)

/// Port for one-time login codes.
#[cfg_attr(test, mockall::automock)]
pub trait SecurityCodePort: Send + Sync {
    /// Produce a fresh numeric code.
    fn generate_code(&self) -> u32;
}
