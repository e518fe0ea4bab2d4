//! Analytics Port (Driven Port)
//!
//! Fire-and-forget tracking of page views.

/// Port for analytics tracking.
#[cfg_attr(test, mockall::automock)]
pub trait AnalyticsPort: Send + Sync {
    /// Record a view of `path`. Never fails from the caller's point of view.
    fn track_page_view(&self, path: &str);
}
