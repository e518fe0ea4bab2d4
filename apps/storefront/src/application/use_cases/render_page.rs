//! Render Page Use Case

use std::sync::Arc;

use crate::application::ports::AnalyticsPort;

/// Path reported to analytics for the home page.
pub const HOME_PAGE_PATH: &str = "/home";

/// Use case for rendering the home page.
pub struct RenderPageUseCase<A>
where
    A: AnalyticsPort,
{
    analytics: Arc<A>,
}

impl<A> RenderPageUseCase<A>
where
    A: AnalyticsPort,
{
    /// Create a new RenderPageUseCase.
    pub const fn new(analytics: Arc<A>) -> Self {
        Self { analytics }
    }

    /// Render the page and record one view of it.
    pub fn execute(&self) -> String {
        self.analytics.track_page_view(HOME_PAGE_PATH);
        "<div>content</div>".to_string()
    }
}
