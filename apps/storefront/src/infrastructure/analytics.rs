//! Page-view tracking through tracing and the `metrics` facade.

use metrics::{counter, describe_counter};

use crate::application::ports::AnalyticsPort;

/// Counter incremented for every tracked page view, labelled by `path`.
pub const PAGE_VIEWS_METRIC: &str = "storefront_page_views_total";

/// Register metric descriptions with the installed recorder.
pub fn describe_metrics() {
    describe_counter!(PAGE_VIEWS_METRIC, "Total page views by path");
}

/// Analytics adapter that logs each view and bumps a counter.
///
/// Without an installed metrics recorder the counter is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAnalytics;

impl AnalyticsPort for TracingAnalytics {
    fn track_page_view(&self, path: &str) {
        counter!(PAGE_VIEWS_METRIC, "path" => path.to_string()).increment(1);
        tracing::info!(path, "Page view");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracking_without_recorder_is_harmless() {
        describe_metrics();
        TracingAnalytics.track_page_view("/home");
    }
}
