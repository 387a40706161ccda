//! Dashboard widgets
//!
//! Each widget is a self-contained collaborator of the dashboard: it builds
//! itself, owns its data and refresh cycle, and hands back a subtree when asked.

use anyhow::Result;

use crate::dashboard::Element;

pub mod alerts;
pub mod chart;
pub mod chart_view;
pub mod feed;
pub mod market_overview;
pub mod news_feed;

pub use alerts::Alerts;
pub use chart_view::ChartView;
pub use market_overview::MarketOverview;
pub use news_feed::NewsFeed;

/// Mount contract for anything placed in a dashboard region
pub trait DashboardWidget {
    /// Construct the widget. Takes nothing from the dashboard; the widget
    /// reads its own configuration.
    fn mount() -> Result<Self>
    where
        Self: Sized;

    /// Produce the widget's subtree
    fn render(&self) -> Result<Element>;

    /// Advance the widget's own data lifecycle
    fn refresh(&mut self) {
        // Default: static content
    }
}
