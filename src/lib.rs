//! BlockVista Terminal
//!
//! A terminal dashboard that composes four independent widgets (market
//! overview, news feed, chart, alerts) into a fixed two-row layout.

pub mod app;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod themes;
pub mod ui;
pub mod widgets;

pub use app::App;
pub use dashboard::{DashboardRoot, Element, Region};
pub use error::CompositionError;
pub use widgets::DashboardWidget;
