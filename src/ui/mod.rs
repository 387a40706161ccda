//! UI components module
//!
//! Reusable UI components for the dashboard: themed panels and glyphs.

pub mod borders;
pub mod panels;

pub use borders::Separators;
pub use panels::{Panel, PanelStyle};
