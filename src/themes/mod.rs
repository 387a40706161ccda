//! Theme system for color management
//!
//! See theme.rs for the Theme struct and color utilities.

pub mod theme;

pub use theme::Theme;
