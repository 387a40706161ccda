//! Reusable panel components
//!
//! Provides styled panels with consistent theming.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding};

use crate::themes::Theme;

/// Panel style variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelStyle {
    /// Default panel style
    #[default]
    Default,
    /// Error state (highlighted border and title)
    Error,
}

/// A styled panel component
#[derive(Clone)]
pub struct Panel<'a> {
    title: Option<&'a str>,
    style: PanelStyle,
    theme: &'a Theme,
    padding: Padding,
}

impl<'a> Panel<'a> {
    /// Create a new panel with the given theme
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            title: None,
            style: PanelStyle::Default,
            theme,
            padding: Padding::uniform(1),
        }
    }

    /// Set the panel title
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Set the panel style
    pub fn style(mut self, style: PanelStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the padding
    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Build the Block widget
    pub fn block(&self) -> Block<'a> {
        let (border_color, title_color) = match self.style {
            PanelStyle::Default => (self.theme.border, self.theme.text_secondary),
            PanelStyle::Error => (self.theme.error, self.theme.error),
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .padding(self.padding);

        if let Some(title) = self.title {
            block = block
                .title(title)
                .title_style(Style::default().fg(title_color).bold());
        }

        block
    }
}
