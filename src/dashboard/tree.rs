//! Renderable element tree
//!
//! `DashboardRoot::render` and every widget produce an [`Element`]. The tree is
//! plain data: it can be inspected structurally in tests and painted onto a
//! ratatui frame by the host.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use super::Region;
use crate::themes::Theme;
use crate::ui::borders::Separators;
use crate::ui::panels::{Panel, PanelStyle};
use crate::widgets::chart::{LineChart, Sparkline};

/// A node of the rendered dashboard
#[derive(Debug, Clone)]
pub enum Element {
    /// Outer container, children stacked top to bottom
    Container(Vec<Element>),
    /// Page title
    Heading(String),
    /// Row container, children laid out left to right with equal widths
    Row(Vec<Element>),
    /// Mount point of one widget
    Region { region: Region, child: Box<Element> },
    /// Bordered panel, children stacked top to bottom
    Panel {
        title: String,
        style: PanelStyle,
        children: Vec<Element>,
    },
    /// Styled text block
    Text(Text<'static>),
    /// Single-row block-character trend
    Sparkline(Sparkline),
    /// Braille line chart, takes the remaining height
    LineChart(LineChart),
}

/// Structure of an element tree with widget content erased
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Container(Vec<Shape>),
    Heading(String),
    Row(Vec<Shape>),
    Region(Region),
    Content,
}

impl Element {
    pub fn panel(title: impl Into<String>, children: Vec<Element>) -> Self {
        Self::styled_panel(title, PanelStyle::Default, children)
    }

    pub fn styled_panel(title: impl Into<String>, style: PanelStyle, children: Vec<Element>) -> Self {
        Self::Panel {
            title: title.into(),
            style,
            children,
        }
    }

    pub fn text(text: impl Into<Text<'static>>) -> Self {
        Self::Text(text.into())
    }

    /// Structural signature. Region contents collapse to their region name,
    /// so widgets may change what they show without changing the shape.
    pub fn shape(&self) -> Shape {
        match self {
            Self::Container(children) => Shape::Container(children.iter().map(Self::shape).collect()),
            Self::Heading(title) => Shape::Heading(title.clone()),
            Self::Row(children) => Shape::Row(children.iter().map(Self::shape).collect()),
            Self::Region { region, .. } => Shape::Region(*region),
            Self::Panel { .. } | Self::Text(_) | Self::Sparkline(_) | Self::LineChart(_) => Shape::Content,
        }
    }

    /// Regions in reading order
    pub fn regions(&self) -> Vec<Region> {
        let mut out = Vec::new();
        self.collect_regions(&mut out);
        out
    }

    fn collect_regions(&self, out: &mut Vec<Region>) {
        match self {
            Self::Container(children) | Self::Row(children) | Self::Panel { children, .. } => {
                for child in children {
                    child.collect_regions(out);
                }
            }
            Self::Region { region, child } => {
                out.push(*region);
                child.collect_regions(out);
            }
            _ => {}
        }
    }

    /// Subtree mounted at `region`, if present
    pub fn region(&self, region: Region) -> Option<&Element> {
        match self {
            Self::Region { region: r, child } if *r == region => Some(child.as_ref()),
            Self::Region { child, .. } => child.region(region),
            Self::Container(children) | Self::Row(children) | Self::Panel { children, .. } => {
                children.iter().find_map(|c| c.region(region))
            }
            _ => None,
        }
    }

    /// Rows a node wants when stacked vertically
    fn constraint(&self) -> Constraint {
        match self {
            Self::Heading(_) | Self::Sparkline(_) => Constraint::Length(1),
            Self::Text(text) => Constraint::Length(text.height() as u16),
            Self::Container(_) | Self::Row(_) | Self::Region { .. } | Self::Panel { .. } | Self::LineChart(_) => {
                Constraint::Fill(1)
            }
        }
    }

    /// Paint the tree into `area`
    pub fn draw(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        match self {
            Self::Container(children) => {
                let bg = Block::default().style(Style::default().bg(theme.background));
                frame.render_widget(bg, area);

                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints(children.iter().map(Self::constraint))
                    .margin(1)
                    .split(area);
                for (child, chunk) in children.iter().zip(chunks.iter()) {
                    child.draw(frame, *chunk, theme);
                }
            }
            Self::Heading(title) => {
                let header = Paragraph::new(Line::from(vec![
                    Span::styled(format!("{} ", Separators::DIAMOND), Style::default().fg(theme.accent)),
                    Span::styled(title.clone(), Style::default().fg(theme.text_primary).bold()),
                    Span::styled("  │  ", Style::default().fg(theme.border)),
                    Span::styled("[r] Refresh  [q] Quit", Style::default().fg(theme.text_muted)),
                ]));
                frame.render_widget(header, area);
            }
            Self::Row(children) => {
                let n = children.len().max(1) as u32;
                let chunks = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints(children.iter().map(|_| Constraint::Ratio(1, n)))
                    .split(area);
                for (child, chunk) in children.iter().zip(chunks.iter()) {
                    child.draw(frame, *chunk, theme);
                }
            }
            Self::Region { child, .. } => child.draw(frame, area, theme),
            Self::Panel { title, style, children } => {
                let block = Panel::new(theme)
                    .title(title)
                    .style(*style)
                    .padding(Padding::horizontal(1))
                    .block();
                let inner = block.inner(area);
                frame.render_widget(block, area);

                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints(children.iter().map(Self::constraint))
                    .split(inner);
                for (child, chunk) in children.iter().zip(chunks.iter()) {
                    child.draw(frame, *chunk, theme);
                }
            }
            Self::Text(text) => {
                let paragraph = Paragraph::new(text.clone())
                    .style(Style::default().fg(theme.text_primary))
                    .wrap(Wrap { trim: true });
                frame.render_widget(paragraph, area);
            }
            Self::Sparkline(sparkline) => sparkline.render(area, frame.buffer_mut()),
            Self::LineChart(chart) => chart.render(area, frame.buffer_mut(), theme),
        }
    }
}
