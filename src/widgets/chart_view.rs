//! Chart view widget - rolling price chart of one symbol

use anyhow::{Context, Result};
use ratatui::prelude::*;
use tracing::debug;

use super::chart::{LineChart, Series};
use super::feed::QuoteFeed;
use super::DashboardWidget;
use crate::dashboard::Element;
use crate::themes::Theme;
use crate::ui::borders::Separators;

/// Points kept in the chart window
const WINDOW: usize = 120;

/// Braille line chart of the first watchlist symbol
pub struct ChartView {
    theme: Theme,
    feed: QuoteFeed,
    series: Series,
}

impl ChartView {
    pub fn new(symbol: &str) -> Self {
        let theme = Theme::load();
        let feed = QuoteFeed::new(&[symbol.to_string()]).warmed_up(WINDOW as u64);
        let mut series = Series::new(symbol, theme.accent_secondary, WINDOW);
        for price in feed.history(0, WINDOW) {
            series.push(price);
        }
        Self { theme, feed, series }
    }

    pub fn symbol(&self) -> &str {
        &self.series.label
    }
}

impl DashboardWidget for ChartView {
    fn mount() -> Result<Self> {
        let watchlist = crate::config::watchlist();
        let symbol = watchlist.first().context("chart view needs a symbol to plot")?;
        Ok(Self::new(symbol))
    }

    fn render(&self) -> Result<Element> {
        let quote = self
            .feed
            .quote(0)
            .with_context(|| format!("no quote for {}", self.symbol()))?;
        let change = quote.change_pct();
        let color = self.theme.change_color(change);

        let summary = Line::from(vec![
            Span::styled(format!("{:.2} ", quote.last), Style::default().fg(self.theme.text_primary).bold()),
            Span::styled(
                format!("{} {:+.2}%", Separators::change_arrow(change), change),
                Style::default().fg(color),
            ),
            Span::styled(
                format!("  open {:.2}", quote.open),
                Style::default().fg(self.theme.text_muted),
            ),
        ]);

        Ok(Element::panel(
            format!("Chart {} {}", Separators::BULLET, self.symbol()),
            vec![
                Element::text(summary),
                Element::LineChart(LineChart::new().with_series(self.series.clone())),
            ],
        ))
    }

    fn refresh(&mut self) {
        self.feed.advance();
        if let Some(q) = self.feed.quote(0) {
            self.series.push(q.last);
        }
        debug!("Chart for {} now has {} points", self.symbol(), self.series.data.len());
    }
}
