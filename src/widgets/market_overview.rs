//! Market overview widget - watchlist quotes with an index trend

use anyhow::{bail, Result};
use ratatui::prelude::*;
use tracing::debug;

use super::chart::Sparkline;
use super::feed::QuoteFeed;
use super::DashboardWidget;
use crate::dashboard::Element;
use crate::themes::Theme;
use crate::ui::borders::Separators;

/// Points kept in the trend line
const TREND_POINTS: usize = 60;

/// Watchlist table plus a sparkline of the first symbol
pub struct MarketOverview {
    theme: Theme,
    feed: QuoteFeed,
    trend: Sparkline,
}

impl MarketOverview {
    pub fn new(symbols: &[String]) -> Result<Self> {
        if symbols.is_empty() {
            bail!("market overview needs at least one symbol");
        }

        let theme = Theme::load();
        let feed = QuoteFeed::new(symbols).warmed_up(TREND_POINTS as u64);
        let mut trend = Sparkline::new(TREND_POINTS, theme.accent).with_label(symbols[0].clone());
        for price in feed.history(0, TREND_POINTS) {
            trend.push(price);
        }

        Ok(Self { theme, feed, trend })
    }

    fn header(&self) -> Line<'static> {
        Line::from(Span::styled(
            format!("{:<10} {:>10} {:>8}", "Symbol", "Last", "Chg%"),
            Style::default().fg(self.theme.text_muted),
        ))
    }

    fn quote_lines(&self) -> Vec<Line<'static>> {
        self.feed
            .quotes()
            .into_iter()
            .map(|q| {
                let change = q.change_pct();
                let color = self.theme.change_color(change);
                Line::from(vec![
                    Span::styled(format!("{:<10} ", q.symbol), Style::default().fg(self.theme.text_primary).bold()),
                    Span::styled(format!("{:>10.2} ", q.last), Style::default().fg(self.theme.text_secondary)),
                    Span::styled(format!("{:>+7.2}%", change), Style::default().fg(color)),
                    Span::styled(format!(" {}", Separators::change_arrow(change)), Style::default().fg(color)),
                ])
            })
            .collect()
    }
}

impl DashboardWidget for MarketOverview {
    fn mount() -> Result<Self> {
        Self::new(&crate::config::watchlist())
    }

    fn render(&self) -> Result<Element> {
        let mut lines = vec![self.header()];
        lines.extend(self.quote_lines());

        Ok(Element::panel(
            "Market Overview",
            vec![Element::text(lines), Element::Sparkline(self.trend.clone())],
        ))
    }

    fn refresh(&mut self) {
        self.feed.advance();
        if let Some(q) = self.feed.quote(0) {
            self.trend.push(q.last);
        }
        debug!("Market overview refreshed at tick {}", self.feed.tick());
    }
}
