//! Alerts widget - price-level rules with armed/triggered badges

use anyhow::{bail, Result};
use ratatui::prelude::*;
use std::fmt;
use tracing::{debug, info};

use super::feed::QuoteFeed;
use super::DashboardWidget;
use crate::dashboard::Element;
use crate::themes::Theme;
use crate::ui::borders::Separators;
use crate::ui::panels::PanelStyle;

/// Symbols that get default rules
const MAX_WATCHED: usize = 3;

/// Distance of the default levels from the open, as a fraction
const DEFAULT_BAND: f64 = 0.008;

/// Side of the level that fires the rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Above,
    Below,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Above => write!(f, ">"),
            Self::Below => write!(f, "<"),
        }
    }
}

/// A price-level alert on one feed instrument
#[derive(Debug, Clone, PartialEq)]
pub struct AlertRule {
    /// Index into the widget's own feed
    pub instrument: usize,
    pub symbol: String,
    pub condition: Condition,
    pub level: f64,
}

impl AlertRule {
    pub fn is_triggered(&self, price: f64) -> bool {
        match self.condition {
            Condition::Above => price > self.level,
            Condition::Below => price < self.level,
        }
    }
}

/// Alert list evaluated against the widget's own feed
pub struct Alerts {
    theme: Theme,
    feed: QuoteFeed,
    rules: Vec<AlertRule>,
}

impl Alerts {
    /// One rule above and one below the open of the first few symbols
    pub fn new(symbols: &[String]) -> Result<Self> {
        if symbols.is_empty() {
            bail!("alerts need at least one symbol");
        }

        let watched = &symbols[..symbols.len().min(MAX_WATCHED)];
        let feed = QuoteFeed::new(watched);
        let rules = feed
            .quotes()
            .into_iter()
            .enumerate()
            .flat_map(|(i, q)| {
                [
                    AlertRule {
                        instrument: i,
                        symbol: q.symbol.clone(),
                        condition: Condition::Above,
                        level: round_level(q.open * (1.0 + DEFAULT_BAND)),
                    },
                    AlertRule {
                        instrument: i,
                        symbol: q.symbol,
                        condition: Condition::Below,
                        level: round_level(q.open * (1.0 - DEFAULT_BAND)),
                    },
                ]
            })
            .collect();

        Ok(Self {
            theme: Theme::load(),
            feed,
            rules,
        })
    }

    pub fn rules(&self) -> &[AlertRule] {
        &self.rules
    }

    /// Rules paired with whether they currently fire
    pub fn evaluate(&self) -> Vec<(&AlertRule, bool)> {
        self.rules
            .iter()
            .map(|rule| {
                let fired = self
                    .feed
                    .quote(rule.instrument)
                    .map(|q| rule.is_triggered(q.last))
                    .unwrap_or(false);
                (rule, fired)
            })
            .collect()
    }
}

fn round_level(level: f64) -> f64 {
    (level * 20.0).round() / 20.0
}

impl DashboardWidget for Alerts {
    fn mount() -> Result<Self> {
        Self::new(&crate::config::watchlist())
    }

    fn render(&self) -> Result<Element> {
        let evaluated = self.evaluate();
        let triggered = evaluated.iter().filter(|(_, fired)| *fired).count();

        let mut lines = vec![Line::from(Span::styled(
            format!("{} of {} triggered", triggered, evaluated.len()),
            Style::default().fg(self.theme.text_muted),
        ))];

        for (rule, fired) in &evaluated {
            let (dot, status) = if *fired {
                (Separators::CIRCLE_FILLED, "TRIGGERED")
            } else {
                (Separators::CIRCLE_EMPTY, "armed")
            };
            let color = self.theme.status_color(status);
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", dot), Style::default().fg(color)),
                Span::styled(format!("{:<10}", rule.symbol), Style::default().fg(self.theme.text_primary)),
                Span::styled(
                    format!(" {} {:>10.2}  ", rule.condition, rule.level),
                    Style::default().fg(self.theme.text_secondary),
                ),
                Span::styled(status, Style::default().fg(color).bold()),
            ]));
        }

        let style = if triggered > 0 {
            PanelStyle::Error
        } else {
            PanelStyle::Default
        };

        Ok(Element::styled_panel("Alerts", style, vec![Element::text(lines)]))
    }

    fn refresh(&mut self) {
        let before: Vec<bool> = self.evaluate().into_iter().map(|(_, fired)| fired).collect();
        self.feed.advance();
        for ((rule, fired), was) in self.evaluate().into_iter().zip(before) {
            if fired && !was {
                info!("Alert triggered: {} {} {:.2}", rule.symbol, rule.condition, rule.level);
            }
        }
        debug!("Alerts evaluated at tick {}", self.feed.tick());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alerts() -> Alerts {
        let symbols: Vec<String> = ["TCS", "INFY", "SBIN", "RELIANCE"].iter().map(|s| s.to_string()).collect();
        Alerts::new(&symbols).unwrap()
    }

    #[test]
    fn test_default_rules_bracket_open() {
        let a = alerts();
        assert_eq!(a.rules().len(), MAX_WATCHED * 2);
        let tcs: Vec<&AlertRule> = a.rules().iter().filter(|r| r.symbol == "TCS").collect();
        assert_eq!(tcs[0].condition, Condition::Above);
        assert!(tcs[0].level > 3_860.0);
        assert_eq!(tcs[1].condition, Condition::Below);
        assert!(tcs[1].level < 3_860.0);
    }

    #[test]
    fn test_rule_conditions() {
        let rule = AlertRule {
            instrument: 0,
            symbol: "X".into(),
            condition: Condition::Above,
            level: 100.0,
        };
        assert!(rule.is_triggered(100.5));
        assert!(!rule.is_triggered(100.0));

        let below = AlertRule {
            condition: Condition::Below,
            ..rule
        };
        assert!(below.is_triggered(99.0));
        assert!(!below.is_triggered(101.0));
    }

    #[test]
    fn test_levels_eventually_fire() {
        let mut a = alerts();
        let mut seen = false;
        for _ in 0..50 {
            a.refresh();
            if a.evaluate().iter().any(|(_, fired)| *fired) {
                seen = true;
                break;
            }
        }
        assert!(seen);
    }

    #[test]
    fn test_render_summary_matches_evaluation() {
        let a = alerts();
        let triggered = a.evaluate().iter().filter(|(_, f)| *f).count();
        let tree = a.render().unwrap();
        let Element::Panel { style, children, .. } = &tree else {
            panic!("expected panel");
        };
        assert_eq!(*style == PanelStyle::Error, triggered > 0);
        let Element::Text(text) = &children[0] else {
            panic!("expected rule list");
        };
        assert_eq!(text.lines.len(), a.rules().len() + 1);
        assert_eq!(text.lines[0].spans[0].content, format!("{} of 6 triggered", triggered));
    }

    #[test]
    fn test_empty_symbols_rejected() {
        assert!(Alerts::new(&[]).is_err());
    }
}
