//! News feed widget - time-stamped headlines, newest first

use anyhow::Result;
use ratatui::prelude::*;
use std::collections::VecDeque;
use tracing::debug;

use super::DashboardWidget;
use crate::dashboard::Element;
use crate::themes::Theme;
use crate::ui::borders::Separators;

/// Headlines kept on screen
const MAX_HEADLINES: usize = 8;

/// Session open, minutes after midnight (09:15)
const SESSION_OPEN_MINUTE: u32 = 9 * 60 + 15;

/// Wire stories released one per refresh, cycling
const WIRE: &[(&str, &str)] = &[
    ("NSE", "Benchmark indices open higher on broad-based buying"),
    ("Reuters", "RBI keeps repo rate unchanged, retains stance"),
    ("ET Markets", "IT majors gain as rupee weakens against dollar"),
    ("Mint", "Banking stocks extend rally; PSU lenders lead"),
    ("BSE", "FIIs turn net buyers for third straight session"),
    ("Reuters", "Crude slips below $80 on demand worries"),
    ("ET Markets", "Auto sales data lifts two-wheeler makers"),
    ("Mint", "Metal index slides as China data disappoints"),
    ("NSE", "F&O expiry: options writers shift to higher strikes"),
    ("Bloomberg", "Rupee opens flat, traders eye Fed minutes"),
];

/// Stories already on the tape at startup
const INITIAL_STORIES: usize = 4;

/// A single headline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headline {
    /// Minutes after midnight
    pub minute: u32,
    pub source: String,
    pub title: String,
}

impl Headline {
    /// `HH:MM` publication time
    pub fn timestamp(&self) -> String {
        format!("{:02}:{:02}", (self.minute / 60) % 24, self.minute % 60)
    }
}

/// Rolling headline list
pub struct NewsFeed {
    theme: Theme,
    headlines: VecDeque<Headline>,
    released: usize,
}

impl NewsFeed {
    pub fn new() -> Self {
        Self::with_backlog(INITIAL_STORIES)
    }

    /// Feed with `stories` wire stories already released
    pub fn with_backlog(stories: usize) -> Self {
        let mut feed = Self {
            theme: Theme::load(),
            headlines: VecDeque::with_capacity(MAX_HEADLINES),
            released: 0,
        };
        for _ in 0..stories {
            feed.release_next();
        }
        feed
    }

    /// Put the next wire story at the top of the list
    fn release_next(&mut self) {
        let (source, title) = WIRE[self.released % WIRE.len()];
        let headline = Headline {
            minute: SESSION_OPEN_MINUTE + self.released as u32 * 3,
            source: source.to_string(),
            title: title.to_string(),
        };
        self.released += 1;

        if self.headlines.len() >= MAX_HEADLINES {
            self.headlines.pop_back();
        }
        self.headlines.push_front(headline);
    }

    /// Headlines, newest first
    pub fn headlines(&self) -> impl Iterator<Item = &Headline> {
        self.headlines.iter()
    }
}

impl Default for NewsFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardWidget for NewsFeed {
    fn mount() -> Result<Self> {
        Ok(Self::new())
    }

    fn render(&self) -> Result<Element> {
        let lines: Vec<Line<'static>> = self
            .headlines
            .iter()
            .map(|h| {
                Line::from(vec![
                    Span::styled(format!("{} ", h.timestamp()), Style::default().fg(self.theme.text_muted)),
                    Span::styled(format!("[{}] ", h.source), Style::default().fg(self.theme.accent_secondary)),
                    Span::styled(h.title.clone(), Style::default().fg(self.theme.text_primary)),
                ])
            })
            .collect();

        let body = if lines.is_empty() {
            Element::text(Line::from(Span::styled(
                format!("{} No headlines yet", Separators::BULLET),
                Style::default().fg(self.theme.text_muted),
            )))
        } else {
            Element::text(lines)
        };

        Ok(Element::panel("News Feed", vec![body]))
    }

    fn refresh(&mut self) {
        self.release_next();
        debug!("News feed released story {}", self.released);
    }
}
