//! Main application structure and event loop
//!
//! The app is the rendering host: it mounts the dashboard once, asks it for a
//! fresh tree every frame and paints that tree. A render failure ends the loop
//! and is returned to `main` unchanged.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::backend::Backend;
use ratatui::Terminal;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::dashboard::DashboardRoot;
use crate::themes::Theme;
use crate::widgets::{Alerts, ChartView, MarketOverview, NewsFeed};

/// The BlockVista dashboard with its four widgets
pub type Dashboard = DashboardRoot<MarketOverview, NewsFeed, ChartView, Alerts>;

/// Main application state
pub struct App {
    /// Mounted dashboard
    dashboard: Dashboard,
    /// Theme
    theme: Theme,
    /// Should exit?
    should_quit: bool,
    /// Event poll timeout
    tick_rate: Duration,
    /// Widget refresh interval
    refresh_interval: Duration,
    /// Last widget refresh
    last_refresh: Instant,
}

impl App {
    /// Create new app instance
    pub fn new() -> Result<Self> {
        info!("Initializing BlockVista Terminal");

        let dashboard = Dashboard::mount().map_err(|e| {
            warn!("Widget in {} region failed to mount", e.region());
            e
        })?;
        info!("Dashboard mounted");

        Ok(Self {
            dashboard,
            theme: Theme::load(),
            should_quit: false,
            tick_rate: crate::config::tick_rate(),
            refresh_interval: crate::config::refresh_interval(),
            last_refresh: Instant::now(),
        })
    }

    /// Run the main event loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            if self.last_refresh.elapsed() >= self.refresh_interval {
                self.refresh();
            }

            self.draw(terminal)?;

            if event::poll(self.tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code, key.modifiers);
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        info!("BlockVista Terminal exiting");
        Ok(())
    }

    /// Render the dashboard tree and paint it
    pub fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<()> {
        let tree = self.dashboard.render()?;
        terminal.draw(|f| {
            let area = f.area();
            tree.draw(f, area, &self.theme);
        })?;
        Ok(())
    }

    fn refresh(&mut self) {
        self.dashboard.refresh();
        self.last_refresh = Instant::now();
    }

    /// Handle a key press
    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => self.should_quit = true,
            KeyCode::Char('r') => {
                debug!("Manual refresh");
                self.refresh();
            }
            _ => {}
        }
    }
}
