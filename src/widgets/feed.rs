//! Synthetic quote feed
//!
//! Deterministic prices for the watched symbols so the terminal runs without a
//! broker connection. Each widget owns its own feed instance; nothing here is
//! shared between regions.

/// Reference open prices for well-known symbols
const REFERENCE_PRICES: &[(&str, f64)] = &[
    ("NIFTY 50", 22_480.0),
    ("BANKNIFTY", 48_150.0),
    ("RELIANCE", 2_945.0),
    ("TCS", 3_860.0),
    ("INFY", 1_475.0),
    ("HDFCBANK", 1_530.0),
    ("ICICIBANK", 1_095.0),
    ("SBIN", 765.0),
];

/// Snapshot of one symbol
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub symbol: String,
    pub open: f64,
    pub last: f64,
}

impl Quote {
    /// Change since open, in percent
    pub fn change_pct(&self) -> f64 {
        if self.open == 0.0 {
            0.0
        } else {
            (self.last - self.open) / self.open * 100.0
        }
    }
}

#[derive(Debug, Clone)]
struct Instrument {
    symbol: String,
    open: f64,
    phase: f64,
}

/// Tick-driven price generator
#[derive(Debug, Clone)]
pub struct QuoteFeed {
    instruments: Vec<Instrument>,
    tick: u64,
}

impl QuoteFeed {
    pub fn new(symbols: &[String]) -> Self {
        let instruments = symbols
            .iter()
            .enumerate()
            .map(|(i, symbol)| Instrument {
                symbol: symbol.clone(),
                open: reference_price(symbol),
                phase: i as f64 * 0.9,
            })
            .collect();
        Self { instruments, tick: 0 }
    }

    /// Start the feed `ticks` steps into the session so history is available
    pub fn warmed_up(mut self, ticks: u64) -> Self {
        self.tick = ticks;
        self
    }

    /// Move the feed forward one step
    pub fn advance(&mut self) {
        self.tick += 1;
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Current quote for the instrument at `index`
    pub fn quote(&self, index: usize) -> Option<Quote> {
        let inst = self.instruments.get(index)?;
        Some(Quote {
            symbol: inst.symbol.clone(),
            open: inst.open,
            last: price(inst, self.tick),
        })
    }

    /// Current quotes in watchlist order
    pub fn quotes(&self) -> Vec<Quote> {
        (0..self.instruments.len()).filter_map(|i| self.quote(i)).collect()
    }

    /// The last `len` prices of the instrument at `index`, oldest first
    pub fn history(&self, index: usize, len: usize) -> Vec<f64> {
        let Some(inst) = self.instruments.get(index) else {
            return Vec::new();
        };
        let start = (self.tick + 1).saturating_sub(len as u64);
        (start..=self.tick).map(|t| price(inst, t)).collect()
    }
}

fn reference_price(symbol: &str) -> f64 {
    REFERENCE_PRICES
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, p)| *p)
        .unwrap_or_else(|| 100.0 + symbol.bytes().map(f64::from).sum::<f64>() % 900.0)
}

/// Two overlapping waves around the open price, within about ±1.6%
fn price(inst: &Instrument, tick: u64) -> f64 {
    let t = tick as f64;
    let drift = 0.012 * (t * 0.35 + inst.phase).sin() + 0.004 * (t * 1.7 + inst.phase * 2.0).sin();
    let raw = inst.open * (1.0 + drift);
    (raw * 20.0).round() / 20.0
}
