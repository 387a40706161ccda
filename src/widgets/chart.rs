//! Chart primitives: Sparkline (block chars) and LineChart (braille dots)
//!
//! Both are plain data carried inside the element tree and painted by the host.

use ratatui::prelude::*;
use std::collections::VecDeque;

use crate::themes::Theme;

// ─── Block-character sparkline ──────────────────────────────────────

/// Unicode block characters for sparkline (8 levels from empty to full)
const SPARK_CHARS: [char; 8] = ['\u{2581}', '\u{2582}', '\u{2583}', '\u{2584}', '\u{2585}', '\u{2586}', '\u{2587}', '\u{2588}'];

/// Min and range of a set of values; a flat set gets range 1.0
fn scale(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if min > max {
        return None;
    }
    let range = if (max - min).abs() < f64::EPSILON { 1.0 } else { max - min };
    Some((min, range))
}

/// Write `text` left to right from (x, y), clipped at `right`
fn put_str(buf: &mut Buffer, x: u16, y: u16, right: u16, text: &str, style: Style) -> u16 {
    let mut cx = x;
    for ch in text.chars() {
        if cx >= right {
            break;
        }
        if let Some(cell) = buf.cell_mut((cx, y)) {
            cell.set_char(ch);
            cell.set_style(style);
        }
        cx += 1;
    }
    cx - x
}

/// Compact sparkline that renders in 1 row using block characters
#[derive(Debug, Clone)]
pub struct Sparkline {
    data: VecDeque<f64>,
    max_points: usize,
    color: Color,
    label: Option<String>,
}

impl Sparkline {
    pub fn new(max_points: usize, color: Color) -> Self {
        Self {
            data: VecDeque::with_capacity(max_points),
            max_points,
            color,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn push(&mut self, value: f64) {
        if self.data.len() >= self.max_points {
            self.data.pop_front();
        }
        self.data.push_back(value);
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn last(&self) -> Option<f64> {
        self.data.back().copied()
    }

    /// Block characters for the most recent `width` points, scaled to their own range
    fn glyphs(&self, width: usize) -> Vec<char> {
        let start = self.data.len().saturating_sub(width);
        let visible = || self.data.iter().skip(start).copied();
        let Some((min, range)) = scale(visible()) else {
            return Vec::new();
        };
        visible()
            .map(|v| {
                let level = (((v - min) / range).clamp(0.0, 1.0) * 7.0).round() as usize;
                SPARK_CHARS[level.min(7)]
            })
            .collect()
    }

    /// Render the sparkline into a single-row area
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 || self.data.is_empty() {
            return;
        }

        let style = Style::default().fg(self.color);
        let label_width = match self.label {
            Some(ref label) => put_str(buf, area.x, area.y, area.right(), &format!("{} ", label), style),
            None => 0,
        };

        let x = area.x + label_width;
        let glyphs: String = self.glyphs(area.width.saturating_sub(label_width) as usize).into_iter().collect();
        put_str(buf, x, area.y, area.right(), &glyphs, style);
    }
}

// ─── Braille-dot line chart ─────────────────────────────────────────

/// Each braille cell is 2 dots wide and 4 dots tall. Bit for dot (row, col):
///   0x01 0x08
///   0x02 0x10
///   0x04 0x20
///   0x40 0x80
const BRAILLE_BASE: u32 = 0x2800;
const BRAILLE_BITS: [[u8; 2]; 4] = [[0x01, 0x08], [0x02, 0x10], [0x04, 0x20], [0x40, 0x80]];

/// Width reserved for Y-axis price labels
const Y_LABEL_WIDTH: u16 = 9;

/// A data series for the line chart
#[derive(Debug, Clone)]
pub struct Series {
    pub data: VecDeque<f64>,
    pub color: Color,
    pub label: String,
    max_points: usize,
}

impl Series {
    pub fn new(label: impl Into<String>, color: Color, max_points: usize) -> Self {
        Self {
            data: VecDeque::with_capacity(max_points),
            color,
            label: label.into(),
            max_points,
        }
    }

    pub fn push(&mut self, value: f64) {
        if self.data.len() >= self.max_points {
            self.data.pop_front();
        }
        self.data.push_back(value);
    }

    /// Most recent value
    pub fn last(&self) -> Option<f64> {
        self.data.back().copied()
    }
}

/// Dot canvas; one byte of braille bits plus an owning color per cell
struct BrailleGrid {
    cols: usize,
    rows: usize,
    bits: Vec<u8>,
    colors: Vec<Option<Color>>,
}

impl BrailleGrid {
    fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            bits: vec![0; cols * rows],
            colors: vec![None; cols * rows],
        }
    }

    fn dot_width(&self) -> i32 {
        (self.cols * 2) as i32
    }

    fn dot_height(&self) -> i32 {
        (self.rows * 4) as i32
    }

    fn set(&mut self, x: i32, y: i32, color: Color) {
        let x = x.clamp(0, self.dot_width() - 1) as usize;
        let y = y.clamp(0, self.dot_height() - 1) as usize;
        let idx = (y / 4) * self.cols + x / 2;
        self.bits[idx] |= BRAILLE_BITS[y % 4][x % 2];
        self.colors[idx] = Some(color);
    }

    /// Bresenham line between two dots
    fn line(&mut self, (x0, y0): (i32, i32), (x1, y1): (i32, i32), color: Color) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.set(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn paint(&self, buf: &mut Buffer, origin: Position, fallback: Color) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let idx = row * self.cols + col;
                if self.bits[idx] == 0 {
                    continue;
                }
                let ch = char::from_u32(BRAILLE_BASE + u32::from(self.bits[idx])).unwrap_or(' ');
                if let Some(cell) = buf.cell_mut((origin.x + col as u16, origin.y + row as u16)) {
                    cell.set_char(ch);
                    cell.set_style(Style::default().fg(self.colors[idx].unwrap_or(fallback)));
                }
            }
        }
    }
}

/// Compact price label for the Y axis
fn format_price(v: f64) -> String {
    if v.abs() >= 100_000.0 {
        format!("{:.1}L", v / 100_000.0)
    } else if v.abs() >= 10_000.0 {
        format!("{:.0}", v)
    } else {
        format!("{:.2}", v)
    }
}

/// Line chart using braille-dot rendering for high resolution
#[derive(Debug, Clone, Default)]
pub struct LineChart {
    pub series: Vec<Series>,
}

impl LineChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    /// Render the line chart into the given area
    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.height < 3 || area.width <= Y_LABEL_WIDTH + 2 {
            return;
        }

        let muted = Style::default().fg(theme.text_muted);
        let Some((min, range)) = scale(self.series.iter().flat_map(|s| s.data.iter().copied())) else {
            let msg = "No data";
            let x = area.x + area.width.saturating_sub(msg.len() as u16) / 2;
            put_str(buf, x, area.y + area.height / 2, area.right(), msg, muted);
            return;
        };

        // Last row holds the legend
        let plot = Rect::new(
            area.x + Y_LABEL_WIDTH,
            area.y,
            area.width - Y_LABEL_WIDTH,
            area.height - 1,
        );
        let mut grid = BrailleGrid::new(plot.width as usize, plot.height as usize);
        let (gw, gh) = (grid.dot_width(), grid.dot_height());

        for series in &self.series {
            let n = series.data.len();
            if n < 2 {
                continue;
            }
            let visible = n.min(gw as usize);
            let start = n - visible;
            let to_dot = |i: usize, v: f64| -> (i32, i32) {
                let x = ((i - start) as f64 / (visible - 1) as f64 * (gw - 1) as f64).round() as i32;
                let norm = ((v - min) / range).clamp(0.0, 1.0);
                let y = ((1.0 - norm) * (gh - 1) as f64).round() as i32;
                (x, y)
            };

            for i in start..n - 1 {
                let a = to_dot(i, series.data[i]);
                let b = to_dot(i + 1, series.data[i + 1]);
                grid.line(a, b, series.color);
            }
        }
        grid.paint(buf, Position::new(plot.x, plot.y), theme.accent);

        // Y-axis: top, middle, bottom
        let max = min + range;
        for (y, value) in [
            (plot.y, max),
            (plot.y + plot.height / 2, min + range / 2.0),
            (plot.bottom() - 1, min),
        ] {
            let label = format!("{:>width$}", format_price(value), width = (Y_LABEL_WIDTH - 1) as usize);
            put_str(buf, area.x, y, plot.x, &label, muted);
        }

        // Legend
        let legend_y = area.bottom() - 1;
        let mut x = plot.x;
        for series in &self.series {
            if x + series.label.chars().count() as u16 + 4 > area.right() {
                break;
            }
            x += put_str(buf, x, legend_y, area.right(), "\u{25CF}", Style::default().fg(series.color));
            x += put_str(buf, x, legend_y, area.right(), &series.label, Style::default().fg(theme.text_secondary));
            x += 2;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_sparkline_keeps_latest_points() {
        let mut spark = Sparkline::new(3, Color::White);
        for v in [1.0, 2.0, 3.0, 4.0] {
            spark.push(v);
        }
        assert_eq!(spark.len(), 3);
        assert_eq!(spark.data.front().copied(), Some(2.0));
        assert_eq!(spark.last(), Some(4.0));
    }

    #[test]
    fn test_sparkline_glyphs_scale_to_visible_window() {
        let mut spark = Sparkline::new(10, Color::White);
        for v in [100.0, 1.0, 5.0, 9.0] {
            spark.push(v);
        }
        // the 100.0 outlier has scrolled out of a 3-wide window
        assert_eq!(spark.glyphs(3), vec!['\u{2581}', '\u{2585}', '\u{2588}']);
    }

    #[test]
    fn test_sparkline_renders_label_and_extremes() {
        let mut spark = Sparkline::new(10, Color::White).with_label("IDX");
        for v in [1.0, 5.0, 9.0] {
            spark.push(v);
        }
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        spark.render(area, &mut buf);

        let line = row(&buf, 0);
        assert!(line.starts_with("IDX "));
        assert!(line.contains('\u{2581}'));
        assert!(line.contains('\u{2588}'));
    }

    #[test]
    fn test_scale_flat_series() {
        assert_eq!(scale([5.0, 5.0].into_iter()), Some((5.0, 1.0)));
        assert_eq!(scale(std::iter::empty()), None);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1475.456), "1475.46");
        assert_eq!(format_price(22480.4), "22480");
        assert_eq!(format_price(250_000.0), "2.5L");
    }

    #[test]
    fn test_line_chart_without_data_says_so() {
        let chart = LineChart::new().with_series(Series::new("TCS", Color::White, 10));
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        chart.render(area, &mut buf, &Theme::default());
        assert!(row(&buf, 2).contains("No data"));
    }

    #[test]
    fn test_line_chart_draws_braille_and_legend() {
        let mut series = Series::new("TCS", Color::White, 50);
        for i in 0..50 {
            series.push((i as f64 * 0.3).sin() * 10.0 + 100.0);
        }
        let chart = LineChart::new().with_series(series);
        let area = Rect::new(0, 0, 30, 6);
        let mut buf = Buffer::empty(area);
        chart.render(area, &mut buf, &Theme::default());

        let braille = (0..area.height)
            .flat_map(|y| row(&buf, y).chars().collect::<Vec<_>>())
            .filter(|c| ('\u{2801}'..='\u{28FF}').contains(c))
            .count();
        assert!(braille > 0);
        assert!(row(&buf, 5).contains("TCS"));
        assert!(row(&buf, 0).contains("110") || row(&buf, 0).contains("109"));
    }

    #[test]
    fn test_grid_sets_expected_bits() {
        let mut grid = BrailleGrid::new(1, 1);
        grid.set(0, 0, Color::White);
        grid.set(1, 3, Color::White);
        assert_eq!(grid.bits[0], 0x01 | 0x80);
        // out-of-range dots clamp to the edge
        grid.set(9, 9, Color::White);
        assert_eq!(grid.bits[0], 0x01 | 0x80);
    }
}
