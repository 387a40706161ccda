//! Dashboard composition root
//!
//! Places four widgets into a fixed two-row layout:
//!
//! ```text
//! BlockVista Terminal
//! [ market | news   ]
//! [ chart  | alerts ]
//! ```
//!
//! The slot set is closed and known at compile time, so each region is a typed
//! field rather than an entry in a lookup table.

use anyhow::Result;
use std::fmt;

pub mod tree;

pub use tree::{Element, Shape};

use crate::error::CompositionError;
use crate::widgets::DashboardWidget;

/// Page title shown above the grid
pub const TITLE: &str = "BlockVista Terminal";

/// Named layout slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Market,
    News,
    Chart,
    Alerts,
}

impl Region {
    /// Every region in reading order
    pub const ALL: [Region; 4] = [Region::Market, Region::News, Region::Chart, Region::Alerts];

    pub fn name(self) -> &'static str {
        match self {
            Self::Market => "market",
            Self::News => "news",
            Self::Chart => "chart",
            Self::Alerts => "alerts",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rows top to bottom, regions left to right
pub const LAYOUT: [[Region; 2]; 2] = [[Region::Market, Region::News], [Region::Chart, Region::Alerts]];

/// Composition root binding one widget per region
pub struct DashboardRoot<M, N, C, A> {
    market: M,
    news: N,
    chart: C,
    alerts: A,
}

impl<M, N, C, A> DashboardRoot<M, N, C, A>
where
    M: DashboardWidget,
    N: DashboardWidget,
    C: DashboardWidget,
    A: DashboardWidget,
{
    /// Bind already constructed widgets to their regions
    pub fn new(market: M, news: N, chart: C, alerts: A) -> Self {
        Self {
            market,
            news,
            chart,
            alerts,
        }
    }

    /// Construct every widget through its own entry point, in layout order
    pub fn mount() -> Result<Self, CompositionError> {
        Ok(Self::new(
            mount_region::<M>(Region::Market)?,
            mount_region::<N>(Region::News)?,
            mount_region::<C>(Region::Chart)?,
            mount_region::<A>(Region::Alerts)?,
        ))
    }

    /// Build the full dashboard tree.
    ///
    /// A widget that fails to render aborts the whole render with that
    /// widget's error; no fallback content is substituted.
    pub fn render(&self) -> Result<Element> {
        let mut children = Vec::with_capacity(LAYOUT.len() + 1);
        children.push(Element::Heading(TITLE.to_string()));

        for row in LAYOUT {
            let mut cells = Vec::with_capacity(row.len());
            for region in row {
                cells.push(Element::Region {
                    region,
                    child: Box::new(self.render_region(region)?),
                });
            }
            children.push(Element::Row(cells));
        }

        Ok(Element::Container(children))
    }

    /// Forward a host tick to each widget's own lifecycle
    pub fn refresh(&mut self) {
        self.market.refresh();
        self.news.refresh();
        self.chart.refresh();
        self.alerts.refresh();
    }

    fn render_region(&self, region: Region) -> Result<Element> {
        match region {
            Region::Market => self.market.render(),
            Region::News => self.news.render(),
            Region::Chart => self.chart.render(),
            Region::Alerts => self.alerts.render(),
        }
    }
}

fn mount_region<W: DashboardWidget>(region: Region) -> Result<W, CompositionError> {
    W::mount().map_err(|source| CompositionError::Mount { region, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::cell::Cell;

    use crate::themes::Theme;

    /// Placeholder widget labelled by its slot number
    struct Stub<const ID: usize>;

    impl<const ID: usize> Stub<ID> {
        fn label() -> &'static str {
            ["market", "news", "chart", "alerts"][ID]
        }
    }

    impl<const ID: usize> DashboardWidget for Stub<ID> {
        fn mount() -> Result<Self> {
            Ok(Self)
        }

        fn render(&self) -> Result<Element> {
            let label = Self::label();
            Ok(Element::panel(label, vec![Element::text(format!("{} placeholder", label))]))
        }
    }

    type Placeholders = DashboardRoot<Stub<0>, Stub<1>, Stub<2>, Stub<3>>;

    /// Renders different content on every call
    struct Counter {
        calls: Cell<u32>,
    }

    impl DashboardWidget for Counter {
        fn mount() -> Result<Self> {
            Ok(Self { calls: Cell::new(0) })
        }

        fn render(&self) -> Result<Element> {
            self.calls.set(self.calls.get() + 1);
            let lines: Vec<ratatui::text::Line<'static>> =
                (0..self.calls.get()).map(|i| format!("line {}", i).into()).collect();
            Ok(Element::panel("counter", vec![Element::text(lines)]))
        }
    }

    struct Exploding;

    impl DashboardWidget for Exploding {
        fn mount() -> Result<Self> {
            Ok(Self)
        }

        fn render(&self) -> Result<Element> {
            Err(anyhow!("alerts feed unavailable"))
        }
    }

    struct Unmountable;

    impl DashboardWidget for Unmountable {
        fn mount() -> Result<Self> {
            Err(anyhow!("missing collaborator"))
        }

        fn render(&self) -> Result<Element> {
            Ok(Element::text("never"))
        }
    }

    fn expected_shape() -> Shape {
        Shape::Container(vec![
            Shape::Heading(TITLE.to_string()),
            Shape::Row(vec![Shape::Region(Region::Market), Shape::Region(Region::News)]),
            Shape::Row(vec![Shape::Region(Region::Chart), Shape::Region(Region::Alerts)]),
        ])
    }

    fn text_of(element: &Element) -> String {
        match element {
            Element::Panel { children, .. } => children.iter().map(text_of).collect(),
            Element::Text(text) => text
                .lines
                .iter()
                .map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect::<String>())
                .collect::<Vec<_>>()
                .join("\n"),
            _ => String::new(),
        }
    }

    #[test]
    fn test_layout_covers_every_region_once() {
        let flat: Vec<Region> = LAYOUT.iter().flatten().copied().collect();
        assert_eq!(flat, Region::ALL);
    }

    #[test]
    fn test_render_shape_is_two_rows_of_two() {
        let root = Placeholders::mount().unwrap();
        assert_eq!(root.render().unwrap().shape(), expected_shape());
    }

    #[test]
    fn test_every_region_mounted_exactly_once() {
        let root = Placeholders::mount().unwrap();
        let regions = root.render().unwrap().regions();
        assert_eq!(regions, Region::ALL);
        for region in Region::ALL {
            assert_eq!(regions.iter().filter(|r| **r == region).count(), 1);
        }
    }

    #[test]
    fn test_repeated_renders_share_shape() {
        let root = DashboardRoot::<Counter, Stub<1>, Stub<2>, Counter>::mount().unwrap();
        let first = root.render().unwrap();
        let second = root.render().unwrap();
        assert_eq!(first.shape(), second.shape());
        assert_eq!(second.shape(), expected_shape());
        // content is the widget's own business
        assert_ne!(
            text_of(first.region(Region::Market).unwrap()),
            text_of(second.region(Region::Market).unwrap())
        );
    }

    #[test]
    fn test_replacing_one_widget_leaves_others_untouched() {
        let base = Placeholders::mount().unwrap().render().unwrap();
        let swapped = DashboardRoot::<Stub<0>, Stub<1>, Counter, Stub<3>>::mount()
            .unwrap()
            .render()
            .unwrap();

        for region in [Region::Market, Region::News, Region::Alerts] {
            assert_eq!(
                text_of(base.region(region).unwrap()),
                text_of(swapped.region(region).unwrap())
            );
        }
        assert_ne!(
            text_of(base.region(Region::Chart).unwrap()),
            text_of(swapped.region(Region::Chart).unwrap())
        );
    }

    #[test]
    fn test_placeholder_scenario() {
        let tree = Placeholders::mount().unwrap().render().unwrap();

        let Element::Container(children) = &tree else {
            panic!("expected container, got {:?}", tree);
        };
        assert!(matches!(&children[0], Element::Heading(t) if t == "BlockVista Terminal"));

        let rows: Vec<Vec<String>> = children[1..]
            .iter()
            .map(|row| match row {
                Element::Row(cells) => cells
                    .iter()
                    .map(|cell| match cell {
                        Element::Region { child, .. } => text_of(child),
                        other => panic!("expected region, got {:?}", other),
                    })
                    .collect(),
                other => panic!("expected row, got {:?}", other),
            })
            .collect();

        assert_eq!(
            rows,
            vec![
                vec!["market placeholder".to_string(), "news placeholder".to_string()],
                vec!["chart placeholder".to_string(), "alerts placeholder".to_string()],
            ]
        );
    }

    #[test]
    fn test_placeholder_scenario_on_terminal() {
        let tree = Placeholders::mount().unwrap().render().unwrap();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                tree.draw(f, area, &Theme::default());
            })
            .unwrap();

        let buf = terminal.backend().buffer();
        let lines: Vec<String> = (0..buf.area.height)
            .map(|y| (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect())
            .collect();

        let find = |needle: &str| {
            lines
                .iter()
                .enumerate()
                .find_map(|(y, line)| line.find(needle).map(|x| (y, x)))
                .unwrap_or_else(|| panic!("{} not drawn", needle))
        };

        let title = find("BlockVista Terminal");
        let market = find("market placeholder");
        let news = find("news placeholder");
        let chart = find("chart placeholder");
        let alerts = find("alerts placeholder");

        assert!(title.0 < market.0);
        assert_eq!(market.0, news.0);
        assert!(market.1 < news.1);
        assert_eq!(chart.0, alerts.0);
        assert!(chart.1 < alerts.1);
        assert!(market.0 < chart.0);
    }

    #[test]
    fn test_widget_render_failure_propagates_unchanged() {
        let root = DashboardRoot::<Stub<0>, Stub<1>, Stub<2>, Exploding>::mount().unwrap();
        let err = root.render().unwrap_err();
        assert_eq!(err.to_string(), "alerts feed unavailable");
        assert_eq!(err.chain().count(), 1);
    }

    #[test]
    fn test_mount_failure_names_region() {
        let result = DashboardRoot::<Stub<0>, Unmountable, Stub<2>, Stub<3>>::mount();
        let err = match result {
            Ok(_) => panic!("mount should fail"),
            Err(e) => e,
        };
        assert_eq!(err.region(), Region::News);
        assert_eq!(err.to_string(), "failed to mount news widget");
        let cause = std::error::Error::source(&err).map(|c| c.to_string());
        assert_eq!(cause.as_deref(), Some("missing collaborator"));

        // the cause appears once in the alternate chain format
        let chained = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(chained, "failed to mount news widget: missing collaborator");
    }

    #[test]
    fn test_region_names() {
        let names: Vec<&str> = Region::ALL.iter().map(|r| r.name()).collect();
        assert_eq!(names, ["market", "news", "chart", "alerts"]);
        assert_eq!(Region::Chart.to_string(), "chart");
    }
}
