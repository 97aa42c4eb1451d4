//! Chart host
//!
//! Keeps at most one live chart instance. Switching period destroys the
//! previous instance before the renderer builds the next one, so canvases
//! never overlap.

use tracing::debug;

use super::datasets::{ChartDataset, ChartPeriod};
use super::DashboardError;

/// Presentation of the sales line chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub period: ChartPeriod,
    pub series_label: &'static str,
    pub labels: &'static [&'static str],
    pub data: &'static [f64],
    /// Area fill under the line
    pub background_color: &'static str,
    pub border_color: &'static str,
    pub point_color: &'static str,
    pub border_width: f64,
    /// Bezier curve tension, 0 draws straight segments
    pub tension: f64,
    pub fill: bool,
    pub point_radius: f64,
    pub legend_position: LegendPosition,
    pub begin_at_zero: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    Top,
    Bottom,
}

impl ChartSpec {
    /// The sales line chart for `period`
    pub fn sales_line(period: ChartPeriod) -> Self {
        let dataset: &'static ChartDataset = period.dataset();
        Self {
            period,
            series_label: "Sales",
            labels: dataset.labels,
            data: dataset.data,
            background_color: "rgba(79, 70, 229, 0.2)",
            border_color: "#4f46e5",
            point_color: "#4f46e5",
            border_width: 2.0,
            tension: 0.4,
            fill: true,
            point_radius: 4.0,
            legend_position: LegendPosition::Top,
            begin_at_zero: true,
        }
    }

    /// Upper bound of the y axis
    pub fn y_max(&self) -> f64 {
        self.data.iter().copied().fold(0.0, f64::max)
    }

    /// Lower bound of the y axis
    pub fn y_min(&self) -> f64 {
        if self.begin_at_zero {
            0.0
        } else {
            self.data.iter().copied().fold(f64::INFINITY, f64::min)
        }
    }
}

/// Backend that draws chart instances
pub trait ChartRenderer {
    /// Identifies one live chart instance
    type Handle;

    fn create(&mut self, spec: &ChartSpec) -> Result<Self::Handle, DashboardError>;

    fn destroy(&mut self, handle: Self::Handle);
}

/// Owns the renderer and the single live chart instance
pub struct ChartHost<R: ChartRenderer> {
    renderer: R,
    current: Option<(ChartPeriod, R::Handle)>,
}

impl<R: ChartRenderer> ChartHost<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            current: None,
        }
    }

    /// Render `period`, destroying the previous instance first
    pub fn render(&mut self, period: ChartPeriod) -> Result<&R::Handle, DashboardError> {
        if let Some((previous, handle)) = self.current.take() {
            debug!(%previous, "destroying chart instance");
            self.renderer.destroy(handle);
        }

        let spec = ChartSpec::sales_line(period);
        let handle = self.renderer.create(&spec)?;
        debug!(%period, points = spec.data.len(), "chart rendered");

        let (_, handle) = self.current.insert((period, handle));
        Ok(handle)
    }

    /// Render by filter key; unknown keys fail without touching the live chart
    pub fn render_key(&mut self, key: &str) -> Result<&R::Handle, DashboardError> {
        let period: ChartPeriod = key.parse()?;
        self.render(period)
    }

    /// Destroy the live instance, if any
    pub fn destroy(&mut self) {
        if let Some((_, handle)) = self.current.take() {
            self.renderer.destroy(handle);
        }
    }

    pub fn current_period(&self) -> Option<ChartPeriod> {
        self.current.as_ref().map(|(period, _)| *period)
    }

    pub fn current(&self) -> Option<&R::Handle> {
        self.current.as_ref().map(|(_, handle)| handle)
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}

impl<R: ChartRenderer> Drop for ChartHost<R> {
    fn drop(&mut self) {
        self.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    /// Tracks live instances the way a canvas would
    #[derive(Default, Clone)]
    struct CountingRenderer {
        live: Rc<RefCell<HashSet<u32>>>,
        created: Rc<RefCell<u32>>,
    }

    impl ChartRenderer for CountingRenderer {
        type Handle = u32;

        fn create(&mut self, _spec: &ChartSpec) -> Result<u32, DashboardError> {
            let mut created = self.created.borrow_mut();
            *created += 1;
            self.live.borrow_mut().insert(*created);
            Ok(*created)
        }

        fn destroy(&mut self, handle: u32) {
            self.live.borrow_mut().remove(&handle);
        }
    }

    #[test]
    fn test_switching_period_leaves_one_instance() {
        let renderer = CountingRenderer::default();
        let mut host = ChartHost::new(renderer.clone());

        host.render_key("monthly").unwrap();
        host.render_key("quarterly").unwrap();

        assert_eq!(renderer.live.borrow().len(), 1);
        assert_eq!(*renderer.created.borrow(), 2);
        assert_eq!(host.current_period(), Some(ChartPeriod::Quarterly));
        assert_eq!(host.current(), Some(&2));
    }

    #[test]
    fn test_unknown_key_keeps_live_chart() {
        let renderer = CountingRenderer::default();
        let mut host = ChartHost::new(renderer.clone());
        host.render(ChartPeriod::Yearly).unwrap();

        let err = host.render_key("weekly").unwrap_err();
        assert!(matches!(err, DashboardError::UnknownPeriod(_)));
        assert_eq!(host.current_period(), Some(ChartPeriod::Yearly));
        assert_eq!(renderer.live.borrow().len(), 1);
    }

    #[test]
    fn test_drop_destroys_instance() {
        let renderer = CountingRenderer::default();
        {
            let mut host = ChartHost::new(renderer.clone());
            host.render(ChartPeriod::Monthly).unwrap();
            assert_eq!(renderer.live.borrow().len(), 1);
        }
        assert!(renderer.live.borrow().is_empty());
    }

    #[test]
    fn test_sales_line_spec() {
        let spec = ChartSpec::sales_line(ChartPeriod::Quarterly);
        assert_eq!(spec.series_label, "Sales");
        assert_eq!(spec.labels, ["Q1", "Q2", "Q3", "Q4"]);
        assert_eq!(spec.tension, 0.4);
        assert_eq!(spec.y_min(), 0.0);
        assert_eq!(spec.y_max(), 20500.0);
        assert_eq!(spec.legend_position, LegendPosition::Top);
    }
}
