//! Sales Dashboard
//!
//! - **datasets**: the three static sales series
//! - **chart**: `ChartHost`, which keeps a single live chart instance
//! - **layout**: pixel geometry for canvas renderers
//! - **text**: terminal renderer used by the CLI
//! - **theme**: persisted light/dark preference

pub mod chart;
pub mod datasets;
pub mod layout;
pub mod text;
pub mod theme;

use thiserror::Error;

pub use chart::{ChartHost, ChartRenderer, ChartSpec, LegendPosition};
pub use datasets::{ChartDataset, ChartPeriod};
pub use layout::{curve_segments, ChartLayout, CurveSegment, Point, Tick};
pub use text::{TextChart, TextRenderer};
pub use theme::{Theme, ThemeToggle, DARK_CLASS};

/// Dashboard errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    /// Filter key is not one of monthly, quarterly, yearly
    #[error("Unknown chart period: {0}")]
    UnknownPeriod(String),

    /// The rendering backend could not draw the chart
    #[error("Chart renderer error: {0}")]
    Renderer(String),
}
