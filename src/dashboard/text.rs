//! Terminal chart renderer
//!
//! Draws the sales series as horizontal bars. Used by the CLI; each instance
//! is a rendered frame that is discarded on destroy.

use super::chart::{ChartRenderer, ChartSpec};
use super::DashboardError;

/// Handle of a rendered text chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChart {
    pub generation: u64,
    pub frame: String,
}

#[derive(Debug)]
pub struct TextRenderer {
    width: usize,
    generation: u64,
    live: usize,
}

impl TextRenderer {
    /// `width` is the length of the longest bar in characters
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(1),
            generation: 0,
            live: 0,
        }
    }

    /// Number of frames created and not yet destroyed
    pub fn live(&self) -> usize {
        self.live
    }

    fn draw(&self, spec: &ChartSpec) -> String {
        let max = spec.y_max();
        let label_width = spec.labels.iter().map(|l| l.len()).max().unwrap_or(0);
        let mut out = format!("{} ({})\n", spec.series_label, spec.period.label());

        for (label, value) in spec.labels.iter().zip(spec.data.iter()) {
            let bar_len = if max > 0.0 {
                ((value / max) * self.width as f64).round() as usize
            } else {
                0
            };
            out.push_str(&format!(
                "{:>lw$} | {:<bw$} {}\n",
                label,
                "#".repeat(bar_len),
                value,
                lw = label_width,
                bw = self.width
            ));
        }
        out
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(40)
    }
}

impl ChartRenderer for TextRenderer {
    type Handle = TextChart;

    fn create(&mut self, spec: &ChartSpec) -> Result<TextChart, DashboardError> {
        if spec.labels.len() != spec.data.len() {
            return Err(DashboardError::Renderer(format!(
                "{} labels for {} values",
                spec.labels.len(),
                spec.data.len()
            )));
        }
        self.generation += 1;
        self.live += 1;
        Ok(TextChart {
            generation: self.generation,
            frame: self.draw(spec),
        })
    }

    fn destroy(&mut self, _handle: TextChart) {
        self.live = self.live.saturating_sub(1);
    }
}
