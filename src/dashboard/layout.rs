//! Chart geometry
//!
//! Maps a [`ChartSpec`] onto a pixel area: point positions, smoothed curve
//! segments, axis ticks. Canvas backends only stroke what this computes.

use super::chart::ChartSpec;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One cubic Bezier segment from `from` to `to`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSegment {
    pub from: Point,
    pub control1: Point,
    pub control2: Point,
    pub to: Point,
}

/// An axis label and where to draw it
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// Drawing area with margins, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
}

impl ChartLayout {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin_left: 60.0,
            margin_right: 20.0,
            margin_top: 40.0,
            margin_bottom: 40.0,
        }
    }

    pub fn plot_width(&self) -> f64 {
        (self.width - self.margin_left - self.margin_right).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.margin_top - self.margin_bottom).max(0.0)
    }

    /// y coordinate of the x axis
    pub fn baseline(&self) -> f64 {
        self.margin_top + self.plot_height()
    }

    fn y_range(spec: &ChartSpec) -> (f64, f64) {
        let min = spec.y_min();
        let max = spec.y_max();
        if max > min {
            (min, max)
        } else {
            (min - 1.0, min + 1.0)
        }
    }

    /// Pixel position of each data point. Categories are spread evenly; a
    /// single point sits in the middle.
    pub fn points(&self, spec: &ChartSpec) -> Vec<Point> {
        let (min, max) = Self::y_range(spec);
        let count = spec.data.len();
        let step = if count > 1 {
            self.plot_width() / (count - 1) as f64
        } else {
            0.0
        };

        spec.data
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let x = if count > 1 {
                    self.margin_left + step * i as f64
                } else {
                    self.margin_left + self.plot_width() / 2.0
                };
                let y = self.margin_top + ((max - value) / (max - min)) * self.plot_height();
                Point { x, y }
            })
            .collect()
    }

    /// Horizontal grid values, bottom to top
    pub fn y_ticks(&self, spec: &ChartSpec, count: usize) -> Vec<Tick> {
        let (min, max) = Self::y_range(spec);
        let count = count.max(1);
        (0..=count)
            .map(|i| {
                let fraction = i as f64 / count as f64;
                Tick {
                    position: self.baseline() - fraction * self.plot_height(),
                    label: format!("{:.0}", min + fraction * (max - min)),
                }
            })
            .collect()
    }

    /// Category labels under each point
    pub fn x_ticks(&self, spec: &ChartSpec) -> Vec<Tick> {
        self.points(spec)
            .into_iter()
            .zip(spec.labels.iter())
            .map(|(point, label)| Tick {
                position: point.x,
                label: (*label).to_string(),
            })
            .collect()
    }
}

/// Smooth a polyline with a cardinal spline. `tension` 0 yields straight
/// segments (control points on the endpoints).
pub fn curve_segments(points: &[Point], tension: f64) -> Vec<CurveSegment> {
    let k = tension / 2.0;
    points
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            let (p1, p2) = (pair[0], pair[1]);
            let p0 = if i == 0 { p1 } else { points[i - 1] };
            let p3 = points.get(i + 2).copied().unwrap_or(p2);
            CurveSegment {
                from: p1,
                control1: Point {
                    x: p1.x + (p2.x - p0.x) * k,
                    y: p1.y + (p2.y - p0.y) * k,
                },
                control2: Point {
                    x: p2.x - (p3.x - p1.x) * k,
                    y: p2.y - (p3.y - p1.y) * k,
                },
                to: p2,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::ChartPeriod;

    #[test]
    fn test_points_span_plot_area() {
        let layout = ChartLayout::new(800.0, 400.0);
        let spec = ChartSpec::sales_line(ChartPeriod::Quarterly);
        let points = layout.points(&spec);

        assert_eq!(points.len(), 4);
        assert_eq!(points[0].x, layout.margin_left);
        assert_eq!(points[3].x, layout.width - layout.margin_right);

        // Q3 is the maximum and touches the top of the plot
        assert_eq!(points[2].y, layout.margin_top);
        assert!(points.iter().all(|p| p.y <= layout.baseline()));
    }

    #[test]
    fn test_y_ticks_start_at_zero() {
        let layout = ChartLayout::new(800.0, 400.0);
        let spec = ChartSpec::sales_line(ChartPeriod::Yearly);
        let ticks = layout.y_ticks(&spec, 5);

        assert_eq!(ticks.len(), 6);
        assert_eq!(ticks[0].label, "0");
        assert_eq!(ticks[0].position, layout.baseline());
        assert_eq!(ticks[5].label, "89500");
        assert_eq!(ticks[5].position, layout.margin_top);
    }

    #[test]
    fn test_x_ticks_use_labels() {
        let layout = ChartLayout::new(800.0, 400.0);
        let spec = ChartSpec::sales_line(ChartPeriod::Monthly);
        let labels: Vec<_> = layout.x_ticks(&spec).into_iter().map(|t| t.label).collect();
        assert_eq!(labels, ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul"]);
    }

    #[test]
    fn test_zero_tension_is_straight() {
        let points = [
            Point { x: 0.0, y: 0.0 },
            Point { x: 10.0, y: 10.0 },
            Point { x: 20.0, y: 0.0 },
        ];
        let segments = curve_segments(&points, 0.0);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].control1, points[0]);
        assert_eq!(segments[0].control2, points[1]);
    }

    #[test]
    fn test_curve_passes_through_points() {
        let points = [
            Point { x: 0.0, y: 5.0 },
            Point { x: 10.0, y: 0.0 },
            Point { x: 20.0, y: 8.0 },
            Point { x: 30.0, y: 2.0 },
        ];
        let segments = curve_segments(&points, 0.4);
        assert_eq!(segments.len(), 3);
        for (segment, pair) in segments.iter().zip(points.windows(2)) {
            assert_eq!(segment.from, pair[0]);
            assert_eq!(segment.to, pair[1]);
        }
        assert!(curve_segments(&points[..1], 0.4).is_empty());
    }
}
