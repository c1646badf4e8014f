// File: crates/chart-core/src/view.rs
// Visible ranges derived from chart data.

use crate::Chart;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Data extents of every series, with `y_margin` (fraction of the y span)
    /// added above and below. Empty charts get the unit square.
    pub fn from_chart(chart: &Chart, y_margin: f64) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in &chart.series {
            for &(x, y) in &s.data_xy {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        }
        if is_degenerate(x_min, x_max) { x_max = x_min + 1.0; }
        if is_degenerate(y_min, y_max) {
            // flat line: centre it
            y_min -= 0.5;
            y_max += 0.5;
        }
        let ym = (y_max - y_min) * y_margin.max(0.0);
        Self { x_min, x_max, y_min: y_min - ym, y_max: y_max + ym }
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = self.x_min;
        chart.x_axis.max = self.x_max;
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
    }
}

/// A span too small to tell apart from rounding noise at this magnitude.
fn is_degenerate(min: f64, max: f64) -> bool {
    (max - min) <= f64::EPSILON * min.abs().max(max.abs()).max(1.0)
}
