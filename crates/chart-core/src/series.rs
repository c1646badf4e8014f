// File: crates/chart-core/src/series.rs
// Summary: Line series model: ordered (x, y) points drawn left to right in index order.

use crate::error::ChartError;

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub data_xy: Vec<(f64, f64)>,
}

impl Series {
    pub fn new() -> Self {
        Self { data_xy: Vec::new() }
    }

    pub fn with_data(data: Vec<(f64, f64)>) -> Self {
        Self { data_xy: data }
    }

    /// Pair `x[i]` with `y[i]`. Both slices must have the same length.
    pub fn from_columns(x: &[f64], y: &[f64]) -> Result<Self, ChartError> {
        if x.len() != y.len() {
            return Err(ChartError::DimensionMismatch { x: x.len(), y: y.len() });
        }
        Ok(Self::with_data(x.iter().copied().zip(y.iter().copied()).collect()))
    }

    pub fn len(&self) -> usize { self.data_xy.len() }
    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }

    /// Downsample using LTTB to at most `max_points`.
    pub fn downsample_xy_lttb(&self, max_points: usize) -> Self {
        use crate::downsample::lttb;
        let data = if self.data_xy.len() > max_points && max_points >= 2 {
            lttb(&self.data_xy, max_points)
        } else {
            self.data_xy.clone()
        };
        Series { data_xy: data }
    }
}

impl Default for Series {
    fn default() -> Self { Self::new() }
}
