// File: crates/chart-core/src/axis.rs
// Summary: Axis model with label and visible range.

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    /// Unit range with the given label; replaced by autoscale once data is known.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self::new(label, 0.0, 1.0)
    }

    pub fn span(&self) -> f64 { self.max - self.min }
}
