// File: crates/chart-core/src/scale.rs
// Summary: Linear data-to-pixel transforms for the X and Y axes.

/// Maps a data interval onto a pixel interval. The Y variant flips
/// direction so larger values sit higher on screen.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    d0: f64,
    span: f64,
    p0: f32,
    p_span: f32,
}

impl LinearScale {
    /// Horizontal scale: `min` lands on `left_px`, `max` on `right_px`.
    pub fn horizontal(min: f64, max: f64, left_px: f32, right_px: f32) -> Self {
        Self { d0: min, span: span_or_unit(min, max), p0: left_px, p_span: right_px - left_px }
    }

    /// Vertical scale: `min` lands on `bottom_px`, `max` on `top_px`.
    pub fn vertical(min: f64, max: f64, top_px: f32, bottom_px: f32) -> Self {
        Self { d0: min, span: span_or_unit(min, max), p0: bottom_px, p_span: top_px - bottom_px }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        self.p0 + ((v - self.d0) / self.span) as f32 * self.p_span
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        self.d0 + ((px - self.p0) / self.p_span) as f64 * self.span
    }
}

fn span_or_unit(min: f64, max: f64) -> f64 {
    let span = max - min;
    if span > 0.0 && span.is_finite() { span } else { 1.0 }
}
