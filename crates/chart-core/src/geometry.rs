// File: crates/chart-core/src/geometry.rs
// Summary: Plot rectangle derived from surface size and insets.

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    /// Area left for the plot once `insets` are taken off a `width` x `height` surface.
    /// Never collapses below one pixel in either direction.
    pub fn plot_area(width: i32, height: i32, insets: &Insets) -> Self {
        let left = insets.left as i32;
        let top = insets.top as i32;
        let right = (width - insets.right as i32).max(left + 1);
        let bottom = (height - insets.bottom as i32).max(top + 1);
        Self { left, top, right, bottom }
    }

    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }
    pub fn center_x(&self) -> f32 { (self.left + self.right) as f32 * 0.5 }
    pub fn center_y(&self) -> f32 { (self.top + self.bottom) as f32 * 0.5 }
}
