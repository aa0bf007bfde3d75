#![forbid(unsafe_code)]

//! Recording surface for headless tests.
//!
//! [`TraceSurface`] implements [`CircleSurface`] by logging every call, so
//! tests can drive a full [`OrbField`](crate::OrbField) without a display
//! and assert on exactly what would have been drawn.

use orbfx_core::{Bounds, CircleSurface, PackedRgb};

/// One recorded `fill_circle` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawnCircle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub fill: PackedRgb,
}

/// A surface that records instead of drawing.
#[derive(Debug, Default)]
pub struct TraceSurface {
    frame: Vec<DrawnCircle>,
    clears: usize,
    total_circles: usize,
}

impl TraceSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Circles drawn since the last clear, in draw order.
    #[must_use]
    pub fn frame(&self) -> &[DrawnCircle] {
        &self.frame
    }

    /// How many times the surface was cleared.
    #[must_use]
    pub fn clears(&self) -> usize {
        self.clears
    }

    /// Total circles drawn across all frames.
    #[must_use]
    pub fn total_circles(&self) -> usize {
        self.total_circles
    }

    /// Panics if any circle center of the current frame lies outside
    /// `bounds`. Radii may overhang; only centers are confined.
    pub fn assert_centers_within(&self, bounds: Bounds) {
        for (i, c) in self.frame.iter().enumerate() {
            assert!(
                bounds.contains(c.x, c.y),
                "circle {i} at ({}, {}) escapes {bounds:?}",
                c.x,
                c.y
            );
        }
    }
}

impl CircleSurface for TraceSurface {
    fn clear(&mut self) {
        self.frame.clear();
        self.clears += 1;
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, fill: PackedRgb) {
        self.frame.push(DrawnCircle { x, y, radius, fill });
        self.total_circles += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_and_clears() {
        let mut s = TraceSurface::new();
        s.clear();
        s.fill_circle(1.0, 2.0, 3.0, PackedRgb::new(1, 2, 3));
        s.fill_circle(4.0, 5.0, 6.0, PackedRgb::new(4, 5, 6));
        assert_eq!(s.frame().len(), 2);
        assert_eq!(s.clears(), 1);

        s.clear();
        assert!(s.frame().is_empty());
        assert_eq!(s.total_circles(), 2);
    }

    #[test]
    #[should_panic(expected = "escapes")]
    fn center_assertion_catches_escapes() {
        let mut s = TraceSurface::new();
        s.fill_circle(50.0, 50.0, 1.0, PackedRgb::new(0, 0, 0));
        s.assert_centers_within(Bounds::new(0.0, 10.0, 0.0, 10.0));
    }
}
