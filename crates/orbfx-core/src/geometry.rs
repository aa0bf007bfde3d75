#![forbid(unsafe_code)]

//! Viewport and bounds geometry.
//!
//! Everything here is plain value arithmetic: the motion model maps noise
//! samples onto a [`Bounds`] rectangle derived from the current [`Viewport`],
//! so these types sit at the bottom of the crate graph.

/// Viewport dimensions in display units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle confining an orb's motion.
///
/// Invariant: `x_min <= x_max` and `y_min <= y_max`. The constructor
/// reorders reversed inputs rather than rejecting them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    #[must_use]
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        let (x_min, x_max) = ordered_pair(x_min, x_max);
        let (y_min, y_max) = ordered_pair(y_min, y_max);
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// The full rectangle of a viewport, origin at (0, 0).
    #[must_use]
    pub fn of_viewport(viewport: Viewport) -> Self {
        Self::new(0.0, viewport.width, 0.0, viewport.height)
    }

    /// A square of half-width `max_dist` centered on (`origin_x`, `origin_y`).
    #[must_use]
    pub fn around(origin_x: f64, origin_y: f64, max_dist: f64) -> Self {
        let d = max_dist.abs();
        Self::new(origin_x - d, origin_x + d, origin_y - d, origin_y + d)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}

/// Linearly map `n` from [`start1`, `end1`] onto [`start2`, `end2`].
///
/// No clamping: inputs outside the source range extrapolate. The motion
/// model only feeds it noise samples from [-1, 1], which land inside the
/// target range by construction.
#[inline]
#[must_use]
pub fn remap(n: f64, start1: f64, end1: f64, start2: f64, end2: f64) -> f64 {
    ((n - start1) / (end1 - start1)) * (end2 - start2) + start2
}

#[inline]
fn ordered_pair(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn bounds_reorder_reversed_inputs() {
        let b = Bounds::new(10.0, -10.0, 5.0, 1.0);
        assert_eq!(b.x_min, -10.0);
        assert_eq!(b.x_max, 10.0);
        assert_eq!(b.y_min, 1.0);
        assert_eq!(b.y_max, 5.0);
    }

    #[test]
    fn viewport_bounds_start_at_origin() {
        let b = Bounds::of_viewport(Viewport::new(800.0, 600.0));
        assert_eq!(b.x_min, 0.0);
        assert_eq!(b.x_max, 800.0);
        assert_eq!(b.y_min, 0.0);
        assert_eq!(b.y_max, 600.0);
        assert_eq!(b.width(), 800.0);
        assert_eq!(b.height(), 600.0);
    }

    #[test]
    fn around_is_symmetric() {
        let b = Bounds::around(100.0, 50.0, 30.0);
        assert_eq!(b.x_min, 70.0);
        assert_eq!(b.x_max, 130.0);
        assert_eq!(b.y_min, 20.0);
        assert_eq!(b.y_max, 80.0);
    }

    #[test]
    fn around_accepts_negative_distance() {
        let b = Bounds::around(0.0, 0.0, -5.0);
        assert_eq!(b.x_min, -5.0);
        assert_eq!(b.x_max, 5.0);
    }

    #[test]
    fn contains_includes_edges() {
        let b = Bounds::new(0.0, 10.0, 0.0, 10.0);
        assert!(b.contains(0.0, 0.0));
        assert!(b.contains(10.0, 10.0));
        assert!(b.contains(5.0, 5.0));
        assert!(!b.contains(-0.1, 5.0));
        assert!(!b.contains(5.0, 10.1));
    }

    #[test]
    fn remap_endpoints_and_midpoint() {
        assert_eq!(remap(-1.0, -1.0, 1.0, 0.0, 100.0), 0.0);
        assert_eq!(remap(1.0, -1.0, 1.0, 0.0, 100.0), 100.0);
        assert_eq!(remap(0.0, -1.0, 1.0, 0.0, 100.0), 50.0);
    }

    #[test]
    fn remap_handles_descending_target() {
        assert_eq!(remap(0.5, 0.0, 1.0, 100.0, 0.0), 50.0);
    }

    proptest! {
        #[test]
        fn remap_unit_sample_lands_in_bounds(
            n in -1.0f64..=1.0,
            lo in -1000.0f64..1000.0,
            span in 0.0f64..2000.0,
        ) {
            let hi = lo + span;
            let mapped = remap(n, -1.0, 1.0, lo, hi);
            prop_assert!(mapped >= lo - 1e-9 && mapped <= hi + 1e-9);
        }

        #[test]
        fn bounds_invariant_holds_for_any_inputs(
            a in -1e6f64..1e6,
            b in -1e6f64..1e6,
            c in -1e6f64..1e6,
            d in -1e6f64..1e6,
        ) {
            let bounds = Bounds::new(a, b, c, d);
            prop_assert!(bounds.x_min <= bounds.x_max);
            prop_assert!(bounds.y_min <= bounds.y_max);
        }
    }
}
