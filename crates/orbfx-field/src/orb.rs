#![forbid(unsafe_code)]

//! Per-orb motion model.
//!
//! Each orb owns an independent position, scale, and pair of noise phases;
//! nothing is shared between orbs. A tick samples the noise field at the
//! current phases and maps the samples onto the orb's bounds rectangle, so
//! for any sample in [-1, 1] the orb stays confined by construction.

use orbfx_core::{Bounds, NoiseField, Viewport, remap};
use orbfx_style::Rgb;

/// Scale modulation range: an orb shrinks to half its base radius at most.
const SCALE_MIN: f64 = 0.5;
const SCALE_MAX: f64 = 1.0;

/// Noise phases start at a random point in this window so orbs desynchronize.
const PHASE_MAX: f64 = 1000.0;

/// Default phase step per tick when none is configured.
const DEFAULT_SPEED: f64 = 0.002;

/// Which rectangle confines orb motion.
///
/// The two variants reflect a genuine ambiguity in the observed behavior of
/// this effect: the drift area was computed relative to an off-center origin
/// but the full viewport was what actually took effect. Both are offered
/// explicitly; [`DriftRegion::FullViewport`] reproduces the observed
/// behavior and is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DriftRegion {
    /// The whole viewport rectangle.
    #[default]
    FullViewport,
    /// A square around an origin towards the bottom-right of the viewport,
    /// sized relative to viewport width.
    Anchored,
}

impl DriftRegion {
    /// Derive the bounds rectangle for a viewport.
    #[must_use]
    pub fn bounds_for(self, viewport: Viewport) -> Bounds {
        match self {
            Self::FullViewport => Bounds::of_viewport(viewport),
            Self::Anchored => {
                let narrow = viewport.width < 1000.0;
                let max_dist = if narrow {
                    viewport.width / 3.0
                } else {
                    viewport.width / 5.0
                };
                let origin_x = viewport.width / 1.25;
                let origin_y = if narrow {
                    viewport.height
                } else {
                    viewport.height / 1.375
                };
                Bounds::around(origin_x, origin_y, max_dist)
            }
        }
    }
}

/// Spawn-time orb parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbParams {
    /// Fill color.
    pub fill: Rgb,
    /// Base radius in display units; the drawn radius is `radius * scale`.
    pub radius: f64,
    /// Noise phase step per tick. Larger is faster drift.
    pub speed: f64,
}

impl OrbParams {
    #[must_use]
    pub const fn new(fill: Rgb, radius: f64) -> Self {
        Self {
            fill,
            radius,
            speed: DEFAULT_SPEED,
        }
    }

    #[must_use]
    pub const fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }
}

/// One animated orb.
#[derive(Debug, Clone, PartialEq)]
pub struct Orb {
    x: f64,
    y: f64,
    scale: f64,
    radius: f64,
    fill: Rgb,
    x_off: f64,
    y_off: f64,
    step: f64,
    bounds: Bounds,
}

impl Orb {
    /// Spawn an orb at a random point inside `bounds`, with desynchronized
    /// noise phases.
    #[must_use]
    pub fn spawn(params: OrbParams, bounds: Bounds, rng: &mut fastrand::Rng) -> Self {
        Self {
            x: random_in(rng, bounds.x_min, bounds.x_max),
            y: random_in(rng, bounds.y_min, bounds.y_max),
            scale: 1.0,
            radius: params.radius,
            fill: params.fill,
            x_off: random_in(rng, 0.0, PHASE_MAX),
            y_off: random_in(rng, 0.0, PHASE_MAX),
            step: params.speed,
            bounds,
        }
    }

    /// Advance one tick: sample the noise field at the current phases, map
    /// the samples onto the bounds and scale range, then step the phases.
    pub fn tick(&mut self, noise: &impl NoiseField) {
        let x_noise = noise.sample(self.x_off, self.x_off);
        let y_noise = noise.sample(self.y_off, self.y_off);
        let scale_noise = noise.sample(self.x_off, self.y_off);

        self.x = remap(x_noise, -1.0, 1.0, self.bounds.x_min, self.bounds.x_max);
        self.y = remap(y_noise, -1.0, 1.0, self.bounds.y_min, self.bounds.y_max);
        self.scale = remap(scale_noise, -1.0, 1.0, SCALE_MIN, SCALE_MAX);

        self.x_off += self.step;
        self.y_off += self.step;
    }

    /// Replace the bounds without repositioning. The next tick pulls the
    /// orb into the new rectangle through the noise mapping.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    pub fn set_fill(&mut self, fill: Rgb) {
        self.fill = fill;
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Current scale in [0.5, 1].
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Base radius (unscaled).
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The radius to draw this frame.
    #[must_use]
    pub fn scaled_radius(&self) -> f64 {
        self.radius * self.scale
    }

    #[must_use]
    pub fn fill(&self) -> Rgb {
        self.fill
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

/// Uniform draw from [`min`, `max`).
#[inline]
pub(crate) fn random_in(rng: &mut fastrand::Rng, min: f64, max: f64) -> f64 {
    rng.f64() * (max - min) + min
}
