#![forbid(unsafe_code)]

//! Analogous three-color palette.
//!
//! A palette is a base hue plus two companions rotated +30° and +60° around
//! the wheel, all at fixed saturation and lightness. Palettes are immutable:
//! "change colors" means generating a whole new one, never mutating fields.

use crate::color::{Rgb, cycle_hue, hsl_to_rgb};
use orbfx_core::HueVarSink;

/// Base hues are drawn from the cool half of the wheel (blues through reds).
const HUE_MIN: f64 = 220.0;
const HUE_MAX: f64 = 360.0;

/// Rotation between the base hue and its companions, in degrees.
const ANALOGOUS_STEP: f64 = 30.0;

const SATURATION: f64 = 95.0;
const LIGHTNESS: f64 = 50.0;

/// An immutable analogous color palette.
///
/// Invariant: `analogous1` and `analogous2` are the base hue rotated +30°
/// and +60° (mod 360), and all three hue fields lie in [0, 360).
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    base_hue: f64,
    analogous1: f64,
    analogous2: f64,
    saturation: f64,
    lightness: f64,
    colors: [Rgb; 3],
}

impl Palette {
    /// Generate a fresh palette from a random base hue in [220, 360).
    ///
    /// The base hue is truncated to a whole degree. The rng is an explicit
    /// argument so callers control seeding and determinism.
    #[must_use]
    pub fn generate(rng: &mut fastrand::Rng) -> Palette {
        let base_hue = (rng.f64() * (HUE_MAX - HUE_MIN) + HUE_MIN).trunc();
        Self::from_base_hue(base_hue)
    }

    /// Build the palette for a specific base hue (cycled into [0, 360)).
    #[must_use]
    pub fn from_base_hue(base_hue: f64) -> Palette {
        let base_hue = cycle_hue(base_hue);
        let analogous1 = cycle_hue(base_hue + ANALOGOUS_STEP);
        let analogous2 = cycle_hue(base_hue + 2.0 * ANALOGOUS_STEP);
        let colors = [
            hsl_to_rgb(base_hue, SATURATION, LIGHTNESS),
            hsl_to_rgb(analogous1, SATURATION, LIGHTNESS),
            hsl_to_rgb(analogous2, SATURATION, LIGHTNESS),
        ];
        Palette {
            base_hue,
            analogous1,
            analogous2,
            saturation: SATURATION,
            lightness: LIGHTNESS,
            colors,
        }
    }

    /// One of the three palette colors, chosen uniformly.
    #[must_use]
    pub fn pick(&self, rng: &mut fastrand::Rng) -> Rgb {
        self.colors[rng.usize(..self.colors.len())]
    }

    /// Publish the three hue values to the styling-variable collaborator.
    pub fn publish_to(&self, sink: &mut impl HueVarSink) {
        sink.set_hues(self.base_hue, self.analogous1, self.analogous2);
    }

    #[must_use]
    pub fn base_hue(&self) -> f64 {
        self.base_hue
    }

    #[must_use]
    pub fn analogous_hues(&self) -> (f64, f64) {
        (self.analogous1, self.analogous2)
    }

    #[must_use]
    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    #[must_use]
    pub fn lightness(&self) -> f64 {
        self.lightness
    }

    /// Base color followed by the two analogous colors.
    #[must_use]
    pub fn colors(&self) -> &[Rgb; 3] {
        &self.colors
    }
}
