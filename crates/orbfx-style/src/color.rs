#![forbid(unsafe_code)]

//! HSL→RGB conversion and hex formatting.
//!
//! The conversion is the standard hexagonal color-wheel projection
//! (chroma / secondary component / lightness adjustment). Inputs are
//! degrees for hue and whole-number percentages for saturation and
//! lightness; out-of-range values are cycled or clamped rather than
//! rejected, so every function here is total over finite inputs.

use orbfx_core::PackedRgb;

/// Magnitude bound applied before hue cycling. Keeps the ±360 loop count
/// bounded for absurd inputs.
const HUE_CYCLE_LIMIT: f64 = 1e7;

/// RGB color (opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packed `0xRRGGBB` form for rendering collaborators.
    #[must_use]
    pub const fn to_packed(self) -> PackedRgb {
        PackedRgb::new(self.r, self.g, self.b)
    }

    /// 7-character lowercase hex string with leading `#`.
    #[must_use]
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Rgb> for PackedRgb {
    fn from(rgb: Rgb) -> Self {
        rgb.to_packed()
    }
}

/// Normalize a hue in degrees into [0, 360).
///
/// Degrees are cyclical, so any finite input has a canonical representative.
/// Magnitudes beyond [`HUE_CYCLE_LIMIT`] are clamped first.
#[must_use]
pub fn cycle_hue(deg: f64) -> f64 {
    let mut deg = deg.clamp(-HUE_CYCLE_LIMIT, HUE_CYCLE_LIMIT);
    while deg < 0.0 {
        deg += 360.0;
    }
    while deg >= 360.0 {
        deg -= 360.0;
    }
    deg
}

/// Convert HSL to RGB.
///
/// `hue_deg` in degrees (cycled into range), `saturation_pct` and
/// `lightness_pct` as percentages clamped into [0, 100].
#[must_use]
pub fn hsl_to_rgb(hue_deg: f64, saturation_pct: f64, lightness_pct: f64) -> Rgb {
    let hue = cycle_hue(hue_deg);
    let s = saturation_pct.clamp(0.0, 100.0) / 100.0;
    let l = lightness_pct.clamp(0.0, 100.0) / 100.0;

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hue_prime = hue / 60.0;
    let x = chroma * (1.0 - (hue_prime % 2.0 - 1.0).abs());

    let (r1, g1, b1) = if hue_prime >= 5.0 {
        (chroma, 0.0, x)
    } else if hue_prime >= 4.0 {
        (x, 0.0, chroma)
    } else if hue_prime >= 3.0 {
        (0.0, x, chroma)
    } else if hue_prime >= 2.0 {
        (0.0, chroma, x)
    } else if hue_prime >= 1.0 {
        (x, chroma, 0.0)
    } else {
        (chroma, x, 0.0)
    };

    let m = l - chroma / 2.0;
    Rgb::new(channel(r1 + m), channel(g1 + m), channel(b1 + m))
}

/// Convert HSL straight to a `#rrggbb` string.
#[must_use]
pub fn hsl_to_hex(hue_deg: f64, saturation_pct: f64, lightness_pct: f64) -> String {
    hsl_to_rgb(hue_deg, saturation_pct, lightness_pct).hex()
}

#[inline]
fn channel(v: f64) -> u8 {
    // abs guards signed-zero rounding artifacts; clamped inputs keep the
    // value in [0, 1] so it never flips a legitimately negative result.
    (v * 255.0).round().abs() as u8
}
