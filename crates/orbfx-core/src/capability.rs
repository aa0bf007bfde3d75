#![forbid(unsafe_code)]

//! Capability seams between the animation core and its collaborators.
//!
//! The rendering surface, the noise source, and the styling-variable sink are
//! all external to the core: it pushes values to them and never reads back.
//! Modeling them as traits keeps the motion and color logic testable without
//! a display and lets the demo swap in a terminal renderer.

/// Packed opaque RGB color (`0xRRGGBB`), the form rendering collaborators
/// take their fill colors in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackedRgb(pub u32);

impl PackedRgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    #[must_use]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xff) as u8
    }

    #[must_use]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xff) as u8
    }

    #[must_use]
    pub const fn b(self) -> u8 {
        (self.0 & 0xff) as u8
    }
}

/// Draw-circle capability: one cleared-and-redrawn frame at a time.
///
/// The surface owns actual pixel work (including any post-processing such as
/// blur); the core only hands it positions, radii, and fills.
pub trait CircleSurface {
    /// Discard everything drawn in the previous frame.
    fn clear(&mut self);

    /// Draw a filled circle centered at (`x`, `y`).
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, fill: PackedRgb);
}

/// Sample-noise capability: a deterministic continuous pseudo-random field.
///
/// Implementations return values in approximately [-1, 1] and must be pure:
/// the same coordinates always yield the same sample.
pub trait NoiseField {
    fn sample(&self, x: f64, y: f64) -> f64;
}

/// Styling-variable sink: receives the palette's hue values (in degrees) so
/// surrounding UI can reuse them. Write-only; the core never reads back.
pub trait HueVarSink {
    fn set_hues(&mut self, base: f64, analogous1: f64, analogous2: f64);
}
