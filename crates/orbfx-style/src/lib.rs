#![forbid(unsafe_code)]

//! Color math and palette generation for the orbfx backdrop.
//!
//! This crate provides:
//! - [`Rgb`] and the HSL→RGB→hex conversion pipeline
//! - [`cycle_hue`] degree normalization
//! - [`Palette`] — a base hue plus two analogous hues, regenerated wholesale

/// HSL→RGB conversion, hue cycling, and hex formatting.
pub mod color;
/// Analogous three-color palette.
pub mod palette;

pub use color::{Rgb, cycle_hue, hsl_to_hex, hsl_to_rgb};
pub use palette::Palette;
