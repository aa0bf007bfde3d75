#![forbid(unsafe_code)]

//! Noise-driven orb motion and the animated field driver.
//!
//! This crate provides:
//! - [`SimplexNoise`] — a seeded deterministic 2D noise field
//! - [`Orb`] and [`DriftRegion`] — the per-orb motion model
//! - [`OrbField`] — the registry/driver that owns the orbs, advances them
//!   once per tick, and hands positions and colors to a [`CircleSurface`]
//! - [`TraceSurface`] — a recording surface for tests
//!
//! [`CircleSurface`]: orbfx_core::CircleSurface

/// Field driver: orb registry, tick loop, palette regeneration, resize.
pub mod field;
/// Seeded 2D simplex noise.
pub mod noise;
/// Per-orb motion state and drift-region bounds.
pub mod orb;
/// Recording surface for headless tests.
pub mod trace;

pub use field::{OrbField, OrbFieldConfig};
pub use noise::SimplexNoise;
pub use orb::{DriftRegion, Orb, OrbParams};
pub use trace::{DrawnCircle, TraceSurface};
