#![forbid(unsafe_code)]

//! Geometry kernel and capability seams for the orbfx backdrop.
//!
//! This crate provides:
//! - [`Viewport`] and [`Bounds`] geometry with linear remapping
//! - Capability traits ([`CircleSurface`], [`NoiseField`], [`HueVarSink`])
//!   so the animation core stays testable without a real display
//! - [`MotionPreference`] for reduced-motion environments
//! - [`Debouncer`] for coalescing high-frequency event streams

/// Capability traits and the packed color the renderer consumes.
pub mod capability;
/// Event coalescing with explicit-time polling.
pub mod debounce;
/// Viewport, bounds rectangle, and linear remapping.
pub mod geometry;
/// Animated vs. reduced motion selection.
pub mod motion;

pub use capability::{CircleSurface, HueVarSink, NoiseField, PackedRgb};
pub use debounce::{DebounceEdge, Debouncer};
pub use geometry::{Bounds, Viewport, remap};
pub use motion::MotionPreference;
