#![forbid(unsafe_code)]

//! Animated vs. reduced motion.
//!
//! When the environment signals a reduced-motion preference the driver runs
//! exactly one update+render pass instead of a continuous tick loop. The
//! orbs still appear, they just do not drift.

/// Whether the field runs a continuous tick loop or a single static pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MotionPreference {
    /// Continuous per-frame animation.
    #[default]
    Animated,
    /// One update+render pass, then hold still.
    Reduced,
}

impl MotionPreference {
    #[must_use]
    pub const fn is_animated(self) -> bool {
        matches!(self, Self::Animated)
    }

    /// Map an environment flag (e.g. `prefers-reduced-motion`) to a preference.
    #[must_use]
    pub const fn from_reduced_flag(reduced: bool) -> Self {
        if reduced { Self::Reduced } else { Self::Animated }
    }
}
