#![forbid(unsafe_code)]

//! The orb field: registry and driver loop.
//!
//! An [`OrbField`] owns a fixed set of orbs plus the context they share —
//! rng, noise field, palette, viewport. There is no global state: everything
//! the animation needs is constructed here once and passed down explicitly.
//!
//! Time enters through explicit [`Instant`]s (`tick_at`, `notify_resize_at`)
//! so the whole driver is deterministic under test.

use std::time::{Duration, Instant};

use orbfx_core::{
    Bounds, CircleSurface, DebounceEdge, Debouncer, HueVarSink, MotionPreference, Viewport,
};
use orbfx_style::Palette;

use crate::noise::SimplexNoise;
use crate::orb::{DriftRegion, Orb, OrbParams, random_in};

/// Orb radii are drawn from [height / RADIUS_DIV_MAX, height / RADIUS_DIV_MIN].
const RADIUS_DIV_MIN: f64 = 3.0;
const RADIUS_DIV_MAX: f64 = 6.0;

/// Per-tick noise phase step range.
const SPEED_MIN: f64 = 0.001;
const SPEED_MAX: f64 = 0.003;

/// Configuration for an orb field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbFieldConfig {
    /// How many orbs to animate.
    pub orb_count: usize,
    /// Quiet window before a resize recomputes bounds.
    pub resize_debounce: Duration,
    /// Continuous animation or a single static pass.
    pub motion: MotionPreference,
    /// Which rectangle confines the orbs.
    pub region: DriftRegion,
    /// Fill opacity the renderer should draw orbs with.
    pub alpha: f64,
    /// Rng seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for OrbFieldConfig {
    fn default() -> Self {
        Self {
            orb_count: 4,
            resize_debounce: Duration::from_millis(250),
            motion: MotionPreference::Animated,
            region: DriftRegion::FullViewport,
            alpha: 0.825,
            seed: None,
        }
    }
}

/// Owns the orbs and advances them once per frame tick.
#[derive(Debug)]
pub struct OrbField {
    region: DriftRegion,
    motion: MotionPreference,
    alpha: f64,
    rng: fastrand::Rng,
    noise: SimplexNoise,
    palette: Palette,
    orbs: Vec<Orb>,
    viewport: Viewport,
    resize: Debouncer,
    /// Set after the single update pass under reduced motion.
    static_pass_done: bool,
}

impl OrbField {
    /// Build a field: seed the rng and noise once, generate the initial
    /// palette, and spawn `orb_count` orbs with palette fills.
    #[must_use]
    pub fn new(config: OrbFieldConfig, viewport: Viewport) -> Self {
        let mut rng = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        let noise = SimplexNoise::with_seed(rng.u64(..));
        let palette = Palette::generate(&mut rng);
        let bounds = config.region.bounds_for(viewport);

        let orbs = (0..config.orb_count)
            .map(|_| {
                let params = OrbParams::new(
                    palette.pick(&mut rng),
                    random_radius(viewport, &mut rng),
                )
                .with_speed(random_in(&mut rng, SPEED_MIN, SPEED_MAX));
                Orb::spawn(params, bounds, &mut rng)
            })
            .collect();

        tracing::debug!(
            orbs = config.orb_count,
            base_hue = palette.base_hue(),
            motion = ?config.motion,
            "orb field created"
        );

        Self {
            region: config.region,
            motion: config.motion,
            alpha: config.alpha,
            rng,
            noise,
            palette,
            orbs,
            viewport,
            resize: Debouncer::new(config.resize_debounce, DebounceEdge::Trailing),
            static_pass_done: false,
        }
    }

    /// Advance one frame at `now`: apply a quiesced resize, then tick every
    /// orb (once only, under reduced motion).
    pub fn tick_at(&mut self, now: Instant) {
        if self.resize.poll_at(now) {
            let bounds = self.region.bounds_for(self.viewport);
            for orb in &mut self.orbs {
                orb.set_bounds(bounds);
            }
            tracing::debug!(?bounds, "resize applied");
        }

        if self.motion.is_animated() || !self.static_pass_done {
            for orb in &mut self.orbs {
                orb.tick(&self.noise);
            }
            self.static_pass_done = true;
        }
    }

    /// Push the current frame to a rendering surface: clear, then one filled
    /// circle per orb.
    pub fn render_to(&self, surface: &mut impl CircleSurface) {
        surface.clear();
        for orb in &self.orbs {
            surface.fill_circle(
                orb.x(),
                orb.y(),
                orb.scaled_radius(),
                orb.fill().to_packed(),
            );
        }
    }

    /// One full frame: tick then render.
    pub fn step_at(&mut self, now: Instant, surface: &mut impl CircleSurface) {
        self.tick_at(now);
        self.render_to(surface);
    }

    /// Replace the palette wholesale. Every orb gets a fresh fill from the
    /// new palette and a fresh radius, as if respawned in place.
    ///
    /// The field does not own a [`HueVarSink`], so callers mirroring the
    /// palette hues must call [`publish_palette`](Self::publish_palette)
    /// again afterwards; the old hues are stale from this point on.
    pub fn regenerate_palette(&mut self) {
        self.palette = Palette::generate(&mut self.rng);
        let viewport = self.viewport;
        for orb in &mut self.orbs {
            orb.set_fill(self.palette.pick(&mut self.rng));
            orb.set_radius(random_radius(viewport, &mut self.rng));
        }
        tracing::debug!(base_hue = self.palette.base_hue(), "palette regenerated");
    }

    /// Record a resize event at `now`. Bounds recompute only after the
    /// resize stream has been quiet for the configured window; orbs are
    /// never repositioned directly.
    pub fn notify_resize_at(&mut self, viewport: Viewport, now: Instant) {
        self.viewport = viewport;
        self.resize.record_at(now);
        tracing::trace!(width = viewport.width, height = viewport.height, "resize recorded");
    }

    /// Publish the palette hues to the styling-variable collaborator.
    pub fn publish_palette(&self, sink: &mut impl HueVarSink) {
        self.palette.publish_to(sink);
    }

    #[must_use]
    pub fn orbs(&self) -> &[Orb] {
        &self.orbs
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn motion(&self) -> MotionPreference {
        self.motion
    }

    /// Fill opacity for renderers that support blending.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// The bounds orbs are currently confined to (post-resize values apply
    /// only after the debounce window).
    #[must_use]
    pub fn current_bounds(&self) -> Option<Bounds> {
        self.orbs.first().map(Orb::bounds)
    }

    /// Whether a resize is waiting for its quiet window.
    #[must_use]
    pub fn resize_pending(&self) -> bool {
        self.resize.is_pending()
    }
}

fn random_radius(viewport: Viewport, rng: &mut fastrand::Rng) -> f64 {
    random_in(
        rng,
        viewport.height / RADIUS_DIV_MAX,
        viewport.height / RADIUS_DIV_MIN,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> OrbField {
        OrbField::new(
            OrbFieldConfig {
                seed: Some(77),
                ..Default::default()
            },
            Viewport::new(800.0, 600.0),
        )
    }

    #[test]
    fn default_config_values() {
        let cfg = OrbFieldConfig::default();
        assert_eq!(cfg.orb_count, 4);
        assert_eq!(cfg.resize_debounce, Duration::from_millis(250));
        assert_eq!(cfg.motion, MotionPreference::Animated);
        assert_eq!(cfg.region, DriftRegion::FullViewport);
        assert!((cfg.alpha - 0.825).abs() < f64::EPSILON);
        assert!(cfg.seed.is_none());
    }

    #[test]
    fn spawns_configured_orb_count_with_palette_fills() {
        let f = field();
        assert_eq!(f.orbs().len(), 4);
        for orb in f.orbs() {
            assert!(f.palette().colors().contains(&orb.fill()));
        }
    }

    #[test]
    fn orb_radii_relative_to_viewport_height() {
        let f = field();
        for orb in f.orbs() {
            assert!(orb.radius() >= 600.0 / 6.0 && orb.radius() <= 600.0 / 3.0);
        }
    }

    #[test]
    fn same_seed_same_field() {
        let a = field();
        let b = field();
        for (x, y) in a.orbs().iter().zip(b.orbs()) {
            assert_eq!(x, y);
        }
        assert_eq!(a.palette(), b.palette());
    }

    #[test]
    fn regenerate_replaces_fills_and_radii_from_new_palette() {
        let mut f = field();
        f.regenerate_palette();
        for orb in f.orbs() {
            assert!(f.palette().colors().contains(&orb.fill()));
            assert!(orb.radius() >= 600.0 / 6.0 && orb.radius() <= 600.0 / 3.0);
        }
    }

    #[test]
    fn reduced_motion_ticks_exactly_once() {
        let base = Instant::now();
        let mut f = OrbField::new(
            OrbFieldConfig {
                motion: MotionPreference::Reduced,
                seed: Some(5),
                ..Default::default()
            },
            Viewport::new(800.0, 600.0),
        );

        f.tick_at(base);
        let after_first: Vec<(f64, f64)> = f.orbs().iter().map(|o| (o.x(), o.y())).collect();

        f.tick_at(base + Duration::from_millis(16));
        let after_second: Vec<(f64, f64)> = f.orbs().iter().map(|o| (o.x(), o.y())).collect();

        assert_eq!(after_first, after_second);
    }

    #[test]
    fn animated_motion_keeps_moving() {
        let base = Instant::now();
        let mut f = field();
        f.tick_at(base);
        let first: Vec<(f64, f64)> = f.orbs().iter().map(|o| (o.x(), o.y())).collect();
        f.tick_at(base + Duration::from_millis(16));
        let second: Vec<(f64, f64)> = f.orbs().iter().map(|o| (o.x(), o.y())).collect();
        assert_ne!(first, second);
    }

    #[test]
    fn resize_applies_only_after_quiet_window() {
        let base = Instant::now();
        let mut f = field();
        let old_bounds = f.current_bounds().unwrap();

        f.notify_resize_at(Viewport::new(1024.0, 768.0), base);
        assert!(f.resize_pending());

        // Before the window elapses the old bounds still apply.
        f.tick_at(base + Duration::from_millis(100));
        assert_eq!(f.current_bounds().unwrap(), old_bounds);

        // After 250ms of quiet the new bounds take effect.
        f.tick_at(base + Duration::from_millis(251));
        assert_eq!(
            f.current_bounds().unwrap(),
            Bounds::new(0.0, 1024.0, 0.0, 768.0)
        );
        assert!(!f.resize_pending());
    }

    #[test]
    fn resize_storm_coalesces_to_one_recompute() {
        let base = Instant::now();
        let mut f = field();

        for i in 0..10 {
            f.notify_resize_at(
                Viewport::new(800.0 + i as f64, 600.0),
                base + Duration::from_millis(i * 100),
            );
            f.tick_at(base + Duration::from_millis(i * 100 + 1));
        }
        // Still the spawn bounds: no window has elapsed between events.
        assert_eq!(
            f.current_bounds().unwrap(),
            Bounds::new(0.0, 800.0, 0.0, 600.0)
        );

        f.tick_at(base + Duration::from_millis(900 + 250));
        assert_eq!(
            f.current_bounds().unwrap(),
            Bounds::new(0.0, 809.0, 0.0, 600.0)
        );
    }
}
