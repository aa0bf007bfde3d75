#![forbid(unsafe_code)]

//! Delay-and-coalesce for high-frequency event streams.
//!
//! There is no ambient timer in a single-threaded cooperative loop, so the
//! debouncer is a small state machine driven by explicit [`Instant`]s: the
//! event handler calls [`Debouncer::record_at`], the driver loop calls
//! [`Debouncer::poll_at`] once per tick. At most one firing is ever pending.
//!
//! Two edge modes:
//!
//! | Mode | Fires | Reported by |
//! |------|-------|-------------|
//! | [`DebounceEdge::Trailing`] | once, `wait` after the last call of a burst | `poll_at` |
//! | [`DebounceEdge::Leading`] | on the first call of a burst, then suppressed until the quiet window elapses | `record_at` |

use std::time::{Duration, Instant};

/// Which edge of a call burst triggers the wrapped action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebounceEdge {
    /// Fire after the burst quiesces.
    Trailing,
    /// Fire immediately on the first call, suppress the rest of the burst.
    Leading,
}

/// Coalesces a burst of calls into a single firing.
#[derive(Debug, Clone)]
pub struct Debouncer {
    wait: Duration,
    edge: DebounceEdge,
    /// End of the current quiet window, if a burst is in progress.
    deadline: Option<Instant>,
}

impl Debouncer {
    #[must_use]
    pub const fn new(wait: Duration, edge: DebounceEdge) -> Self {
        Self {
            wait,
            edge,
            deadline: None,
        }
    }

    /// Register one call of the burst at `now`.
    ///
    /// Returns `true` when the action should run immediately, which only
    /// happens in [`DebounceEdge::Leading`] mode on the first call of a
    /// burst. Every call re-arms the quiet window.
    pub fn record_at(&mut self, now: Instant) -> bool {
        // An expired window means the previous burst is over.
        if self.deadline.is_some_and(|d| now >= d) && matches!(self.edge, DebounceEdge::Leading) {
            self.deadline = None;
        }
        let fire = matches!(self.edge, DebounceEdge::Leading) && self.deadline.is_none();
        self.deadline = Some(now + self.wait);
        fire
    }

    /// Check whether a pending trailing firing is due at `now`.
    ///
    /// Returns `true` at most once per burst. In leading mode this never
    /// returns `true`; it only expires the suppression window.
    pub fn poll_at(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                matches!(self.edge, DebounceEdge::Trailing)
            }
            _ => false,
        }
    }

    /// Whether a burst window is currently armed.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Drop any pending firing without running it.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[must_use]
    pub const fn wait(&self) -> Duration {
        self.wait
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WAIT: Duration = Duration::from_millis(250);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    // ---------------------------------------------------------------
    // Trailing semantics
    // ---------------------------------------------------------------

    #[test]
    fn trailing_burst_fires_exactly_once_after_quiet() {
        let base = Instant::now();
        let mut d = Debouncer::new(WAIT, DebounceEdge::Trailing);

        // Calls every 100ms for 1s: none fires immediately.
        for i in 0..=10 {
            assert!(!d.record_at(base + ms(i * 100)));
        }

        // Polling during the burst and before the quiet window: nothing.
        assert!(!d.poll_at(base + ms(1000)));
        assert!(!d.poll_at(base + ms(1249)));

        // Exactly one firing 250ms after the last call.
        assert!(d.poll_at(base + ms(1250)));
        assert!(!d.poll_at(base + ms(1251)));
        assert!(!d.is_pending());
    }

    #[test]
    fn trailing_timer_resets_on_every_call() {
        let base = Instant::now();
        let mut d = Debouncer::new(WAIT, DebounceEdge::Trailing);

        d.record_at(base);
        // Re-arm just before the deadline would have passed.
        d.record_at(base + ms(249));
        assert!(!d.poll_at(base + ms(250)));
        assert!(d.poll_at(base + ms(499)));
    }

    #[test]
    fn trailing_separate_bursts_fire_separately() {
        let base = Instant::now();
        let mut d = Debouncer::new(WAIT, DebounceEdge::Trailing);

        d.record_at(base);
        assert!(d.poll_at(base + ms(250)));

        d.record_at(base + ms(1000));
        assert!(d.poll_at(base + ms(1250)));
    }

    #[test]
    fn poll_without_record_never_fires() {
        let base = Instant::now();
        let mut d = Debouncer::new(WAIT, DebounceEdge::Trailing);
        assert!(!d.poll_at(base + ms(10_000)));
    }

    #[test]
    fn cancel_drops_pending_firing() {
        let base = Instant::now();
        let mut d = Debouncer::new(WAIT, DebounceEdge::Trailing);
        d.record_at(base);
        assert!(d.is_pending());
        d.cancel();
        assert!(!d.poll_at(base + ms(250)));
    }

    // ---------------------------------------------------------------
    // Leading semantics
    // ---------------------------------------------------------------

    #[test]
    fn leading_fires_on_first_call_only() {
        let base = Instant::now();
        let mut d = Debouncer::new(WAIT, DebounceEdge::Leading);

        assert!(d.record_at(base));
        for i in 1..=10 {
            assert!(!d.record_at(base + ms(i * 100)));
        }
        // The trailing poll never fires in leading mode.
        assert!(!d.poll_at(base + ms(1250)));
    }

    #[test]
    fn leading_fires_again_after_quiet_window() {
        let base = Instant::now();
        let mut d = Debouncer::new(WAIT, DebounceEdge::Leading);

        assert!(d.record_at(base));
        assert!(!d.record_at(base + ms(100)));
        // 250ms of quiet after the last call: next call is a new burst.
        assert!(d.record_at(base + ms(100 + 250)));
    }

    #[test]
    fn leading_suppresses_within_quiet_window() {
        let base = Instant::now();
        let mut d = Debouncer::new(WAIT, DebounceEdge::Leading);

        assert!(d.record_at(base));
        assert!(!d.record_at(base + ms(249)));
        // The previous call re-armed the window; still suppressed.
        assert!(!d.record_at(base + ms(400)));
    }
}
