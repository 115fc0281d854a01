#![forbid(unsafe_code)]

//! Width transitions for crumbs that appear or disappear.
//!
//! A [`WidthTransition`] interpolates a crumb's rendered width between two
//! cell counts over a duration. Transitions are time-driven: the host calls
//! [`WidthTransition::tick`] from its frame loop, and the owner polls
//! [`WidthTransition::is_complete`] to run completion effects.
//!
//! # Invariants
//!
//! 1. `width()` starts at `from` and ends exactly at `to`.
//! 2. `finish()` jumps to the end state; a finished transition is complete.
//! 3. A zero duration completes on the first tick (or `finish()`).

use std::time::Duration;

/// Quadratic ease-out: fast start, slow landing.
#[inline]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// What happens to the crumb once the transition lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Grow from zero to the natural width; the crumb counts as shown on completion.
    Reveal,
    /// Shrink to zero; the crumb is hidden on completion.
    Collapse,
}

/// Interpolates a width in cells between `from` and `to`.
#[derive(Debug, Clone, Copy)]
pub struct WidthTransition {
    kind: TransitionKind,
    from: u16,
    to: u16,
    elapsed: Duration,
    duration: Duration,
}

impl WidthTransition {
    /// Grow from 0 to `width` over `duration`.
    #[must_use]
    pub fn reveal(width: u16, duration: Duration) -> Self {
        Self::new(TransitionKind::Reveal, 0, width, duration)
    }

    /// Shrink from `width` to 0 over `duration`.
    #[must_use]
    pub fn collapse(width: u16, duration: Duration) -> Self {
        Self::new(TransitionKind::Collapse, width, 0, duration)
    }

    fn new(kind: TransitionKind, from: u16, to: u16, duration: Duration) -> Self {
        Self {
            kind,
            from,
            to,
            elapsed: Duration::ZERO,
            duration,
        }
    }

    /// Reveal or collapse.
    #[inline]
    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    /// Advance by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    /// Jump to the end state.
    pub fn finish(&mut self) {
        self.elapsed = self.elapsed.max(self.duration);
    }

    /// Whether the end state has been reached.
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return if self.is_complete() { 1.0 } else { 0.0 };
        }
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        (t as f32).clamp(0.0, 1.0)
    }

    /// Current interpolated width.
    pub fn width(&self) -> u16 {
        if self.is_complete() {
            return self.to;
        }
        let t = ease_out(self.progress());
        let range = f32::from(self.to) - f32::from(self.from);
        let w = f32::from(self.from) + range * t;
        w.round().clamp(0.0, f32::from(u16::MAX)) as u16
    }
}
