// Copyright 2026 the Pinchpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The snap animation: a timed scale correction toward a fixed target.
//!
//! A confirmed double-tap (or its two-finger-tap alias) snaps the scale to
//! either full zoom or rest, whichever is farther in a halving sense: below
//! the midpoint of the range the snap zooms in to `max_zoom`, at or above
//! it the snap zooms out to `1.0`.
//!
//! The animation approaches its target exponentially — every step moves
//! halfway — and a wall-clock deadline then force-sets the exact target, so
//! convergence never depends on the asymptotic tail. At most one animation
//! runs per surface; the controller holds it in an `Option` that doubles as
//! the single-flight token.

use pinchpan_timing::Interval;

/// Milliseconds between snap steps.
pub const SNAP_STEP_MS: u64 = 50;

/// Total snap duration in milliseconds; when it elapses the target is
/// force-set exactly.
pub const SNAP_DURATION_MS: u64 = 500;

/// Picks the snap target for the current scale: `max_zoom` below the
/// midpoint of the range, `1.0` at or above it.
#[must_use]
pub fn snap_target(scale: f64, max_zoom: f64) -> f64 {
    if scale < max_zoom / 2.0 { max_zoom } else { 1.0 }
}

/// One running snap animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct SnapAnimation {
    target: f64,
    step: Interval,
    finish_at: u64,
}

impl SnapAnimation {
    /// Starts an animation at `now_ms` toward `target`.
    pub(crate) fn start(now_ms: u64, target: f64) -> Self {
        Self {
            target,
            step: Interval::starting_at(now_ms + SNAP_STEP_MS, SNAP_STEP_MS),
            finish_at: now_ms + SNAP_DURATION_MS,
        }
    }

    /// The scale this animation drives toward.
    pub(crate) fn target(&self) -> f64 {
        self.target
    }

    /// Fires one due step, if any.
    pub(crate) fn step(&mut self, now_ms: u64) -> bool {
        self.step.fire(now_ms)
    }

    /// Returns `true` once the force-set deadline has passed.
    pub(crate) fn finished(&self, now_ms: u64) -> bool {
        now_ms >= self.finish_at
    }

    /// The next timestamp at which this animation wants to run.
    pub(crate) fn next_due(&self) -> u64 {
        self.step.next_at().min(self.finish_at)
    }
}

#[cfg(test)]
mod tests {
    use super::{SNAP_DURATION_MS, SNAP_STEP_MS, SnapAnimation, snap_target};

    #[test]
    fn target_picks_the_far_end() {
        assert_eq!(snap_target(1.0, 3.0), 3.0);
        assert_eq!(snap_target(1.49, 3.0), 3.0);
        assert_eq!(snap_target(1.5, 3.0), 1.0);
        assert_eq!(snap_target(2.9, 3.0), 1.0);
    }

    #[test]
    fn steps_fire_until_the_finish_deadline() {
        let mut snap = SnapAnimation::start(1_000, 3.0);
        assert_eq!(snap.target(), 3.0);
        assert!(!snap.finished(1_000));

        assert!(!snap.step(1_000));
        assert!(snap.step(1_000 + SNAP_STEP_MS));
        assert!(!snap.step(1_000 + SNAP_STEP_MS));

        assert!(snap.finished(1_000 + SNAP_DURATION_MS));
    }

    #[test]
    fn halving_approaches_but_needs_the_force_set() {
        // Ten 50ms steps halve the distance each time; the residue is why
        // the finish deadline force-sets the exact target.
        let mut scale = 1.0_f64;
        let target = 3.0_f64;
        for _ in 0..(SNAP_DURATION_MS / SNAP_STEP_MS) {
            scale = (target + scale) / 2.0;
        }
        assert!((target - scale).abs() < 0.01);
        assert!(scale != target);
    }

    #[test]
    fn next_due_is_step_until_the_end() {
        let snap = SnapAnimation::start(0, 1.0);
        assert_eq!(snap.next_due(), SNAP_STEP_MS);
    }
}
