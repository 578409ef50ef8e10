// Copyright 2026 the Pinchpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

/// Clamps a zoom factor into `[1.0, max_scale]`.
///
/// Written as `max(1.0, min(max_scale, value))` so that a `max_scale` below
/// `1.0` pins the result to `1.0` rather than panicking; callers use
/// `max_scale == 1.0` as a "zoom disabled" sentinel.
#[must_use]
pub fn clamp_scale(value: f64, max_scale: f64) -> f64 {
    value.min(max_scale).max(1.0)
}

/// Clamps a translation component so the scaled surface stays inside its
/// container on one axis.
///
/// `half` is the scaled half-extent of the surface. The upper bound keeps
/// the surface's trailing edge from receding past the container edge, the
/// lower bound the leading edge. The lower bound is applied last, so it
/// wins when the scaled surface is smaller than the container and the two
/// bounds cross.
#[must_use]
pub fn clamp_axis(scale: f64, value: f64, surface_extent: f64, container_extent: f64) -> f64 {
    let half = surface_extent * scale / 2.0;
    let value = value.min(half - container_extent / 2.0);
    value.max(container_extent / 2.0 - half)
}

/// Clamps a translation on both axes, independently, against the surface
/// and container sizes.
#[must_use]
pub fn clamp_translation(scale: f64, translation: Vec2, surface: Size, container: Size) -> Vec2 {
    Vec2::new(
        clamp_axis(scale, translation.x, surface.width, container.width),
        clamp_axis(scale, translation.y, surface.height, container.height),
    )
}

#[cfg(test)]
mod tests {
    use kurbo::{Size, Vec2};

    use super::{clamp_axis, clamp_scale, clamp_translation};

    #[test]
    fn scale_stays_in_range() {
        assert_eq!(clamp_scale(0.5, 3.0), 1.0);
        assert_eq!(clamp_scale(1.0, 3.0), 1.0);
        assert_eq!(clamp_scale(2.0, 3.0), 2.0);
        assert_eq!(clamp_scale(5.0, 3.0), 3.0);
    }

    #[test]
    fn unit_max_scale_pins_to_one() {
        // `max_scale == 1.0` is the zoom-disabled sentinel; any input maps
        // to exactly 1.0 without panicking.
        assert_eq!(clamp_scale(0.2, 1.0), 1.0);
        assert_eq!(clamp_scale(7.0, 1.0), 1.0);
    }

    #[test]
    fn axis_bounds_large_surface() {
        // 800px surface at 2x in a 400px container: translation may roam
        // within ±(800 - 200) = ±600.
        let half = 800.0 * 2.0 / 2.0;
        let hi = half - 200.0;
        assert_eq!(clamp_axis(2.0, 10_000.0, 800.0, 400.0), hi);
        assert_eq!(clamp_axis(2.0, -10_000.0, 800.0, 400.0), -hi);
        assert_eq!(clamp_axis(2.0, 42.0, 800.0, 400.0), 42.0);
    }

    #[test]
    fn axis_lower_bound_wins_when_bounds_cross() {
        // 100px surface at 1x in a 400px container: the bounds cross
        // (upper = -150, lower = +150) and the lower bound wins.
        assert_eq!(clamp_axis(1.0, 0.0, 100.0, 400.0), 150.0);
        assert_eq!(clamp_axis(1.0, 999.0, 100.0, 400.0), 150.0);
    }

    #[test]
    fn translation_axes_are_independent() {
        let clamped = clamp_translation(
            2.0,
            Vec2::new(10_000.0, 0.0),
            Size::new(800.0, 600.0),
            Size::new(400.0, 300.0),
        );
        assert_eq!(clamped.x, 800.0 - 200.0);
        assert_eq!(clamped.y, 0.0);
    }

    #[test]
    fn surface_edge_never_recedes_past_container_half() {
        // The clamp invariant: for any input, the scaled surface's edge is
        // never farther than container_extent / 2 from center.
        for &value in &[-1e6, -123.0, 0.0, 57.5, 1e6] {
            for &scale in &[1.0, 1.5, 2.0, 3.0] {
                let v = clamp_axis(scale, value, 640.0, 480.0);
                let half = 640.0 * scale / 2.0;
                assert!(v <= (half - 240.0).max(240.0 - half));
                assert!(v >= 240.0 - half);
            }
        }
    }
}
