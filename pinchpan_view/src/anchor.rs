// Copyright 2026 the Pinchpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};

/// Computes the translation that keeps `focal` visually fixed while the
/// surface is displayed at `scale`.
///
/// The offset from the container center to the focal point is scaled by
/// `(1 - scale)`: at scale `1.0` the translation is zero, and as the scale
/// grows the surface slides so the content under the focal point stays put.
///
/// The result is an absolute translation, not a delta. It depends only on
/// the focal point and the final scale, so repeated zoom steps at the same
/// focal point are path-independent.
///
/// This recenter runs on the wheel-zoom and native-pinch paths; multi-touch
/// pinch tracks the touch midpoint directly instead.
#[must_use]
pub fn recenter_about(focal: Point, container: Rect, scale: f64) -> Vec2 {
    let offset = container.center() - focal;
    offset * (1.0 - scale)
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Vec2};

    use super::recenter_about;

    const CONTAINER: Rect = Rect::new(0.0, 0.0, 400.0, 300.0);

    #[test]
    fn unit_scale_yields_zero_translation() {
        let t = recenter_about(Point::new(50.0, 50.0), CONTAINER, 1.0);
        assert_eq!(t, Vec2::ZERO);
    }

    #[test]
    fn focal_at_center_never_translates() {
        for &scale in &[1.0, 1.5, 2.0, 3.0] {
            let t = recenter_about(CONTAINER.center(), CONTAINER, scale);
            assert_eq!(t, Vec2::ZERO);
        }
    }

    #[test]
    fn zooming_toward_a_corner_pulls_content_outward() {
        // Focal point left of and above center: the offset (center - focal)
        // is positive, so at scale > 1 the translation goes negative.
        let t = recenter_about(Point::new(50.0, 50.0), CONTAINER, 2.0);
        assert_eq!(t, Vec2::new(-150.0, -100.0));
    }

    #[test]
    fn recenter_is_path_independent() {
        let focal = Point::new(50.0, 50.0);
        let direct = recenter_about(focal, CONTAINER, 2.0);
        // Stepping through intermediate scales leaves no residue; only the
        // final scale matters.
        let _ = recenter_about(focal, CONTAINER, 1.2);
        let _ = recenter_about(focal, CONTAINER, 1.7);
        let stepped = recenter_about(focal, CONTAINER, 2.0);
        assert_eq!(direct, stepped);
    }

    #[test]
    fn offset_scales_linearly_with_scale() {
        let focal = Point::new(100.0, 100.0);
        let at2 = recenter_about(focal, CONTAINER, 2.0);
        let at3 = recenter_about(focal, CONTAINER, 3.0);
        assert!((at3.x - 2.0 * at2.x).abs() < 1e-12);
        assert!((at3.y - 2.0 * at2.y).abs() < 1e-12);
    }
}
