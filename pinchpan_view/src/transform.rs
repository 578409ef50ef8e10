// Copyright 2026 the Pinchpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

/// The committed pan/zoom state of a surface.
///
/// A `Transform` is what a rendering sink receives: a uniform `scale` and a
/// `translation` in surface-local pixel units, relative to the container
/// center. It carries no gesture bookkeeping; see `pinchpan_gestures` for
/// the state machine that produces these values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Translation applied after scaling, in surface-local pixels.
    pub translation: Vec2,
    /// Uniform zoom factor. `1.0` means the surface is shown at its
    /// natural size.
    pub scale: f64,
}

impl Transform {
    /// The resting transform: no translation, scale `1.0`.
    pub const IDENTITY: Self = Self {
        translation: Vec2::ZERO,
        scale: 1.0,
    };

    /// Creates a transform from a translation and a uniform scale.
    #[must_use]
    pub const fn new(translation: Vec2, scale: f64) -> Self {
        Self { translation, scale }
    }

    /// Returns `true` if this transform displays the surface at rest.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.scale == 1.0 && self.translation == Vec2::ZERO
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::Transform;

    #[test]
    fn identity_is_default() {
        assert_eq!(Transform::default(), Transform::IDENTITY);
        assert!(Transform::IDENTITY.is_identity());
    }

    #[test]
    fn non_identity_is_detected() {
        assert!(!Transform::new(Vec2::ZERO, 2.0).is_identity());
        assert!(!Transform::new(Vec2::new(1.0, 0.0), 1.0).is_identity());
    }
}
