// Copyright 2026 the Pinchpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The abstract input event type and its geometry helpers.
//!
//! Hosts translate their platform's raw events (DOM, winit, test fixtures)
//! into [`InputEvent`] values and feed them to the controller one at a
//! time, together with a millisecond timestamp. Positions are expressed in
//! the same coordinate space as the surface's container rect — client
//! coordinates for a DOM host.

use bitflags::bitflags;
use kurbo::Point;
use smallvec::SmallVec;

bitflags! {
    /// Keyboard modifiers held while an event fired.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        /// Shift key.
        const SHIFT = 1 << 0;
        /// Control key.
        const CTRL = 1 << 1;
        /// Alt / Option key.
        const ALT = 1 << 2;
        /// Meta / Command key.
        const META = 1 << 3;
    }
}

impl Modifiers {
    /// Returns `true` if a zoom-switching modifier (Control or Meta) is
    /// held. A modified wheel event zooms instead of scrolling, and a
    /// modified pointer press is left to the host.
    #[must_use]
    pub fn has_zoom_modifier(self) -> bool {
        self.intersects(Self::CTRL | Self::META)
    }
}

/// Active touch contacts, inline up to the two the pinch paths care about.
pub type TouchList = SmallVec<[Point; 2]>;

/// One normalized pointing-device event.
///
/// The variants cover the four input modalities the controller reconciles:
/// mouse wheel, single mouse drag, multi-touch, and native pinch gestures.
/// `PointerUp` stands in for the whole release family (up, leave, out,
/// context menu), which the state machine treats identically.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// A wheel or scroll event at `position` in container coordinates.
    Wheel {
        /// Cursor position.
        position: Point,
        /// Vertical wheel delta; negative values zoom in.
        delta_y: f64,
        /// Modifiers held.
        modifiers: Modifiers,
    },
    /// Touch contacts appeared; `touches` is the full active set.
    TouchStart {
        /// All active contacts.
        touches: TouchList,
    },
    /// Touch contacts moved; `touches` is the full active set.
    TouchMove {
        /// All active contacts.
        touches: TouchList,
    },
    /// A touch sequence ended.
    TouchEnd,
    /// A native pinch gesture began at `position`.
    GestureStart {
        /// Gesture focal position.
        position: Point,
    },
    /// A native pinch gesture changed.
    GestureChange {
        /// Gesture focal position.
        position: Point,
        /// Scale factor relative to the gesture start, as reported by the
        /// platform.
        scale: f64,
    },
    /// A native pinch gesture ended.
    GestureEnd,
    /// A mouse button was pressed at `position`.
    PointerDown {
        /// Pointer position.
        position: Point,
        /// Modifiers held.
        modifiers: Modifiers,
    },
    /// The mouse moved to `position`.
    PointerMove {
        /// Pointer position.
        position: Point,
    },
    /// The mouse was released, left the surface, or opened a context menu.
    PointerUp,
}

/// Returns the midpoint and span of the first two contacts, or `None` when
/// fewer than two are active.
#[must_use]
pub fn pinch_geometry(touches: &[Point]) -> Option<(Point, f64)> {
    let [a, b, ..] = touches else {
        return None;
    };
    let midpoint = a.midpoint(*b);
    let span = (*b - *a).hypot();
    Some((midpoint, span))
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{Modifiers, pinch_geometry};

    #[test]
    fn zoom_modifier_is_ctrl_or_meta() {
        assert!(Modifiers::CTRL.has_zoom_modifier());
        assert!(Modifiers::META.has_zoom_modifier());
        assert!((Modifiers::CTRL | Modifiers::SHIFT).has_zoom_modifier());
        assert!(!Modifiers::SHIFT.has_zoom_modifier());
        assert!(!Modifiers::ALT.has_zoom_modifier());
        assert!(!Modifiers::empty().has_zoom_modifier());
    }

    #[test]
    fn pinch_geometry_needs_two_contacts() {
        assert_eq!(pinch_geometry(&[]), None);
        assert_eq!(pinch_geometry(&[Point::new(1.0, 1.0)]), None);
    }

    #[test]
    fn pinch_geometry_midpoint_and_span() {
        let (mid, span) =
            pinch_geometry(&[Point::new(0.0, 0.0), Point::new(100.0, 0.0)]).unwrap();
        assert_eq!(mid, Point::new(50.0, 0.0));
        assert_eq!(span, 100.0);

        let (mid, span) =
            pinch_geometry(&[Point::new(10.0, 20.0), Point::new(40.0, 60.0)]).unwrap();
        assert_eq!(mid, Point::new(25.0, 40.0));
        assert_eq!(span, 50.0);
    }

    #[test]
    fn pinch_geometry_ignores_extra_contacts() {
        let (mid, _) = pinch_geometry(&[
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(999.0, 999.0),
        ])
        .unwrap();
        assert_eq!(mid, Point::new(5.0, 0.0));
    }
}
