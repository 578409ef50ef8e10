// Copyright 2026 the Pinchpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-surface gesture record: the live scale and translation plus the
//! transient bookkeeping a gesture in flight needs.
//!
//! One `GestureState` exists per attached surface, owned exclusively by
//! that surface's controller. It is created with resting defaults at
//! attachment and deliberately *not* reset when the surface is
//! re-configured, so a user's zoom survives configuration changes.

use kurbo::{Point, Vec2};

/// Mutable pan/zoom state for one surface.
///
/// `scale` and `translation` are the live values; everything else is
/// gesture bookkeeping. The anchor fields are meaningful only while the
/// corresponding activity flag is set: `anchor` holds the translation
/// snapshot of a starting zoom, or the grab offset of an active drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureState {
    /// Current zoom factor. Held in `[1.0, max_zoom]` after any commit.
    pub scale: f64,
    /// Current translation in surface-local pixels.
    pub translation: Vec2,
    /// Scale snapshot at the start of the active gesture.
    pub start_scale: f64,
    /// Position anchor of the active gesture.
    pub anchor: Vec2,
    /// A drag is in progress.
    pub is_dragging: bool,
    /// A zoom gesture is in progress.
    pub is_zooming: bool,
    /// Clamped scale at the start of the active pinch.
    pub pinch_start_scale: f64,
    /// Contact span at the start of the active pinch.
    pub pinch_start_span: f64,
    /// A first tap landed and its confirmation window is open.
    pub tapped_twice: bool,
}

impl GestureState {
    /// Begins a drag grabbed at `pointer`: the anchor holds the offset
    /// between the grab point and the current translation, so later moves
    /// set `translation = pointer − anchor`.
    pub fn begin_drag(&mut self, pointer: Point) {
        self.is_dragging = true;
        self.anchor = pointer.to_vec2() - self.translation;
    }

    /// Ends the drag, if any.
    pub fn end_drag(&mut self) {
        self.is_dragging = false;
    }

    /// Snapshots the current scale and translation as the zoom anchor.
    pub fn snapshot_zoom_anchor(&mut self) {
        self.start_scale = self.scale;
        self.anchor = self.translation;
    }
}

impl Default for GestureState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            translation: Vec2::ZERO,
            start_scale: 1.0,
            anchor: Vec2::ZERO,
            is_dragging: false,
            is_zooming: false,
            pinch_start_scale: 1.0,
            pinch_start_span: 0.0,
            tapped_twice: false,
        }
    }
}
