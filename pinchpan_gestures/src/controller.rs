// Copyright 2026 the Pinchpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pan/zoom controller: one state machine per attached surface.
//!
//! [`PanZoom`] consumes [`InputEvent`]s one at a time, each tagged with the
//! host's current millisecond clock, and drives a [`Surface`] collaborator:
//! it clamps the resulting scale and translation, requests at most one
//! frame per batch of changes, and fires the configured zoom lifecycle
//! callbacks on gesture edges.
//!
//! Time never comes from a wall clock. Debounce windows and the snap
//! animation are deadlines fired from [`PanZoom::poll`], so hosts (and
//! tests) decide when time passes; [`PanZoom::next_deadline`] tells them
//! when the next call is worthwhile.

use core::fmt;

use kurbo::{Point, Rect, Size, Vec2};

use pinchpan_timing::Deadline;
use pinchpan_view::{Transform, clamp_scale, clamp_translation, recenter_about};

use crate::capability::{CapabilityProfile, DeviceDescriptor, PointingDevice};
use crate::config::Config;
use crate::event::{InputEvent, Modifiers, pinch_geometry};
use crate::snap::{SnapAnimation, snap_target};
use crate::state::GestureState;

/// Confirmation window for a second tap, in milliseconds.
pub const DOUBLE_TAP_WINDOW_MS: u64 = 500;

/// Delay between a touch release during zoom and the completion
/// notification, in milliseconds. Debounces the rapid release/press pairs
/// some platforms deliver mid-pinch. Once armed, the deadline always
/// fires; there is no cancel path.
pub const ZOOM_COMPLETE_DELAY_MS: u64 = 100;

/// Scales below this snap straight to `1.0` when a touch or native
/// gesture releases, without animating.
pub const SNAP_RELEASE_THRESHOLD: f64 = 1.1;

/// The rendering-side collaborator of a [`PanZoom`] controller.
///
/// The controller stays headless: it reads sizes from here when clamping,
/// hands the committed [`Transform`] back through [`Surface::set_transform`],
/// and asks for a refresh tick with [`Surface::request_frame`]. A host that
/// receives that request must call [`PanZoom::frame`] on its next refresh.
pub trait Surface {
    /// The unscaled size of the surface element.
    fn size(&self) -> Size;

    /// The bounding rect of the surface's immediate container, in the same
    /// coordinate space as input event positions, or `None` when the
    /// surface has no container.
    fn container_rect(&self) -> Option<Rect>;

    /// Displays the given transform.
    fn set_transform(&mut self, transform: Transform);

    /// Requests one [`PanZoom::frame`] call on the next refresh tick.
    fn request_frame(&mut self);
}

/// Pan/zoom state machine for one surface.
///
/// Create one with [`PanZoom::attach`]; the returned handle owns the
/// surface's gesture state for the lifetime of the attachment.
/// [`PanZoom::reconfigure`] swaps the configuration in place while
/// preserving that state, so a user's zoom survives configuration changes.
pub struct PanZoom<S: Surface> {
    surface: S,
    profile: CapabilityProfile,
    config: Config,
    state: GestureState,
    committed_scale: f64,
    frame_pending: bool,
    double_tap: Deadline,
    zoom_complete: Deadline,
    snap: Option<SnapAnimation>,
}

impl<S: Surface> PanZoom<S> {
    /// Attaches a controller to `surface` with the given capability
    /// snapshot and configuration.
    #[must_use]
    pub fn attach(surface: S, device: &DeviceDescriptor, config: Config) -> Self {
        Self {
            surface,
            profile: CapabilityProfile::from_descriptor(device),
            config,
            state: GestureState::default(),
            committed_scale: 1.0,
            frame_pending: false,
            double_tap: Deadline::idle(),
            zoom_complete: Deadline::idle(),
            snap: None,
        }
    }

    /// Replaces the configuration, preserving the surface's gesture state.
    pub fn reconfigure(&mut self, config: Config) {
        self.config = config;
    }

    /// Processes one input event at the host's current clock.
    ///
    /// Returns `true` when the event was consumed and the host should
    /// suppress its default action, `false` when the event was left alone
    /// (for example an unmodified wheel on an engine whose native scroll
    /// should keep working).
    pub fn handle_event(&mut self, event: InputEvent, now_ms: u64) -> bool {
        match event {
            InputEvent::Wheel {
                position,
                delta_y,
                modifiers,
            } => self.on_wheel(position, delta_y, modifiers, now_ms),
            InputEvent::TouchStart { touches } => self.on_touch_start(&touches, now_ms),
            InputEvent::TouchMove { touches } => self.on_touch_move(&touches),
            InputEvent::TouchEnd => self.on_touch_end(now_ms),
            InputEvent::GestureStart { position } => self.on_gesture_start(position, now_ms),
            InputEvent::GestureChange { position, scale } => {
                self.on_gesture_change(position, scale)
            }
            InputEvent::GestureEnd => self.on_gesture_end(),
            InputEvent::PointerDown {
                position,
                modifiers,
            } => self.on_pointer_down(position, modifiers),
            InputEvent::PointerMove { position } => self.on_pointer_move(position),
            InputEvent::PointerUp => self.on_pointer_up(),
        }
    }

    /// Fires every deadline and snap step due at `now_ms`.
    ///
    /// Hosts call this from their timer or frame loop; tests call it with
    /// a virtual clock. Steps that are overdue by several periods are
    /// caught up one at a time, each with its own commit.
    pub fn poll(&mut self, now_ms: u64) {
        if self.double_tap.fire(now_ms) {
            self.state.tapped_twice = false;
        }
        if self.zoom_complete.fire(now_ms) {
            self.complete_zoom();
        }
        if let Some(mut snap) = self.snap.take() {
            if snap.finished(now_ms) {
                self.state.scale = snap.target();
                self.commit();
                if let Some(trace) = self.config.trace.as_deref_mut() {
                    trace.snap_finished(snap.target());
                }
            } else {
                while snap.step(now_ms) {
                    self.state.scale = (snap.target() + self.state.scale) / 2.0;
                    self.commit();
                }
                self.snap = Some(snap);
            }
        }
    }

    /// The earliest timestamp at which [`PanZoom::poll`] has work to do,
    /// if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        let mut next = min_opt(self.double_tap.at(), self.zoom_complete.at());
        if let Some(snap) = &self.snap {
            next = min_opt(next, Some(snap.next_due()));
        }
        next
    }

    /// Applies the current transform to the surface. Hosts call this on
    /// the refresh tick that answers [`Surface::request_frame`]; the state
    /// applied is whatever is current at that moment, never a stale
    /// snapshot.
    pub fn frame(&mut self) {
        self.frame_pending = false;
        self.surface
            .set_transform(Transform::new(self.state.translation, self.state.scale));
    }

    /// The transform the next [`PanZoom::frame`] call will apply.
    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform::new(self.state.translation, self.state.scale)
    }

    /// Returns `true` while a snap animation is running.
    #[must_use]
    pub fn is_snapping(&self) -> bool {
        self.snap.is_some()
    }

    /// The capability profile resolved at attachment.
    #[must_use]
    pub fn profile(&self) -> &CapabilityProfile {
        &self.profile
    }

    /// The attached surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The attached surface, mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> PanZoomDebugInfo {
        PanZoomDebugInfo {
            scale: self.state.scale,
            translation: self.state.translation,
            is_dragging: self.state.is_dragging,
            is_zooming: self.state.is_zooming,
            tapped_twice: self.state.tapped_twice,
            is_snapping: self.snap.is_some(),
            frame_pending: self.frame_pending,
            committed_scale: self.committed_scale,
            max_zoom: self.config.max_zoom,
            zoom_rate: self.profile.zoom_rate,
        }
    }

    fn on_wheel(
        &mut self,
        position: Point,
        delta_y: f64,
        modifiers: Modifiers,
        now_ms: u64,
    ) -> bool {
        // Touchpads without native gesture events report a two-finger tap
        // as a zero-delta wheel; route it to the double-tap path.
        if delta_y == 0.0
            && self.profile.pointing == PointingDevice::Touchpad
            && !self.profile.has_gesture_events
        {
            self.two_finger_start(now_ms);
            return true;
        }
        if !modifiers.has_zoom_modifier() && self.profile.has_gesture_events {
            // Unmodified wheel: leave the host's native scrolling alone.
            return false;
        }
        let new_scale = clamp_scale(
            self.state.scale - delta_y * self.profile.zoom_rate,
            self.config.max_zoom,
        );
        if !self.state.is_dragging && !self.state.is_zooming {
            self.state.snapshot_zoom_anchor();
            self.state.is_zooming = true;
            self.emit_zoom_started();
        }
        self.state.scale = new_scale;
        self.recenter(position);
        self.commit();
        true
    }

    fn on_touch_start(&mut self, touches: &[Point], now_ms: u64) -> bool {
        match touches {
            [touch] => {
                if self.config.can_pan && !self.state.is_zooming {
                    self.begin_drag(*touch);
                    true
                } else {
                    false
                }
            }
            [_, _] => {
                if self.state.is_zooming {
                    return true;
                }
                let Some((midpoint, span)) = pinch_geometry(touches) else {
                    return false;
                };
                self.state.anchor = midpoint.to_vec2() - self.state.translation;
                self.state.pinch_start_span = span;
                self.state.pinch_start_scale =
                    clamp_scale(self.state.scale, self.config.max_zoom);
                self.two_finger_start(now_ms);
                true
            }
            _ => false,
        }
    }

    fn on_touch_move(&mut self, touches: &[Point]) -> bool {
        match touches {
            [touch] => {
                if self.config.can_pan && self.state.is_dragging {
                    self.state.translation = touch.to_vec2() - self.state.anchor;
                    self.commit();
                    true
                } else {
                    false
                }
            }
            [_, _] => {
                if self.snap.is_some() {
                    return true;
                }
                self.state.tapped_twice = false;
                let Some((midpoint, span)) = pinch_geometry(touches) else {
                    return false;
                };
                self.state.scale = clamp_scale(
                    self.state.pinch_start_scale * span / self.state.pinch_start_span,
                    self.config.max_zoom,
                );
                self.state.translation = midpoint.to_vec2() - self.state.anchor;
                self.commit();
                true
            }
            _ => false,
        }
    }

    fn on_touch_end(&mut self, now_ms: u64) -> bool {
        if self.state.scale < SNAP_RELEASE_THRESHOLD {
            self.state.scale = 1.0;
            self.commit();
        }
        if self.state.is_zooming {
            self.zoom_complete.arm(now_ms + ZOOM_COMPLETE_DELAY_MS);
        }
        if self.state.is_dragging {
            self.end_drag();
        }
        true
    }

    fn on_gesture_start(&mut self, position: Point, now_ms: u64) -> bool {
        self.state.anchor = position.to_vec2() - self.state.translation;
        self.state.pinch_start_scale = clamp_scale(self.state.scale, self.config.max_zoom);
        self.two_finger_start(now_ms);
        true
    }

    fn on_gesture_change(&mut self, position: Point, scale: f64) -> bool {
        if self.snap.is_some() {
            return true;
        }
        self.state.scale =
            clamp_scale(self.state.pinch_start_scale * scale, self.config.max_zoom);
        self.state.translation = position.to_vec2() - self.state.anchor;
        self.recenter(position);
        self.commit();
        true
    }

    fn on_gesture_end(&mut self) -> bool {
        if self.state.scale < SNAP_RELEASE_THRESHOLD {
            self.state.scale = 1.0;
            self.commit();
        }
        true
    }

    fn on_pointer_down(&mut self, position: Point, modifiers: Modifiers) -> bool {
        if self.snap.is_some() || modifiers.has_zoom_modifier() || !self.config.can_pan {
            return false;
        }
        if self.state.is_zooming {
            self.complete_zoom();
        }
        self.begin_drag(position);
        true
    }

    fn on_pointer_move(&mut self, position: Point) -> bool {
        let mut consumed = false;
        // Any mouse movement during an active zoom force-ends it.
        if self.state.is_zooming {
            self.complete_zoom();
            consumed = true;
        }
        if self.state.is_dragging {
            self.state.translation = position.to_vec2() - self.state.anchor;
            self.commit();
            consumed = true;
        }
        consumed
    }

    fn on_pointer_up(&mut self) -> bool {
        if self.state.is_dragging {
            self.end_drag();
            true
        } else {
            false
        }
    }

    /// Shared entry for every two-finger begin: multi-touch start, native
    /// gesture start, and the zero-delta-wheel tap alias.
    fn two_finger_start(&mut self, now_ms: u64) {
        if !self.state.is_dragging && !self.state.is_zooming {
            self.state.is_zooming = true;
            self.emit_zoom_started();
        }
        if self.state.tapped_twice {
            self.state.tapped_twice = false;
            self.double_tap.clear();
            if let Some(trace) = self.config.trace.as_deref_mut() {
                trace.double_tap();
            }
            self.start_snap(now_ms);
        } else {
            self.state.tapped_twice = true;
            self.double_tap.arm(now_ms + DOUBLE_TAP_WINDOW_MS);
        }
    }

    fn start_snap(&mut self, now_ms: u64) {
        if self.snap.is_some() {
            return;
        }
        let target = snap_target(self.state.scale, self.config.max_zoom);
        self.snap = Some(SnapAnimation::start(now_ms, target));
        if let Some(trace) = self.config.trace.as_deref_mut() {
            trace.snap_started(target);
        }
    }

    fn begin_drag(&mut self, pointer: Point) {
        self.state.begin_drag(pointer);
        if let Some(trace) = self.config.trace.as_deref_mut() {
            trace.drag_started();
        }
    }

    fn end_drag(&mut self) {
        self.state.end_drag();
        if let Some(trace) = self.config.trace.as_deref_mut() {
            trace.drag_ended();
        }
    }

    fn complete_zoom(&mut self) {
        self.state.is_zooming = false;
        self.emit_zoom_completed();
    }

    /// Clamps, requests a frame, and reports scale changes observed while
    /// zooming. The `frame_pending` latch coalesces requests until the
    /// host answers with [`PanZoom::frame`].
    fn commit(&mut self) {
        self.state.translation = clamp_translation(
            self.state.scale,
            self.state.translation,
            self.surface.size(),
            self.container_size(),
        );
        if !self.frame_pending {
            self.frame_pending = true;
            self.surface.request_frame();
        }
        if self.state.is_zooming && self.state.scale != self.committed_scale {
            self.emit_zoom_changed();
        }
        self.committed_scale = self.state.scale;
    }

    fn recenter(&mut self, focal: Point) {
        self.state.translation = recenter_about(focal, self.container_rect(), self.state.scale);
    }

    fn container_rect(&self) -> Rect {
        self.surface
            .container_rect()
            .unwrap_or_else(|| Rect::from_origin_size(Point::ORIGIN, self.config.fallback_extent))
    }

    fn container_size(&self) -> Size {
        self.surface
            .container_rect()
            .map_or(self.config.fallback_extent, |rect| rect.size())
    }

    fn emit_zoom_started(&mut self) {
        let scale = self.state.scale;
        if let Some(trace) = self.config.trace.as_deref_mut() {
            trace.zoom_started(scale);
        }
        if self.config.zoom_callbacks_enabled() {
            if let Some(cb) = self.config.on_zoom_started.as_mut() {
                cb();
            }
        }
    }

    fn emit_zoom_changed(&mut self) {
        let scale = self.state.scale;
        if let Some(trace) = self.config.trace.as_deref_mut() {
            trace.zoom_changed(scale);
        }
        if self.config.zoom_callbacks_enabled() {
            if let Some(cb) = self.config.on_zoom_changed.as_mut() {
                cb();
            }
        }
    }

    fn emit_zoom_completed(&mut self) {
        let scale = self.state.scale;
        if let Some(trace) = self.config.trace.as_deref_mut() {
            trace.zoom_completed(scale);
        }
        if self.config.zoom_callbacks_enabled() {
            if let Some(cb) = self.config.on_zoom_completed.as_mut() {
                cb();
            }
        }
    }
}

impl<S: Surface> fmt::Debug for PanZoom<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanZoom")
            .field("profile", &self.profile)
            .field("config", &self.config)
            .field("state", &self.state)
            .field("committed_scale", &self.committed_scale)
            .field("frame_pending", &self.frame_pending)
            .field("double_tap", &self.double_tap)
            .field("zoom_complete", &self.zoom_complete)
            .field("snap", &self.snap)
            .finish_non_exhaustive()
    }
}

/// Debug snapshot of a [`PanZoom`] controller.
#[derive(Clone, Copy, Debug)]
pub struct PanZoomDebugInfo {
    /// Current zoom factor.
    pub scale: f64,
    /// Current translation in surface-local pixels.
    pub translation: Vec2,
    /// A drag is in progress.
    pub is_dragging: bool,
    /// A zoom gesture is in progress.
    pub is_zooming: bool,
    /// A first tap's confirmation window is open.
    pub tapped_twice: bool,
    /// A snap animation is running.
    pub is_snapping: bool,
    /// A frame request is outstanding.
    pub frame_pending: bool,
    /// Scale at the previous commit.
    pub committed_scale: f64,
    /// Configured upper scale bound.
    pub max_zoom: f64,
    /// Wheel zoom rate from the capability profile.
    pub zoom_rate: f64,
}

fn min_opt(a: Option<u64>, b: Option<u64>) -> Option<u64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}
