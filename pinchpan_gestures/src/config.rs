// Copyright 2026 the Pinchpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-attachment configuration: zoom/pan toggles and lifecycle callbacks.

use alloc::boxed::Box;
use core::fmt;

use kurbo::Size;

use crate::trace::GestureTrace;

/// A lifecycle notification callback.
///
/// Callbacks are fire-and-forget: the controller performs no error
/// recovery around them, and they must not re-enter the controller that
/// invoked them.
pub type Callback = Box<dyn FnMut()>;

/// Default upper scale bound.
pub const DEFAULT_MAX_ZOOM: f64 = 3.0;

/// Container extent used for clamping and recentering when the surface
/// reports no container of its own.
pub const DEFAULT_FALLBACK_EXTENT: Size = Size::new(1920.0, 1080.0);

/// Configuration for one attached surface.
///
/// All fields have usable defaults; hosts typically set a couple of
/// callbacks and leave the rest alone. Replacing the configuration on a
/// live controller (see `PanZoom::reconfigure`) preserves the surface's
/// gesture state.
pub struct Config {
    /// Reserved. Zoom interpretation is active whenever `max_zoom > 1.0`;
    /// this flag is declared for configuration compatibility but not
    /// consulted by any input path.
    pub can_zoom: bool,
    /// Upper scale bound. The sentinel `1.0` suppresses every zoom
    /// lifecycle callback while the zoom logic keeps running internally.
    pub max_zoom: f64,
    /// Enables mouse and single-finger panning.
    pub can_pan: bool,
    /// Substitute container extent when the surface has no container.
    pub fallback_extent: Size,
    /// Fired when a zoom gesture begins.
    pub on_zoom_started: Option<Callback>,
    /// Fired when a commit observes a scale change during an active zoom.
    pub on_zoom_changed: Option<Callback>,
    /// Fired when a zoom gesture completes.
    pub on_zoom_completed: Option<Callback>,
    /// Declared for configuration compatibility; no input path invokes it.
    pub on_pan_started: Option<Callback>,
    /// Declared for configuration compatibility; no input path invokes it.
    pub on_pan_changed: Option<Callback>,
    /// Declared for configuration compatibility; no input path invokes it.
    pub on_pan_completed: Option<Callback>,
    /// Observability hook; sees every transition, including suppressed
    /// ones. See [`crate::trace`].
    pub trace: Option<Box<dyn GestureTrace>>,
}

impl Config {
    /// Returns `true` unless the `max_zoom == 1.0` sentinel suppresses
    /// zoom lifecycle callbacks.
    #[must_use]
    pub fn zoom_callbacks_enabled(&self) -> bool {
        self.max_zoom > 1.0
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            can_zoom: true,
            max_zoom: DEFAULT_MAX_ZOOM,
            can_pan: true,
            fallback_extent: DEFAULT_FALLBACK_EXTENT,
            on_zoom_started: None,
            on_zoom_changed: None,
            on_zoom_completed: None,
            on_pan_started: None,
            on_pan_changed: None,
            on_pan_completed: None,
            trace: None,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("can_zoom", &self.can_zoom)
            .field("max_zoom", &self.max_zoom)
            .field("can_pan", &self.can_pan)
            .field("fallback_extent", &self.fallback_extent)
            .field("on_zoom_started", &self.on_zoom_started.is_some())
            .field("on_zoom_changed", &self.on_zoom_changed.is_some())
            .field("on_zoom_completed", &self.on_zoom_completed.is_some())
            .field("on_pan_started", &self.on_pan_started.is_some())
            .field("on_pan_changed", &self.on_pan_changed.is_some())
            .field("on_pan_completed", &self.on_pan_completed.is_some())
            .field("trace", &self.trace.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;

    use super::{Config, DEFAULT_MAX_ZOOM};

    #[test]
    fn defaults_allow_pan_and_bounded_zoom() {
        let config = Config::default();
        assert!(config.can_pan);
        assert_eq!(config.max_zoom, DEFAULT_MAX_ZOOM);
        assert!(config.zoom_callbacks_enabled());
    }

    #[test]
    fn unit_max_zoom_suppresses_callbacks() {
        let config = Config {
            max_zoom: 1.0,
            ..Config::default()
        };
        assert!(!config.zoom_callbacks_enabled());
    }

    #[test]
    fn debug_reports_callback_presence() {
        let config = Config {
            on_zoom_started: Some(Box::new(|| {})),
            ..Config::default()
        };
        let repr = alloc::format!("{config:?}");
        assert!(repr.contains("on_zoom_started: true"));
        assert!(repr.contains("on_zoom_changed: false"));
    }
}
