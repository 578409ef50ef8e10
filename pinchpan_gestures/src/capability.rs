// Copyright 2026 the Pinchpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability profile: which input modalities a surface listens to, and how
//! fast wheel deltas zoom.
//!
//! The profile is derived once per attachment from a [`DeviceDescriptor`]
//! snapshot supplied by the host's capability detection, and never mutated
//! afterwards. Hosts use [`CapabilityProfile::input_path`] to decide which
//! listener set to wire (touch, or pointer + wheel + native gestures); the
//! controller reads the zoom rate and the gesture-event flag when
//! interpreting wheel input.

/// Rendering engine identity, as reported by the host's detection layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Engine {
    /// Chromium-family engines.
    Blink,
    /// Firefox-family engines. These do not deliver native pinch-gesture
    /// events, so wheel zooming gets a coarser rate.
    Gecko,
    /// Safari-family engines.
    WebKit,
    /// Anything else.
    Other,
}

/// The primary pointing device behind wheel events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointingDevice {
    /// A conventional mouse with a scroll wheel.
    Mouse,
    /// A touchpad. Touchpads deliver fine-grained wheel deltas and
    /// two-finger taps encoded as zero-delta wheel events.
    Touchpad,
}

/// Snapshot of device and engine capabilities at attachment time.
///
/// The descriptor is an input to [`CapabilityProfile::from_descriptor`];
/// producing it (user-agent sniffing, media queries, feature probes) is the
/// host's concern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeviceDescriptor {
    /// Whether the device reports touch contacts.
    pub has_touch: bool,
    /// Whether the engine delivers native pinch-gesture events.
    pub has_gesture_events: bool,
    /// Whether this is a mobile device.
    pub is_mobile: bool,
    /// The primary pointing device.
    pub pointing: PointingDevice,
    /// The rendering engine.
    pub engine: Engine,
}

/// Which listener set a host should wire for a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputPath {
    /// Touch contacts: single-finger pan, two-finger pinch and tap.
    Touch,
    /// Pointer, wheel, and (where available) native gesture events.
    PointerAndWheel,
}

/// Wheel zoom rate for touchpads and mobile devices.
pub const ZOOM_RATE_TOUCHPAD: f64 = 0.01;

/// Wheel zoom rate for engines without native gesture events, where the
/// wheel is the only pinch channel.
pub const ZOOM_RATE_NO_GESTURE: f64 = 0.1;

/// Default wheel zoom rate for a conventional mouse.
pub const ZOOM_RATE_DEFAULT: f64 = 0.001;

/// Immutable per-attachment input capabilities.
///
/// Derived once from a [`DeviceDescriptor`]; the controller holds it for
/// the lifetime of the attachment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CapabilityProfile {
    /// Whether the device reports touch contacts.
    pub has_touch: bool,
    /// Whether the engine delivers native pinch-gesture events.
    pub has_gesture_events: bool,
    /// Whether this is a mobile device.
    pub is_mobile: bool,
    /// The primary pointing device.
    pub pointing: PointingDevice,
    /// The rendering engine.
    pub engine: Engine,
    /// Scale change per unit of wheel delta.
    pub zoom_rate: f64,
}

impl CapabilityProfile {
    /// Derives the profile from a capability snapshot.
    ///
    /// The zoom rate is [`ZOOM_RATE_TOUCHPAD`] for touchpads and mobile
    /// devices, [`ZOOM_RATE_NO_GESTURE`] for engines lacking native
    /// gesture events, and [`ZOOM_RATE_DEFAULT`] otherwise.
    #[must_use]
    pub fn from_descriptor(device: &DeviceDescriptor) -> Self {
        let zoom_rate = if device.pointing == PointingDevice::Touchpad || device.is_mobile {
            ZOOM_RATE_TOUCHPAD
        } else if device.engine == Engine::Gecko {
            ZOOM_RATE_NO_GESTURE
        } else {
            ZOOM_RATE_DEFAULT
        };
        Self {
            has_touch: device.has_touch,
            has_gesture_events: device.has_gesture_events,
            is_mobile: device.is_mobile,
            pointing: device.pointing,
            engine: device.engine,
            zoom_rate,
        }
    }

    /// The listener set selected for this attachment: touch devices take
    /// the touch path, everything else the pointer + wheel path.
    #[must_use]
    pub fn input_path(&self) -> InputPath {
        if self.has_touch {
            InputPath::Touch
        } else {
            InputPath::PointerAndWheel
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        CapabilityProfile, DeviceDescriptor, Engine, InputPath, PointingDevice,
        ZOOM_RATE_DEFAULT, ZOOM_RATE_NO_GESTURE, ZOOM_RATE_TOUCHPAD,
    };

    fn desktop() -> DeviceDescriptor {
        DeviceDescriptor {
            has_touch: false,
            has_gesture_events: true,
            is_mobile: false,
            pointing: PointingDevice::Mouse,
            engine: Engine::Blink,
        }
    }

    #[test]
    fn mouse_gets_default_rate() {
        let p = CapabilityProfile::from_descriptor(&desktop());
        assert_eq!(p.zoom_rate, ZOOM_RATE_DEFAULT);
        assert_eq!(p.input_path(), InputPath::PointerAndWheel);
    }

    #[test]
    fn touchpad_gets_coarse_rate() {
        let p = CapabilityProfile::from_descriptor(&DeviceDescriptor {
            pointing: PointingDevice::Touchpad,
            ..desktop()
        });
        assert_eq!(p.zoom_rate, ZOOM_RATE_TOUCHPAD);
    }

    #[test]
    fn mobile_gets_coarse_rate_regardless_of_pointer() {
        let p = CapabilityProfile::from_descriptor(&DeviceDescriptor {
            is_mobile: true,
            has_touch: true,
            ..desktop()
        });
        assert_eq!(p.zoom_rate, ZOOM_RATE_TOUCHPAD);
        assert_eq!(p.input_path(), InputPath::Touch);
    }

    #[test]
    fn gestureless_engine_gets_wheel_rate() {
        let p = CapabilityProfile::from_descriptor(&DeviceDescriptor {
            has_gesture_events: false,
            engine: Engine::Gecko,
            ..desktop()
        });
        assert_eq!(p.zoom_rate, ZOOM_RATE_NO_GESTURE);
    }

    #[test]
    fn touchpad_wins_over_engine() {
        let p = CapabilityProfile::from_descriptor(&DeviceDescriptor {
            pointing: PointingDevice::Touchpad,
            engine: Engine::Gecko,
            has_gesture_events: false,
            ..desktop()
        });
        assert_eq!(p.zoom_rate, ZOOM_RATE_TOUCHPAD);
    }
}
