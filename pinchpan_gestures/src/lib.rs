// Copyright 2026 the Pinchpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=pinchpan_gestures --heading-base-level=0

//! Pinchpan Gestures: one state machine that normalizes heterogeneous
//! pointing-device input into a consistent pan/zoom transform.
//!
//! ## Overview
//!
//! Mouse wheels, single-button drags, multi-touch pinches, and native
//! pinch-gesture events all describe the same two intents — pan and zoom —
//! in four incompatible vocabularies. This crate owns the reconciliation:
//! the [`controller::PanZoom`] state machine consumes abstract
//! [`event::InputEvent`] values one at a time, arbitrates between
//! simultaneous pan and zoom gestures, debounces taps and releases, keeps
//! scale and translation inside the bounds of `pinchpan_view`, and emits
//! zoom lifecycle notifications on gesture edges.
//!
//! ## Inputs
//!
//! Hosts translate platform events into [`event::InputEvent`] and pass
//! each one to [`controller::PanZoom::handle_event`] together with the
//! current millisecond clock. The controller never reads a wall clock:
//! debounce windows and the snap animation are explicit deadlines fired
//! from [`controller::PanZoom::poll`], and
//! [`controller::PanZoom::next_deadline`] reports when the next poll is
//! worthwhile. Tests drive the whole machine with a virtual clock.
//!
//! ## Collaborators
//!
//! The [`controller::Surface`] trait is the seam to the outside: the
//! surface's own size and its container rect feed the clamp policy, the
//! committed transform goes out through `set_transform`, and
//! `request_frame` asks the host for one refresh tick, answered by
//! [`controller::PanZoom::frame`]. Capability detection stays external
//! too; the host supplies one [`capability::DeviceDescriptor`] snapshot at
//! attachment.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use pinchpan_gestures::capability::{DeviceDescriptor, Engine, PointingDevice};
//! use pinchpan_gestures::config::Config;
//! use pinchpan_gestures::controller::{PanZoom, Surface};
//! use pinchpan_gestures::event::{InputEvent, Modifiers};
//! use pinchpan_view::Transform;
//!
//! struct Demo {
//!     applied: Option<Transform>,
//!     frames: u32,
//! }
//!
//! impl Surface for Demo {
//!     fn size(&self) -> Size {
//!         Size::new(800.0, 600.0)
//!     }
//!     fn container_rect(&self) -> Option<Rect> {
//!         Some(Rect::new(0.0, 0.0, 400.0, 300.0))
//!     }
//!     fn set_transform(&mut self, transform: Transform) {
//!         self.applied = Some(transform);
//!     }
//!     fn request_frame(&mut self) {
//!         self.frames += 1;
//!     }
//! }
//!
//! let device = DeviceDescriptor {
//!     has_touch: false,
//!     has_gesture_events: true,
//!     is_mobile: false,
//!     pointing: PointingDevice::Mouse,
//!     engine: Engine::Blink,
//! };
//! let mut pz = PanZoom::attach(Demo { applied: None, frames: 0 }, &device, Config::default());
//!
//! // Ctrl+wheel zooms about the cursor; the host answers the frame
//! // request on its next refresh tick.
//! let consumed = pz.handle_event(
//!     InputEvent::Wheel {
//!         position: Point::new(50.0, 50.0),
//!         delta_y: -100.0,
//!         modifiers: Modifiers::CTRL,
//!     },
//!     0,
//! );
//! assert!(consumed);
//! pz.frame();
//! assert_eq!(pz.surface().applied.unwrap().scale, 1.1);
//! ```
//!
//! ## Design notes
//!
//! - One controller owns one surface's state; there is no shared registry.
//!   Re-configuration goes through the handle
//!   ([`controller::PanZoom::reconfigure`]) and preserves the user's zoom.
//! - Lifecycle callbacks fire on edges only, and the `max_zoom == 1.0`
//!   sentinel suppresses all of them while the machine keeps running.
//!   Pan callbacks are declared for configuration compatibility but are
//!   not wired to any input path.
//! - The [`trace::GestureTrace`] hook observes every transition, including
//!   suppressed ones, for embedders that need explainability.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod capability;
pub mod config;
pub mod controller;
pub mod event;
pub mod snap;
pub mod state;
pub mod trace;
