// Copyright 2026 the Pinchpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=pinchpan_view --heading-base-level=0

//! Pinchpan View: pan/zoom transform primitives.
//!
//! This crate provides the small, headless math underneath a pan/zoom
//! surface: the committed [`Transform`] value (uniform scale + translation),
//! pure clamping of scale and translation against the surface and its
//! container, and the anchor-preserving recenter used by wheel and native
//! pinch zooming. It focuses on:
//! - The transform value handed to a rendering sink.
//! - Scale bounds: `[1.0, max_scale]`.
//! - Translation bounds: the scaled surface covers — or is centered within —
//!   its container on each axis.
//! - Keeping a focal point visually fixed while the scale changes.
//!
//! It does **not** interpret input events or own any rendering backend.
//! Callers are expected to:
//! - Interpret device events at a higher layer (for example with
//!   `pinchpan_gestures`).
//! - Apply the resulting [`Transform`] to whatever displays the surface.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use pinchpan_view::{clamp_scale, clamp_translation, Transform};
//!
//! // A 800x600 surface inside a 400x300 container, zoomed to 2x.
//! let scale = clamp_scale(2.0, 3.0);
//! let translation = clamp_translation(
//!     scale,
//!     Vec2::new(10_000.0, -10_000.0),
//!     Size::new(800.0, 600.0),
//!     Size::new(400.0, 300.0),
//! );
//! let transform = Transform::new(translation, scale);
//!
//! // However far the caller tried to pan, the surface still covers the
//! // container on both axes.
//! assert!(transform.translation.x.abs() <= 800.0 * scale / 2.0 - 200.0);
//! assert!(transform.translation.y.abs() <= 600.0 * scale / 2.0 - 150.0);
//! ```
//!
//! ## Anchor-preserving recenter
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use pinchpan_view::recenter_about;
//!
//! let container = Rect::new(0.0, 0.0, 400.0, 300.0);
//! let focal = Point::new(50.0, 50.0);
//!
//! // The translation depends only on the focal point and the final scale,
//! // never on how the scale got there.
//! let direct = recenter_about(focal, container, 2.0);
//! let step1 = recenter_about(focal, container, 1.5);
//! let step2 = recenter_about(focal, container, 2.0);
//! let _ = step1;
//! assert_eq!(direct, step2);
//! ```
//!
//! ## Design notes
//!
//! - Scale is **uniform**; the two axes are clamped independently but share
//!   one zoom factor. Rotation is intentionally left out.
//! - All functions are total over finite reals; there are no fallible
//!   operations and no invalid-input branches.
//! - Translation is expressed in surface-local pixel units, relative to the
//!   container center.
//!
//! This crate is `no_std`.

#![no_std]

mod anchor;
mod clamp;
mod transform;

pub use anchor::recenter_about;
pub use clamp::{clamp_axis, clamp_scale, clamp_translation};
pub use transform::Transform;
