// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinmark View 2D: the affine transform between device pixels and content space.
//!
//! This crate provides a small, headless model of the transform that maps the
//! content (image/annotation) plane onto a rendering surface measured in device
//! pixels. It focuses on:
//! - Forward and inverse coordinate mapping ([`ViewTransform::to_device`],
//!   [`ViewTransform::to_content`]).
//! - Panning by content-space deltas and zooming about a device-space anchor.
//! - Computing an initial "fit and center" transform for a freshly loaded image.
//! - Optional scale limits.
//!
//! It does **not** interpret input events or draw anything. Callers are
//! expected to:
//! - Feed pointer/wheel input into [`ViewTransform::translate`] and
//!   [`ViewTransform::zoom_about`] from a controller layer.
//! - Use [`ViewTransform::affine`] when issuing draw calls for the raster layer
//!   and [`ViewTransform::to_device`] when projecting overlay geometry.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use pinmark_view2d::ViewTransform;
//!
//! let mut view = ViewTransform::new();
//!
//! // Center a 400x300 image inside an 800x600 device surface.
//! view.fit_and_center(Size::new(400.0, 300.0), Size::new(800.0, 600.0), 1.0)
//!     .unwrap();
//! assert_eq!(view.to_device(Point::ORIGIN), Point::new(200.0, 150.0));
//!
//! // Zoom in about the cursor; the content under the cursor stays put.
//! let cursor = Point::new(300.0, 250.0);
//! let before = view.to_content(cursor);
//! view.zoom_about(cursor, 1.1).unwrap();
//! let after = view.to_content(cursor);
//! assert!((before - after).hypot() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - The transform is axis-aligned with a **uniform** scale:
//!   `device = scale * content + translation`.
//! - [`ViewTransform::translate`] composes a *content-space* translation into
//!   the matrix, so repeated calls accumulate correctly at any scale.
//! - Invalid mutations (non-positive zoom factors, non-finite input) are
//!   rejected with a [`TransformError`] and leave the last good transform in
//!   place.
//!
//! This crate is `no_std`.

#![no_std]

mod error;
mod modes;
mod transform;

pub use error::TransformError;
pub use modes::FitMode;
pub use transform::{ViewTransform, ViewTransformDebugInfo};
