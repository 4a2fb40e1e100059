// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinmark Canvas: a pan/zoom image canvas with a point-annotation overlay.
//!
//! The crate ties the lower-level Pinmark crates together:
//!
//! - [`ViewportController`] pans and wheel-zooms the view transform.
//! - [`OverlayController`] places, drags and hovers point markers.
//! - [`RenderLoop`] clears the surface, fits new images, draws the raster
//!   layer through a [`pinmark_imaging::ImagingBackend`], and describes the
//!   marker layer as an [`OverlayFrame`].
//! - [`Editor`] owns all of the above plus the [`CanvasState`], and is the
//!   entry point for hosts.
//!
//! State changes are tracked per [`StateChannels`] channel. Hosts subscribe
//! to the channels they care about and redraw when [`Editor::render`]
//! returns a frame.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Size};
//! use pinmark_canvas::{ActiveTool, CanvasConfig, Editor};
//! use pinmark_imaging::RecordingBackend;
//! use pinmark_import::ImageSource;
//!
//! let mut editor = Editor::new(CanvasConfig::default()).unwrap();
//! editor.resize(Size::new(800.0, 600.0));
//! editor.load_image(&ImageSource::blank(400, 300));
//!
//! let mut backend = RecordingBackend::new();
//! editor.render(&mut backend).unwrap();
//! assert_eq!(editor.state().transform().scale(), 1.0);
//!
//! editor.set_tool(ActiveTool::AddPoint);
//! editor.pointer_down(Point::new(250.0, 200.0));
//! editor.pointer_up(Point::new(250.0, 200.0));
//!
//! let point = &editor.state().points().list()[0];
//! assert_eq!((point.x, point.y), (50.0, 50.0));
//!
//! let frame = editor.render(&mut backend).unwrap();
//! assert_eq!(frame.markers[0].center, Point::new(250.0, 200.0));
//! ```

mod config;
mod editor;
mod input;
mod notify;
mod overlay;
mod render;
mod state;
mod tool;
mod viewport;

pub use config::{CanvasConfig, ConfigError};
pub use editor::{Editor, Gesture, POINT_ADDED};
pub use input::InputEvent;
pub use notify::{LogNotifier, Notification, Notifier, RecordingNotifier, Severity};
pub use overlay::{DragCommit, OverlayController};
pub use render::{GHOST_FILL, GhostMarker, MARKER_STROKE, MarkerView, OverlayFrame, RenderLoop};
pub use state::CanvasState;
pub use tool::ActiveTool;
pub use viewport::{ViewportController, ZoomDirection};

pub use pinmark_dirty::{StateChannels, SubscriptionId};
