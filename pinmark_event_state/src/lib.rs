// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinmark Event State: gesture state machines for canvas interactions.
//!
//! This crate provides small, focused state machines for the pointer
//! interactions of an annotation canvas. Each module handles one pattern:
//!
//! - [`pan`]: Track a background pan gesture, yielding successive device positions
//! - [`drag`]: Track a drag session bound to a target, with start/last positions
//! - [`click`]: Recognize a click as a press/release pair within a spatial slop
//! - [`hover`]: Compute enter/leave transitions for the element under the pointer
//! - [`capture`]: Own the pointer for the lifetime of a gesture, with explicit release
//!
//! ## Design Philosophy
//!
//! The managers track **device-space** positions only. They never convert
//! coordinates themselves: callers re-project positions through whatever
//! transform is current at the moment they act on them. That keeps a gesture
//! correct even if the view transform changes while it is in progress.
//!
//! ## Usage Patterns
//!
//! ### Drag Sessions
//!
//! ```rust
//! use kurbo::Point;
//! use pinmark_event_state::drag::DragState;
//!
//! let mut drag = DragState::<u64>::default();
//! drag.start(7, Point::new(10.0, 10.0));
//!
//! // Intermediate moves only update the live position.
//! drag.update(Point::new(15.0, 12.0));
//!
//! let session = drag.end().unwrap();
//! assert_eq!(session.target, 7);
//! assert_eq!(session.start_pos, Point::new(10.0, 10.0));
//! assert_eq!(session.last_pos, Point::new(15.0, 12.0));
//! ```
//!
//! ### Pointer Capture
//!
//! ```rust
//! use pinmark_event_state::capture::GestureCapture;
//!
//! #[derive(Clone, Copy, Debug, PartialEq)]
//! enum Gesture { Pan, Drag }
//!
//! let mut capture = GestureCapture::new();
//! assert_eq!(capture.acquire(Gesture::Pan), None);
//! assert!(capture.is_held_by(&Gesture::Pan));
//!
//! // Terminal event or teardown: the capture is always released.
//! assert_eq!(capture.release(), Some(Gesture::Pan));
//! assert!(!capture.is_held());
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`) for all modules.

#![no_std]

extern crate alloc;

pub mod capture;
pub mod click;
pub mod drag;
pub mod hover;
pub mod pan;
