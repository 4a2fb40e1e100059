// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinmark Dirty: state-change channels, redraw tracking, and observers.
//!
//! The editor's state is split into a handful of named cells (transform,
//! annotations, active tool, active element, canvas options, file info).
//! Each cell is a [`StateChannels`] bit. Mutations mark channels on a
//! [`ChangeTracker`], which feeds two independent consumers:
//!
//! - **The render loop** asks whether a redraw is pending and consumes the
//!   visual channels when it draws a frame.
//! - **Observers** registered on an [`ObserverRegistry`] are told which of
//!   the channels they subscribed to changed, once per handled input event.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use pinmark_dirty::{ChangeTracker, ObserverRegistry, StateChannels};
//!
//! let mut tracker = ChangeTracker::new();
//! let mut observers = ObserverRegistry::new();
//!
//! let seen = Rc::new(Cell::new(StateChannels::empty()));
//! let sink = seen.clone();
//! observers.subscribe(StateChannels::ANNOTATIONS, move |changed| sink.set(changed));
//!
//! tracker.mark(StateChannels::ANNOTATIONS | StateChannels::ACTIVE_TOOL);
//! assert!(tracker.is_redraw_pending());
//!
//! observers.publish(tracker.take_unpublished());
//! assert_eq!(seen.get(), StateChannels::ANNOTATIONS);
//!
//! assert_eq!(tracker.take_redraw(), StateChannels::ANNOTATIONS);
//! assert!(!tracker.is_redraw_pending());
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod channels;
mod observer;
mod tracker;

pub use channels::StateChannels;
pub use observer::{ObserverRegistry, SubscriptionId};
pub use tracker::ChangeTracker;
