// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinmark Annotations: point annotations anchored in image (content) space.
//!
//! An [`AnnotationStore`] owns an ordered list of [`PointAnnotation`]s. Ids
//! come from a monotonic counter and are never reused, even after removal or
//! [`AnnotationStore::clear`]. Every point gets a default name
//! (`POINT_<id>`) and a colour that is a pure function of its id
//! ([`PointColor::for_id`]).
//!
//! Mutations addressed to an unknown id are silent no-ops that return
//! `false`; callers decide whether that is worth reporting.
//!
//! ```
//! use pinmark_annotations::AnnotationStore;
//!
//! let mut store = AnnotationStore::new();
//! let a = store.add(10.0, 10.0);
//! let b = store.add(50.0, 20.0);
//! assert!(store.remove(a));
//! let c = store.add(0.0, 0.0);
//! assert!(c > b);
//!
//! assert!(store.move_by(b, 5.0, -5.0));
//! let moved = store.get(b).unwrap();
//! assert_eq!((moved.x, moved.y), (55.0, 15.0));
//! assert_eq!(moved.name, "POINT_1");
//! ```

mod color;
mod info;
mod point;
mod store;

pub use color::{ParseColorError, PointColor};
pub use info::{CanvasOptions, FileInfo};
pub use point::{PointAnnotation, PointId};
pub use store::AnnotationStore;
