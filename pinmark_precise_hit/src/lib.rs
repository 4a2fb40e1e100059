// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinmark Precise Hit: geometry-level hit testing for overlay shapes.
//!
//! Shapes implement [`PreciseHitTest`] in their own local (device) space and
//! report a [`HitScore`] when a query point lands on them. [`pick_last`] runs
//! the test over an ordered sequence and applies the overlay's tie rule: when
//! several shapes match, the **last** one in sequence order wins, which is the
//! one painted on top.
//!
//! ```
//! use kurbo::Point;
//! use pinmark_precise_hit::{Disc, HitParams, pick_last};
//!
//! let markers = [
//!     (1_u64, Disc::new(Point::new(10.0, 10.0), 10.0)),
//!     (2_u64, Disc::new(Point::new(15.0, 10.0), 10.0)),
//! ];
//! let hit = pick_last(markers, Point::new(12.0, 10.0), &HitParams::default());
//! assert_eq!(hit.map(|(id, _)| id), Some(2));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod circle;

pub use circle::{Disc, StrokedDisc};

use kurbo::Point;

/// Tunable tolerances for hit testing, in the same units as the shapes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitParams {
    /// Extra distance accepted outside filled interiors.
    pub fill_tolerance: f64,
    /// Extra distance accepted on either side of a stroke.
    pub stroke_tolerance: f64,
}

impl Default for HitParams {
    fn default() -> Self {
        Self {
            fill_tolerance: 0.0,
            stroke_tolerance: 0.5,
        }
    }
}

/// Which part of a shape was hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitKind {
    /// The filled interior.
    Fill,
    /// The outline.
    Stroke,
}

/// Result of a successful hit test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitScore {
    /// Distance from the query point to the shape's reference geometry
    /// (center for discs, centerline for strokes).
    pub distance: f64,
    /// Part of the shape that was hit.
    pub kind: HitKind,
}

/// Shapes that can answer "is this point on me?" precisely.
pub trait PreciseHitTest {
    /// Test `pt`, given in the shape's local coordinates.
    fn hit_test_local(&self, pt: Point, params: &HitParams) -> Option<HitScore>;
}

impl<T: PreciseHitTest + ?Sized> PreciseHitTest for &T {
    fn hit_test_local(&self, pt: Point, params: &HitParams) -> Option<HitScore> {
        (**self).hit_test_local(pt, params)
    }
}

/// Hit test an ordered sequence of shapes; the last match wins.
pub fn pick_last<K, S, I>(items: I, pt: Point, params: &HitParams) -> Option<(K, HitScore)>
where
    I: IntoIterator<Item = (K, S)>,
    S: PreciseHitTest,
{
    items
        .into_iter()
        .filter_map(|(key, shape)| shape.hit_test_local(pt, params).map(|score| (key, score)))
        .last()
}
