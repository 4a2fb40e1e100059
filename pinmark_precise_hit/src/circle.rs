// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Disc-shaped hit areas for point markers.

use kurbo::Point;

use crate::{HitKind, HitParams, HitScore, PreciseHitTest};

/// A filled circle.
///
/// Hits when the distance from the center is at most
/// `radius + HitParams::fill_tolerance`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Disc {
    /// Center in local coordinates.
    pub center: Point,
    /// Radius in local units.
    pub radius: f64,
}

impl Disc {
    /// Creates a disc.
    #[must_use]
    pub const fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }
}

impl PreciseHitTest for Disc {
    fn hit_test_local(&self, pt: Point, params: &HitParams) -> Option<HitScore> {
        let dist = (pt - self.center).hypot();
        if dist <= self.radius + params.fill_tolerance {
            Some(HitScore {
                distance: dist,
                kind: HitKind::Fill,
            })
        } else {
            None
        }
    }
}

/// A filled circle with an outline centered on its edge.
///
/// The interior reports [`HitKind::Fill`]; the outer half of the outline
/// (plus [`HitParams::stroke_tolerance`]) reports [`HitKind::Stroke`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokedDisc {
    /// The filled disc.
    pub disc: Disc,
    /// Full width of the outline.
    pub stroke_width: f64,
}

impl StrokedDisc {
    /// Creates a stroked disc.
    #[must_use]
    pub const fn new(center: Point, radius: f64, stroke_width: f64) -> Self {
        Self {
            disc: Disc::new(center, radius),
            stroke_width,
        }
    }
}

impl PreciseHitTest for StrokedDisc {
    fn hit_test_local(&self, pt: Point, params: &HitParams) -> Option<HitScore> {
        if let Some(score) = self.disc.hit_test_local(pt, params) {
            return Some(score);
        }
        let dist = (pt - self.disc.center).hypot();
        let limit = self.disc.radius + self.stroke_width * 0.5 + params.stroke_tolerance;
        (dist <= limit).then_some(HitScore {
            distance: dist,
            kind: HitKind::Stroke,
        })
    }
}
