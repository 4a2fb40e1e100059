// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Point;
use serde::{Deserialize, Serialize};

use crate::PointColor;

/// Identifier of a point annotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointId(pub u64);

impl PointId {
    /// Raw id value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A labelled point in content space.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointAnnotation {
    /// Unique id.
    pub id: PointId,
    /// Content-space X.
    pub x: f64,
    /// Content-space Y.
    pub y: f64,
    /// Display name.
    pub name: String,
    /// Marker colour.
    pub color: PointColor,
}

impl PointAnnotation {
    /// Creates a point with the default name and colour for `id`.
    #[must_use]
    pub fn new(id: PointId, x: f64, y: f64) -> Self {
        Self {
            id,
            x,
            y,
            name: Self::default_name(id),
            color: PointColor::for_id(id),
        }
    }

    /// The name a point gets when it is created.
    #[must_use]
    pub fn default_name(id: PointId) -> String {
        format!("POINT_{id}")
    }

    /// Position as a content-space point.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}
