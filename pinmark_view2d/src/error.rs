// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Reasons a [`crate::ViewTransform`] mutation was rejected.
///
/// Whenever one of these is returned the transform is left exactly as it was
/// before the call.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum TransformError {
    /// A zoom factor was zero, negative, or not finite.
    #[error("zoom factor must be finite and greater than zero, got {0}")]
    InvalidZoomFactor(f64),
    /// A scale was zero, negative, or not finite.
    #[error("scale must be finite and greater than zero, got {0}")]
    InvalidScale(f64),
    /// A point, delta, or translation contained NaN or infinity.
    #[error("transform input must be finite")]
    NonFinite,
    /// The resulting matrix has no finite inverse, so device points could no
    /// longer be mapped back to content.
    #[error("transform with scale {0} cannot be inverted")]
    NonInvertible(f64),
    /// Scale limits were not finite and positive.
    #[error("scale limits must be finite and greater than zero")]
    InvalidScaleLimits,
    /// Content or view extents were empty, so no fit exists.
    #[error("cannot fit {content_width}x{content_height} content into a {view_width}x{view_height} view")]
    DegenerateFit {
        /// Content width in content units.
        content_width: f64,
        /// Content height in content units.
        content_height: f64,
        /// View width in device pixels.
        view_width: f64,
        /// View height in device pixels.
        view_height: f64,
    },
}
