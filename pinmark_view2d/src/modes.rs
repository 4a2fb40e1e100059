// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How fitted content should be positioned inside the device surface.
///
/// This mode is consulted by [`crate::ViewTransform::fit`] and
/// [`crate::ViewTransform::fit_and_center`]. It only affects placement; the
/// fitted scale is the same for every mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FitMode {
    /// Center the fitted content within the device surface.
    #[default]
    Center,
    /// Align the content origin with the device origin.
    AlignMin,
}
