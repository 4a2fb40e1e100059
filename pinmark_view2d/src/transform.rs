// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::error::TransformError;
use crate::modes::FitMode;

/// Uniform scale + translation mapping content space onto device pixels.
///
/// `device = scale * content + translation`
///
/// `ViewTransform` is the single source of truth for coordinate mapping.
/// It can be used to:
/// - Convert points and rectangles between content and device coordinates.
/// - Pan by a content-space delta and zoom about a device-space anchor.
/// - Fit an image of a given size into a device surface.
///
/// The forward and inverse matrices are rebuilt together on every mutation,
/// so [`ViewTransform::to_content`] is always the exact inverse of
/// [`ViewTransform::to_device`] up to floating-point rounding.
#[derive(Clone, Debug)]
pub struct ViewTransform {
    scale: f64,
    translation: Vec2,
    min_scale: Option<f64>,
    max_scale: Option<f64>,
    fit_mode: FitMode,
    content_to_device: Affine,
    device_to_content: Affine,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewTransform {
    /// Creates an identity transform with no scale limits.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            translation: Vec2::ZERO,
            min_scale: None,
            max_scale: None,
            fit_mode: FitMode::default(),
            content_to_device: Affine::IDENTITY,
            device_to_content: Affine::IDENTITY,
        }
    }

    /// Creates a transform from an explicit scale and translation.
    pub fn from_parts(scale: f64, translation: Vec2) -> Result<Self, TransformError> {
        let mut vt = Self::new();
        vt.reset(scale, translation)?;
        Ok(vt)
    }

    /// Returns the current uniform scale (device pixels per content unit).
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the current translation in device pixels.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Returns the content → device matrix.
    #[must_use]
    pub fn affine(&self) -> Affine {
        self.content_to_device
    }

    /// Returns the device → content matrix.
    #[must_use]
    pub fn inverse_affine(&self) -> Affine {
        self.device_to_content
    }

    /// Returns the configured `(min, max)` scale limits.
    #[must_use]
    pub fn scale_limits(&self) -> (Option<f64>, Option<f64>) {
        (self.min_scale, self.max_scale)
    }

    /// Sets optional scale limits enforced by [`ViewTransform::zoom_about`].
    ///
    /// When both limits are given they are normalized so that `min <= max`.
    /// The current scale is left untouched; limits only constrain future
    /// zooms, so an initial fit may legitimately sit outside them.
    pub fn set_scale_limits(
        &mut self,
        min_scale: Option<f64>,
        max_scale: Option<f64>,
    ) -> Result<(), TransformError> {
        let valid = |s: Option<f64>| s.is_none_or(|s| s.is_finite() && s > 0.0);
        if !valid(min_scale) || !valid(max_scale) {
            return Err(TransformError::InvalidScaleLimits);
        }
        let (min_scale, max_scale) = match (min_scale, max_scale) {
            (Some(lo), Some(hi)) if lo > hi => (Some(hi), Some(lo)),
            limits => limits,
        };
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        Ok(())
    }

    /// Sets how [`ViewTransform::fit_and_center`] places fitted content.
    pub fn set_fit_mode(&mut self, mode: FitMode) {
        self.fit_mode = mode;
    }

    /// Returns the current fit mode.
    #[must_use]
    pub fn fit_mode(&self) -> FitMode {
        self.fit_mode
    }

    /// Converts a content-space point into device coordinates.
    #[must_use]
    pub fn to_device(&self, pt: Point) -> Point {
        self.content_to_device * pt
    }

    /// Converts a device-space point into content coordinates.
    #[must_use]
    pub fn to_content(&self, pt: Point) -> Point {
        self.device_to_content * pt
    }

    /// Content-space delta between two device positions.
    ///
    /// Both endpoints are mapped through the current inverse transform, which
    /// is what gesture controllers need when the transform may have changed
    /// since either position was recorded.
    #[must_use]
    pub fn content_delta(&self, from_device: Point, to_device: Point) -> Vec2 {
        self.to_content(to_device) - self.to_content(from_device)
    }

    /// Converts a content-space rectangle into device coordinates.
    #[must_use]
    pub fn to_device_rect(&self, rect: Rect) -> Rect {
        // Scale is uniform and positive, so mapping the two corners is enough.
        Rect::from_points(
            self.to_device(rect.origin()),
            self.to_device(Point::new(rect.x1, rect.y1)),
        )
    }

    /// Converts a device-space rectangle into content coordinates.
    #[must_use]
    pub fn to_content_rect(&self, rect: Rect) -> Rect {
        Rect::from_points(
            self.to_content(rect.origin()),
            self.to_content(Point::new(rect.x1, rect.y1)),
        )
    }

    /// Returns the content-space rectangle visible through `view_rect`.
    #[must_use]
    pub fn visible_content_rect(&self, view_rect: Rect) -> Rect {
        self.to_content_rect(view_rect)
    }

    /// Content units covered by one device pixel.
    #[must_use]
    pub fn content_units_per_pixel(&self) -> f64 {
        1.0 / self.scale
    }

    /// Composes a content-space translation into the matrix.
    ///
    /// This is `M ← M · T(delta)`: the content plane moves by `delta` content
    /// units, which is `delta * scale` device pixels.
    pub fn translate(&mut self, delta: Vec2) -> Result<(), TransformError> {
        if !delta.is_finite() {
            return Err(TransformError::NonFinite);
        }
        if delta == Vec2::ZERO {
            return Ok(());
        }
        self.commit(self.scale, self.translation + delta * self.scale)
    }

    /// Scales by `factor` while keeping the content under `anchor` fixed.
    ///
    /// This is `M ← M · T(c) · S(factor) · T(-c)` with `c` the content-space
    /// preimage of `anchor`. Values below `1.0` zoom out, above `1.0` zoom in.
    ///
    /// With scale limits configured the effective factor is clamped so the
    /// scale lands on the limit. Returns `Ok(false)` when the clamped scale
    /// equals the current one and nothing changed.
    pub fn zoom_about(&mut self, anchor: Point, factor: f64) -> Result<bool, TransformError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(TransformError::InvalidZoomFactor(factor));
        }
        if !anchor.is_finite() {
            return Err(TransformError::NonFinite);
        }
        let old_scale = self.scale;
        let new_scale = self.clamp_scale(old_scale * factor);
        if !new_scale.is_finite() || new_scale <= 0.0 {
            return Err(TransformError::InvalidScale(new_scale));
        }
        if (new_scale - old_scale).abs() <= f64::EPSILON * old_scale {
            return Ok(false);
        }

        let anchor_content = self.to_content(anchor).to_vec2();
        // s' p + t' must equal s p + t at p = anchor_content.
        let translation = self.translation + anchor_content * (old_scale - new_scale);
        self.commit(new_scale, translation)?;
        Ok(true)
    }

    /// Replaces the transform with an explicit scale and translation.
    ///
    /// Scale limits are not applied here. A scale so small that the matrix
    /// has no finite inverse is rejected with [`TransformError::NonInvertible`].
    pub fn reset(&mut self, scale: f64, translation: Vec2) -> Result<(), TransformError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(TransformError::InvalidScale(scale));
        }
        if !translation.is_finite() {
            return Err(TransformError::NonFinite);
        }
        self.commit(scale, translation)
    }

    /// Computes the scale and translation that fit `content` inside `view`.
    ///
    /// The scale is `min(max_fit_scale, view.w / content.w, view.h / content.h)`:
    /// content is shown at `max_fit_scale` (typically the device pixel ratio)
    /// unless that would overflow the view, in which case it is scaled down
    /// just enough to fit. Placement follows `mode`; for
    /// [`FitMode::Center`] the translation is
    /// `((view.w - content.w * s) / 2, (view.h - content.h * s) / 2)`.
    pub fn fit(
        content: Size,
        view: Size,
        max_fit_scale: f64,
        mode: FitMode,
    ) -> Result<(f64, Vec2), TransformError> {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        if !usable(content.width)
            || !usable(content.height)
            || !usable(view.width)
            || !usable(view.height)
        {
            return Err(TransformError::DegenerateFit {
                content_width: content.width,
                content_height: content.height,
                view_width: view.width,
                view_height: view.height,
            });
        }
        if !usable(max_fit_scale) {
            return Err(TransformError::InvalidScale(max_fit_scale));
        }

        let sx = view.width / content.width;
        let sy = view.height / content.height;
        let scale = max_fit_scale.min(sx).min(sy);

        let translation = match mode {
            FitMode::Center => Vec2::new(
                (view.width - content.width * scale) / 2.0,
                (view.height - content.height * scale) / 2.0,
            ),
            FitMode::AlignMin => Vec2::ZERO,
        };
        Ok((scale, translation))
    }

    /// Fits `content` inside `view` using the current [`FitMode`] and applies it.
    pub fn fit_and_center(
        &mut self,
        content: Size,
        view: Size,
        max_fit_scale: f64,
    ) -> Result<(), TransformError> {
        let (scale, translation) = Self::fit(content, view, max_fit_scale, self.fit_mode)?;
        self.reset(scale, translation)
    }

    /// Snapshot of the current transform state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewTransformDebugInfo {
        ViewTransformDebugInfo {
            scale: self.scale,
            translation: self.translation,
            min_scale: self.min_scale,
            max_scale: self.max_scale,
            fit_mode: self.fit_mode,
        }
    }

    fn clamp_scale(&self, scale: f64) -> f64 {
        let mut s = scale;
        if let Some(lo) = self.min_scale {
            s = s.max(lo);
        }
        if let Some(hi) = self.max_scale {
            s = s.min(hi);
        }
        s
    }

    /// Rebuilds both matrices from `scale` and `translation` and installs them.
    ///
    /// Nothing is written unless the forward matrix has a finite inverse.
    fn commit(&mut self, scale: f64, translation: Vec2) -> Result<(), TransformError> {
        if !translation.is_finite() {
            return Err(TransformError::NonFinite);
        }
        // Content → device: scale, then translate into device space.
        let content_to_device = Affine::translate(translation) * Affine::scale(scale);
        let device_to_content = content_to_device.inverse();
        if content_to_device.determinant() == 0.0 || !device_to_content.is_finite() {
            return Err(TransformError::NonInvertible(scale));
        }
        self.scale = scale;
        self.translation = translation;
        self.content_to_device = content_to_device;
        self.device_to_content = device_to_content;
        Ok(())
    }
}

/// Debug snapshot of a [`ViewTransform`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewTransformDebugInfo {
    /// Current uniform scale.
    pub scale: f64,
    /// Current translation in device pixels.
    pub translation: Vec2,
    /// Minimum scale enforced by zooming, if any.
    pub min_scale: Option<f64>,
    /// Maximum scale enforced by zooming, if any.
    pub max_scale: Option<f64>,
    /// Fit mode used by [`ViewTransform::fit_and_center`].
    pub fit_mode: FitMode,
}
