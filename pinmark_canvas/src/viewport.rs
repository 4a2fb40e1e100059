// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan and wheel-zoom.
//!
//! Panning keeps the content point under the pointer glued to it: every move
//! translates by the content-space difference between the previous and the
//! current pointer position, both mapped through the transform as it is at
//! that moment. Zoom is stateless and anchored at the cursor.

use kurbo::Point;
use log::{debug, trace};
use pinmark_dirty::StateChannels;
use pinmark_event_state::pan::PanState;
use pinmark_view2d::TransformError;

use crate::{CanvasConfig, CanvasState};

/// Direction of a wheel step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Towards the user; magnifies.
    In,
    /// Away from the user; shrinks.
    Out,
}

impl ZoomDirection {
    /// Classify a wheel delta. Zero and non-finite deltas have no direction.
    #[must_use]
    pub fn from_wheel_delta(delta_y: f64) -> Option<Self> {
        if !delta_y.is_finite() || delta_y == 0.0 {
            None
        } else if delta_y > 0.0 {
            Some(Self::Out)
        } else {
            Some(Self::In)
        }
    }
}

/// Owns the pan gesture and applies pan/zoom to the canvas transform.
#[derive(Clone, Debug)]
pub struct ViewportController {
    pan: PanState,
    zoom_in_factor: f64,
    zoom_out_factor: f64,
}

impl ViewportController {
    /// Creates a controller using the zoom factors from `config`.
    #[must_use]
    pub fn new(config: &CanvasConfig) -> Self {
        Self {
            pan: PanState::default(),
            zoom_in_factor: config.zoom_in_factor,
            zoom_out_factor: config.zoom_out_factor,
        }
    }

    /// Returns `true` while a pan is in progress.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan.is_panning()
    }

    /// Start panning from device position `pos`.
    pub fn begin_pan(&mut self, pos: Point) {
        debug!("pan start at ({:.1}, {:.1})", pos.x, pos.y);
        self.pan.start(pos);
    }

    /// Follow the pointer to `pos`. Returns `Ok(true)` if the transform moved.
    pub fn pan_to(&mut self, state: &mut CanvasState, pos: Point) -> Result<bool, TransformError> {
        let Some(step) = self.pan.update(pos) else {
            return Ok(false);
        };
        let delta = state.transform().content_delta(step.from, step.to);
        trace!("pan by content ({:.3}, {:.3})", delta.x, delta.y);
        if delta.x == 0.0 && delta.y == 0.0 {
            return Ok(false);
        }
        state.transform_mut().translate(delta)?;
        state.mark(StateChannels::TRANSFORM);
        Ok(true)
    }

    /// Finish the pan at `pos`, applying the final movement.
    pub fn end_pan(&mut self, state: &mut CanvasState, pos: Point) -> Result<bool, TransformError> {
        let moved = self.pan_to(state, pos);
        self.pan.end();
        debug!("pan end at ({:.1}, {:.1})", pos.x, pos.y);
        moved
    }

    /// Abandon the pan. Movement already applied stays.
    pub fn cancel(&mut self) {
        if self.pan.is_panning() {
            debug!("pan cancelled");
        }
        self.pan.end();
    }

    /// Zoom factor used for `direction`.
    #[must_use]
    pub fn factor(&self, direction: ZoomDirection) -> f64 {
        match direction {
            ZoomDirection::In => self.zoom_in_factor,
            ZoomDirection::Out => self.zoom_out_factor,
        }
    }

    /// Apply one wheel event at device position `pos`.
    ///
    /// Returns `Ok(false)` for a zero or non-finite delta, or when a scale
    /// limit stops the zoom.
    pub fn wheel(
        &mut self,
        state: &mut CanvasState,
        pos: Point,
        delta_y: f64,
    ) -> Result<bool, TransformError> {
        let Some(direction) = ZoomDirection::from_wheel_delta(delta_y) else {
            trace!("ignoring wheel delta {delta_y}");
            return Ok(false);
        };
        let factor = self.factor(direction);
        let changed = state.transform_mut().zoom_about(pos, factor)?;
        if changed {
            state.mark(StateChannels::TRANSFORM);
            debug!(
                "zoom {direction:?} about ({:.1}, {:.1}) to scale {:.4}",
                pos.x,
                pos.y,
                state.transform().scale()
            );
        }
        Ok(changed)
    }
}
