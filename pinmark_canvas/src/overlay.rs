// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point placement, marker dragging, and hover.
//!
//! Markers live in device space: each frame re-projects every point through
//! the live transform, and hit tests use the same projection. When markers
//! overlap, the one drawn last (latest in store order) wins.
//!
//! A drag never touches the store until it ends. While it is in progress only
//! the ghost follows the pointer; on release the device-space start and end
//! positions are both mapped through the transform as it is *then*, and the
//! point moves once by the content-space difference. A zoom in the middle of
//! a drag is therefore reflected in the final position.

use kurbo::{Point, Vec2};
use log::{debug, trace};
use pinmark_annotations::{PointAnnotation, PointId};
use pinmark_dirty::StateChannels;
use pinmark_event_state::click::{ClickResult, ClickState};
use pinmark_event_state::drag::{DragSession, DragState};
use pinmark_event_state::hover::{HoverEvent, HoverState};
use pinmark_precise_hit::{HitParams, StrokedDisc, pick_last};
use pinmark_view2d::ViewTransform;

use crate::{ActiveTool, CanvasConfig, CanvasState};

/// Outcome of a finished drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragCommit {
    /// The dragged point.
    pub id: PointId,
    /// Content-space displacement computed at release.
    pub content_delta: Vec2,
    /// `false` if the point no longer existed, so nothing moved.
    pub applied: bool,
}

/// Interaction state for the annotation overlay.
#[derive(Clone, Debug)]
pub struct OverlayController {
    drag: DragState<PointId>,
    click: ClickState,
    hover: HoverState<PointId>,
    hit_params: HitParams,
    marker_radius: f64,
    active_marker_radius: f64,
    stroke_width: f64,
}

impl OverlayController {
    /// Creates a controller using the marker geometry from `config`.
    #[must_use]
    pub fn new(config: &CanvasConfig) -> Self {
        Self {
            drag: DragState::default(),
            click: ClickState::new(config.click_slop),
            hover: HoverState::new(),
            hit_params: HitParams {
                fill_tolerance: config.hit_tolerance,
                stroke_tolerance: config.hit_tolerance,
            },
            marker_radius: config.marker_radius,
            active_marker_radius: config.active_marker_radius,
            stroke_width: config.marker_stroke_width,
        }
    }

    /// Device-space marker radius for a point.
    #[must_use]
    pub fn radius(&self, active: bool) -> f64 {
        if active {
            self.active_marker_radius
        } else {
            self.marker_radius
        }
    }

    /// Outline width of every marker.
    #[must_use]
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Device-space hit shape of `point` under `transform`.
    #[must_use]
    pub fn marker_shape(
        &self,
        transform: &ViewTransform,
        point: &PointAnnotation,
        active: bool,
    ) -> StrokedDisc {
        StrokedDisc::new(
            transform.to_device(point.position()),
            self.radius(active),
            self.stroke_width,
        )
    }

    /// The topmost marker under device position `pos`.
    #[must_use]
    pub fn hit_test(&self, state: &CanvasState, pos: Point) -> Option<PointId> {
        let active = state.active_element();
        let shapes = state.points().list().iter().map(|p| {
            (
                p.id,
                self.marker_shape(state.transform(), p, active == Some(p.id)),
            )
        });
        pick_last(shapes, pos, &self.hit_params).map(|(id, _)| id)
    }

    // -- Drag ---------------------------------------------------------------

    /// Start dragging point `id` from device position `pos`.
    pub fn begin_drag(&mut self, id: PointId, pos: Point) {
        debug!("drag {id} start at ({:.1}, {:.1})", pos.x, pos.y);
        self.drag.start(id, pos);
    }

    /// Move the ghost to `pos`. Returns `false` if no drag is active.
    pub fn drag_to(&mut self, pos: Point) -> bool {
        match self.drag.update(pos) {
            Some(delta) => {
                trace!("drag ghost by ({:.1}, {:.1})", delta.x, delta.y);
                true
            }
            None => false,
        }
    }

    /// Finish the drag at `pos` and move the point once.
    ///
    /// Returns `None` if no drag was active. A point deleted during the drag
    /// is left alone and reported with `applied: false`.
    pub fn end_drag(&mut self, state: &mut CanvasState, pos: Point) -> Option<DragCommit> {
        self.drag.update(pos);
        let session = self.drag.end()?;
        state.mark(StateChannels::DRAG_PREVIEW);

        let content_delta = state.transform().content_delta(session.start_pos, pos);
        let applied = state
            .points_mut()
            .move_by(session.target, content_delta.x, content_delta.y);
        if applied {
            state.mark(StateChannels::ANNOTATIONS);
            debug!(
                "drag {} committed, content delta ({:.3}, {:.3})",
                session.target, content_delta.x, content_delta.y
            );
        } else {
            debug!("drag {} ended on a deleted point", session.target);
        }
        Some(DragCommit {
            id: session.target,
            content_delta,
            applied,
        })
    }

    /// Drop the drag without moving anything. Returns `true` if one was active.
    pub fn cancel_drag(&mut self) -> bool {
        let Some(session) = self.drag.end() else {
            return false;
        };
        debug!("drag {} cancelled", session.target);
        true
    }

    /// Drop any drag and pending press without committing. Returns `true`
    /// if a drag was dropped.
    pub fn cancel(&mut self) -> bool {
        self.cancel_press();
        self.cancel_drag()
    }

    /// The drag in progress.
    #[must_use]
    pub fn drag_session(&self) -> Option<&DragSession<PointId>> {
        self.drag.session()
    }

    // -- Add point ----------------------------------------------------------

    /// Record a press that may become an add-point click.
    pub fn press(&mut self, pos: Point) {
        self.click.on_down(pos);
    }

    /// Record pointer travel during the press.
    pub fn track_press(&mut self, pos: Point) {
        self.click.on_move(pos);
    }

    /// Finish the press. If it was a click on the background with the
    /// add-point tool, a point is added under `pos` and its id returned.
    pub fn release_press(&mut self, state: &mut CanvasState, pos: Point) -> Option<PointId> {
        let ClickResult::Click(_) = self.click.on_up(pos) else {
            return None;
        };
        if state.tool() != ActiveTool::AddPoint {
            return None;
        }
        if let Some(hit) = self.hit_test(state, pos) {
            trace!("click on marker {hit}, not adding");
            return None;
        }
        let at = state.transform().to_content(pos);
        let id = state.points_mut().add(at.x, at.y);
        state.mark(StateChannels::ANNOTATIONS);
        debug!("added {id} at content ({:.3}, {:.3})", at.x, at.y);
        Some(id)
    }

    /// Forget a pending press.
    pub fn cancel_press(&mut self) {
        self.click.cancel();
    }

    // -- Hover --------------------------------------------------------------

    /// Update the hovered marker for pointer position `pos`, syncing the
    /// active element. Returns `true` if the active element changed.
    pub fn hover(&mut self, state: &mut CanvasState, pos: Point) -> bool {
        let target = self.hit_test(state, pos);
        let mut changed = false;
        for event in self.hover.update(target) {
            changed |= apply_hover(state, event);
        }
        changed
    }

    /// Forget the hovered marker, clearing the active element if it came from
    /// hovering.
    pub fn clear_hover(&mut self, state: &mut CanvasState) -> bool {
        self.hover
            .clear()
            .is_some_and(|event| apply_hover(state, event))
    }

    /// The marker under the pointer, as of the last hover update.
    #[must_use]
    pub fn hovered(&self) -> Option<PointId> {
        self.hover.current()
    }
}

fn apply_hover(state: &mut CanvasState, event: HoverEvent<PointId>) -> bool {
    match event {
        HoverEvent::Enter(id) => state.set_active_element(Some(id)),
        HoverEvent::Leave(id) if state.active_element() == Some(id) => {
            state.set_active_element(None)
        }
        HoverEvent::Leave(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (OverlayController, CanvasState) {
        (
            OverlayController::new(&CanvasConfig::default()),
            CanvasState::default(),
        )
    }

    #[test]
    fn hit_test_prefers_the_last_overlapping_marker() {
        let (overlay, mut state) = setup();
        let a = state.points_mut().add(10.0, 10.0);
        let b = state.points_mut().add(14.0, 10.0);
        assert_eq!(overlay.hit_test(&state, Point::new(12.0, 10.0)), Some(b));
        assert_eq!(overlay.hit_test(&state, Point::new(1.0, 10.0)), Some(a));
        assert_eq!(overlay.hit_test(&state, Point::new(100.0, 100.0)), None);
    }

    #[test]
    fn hit_test_follows_the_transform() {
        let (overlay, mut state) = setup();
        let id = state.points_mut().add(10.0, 10.0);
        state
            .transform_mut()
            .reset(2.0, Vec2::new(5.0, 0.0))
            .unwrap();
        assert_eq!(overlay.hit_test(&state, Point::new(25.0, 20.0)), Some(id));
        assert_eq!(overlay.hit_test(&state, Point::new(10.0, 10.0)), None);
    }

    #[test]
    fn drag_commits_once_through_the_live_transform() {
        let (mut overlay, mut state) = setup();
        let id = state.points_mut().add(10.0, 10.0);
        state.transform_mut().reset(2.0, Vec2::ZERO).unwrap();

        overlay.begin_drag(id, Point::new(20.0, 20.0));
        assert!(overlay.drag_to(Point::new(30.0, 20.0)));
        assert_eq!(state.points().get(id).unwrap().position(), Point::new(10.0, 10.0));

        let commit = overlay.end_drag(&mut state, Point::new(40.0, 20.0)).unwrap();
        assert!(commit.applied);
        assert_eq!(commit.content_delta, Vec2::new(10.0, 0.0));
        assert_eq!(state.points().get(id).unwrap().position(), Point::new(20.0, 10.0));
        assert!(overlay.drag_session().is_none());
    }

    #[test]
    fn ending_without_a_drag_is_none() {
        let (mut overlay, mut state) = setup();
        assert!(overlay.end_drag(&mut state, Point::ORIGIN).is_none());
        assert!(!overlay.drag_to(Point::ORIGIN));
        assert!(!overlay.cancel_drag());
    }

    #[test]
    fn click_adds_only_with_add_point_tool() {
        let (mut overlay, mut state) = setup();
        overlay.press(Point::new(5.0, 5.0));
        assert_eq!(overlay.release_press(&mut state, Point::new(5.0, 5.0)), None);

        state.set_tool(ActiveTool::AddPoint);
        overlay.press(Point::new(5.0, 5.0));
        let id = overlay
            .release_press(&mut state, Point::new(6.0, 5.0))
            .unwrap();
        assert_eq!(state.points().get(id).unwrap().position(), Point::new(6.0, 5.0));
    }

    #[test]
    fn long_press_travel_is_not_a_click() {
        let (mut overlay, mut state) = setup();
        state.set_tool(ActiveTool::AddPoint);
        overlay.press(Point::new(0.0, 0.0));
        overlay.track_press(Point::new(50.0, 0.0));
        assert_eq!(overlay.release_press(&mut state, Point::new(0.0, 0.0)), None);
        assert!(state.points().is_empty());
    }

    #[test]
    fn click_on_marker_does_not_add() {
        let (mut overlay, mut state) = setup();
        state.set_tool(ActiveTool::AddPoint);
        state.points_mut().add(50.0, 50.0);
        overlay.press(Point::new(50.0, 50.0));
        assert_eq!(overlay.release_press(&mut state, Point::new(50.0, 50.0)), None);
        assert_eq!(state.points().len(), 1);
    }

    #[test]
    fn hover_drives_the_active_element() {
        let (mut overlay, mut state) = setup();
        let id = state.points_mut().add(50.0, 50.0);

        assert!(overlay.hover(&mut state, Point::new(52.0, 50.0)));
        assert_eq!(state.active_element(), Some(id));
        assert!(!overlay.hover(&mut state, Point::new(51.0, 50.0)));

        assert!(overlay.hover(&mut state, Point::new(200.0, 200.0)));
        assert_eq!(state.active_element(), None);
    }

    #[test]
    fn leaving_does_not_clear_an_externally_chosen_element() {
        let (mut overlay, mut state) = setup();
        let a = state.points_mut().add(50.0, 50.0);
        let b = state.points_mut().add(300.0, 300.0);

        overlay.hover(&mut state, Point::new(50.0, 50.0));
        state.set_active_element(Some(b));
        overlay.hover(&mut state, Point::new(0.0, 0.0));
        assert_eq!(state.active_element(), Some(b));
        assert_eq!(overlay.hovered(), None);
        assert_ne!(a, b);
    }
}
