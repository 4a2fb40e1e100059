// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared canvas state.
//!
//! The controllers and the render loop mutate these cells through the
//! crate-private setters below, which mark the matching change channel.
//! Hosts only get read access.

use kurbo::{Rect, Size};
use pinmark_annotations::{AnnotationStore, CanvasOptions, FileInfo, PointId};
use pinmark_dirty::{ChangeTracker, StateChannels};
use pinmark_view2d::ViewTransform;

use crate::ActiveTool;

/// The observable state of a canvas.
#[derive(Clone, Debug, Default)]
pub struct CanvasState {
    transform: ViewTransform,
    points: AnnotationStore,
    tool: ActiveTool,
    active_element: Option<PointId>,
    options: CanvasOptions,
    file_info: FileInfo,
    view_size: Size,
    changes: ChangeTracker,
}

impl CanvasState {
    /// Content-to-device transform.
    #[must_use]
    pub fn transform(&self) -> &ViewTransform {
        &self.transform
    }

    /// Point annotations.
    #[must_use]
    pub fn points(&self) -> &AnnotationStore {
        &self.points
    }

    /// Active tool.
    #[must_use]
    pub fn tool(&self) -> ActiveTool {
        self.tool
    }

    /// Highlighted point, if any.
    #[must_use]
    pub fn active_element(&self) -> Option<PointId> {
        self.active_element
    }

    /// Display options.
    #[must_use]
    pub fn options(&self) -> CanvasOptions {
        self.options
    }

    /// Size of the loaded image; `0×0` before the first frame after a load.
    #[must_use]
    pub fn file_info(&self) -> FileInfo {
        self.file_info
    }

    /// Size of the drawing surface in device pixels.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view_size
    }

    /// The drawing surface as a device-space rectangle at the origin.
    #[must_use]
    pub fn view_rect(&self) -> Rect {
        self.view_size.to_rect()
    }

    /// Pending change bookkeeping.
    #[must_use]
    pub fn changes(&self) -> &ChangeTracker {
        &self.changes
    }

    /// Callers mark [`StateChannels::TRANSFORM`] once a mutation succeeds.
    pub(crate) fn transform_mut(&mut self) -> &mut ViewTransform {
        &mut self.transform
    }

    /// Callers mark [`StateChannels::ANNOTATIONS`] once a mutation succeeds.
    pub(crate) fn points_mut(&mut self) -> &mut AnnotationStore {
        &mut self.points
    }

    pub(crate) fn set_tool(&mut self, tool: ActiveTool) -> bool {
        if self.tool == tool {
            return false;
        }
        self.tool = tool;
        self.changes.mark(StateChannels::ACTIVE_TOOL);
        true
    }

    pub(crate) fn set_active_element(&mut self, active: Option<PointId>) -> bool {
        if self.active_element == active {
            return false;
        }
        self.active_element = active;
        self.changes.mark(StateChannels::ACTIVE_ELEMENT);
        true
    }

    pub(crate) fn set_options(&mut self, options: CanvasOptions) -> bool {
        if self.options == options {
            return false;
        }
        self.options = options;
        self.changes.mark(StateChannels::CANVAS_OPTIONS);
        true
    }

    pub(crate) fn set_file_info(&mut self, info: FileInfo) {
        self.file_info = info;
        self.changes.mark(StateChannels::FILE_INFO);
    }

    pub(crate) fn set_view_size(&mut self, size: Size) {
        self.view_size = size;
        self.changes.request_redraw();
    }

    pub(crate) fn mark(&mut self, channels: StateChannels) {
        self.changes.mark(channels);
    }

    pub(crate) fn request_redraw(&mut self) {
        self.changes.request_redraw();
    }

    pub(crate) fn take_redraw(&mut self) -> StateChannels {
        self.changes.take_redraw()
    }

    pub(crate) fn take_unpublished(&mut self) -> StateChannels {
        self.changes.take_unpublished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_mark_only_real_changes() {
        let mut state = CanvasState::default();
        assert!(!state.set_tool(ActiveTool::Cursor));
        assert!(state.changes().unpublished().is_empty());

        assert!(state.set_tool(ActiveTool::AddPoint));
        assert!(state.set_active_element(Some(PointId(0))));
        assert_eq!(
            state.take_unpublished(),
            StateChannels::ACTIVE_TOOL | StateChannels::ACTIVE_ELEMENT
        );
    }

    #[test]
    fn resize_redraws_without_publishing() {
        let mut state = CanvasState::default();
        state.set_view_size(Size::new(800.0, 600.0));
        assert!(state.changes().is_redraw_pending());
        assert!(state.changes().unpublished().is_empty());
        assert_eq!(state.view_rect(), Rect::new(0.0, 0.0, 800.0, 600.0));
    }
}
