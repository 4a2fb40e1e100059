// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The editor facade.
//!
//! [`Editor`] owns the canvas state and every controller, and is the only
//! thing a host talks to. Each entry point takes `&mut self`, runs to
//! completion, and then hands the channels it changed to the subscribed
//! observers, so an observer always sees a consistent state.
//!
//! A pointer gesture (a pan or a marker drag) holds the editor's
//! [`GestureCapture`] from pointer-down until pointer-up. Cancelling the
//! pointer, switching tools, starting a new gesture without finishing the old
//! one, and tearing the editor down all release it.

use core::fmt;

use kurbo::{Point, Size};
use log::{debug, trace, warn};
use pinmark_annotations::{CanvasOptions, PointId};
use pinmark_dirty::{ObserverRegistry, StateChannels, SubscriptionId};
use pinmark_event_state::capture::GestureCapture;
use pinmark_export::{ExportError, ExportFile, ExportOptions};
use pinmark_imaging::ImagingBackend;
use pinmark_import::ImageSource;
use pinmark_view2d::TransformError;

use crate::{
    ActiveTool, CanvasConfig, CanvasState, ConfigError, InputEvent, LogNotifier, Notifier,
    OverlayController, OverlayFrame, RenderLoop, Severity, ViewportController,
};

/// Message sent when a click adds a point.
pub const POINT_ADDED: &str = "Point added!";

/// The gesture holding pointer capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gesture {
    /// Panning the view.
    Pan,
    /// Dragging a marker.
    Drag(PointId),
}

/// Pan/zoom canvas with a point-annotation overlay.
pub struct Editor {
    config: CanvasConfig,
    state: CanvasState,
    viewport: ViewportController,
    overlay: OverlayController,
    render: RenderLoop,
    capture: GestureCapture<Gesture>,
    observers: ObserverRegistry,
    notifier: Box<dyn Notifier>,
    torn_down: bool,
}

impl fmt::Debug for Editor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Editor")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("viewport", &self.viewport)
            .field("overlay", &self.overlay)
            .field("render", &self.render)
            .field("capture", &self.capture)
            .field("observers", &self.observers)
            .field("torn_down", &self.torn_down)
            .finish_non_exhaustive()
    }
}

impl Editor {
    /// Creates an editor that reports through [`LogNotifier`].
    pub fn new(config: CanvasConfig) -> Result<Self, ConfigError> {
        Self::with_notifier(config, LogNotifier)
    }

    /// Creates an editor that reports through `notifier`.
    pub fn with_notifier(
        config: CanvasConfig,
        notifier: impl Notifier + 'static,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut state = CanvasState::default();
        if let Err(err) = state
            .transform_mut()
            .set_scale_limits(config.min_scale, config.max_scale)
        {
            // validate() already rejects every limit this could refuse
            warn!("ignoring scale limits: {err}");
        }
        Ok(Self {
            viewport: ViewportController::new(&config),
            overlay: OverlayController::new(&config),
            render: RenderLoop::new(),
            capture: GestureCapture::new(),
            observers: ObserverRegistry::new(),
            notifier: Box::new(notifier),
            torn_down: false,
            state,
            config,
        })
    }

    /// The configuration the editor was built with.
    #[must_use]
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Read access to the canvas state.
    #[must_use]
    pub fn state(&self) -> &CanvasState {
        &self.state
    }

    /// The gesture in progress, if any.
    #[must_use]
    pub fn gesture(&self) -> Option<Gesture> {
        self.capture.owner().copied()
    }

    /// Pointer capture bookkeeping.
    #[must_use]
    pub fn capture(&self) -> &GestureCapture<Gesture> {
        &self.capture
    }

    /// The render loop, for inspecting image state.
    #[must_use]
    pub fn render_loop(&self) -> &RenderLoop {
        &self.render
    }

    /// Returns `true` after [`teardown`](Self::teardown).
    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    // -- Pointer input --------------------------------------------------------

    /// Dispatch one input event.
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown(pos) => self.pointer_down(pos),
            InputEvent::PointerMove(pos) => self.pointer_move(pos),
            InputEvent::PointerUp(pos) => self.pointer_up(pos),
            InputEvent::PointerCancel => self.pointer_cancel(),
            InputEvent::Wheel { pos, delta_y } => self.wheel(pos, delta_y),
        }
    }

    /// Primary button pressed at device position `pos`.
    ///
    /// With [`ActiveTool::Cursor`] a press on a marker starts dragging it and
    /// nothing else; any other press starts a pan. With
    /// [`ActiveTool::AddPoint`] every press pans, and a release close to the
    /// press adds a point.
    pub fn pointer_down(&mut self, pos: Point) {
        if self.torn_down {
            return;
        }
        if self.capture.is_held() {
            debug!("pointer down during a gesture, cancelling it");
            self.cancel_gesture();
        }

        let tool = self.state.tool();
        let marker = if tool.drags_markers() {
            self.overlay.hit_test(&self.state, pos)
        } else {
            None
        };

        match marker {
            Some(id) => {
                self.overlay.begin_drag(id, pos);
                self.capture.acquire(Gesture::Drag(id));
                self.state.mark(StateChannels::DRAG_PREVIEW);
            }
            None => {
                self.viewport.begin_pan(pos);
                if tool == ActiveTool::AddPoint {
                    self.overlay.press(pos);
                }
                self.capture.acquire(Gesture::Pan);
            }
        }
        self.publish();
    }

    /// Pointer moved to device position `pos`.
    pub fn pointer_move(&mut self, pos: Point) {
        if self.torn_down {
            return;
        }
        match self.gesture() {
            Some(Gesture::Pan) => {
                self.overlay.track_press(pos);
                if let Err(err) = self.viewport.pan_to(&mut self.state, pos) {
                    self.report("pan", err);
                }
            }
            Some(Gesture::Drag(_)) => {
                if self.overlay.drag_to(pos) {
                    self.state.mark(StateChannels::DRAG_PREVIEW);
                }
            }
            None => {
                self.overlay.hover(&mut self.state, pos);
            }
        }
        self.publish();
    }

    /// Primary button released at device position `pos`.
    pub fn pointer_up(&mut self, pos: Point) {
        if self.torn_down {
            return;
        }
        match self.capture.release() {
            Some(Gesture::Pan) => {
                self.overlay.track_press(pos);
                if let Err(err) = self.viewport.end_pan(&mut self.state, pos) {
                    self.report("pan", err);
                }
                if self.overlay.release_press(&mut self.state, pos).is_some() {
                    self.notifier.notify(Severity::Success, POINT_ADDED);
                }
            }
            Some(Gesture::Drag(id)) => {
                if let Some(commit) = self.overlay.end_drag(&mut self.state, pos) {
                    trace!("drag of {id} finished, applied: {}", commit.applied);
                }
            }
            None => trace!("pointer up without a gesture"),
        }
        self.publish();
    }

    /// The platform cancelled the pointer. Any gesture is dropped; a pan
    /// keeps the movement it already applied, a drag commits nothing.
    pub fn pointer_cancel(&mut self) {
        if self.torn_down {
            return;
        }
        self.cancel_gesture();
        self.overlay.clear_hover(&mut self.state);
        self.publish();
    }

    /// Wheel over device position `pos`. Only the sign of `delta_y` matters.
    pub fn wheel(&mut self, pos: Point, delta_y: f64) {
        if self.torn_down {
            return;
        }
        if let Err(err) = self.viewport.wheel(&mut self.state, pos, delta_y) {
            self.report("zoom", err);
        }
        self.publish();
    }

    // -- Commands ---------------------------------------------------------------

    /// Switch tools. A gesture in progress is cancelled.
    pub fn set_tool(&mut self, tool: ActiveTool) {
        if self.torn_down {
            return;
        }
        if self.state.set_tool(tool) {
            debug!("tool set to {tool}");
            self.cancel_gesture();
        }
        self.publish();
    }

    /// Highlight `id`, or clear the highlight with `None`.
    ///
    /// Returns `false` if `id` is not a known point or nothing changed.
    pub fn set_active_element(&mut self, id: Option<PointId>) -> bool {
        if self.torn_down {
            return false;
        }
        if let Some(id) = id
            && !self.state.points().contains(id)
        {
            trace!("cannot activate unknown point {id}");
            return false;
        }
        let changed = self.state.set_active_element(id);
        self.publish();
        changed
    }

    /// Replace the display options.
    pub fn set_canvas_options(&mut self, options: CanvasOptions) {
        if self.torn_down {
            return;
        }
        self.state.set_options(options);
        self.publish();
    }

    /// Rename point `id`. Blank names are rejected and the old name stays.
    pub fn rename_point(&mut self, id: PointId, name: &str) -> bool {
        if self.torn_down {
            return false;
        }
        if name.trim().is_empty() {
            debug!("rejecting blank name for {id}");
            return false;
        }
        let renamed = self.state.points_mut().rename(id, name);
        if renamed {
            self.state.mark(StateChannels::ANNOTATIONS);
        }
        self.publish();
        renamed
    }

    /// Delete point `id`. A drag of it in progress will commit nothing.
    pub fn remove_point(&mut self, id: PointId) -> bool {
        if self.torn_down {
            return false;
        }
        let removed = self.state.points_mut().remove(id);
        if removed {
            self.state.mark(StateChannels::ANNOTATIONS);
            if self.state.active_element() == Some(id) {
                self.state.set_active_element(None);
            }
        }
        self.publish();
        removed
    }

    /// Show `source`. The next rendered frame fits it into the view.
    pub fn load_image(&mut self, source: &ImageSource) {
        if self.torn_down {
            return;
        }
        self.cancel_gesture();
        self.render.load(source, &mut self.state);
        self.publish();
    }

    /// The drawing surface changed size.
    pub fn resize(&mut self, view_size: Size) {
        if self.torn_down {
            return;
        }
        trace!("resize to {}x{}", view_size.width, view_size.height);
        self.state.set_view_size(view_size);
        self.publish();
    }

    /// Ask for a frame even though nothing changed.
    pub fn request_redraw(&mut self) {
        self.state.request_redraw();
    }

    /// Draw a frame if one is pending.
    ///
    /// Returns the overlay to draw on top of the raster layer, or `None` if
    /// nothing changed since the last frame.
    pub fn render<B: ImagingBackend>(&mut self, backend: &mut B) -> Option<OverlayFrame> {
        if self.torn_down || !self.state.changes().is_redraw_pending() {
            return None;
        }
        let frame = self
            .render
            .draw(backend, &mut self.state, &self.overlay, &self.config);
        self.state.take_redraw();
        self.publish();
        Some(frame)
    }

    /// Serialize every point.
    ///
    /// Failures are also reported to the notifier.
    pub fn export(&mut self, options: ExportOptions) -> Result<ExportFile, ExportError> {
        let result = pinmark_export::export(
            self.state.points().list(),
            self.state.file_info(),
            options,
        );
        if let Err(err) = &result {
            warn!("export failed: {err}");
            self.notifier
                .notify(Severity::Warning, &format!("Export failed: {err}"));
        }
        result
    }

    // -- Observers ----------------------------------------------------------------

    /// Call `callback` after every entry point that changed one of the
    /// `interest` channels. It receives the changed channels of interest.
    pub fn subscribe<F>(&mut self, interest: StateChannels, callback: F) -> SubscriptionId
    where
        F: FnMut(StateChannels) + 'static,
    {
        self.observers.subscribe(interest, callback)
    }

    /// Remove a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    // -- Lifecycle ----------------------------------------------------------------

    /// Release any held gesture and drop every observer. Further input is
    /// ignored. Also runs on drop.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.cancel_gesture();
        self.observers.clear();
        self.torn_down = true;
        debug!("editor torn down");
    }

    fn cancel_gesture(&mut self) {
        let Some(gesture) = self.capture.release() else {
            return;
        };
        trace!("cancelling {gesture:?}");
        self.viewport.cancel();
        if self.overlay.cancel() {
            self.state.mark(StateChannels::DRAG_PREVIEW);
        }
    }

    fn report(&mut self, action: &str, err: TransformError) {
        warn!("{action} rejected: {err}");
        self.notifier
            .notify(Severity::Warning, &format!("Cannot {action}: {err}"));
    }

    fn publish(&mut self) {
        let changed = self.state.take_unpublished();
        if !changed.is_empty() {
            let delivered = self.observers.publish(changed);
            trace!("published {changed:?} to {delivered} observers");
        }
    }
}

impl Drop for Editor {
    fn drop(&mut self) {
        self.teardown();
    }
}
