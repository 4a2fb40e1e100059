// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame production.
//!
//! A frame has two layers. The raster layer is drawn through an
//! [`ImagingBackend`]: the whole surface is cleared under an identity
//! transform, then the image is drawn at the content origin under the view
//! transform. The vector layer is returned as an [`OverlayFrame`], a plain
//! description of every marker in device space, rebuilt from state on every
//! frame.
//!
//! The first frame after an image load fits and centers the image and
//! records its size as the current [`FileInfo`].

use kurbo::{Affine, Point, Size};
use log::{debug, info, warn};
use peniko::Color;
use pinmark_annotations::{FileInfo, PointId};
use pinmark_dirty::StateChannels;
use pinmark_imaging::{
    DrawOp, ImageDesc, ImageId, ImagingBackend, ImagingBackendExt, StateOp,
};
use pinmark_import::ImageSource;

use crate::{CanvasConfig, CanvasState, OverlayController};

/// Outline colour of every marker.
pub const MARKER_STROKE: Color = Color::WHITE;

/// Fill colour of the drag ghost.
pub const GHOST_FILL: Color = Color::from_rgb8(0xff, 0xc0, 0xcb);

/// One point marker, projected into device space.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerView {
    /// Point id.
    pub id: PointId,
    /// Center in device pixels.
    pub center: Point,
    /// Radius in device pixels.
    pub radius: f64,
    /// Outline width in device pixels.
    pub stroke_width: f64,
    /// Fill colour.
    pub fill: Color,
    /// Outline colour.
    pub stroke: Color,
    /// Fill opacity in `[0, 1]`.
    pub fill_opacity: f64,
    /// Label text, unless labels are hidden.
    pub label: Option<String>,
    /// This point is the active element.
    pub active: bool,
    /// This point is being dragged.
    pub dragging: bool,
}

/// The marker that follows the pointer during a drag.
#[derive(Clone, Debug, PartialEq)]
pub struct GhostMarker {
    /// The dragged point.
    pub id: PointId,
    /// Center in device pixels.
    pub center: Point,
    /// Radius in device pixels.
    pub radius: f64,
    /// Outline width in device pixels.
    pub stroke_width: f64,
    /// Fill colour.
    pub fill: Color,
}

/// The vector overlay for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayFrame {
    /// Markers in store order; later ones are drawn on top.
    pub markers: Vec<MarkerView>,
    /// Drag ghost, drawn above every marker.
    pub ghost: Option<GhostMarker>,
    /// Content-to-device transform the frame was built with.
    pub transform: Affine,
    /// Surface size in device pixels.
    pub view_size: Size,
}

impl OverlayFrame {
    /// Marker for point `id`.
    #[must_use]
    pub fn marker(&self, id: PointId) -> Option<&MarkerView> {
        self.markers.iter().find(|m| m.id == id)
    }
}

#[derive(Clone, Debug)]
struct LoadedImage {
    desc: ImageDesc,
    resource: Option<ImageId>,
    info_recorded: bool,
    fitted: bool,
}

/// Draws frames and owns the image resource on the backend.
#[derive(Clone, Debug, Default)]
pub struct RenderLoop {
    image: Option<LoadedImage>,
    stale_resource: Option<ImageId>,
    frames: u64,
}

impl RenderLoop {
    /// Creates a render loop with no image.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the image. The next frame fits it into the view.
    pub fn load(&mut self, source: &ImageSource, state: &mut CanvasState) {
        if let Some(old) = self.image.take() {
            self.stale_resource = old.resource.or(self.stale_resource);
        }
        let desc = ImageDesc::new(source.width, source.height);
        if desc.is_degenerate() {
            warn!(
                "image has degenerate size {}x{}, it will not be drawn",
                source.width, source.height
            );
        } else {
            info!("image loaded, {}x{}", source.width, source.height);
        }
        self.image = Some(LoadedImage {
            desc,
            resource: None,
            info_recorded: false,
            fitted: false,
        });
        state.request_redraw();
    }

    /// Returns `true` once an image has been loaded.
    #[must_use]
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Returns `true` if the loaded image has been fitted into the view.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.image.as_ref().is_some_and(|i| i.fitted)
    }

    /// Number of frames drawn so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Draw one frame and build its overlay.
    pub fn draw<B: ImagingBackend>(
        &mut self,
        backend: &mut B,
        state: &mut CanvasState,
        overlay: &OverlayController,
        config: &CanvasConfig,
    ) -> OverlayFrame {
        if let Some(stale) = self.stale_resource.take() {
            backend.destroy_image(stale);
        }

        let view_rect = state.view_rect();
        backend.with_saved(|b| {
            b.state(StateOp::SetTransform(Affine::IDENTITY));
            b.draw(DrawOp::clear(view_rect));
        });

        if let Some(image) = self.image.as_mut() {
            draw_image(image, backend, state, config);
        }

        self.frames += 1;
        build_overlay(state, overlay, config)
    }
}

fn draw_image<B: ImagingBackend>(
    image: &mut LoadedImage,
    backend: &mut B,
    state: &mut CanvasState,
    config: &CanvasConfig,
) {
    if image.desc.is_degenerate() {
        debug!("skipping degenerate image");
        return;
    }

    if !image.info_recorded {
        state.set_file_info(FileInfo::new(image.desc.width, image.desc.height));
        image.info_recorded = true;
    }

    if !image.fitted {
        let content = image.desc.bounds().size();
        let view = state.view_size();
        match state
            .transform_mut()
            .fit_and_center(content, view, config.device_pixel_ratio)
        {
            Ok(()) => {
                image.fitted = true;
                state.mark(StateChannels::TRANSFORM);
                let t = state.transform();
                debug!(
                    "fitted {}x{} into {}x{}: scale {:.4}, translation ({:.1}, {:.1})",
                    content.width,
                    content.height,
                    view.width,
                    view.height,
                    t.scale(),
                    t.translation().x,
                    t.translation().y
                );
            }
            Err(err) => {
                warn!("cannot fit image yet: {err}");
                return;
            }
        }
    }

    let resource = *image
        .resource
        .get_or_insert_with(|| backend.create_image(image.desc));
    backend.state(StateOp::SetTransform(state.transform().affine()));
    backend.draw(DrawOp::DrawImage {
        image: resource,
        origin: Point::ORIGIN,
    });
}

fn build_overlay(
    state: &CanvasState,
    overlay: &OverlayController,
    config: &CanvasConfig,
) -> OverlayFrame {
    let transform = state.transform();
    let active = state.active_element();
    let dragged = overlay.drag_session().map(|s| s.target);
    let hide_labels = state.options().hide_labels;

    let markers = state
        .points()
        .list()
        .iter()
        .map(|point| {
            let is_active = active == Some(point.id);
            let dragging = dragged == Some(point.id);
            let fill_opacity = if dragging {
                config.dragged_opacity
            } else if active.is_some() && !is_active {
                config.dimmed_opacity
            } else {
                1.0
            };
            MarkerView {
                id: point.id,
                center: transform.to_device(point.position()),
                radius: overlay.radius(is_active),
                stroke_width: overlay.stroke_width(),
                fill: point.color.to_color(),
                stroke: MARKER_STROKE,
                fill_opacity,
                label: (!hide_labels).then(|| point.name.clone()),
                active: is_active,
                dragging,
            }
        })
        .collect();

    let ghost = overlay.drag_session().and_then(|session| {
        let point = state.points().get(session.target)?;
        Some(GhostMarker {
            id: point.id,
            center: transform.to_device(point.position()) + session.device_offset(),
            radius: overlay.radius(false),
            stroke_width: overlay.stroke_width(),
            fill: GHOST_FILL,
        })
    });

    OverlayFrame {
        markers,
        ghost,
        transform: transform.affine(),
        view_size: state.view_size(),
    }
}
