// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scripted session.

use kurbo::{Point, Vec2};
use pinmark_annotations::PointId;
use pinmark_canvas::{ActiveTool, Editor, InputEvent};
use pinmark_view2d::ViewTransform;

/// One user action.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Step {
    Tool(ActiveTool),
    Click(Point),
    Hover(Point),
    Drag { from: Point, to: Point },
    Wheel { at: Point, delta_y: f64 },
    Rename { id: PointId, name: &'static str },
    Remove(PointId),
}

impl Step {
    pub(crate) fn describe(&self) -> String {
        match self {
            Self::Tool(tool) => format!("select tool {tool}"),
            Self::Click(p) => format!("click at ({:.0}, {:.0})", p.x, p.y),
            Self::Hover(p) => format!("hover at ({:.0}, {:.0})", p.x, p.y),
            Self::Drag { from, to } => format!(
                "drag ({:.0}, {:.0}) -> ({:.0}, {:.0})",
                from.x, from.y, to.x, to.y
            ),
            Self::Wheel { at, delta_y } => {
                format!("wheel {delta_y:+} at ({:.0}, {:.0})", at.x, at.y)
            }
            Self::Rename { id, name } => format!("rename {id} to {name}"),
            Self::Remove(id) => format!("remove {id}"),
        }
    }

    pub(crate) fn apply(&self, editor: &mut Editor) {
        match *self {
            Self::Tool(tool) => editor.set_tool(tool),
            Self::Click(p) => {
                editor.handle(InputEvent::PointerDown(p));
                editor.handle(InputEvent::PointerUp(p));
            }
            Self::Hover(p) => editor.handle(InputEvent::PointerMove(p)),
            Self::Drag { from, to } => {
                editor.handle(InputEvent::PointerDown(from));
                editor.handle(InputEvent::PointerMove(from.midpoint(to)));
                editor.handle(InputEvent::PointerMove(to));
                editor.handle(InputEvent::PointerUp(to));
            }
            Self::Wheel { at, delta_y } => editor.handle(InputEvent::Wheel { pos: at, delta_y }),
            Self::Rename { id, name } => {
                editor.rename_point(id, name);
            }
            Self::Remove(id) => {
                editor.remove_point(id);
            }
        }
    }
}

/// Build the script for an image of `width`×`height` shown through `view`.
///
/// Points are placed at fixed fractions of the image, so the first three
/// get ids 0, 1 and 2.
pub(crate) fn steps(view: &ViewTransform, width: u32, height: u32) -> Vec<Step> {
    let (w, h) = (f64::from(width), f64::from(height));
    let at = |fx: f64, fy: f64| view.to_device(Point::new(w * fx, h * fy));
    let (a, b, c) = (at(0.25, 0.25), at(0.5, 0.5), at(0.75, 0.6));

    vec![
        Step::Tool(ActiveTool::AddPoint),
        Step::Click(a),
        Step::Click(b),
        Step::Click(c),
        Step::Tool(ActiveTool::Cursor),
        Step::Hover(b),
        Step::Drag {
            from: a,
            to: a + Vec2::new(30.0, 20.0),
        },
        Step::Wheel { at: b, delta_y: -1.0 },
        Step::Wheel { at: b, delta_y: -1.0 },
        Step::Rename {
            id: PointId(1),
            name: "center",
        },
        Step::Remove(PointId(2)),
    ]
}
