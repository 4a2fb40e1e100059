// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Whole-editor scenarios driven through input events.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Size, Vec2};
use pinmark_annotations::{FileInfo, PointId};
use pinmark_canvas::{
    ActiveTool, CanvasConfig, Editor, Gesture, InputEvent, RecordingNotifier, Severity,
    StateChannels,
};
use pinmark_export::{CoordinateMode, ExportError, ExportFormat, ExportOptions};
use pinmark_imaging::RecordingBackend;
use pinmark_import::ImageSource;

fn assert_close(a: Point, b: Point) {
    assert!((a - b).hypot() < 1e-9, "{a:?} != {b:?}");
}

/// An editor showing a 100×100 image at scale 2, translated to (300, 200).
fn scaled_editor() -> (Editor, RecordingBackend, RecordingNotifier) {
    let config = CanvasConfig {
        device_pixel_ratio: 2.0,
        ..CanvasConfig::default()
    };
    let notifier = RecordingNotifier::new();
    let mut editor = Editor::with_notifier(config, notifier.clone()).unwrap();
    let mut backend = RecordingBackend::new();
    editor.resize(Size::new(800.0, 600.0));
    editor.load_image(&ImageSource::blank(100, 100));
    editor.render(&mut backend).unwrap();
    assert_eq!(editor.state().transform().scale(), 2.0);
    assert_eq!(
        editor.state().transform().translation(),
        Vec2::new(300.0, 200.0)
    );
    (editor, backend, notifier)
}

fn click(editor: &mut Editor, pos: Point) {
    editor.handle(InputEvent::PointerDown(pos));
    editor.handle(InputEvent::PointerUp(pos));
}

/// Adds a point at content (10, 10), device (320, 220).
fn add_sample_point(editor: &mut Editor) -> PointId {
    editor.set_tool(ActiveTool::AddPoint);
    click(editor, Point::new(320.0, 220.0));
    editor.set_tool(ActiveTool::Cursor);
    let point = editor.state().points().list().last().unwrap();
    assert_eq!((point.x, point.y), (10.0, 10.0));
    point.id
}

#[test]
fn initial_fit_centers_small_images() {
    let mut editor = Editor::new(CanvasConfig::default()).unwrap();
    let seen = Rc::new(RefCell::new(StateChannels::empty()));
    let sink = seen.clone();
    editor.subscribe(StateChannels::OBSERVABLE, move |c| *sink.borrow_mut() |= c);

    editor.resize(Size::new(800.0, 600.0));
    editor.load_image(&ImageSource::blank(400, 300));
    assert!(editor.render(&mut RecordingBackend::new()).is_some());

    assert_eq!(editor.state().transform().scale(), 1.0);
    assert_eq!(
        editor.state().transform().translation(),
        Vec2::new(200.0, 150.0)
    );
    assert_eq!(editor.state().file_info(), FileInfo::new(400, 300));
    assert_eq!(
        *seen.borrow(),
        StateChannels::TRANSFORM | StateChannels::FILE_INFO
    );
}

#[test]
fn drag_moves_by_content_delta() {
    let (mut editor, _, _) = scaled_editor();
    let id = add_sample_point(&mut editor);

    editor.handle(InputEvent::PointerDown(Point::new(320.0, 220.0)));
    assert_eq!(editor.gesture(), Some(Gesture::Drag(id)));
    editor.handle(InputEvent::PointerMove(Point::new(330.0, 220.0)));
    // only the ghost moves until release
    assert_eq!(editor.state().points().get(id).unwrap().x, 10.0);
    editor.handle(InputEvent::PointerUp(Point::new(340.0, 220.0)));

    let point = editor.state().points().get(id).unwrap();
    assert_eq!((point.x, point.y), (20.0, 10.0));
    assert!(editor.capture().is_balanced());
    // a drag never pans
    assert_eq!(
        editor.state().transform().translation(),
        Vec2::new(300.0, 200.0)
    );
}

#[test]
fn zoom_during_drag_uses_the_live_transform() {
    let (mut editor, _, _) = scaled_editor();
    let id = add_sample_point(&mut editor);

    editor.handle(InputEvent::PointerDown(Point::new(320.0, 220.0)));
    editor.handle(InputEvent::Wheel {
        pos: Point::new(320.0, 220.0),
        delta_y: -1.0,
    });
    assert!((editor.state().transform().scale() - 2.2).abs() < 1e-12);
    editor.handle(InputEvent::PointerUp(Point::new(342.0, 220.0)));

    let point = editor.state().points().get(id).unwrap();
    assert_close(point.position(), Point::new(20.0, 10.0));
}

#[test]
fn deleting_the_dragged_point_is_harmless() {
    let (mut editor, mut backend, _) = scaled_editor();
    let id = add_sample_point(&mut editor);

    editor.handle(InputEvent::PointerDown(Point::new(320.0, 220.0)));
    editor.handle(InputEvent::PointerMove(Point::new(360.0, 220.0)));
    assert!(editor.remove_point(id));

    let frame = editor.render(&mut backend).unwrap();
    assert!(frame.ghost.is_none());
    assert!(frame.markers.is_empty());

    editor.handle(InputEvent::PointerUp(Point::new(380.0, 220.0)));
    assert!(editor.state().points().is_empty());
    assert!(editor.capture().is_balanced());
}

#[test]
fn add_point_tool_pans_over_markers_and_does_not_stack_points() {
    let (mut editor, _, notifier) = scaled_editor();
    add_sample_point(&mut editor);
    editor.set_tool(ActiveTool::AddPoint);

    click(&mut editor, Point::new(320.0, 220.0));
    assert_eq!(editor.state().points().len(), 1);

    editor.handle(InputEvent::PointerDown(Point::new(320.0, 220.0)));
    assert_eq!(editor.gesture(), Some(Gesture::Pan));
    editor.handle(InputEvent::PointerMove(Point::new(340.0, 220.0)));
    editor.handle(InputEvent::PointerUp(Point::new(340.0, 220.0)));
    assert_eq!(
        editor.state().transform().translation(),
        Vec2::new(320.0, 200.0)
    );
    assert_eq!(editor.state().points().len(), 1);
    assert_eq!(notifier.messages(Severity::Success).len(), 1);
}

#[test]
fn zero_wheel_delta_changes_nothing() {
    let (mut editor, mut backend, _) = scaled_editor();
    let before = editor.state().transform().affine();
    editor.handle(InputEvent::Wheel {
        pos: Point::new(10.0, 10.0),
        delta_y: 0.0,
    });
    assert_eq!(editor.state().transform().affine(), before);
    assert!(editor.render(&mut backend).is_none());
}

#[test]
fn wheel_zoom_keeps_the_cursor_anchored() {
    let (mut editor, _, _) = scaled_editor();
    let cursor = Point::new(123.0, 456.0);
    let before = editor.state().transform().to_content(cursor);
    for delta in [-3.0, -1.0, 2.0, -7.0] {
        editor.wheel(cursor, delta);
    }
    assert_close(editor.state().transform().to_content(cursor), before);
}

#[test]
fn tool_change_cancels_the_drag() {
    let (mut editor, _, _) = scaled_editor();
    let id = add_sample_point(&mut editor);

    editor.handle(InputEvent::PointerDown(Point::new(320.0, 220.0)));
    editor.handle(InputEvent::PointerMove(Point::new(400.0, 300.0)));
    editor.set_tool(ActiveTool::AddPoint);
    assert_eq!(editor.gesture(), None);
    assert!(editor.capture().is_balanced());

    editor.handle(InputEvent::PointerUp(Point::new(400.0, 300.0)));
    let point = editor.state().points().get(id).unwrap();
    assert_eq!((point.x, point.y), (10.0, 10.0));
}

#[test]
fn pointer_cancel_drops_the_drag() {
    let (mut editor, _, _) = scaled_editor();
    let id = add_sample_point(&mut editor);

    editor.handle(InputEvent::PointerDown(Point::new(320.0, 220.0)));
    editor.handle(InputEvent::PointerMove(Point::new(400.0, 300.0)));
    editor.handle(InputEvent::PointerCancel);
    assert!(editor.capture().is_balanced());
    assert_eq!(editor.state().points().get(id).unwrap().x, 10.0);
}

#[test]
fn teardown_releases_the_gesture() {
    let (mut editor, _, _) = scaled_editor();
    editor.handle(InputEvent::PointerDown(Point::new(5.0, 5.0)));
    assert!(editor.capture().is_held());
    editor.teardown();
    assert!(editor.capture().is_balanced());
    assert_eq!(editor.capture().acquired_count(), 1);
}

#[test]
fn dropping_mid_drag_publishes_nothing_and_releases_observers() {
    let (mut editor, _, notifier) = scaled_editor();
    add_sample_point(&mut editor);
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    editor.subscribe(StateChannels::OBSERVABLE, move |c| {
        sink.borrow_mut().push(c);
    });

    editor.handle(InputEvent::PointerDown(Point::new(320.0, 220.0)));
    editor.handle(InputEvent::PointerMove(Point::new(360.0, 240.0)));
    assert!(editor.capture().is_held());
    let published = log.borrow().len();
    let notified = notifier.messages(Severity::Success).len();
    assert_eq!(Rc::strong_count(&log), 2);

    drop(editor);
    assert_eq!(log.borrow().len(), published);
    assert_eq!(notifier.messages(Severity::Success).len(), notified);
    assert_eq!(notifier.messages(Severity::Warning).len(), 0);
    assert_eq!(Rc::strong_count(&log), 1);
}

#[test]
fn hover_drives_the_active_element() {
    let (mut editor, mut backend, _) = scaled_editor();
    let id = add_sample_point(&mut editor);
    let changes = Rc::new(RefCell::new(0_u32));
    let sink = changes.clone();
    editor.subscribe(StateChannels::ACTIVE_ELEMENT, move |_| {
        *sink.borrow_mut() += 1;
    });

    editor.handle(InputEvent::PointerMove(Point::new(322.0, 221.0)));
    assert_eq!(editor.state().active_element(), Some(id));
    let frame = editor.render(&mut backend).unwrap();
    assert!(frame.marker(id).unwrap().active);

    editor.handle(InputEvent::PointerMove(Point::new(600.0, 500.0)));
    assert_eq!(editor.state().active_element(), None);
    assert_eq!(*changes.borrow(), 2);
}

#[test]
fn observers_see_only_their_channels() {
    let (mut editor, _, _) = scaled_editor();
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    let sub = editor.subscribe(StateChannels::ANNOTATIONS, move |c| {
        sink.borrow_mut().push(c);
    });

    let id = add_sample_point(&mut editor);
    editor.handle(InputEvent::PointerDown(Point::new(320.0, 220.0)));
    editor.handle(InputEvent::PointerMove(Point::new(330.0, 220.0)));
    assert_eq!(log.borrow().len(), 1);
    editor.handle(InputEvent::PointerUp(Point::new(330.0, 220.0)));
    assert_eq!(
        *log.borrow(),
        vec![StateChannels::ANNOTATIONS, StateChannels::ANNOTATIONS]
    );

    assert!(editor.unsubscribe(sub));
    editor.rename_point(id, "tip");
    assert_eq!(log.borrow().len(), 2);
}

#[test]
fn relative_export_uses_the_image_size() {
    let (mut editor, _, _) = scaled_editor();
    add_sample_point(&mut editor);
    let file = editor
        .export(ExportOptions {
            format: ExportFormat::Csv,
            coordinates: CoordinateMode::Relative,
        })
        .unwrap();
    assert_eq!(file.file_name, "point-data.csv");
    assert_eq!(file.contents, "id,name,x,y\n0,POINT_0,0.1,0.1\n");
}

#[test]
fn relative_export_without_an_image_is_rejected() {
    let notifier = RecordingNotifier::new();
    let mut editor = Editor::with_notifier(CanvasConfig::default(), notifier.clone()).unwrap();
    let err = editor.export(ExportOptions::default()).unwrap_err();
    assert!(matches!(err, ExportError::MissingImageSize { .. }));
    assert_eq!(notifier.messages(Severity::Warning).len(), 1);

    let file = editor
        .export(ExportOptions {
            format: ExportFormat::Json,
            coordinates: CoordinateMode::Absolute,
        })
        .unwrap();
    assert_eq!(file.contents, "[]");
}
