// Copyright 2025 the Fieldplace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the gesture state machine: draws, drags, resizes, picking and
//! cursor hints.

use fieldplace_coords::{CoordinateSpace, PointBounds, ViewportContext};
use fieldplace_interaction::{
    CursorHint, GestureOutcome, Handle, InteractionConfig, InteractionEngine, InteractionState,
    Preview, hit_test,
};
use fieldplace_store::{FieldId, FieldLocation, FieldPosition, FieldRecord, InputType};
use kurbo::Point;

const LETTER: f64 = 792.0;

fn close(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}

fn field(raw: u64, bounds: PointBounds) -> FieldRecord {
    FieldRecord::new(
        FieldId::from_raw(raw),
        format!("text_field_{raw}"),
        InputType::TextField,
        FieldLocation::new(1, bounds),
    )
}

fn draw(space: CoordinateSpace) -> PointBounds {
    let viewport = ViewportContext::new(1, 1.5, LETTER);
    let mut engine = InteractionEngine::default();
    assert!(engine.begin_draw(Point::new(100.0, 100.0), &viewport));
    match engine.complete(Point::new(300.0, 250.0), &viewport, space) {
        Some(GestureOutcome::Drawn { bounds, .. }) => bounds,
        other => panic!("expected a drawn field, got {other:?}"),
    }
}

#[test]
fn library_draw_scenario() {
    let b = draw(CoordinateSpace::Library);
    assert!(close(b.left, 66.7, 0.05));
    assert!(close(b.top, 66.7, 0.05));
    assert!(close(b.width, 133.3, 0.05));
    assert!(close(b.height, 100.0, 1e-9));
}

#[test]
fn transient_draw_anchors_the_top_edge() {
    let b = draw(CoordinateSpace::Transient);
    assert!(close(b.top, LETTER - 66.7, 0.05), "top was {}", b.top);
    assert!(close(b.height, 100.0, 1e-9));

    // The drawn field is picked exactly where it was drawn.
    let viewport = ViewportContext::new(1, 1.5, LETTER);
    let fields = [field(1, b)];
    let space = CoordinateSpace::Transient;
    assert!(hit_test(&fields, Point::new(200.0, 110.0), &viewport, space).is_some());
    assert!(hit_test(&fields, Point::new(200.0, 240.0), &viewport, space).is_some());
    assert!(hit_test(&fields, Point::new(200.0, 90.0), &viewport, space).is_none());
}

#[test]
fn reversed_tiny_draw_is_normalized_and_floored() {
    let viewport = ViewportContext::new(3, 1.0, LETTER);
    let mut engine = InteractionEngine::default();
    engine.begin_draw(Point::new(50.0, 50.0), &viewport);
    let Some(GestureOutcome::Drawn { page_number, bounds }) =
        engine.complete(Point::new(45.0, 48.0), &viewport, CoordinateSpace::Library)
    else {
        panic!("expected a drawn field");
    };
    assert_eq!(page_number, 3);
    assert_eq!(bounds, PointBounds::new(45.0, 48.0, 20.0, 20.0));
}

#[test]
fn draw_preview_follows_the_pointer() {
    let viewport = ViewportContext::new(1, 1.0, LETTER);
    let mut engine = InteractionEngine::default();
    engine.begin_draw(Point::new(10.0, 10.0), &viewport);
    let preview = engine.update(Point::new(110.0, 60.0), &viewport, CoordinateSpace::Library);
    assert_eq!(
        preview,
        Some(Preview::Draw {
            page_number: 1,
            bounds: PointBounds::new(10.0, 10.0, 100.0, 50.0),
        })
    );
}

#[test]
fn overlapping_fields_pick_the_latest() {
    let viewport = ViewportContext::new(1, 1.0, LETTER);
    let fields = [
        field(1, PointBounds::new(0.0, 0.0, 100.0, 100.0)),
        field(2, PointBounds::new(50.0, 50.0, 100.0, 100.0)),
    ];
    let hit = hit_test(&fields, Point::new(75.0, 75.0), &viewport, CoordinateSpace::Library);
    assert_eq!(hit, Some(FieldId::from_raw(2)));
    let hit = hit_test(&fields, Point::new(25.0, 25.0), &viewport, CoordinateSpace::Library);
    assert_eq!(hit, Some(FieldId::from_raw(1)));
}

#[test]
fn snapped_drag_by_23_points_lands_on_the_grid() {
    let viewport = ViewportContext::new(1, 1.0, LETTER);
    let config = InteractionConfig {
        snap_to_grid: true,
        grid_size: 10.0,
        ..InteractionConfig::default()
    };
    let mut engine = InteractionEngine::new(config);
    let target = field(1, PointBounds::new(40.0, 40.0, 50.0, 20.0));
    assert!(engine.begin_drag(&target, Point::new(60.0, 50.0), &viewport));

    let outcome = engine.complete(Point::new(83.0, 73.0), &viewport, CoordinateSpace::Library);
    let Some(GestureOutcome::Moved { from, to, .. }) = outcome else {
        panic!("expected a move, got {outcome:?}");
    };
    assert_eq!(from, FieldPosition::new(40.0, 40.0));
    assert_eq!(to, FieldPosition::new(60.0, 60.0));
    assert_eq!((to.left - from.left) % 10.0, 0.0);
}

#[test]
fn drag_in_bottom_origin_space_flips_the_vertical_delta() {
    let viewport = ViewportContext::new(1, 2.0, LETTER);
    let mut engine = InteractionEngine::default();
    let target = field(1, PointBounds::new(100.0, 500.0, 50.0, 20.0));
    engine.begin_drag(&target, Point::new(0.0, 0.0), &viewport);
    let preview = engine.update(Point::new(20.0, 40.0), &viewport, CoordinateSpace::Transient);
    assert_eq!(
        preview,
        Some(Preview::Move {
            field: target.id(),
            to: FieldPosition::new(110.0, 480.0),
        })
    );
}

#[test]
fn zero_movement_is_unchanged() {
    let viewport = ViewportContext::new(1, 1.0, LETTER);
    let mut engine = InteractionEngine::default();
    let target = field(7, PointBounds::new(10.0, 10.0, 50.0, 50.0));
    let point = Point::new(20.0, 20.0);

    engine.begin_drag(&target, point, &viewport);
    let outcome = engine.complete(point, &viewport, CoordinateSpace::Library);
    assert_eq!(outcome, Some(GestureOutcome::Unchanged { field: target.id() }));
    assert_eq!(outcome.and_then(|o| o.command()), None);

    engine.begin_resize(&target, Handle::BottomRight, point, &viewport);
    let outcome = engine.complete(point, &viewport, CoordinateSpace::Library);
    assert_eq!(outcome, Some(GestureOutcome::Unchanged { field: target.id() }));
    assert!(!engine.is_active());
}

#[test]
fn zero_movement_with_snapping_leaves_off_grid_field_alone() {
    let viewport = ViewportContext::new(1, 1.0, LETTER);
    let mut engine = InteractionEngine::new(InteractionConfig {
        snap_to_grid: true,
        ..InteractionConfig::default()
    });
    let start = PointBounds::new(13.0, 17.0, 50.0, 30.0);
    let target = field(3, start);
    let point = Point::new(30.0, 30.0);

    engine.begin_drag(&target, point, &viewport);
    assert_eq!(
        engine.update(point, &viewport, CoordinateSpace::Library),
        Some(Preview::Move {
            field: target.id(),
            to: FieldPosition::of(&start),
        })
    );
    let outcome = engine.complete(point, &viewport, CoordinateSpace::Library);
    assert_eq!(outcome, Some(GestureOutcome::Unchanged { field: target.id() }));

    let corner = Point::new(63.0, 47.0);
    engine.begin_resize(&target, Handle::BottomRight, corner, &viewport);
    let outcome = engine.complete(corner, &viewport, CoordinateSpace::Library);
    assert_eq!(outcome, Some(GestureOutcome::Unchanged { field: target.id() }));
}

#[test]
fn resize_never_goes_below_the_minimum() {
    let viewport = ViewportContext::new(1, 1.5, LETTER);
    for space in [CoordinateSpace::Library, CoordinateSpace::Transient] {
        for handle in Handle::ALL {
            for &(dx, dy) in &[(400.0, 400.0), (-400.0, -400.0), (1e6, -1e6), (-37.0, 91.0)] {
                let mut engine = InteractionEngine::default();
                let target = field(1, PointBounds::new(100.0, 400.0, 60.0, 30.0));
                engine.begin_resize(&target, handle, Point::new(0.0, 0.0), &viewport);
                let Some(Preview::Resize { to, .. }) =
                    engine.update(Point::new(dx, dy), &viewport, space)
                else {
                    panic!("expected a resize preview");
                };
                assert!(to.width >= 20.0, "{handle:?} {dx},{dy}: width {}", to.width);
                assert!(to.height >= 20.0, "{handle:?} {dx},{dy}: height {}", to.height);
            }
        }
    }
}

#[test]
fn resize_completion_reports_start_and_end() {
    let viewport = ViewportContext::new(1, 1.0, LETTER);
    let mut engine = InteractionEngine::default();
    let start = PointBounds::new(10.0, 10.0, 50.0, 50.0);
    let target = field(1, start);
    engine.begin_resize(&target, Handle::Right, Point::new(60.0, 35.0), &viewport);
    let outcome = engine.complete(Point::new(90.0, 0.0), &viewport, CoordinateSpace::Library);
    assert_eq!(
        outcome,
        Some(GestureOutcome::Resized {
            field: target.id(),
            from: start,
            to: PointBounds::new(10.0, 10.0, 80.0, 50.0),
        })
    );
}

#[test]
fn cancel_returns_the_start_geometry() {
    let viewport = ViewportContext::new(1, 1.0, LETTER);
    let mut engine = InteractionEngine::default();
    let target = field(1, PointBounds::new(10.0, 20.0, 50.0, 50.0));
    engine.begin_drag(&target, Point::new(15.0, 25.0), &viewport);
    engine.update(Point::new(99.0, 99.0), &viewport, CoordinateSpace::Library);

    let state = engine.cancel();
    assert!(matches!(
        state,
        InteractionState::Dragging { start, .. } if start == FieldPosition::new(10.0, 20.0)
    ));
    assert!(!engine.is_active());
    assert_eq!(engine.cancel(), InteractionState::Idle);
}

#[test]
fn one_gesture_at_a_time() {
    let viewport = ViewportContext::new(1, 1.0, LETTER);
    let mut engine = InteractionEngine::default();
    let target = field(1, PointBounds::new(0.0, 0.0, 50.0, 50.0));
    assert!(engine.begin_draw(Point::ORIGIN, &viewport));
    assert!(!engine.begin_drag(&target, Point::ORIGIN, &viewport));
    assert!(!engine.begin_resize(&target, Handle::Top, Point::ORIGIN, &viewport));
    assert!(matches!(engine.state(), InteractionState::Drawing { .. }));
}

#[test]
fn unusable_viewport_starts_nothing() {
    let broken = ViewportContext::new(1, 0.0, LETTER);
    let mut engine = InteractionEngine::default();
    assert!(!engine.begin_draw(Point::ORIGIN, &broken));
    assert!(!engine.is_active());

    let viewport = ViewportContext::new(1, 1.0, LETTER);
    engine.begin_draw(Point::ORIGIN, &viewport);
    assert_eq!(
        engine.update(Point::new(5.0, 5.0), &broken, CoordinateSpace::Library),
        None
    );
    // The draw is dropped, not committed with garbage geometry.
    assert_eq!(
        engine.complete(Point::new(5.0, 5.0), &broken, CoordinateSpace::Library),
        None
    );
    assert!(!engine.is_active());
}

#[test]
fn cursor_hints() {
    let viewport = ViewportContext::new(1, 1.0, LETTER);
    let space = CoordinateSpace::Library;
    let fields = [
        field(1, PointBounds::new(100.0, 100.0, 100.0, 50.0)),
        field(2, PointBounds::new(300.0, 100.0, 100.0, 50.0)),
    ];
    let selected = Some(FieldId::from_raw(1));
    let engine = InteractionEngine::default();
    let hint = |x, y| engine.cursor_hint(Point::new(x, y), &fields, selected, &viewport, space);

    assert_eq!(hint(10.0, 10.0), CursorHint::Default);
    assert_eq!(hint(150.0, 125.0), CursorHint::Move);
    assert_eq!(hint(350.0, 125.0), CursorHint::Pointer);
    assert_eq!(hint(100.0, 100.0), CursorHint::NwseResize);
    assert_eq!(hint(200.0, 100.0), CursorHint::NeswResize);
    assert_eq!(hint(150.0, 150.0), CursorHint::NsResize);
    assert_eq!(hint(200.0, 125.0), CursorHint::EwResize);
    // Handles only belong to the selected field.
    assert_eq!(hint(300.0, 100.0), CursorHint::Pointer);
    assert_eq!(CursorHint::NeswResize.as_css(), "nesw-resize");
}

#[test]
fn config_keys_are_optional() {
    let config: InteractionConfig =
        serde_json::from_str(r#"{ "snapToGrid": true, "gridSize": 5 }"#).unwrap();
    assert!(config.snap_to_grid);
    assert_eq!(config.grid_size, 5.0);
    assert_eq!(config.min_size, 20.0);
    assert_eq!(config.handle_hit_radius(), 8.0);
    assert!(!config.pin_opposite_edge);

    let config: InteractionConfig =
        serde_json::from_str(r#"{ "pinOppositeEdge": true }"#).unwrap();
    assert!(config.pin_opposite_edge);

    let config: InteractionConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, InteractionConfig::default());
}
