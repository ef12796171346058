// Copyright 2025 the Fieldplace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Field picking in pixel space.

use fieldplace_coords::{CoordinateSpace, ViewportContext, bounds_to_canvas_rect};
use fieldplace_store::{FieldId, FieldRecord};
use kurbo::{Point, Rect};

/// Pixel rectangle `field` occupies on the rendered page.
#[must_use]
pub fn field_canvas_rect(
    field: &FieldRecord,
    viewport: &ViewportContext,
    space: CoordinateSpace,
) -> Rect {
    bounds_to_canvas_rect(&field.bounds(), viewport, space)
}

/// Edges count as inside.
fn contains(rect: Rect, point: Point) -> bool {
    let rect = rect.abs();
    (rect.x0..=rect.x1).contains(&point.x) && (rect.y0..=rect.y1).contains(&point.y)
}

/// Returns the topmost field on the viewport's page under `point`.
///
/// Later fields are drawn over earlier ones, so `fields` is searched from
/// the end.
#[must_use]
pub fn hit_test(
    fields: &[FieldRecord],
    point: Point,
    viewport: &ViewportContext,
    space: CoordinateSpace,
) -> Option<FieldId> {
    fields
        .iter()
        .rev()
        .filter(|f| f.page_number() == viewport.page_number())
        .find(|f| contains(field_canvas_rect(f, viewport, space), point))
        .map(FieldRecord::id)
}

#[cfg(test)]
mod tests {
    use fieldplace_coords::{CoordinateSpace, PointBounds, ViewportContext};
    use fieldplace_store::{FieldId, FieldLocation, FieldRecord, InputType};
    use kurbo::Point;

    use super::hit_test;

    fn field(raw: u64, page: u32, bounds: PointBounds) -> FieldRecord {
        FieldRecord::new(
            FieldId::from_raw(raw),
            "f",
            InputType::TextField,
            FieldLocation::new(page, bounds),
        )
    }

    #[test]
    fn edges_are_inclusive() {
        let vp = ViewportContext::new(1, 2.0, 792.0);
        let fields = [field(1, 1, PointBounds::new(10.0, 10.0, 20.0, 20.0))];
        let space = CoordinateSpace::Library;
        assert_eq!(hit_test(&fields, Point::new(20.0, 20.0), &vp, space), Some(FieldId::from_raw(1)));
        assert_eq!(hit_test(&fields, Point::new(60.0, 60.0), &vp, space), Some(FieldId::from_raw(1)));
        assert_eq!(hit_test(&fields, Point::new(60.1, 60.0), &vp, space), None);
    }

    #[test]
    fn other_pages_are_ignored() {
        let vp = ViewportContext::new(2, 1.0, 792.0);
        let fields = [field(1, 1, PointBounds::new(0.0, 0.0, 100.0, 100.0))];
        assert_eq!(
            hit_test(&fields, Point::new(50.0, 50.0), &vp, CoordinateSpace::Library),
            None
        );
    }

    #[test]
    fn bottom_origin_fields_hit_where_drawn() {
        let vp = ViewportContext::new(1, 1.0, 792.0);
        // Top edge 700 points above the page bottom: pixel rows 92..=122.
        let fields = [field(1, 1, PointBounds::new(0.0, 700.0, 50.0, 30.0))];
        let space = CoordinateSpace::Transient;
        assert!(hit_test(&fields, Point::new(10.0, 100.0), &vp, space).is_some());
        assert!(hit_test(&fields, Point::new(10.0, 80.0), &vp, space).is_none());
    }
}
