// Copyright 2025 the Fieldplace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure conversion functions between pixel space and document points.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`
use kurbo::Rect;

use crate::{CoordinateSpace, PointBounds, ViewportContext};

/// Converts a pixel length into document points.
#[must_use]
#[inline]
pub fn pixels_to_points(pixels: f64, scale: f64) -> f64 {
    pixels / scale
}

/// Converts a document-point length into pixels.
///
/// Inverse of [`pixels_to_points`].
#[must_use]
#[inline]
pub fn points_to_pixels(points: f64, scale: f64) -> f64 {
    points * scale
}

/// Converts a pixel row into a document `top` value.
///
/// `_pixel_height` is the height of the rectangle whose top edge is at
/// `pixel_y`. It does not take part in the conversion: the bottom-origin
/// encoding is anchored on the rectangle's top edge, so
/// [`document_top_to_canvas_y`] is an exact inverse.
#[must_use]
pub fn y_to_document(
    pixel_y: f64,
    _pixel_height: f64,
    viewport: &ViewportContext,
    space: CoordinateSpace,
) -> f64 {
    let y_points = pixels_to_points(pixel_y, viewport.scale());
    match space {
        CoordinateSpace::Library => y_points,
        CoordinateSpace::Transient => viewport.page_height() - y_points,
    }
}

/// Converts a document `top` value into a pixel row on the rendered canvas.
#[must_use]
pub fn document_top_to_canvas_y(
    top: f64,
    viewport: &ViewportContext,
    space: CoordinateSpace,
) -> f64 {
    let top_from_page_top = match space {
        CoordinateSpace::Library => top,
        CoordinateSpace::Transient => viewport.page_height() - top,
    };
    points_to_pixels(top_from_page_top, viewport.scale())
}

/// Sign applied to a pixel-space vertical delta to obtain a change of `top`.
///
/// See [`CoordinateSpace::y_multiplier`].
#[must_use]
#[inline]
pub fn y_multiplier(space: CoordinateSpace) -> f64 {
    space.y_multiplier()
}

/// Rounds `value` to the nearest multiple of `grid_size` when `enabled`.
///
/// A non-positive or non-finite grid size disables snapping.
#[must_use]
pub fn snap(value: f64, grid_size: f64, enabled: bool) -> f64 {
    if !enabled || !(grid_size.is_finite() && grid_size > 0.0) {
        return value;
    }
    (value / grid_size).round() * grid_size
}

/// Converts field bounds into the pixel rectangle they occupy on the canvas.
#[must_use]
pub fn bounds_to_canvas_rect(
    bounds: &PointBounds,
    viewport: &ViewportContext,
    space: CoordinateSpace,
) -> Rect {
    let scale = viewport.scale();
    let x0 = points_to_pixels(bounds.left, scale);
    let y0 = document_top_to_canvas_y(bounds.top, viewport, space);
    Rect::new(
        x0,
        y0,
        x0 + points_to_pixels(bounds.width, scale),
        y0 + points_to_pixels(bounds.height, scale),
    )
}

/// Converts a pixel rectangle into field bounds.
///
/// The rectangle is normalized first, so it may be given with any two
/// opposite corners.
#[must_use]
pub fn canvas_rect_to_bounds(
    rect: Rect,
    viewport: &ViewportContext,
    space: CoordinateSpace,
) -> PointBounds {
    let rect = rect.abs();
    let scale = viewport.scale();
    PointBounds {
        left: pixels_to_points(rect.x0, scale),
        top: y_to_document(rect.y0, rect.height(), viewport, space),
        width: pixels_to_points(rect.width(), scale),
        height: pixels_to_points(rect.height(), scale),
    }
}

/// Re-encodes a stored `top` from one convention into another, keeping the
/// field's visual placement on a page `page_height` points tall.
///
/// The value is first decoded into a distance from the page top under `from`
/// and then encoded under `to`.
#[must_use]
pub fn remap_top(top: f64, page_height: f64, from: CoordinateSpace, to: CoordinateSpace) -> f64 {
    if from == to {
        return top;
    }
    let from_page_top = match from {
        CoordinateSpace::Library => top,
        CoordinateSpace::Transient => page_height - top,
    };
    match to {
        CoordinateSpace::Library => from_page_top,
        CoordinateSpace::Transient => page_height - from_page_top,
    }
}
