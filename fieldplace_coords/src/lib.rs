// Copyright 2025 the Fieldplace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fieldplace Coords: pixel/point and document-origin conversions.
//!
//! A rendered document page lives in two unit systems at once:
//! - **Pixel space**: what the pointer reports. Origin at the top-left of the
//!   rendered canvas, Y grows downward.
//! - **Point space**: what the document stores. `1 point = scale pixels`, and the
//!   vertical origin depends on the document's [`CoordinateSpace`]:
//!   [`CoordinateSpace::Library`] is top-left/Y-down, while
//!   [`CoordinateSpace::Transient`] is bottom-left/Y-up.
//!
//! This crate provides the pure conversion functions between the two, plus the
//! small value types they operate on:
//! - [`ViewportContext`]: the per-page `scale` and page height supplied by
//!   whatever renders the page. It is always passed explicitly; nothing here
//!   caches it.
//! - [`PointBounds`]: a field rectangle in document points, with `top` encoded
//!   in the document's own convention.
//!
//! It does **not** render anything, and it does not own any field list.
//!
//! ## Minimal example
//!
//! ```rust
//! use fieldplace_coords::{CoordinateSpace, ViewportContext, y_to_document, document_top_to_canvas_y};
//!
//! // Page 1 of a US Letter document rendered at 1.5 pixels per point.
//! let viewport = ViewportContext::new(1, 1.5, 792.0);
//!
//! // A pointer at pixel y = 150 is 100 points from the top of the page...
//! let top = y_to_document(150.0, 0.0, &viewport, CoordinateSpace::Library);
//! assert!((top - 100.0).abs() < 1e-9);
//!
//! // ...and 692 points from the bottom.
//! let top = y_to_document(150.0, 0.0, &viewport, CoordinateSpace::Transient);
//! assert!((top - 692.0).abs() < 1e-9);
//!
//! // Converting back yields the original pixel row in both conventions.
//! let y = document_top_to_canvas_y(top, &viewport, CoordinateSpace::Transient);
//! assert!((y - 150.0).abs() < 1e-9);
//! ```
//!
//! ## Field rectangles
//!
//! [`bounds_to_canvas_rect`] and [`canvas_rect_to_bounds`] move whole field
//! rectangles between the two spaces. `top` always names the field's *top
//! edge*: in the bottom-origin convention that is the distance from the page
//! bottom up to the top edge.
//!
//! ```rust
//! use kurbo::Rect;
//! use fieldplace_coords::{bounds_to_canvas_rect, canvas_rect_to_bounds, CoordinateSpace, ViewportContext};
//!
//! let viewport = ViewportContext::new(1, 2.0, 792.0);
//! let drawn = Rect::new(20.0, 40.0, 120.0, 100.0);
//!
//! let bounds = canvas_rect_to_bounds(drawn, &viewport, CoordinateSpace::Transient);
//! assert_eq!(bounds.left, 10.0);
//! assert_eq!(bounds.top, 772.0);
//! assert_eq!(bounds.width, 50.0);
//! assert_eq!(bounds.height, 30.0);
//!
//! let back = bounds_to_canvas_rect(&bounds, &viewport, CoordinateSpace::Transient);
//! assert_eq!(back, drawn);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod space;
mod translate;
mod viewport;

pub use bounds::PointBounds;
pub use space::CoordinateSpace;
pub use translate::{
    bounds_to_canvas_rect, canvas_rect_to_bounds, document_top_to_canvas_y, pixels_to_points,
    points_to_pixels, remap_top, snap, y_multiplier, y_to_document,
};
pub use viewport::ViewportContext;
