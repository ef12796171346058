// Copyright 2025 the Fieldplace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fieldplace Interaction: pointer gestures over placed form fields.
//!
//! [`InteractionEngine`] is a small state machine with one live gesture at a
//! time (see [`InteractionState`]):
//! - **Draw**: spans a new field between the pointer-down and the release.
//! - **Drag**: moves an existing field by the pointer delta.
//! - **Resize**: moves one of the eight [`Handle`]s of the selected field.
//!
//! Pointer positions are pixels on the rendered page (`kurbo::Point`);
//! results are document points ([`PointBounds`](fieldplace_coords::PointBounds)).
//! The engine never touches a store. Each pointer move yields a [`Preview`]
//! to apply without history, and the release yields a [`GestureOutcome`] to
//! commit once.
//!
//! Picking is provided by [`hit_test`] (topmost field wins) and
//! [`handle_at`]; [`InteractionEngine::cursor_hint`] maps the pointer to a
//! [`CursorHint`].
//!
//! ## Minimal example
//!
//! ```rust
//! use fieldplace_coords::{CoordinateSpace, PointBounds, ViewportContext};
//! use fieldplace_interaction::{GestureOutcome, InteractionConfig, InteractionEngine};
//! use kurbo::Point;
//!
//! let viewport = ViewportContext::new(1, 1.5, 792.0);
//! let mut engine = InteractionEngine::new(InteractionConfig::default());
//!
//! assert!(engine.begin_draw(Point::new(100.0, 100.0), &viewport));
//! let outcome = engine.complete(Point::new(300.0, 250.0), &viewport, CoordinateSpace::Library);
//!
//! let Some(GestureOutcome::Drawn { page_number, bounds }) = outcome else {
//!     panic!("expected a drawn field");
//! };
//! assert_eq!(page_number, 1);
//! assert!((bounds.left - 66.667).abs() < 1e-3);
//! assert!((bounds.top - 66.667).abs() < 1e-3);
//! assert!((bounds.width - 133.333).abs() < 1e-3);
//! assert!((bounds.height - 100.0).abs() < 1e-9);
//! assert!(!engine.is_active());
//! ```

mod config;
mod cursor;
mod engine;
mod handle;
mod hit;

pub use config::InteractionConfig;
pub use cursor::CursorHint;
pub use engine::{
    GestureOutcome, InteractionEngine, InteractionState, Preview, draw_bounds, drag_position,
    resize_bounds,
};
pub use handle::{Handle, handle_at};
pub use hit::{field_canvas_rect, hit_test};
