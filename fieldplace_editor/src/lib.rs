// Copyright 2025 the Fieldplace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fieldplace Editor: a headless session for placing form fields on pages.
//!
//! [`Editor`] ties the pieces together:
//! - a [`FieldStore`](fieldplace_store::FieldStore) holding the fields and
//!   their undo history,
//! - an [`InteractionEngine`](fieldplace_interaction::InteractionEngine)
//!   running draw, drag and resize gestures,
//! - the selection, draw mode, active field template and recipient.
//!
//! It does not render anything. The embedding surface forwards pointer
//! events in page pixels along with the current page's
//! [`ViewportContext`](fieldplace_coords::ViewportContext), forwards key
//! presses as [`Editor::cancel`], [`Editor::delete_selected`],
//! [`Editor::undo`] and [`Editor::redo`], and repaints from
//! [`FieldStore::subscribe`](fieldplace_store::FieldStore::subscribe).
//!
//! ## Minimal example
//!
//! ```rust
//! use fieldplace_coords::ViewportContext;
//! use fieldplace_editor::{Editor, EditorConfig, GestureSummary};
//! use kurbo::Point;
//!
//! let viewport = ViewportContext::from_page_box(1, 1.5, [0.0, 0.0, 612.0, 792.0]);
//! let mut editor = Editor::new(EditorConfig::default());
//!
//! // Draw a text field.
//! editor.set_draw_mode(true);
//! editor.pointer_down(Point::new(100.0, 100.0), Some(&viewport));
//! editor.pointer_move(Point::new(300.0, 250.0), Some(&viewport));
//! let Some(GestureSummary::Created(id)) = editor.pointer_up(Point::new(300.0, 250.0), Some(&viewport)) else {
//!     panic!("expected a new field");
//! };
//! assert_eq!(editor.store().field(id).map(|f| f.name.as_str()), Some("text_field_1"));
//! assert_eq!(editor.selected(), Some(id));
//!
//! // Drag it 30 pixels to the right.
//! editor.set_draw_mode(false);
//! editor.pointer_down(Point::new(150.0, 150.0), Some(&viewport));
//! editor.pointer_move(Point::new(180.0, 150.0), Some(&viewport));
//! assert_eq!(
//!     editor.pointer_up(Point::new(180.0, 150.0), Some(&viewport)),
//!     Some(GestureSummary::Moved(id))
//! );
//!
//! // One undo step per gesture.
//! editor.undo();
//! assert!((editor.store().fields()[0].bounds().left - 66.667).abs() < 1e-3);
//! editor.undo();
//! assert!(editor.store().is_empty());
//! ```

mod config;
mod editor;

pub use config::EditorConfig;
pub use editor::{Editor, GestureSummary};
