// Copyright 2025 the Fieldplace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fieldplace Store: the placed-field list and every way it changes.
//!
//! [`FieldStore`] exclusively owns the fields of one editing session. Each
//! edit is either recorded as a [`FieldCommand`] in an undo history or applied
//! directly (for live gesture feedback). After every change the store
//! publishes a [`FieldsSnapshot`] to its subscribers.
//!
//! Positions are stored in document points with `top` in the session's
//! [`CoordinateSpace`](fieldplace_coords::CoordinateSpace). Switching the
//! convention remaps every stored `top` so fields keep their place on the page.
//!
//! ## Minimal example
//!
//! ```rust
//! use fieldplace_coords::PointBounds;
//! use fieldplace_store::{FieldLocation, FieldRecord, FieldStore, InputType};
//!
//! let mut store = FieldStore::new();
//! let id = store.allocate_id();
//! let location = FieldLocation::new(1, PointBounds::new(72.0, 700.0, 144.0, 24.0));
//! store.add_field(FieldRecord::new(id, "text_field_1", InputType::TextField, location), true);
//!
//! store.move_field(id, 100.0, 650.0, true);
//! assert_eq!(store.undo_description().as_deref(), Some("Move field"));
//!
//! store.undo();
//! assert_eq!(store.field(id).map(|f| f.bounds().left), Some(72.0));
//!
//! store.undo();
//! assert!(store.is_empty());
//! ```
//!
//! ## Exchange format
//!
//! [`FieldStore::export`] produces one flat record per field, and
//! [`FieldStore::import_json`] replaces the list from such records. A
//! malformed payload is reported as an [`ImportError`] and changes nothing.
//!
//! ```rust
//! use fieldplace_store::{FieldStore, ImportError};
//!
//! let mut store = FieldStore::new();
//! let payload = r#"[{
//!     "name": "signature_1",
//!     "inputType": "SIGNATURE",
//!     "contentType": "SIGNATURE",
//!     "locations": { "pageNumber": 2, "left": 300, "top": 120, "width": 180, "height": 40 }
//! }]"#;
//! assert_eq!(store.import_json(payload).unwrap(), 1);
//! assert_eq!(store.fields()[0].recipient_index, 1);
//!
//! let err = store.import_json(r#"{"not": "an array"}"#).unwrap_err();
//! assert!(matches!(err, ImportError::NotAnArray));
//! assert_eq!(store.len(), 1);
//! ```

mod catalog;
mod command;
mod exchange;
mod model;
mod store;

pub use catalog::{FieldTemplate, TemplateCatalog, TemplateGroup, base_name, generate_field_name};
pub use command::{FieldCommand, FieldList};
pub use exchange::{
    FieldExport, ImportError, LocationExport, SessionDocument, export_fields, parse_fields,
    parse_fields_value,
};
pub use model::{
    ContentType, FieldId, FieldLocation, FieldPosition, FieldRecord, FieldUpdate, InputType,
    Recipient,
};
pub use store::{FieldStore, FieldsSnapshot, SubscriptionId};
