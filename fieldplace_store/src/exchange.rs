// Copyright 2025 the Fieldplace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The flat exchange format and the session document.
//!
//! Each exported field carries exactly one location, wrapped in a
//! one-element `locations` array. Import accepts the array or a bare object
//! and reads only the first location.

use fieldplace_coords::{CoordinateSpace, PointBounds};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::model::{
    ContentType, FieldId, FieldLocation, FieldRecord, InputType, default_recipient_index,
};

/// Why an import payload was rejected.
///
/// Imports are all-or-nothing: any error leaves the store untouched.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// The payload is not JSON, or a record does not match the format.
    #[error("invalid field payload: {0}")]
    Json(#[from] serde_json::Error),
    /// The payload is valid JSON but not an array of records.
    #[error("field payload must be a JSON array")]
    NotAnArray,
    /// A record has an empty `locations` array.
    #[error("field record {index} has no location")]
    MissingLocation {
        /// Position of the record in the payload.
        index: usize,
    },
    /// A record's first location cannot be placed on a page.
    #[error("field record {index} has an invalid location: {reason}")]
    InvalidLocation {
        /// Position of the record in the payload.
        index: usize,
        /// What is wrong with it.
        reason: &'static str,
    },
}

/// One location of an exported field.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationExport {
    /// 1-based page number.
    pub page_number: u32,
    /// Left edge in points.
    pub left: f64,
    /// Top edge in the document convention.
    pub top: f64,
    /// Width in points.
    pub width: f64,
    /// Height in points.
    pub height: f64,
}

impl From<FieldLocation> for LocationExport {
    fn from(location: FieldLocation) -> Self {
        let b = location.bounds;
        Self {
            page_number: location.page_number,
            left: b.left,
            top: b.top,
            width: b.width,
            height: b.height,
        }
    }
}

impl LocationExport {
    /// Checks the location and converts it, or explains why it is unusable.
    pub fn to_location(&self) -> Result<FieldLocation, &'static str> {
        validate(
            self.page_number,
            PointBounds::new(self.left, self.top, self.width, self.height),
        )
    }
}

fn validate(page_number: u32, bounds: PointBounds) -> Result<FieldLocation, &'static str> {
    if page_number < 1 {
        return Err("page number must be at least 1");
    }
    if !(bounds.left.is_finite() && bounds.top.is_finite()) {
        return Err("position must be finite");
    }
    if !bounds.is_valid() {
        return Err("width and height must be positive");
    }
    Ok(FieldLocation::new(page_number, bounds))
}

/// A field in the flat exchange format.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldExport {
    /// Field name.
    pub name: String,
    /// Widget kind.
    pub input_type: InputType,
    /// Meaning of the value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,
    /// Whether the field must be filled.
    #[serde(default)]
    pub required: bool,
    /// Validation rule name.
    #[serde(default, deserialize_with = "string_or_null")]
    pub validation: String,
    /// Validation parameter.
    #[serde(default, deserialize_with = "string_or_null")]
    pub validation_data: String,
    /// Read-only flag; missing means editable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    /// Owning signing party.
    #[serde(default = "default_recipient_index")]
    pub recipient_index: u32,
    /// Locations; only the first one is used.
    #[serde(deserialize_with = "one_or_many")]
    pub locations: Vec<LocationExport>,
}

impl From<&FieldRecord> for FieldExport {
    fn from(field: &FieldRecord) -> Self {
        Self {
            name: field.name.clone(),
            input_type: field.input_type,
            content_type: field.content_type,
            required: field.required,
            validation: field.validation.clone(),
            validation_data: field.validation_data.clone(),
            read_only: Some(field.read_only),
            recipient_index: field.recipient_index,
            locations: vec![field.location.into()],
        }
    }
}

impl FieldExport {
    /// Converts to a record with `id`, validating the first location.
    ///
    /// `index` is the record's position in its payload, used in errors.
    pub fn to_record(&self, index: usize, id: FieldId) -> Result<FieldRecord, ImportError> {
        let first = self
            .locations
            .first()
            .ok_or(ImportError::MissingLocation { index })?;
        let location = first
            .to_location()
            .map_err(|reason| ImportError::InvalidLocation { index, reason })?;
        let mut record = FieldRecord::new(id, self.name.clone(), self.input_type, location);
        record.content_type = self.content_type;
        record.required = self.required;
        record.read_only = self.read_only.unwrap_or(false);
        record.validation.clone_from(&self.validation);
        record.validation_data.clone_from(&self.validation_data);
        record.recipient_index = self.recipient_index;
        Ok(record)
    }
}

fn string_or_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn one_or_many<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<LocationExport>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        Many(Vec<LocationExport>),
        One(LocationExport),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::Many(locations) => locations,
        OneOrMany::One(location) => vec![location],
    })
}

/// Exports `fields` in order.
#[must_use]
pub fn export_fields(fields: &[FieldRecord]) -> Vec<FieldExport> {
    fields.iter().map(FieldExport::from).collect()
}

/// Parses an exchange payload.
pub fn parse_fields(json: &str) -> Result<Vec<FieldExport>, ImportError> {
    parse_fields_value(serde_json::from_str(json)?)
}

/// Parses an already-decoded exchange payload.
pub fn parse_fields_value(value: Value) -> Result<Vec<FieldExport>, ImportError> {
    if !value.is_array() {
        return Err(ImportError::NotAnArray);
    }
    Ok(serde_json::from_value(value)?)
}

/// Converts parsed records into field records with ids from `next_id`.
///
/// Fails on the first record whose location is unusable.
pub(crate) fn to_records(
    exports: &[FieldExport],
    mut next_id: impl FnMut() -> FieldId,
) -> Result<Vec<FieldRecord>, ImportError> {
    exports
        .iter()
        .enumerate()
        .map(|(index, export)| export.to_record(index, next_id()))
        .collect()
}

/// A saved editing session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDocument {
    /// Fields in order. Their ids are not stored.
    pub fields: Vec<FieldRecord>,
    /// Convention the stored `top` values use.
    #[serde(default)]
    pub document_type: CoordinateSpace,
    /// Page count of the document, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
}

impl SessionDocument {
    /// Parses a session from JSON.
    pub fn from_json(json: &str) -> Result<Self, ImportError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the session as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Checks every field's location.
    pub fn validate(&self) -> Result<(), ImportError> {
        for (index, field) in self.fields.iter().enumerate() {
            validate(field.page_number(), field.bounds())
                .map_err(|reason| ImportError::InvalidLocation { index, reason })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn export_wraps_one_location() {
        let record = FieldRecord::new(
            FieldId::from_raw(1),
            "checkbox_1",
            InputType::Checkbox,
            FieldLocation::new(3, PointBounds::new(10.0, 700.0, 20.0, 20.0)),
        );
        let value = serde_json::to_value(export_fields(&[record])).unwrap();
        assert_eq!(
            value,
            json!([{
                "name": "checkbox_1",
                "inputType": "CHECKBOX",
                "required": false,
                "validation": "",
                "validationData": "",
                "readOnly": false,
                "recipientIndex": 1,
                "locations": [
                    { "pageNumber": 3, "left": 10.0, "top": 700.0, "width": 20.0, "height": 20.0 }
                ],
            }])
        );
    }

    #[test]
    fn import_fills_defaults() {
        let parsed = parse_fields_value(json!([{
            "name": "n",
            "inputType": "TEXT_FIELD",
            "validation": null,
            "locations": { "pageNumber": 1, "left": 0, "top": 0, "width": 5, "height": 5 },
        }]))
        .unwrap();
        let record = parsed[0].to_record(0, FieldId::from_raw(8)).unwrap();
        assert_eq!(record.recipient_index, 1);
        assert_eq!(record.validation, "");
        assert_eq!(record.validation_data, "");
        assert!(!record.read_only);
        assert!(!record.required);
        assert_eq!(record.id(), FieldId::from_raw(8));
    }

    #[test]
    fn rejects_non_arrays() {
        assert!(matches!(
            parse_fields(r#"{"name": "x"}"#),
            Err(ImportError::NotAnArray)
        ));
        assert!(matches!(parse_fields("not json"), Err(ImportError::Json(_))));
    }

    #[test]
    fn rejects_unusable_locations() {
        let parsed = parse_fields_value(json!([
            { "name": "a", "inputType": "DATE", "locations": [] },
            { "name": "b", "inputType": "DATE",
              "locations": [{ "pageNumber": 0, "left": 0, "top": 0, "width": 5, "height": 5 }] },
            { "name": "c", "inputType": "DATE",
              "locations": [{ "pageNumber": 1, "left": 0, "top": 0, "width": 0, "height": 5 }] },
        ]))
        .unwrap();
        assert!(matches!(
            parsed[0].to_record(0, FieldId::default()),
            Err(ImportError::MissingLocation { index: 0 })
        ));
        assert!(matches!(
            parsed[1].to_record(1, FieldId::default()),
            Err(ImportError::InvalidLocation { index: 1, .. })
        ));
        assert!(matches!(
            parsed[2].to_record(2, FieldId::default()),
            Err(ImportError::InvalidLocation { index: 2, .. })
        ));
    }
}
