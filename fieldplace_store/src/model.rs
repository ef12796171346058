// Copyright 2025 the Fieldplace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Field records and the value types they are built from.

use std::fmt;

use fieldplace_coords::PointBounds;
use serde::{Deserialize, Serialize};

/// Opaque identifier of a placed field.
///
/// Identifiers are allocated by [`FieldStore::allocate_id`](crate::FieldStore::allocate_id)
/// and never reused within one store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(u64);

impl FieldId {
    /// Wraps a raw identifier value.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw identifier value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field_{}", self.0)
    }
}

/// The kind of input widget a field renders as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InputType {
    /// Single-line text.
    TextField,
    /// Multi-line text.
    Multiline,
    /// Checkbox.
    Checkbox,
    /// Radio button.
    Radio,
    /// Drop-down list.
    DropDown,
    /// Signature box.
    Signature,
    /// Date entry.
    Date,
    /// Hyperlink.
    Hyperlink,
    /// Image.
    Image,
}

impl InputType {
    /// Exchange spelling, e.g. `TEXT_FIELD`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TextField => "TEXT_FIELD",
            Self::Multiline => "MULTILINE",
            Self::Checkbox => "CHECKBOX",
            Self::Radio => "RADIO",
            Self::DropDown => "DROP_DOWN",
            Self::Signature => "SIGNATURE",
            Self::Date => "DATE",
            Self::Hyperlink => "HYPERLINK",
            Self::Image => "IMAGE",
        }
    }
}

/// What a field's value means to the signing workflow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentType {
    /// Generic data entered by the recipient.
    #[default]
    Data,
    /// Full signature.
    Signature,
    /// Signer initials.
    SignerInitials,
    /// Signer name.
    SignerName,
    /// Signer email address.
    SignerEmail,
    /// Date of signing, filled in automatically.
    SignatureDate,
    /// Signer title.
    SignerTitle,
    /// Signer company.
    SignerCompany,
    /// Image content.
    Image,
    /// QR code.
    QrCode,
    /// Hyperlink target.
    Hyperlink,
}

impl ContentType {
    /// Exchange spelling, e.g. `SIGNER_NAME`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Data => "DATA",
            Self::Signature => "SIGNATURE",
            Self::SignerInitials => "SIGNER_INITIALS",
            Self::SignerName => "SIGNER_NAME",
            Self::SignerEmail => "SIGNER_EMAIL",
            Self::SignatureDate => "SIGNATURE_DATE",
            Self::SignerTitle => "SIGNER_TITLE",
            Self::SignerCompany => "SIGNER_COMPANY",
            Self::Image => "IMAGE",
            Self::QrCode => "QR_CODE",
            Self::Hyperlink => "HYPERLINK",
        }
    }
}

/// Signing party that owns a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Recipient {
    /// Recipient index 1.
    Signer,
    /// Recipient index 2.
    Approver,
    /// Any other recipient index.
    Other(u32),
}

impl Recipient {
    /// Maps a `recipientIndex` to its role.
    #[must_use]
    pub const fn from_index(index: u32) -> Self {
        match index {
            1 => Self::Signer,
            2 => Self::Approver,
            n => Self::Other(n),
        }
    }

    /// The `recipientIndex` of this role.
    #[must_use]
    pub const fn index(self) -> u32 {
        match self {
            Self::Signer => 1,
            Self::Approver => 2,
            Self::Other(n) => n,
        }
    }

    /// Display name: `SIGNER`, `APPROVER`, or `UNKNOWN`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Signer => "SIGNER",
            Self::Approver => "APPROVER",
            Self::Other(_) => "UNKNOWN",
        }
    }
}

/// Where a field sits: a page and a rectangle in document points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldLocation {
    /// 1-based page number.
    pub page_number: u32,
    /// Rectangle on that page, `top` in the document convention.
    #[serde(flatten)]
    pub bounds: PointBounds,
}

impl FieldLocation {
    /// Creates a location on `page_number`.
    #[must_use]
    pub const fn new(page_number: u32, bounds: PointBounds) -> Self {
        Self {
            page_number,
            bounds,
        }
    }
}

/// A stored `(left, top)` pair, used by move commands.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FieldPosition {
    /// Left edge in points.
    pub left: f64,
    /// Top edge in the document convention.
    pub top: f64,
}

impl FieldPosition {
    /// Creates a position.
    #[must_use]
    pub const fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    /// The position of `bounds`.
    #[must_use]
    pub const fn of(bounds: &PointBounds) -> Self {
        Self::new(bounds.left, bounds.top)
    }
}

/// A placed form field.
///
/// All fields except [`FieldRecord::id`] are public; the id is fixed at
/// creation. In the session document the id is not serialized: importing a
/// session always assigns fresh ids.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRecord {
    #[serde(skip)]
    id: FieldId,
    /// Human-readable name.
    pub name: String,
    /// Widget kind.
    pub input_type: InputType,
    /// Meaning of the value; `None` means generic data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,
    /// Whether the recipient must fill the field.
    #[serde(default)]
    pub required: bool,
    /// Whether the field is filled automatically and locked.
    #[serde(default)]
    pub read_only: bool,
    /// Validation rule name.
    #[serde(default)]
    pub validation: String,
    /// Parameter of the validation rule, e.g. a date pattern.
    #[serde(default)]
    pub validation_data: String,
    /// Owning signing party.
    #[serde(default = "default_recipient_index")]
    pub recipient_index: u32,
    /// Page and rectangle.
    #[serde(rename = "locations")]
    pub location: FieldLocation,
}

pub(crate) const fn default_recipient_index() -> u32 {
    1
}

impl FieldRecord {
    /// Creates a field with default metadata: generic content, not required,
    /// editable, no validation, owned by the signer.
    #[must_use]
    pub fn new(
        id: FieldId,
        name: impl Into<String>,
        input_type: InputType,
        location: FieldLocation,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            input_type,
            content_type: None,
            required: false,
            read_only: false,
            validation: String::new(),
            validation_data: String::new(),
            recipient_index: default_recipient_index(),
            location,
        }
    }

    /// The field's identifier.
    #[must_use]
    pub fn id(&self) -> FieldId {
        self.id
    }

    /// Returns the same record under a different id.
    #[must_use]
    pub fn with_id(mut self, id: FieldId) -> Self {
        self.id = id;
        self
    }

    /// Content type, with a missing value read as [`ContentType::Data`].
    #[must_use]
    pub fn effective_content_type(&self) -> ContentType {
        self.content_type.unwrap_or_default()
    }

    /// 1-based page number.
    #[must_use]
    pub fn page_number(&self) -> u32 {
        self.location.page_number
    }

    /// Rectangle in document points.
    #[must_use]
    pub fn bounds(&self) -> PointBounds {
        self.location.bounds
    }

    /// Owning signing party.
    #[must_use]
    pub fn recipient(&self) -> Recipient {
        Recipient::from_index(self.recipient_index)
    }
}

/// A partial update of a [`FieldRecord`].
///
/// `None` members leave the corresponding value alone. The id cannot be
/// changed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldUpdate {
    /// New name.
    pub name: Option<String>,
    /// New input type.
    pub input_type: Option<InputType>,
    /// New content type; `Some(None)` clears it.
    pub content_type: Option<Option<ContentType>>,
    /// New required flag.
    pub required: Option<bool>,
    /// New read-only flag.
    pub read_only: Option<bool>,
    /// New validation rule.
    pub validation: Option<String>,
    /// New validation parameter.
    pub validation_data: Option<String>,
    /// New recipient index.
    pub recipient_index: Option<u32>,
    /// New location.
    pub location: Option<FieldLocation>,
}

impl FieldUpdate {
    /// Returns `true` if the update changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns `record` with this update applied.
    #[must_use]
    pub fn applied_to(&self, record: &FieldRecord) -> FieldRecord {
        let mut out = record.clone();
        if let Some(name) = &self.name {
            out.name.clone_from(name);
        }
        if let Some(input_type) = self.input_type {
            out.input_type = input_type;
        }
        if let Some(content_type) = self.content_type {
            out.content_type = content_type;
        }
        if let Some(required) = self.required {
            out.required = required;
        }
        if let Some(read_only) = self.read_only {
            out.read_only = read_only;
        }
        if let Some(validation) = &self.validation {
            out.validation.clone_from(validation);
        }
        if let Some(validation_data) = &self.validation_data {
            out.validation_data.clone_from(validation_data);
        }
        if let Some(recipient_index) = self.recipient_index {
            out.recipient_index = recipient_index;
        }
        if let Some(location) = self.location {
            out.location = location;
        }
        out
    }
}
