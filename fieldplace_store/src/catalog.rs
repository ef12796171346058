// Copyright 2025 the Fieldplace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Field templates offered for drawing, and automatic field naming.

use crate::model::{ContentType, FieldId, FieldLocation, FieldRecord, InputType};

/// Default metadata stamped onto a newly drawn field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldTemplate {
    /// Display label, e.g. `Signer Email`.
    pub label: String,
    /// Widget kind.
    pub input_type: InputType,
    /// Meaning of the value.
    pub content_type: ContentType,
    /// Validation rule name.
    pub validation: String,
    /// Validation parameter.
    pub validation_data: String,
    /// Whether fields made from this template are read-only.
    pub read_only: bool,
}

impl FieldTemplate {
    /// Creates a template with no validation that is not read-only.
    #[must_use]
    pub fn new(label: impl Into<String>, input_type: InputType, content_type: ContentType) -> Self {
        Self {
            label: label.into(),
            input_type,
            content_type,
            validation: String::new(),
            validation_data: String::new(),
            read_only: false,
        }
    }

    /// Sets the validation rule and its parameter.
    #[must_use]
    pub fn with_validation(
        mut self,
        validation: impl Into<String>,
        validation_data: impl Into<String>,
    ) -> Self {
        self.validation = validation.into();
        self.validation_data = validation_data.into();
        self
    }

    /// Marks the template read-only.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Lookup key: `<label>_<INPUT>_<CONTENT>`, lower-cased.
    #[must_use]
    pub fn key(&self) -> String {
        format!(
            "{}_{}_{}",
            self.label,
            self.input_type.as_str(),
            self.content_type.as_str()
        )
        .to_lowercase()
    }

    /// Creates a field record from this template.
    #[must_use]
    pub fn instantiate(
        &self,
        id: FieldId,
        name: impl Into<String>,
        location: FieldLocation,
        recipient_index: u32,
    ) -> FieldRecord {
        let mut record = FieldRecord::new(id, name, self.input_type, location);
        record.content_type = Some(self.content_type);
        record.validation.clone_from(&self.validation);
        record.validation_data.clone_from(&self.validation_data);
        record.read_only = self.read_only;
        record.recipient_index = recipient_index;
        record
    }
}

/// Menu grouping of templates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TemplateGroup {
    /// Text and multi-line inputs.
    Text,
    /// Signatures and initials.
    Signature,
    /// Date inputs.
    Date,
    /// Everything else.
    Other,
}

impl TemplateGroup {
    /// All groups, in menu order.
    pub const ALL: [Self; 4] = [Self::Text, Self::Signature, Self::Date, Self::Other];

    /// Display label of the group.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Text => "Text Fields",
            Self::Signature => "Signature Fields",
            Self::Date => "Date Fields",
            Self::Other => "Other Fields",
        }
    }

    /// The group a template belongs to.
    #[must_use]
    pub fn of(template: &FieldTemplate) -> Self {
        match template.input_type {
            InputType::TextField | InputType::Multiline => Self::Text,
            InputType::Signature => Self::Signature,
            InputType::Date => Self::Date,
            _ => Self::Other,
        }
    }
}

/// An ordered list of templates; the first is the default selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateCatalog {
    templates: Vec<FieldTemplate>,
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TemplateCatalog {
    /// Creates a catalog from `templates`.
    #[must_use]
    pub fn new(templates: Vec<FieldTemplate>) -> Self {
        Self { templates }
    }

    /// The built-in templates.
    #[must_use]
    pub fn builtin() -> Self {
        use ContentType as C;
        use InputType as I;
        Self::new(vec![
            FieldTemplate::new("Text Field", I::TextField, C::Data),
            FieldTemplate::new("Multiline Text", I::Multiline, C::Data),
            FieldTemplate::new("Signer Name", I::TextField, C::SignerName),
            FieldTemplate::new("Signer Email", I::TextField, C::SignerEmail),
            FieldTemplate::new("Signature", I::Signature, C::Signature),
            FieldTemplate::new("Initials", I::Signature, C::SignerInitials),
            FieldTemplate::new("Date Field", I::Date, C::Data)
                .with_validation("DATE_CUSTOM", "yyyy-MM-dd"),
            FieldTemplate::new("Date-CUSTOM Field", I::Date, C::Data).with_validation("DATE", ""),
            FieldTemplate::new("Signing Date", I::Date, C::SignatureDate).read_only(),
            FieldTemplate::new("Checkbox", I::Checkbox, C::Data),
            FieldTemplate::new("Radio Button", I::Radio, C::Data),
        ])
    }

    /// All templates in order.
    #[must_use]
    pub fn templates(&self) -> &[FieldTemplate] {
        &self.templates
    }

    /// The default selection, if the catalog is not empty.
    #[must_use]
    pub fn default_template(&self) -> Option<&FieldTemplate> {
        self.templates.first()
    }

    /// Looks a template up by [`FieldTemplate::key`].
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FieldTemplate> {
        let key = key.to_lowercase();
        self.templates.iter().find(|t| t.key() == key)
    }

    /// Templates in `group`, in catalog order.
    pub fn group(&self, group: TemplateGroup) -> impl Iterator<Item = &FieldTemplate> + '_ {
        self.templates
            .iter()
            .filter(move |t| TemplateGroup::of(t) == group)
    }
}

/// Semantic base word for a field of the given kind.
#[must_use]
pub fn base_name(input_type: InputType, content_type: ContentType) -> &'static str {
    use ContentType as C;
    use InputType as I;
    match (input_type, content_type) {
        (I::TextField, C::Data) => "text_field",
        (I::TextField, C::SignerName) => "signer_name",
        (I::TextField, C::SignerEmail) => "signer_email",
        (I::Multiline, C::Data) => "multiline_text",
        (I::Signature, C::Signature) => "signature",
        (I::Signature, C::SignerInitials) => "initials",
        (I::Date, C::Data) => "date_field",
        (I::Date, C::SignatureDate) => "date_signed",
        (I::Checkbox, C::Data) => "checkbox",
        (I::Radio, C::Data) => "radio_button",
        _ => "field",
    }
}

/// Generates `<base>_<n>`, where `n` is one more than the number of
/// `existing` fields with the same input and content type.
#[must_use]
pub fn generate_field_name(
    input_type: InputType,
    content_type: ContentType,
    existing: &[FieldRecord],
) -> String {
    let count = existing
        .iter()
        .filter(|f| f.input_type == input_type && f.effective_content_type() == content_type)
        .count();
    format!("{}_{}", base_name(input_type, content_type), count + 1)
}
