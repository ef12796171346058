// Copyright 2025 the Fieldplace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ordered field list and the reversible commands that edit it.

use std::borrow::Cow;

use fieldplace_coords::PointBounds;
use fieldplace_history::{Command, Direction};

use crate::model::{FieldId, FieldPosition, FieldRecord};

/// Fields in insertion order; the last field is drawn on top.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldList {
    fields: Vec<FieldRecord>,
}

impl FieldList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The fields in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[FieldRecord] {
        &self.fields
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if there are no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Index of the field with `id`.
    #[must_use]
    pub fn position(&self, id: FieldId) -> Option<usize> {
        self.fields.iter().position(|f| f.id() == id)
    }

    /// The field with `id`.
    #[must_use]
    pub fn get(&self, id: FieldId) -> Option<&FieldRecord> {
        self.fields.iter().find(|f| f.id() == id)
    }

    /// Returns `true` if a field with `id` exists.
    #[must_use]
    pub fn contains(&self, id: FieldId) -> bool {
        self.position(id).is_some()
    }

    fn get_mut(&mut self, id: FieldId) -> Option<&mut FieldRecord> {
        self.fields.iter_mut().find(|f| f.id() == id)
    }

    /// Inserts at `index`, clamped to the end of the list.
    pub(crate) fn insert(&mut self, index: usize, field: FieldRecord) {
        let index = index.min(self.fields.len());
        self.fields.insert(index, field);
    }

    pub(crate) fn remove(&mut self, id: FieldId) -> Option<(usize, FieldRecord)> {
        let index = self.position(id)?;
        Some((index, self.fields.remove(index)))
    }

    /// Replaces the field with the same id as `field`.
    pub(crate) fn replace(&mut self, field: FieldRecord) -> bool {
        match self.get_mut(field.id()) {
            Some(slot) => {
                *slot = field;
                true
            }
            None => false,
        }
    }

    pub(crate) fn set_position(&mut self, id: FieldId, position: FieldPosition) -> bool {
        match self.get_mut(id) {
            Some(field) => {
                field.location.bounds.left = position.left;
                field.location.bounds.top = position.top;
                true
            }
            None => false,
        }
    }

    pub(crate) fn set_bounds(&mut self, id: FieldId, bounds: PointBounds) -> bool {
        match self.get_mut(id) {
            Some(field) => {
                field.location.bounds = bounds;
                true
            }
            None => false,
        }
    }

    pub(crate) fn replace_all(&mut self, fields: Vec<FieldRecord>) {
        self.fields = fields;
    }

    pub(crate) fn clear(&mut self) {
        self.fields.clear();
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, FieldRecord> {
        self.fields.iter_mut()
    }
}

/// A reversible edit of a [`FieldList`].
///
/// Every variant carries the state on both sides of the edit, so applying it
/// in [`Direction::Reverse`] never consults anything but the command itself.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldCommand {
    /// Inserts `field` at `index`.
    AddField {
        /// Position in the list.
        index: usize,
        /// The new field.
        field: FieldRecord,
    },
    /// Removes `field`, which sat at `index`.
    DeleteField {
        /// Position the field occupied.
        index: usize,
        /// The removed field.
        field: FieldRecord,
    },
    /// Replaces a field's metadata and location.
    UpdateField {
        /// Field as it was.
        before: FieldRecord,
        /// Field as it becomes.
        after: FieldRecord,
    },
    /// Moves a field without resizing it.
    MoveField {
        /// Target field.
        id: FieldId,
        /// Position before the move.
        from: FieldPosition,
        /// Position after the move.
        to: FieldPosition,
    },
    /// Changes a field's rectangle.
    ResizeField {
        /// Target field.
        id: FieldId,
        /// Rectangle before the resize.
        from: PointBounds,
        /// Rectangle after the resize.
        to: PointBounds,
    },
}

impl FieldCommand {
    /// The field this command edits.
    #[must_use]
    pub fn field_id(&self) -> FieldId {
        match self {
            Self::AddField { field, .. } | Self::DeleteField { field, .. } => field.id(),
            Self::UpdateField { after, .. } => after.id(),
            Self::MoveField { id, .. } | Self::ResizeField { id, .. } => *id,
        }
    }

    /// Returns `true` if applying this command forward to `list` would change
    /// something: the field exists (or, for an add, does not yet exist).
    #[must_use]
    pub fn applies_to(&self, list: &FieldList) -> bool {
        let exists = list.contains(self.field_id());
        match self {
            Self::AddField { .. } => !exists,
            _ => exists,
        }
    }
}

impl Command for FieldCommand {
    type Target = FieldList;

    fn apply(&self, target: &mut FieldList, direction: Direction) {
        match (self, direction) {
            (Self::AddField { index, field }, Direction::Forward)
            | (Self::DeleteField { index, field }, Direction::Reverse) => {
                target.insert(*index, field.clone());
            }
            (Self::AddField { field, .. }, Direction::Reverse)
            | (Self::DeleteField { field, .. }, Direction::Forward) => {
                target.remove(field.id());
            }
            (Self::UpdateField { before, after }, _) => {
                target.replace(direction.pick(after, before).clone());
            }
            (Self::MoveField { id, from, to }, _) => {
                target.set_position(*id, *direction.pick(to, from));
            }
            (Self::ResizeField { id, from, to }, _) => {
                target.set_bounds(*id, *direction.pick(to, from));
            }
        }
    }

    fn describe(&self) -> Cow<'_, str> {
        match self {
            Self::AddField { field, .. } => Cow::Owned(format!("Add field: {}", field.name)),
            Self::DeleteField { field, .. } => Cow::Owned(format!("Delete field: {}", field.name)),
            Self::UpdateField { after, .. } => Cow::Owned(format!("Update field: {}", after.name)),
            Self::MoveField { .. } => Cow::Borrowed("Move field"),
            Self::ResizeField { .. } => Cow::Borrowed("Resize field"),
        }
    }
}

#[cfg(test)]
mod tests {
    use fieldplace_coords::PointBounds;
    use fieldplace_history::{Command, Direction};

    use super::{FieldCommand, FieldList};
    use crate::model::{FieldId, FieldLocation, FieldPosition, FieldRecord, InputType};

    fn field(raw: u64, name: &str) -> FieldRecord {
        FieldRecord::new(
            FieldId::from_raw(raw),
            name,
            InputType::TextField,
            FieldLocation::new(1, PointBounds::new(0.0, 0.0, 50.0, 20.0)),
        )
    }

    fn list(fields: &[FieldRecord]) -> FieldList {
        let mut list = FieldList::new();
        for f in fields {
            list.insert(usize::MAX, f.clone());
        }
        list
    }

    #[test]
    fn delete_reverse_restores_index() {
        let (a, b, c) = (field(1, "a"), field(2, "b"), field(3, "c"));
        let mut target = list(&[a, b.clone(), c]);
        let original = target.clone();
        let cmd = FieldCommand::DeleteField { index: 1, field: b };
        cmd.apply(&mut target, Direction::Forward);
        assert_eq!(target.len(), 2);
        cmd.apply(&mut target, Direction::Reverse);
        assert_eq!(target, original);
    }

    #[test]
    fn move_of_missing_field_is_inert() {
        let mut target = list(&[field(1, "a")]);
        let original = target.clone();
        let cmd = FieldCommand::MoveField {
            id: FieldId::from_raw(9),
            from: FieldPosition::new(0.0, 0.0),
            to: FieldPosition::new(5.0, 5.0),
        };
        assert!(!cmd.applies_to(&target));
        cmd.apply(&mut target, Direction::Forward);
        assert_eq!(target, original);
    }

    #[test]
    fn descriptions() {
        let a = field(1, "text_field_1");
        assert_eq!(
            FieldCommand::AddField { index: 0, field: a.clone() }.describe(),
            "Add field: text_field_1"
        );
        assert_eq!(
            FieldCommand::DeleteField { index: 0, field: a.clone() }.describe(),
            "Delete field: text_field_1"
        );
        let mut renamed = a.clone();
        renamed.name = "email".into();
        assert_eq!(
            FieldCommand::UpdateField { before: a, after: renamed }.describe(),
            "Update field: email"
        );
        assert_eq!(
            FieldCommand::ResizeField {
                id: FieldId::from_raw(1),
                from: PointBounds::default(),
                to: PointBounds::default(),
            }
            .describe(),
            "Resize field"
        );
    }
}
