// Copyright 2025 the Fieldplace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The field store: owner of the field list, its history and its listeners.

use std::borrow::Cow;
use std::fmt;

use fieldplace_coords::{CoordinateSpace, PointBounds, remap_top};
use fieldplace_history::{Command as _, DEFAULT_HISTORY_LIMIT, Direction, History, HistoryState};
use log::{debug, info, trace, warn};
use serde_json::Value;

use crate::command::{FieldCommand, FieldList};
use crate::exchange::{self, FieldExport, ImportError, SessionDocument};
use crate::model::{FieldId, FieldPosition, FieldRecord, FieldUpdate};

/// What listeners see after every published change.
#[derive(Clone, Copy, Debug)]
pub struct FieldsSnapshot<'a> {
    /// All fields in insertion order.
    pub fields: &'a [FieldRecord],
    /// Undo/redo availability.
    pub history: HistoryState,
    /// Store revision at publish time.
    pub revision: u64,
    /// Active coordinate convention.
    pub coordinate_space: CoordinateSpace,
}

/// Handle returned by [`FieldStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&FieldsSnapshot<'_>)>;

/// Owns the field list and routes edits through an undo history.
///
/// Every mutator takes a `use_history` flag. With history the edit becomes a
/// [`FieldCommand`] and can be undone; without it the edit is applied
/// directly, as live gesture previews do. Edits naming an unknown field are
/// ignored and return `false`.
///
/// After each change the full list is published to every subscriber.
pub struct FieldStore {
    fields: FieldList,
    history: History<FieldCommand>,
    coordinate_space: CoordinateSpace,
    next_id: u64,
    revision: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl fmt::Debug for FieldStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldStore")
            .field("fields", &self.fields)
            .field("history", &self.history.state())
            .field("coordinate_space", &self.coordinate_space)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl Default for FieldStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldStore {
    /// Creates an empty store with the default history limit and the
    /// [`CoordinateSpace::Transient`] convention.
    #[must_use]
    pub fn new() -> Self {
        Self::with_history_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Creates an empty store keeping at most `limit` undo steps.
    #[must_use]
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            fields: FieldList::new(),
            history: History::with_limit(limit),
            coordinate_space: CoordinateSpace::default(),
            next_id: 1,
            revision: 0,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Sets the initial coordinate convention without remapping anything.
    #[must_use]
    pub fn with_coordinate_space(mut self, space: CoordinateSpace) -> Self {
        self.coordinate_space = space;
        self
    }

    // --- reading ---

    /// All fields in insertion order.
    #[must_use]
    pub fn fields(&self) -> &[FieldRecord] {
        self.fields.as_slice()
    }

    /// The field with `id`.
    #[must_use]
    pub fn field(&self, id: FieldId) -> Option<&FieldRecord> {
        self.fields.get(id)
    }

    /// Fields on `page_number`, in insertion order.
    pub fn fields_on_page(&self, page_number: u32) -> impl Iterator<Item = &FieldRecord> + '_ {
        self.fields
            .as_slice()
            .iter()
            .filter(move |f| f.page_number() == page_number)
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the store holds no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Counter bumped on every publish.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Convention the stored `top` values use.
    #[must_use]
    pub fn coordinate_space(&self) -> CoordinateSpace {
        self.coordinate_space
    }

    /// The state listeners would currently see.
    #[must_use]
    pub fn snapshot(&self) -> FieldsSnapshot<'_> {
        FieldsSnapshot {
            fields: self.fields.as_slice(),
            history: self.history.state(),
            revision: self.revision,
            coordinate_space: self.coordinate_space,
        }
    }

    /// Returns a fresh, never-used field id.
    pub fn allocate_id(&mut self) -> FieldId {
        let id = FieldId::from_raw(self.next_id);
        self.next_id += 1;
        id
    }

    // --- editing ---

    /// Appends `field`.
    ///
    /// Returns `false` if a field with the same id already exists.
    pub fn add_field(&mut self, field: FieldRecord, use_history: bool) -> bool {
        self.next_id = self.next_id.max(field.id().get().saturating_add(1));
        let index = self.fields.len();
        self.commit(FieldCommand::AddField { index, field }, use_history)
    }

    /// Removes the field with `id`.
    pub fn delete_field(&mut self, id: FieldId, use_history: bool) -> bool {
        let Some(index) = self.fields.position(id) else {
            return false;
        };
        let field = self.fields.as_slice()[index].clone();
        self.commit(FieldCommand::DeleteField { index, field }, use_history)
    }

    /// Applies a partial update to the field with `id`.
    ///
    /// An update that changes nothing is not recorded and returns `false`.
    pub fn update_field(&mut self, id: FieldId, update: &FieldUpdate, use_history: bool) -> bool {
        let Some(before) = self.fields.get(id) else {
            return false;
        };
        let after = update.applied_to(before);
        if after == *before {
            return false;
        }
        let before = before.clone();
        self.commit(FieldCommand::UpdateField { before, after }, use_history)
    }

    /// Moves the field with `id` so its top-left corner is at `(left, top)`.
    pub fn move_field(&mut self, id: FieldId, left: f64, top: f64, use_history: bool) -> bool {
        let Some(field) = self.fields.get(id) else {
            return false;
        };
        let from = FieldPosition::of(&field.bounds());
        let to = FieldPosition::new(left, top);
        self.commit(FieldCommand::MoveField { id, from, to }, use_history)
    }

    /// Replaces the rectangle of the field with `id`.
    pub fn resize_field(&mut self, id: FieldId, bounds: PointBounds, use_history: bool) -> bool {
        let Some(field) = self.fields.get(id) else {
            return false;
        };
        let from = field.bounds();
        self.commit(
            FieldCommand::ResizeField {
                id,
                from,
                to: bounds,
            },
            use_history,
        )
    }

    /// Routes a caller-built command through history.
    ///
    /// This is how a gesture is committed: its live preview has already
    /// moved the field, and `command` carries the true pre-gesture state so
    /// undo returns there. Commands whose field is missing (or, for an add,
    /// already present) are ignored.
    pub fn execute(&mut self, command: FieldCommand) -> bool {
        self.commit(command, true)
    }

    fn commit(&mut self, command: FieldCommand, use_history: bool) -> bool {
        if !command.applies_to(&self.fields) {
            return false;
        }
        if use_history {
            debug!("{}", command.describe());
            self.history.execute(&mut self.fields, command);
        } else {
            trace!("live {command:?}");
            command.apply(&mut self.fields, Direction::Forward);
        }
        self.publish();
        true
    }

    // --- history ---

    /// Reverts the most recent recorded edit.
    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo(&mut self.fields);
        if undone {
            debug!("undo");
            self.publish();
        }
        undone
    }

    /// Re-applies the most recently undone edit.
    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo(&mut self.fields);
        if redone {
            debug!("redo");
            self.publish();
        }
        redone
    }

    /// Returns `true` if [`FieldStore::undo`] would do something.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Returns `true` if [`FieldStore::redo`] would do something.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Undo/redo availability.
    #[must_use]
    pub fn history_state(&self) -> HistoryState {
        self.history.state()
    }

    /// Description of the edit [`FieldStore::undo`] would revert.
    #[must_use]
    pub fn undo_description(&self) -> Option<Cow<'_, str>> {
        self.history.undo_description()
    }

    /// Description of the edit [`FieldStore::redo`] would re-apply.
    #[must_use]
    pub fn redo_description(&self) -> Option<Cow<'_, str>> {
        self.history.redo_description()
    }

    /// Forgets all recorded edits.
    pub fn clear_history(&mut self) {
        let before = self.history.revision();
        self.history.clear();
        if self.history.revision() != before {
            self.publish();
        }
    }

    /// Removes every field and forgets all history.
    pub fn clear(&mut self) {
        self.fields.clear();
        self.history.clear();
        self.publish();
    }

    // --- coordinate space ---

    /// Switches the stored convention, re-encoding every field's `top` so it
    /// stays where it is on the page.
    ///
    /// `page_height` returns the height in points of a 1-based page. Fields
    /// on pages whose height is unknown keep their stored value. History is
    /// cleared because recorded commands hold values in the old convention.
    ///
    /// Returns the number of fields remapped.
    pub fn set_coordinate_space(
        &mut self,
        space: CoordinateSpace,
        mut page_height: impl FnMut(u32) -> Option<f64>,
    ) -> usize {
        let from = self.coordinate_space;
        if from == space {
            return 0;
        }
        let mut remapped = 0;
        for field in self.fields.iter_mut() {
            let page = field.page_number();
            match page_height(page) {
                Some(height) if height.is_finite() => {
                    let bounds = &mut field.location.bounds;
                    bounds.top = remap_top(bounds.top, height, from, space);
                    remapped += 1;
                }
                _ => warn!(
                    "no height for page {page}; field {} keeps its {} top",
                    field.id(),
                    from.as_str()
                ),
            }
        }
        info!(
            "coordinate space {} -> {}: remapped {remapped} of {} fields",
            from.as_str(),
            space.as_str(),
            self.fields.len()
        );
        self.coordinate_space = space;
        self.history.clear();
        self.publish();
        remapped
    }

    // --- exchange ---

    /// Exports every field in the flat exchange format.
    #[must_use]
    pub fn export(&self) -> Vec<FieldExport> {
        exchange::export_fields(self.fields.as_slice())
    }

    /// Exports every field as pretty-printed exchange JSON.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.export())
    }

    /// Replaces all fields with the records in an exchange payload.
    ///
    /// Returns the number of fields imported. On error the store is left
    /// unchanged.
    pub fn import_json(&mut self, json: &str) -> Result<usize, ImportError> {
        self.import_parsed(exchange::parse_fields(json))
    }

    /// Like [`FieldStore::import_json`], for an already-decoded payload.
    pub fn import_value(&mut self, value: Value) -> Result<usize, ImportError> {
        self.import_parsed(exchange::parse_fields_value(value))
    }

    fn import_parsed(
        &mut self,
        parsed: Result<Vec<FieldExport>, ImportError>,
    ) -> Result<usize, ImportError> {
        let result = parsed.and_then(|exports| {
            let mut next_id = self.next_id;
            let records = exchange::to_records(&exports, || {
                let id = FieldId::from_raw(next_id);
                next_id += 1;
                id
            })?;
            self.next_id = next_id;
            Ok(records)
        });
        match result {
            Ok(records) => {
                let count = records.len();
                info!("imported {count} fields");
                self.replace_all(records);
                Ok(count)
            }
            Err(err) => {
                warn!("import rejected: {err}");
                Err(err)
            }
        }
    }

    /// Captures the fields and the active convention as a session document.
    #[must_use]
    pub fn export_session(&self, total_pages: Option<u32>) -> SessionDocument {
        SessionDocument {
            fields: self.fields.as_slice().to_vec(),
            document_type: self.coordinate_space,
            total_pages,
        }
    }

    /// Replaces all fields with those of `session` and adopts its convention.
    ///
    /// Fields receive fresh ids. On error the store is left unchanged.
    pub fn import_session(&mut self, session: SessionDocument) -> Result<usize, ImportError> {
        if let Err(err) = session.validate() {
            warn!("session rejected: {err}");
            return Err(err);
        }
        let records: Vec<FieldRecord> = session
            .fields
            .into_iter()
            .map(|field| {
                let id = self.allocate_id();
                field.with_id(id)
            })
            .collect();
        let count = records.len();
        info!(
            "loaded session with {count} fields in {} space",
            session.document_type.as_str()
        );
        self.coordinate_space = session.document_type;
        self.replace_all(records);
        Ok(count)
    }

    fn replace_all(&mut self, records: Vec<FieldRecord>) {
        self.fields.replace_all(records);
        self.history.clear();
        self.publish();
    }

    // --- subscriptions ---

    /// Registers `listener` and calls it once with the current state.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&FieldsSnapshot<'_>) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        let mut listener: Listener = Box::new(listener);
        listener(&self.snapshot());
        self.listeners.push((id, listener));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    fn publish(&mut self) {
        self.revision += 1;
        let snapshot = FieldsSnapshot {
            fields: self.fields.as_slice(),
            history: self.history.state(),
            revision: self.revision,
            coordinate_space: self.coordinate_space,
        };
        for (_, listener) in &mut self.listeners {
            listener(&snapshot);
        }
    }
}
