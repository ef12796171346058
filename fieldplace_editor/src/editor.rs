// Copyright 2025 the Fieldplace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use fieldplace_coords::{CoordinateSpace, PointBounds, ViewportContext};
use fieldplace_interaction::{
    CursorHint, GestureOutcome, InteractionEngine, InteractionState, Preview, hit_test,
};
use fieldplace_store::{
    FieldId, FieldLocation, FieldStore, FieldTemplate, TemplateCatalog, generate_field_name,
};
use kurbo::Point;
use log::{debug, info, warn};

use crate::EditorConfig;

/// What a completed pointer gesture did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureSummary {
    /// A field was drawn and is now selected.
    Created(FieldId),
    /// A field was moved; the move is on the undo stack.
    Moved(FieldId),
    /// A field was resized; the resize is on the undo stack.
    Resized(FieldId),
    /// A drag or resize ended where it started. Nothing was recorded.
    Unchanged(FieldId),
}

/// A headless editing session.
///
/// Feed it pointer events in page pixels together with the current page's
/// [`ViewportContext`] (or `None` while the page is still rendering) and
/// keyboard actions. It keeps the selection, the draw-mode flag, and the
/// active template, and drives a [`FieldStore`] through an
/// [`InteractionEngine`].
#[derive(Debug)]
pub struct Editor {
    store: FieldStore,
    engine: InteractionEngine,
    catalog: TemplateCatalog,
    template: Option<usize>,
    selected: Option<FieldId>,
    hovered: Option<FieldId>,
    draw_mode: bool,
    draw_preview: Option<PointBounds>,
    recipient_index: u32,
    auto_disable_draw_mode: bool,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

fn usable(viewport: Option<&ViewportContext>) -> Option<&ViewportContext> {
    viewport.filter(|vp| vp.is_usable())
}

impl Editor {
    /// Creates a session with the built-in template catalog.
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        Self::with_catalog(config, TemplateCatalog::builtin())
    }

    /// Creates a session offering the templates of `catalog`.
    #[must_use]
    pub fn with_catalog(config: EditorConfig, catalog: TemplateCatalog) -> Self {
        let store = FieldStore::with_history_limit(config.history_limit)
            .with_coordinate_space(config.coordinate_space);
        let template = catalog.default_template().map(|_| 0);
        Self {
            store,
            engine: InteractionEngine::new(config.interaction),
            catalog,
            template,
            selected: None,
            hovered: None,
            draw_mode: false,
            draw_preview: None,
            recipient_index: config.default_recipient,
            auto_disable_draw_mode: config.auto_disable_draw_mode,
        }
    }

    /// The field store.
    #[must_use]
    pub fn store(&self) -> &FieldStore {
        &self.store
    }

    /// Mutable access to the store, e.g. for property edits or imports.
    pub fn store_mut(&mut self) -> &mut FieldStore {
        &mut self.store
    }

    /// The gesture engine.
    #[must_use]
    pub fn engine(&self) -> &InteractionEngine {
        &self.engine
    }

    /// The offered templates.
    #[must_use]
    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    /// The selected field, if it still exists.
    #[must_use]
    pub fn selected(&self) -> Option<FieldId> {
        self.selected.filter(|id| self.store.field(*id).is_some())
    }

    /// The field under the pointer at the last idle pointer move.
    #[must_use]
    pub fn hovered(&self) -> Option<FieldId> {
        self.hovered.filter(|id| self.store.field(*id).is_some())
    }

    /// Whether pointer-down on empty canvas starts drawing.
    #[must_use]
    pub fn draw_mode(&self) -> bool {
        self.draw_mode
    }

    /// Bounds of the field being drawn, while drawing.
    #[must_use]
    pub fn draw_preview(&self) -> Option<PointBounds> {
        self.draw_preview
    }

    /// The template new fields are drawn from.
    #[must_use]
    pub fn template(&self) -> Option<&FieldTemplate> {
        self.template.and_then(|i| self.catalog.templates().get(i))
    }

    /// Recipient index stamped on new fields.
    #[must_use]
    pub fn recipient_index(&self) -> u32 {
        self.recipient_index
    }

    // --- pointer ---

    /// Handles a pointer press at `point`.
    ///
    /// In draw mode a press on empty canvas starts drawing. Otherwise a
    /// press on a handle of the selected field starts a resize, a press on a
    /// field selects it and starts a drag, and a press on empty canvas clears
    /// the selection.
    pub fn pointer_down(&mut self, point: Point, viewport: Option<&ViewportContext>) {
        let Some(vp) = usable(viewport) else {
            debug!("pointer down ignored: no viewport");
            return;
        };
        if self.engine.is_active() {
            return;
        }
        let space = self.store.coordinate_space();
        let fields = self.store.fields();

        if self.draw_mode {
            if hit_test(fields, point, vp, space).is_none() {
                self.engine.begin_draw(point, vp);
            }
            return;
        }

        let selected = self.selected();
        if let Some(handle) = self.engine.handle_under(point, fields, selected, vp, space) {
            if let Some(field) = selected.and_then(|id| self.store.field(id)) {
                self.engine.begin_resize(field, handle, point, vp);
                return;
            }
        }

        match hit_test(fields, point, vp, space).and_then(|id| self.store.field(id)) {
            Some(field) => {
                self.selected = Some(field.id());
                self.engine.begin_drag(field, point, vp);
            }
            None => self.selected = None,
        }
    }

    /// Handles a pointer move and returns the cursor to show.
    ///
    /// During a drag or resize the field follows the pointer without
    /// touching history.
    pub fn pointer_move(&mut self, point: Point, viewport: Option<&ViewportContext>) -> CursorHint {
        let Some(vp) = usable(viewport) else {
            return CursorHint::Default;
        };
        let space = self.store.coordinate_space();
        match self.engine.update(point, vp, space) {
            Some(Preview::Draw { bounds, .. }) => self.draw_preview = Some(bounds),
            Some(Preview::Move { field, to }) => {
                self.store.move_field(field, to.left, to.top, false);
            }
            Some(Preview::Resize { field, to }) => {
                self.store.resize_field(field, to, false);
            }
            None => self.hovered = hit_test(self.store.fields(), point, vp, space),
        }
        if self.draw_mode && !self.engine.is_active() {
            return CursorHint::Default;
        }
        self.engine
            .cursor_hint(point, self.store.fields(), self.selected(), vp, space)
    }

    /// Handles a pointer release and commits the live gesture.
    ///
    /// Drags and resizes are recorded once, as a single undo step from the
    /// pre-gesture geometry. A draw adds a field from the active template
    /// and selects it. Without a viewport the gesture is cancelled instead.
    pub fn pointer_up(
        &mut self,
        point: Point,
        viewport: Option<&ViewportContext>,
    ) -> Option<GestureSummary> {
        if !self.engine.is_active() {
            return None;
        }
        let Some(vp) = usable(viewport) else {
            self.cancel();
            return None;
        };
        let space = self.store.coordinate_space();
        let state = *self.engine.state();
        self.draw_preview = None;

        let outcome = self.engine.complete(point, vp, space)?;
        match outcome {
            GestureOutcome::Drawn {
                page_number,
                bounds,
            } => self.create_field(FieldLocation::new(page_number, bounds)),
            GestureOutcome::Moved { field, .. } | GestureOutcome::Resized { field, .. } => {
                let command = outcome.command()?;
                self.store.execute(command);
                Some(match outcome {
                    GestureOutcome::Moved { .. } => GestureSummary::Moved(field),
                    _ => GestureSummary::Resized(field),
                })
            }
            GestureOutcome::Unchanged { field } => {
                self.restore(state);
                Some(GestureSummary::Unchanged(field))
            }
        }
    }

    fn create_field(&mut self, location: FieldLocation) -> Option<GestureSummary> {
        let Some(template) = self.template.and_then(|i| self.catalog.templates().get(i)) else {
            warn!("draw dropped: no field template selected");
            return None;
        };
        let name = generate_field_name(
            template.input_type,
            template.content_type,
            self.store.fields(),
        );
        let id = self.store.allocate_id();
        let record = template.instantiate(id, name, location, self.recipient_index);
        self.store.add_field(record, true);
        self.selected = Some(id);
        if self.auto_disable_draw_mode {
            self.draw_mode = false;
        }
        Some(GestureSummary::Created(id))
    }

    /// Puts the field a gesture was editing back where it started.
    fn restore(&mut self, state: InteractionState) {
        match state {
            InteractionState::Dragging { field, start, .. } => {
                self.store.move_field(field, start.left, start.top, false);
            }
            InteractionState::Resizing { field, start, .. } => {
                self.store.resize_field(field, start, false);
            }
            InteractionState::Idle | InteractionState::Drawing { .. } => {}
        }
    }

    // --- keyboard ---

    /// Escape: aborts a live gesture, restoring the field exactly, or else
    /// clears the selection.
    ///
    /// Returns `true` if a gesture was aborted.
    pub fn cancel(&mut self) -> bool {
        self.draw_preview = None;
        let state = self.engine.cancel();
        if state.is_active() {
            self.restore(state);
            true
        } else {
            self.selected = None;
            false
        }
    }

    /// Deletes the selected field as an undoable step.
    ///
    /// Ignored while a gesture is live.
    pub fn delete_selected(&mut self) -> bool {
        if self.engine.is_active() {
            return false;
        }
        match self.selected.take() {
            Some(id) => self.store.delete_field(id, true),
            None => false,
        }
    }

    /// Undoes the last recorded edit and clears the selection.
    pub fn undo(&mut self) -> bool {
        self.abort_gesture();
        self.selected = None;
        self.store.undo()
    }

    /// Redoes the last undone edit and clears the selection.
    pub fn redo(&mut self) -> bool {
        self.abort_gesture();
        self.selected = None;
        self.store.redo()
    }

    fn abort_gesture(&mut self) {
        if self.engine.is_active() {
            self.cancel();
        }
    }

    // --- session settings ---

    /// Flips draw mode and returns the new value.
    pub fn toggle_draw_mode(&mut self) -> bool {
        self.set_draw_mode(!self.draw_mode);
        self.draw_mode
    }

    /// Turns draw mode on or off.
    pub fn set_draw_mode(&mut self, on: bool) {
        if self.draw_mode != on {
            debug!("draw mode {}", if on { "on" } else { "off" });
        }
        self.draw_mode = on;
    }

    /// Selects the template with `key` (see [`FieldTemplate::key`]).
    pub fn select_template(&mut self, key: &str) -> bool {
        let key = key.to_lowercase();
        match self.catalog.templates().iter().position(|t| t.key() == key) {
            Some(index) => {
                self.template = Some(index);
                true
            }
            None => false,
        }
    }

    /// Sets the recipient index stamped on new fields.
    pub fn set_recipient(&mut self, index: u32) {
        self.recipient_index = index;
    }

    /// Selects `id`, or clears the selection with `None`.
    ///
    /// Returns `false` if `id` names no field.
    pub fn select(&mut self, id: Option<FieldId>) -> bool {
        match id {
            Some(id) if self.store.field(id).is_none() => false,
            _ => {
                self.selected = id;
                true
            }
        }
    }

    /// Switches the document convention, keeping every field in place.
    ///
    /// A live gesture is aborted first. See
    /// [`FieldStore::set_coordinate_space`].
    pub fn set_coordinate_space(
        &mut self,
        space: CoordinateSpace,
        page_height: impl FnMut(u32) -> Option<f64>,
    ) -> usize {
        self.abort_gesture();
        let remapped = self.store.set_coordinate_space(space, page_height);
        info!("document type is now {}", space.as_str());
        remapped
    }
}
