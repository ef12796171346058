// Copyright 2025 the Fieldplace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The draw/drag/resize state machine and its gesture math.

use fieldplace_coords::{
    CoordinateSpace, PointBounds, ViewportContext, canvas_rect_to_bounds, pixels_to_points, snap,
};
use fieldplace_store::{FieldCommand, FieldId, FieldPosition, FieldRecord};
use kurbo::{Point, Rect, Vec2};
use log::{debug, trace};

use crate::handle::{Handle, handle_at};
use crate::hit::{field_canvas_rect, hit_test};
use crate::{CursorHint, InteractionConfig};

/// The one gesture that may be live at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum InteractionState {
    /// No gesture.
    #[default]
    Idle,
    /// Drawing a new field.
    Drawing {
        /// Page the field will be placed on.
        page_number: u32,
        /// Pixel position of the pointer-down.
        anchor: Point,
    },
    /// Moving an existing field.
    Dragging {
        /// Field being moved.
        field: FieldId,
        /// Pixel position of the pointer-down.
        pointer_anchor: Point,
        /// Field position when the gesture began.
        start: FieldPosition,
    },
    /// Resizing an existing field.
    Resizing {
        /// Field being resized.
        field: FieldId,
        /// Pixel position of the pointer-down.
        pointer_anchor: Point,
        /// Handle being dragged.
        handle: Handle,
        /// Field rectangle when the gesture began.
        start: PointBounds,
    },
}

impl InteractionState {
    /// Returns `true` unless [`InteractionState::Idle`].
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// The field a drag or resize is editing.
    #[must_use]
    pub fn field(&self) -> Option<FieldId> {
        match self {
            Self::Dragging { field, .. } | Self::Resizing { field, .. } => Some(*field),
            Self::Idle | Self::Drawing { .. } => None,
        }
    }
}

/// Live feedback for a pointer move during a gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Preview {
    /// Rectangle a draw would produce if released here. Nothing is applied.
    Draw {
        /// Target page.
        page_number: u32,
        /// Proposed bounds.
        bounds: PointBounds,
    },
    /// Proposed position of the dragged field.
    Move {
        /// Dragged field.
        field: FieldId,
        /// Proposed position.
        to: FieldPosition,
    },
    /// Proposed rectangle of the resized field.
    Resize {
        /// Resized field.
        field: FieldId,
        /// Proposed bounds.
        to: PointBounds,
    },
}

/// Result of completing a gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureOutcome {
    /// A new field should be created here.
    Drawn {
        /// Target page.
        page_number: u32,
        /// Bounds of the new field.
        bounds: PointBounds,
    },
    /// The field moved.
    Moved {
        /// Moved field.
        field: FieldId,
        /// Position before the gesture.
        from: FieldPosition,
        /// Final position.
        to: FieldPosition,
    },
    /// The field was resized.
    Resized {
        /// Resized field.
        field: FieldId,
        /// Bounds before the gesture.
        from: PointBounds,
        /// Final bounds.
        to: PointBounds,
    },
    /// A drag or resize that ended where it started.
    Unchanged {
        /// Field the gesture targeted.
        field: FieldId,
    },
}

impl GestureOutcome {
    /// The history command committing a move or resize.
    ///
    /// Draws (which need field metadata) and unchanged gestures yield `None`.
    #[must_use]
    pub fn command(&self) -> Option<FieldCommand> {
        match *self {
            Self::Moved { field, from, to } => Some(FieldCommand::MoveField { id: field, from, to }),
            Self::Resized { field, from, to } => {
                Some(FieldCommand::ResizeField { id: field, from, to })
            }
            Self::Drawn { .. } | Self::Unchanged { .. } => None,
        }
    }
}

/// Position of a field dragged by `delta` pixels from `start`.
#[must_use]
pub fn drag_position(
    start: FieldPosition,
    delta: Vec2,
    viewport: &ViewportContext,
    space: CoordinateSpace,
    config: &InteractionConfig,
) -> FieldPosition {
    let dx = pixels_to_points(delta.x, viewport.scale());
    let dy = pixels_to_points(delta.y, viewport.scale());
    let grid = config.grid_size;
    FieldPosition::new(
        snap(start.left + dx, grid, config.snap_to_grid),
        snap(start.top + dy * space.y_multiplier(), grid, config.snap_to_grid),
    )
}

/// Rectangle of a field whose `handle` is dragged by `delta` pixels.
///
/// Edges under the handle follow the pointer and sizes are floored to
/// `config.min_size` independently, then everything is snapped. With
/// [`pin_opposite_edge`](InteractionConfig::pin_opposite_edge) a floored
/// size keeps the edge opposite the handle where it was instead.
#[must_use]
pub fn resize_bounds(
    start: PointBounds,
    handle: Handle,
    delta: Vec2,
    viewport: &ViewportContext,
    space: CoordinateSpace,
    config: &InteractionConfig,
) -> PointBounds {
    let dx = pixels_to_points(delta.x, viewport.scale());
    let dy = pixels_to_points(delta.y, viewport.scale());
    let m = space.y_multiplier();
    let f = handle.factors();
    let min = config.min_size;

    let width = (start.width + f.width * dx).max(min);
    let height = (start.height + f.height * dy).max(min);
    let (left, top) = if config.pin_opposite_edge {
        (
            start.left + f.left * (start.width - width),
            start.top + f.top * (start.height - height) * m,
        )
    } else {
        (start.left + f.left * dx, start.top + f.top * dy * m)
    };

    let grid = config.grid_size;
    let on = config.snap_to_grid;
    PointBounds::new(
        snap(left, grid, on),
        snap(top, grid, on),
        floor_on_grid(snap(width, grid, on), min, grid, on),
        floor_on_grid(snap(height, grid, on), min, grid, on),
    )
}

/// Raises `size` to `min`, rounded up to the grid when snapping.
fn floor_on_grid(size: f64, min: f64, grid: f64, snapping: bool) -> f64 {
    if size >= min {
        return size;
    }
    if snapping && grid.is_finite() && grid > 0.0 {
        (min / grid).ceil() * grid
    } else {
        min
    }
}

/// Bounds of a field drawn from `anchor` to `point`, in pixels.
///
/// The rectangle is normalized and grown to `config.min_size` from its
/// top-left corner. Draws are not snapped.
#[must_use]
pub fn draw_bounds(
    anchor: Point,
    point: Point,
    viewport: &ViewportContext,
    space: CoordinateSpace,
    config: &InteractionConfig,
) -> PointBounds {
    let mut bounds = canvas_rect_to_bounds(Rect::from_points(anchor, point), viewport, space);
    bounds.width = bounds.width.max(config.min_size);
    bounds.height = bounds.height.max(config.min_size);
    bounds
}

/// Drives draw, drag, and resize gestures.
///
/// The engine owns no fields. Callers hand it the field a gesture starts on,
/// apply each [`Preview`] to their store without history, and commit the
/// [`GestureOutcome`] once with history. Every call takes the current
/// [`ViewportContext`]; a viewport that is not
/// [usable](ViewportContext::is_usable) makes the call do nothing.
#[derive(Clone, Debug, Default)]
pub struct InteractionEngine {
    config: InteractionConfig,
    state: InteractionState,
}

impl InteractionEngine {
    /// Creates an idle engine.
    #[must_use]
    pub fn new(config: InteractionConfig) -> Self {
        Self {
            config,
            state: InteractionState::Idle,
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    /// Replaces the configuration. A live gesture continues with the new one.
    pub fn set_config(&mut self, config: InteractionConfig) {
        self.config = config;
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Returns `true` while a gesture is live.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Starts drawing a field at `point`.
    pub fn begin_draw(&mut self, point: Point, viewport: &ViewportContext) -> bool {
        if self.is_active() || !viewport.is_usable() {
            return false;
        }
        debug!("draw starts on page {} at {point:?}", viewport.page_number());
        self.state = InteractionState::Drawing {
            page_number: viewport.page_number(),
            anchor: point,
        };
        true
    }

    /// Starts dragging `field` from `point`.
    pub fn begin_drag(
        &mut self,
        field: &FieldRecord,
        point: Point,
        viewport: &ViewportContext,
    ) -> bool {
        if self.is_active() || !viewport.is_usable() {
            return false;
        }
        debug!("drag starts on {}", field.id());
        self.state = InteractionState::Dragging {
            field: field.id(),
            pointer_anchor: point,
            start: FieldPosition::of(&field.bounds()),
        };
        true
    }

    /// Starts resizing `field` by `handle` from `point`.
    pub fn begin_resize(
        &mut self,
        field: &FieldRecord,
        handle: Handle,
        point: Point,
        viewport: &ViewportContext,
    ) -> bool {
        if self.is_active() || !viewport.is_usable() {
            return false;
        }
        debug!("resize starts on {} from {}", field.id(), handle.code());
        self.state = InteractionState::Resizing {
            field: field.id(),
            pointer_anchor: point,
            handle,
            start: field.bounds(),
        };
        true
    }

    /// Computes live feedback for the pointer at `point`.
    pub fn update(
        &self,
        point: Point,
        viewport: &ViewportContext,
        space: CoordinateSpace,
    ) -> Option<Preview> {
        if !viewport.is_usable() {
            return None;
        }
        let preview = match self.state {
            InteractionState::Idle => return None,
            InteractionState::Drawing {
                page_number,
                anchor,
            } => Preview::Draw {
                page_number,
                bounds: draw_bounds(anchor, point, viewport, space, &self.config),
            },
            // A pointer back on its anchor leaves the field unsnapped where it started.
            InteractionState::Dragging {
                field,
                pointer_anchor,
                start,
            } => Preview::Move {
                field,
                to: if point == pointer_anchor {
                    start
                } else {
                    drag_position(start, point - pointer_anchor, viewport, space, &self.config)
                },
            },
            InteractionState::Resizing {
                field,
                pointer_anchor,
                handle,
                start,
            } => Preview::Resize {
                field,
                to: if point == pointer_anchor {
                    start
                } else {
                    resize_bounds(
                        start,
                        handle,
                        point - pointer_anchor,
                        viewport,
                        space,
                        &self.config,
                    )
                },
            },
        };
        trace!("{preview:?}");
        Some(preview)
    }

    /// Ends the gesture with the pointer released at `point`.
    ///
    /// Returns `None` when idle. A drag or resize released on its anchor
    /// reports [`GestureOutcome::Unchanged`], even with snapping on. With an
    /// unusable viewport the gesture is still ended; a drag or resize then
    /// reports [`GestureOutcome::Unchanged`] and a draw is dropped.
    pub fn complete(
        &mut self,
        point: Point,
        viewport: &ViewportContext,
        space: CoordinateSpace,
    ) -> Option<GestureOutcome> {
        let preview = self.update(point, viewport, space);
        let state = std::mem::take(&mut self.state);
        let outcome = match (state, preview) {
            (InteractionState::Idle, _) => return None,
            (_, Some(Preview::Draw { page_number, bounds })) => {
                GestureOutcome::Drawn {
                    page_number,
                    bounds,
                }
            }
            (InteractionState::Dragging { start, .. }, Some(Preview::Move { field, to }))
                if to != start =>
            {
                GestureOutcome::Moved {
                    field,
                    from: start,
                    to,
                }
            }
            (InteractionState::Resizing { start, .. }, Some(Preview::Resize { field, to }))
                if to != start =>
            {
                GestureOutcome::Resized {
                    field,
                    from: start,
                    to,
                }
            }
            (state, _) => match state.field() {
                Some(field) => GestureOutcome::Unchanged { field },
                None => {
                    debug!("draw dropped: viewport unavailable");
                    return None;
                }
            },
        };
        debug!("gesture complete: {outcome:?}");
        Some(outcome)
    }

    /// Aborts the live gesture and returns the state it was in.
    ///
    /// The caller restores the field from the returned start geometry.
    pub fn cancel(&mut self) -> InteractionState {
        let state = std::mem::take(&mut self.state);
        if state.is_active() {
            debug!("gesture cancelled");
        }
        state
    }

    /// Cursor to show for the pointer at `point`.
    ///
    /// During a gesture the hint follows the gesture. Otherwise handles of
    /// the `selected` field take priority, then fields under the pointer.
    #[must_use]
    pub fn cursor_hint(
        &self,
        point: Point,
        fields: &[FieldRecord],
        selected: Option<FieldId>,
        viewport: &ViewportContext,
        space: CoordinateSpace,
    ) -> CursorHint {
        match self.state {
            InteractionState::Dragging { .. } => return CursorHint::Move,
            InteractionState::Resizing { handle, .. } => return handle.cursor(),
            InteractionState::Drawing { .. } => return CursorHint::Default,
            InteractionState::Idle => {}
        }
        if !viewport.is_usable() {
            return CursorHint::Default;
        }
        if let Some(handle) = self.handle_under(point, fields, selected, viewport, space) {
            return handle.cursor();
        }
        match hit_test(fields, point, viewport, space) {
            Some(id) if Some(id) == selected => CursorHint::Move,
            Some(_) => CursorHint::Pointer,
            None => CursorHint::Default,
        }
    }

    /// The resize handle of the `selected` field under `point`, if any.
    #[must_use]
    pub fn handle_under(
        &self,
        point: Point,
        fields: &[FieldRecord],
        selected: Option<FieldId>,
        viewport: &ViewportContext,
        space: CoordinateSpace,
    ) -> Option<Handle> {
        let field = fields.iter().find(|f| Some(f.id()) == selected)?;
        if field.page_number() != viewport.page_number() {
            return None;
        }
        handle_at(
            field_canvas_rect(field, viewport, space),
            point,
            self.config.handle_size,
            self.config.hit_margin,
        )
    }
}
