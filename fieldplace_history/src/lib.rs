// Copyright 2025 the Fieldplace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fieldplace History: a bounded, command-based undo/redo engine.
//!
//! The engine is generic over a [`Command`]: a plain value that knows how to
//! apply itself to a target in either [`Direction`]. Commands carry all the
//! before/after data they need, so undoing never has to re-derive anything
//! from the target.
//!
//! [`History`] owns only the two stacks. The target is borrowed for the
//! duration of each [`History::execute`], [`History::undo`], or
//! [`History::redo`] call, which keeps ownership of the edited data with the
//! caller.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::borrow::Cow;
//! use fieldplace_history::{Command, Direction, History};
//!
//! /// Adds `amount` to a counter.
//! struct Add(i64);
//!
//! impl Command for Add {
//!     type Target = i64;
//!
//!     fn apply(&self, target: &mut i64, direction: Direction) {
//!         match direction {
//!             Direction::Forward => *target += self.0,
//!             Direction::Reverse => *target -= self.0,
//!         }
//!     }
//!
//!     fn describe(&self) -> Cow<'_, str> {
//!         Cow::Borrowed("Add")
//!     }
//! }
//!
//! let mut counter = 0;
//! let mut history = History::new();
//!
//! history.execute(&mut counter, Add(5));
//! history.execute(&mut counter, Add(2));
//! assert_eq!(counter, 7);
//!
//! assert!(history.undo(&mut counter));
//! assert_eq!(counter, 5);
//!
//! assert!(history.redo(&mut counter));
//! assert_eq!(counter, 7);
//! ```
//!
//! ## Observing availability
//!
//! [`History::revision`] increases every time either stack changes, so
//! callers can cheaply decide whether to refresh undo/redo affordances, and
//! [`History::state`] returns a [`HistoryState`] snapshot to publish.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;

/// Default number of commands kept on the undo stack.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Which way a [`Command`] is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Perform the command's change.
    Forward,
    /// Revert the command's change.
    Reverse,
}

impl Direction {
    /// Picks `forward` or `reverse` according to this direction.
    #[must_use]
    #[inline]
    pub fn pick<T>(self, forward: T, reverse: T) -> T {
        match self {
            Self::Forward => forward,
            Self::Reverse => reverse,
        }
    }
}

/// A reversible change to a target.
///
/// Implementations must be self-contained: applying a command
/// [`Direction::Forward`] and then [`Direction::Reverse`] must leave the
/// target as it was before.
pub trait Command {
    /// The value this command edits.
    type Target: ?Sized;

    /// Applies the command to `target` in the given direction.
    fn apply(&self, target: &mut Self::Target, direction: Direction);

    /// Short, human-readable description, e.g. for an "Undo …" menu entry.
    fn describe(&self) -> Cow<'_, str>;
}

impl<C: Command + ?Sized> Command for Box<C> {
    type Target = C::Target;

    fn apply(&self, target: &mut Self::Target, direction: Direction) {
        (**self).apply(target, direction);
    }

    fn describe(&self) -> Cow<'_, str> {
        (**self).describe()
    }
}

/// Snapshot of undo/redo availability.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HistoryState {
    /// `true` when [`History::undo`] would do something.
    pub can_undo: bool,
    /// `true` when [`History::redo`] would do something.
    pub can_redo: bool,
    /// Number of commands on the undo stack.
    pub undo_len: usize,
    /// Number of commands on the redo stack.
    pub redo_len: usize,
}

/// Bounded undo/redo stacks of commands.
///
/// - Executing a command clears the redo stack.
/// - The undo stack keeps at most [`History::limit`] commands; the oldest are
///   discarded first.
#[derive(Clone, Debug)]
pub struct History<C> {
    undo: VecDeque<C>,
    redo: Vec<C>,
    limit: usize,
    revision: u64,
}

impl<C> Default for History<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> History<C> {
    /// Creates an empty history keeping [`DEFAULT_HISTORY_LIMIT`] commands.
    #[must_use]
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Creates an empty history keeping at most `limit` commands.
    ///
    /// A limit of zero is treated as one.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            limit: limit.max(1),
            revision: 0,
        }
    }

    /// Maximum number of commands kept on the undo stack.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Changes the undo limit, discarding the oldest commands if needed.
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit.max(1);
        if self.truncate() {
            self.revision += 1;
        }
    }

    /// Returns `true` if there is a command to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Returns `true` if there is a command to redo.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Number of commands on the undo stack.
    #[must_use]
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    /// Number of commands on the redo stack.
    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// Current availability snapshot.
    #[must_use]
    pub fn state(&self) -> HistoryState {
        HistoryState {
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
            undo_len: self.undo.len(),
            redo_len: self.redo.len(),
        }
    }

    /// Monotonic counter bumped whenever either stack changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The command [`History::undo`] would revert next.
    #[must_use]
    pub fn peek_undo(&self) -> Option<&C> {
        self.undo.back()
    }

    /// The command [`History::redo`] would re-apply next.
    #[must_use]
    pub fn peek_redo(&self) -> Option<&C> {
        self.redo.last()
    }

    /// Empties both stacks.
    pub fn clear(&mut self) {
        if self.undo.is_empty() && self.redo.is_empty() {
            return;
        }
        self.undo.clear();
        self.redo.clear();
        self.revision += 1;
    }

    fn truncate(&mut self) -> bool {
        let excess = self.undo.len().saturating_sub(self.limit);
        self.undo.drain(..excess);
        excess > 0
    }
}

impl<C: Command> History<C> {
    /// Applies `command` to `target` and records it.
    ///
    /// The redo stack is cleared and the undo stack is truncated to the limit.
    pub fn execute(&mut self, target: &mut C::Target, command: C) {
        command.apply(target, Direction::Forward);
        self.undo.push_back(command);
        self.redo.clear();
        self.truncate();
        self.revision += 1;
    }

    /// Reverts the most recent command.
    ///
    /// Returns `false` (and does nothing) when the undo stack is empty.
    pub fn undo(&mut self, target: &mut C::Target) -> bool {
        let Some(command) = self.undo.pop_back() else {
            return false;
        };
        command.apply(target, Direction::Reverse);
        self.redo.push(command);
        self.revision += 1;
        true
    }

    /// Re-applies the most recently undone command.
    ///
    /// Returns `false` (and does nothing) when the redo stack is empty.
    pub fn redo(&mut self, target: &mut C::Target) -> bool {
        let Some(command) = self.redo.pop() else {
            return false;
        };
        command.apply(target, Direction::Forward);
        self.undo.push_back(command);
        self.revision += 1;
        true
    }

    /// Description of the command [`History::undo`] would revert next.
    #[must_use]
    pub fn undo_description(&self) -> Option<Cow<'_, str>> {
        self.peek_undo().map(Command::describe)
    }

    /// Description of the command [`History::redo`] would re-apply next.
    #[must_use]
    pub fn redo_description(&self) -> Option<Cow<'_, str>> {
        self.peek_redo().map(Command::describe)
    }
}
