// Copyright 2025 the Fieldplace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Pointer cursor the surface should show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CursorHint {
    /// Nothing interactive under the pointer.
    #[default]
    Default,
    /// Over a field that is not selected.
    Pointer,
    /// Over the selected field, or while dragging it.
    Move,
    /// Over a `tl` or `br` handle.
    NwseResize,
    /// Over a `tr` or `bl` handle.
    NeswResize,
    /// Over a `t` or `b` handle.
    NsResize,
    /// Over an `l` or `r` handle.
    EwResize,
}

impl CursorHint {
    /// CSS `cursor` keyword for this hint.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Pointer => "pointer",
            Self::Move => "move",
            Self::NwseResize => "nwse-resize",
            Self::NeswResize => "nesw-resize",
            Self::NsResize => "ns-resize",
            Self::EwResize => "ew-resize",
        }
    }
}
