// Copyright 2025 the Fieldplace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Vertical origin convention used for stored field positions.
///
/// This is a session-wide setting. Changing it for an existing field list
/// requires re-encoding every stored `top` (see [`crate::remap_top`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum CoordinateSpace {
    /// Origin at the top-left of the page; `top` grows downward.
    Library,
    /// Origin at the bottom-left of the page; `top` grows upward.
    ///
    /// This is the convention Adobe Sign uses for transient documents.
    #[default]
    Transient,
}

impl CoordinateSpace {
    /// Sign applied to a pixel-space vertical delta to obtain a point-space
    /// change of `top`.
    ///
    /// Moving the pointer down increases `top` in [`CoordinateSpace::Library`]
    /// but decreases it in [`CoordinateSpace::Transient`].
    #[must_use]
    pub const fn y_multiplier(self) -> f64 {
        match self {
            Self::Library => 1.0,
            Self::Transient => -1.0,
        }
    }

    /// Returns `true` for the bottom-left origin convention.
    #[must_use]
    pub const fn is_bottom_origin(self) -> bool {
        matches!(self, Self::Transient)
    }

    /// The other convention.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Library => Self::Transient,
            Self::Transient => Self::Library,
        }
    }

    /// Exchange spelling of this convention (`LIBRARY` / `TRANSIENT`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Library => "LIBRARY",
            Self::Transient => "TRANSIENT",
        }
    }
}
