// Copyright 2025 the Fieldplace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A field rectangle in document points.
///
/// `left` and `width` are unambiguous. `top` names the field's top edge in the
/// document's own [`CoordinateSpace`](crate::CoordinateSpace); it is never a
/// pixel value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointBounds {
    /// Distance from the left page edge to the field's left edge.
    pub left: f64,
    /// Position of the field's top edge in the document convention.
    pub top: f64,
    /// Field width.
    pub width: f64,
    /// Field height.
    pub height: f64,
}

impl PointBounds {
    /// Creates bounds from their four components.
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Returns a copy moved to `(left, top)` with the same size.
    #[must_use]
    pub const fn with_position(self, left: f64, top: f64) -> Self {
        Self::new(left, top, self.width, self.height)
    }

    /// Returns `true` if all components are finite and the size is positive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }
}
