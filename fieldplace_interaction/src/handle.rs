// Copyright 2025 the Fieldplace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resize handles around a selected field.

use kurbo::{Point, Rect};

use crate::CursorHint;

/// One of the eight resize handles of a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handle {
    /// Top-left corner (`tl`).
    TopLeft,
    /// Top-right corner (`tr`).
    TopRight,
    /// Bottom-left corner (`bl`).
    BottomLeft,
    /// Bottom-right corner (`br`).
    BottomRight,
    /// Middle of the top edge (`t`).
    Top,
    /// Middle of the bottom edge (`b`).
    Bottom,
    /// Middle of the left edge (`l`).
    Left,
    /// Middle of the right edge (`r`).
    Right,
}

/// How a pointer delta feeds into each bound while resizing.
///
/// `left` and `top` are `0.0` or `1.0`; `width` and `height` are `-1.0`,
/// `0.0`, or `1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct HandleFactors {
    pub(crate) left: f64,
    pub(crate) top: f64,
    pub(crate) width: f64,
    pub(crate) height: f64,
}

impl Handle {
    /// All handles in hit-test order: corners first, then edges.
    pub const ALL: [Self; 8] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
        Self::Top,
        Self::Bottom,
        Self::Left,
        Self::Right,
    ];

    /// Short code: `tl`, `tr`, `bl`, `br`, `t`, `b`, `l`, `r`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::TopLeft => "tl",
            Self::TopRight => "tr",
            Self::BottomLeft => "bl",
            Self::BottomRight => "br",
            Self::Top => "t",
            Self::Bottom => "b",
            Self::Left => "l",
            Self::Right => "r",
        }
    }

    /// Resize cursor shown over this handle.
    #[must_use]
    pub const fn cursor(self) -> CursorHint {
        match self {
            Self::TopLeft | Self::BottomRight => CursorHint::NwseResize,
            Self::TopRight | Self::BottomLeft => CursorHint::NeswResize,
            Self::Top | Self::Bottom => CursorHint::NsResize,
            Self::Left | Self::Right => CursorHint::EwResize,
        }
    }

    /// Center of this handle on a field occupying `rect` in pixels.
    #[must_use]
    pub fn center(self, rect: Rect) -> Point {
        let rect = rect.abs();
        let mid = rect.center();
        match self {
            Self::TopLeft => Point::new(rect.x0, rect.y0),
            Self::TopRight => Point::new(rect.x1, rect.y0),
            Self::BottomLeft => Point::new(rect.x0, rect.y1),
            Self::BottomRight => Point::new(rect.x1, rect.y1),
            Self::Top => Point::new(mid.x, rect.y0),
            Self::Bottom => Point::new(mid.x, rect.y1),
            Self::Left => Point::new(rect.x0, mid.y),
            Self::Right => Point::new(rect.x1, mid.y),
        }
    }

    pub(crate) const fn factors(self) -> HandleFactors {
        let (left, width) = match self {
            Self::TopLeft | Self::BottomLeft | Self::Left => (1.0, -1.0),
            Self::TopRight | Self::BottomRight | Self::Right => (0.0, 1.0),
            Self::Top | Self::Bottom => (0.0, 0.0),
        };
        let (top, height) = match self {
            Self::TopLeft | Self::TopRight | Self::Top => (1.0, -1.0),
            Self::BottomLeft | Self::BottomRight | Self::Bottom => (0.0, 1.0),
            Self::Left | Self::Right => (0.0, 0.0),
        };
        HandleFactors {
            left,
            top,
            width,
            height,
        }
    }
}

/// Returns the first handle (in [`Handle::ALL`] order) whose center lies
/// within `handle_size / 2 + hit_margin` pixels of `point`.
#[must_use]
pub fn handle_at(rect: Rect, point: Point, handle_size: f64, hit_margin: f64) -> Option<Handle> {
    let radius = handle_size / 2.0 + hit_margin;
    Handle::ALL
        .into_iter()
        .find(|handle| handle.center(rect).distance(point) <= radius)
}
