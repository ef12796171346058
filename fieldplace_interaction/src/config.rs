// Copyright 2025 the Fieldplace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::{Deserialize, Serialize};

/// Tunables of the interaction engine.
///
/// Every key is optional when deserializing; missing keys take the defaults
/// below. Sizes are in document points, handle geometry in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InteractionConfig {
    /// Grid spacing in points. Default `10`.
    pub grid_size: f64,
    /// Whether drag and resize results snap to the grid. Default `false`.
    pub snap_to_grid: bool,
    /// Smallest width and height a resize or draw may produce. Default `20`.
    pub min_size: f64,
    /// Side length of a drawn resize handle in pixels. Default `8`.
    pub handle_size: f64,
    /// Extra pick slack around a handle in pixels. Default `4`.
    pub hit_margin: f64,
    /// When a resize hits `min_size`, keep the edge opposite the handle in
    /// place instead of letting the dragged edge follow the pointer.
    /// Default `false`.
    pub pin_opposite_edge: bool,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            grid_size: 10.0,
            snap_to_grid: false,
            min_size: 20.0,
            handle_size: 8.0,
            hit_margin: 4.0,
            pin_opposite_edge: false,
        }
    }
}

impl InteractionConfig {
    /// Distance from a handle center within which the handle is picked.
    #[must_use]
    pub fn handle_hit_radius(&self) -> f64 {
        self.handle_size / 2.0 + self.hit_margin
    }
}
