// Copyright 2025 the Fieldplace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use fieldplace_coords::CoordinateSpace;
use fieldplace_history::DEFAULT_HISTORY_LIMIT;
use fieldplace_interaction::InteractionConfig;
use serde::{Deserialize, Serialize};

/// Settings of an [`Editor`](crate::Editor) session.
///
/// Loaded from JSON by the embedding application; every key is optional.
///
/// ```rust
/// use fieldplace_coords::CoordinateSpace;
/// use fieldplace_editor::EditorConfig;
///
/// let config = EditorConfig::from_json(r#"{
///     "interaction": { "snapToGrid": true },
///     "autoDisableDrawMode": true,
///     "coordinateSpace": "LIBRARY"
/// }"#).unwrap();
/// assert!(config.interaction.snap_to_grid);
/// assert_eq!(config.interaction.grid_size, 10.0);
/// assert_eq!(config.history_limit, 50);
/// assert_eq!(config.coordinate_space, CoordinateSpace::Library);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Gesture tunables.
    pub interaction: InteractionConfig,
    /// Undo steps kept. Default `50`.
    pub history_limit: usize,
    /// Leave draw mode after each drawn field. Default `false`.
    pub auto_disable_draw_mode: bool,
    /// Recipient index stamped on new fields. Default `1`.
    pub default_recipient: u32,
    /// Initial convention for stored positions. Default `TRANSIENT`.
    pub coordinate_space: CoordinateSpace,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            interaction: InteractionConfig::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            auto_disable_draw_mode: false,
            default_recipient: 1,
            coordinate_space: CoordinateSpace::default(),
        }
    }
}

impl EditorConfig {
    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
