use mosaic_types::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// The deepest nesting the walker will draw into. The document region sits
    /// at depth 0; every grid cell and every followed indirection adds one level.
    ///
    /// Defaults to `64`.
    pub max_depth: usize,

    /// Blank space between neighbouring bit cells and byte bars, in document units.
    /// Capped at half a cell on small regions.
    ///
    /// Defaults to `1.0`.
    pub cell_gap: f64,

    /// Horizontal inset of a boolean triangle from its region's edges.
    /// Capped at a quarter of the region's side.
    ///
    /// Defaults to `1.0`.
    pub triangle_inset: f64,

    /// Ink for non-negative numbers, set bits and `true`.
    ///
    /// Defaults to black.
    pub positive_ink: Color,

    /// Ink for negative numbers and `false`.
    ///
    /// Defaults to red.
    pub negative_ink: Color,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            max_depth: 64,
            cell_gap: 1.0,
            triangle_inset: 1.0,
            positive_ink: Color::BLACK,
            negative_ink: Color::RED,
        }
    }
}
