// Copyright 2026 the Arcfont Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! System-wide constants and encoder configuration.
//!
//! The grid dimensions and quantization constants must match the decoding
//! shader. Changing any of them invalidates every texture produced before.

/// Number of grid cells along each axis of the default grid.
pub const GRID_SIZE: u32 = 16;
/// Default number of grid columns.
pub const GRID_X: u32 = GRID_SIZE;
/// Default number of grid rows.
pub const GRID_Y: u32 = GRID_SIZE;

/// Bits per axis of a quantized endpoint coordinate.
pub const COORD_BITS: u32 = 12;
/// Largest quantized coordinate value.
pub const MAX_COORD: u32 = (1 << COORD_BITS) - 1;
/// Bits of a quantized arc curvature value.
pub const DISTANCE_BITS: u32 = 8;
/// Exclusive bound on the magnitude of an arc's curvature parameter `d`.
pub const MAX_D: f64 = 0.54;

/// Smallest font size, in pixels, the encoding is expected to be rendered at.
///
/// Determines the slack added around each cell when collecting near arcs.
pub const MIN_FONT_SIZE: f64 = 20.0;
/// Arc approximation tolerance as a fraction of the em size.
pub const TOLERANCE: f64 = 3e-4;

/// Width of the texture region a glyph is written into, in texels.
pub const SUB_TEXTURE_WIDTH: u32 = 64;
/// Width of the atlas texture the shader samples from.
pub const TEXTURE_WIDTH: u32 = 512;
/// Height of the atlas texture the shader samples from.
pub const TEXTURE_HEIGHT: u32 = 512;

/// How the reference point of a grid cell is derived from its corners.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CellReference {
    /// The midpoint of the cell, with the true half diagonal as its reach.
    #[default]
    Center,
    /// The sum of the two corner points, with the distance from that sum to
    /// the lower corner as its reach.
    ///
    /// Older decoders were tuned against textures built this way.
    CornerSum,
}

/// Per-encoder configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EncoderConfig {
    /// Number of grid columns.
    pub grid_x: u32,
    /// Number of grid rows.
    pub grid_y: u32,
    /// Width in texels of the produced texture.
    pub texture_width: u32,
    /// Placement of the point each cell's nearest arc is measured from.
    pub cell_reference: CellReference,
    /// Divisor of the glyph size giving the extra slack around each cell.
    pub min_font_size: f64,
}

impl EncoderConfig {
    /// Returns a configuration with a `grid_x` by `grid_y` grid.
    pub fn with_grid(self, grid_x: u32, grid_y: u32) -> Self {
        Self {
            grid_x,
            grid_y,
            ..self
        }
    }

    /// Number of list headers at the start of every texture.
    pub fn header_count(&self) -> usize {
        self.grid_x as usize * self.grid_y as usize
    }
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            grid_x: GRID_X,
            grid_y: GRID_Y,
            texture_width: SUB_TEXTURE_WIDTH,
            cell_reference: CellReference::Center,
            min_font_size: MIN_FONT_SIZE,
        }
    }
}
