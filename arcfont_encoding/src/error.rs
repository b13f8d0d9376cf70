// Copyright 2026 the Arcfont Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

use crate::GlyphId;

/// Errors that can occur while encoding a single glyph.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum EncodeError {
    /// The outline has no arcs, so no bounding square exists.
    #[error("Glyph outline has no arcs")]
    EmptyOutline,
    /// A nearest arc query was made against an empty arc list.
    #[error("No arcs to measure cell distances against")]
    NoArcs,
    /// A normalized coordinate does not fit the 12-bit budget.
    ///
    /// The point fell outside the bounding square.
    #[error("Normalized coordinate {value} is outside of [0, 1]")]
    CoordinateOverflow {
        /// The normalized coordinate.
        value: f64,
    },
    /// An arc's curvature parameter is too large for the 8-bit budget.
    #[error("Arc curvature {value} exceeds the maximum magnitude")]
    DistanceOutOfRange {
        /// The curvature parameter.
        value: f64,
    },
    /// A cell's near-arc list does not fit the 8-bit endpoint count.
    ///
    /// The limit is [`MAX_CELL_ENDPOINTS`](crate::MAX_CELL_ENDPOINTS), 254,
    /// since a count of 255 marks a solid interior cell. The grid is too
    /// coarse or the tolerance too loose for this glyph.
    #[error("Cell needs {count} endpoints, more than a list header can address")]
    TooManyArcsInCell {
        /// Number of endpoint records in the list.
        count: usize,
    },
    /// A payload offset does not fit the 24-bit header field.
    #[error("Payload offset {offset} does not fit in 24 bits")]
    OffsetOverflow {
        /// The texel offset.
        offset: usize,
    },
    /// The requested texture width was zero.
    #[error("Texture width must be non-zero")]
    InvalidTextureWidth,
}

/// An [`EncodeError`] tagged with the glyph it occurred in.
///
/// Batch builders can skip or substitute the glyph and carry on.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
#[error("Failed to encode glyph {glyph}")]
pub struct GlyphEncodeError {
    /// The glyph whose encoding failed.
    pub glyph: GlyphId,
    /// What went wrong.
    #[source]
    pub source: EncodeError,
}

pub type Result<T, E = EncodeError> = std::result::Result<T, E>;
