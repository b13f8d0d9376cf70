// Copyright 2026 the Arcfont Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid-indexed arc list encoding of glyph outlines.
//!
//! A glyph outline, already approximated by a short list of circular [`Arc`]s,
//! is partitioned into a fixed grid. For every grid cell the encoder collects
//! the arcs that could be nearest to some point of the cell, packs them into
//! 4-byte RGBA texels, deduplicates identical lists across cells and folds the
//! result into a rectangular texture. A fragment shader can then evaluate
//! glyph coverage at any zoom level by reading only the arcs of the cell it
//! falls into.
//!
//! The texture starts with one [`ListHeader`] texel per grid cell in
//! row-major order, followed by the shared payload of endpoint records.
//!
//! ```
//! use arcfont_encoding::kurbo::Point;
//! use arcfont_encoding::{Arc, ArcOutline, EncoderConfig, GlyphEncoder, GlyphId};
//!
//! let p = |x, y| Point::new(x, y);
//! let arcs = vec![
//!     Arc::line(p(0., 0.), p(0., 100.)),
//!     Arc::line(p(0., 100.), p(100., 100.)),
//!     Arc::line(p(100., 100.), p(100., 0.)),
//!     Arc::line(p(100., 0.), p(0., 0.)),
//! ];
//! let outline = ArcOutline::new(GlyphId(1), arcs, 1000);
//! let mut encoder = GlyphEncoder::new(EncoderConfig::default());
//! let texture = encoder.encode(&outline).unwrap();
//! assert_eq!(texture.header_count(), 16 * 16);
//! ```

// LINEBENDER LINT SET - lib.rs - v2
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]

mod arc;
mod batch;
mod bounds;
mod config;
mod encoder;
mod error;
mod nearest;
mod outline;
mod packer;
mod record;
mod texture;

pub use arc::{Arc, SignedVector};
pub use batch::encode_glyphs;
pub use bounds::BoundingSquare;
pub use config::{
    CellReference, EncoderConfig, COORD_BITS, DISTANCE_BITS, GRID_SIZE, GRID_X, GRID_Y, MAX_COORD,
    MAX_D, MIN_FONT_SIZE, SUB_TEXTURE_WIDTH, TEXTURE_HEIGHT, TEXTURE_WIDTH, TOLERANCE,
};
pub use encoder::{EncodeStats, GlyphEncoder};
pub use error::{EncodeError, GlyphEncodeError, Result};
pub use nearest::{GridCell, NearestArcs, TIE_EPSILON};
pub use outline::{ArcOutline, GlyphId};
pub use packer::PayloadPacker;
pub use record::{
    decode_endpoint, decode_header, encode_arc_list, encode_endpoint, encode_header,
    validate_arc, EndpointRecord, ListHeader, Texel, MAX_CELL_ENDPOINTS, MAX_OFFSET, SOLID_INTERIOR,
};
pub use texture::{layout_texture, GlyphTexture, ShaderUniforms, TextureSink};

pub use peniko::kurbo;
