// Copyright 2026 the Arcfont Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-width texel records.
//!
//! These layouts must be kept in sync with the decoding fragment shader. A
//! mismatch renders garbled glyphs rather than failing.

use bytemuck::{Pod, Zeroable};
use peniko::kurbo::Point;
use static_assertions::const_assert_eq;

use crate::{Arc, BoundingSquare, EncodeError, Result, MAX_COORD, MAX_D};

/// One RGBA8 texel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Zeroable, Pod)]
#[repr(C)]
pub struct Texel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

const_assert_eq!(size_of::<Texel>(), 4);

impl Texel {
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Largest payload offset a list header can hold.
pub const MAX_OFFSET: usize = (1 << 24) - 1;

/// Count channel value of a list header for a cell lying entirely inside the
/// glyph.
pub const SOLID_INTERIOR: u8 = 255;

/// Largest number of endpoint records a single cell may reference.
///
/// The count channel's top value is reserved for [`SOLID_INTERIOR`].
pub const MAX_CELL_ENDPOINTS: usize = SOLID_INTERIOR as usize - 1;

/// An endpoint record read back from a texel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EndpointRecord {
    /// Normalized x coordinate.
    pub x: f64,
    /// Normalized y coordinate.
    pub y: f64,
    /// Curvature of the arc ending here, or `None` when the record starts a
    /// new contour run.
    pub d: Option<f64>,
}

impl EndpointRecord {
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn is_contour_start(&self) -> bool {
        self.d.is_none()
    }
}

/// A cell's list header read back from a texel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListHeader {
    /// Texel index of the cell's first endpoint record, counted from the
    /// start of the texture.
    pub offset: usize,
    /// Number of endpoint records.
    pub count: usize,
    /// The cell lies inside the glyph and needs no arcs.
    pub solid_interior: bool,
}

impl ListHeader {
    /// Offset of the first record in bytes.
    pub fn byte_offset(&self) -> usize {
        self.offset * size_of::<Texel>()
    }
}

/// Packs one arc endpoint.
///
/// `x` and `y` are normalized to the bounding square. An infinite `d` marks
/// the start of a contour run and is stored as zero.
///
/// Layout: `r` is the quantized curvature, `g` and `b` the low 8 bits of the
/// quantized x and y, and `a` holds the high 4 bits of x above those of y.
pub fn encode_endpoint(x: f64, y: f64, d: f64) -> Result<Texel> {
    let ix = quantize_coord(x)?;
    let iy = quantize_coord(y)?;
    let id = if d.is_infinite() {
        0
    } else {
        quantize_distance(d)?
    };
    Ok(Texel::new(
        id,
        (ix & 0xff) as u8,
        (iy & 0xff) as u8,
        (((ix >> 8) << 4) | (iy >> 8)) as u8,
    ))
}

fn quantize_coord(value: f64) -> Result<u32> {
    let q = (value * f64::from(MAX_COORD)).round();
    if !(0.0..=f64::from(MAX_COORD)).contains(&q) {
        return Err(EncodeError::CoordinateOverflow { value });
    }
    Ok(q as u32)
}

fn quantize_distance(d: f64) -> Result<u8> {
    if !(d.abs() < MAX_D) {
        return Err(EncodeError::DistanceOutOfRange { value: d });
    }
    Ok((d * 127.0 / MAX_D + 128.0).round() as u8)
}

/// Checks that both endpoints of `arc` fit `square` and that its curvature
/// is storable.
///
/// Unlike [`encode_endpoint`], an infinite `d` is rejected: it would alias the
/// contour start marker.
pub fn validate_arc(arc: &Arc, square: &BoundingSquare) -> Result<()> {
    for p in [arc.p0, arc.p1] {
        let n = square.normalize(p);
        quantize_coord(n.x)?;
        quantize_coord(n.y)?;
    }
    quantize_distance(arc.d)?;
    Ok(())
}

pub fn decode_endpoint(texel: Texel) -> EndpointRecord {
    let ix = u32::from(texel.g) | (u32::from(texel.a >> 4) << 8);
    let iy = u32::from(texel.b) | (u32::from(texel.a & 0x0f) << 8);
    let max = f64::from(MAX_COORD);
    EndpointRecord {
        x: f64::from(ix) / max,
        y: f64::from(iy) / max,
        d: (texel.r != 0).then(|| (f64::from(texel.r) - 128.0) * MAX_D / 127.0),
    }
}

/// Packs a cell's list header.
///
/// The 24-bit `offset` is stored big-endian in `r`, `g` and `b`; `a` holds
/// the endpoint count, or [`SOLID_INTERIOR`] for an empty cell inside the
/// glyph.
pub fn encode_header(offset: usize, count: usize, inside: bool) -> Result<Texel> {
    if offset > MAX_OFFSET {
        return Err(EncodeError::OffsetOverflow { offset });
    }
    if count > MAX_CELL_ENDPOINTS {
        return Err(EncodeError::TooManyArcsInCell { count });
    }
    let count = if count == 0 && inside {
        SOLID_INTERIOR
    } else {
        count as u8
    };
    Ok(Texel::new(
        (offset >> 16) as u8,
        (offset >> 8) as u8,
        offset as u8,
        count,
    ))
}

pub fn decode_header(texel: Texel) -> ListHeader {
    let offset =
        (usize::from(texel.r) << 16) | (usize::from(texel.g) << 8) | usize::from(texel.b);
    let solid_interior = texel.a == SOLID_INTERIOR;
    ListHeader {
        offset,
        count: if solid_interior {
            0
        } else {
            usize::from(texel.a)
        },
        solid_interior,
    }
}

/// Appends the endpoint records of `arcs` to `out`.
///
/// A contour start record precedes every arc that does not continue from the
/// previous arc's end point, so a list can hold several disjoint runs.
pub fn encode_arc_list(arcs: &[Arc], square: &BoundingSquare, out: &mut Vec<Texel>) -> Result<()> {
    let encode = |p: Point, d: f64| {
        let n = square.normalize(p);
        encode_endpoint(n.x, n.y, d)
    };
    let mut previous_end = None;
    for arc in arcs {
        if previous_end != Some(arc.p0) {
            out.push(encode(arc.p0, f64::INFINITY)?);
        }
        out.push(encode(arc.p1, arc.d)?);
        previous_end = Some(arc.p1);
    }
    Ok(())
}
