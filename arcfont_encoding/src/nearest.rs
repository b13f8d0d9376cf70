// Copyright 2026 the Arcfont Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection of the arcs that may be nearest to some point of a grid cell.

use peniko::kurbo::Point;
use smallvec::SmallVec;

use crate::{Arc, CellReference, EncodeError, EncoderConfig, Result};

/// Distances closer than this are considered equal when picking the sign of
/// the nearest arc.
pub const TIE_EPSILON: f64 = 1e-6;

/// One cell of a glyph's grid together with the arcs near it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridCell {
    /// Minimum corner.
    pub p0: Point,
    /// Maximum corner.
    pub p1: Point,
    /// Arcs that may be nearest to some point of the cell, in outline order.
    pub near_arcs: SmallVec<[Arc; 16]>,
    /// Whether the cell's reference point lies inside the glyph.
    pub inside_glyph: bool,
}

/// Nearest-arc queries against one glyph's arcs.
#[derive(Clone, Copy, Debug)]
pub struct NearestArcs<'a> {
    arcs: &'a [Arc],
    faraway: f64,
    reference: CellReference,
}

impl<'a> NearestArcs<'a> {
    /// Prepares queries for a glyph whose bounding square has side
    /// `glyph_size`.
    pub fn new(arcs: &'a [Arc], glyph_size: f64, config: &EncoderConfig) -> Result<Self> {
        if arcs.is_empty() {
            return Err(EncodeError::NoArcs);
        }
        Ok(Self {
            arcs,
            faraway: glyph_size / config.min_font_size,
            reference: config.cell_reference,
        })
    }

    /// Slack added around each cell when collecting arcs.
    pub fn faraway(&self) -> f64 {
        self.faraway
    }

    /// Collects the arcs near the cell with corners `p0` and `p1`.
    ///
    /// Every arc that can be nearest to some point of the cell is included;
    /// others may be included too. Cells whose nearest arc is farther than
    /// the slack beyond their half diagonal get no arcs at all.
    pub fn cell(&self, p0: Point, p1: Point) -> GridCell {
        let (c, half_diagonal) = match self.reference {
            CellReference::Center => {
                let c = p0.midpoint(p1);
                (c, (c - p0).hypot())
            }
            CellReference::CornerSum => {
                let c = p0 + p1.to_vec2();
                (c, (c - p0).hypot())
            }
        };
        let min_distance = self.min_signed_distance(c);
        let inside_glyph = min_distance > 0.0;
        let min_distance = min_distance.abs();

        let mut near_arcs = SmallVec::new();
        if min_distance - half_diagonal <= self.faraway {
            let radius = min_distance + half_diagonal + self.faraway;
            let radius_squared = radius * radius;
            near_arcs.extend(
                self.arcs
                    .iter()
                    .copied()
                    .filter(|arc| arc.squared_distance(c) <= radius_squared),
            );
        }
        log::trace!(
            "cell {p0:?}..{p1:?}: distance {min_distance}, inside {inside_glyph}, {} arcs",
            near_arcs.len()
        );
        GridCell {
            p0,
            p1,
            near_arcs,
            inside_glyph,
        }
    }

    /// Signed distance from `p` to the nearest arc.
    ///
    /// When several arcs are equally near, the sign is taken from the one
    /// whose tangent extension is farthest from `p`. This classifies points
    /// near contour corners correctly where the raw distances agree.
    pub fn min_signed_distance(&self, p: Point) -> f64 {
        let mut to_arc_min = self.arcs[0].signed_vector_to(p);
        let mut min_distance = f64::INFINITY;
        for arc in self.arcs {
            let current = arc.signed_distance(p);
            if (current.abs() - min_distance.abs()).abs() < TIE_EPSILON {
                let to_arc_current = arc.signed_vector_to(p);
                if to_arc_min.length() < to_arc_current.length() {
                    min_distance = current.abs() * to_arc_current.sign();
                    to_arc_min = to_arc_current;
                }
            } else if current.abs() < min_distance.abs() {
                min_distance = current;
                to_arc_min = arc.signed_vector_to(p);
            }
        }
        min_distance
    }
}
