// Copyright 2026 the Arcfont Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;

use crate::{Arc, TOLERANCE};

/// Identifier of a glyph within its font.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GlyphId(pub u32);

impl fmt::Display for GlyphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Arcs approximating one glyph outline, as produced by the arc
/// approximation stage.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcOutline {
    /// The glyph these arcs belong to.
    pub glyph: GlyphId,
    /// Arcs in contour order. Consecutive arcs sharing an endpoint belong to
    /// the same contour.
    pub arcs: Vec<Arc>,
    /// Error bound, in font design units, the arcs were produced with.
    pub tolerance: f64,
    /// Design units per em of the font.
    pub units_per_em: u16,
}

impl ArcOutline {
    /// Creates an outline approximated with the default tolerance for
    /// `units_per_em`.
    pub fn new(glyph: GlyphId, arcs: Vec<Arc>, units_per_em: u16) -> Self {
        Self {
            glyph,
            arcs,
            tolerance: Self::tolerance_for(units_per_em),
            units_per_em,
        }
    }

    /// The default approximation tolerance in design units.
    pub fn tolerance_for(units_per_em: u16) -> f64 {
        f64::from(units_per_em) * TOLERANCE
    }

    /// Returns `true` if the outline has no arcs.
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }
}
