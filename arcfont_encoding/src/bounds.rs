// Copyright 2026 the Arcfont Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::kurbo::{Point, Rect, Vec2};

use crate::{Arc, EncodeError, Result};

/// The square region a glyph's grid and coordinates are expressed in.
///
/// Width and height are always equal so that normalized coordinates share a
/// single scale factor on both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingSquare {
    /// The minimum corner.
    pub origin: Point,
    /// Side length in design units.
    pub size: f64,
}

impl BoundingSquare {
    pub fn new(origin: Point, size: f64) -> Self {
        Self { origin, size }
    }

    /// Computes the square covering every arc of an outline.
    ///
    /// The arcs' extremes are snapped outwards to whole design units and the
    /// shorter side of the resulting rectangle is grown to match the longer
    /// one, keeping the minimum corner in place.
    pub fn from_arcs(arcs: &[Arc]) -> Result<Self> {
        let rect = arcs
            .iter()
            .map(|arc| {
                Rect::new(
                    arc.leftmost().x.floor(),
                    arc.lowest().y.floor(),
                    arc.rightmost().x.ceil(),
                    arc.highest().y.ceil(),
                )
            })
            .reduce(|acc, rect| acc.union(rect))
            .ok_or(EncodeError::EmptyOutline)?;
        Ok(Self::from_rect(rect))
    }

    /// The square anchored at `rect`'s minimum corner with its longer side.
    pub fn from_rect(rect: Rect) -> Self {
        let rect = rect.abs();
        Self {
            origin: rect.origin(),
            size: rect.width().max(rect.height()),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, (self.size, self.size))
    }

    /// Maps `p` into the unit square.
    pub fn normalize(&self, p: Point) -> Point {
        Point::new(
            (p.x - self.origin.x) / self.size,
            (p.y - self.origin.y) / self.size,
        )
    }

    /// Minimum and maximum corner of grid cell (`row`, `col`).
    pub fn cell(&self, row: u32, col: u32, grid_x: u32, grid_y: u32) -> (Point, Point) {
        let step_x = self.size / f64::from(grid_x);
        let step_y = self.size / f64::from(grid_y);
        let corner = |col: u32, row: u32| {
            self.origin + Vec2::new(f64::from(col) * step_x, f64::from(row) * step_y)
        };
        (corner(col, row), corner(col + 1, row + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_outline() {
        assert_eq!(BoundingSquare::from_arcs(&[]), Err(EncodeError::EmptyOutline));
    }

    #[test]
    fn wide_box_grows_vertically() {
        let arcs = [
            Arc::line(Point::new(10.0, 20.0), Point::new(210.0, 20.0)),
            Arc::line(Point::new(210.0, 20.0), Point::new(10.0, 70.0)),
        ];
        let square = BoundingSquare::from_arcs(&arcs).unwrap();
        assert_eq!(square.origin, Point::new(10.0, 20.0));
        assert_eq!(square.size, 200.0);
        assert_eq!(square.rect().height(), square.rect().width());
        assert_eq!(square.normalize(Point::new(210.0, 70.0)), Point::new(1.0, 0.25));
    }

    #[test]
    fn extremes_snap_outwards() {
        let arcs = [Arc::line(Point::new(0.5, -0.5), Point::new(9.5, 3.2))];
        let square = BoundingSquare::from_arcs(&arcs).unwrap();
        assert_eq!(square.origin, Point::new(0.0, -1.0));
        assert_eq!(square.size, 10.0);
    }

    #[test]
    fn bulging_arc_extends_box() {
        // Lower semicircle of radius 5 centered at (5, 5).
        let arcs = [Arc::new(Point::new(0.0, 5.0), Point::new(10.0, 5.0), 1.0)];
        let square = BoundingSquare::from_arcs(&arcs).unwrap();
        assert_eq!(square.origin, Point::new(0.0, 0.0));
        assert_eq!(square.size, 10.0);
    }

    #[test]
    fn cells_tile_the_square() {
        let square = BoundingSquare::new(Point::new(100.0, 200.0), 64.0);
        let (p0, p1) = square.cell(1, 2, 4, 4);
        assert_eq!(p0, Point::new(132.0, 216.0));
        assert_eq!(p1, Point::new(148.0, 232.0));
        let (_, last) = square.cell(3, 3, 4, 4);
        assert_eq!(last, Point::new(164.0, 264.0));
    }
}
