// Copyright 2026 the Arcfont Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arcfont tests.

// LINEBENDER LINT SET - lib.rs - v2
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET

use std::f64::consts::FRAC_PI_8;

use arcfont_encoding::kurbo::Point;
use arcfont_encoding::{
    decode_endpoint, Arc, ArcOutline, EndpointRecord, GlyphId, GlyphTexture, ListHeader,
};

/// Units per em used by every fixture.
pub const UPEM: u16 = 1000;

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// A clockwise rectangle contour, so the interior is on the right of every
/// edge.
pub fn rect_arcs(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Arc> {
    vec![
        Arc::line(p(x0, y0), p(x0, y1)),
        Arc::line(p(x0, y1), p(x1, y1)),
        Arc::line(p(x1, y1), p(x1, y0)),
        Arc::line(p(x1, y0), p(x0, y0)),
    ]
}

/// A circle made of four quarter arcs, clockwise unless `hole` is set.
pub fn circle_arcs(center: Point, radius: f64, hole: bool) -> Vec<Arc> {
    let (c, r) = (center, radius);
    let left = p(c.x - r, c.y);
    let top = p(c.x, c.y + r);
    let right = p(c.x + r, c.y);
    let bottom = p(c.x, c.y - r);
    let d = FRAC_PI_8.tan();
    if hole {
        vec![
            Arc::new(left, bottom, d),
            Arc::new(bottom, right, d),
            Arc::new(right, top, d),
            Arc::new(top, left, d),
        ]
    } else {
        vec![
            Arc::new(left, top, -d),
            Arc::new(top, right, -d),
            Arc::new(right, bottom, -d),
            Arc::new(bottom, left, -d),
        ]
    }
}

/// A filled square with its corner at the origin.
pub fn square(size: f64) -> ArcOutline {
    ArcOutline::new(GlyphId(1), rect_arcs(0.0, 0.0, size, size), UPEM)
}

/// Two small squares in opposite corners of a 100 unit box.
pub fn two_squares() -> ArcOutline {
    let mut arcs = rect_arcs(0.0, 0.0, 10.0, 10.0);
    arcs.extend(rect_arcs(90.0, 90.0, 100.0, 100.0));
    ArcOutline::new(GlyphId(2), arcs, UPEM)
}

/// A disc of radius 40 around (50, 50).
pub fn disc() -> ArcOutline {
    ArcOutline::new(GlyphId(3), circle_arcs(p(50.0, 50.0), 40.0, false), UPEM)
}

/// A disc with a hole, shaped like the letter "o".
pub fn ring() -> ArcOutline {
    let mut arcs = circle_arcs(p(50.0, 50.0), 40.0, false);
    arcs.extend(circle_arcs(p(50.0, 50.0), 20.0, true));
    ArcOutline::new(GlyphId(4), arcs, UPEM)
}

/// A rectangle four times wider than it is tall.
pub fn wide_rect() -> ArcOutline {
    ArcOutline::new(GlyphId(5), rect_arcs(0.0, 0.0, 200.0, 50.0), UPEM)
}

/// Every fixture outline.
pub fn all_outlines() -> Vec<ArcOutline> {
    vec![square(100.0), two_squares(), disc(), ring(), wide_rect()]
}

/// All grid cells of `texture` in row-major order with their headers.
pub fn headers(texture: &GlyphTexture, grid_x: u32, grid_y: u32) -> Vec<(u32, u32, ListHeader)> {
    let mut out = Vec::with_capacity(texture.header_count());
    for row in 0..grid_y {
        for col in 0..grid_x {
            if let Some(header) = texture.header(row, col) {
                out.push((row, col, header));
            }
        }
    }
    out
}

/// Decoded endpoint records of cell (`row`, `col`).
pub fn decoded_records(texture: &GlyphTexture, row: u32, col: u32) -> Vec<EndpointRecord> {
    texture
        .cell_records(row, col)
        .unwrap_or_default()
        .iter()
        .copied()
        .map(decode_endpoint)
        .collect()
}
