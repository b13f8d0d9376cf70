// Copyright 2026 the Arcfont Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Encoding of small hand-checked outlines.

use arcfont_encoding::kurbo::{Point, Rect};
use arcfont_encoding::{
    encode_glyphs, ArcOutline, BoundingSquare, EncodeError, EncoderConfig, GlyphEncoder, GlyphId,
    SOLID_INTERIOR,
};
use arcfont_tests::{decoded_records, headers, rect_arcs, ring, square, two_squares, wide_rect};

#[test]
fn square_on_two_by_two_grid() {
    let mut encoder = GlyphEncoder::new(EncoderConfig::default().with_grid(2, 2));
    let texture = encoder.encode(&square(100.0)).unwrap();
    assert_eq!(texture.header_count(), 4);

    // Each quadrant sees the two edges meeting at its corner. Quadrants whose
    // edges are not consecutive in the contour need an extra start record.
    let counts: Vec<_> = headers(&texture, 2, 2)
        .into_iter()
        .map(|(_, _, header)| header.count)
        .collect();
    assert_eq!(counts, [4, 3, 3, 3]);
    assert!(headers(&texture, 2, 2)
        .iter()
        .all(|(_, _, header)| !header.solid_interior));

    let corner = decoded_records(&texture, 0, 0);
    let points: Vec<_> = corner.iter().map(|record| record.point()).collect();
    assert_eq!(
        points,
        [
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 0.0),
        ]
    );
    let starts: Vec<_> = corner.iter().map(|record| record.is_contour_start()).collect();
    assert_eq!(starts, [true, false, true, false]);
    assert_eq!(corner[1].d, Some(0.0));
}

#[test]
fn interior_cells_use_the_sentinel() {
    let mut encoder = GlyphEncoder::new(EncoderConfig::default().with_grid(4, 4));
    let texture = encoder.encode(&square(100.0)).unwrap();
    for (row, col, header) in headers(&texture, 4, 4) {
        let interior = (1..3).contains(&row) && (1..3).contains(&col);
        assert_eq!(header.solid_interior, interior, "cell ({row}, {col})");
        assert_eq!(header.count == 0, interior, "cell ({row}, {col})");
        if interior {
            let index = (row * 4 + col) as usize;
            assert_eq!(texture.texels()[index].a, SOLID_INTERIOR);
        }
    }
}

#[test]
fn far_outside_cells_are_empty() {
    let mut encoder = GlyphEncoder::new(EncoderConfig::default().with_grid(4, 4));
    let texture = encoder.encode(&two_squares()).unwrap();
    for (row, col) in [(0, 3), (3, 0)] {
        let header = texture.header(row, col).unwrap();
        assert_eq!(header.count, 0);
        assert!(!header.solid_interior);
        assert_eq!(texture.texels()[(row * 4 + col) as usize].a, 0);
    }
    assert!(texture.header(0, 0).unwrap().count > 0);
    assert!(texture.header(3, 3).unwrap().count > 0);
}

#[test]
fn hole_is_not_solid() {
    let texture = GlyphEncoder::default().encode(&ring()).unwrap();
    for row in 7..9 {
        for col in 7..9 {
            let header = texture.header(row, col).unwrap();
            assert!(!header.solid_interior, "cell ({row}, {col})");
            assert_eq!(header.count, 0);
        }
    }
    // Cells of the body next to the hole reference the inner contour.
    let records = decoded_records(&texture, 8, 3);
    assert!(!records.is_empty());
    assert!(records[0].is_contour_start());
    assert!(!texture.header(8, 3).unwrap().solid_interior);
}

#[test]
fn non_square_box_grows_shorter_side() {
    let outline = wide_rect();
    let square = BoundingSquare::from_arcs(&outline.arcs).unwrap();
    assert_eq!(square.rect(), Rect::new(0.0, 0.0, 200.0, 200.0));

    let config = EncoderConfig::default().with_grid(4, 4);
    let texture = GlyphEncoder::new(config).encode(&outline).unwrap();
    // The rectangle only covers the bottom row of cells.
    for col in 0..4 {
        assert!(texture.header(0, col).unwrap().count > 0);
        assert_eq!(texture.header(3, col).unwrap().count, 0);
    }
    let top = decoded_records(&texture, 0, 3);
    assert!(top
        .iter()
        .any(|record| record.x == 1.0 && (record.y - 0.25).abs() <= 1.0 / 4095.0));
}

#[test]
fn endpoints_outside_supplied_square_overflow() {
    let outline = wide_rect();
    let em_box = BoundingSquare::new(Point::ORIGIN, 100.0);
    let err = GlyphEncoder::default()
        .encode_in(&outline, em_box)
        .unwrap_err();
    assert_eq!(err.glyph, GlyphId(5));
    assert!(matches!(
        err.source,
        EncodeError::CoordinateOverflow { value } if value == 2.0
    ));

    // A larger shared box is fine.
    let em_box = BoundingSquare::new(Point::new(-50.0, -50.0), 300.0);
    assert!(GlyphEncoder::default().encode_in(&outline, em_box).is_ok());
}

#[test]
fn contour_outside_supplied_square_overflows() {
    // No cell of the em box comes near the second contour.
    let mut arcs = rect_arcs(0.0, 0.0, 100.0, 100.0);
    arcs.extend(rect_arcs(1000.0, 1000.0, 1010.0, 1010.0));
    let outline = ArcOutline::new(GlyphId(6), arcs, 1000);
    let em_box = BoundingSquare::new(Point::ORIGIN, 100.0);
    let err = GlyphEncoder::default()
        .encode_in(&outline, em_box)
        .unwrap_err();
    assert_eq!(err.glyph, GlyphId(6));
    assert_eq!(err.source, EncodeError::CoordinateOverflow { value: 10.0 });
}

#[test]
fn infinite_curvature_does_not_pose_as_contour_start() {
    let mut outline = square(100.0);
    outline.arcs[1].d = f64::INFINITY;
    let err = GlyphEncoder::new(EncoderConfig::default().with_grid(2, 2))
        .encode(&outline)
        .unwrap_err();
    assert_eq!(
        err.source,
        EncodeError::DistanceOutOfRange {
            value: f64::INFINITY
        }
    );
}

#[test]
fn too_coarse_grid_is_reported() {
    // Many tiny squares all crowd into a single cell.
    let mut arcs = Vec::new();
    for i in 0..70 {
        let x = f64::from(i) * 2.0;
        arcs.extend(rect_arcs(x, 0.0, x + 1.0, 1.0));
    }
    let outline = ArcOutline::new(GlyphId(9), arcs, 1000);
    let err = GlyphEncoder::new(EncoderConfig::default().with_grid(1, 1))
        .encode(&outline)
        .unwrap_err();
    assert_eq!(err.source, EncodeError::TooManyArcsInCell { count: 350 });
}

#[test]
fn batch_reports_failures_per_glyph() {
    let empty = ArcOutline::new(GlyphId(8), Vec::new(), 1000);
    let outlines = [square(100.0), empty, ring()];
    let results = encode_glyphs(&outlines, EncoderConfig::default());
    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    let err = results[1].as_ref().unwrap_err();
    assert_eq!(err.glyph, GlyphId(8));
    assert_eq!(err.source, EncodeError::EmptyOutline);
    assert_eq!(
        results[2].as_ref().unwrap(),
        &GlyphEncoder::default().encode(&ring()).unwrap()
    );
}
