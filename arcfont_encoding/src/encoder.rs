// Copyright 2026 the Arcfont Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{
    encode_arc_list, encode_header, layout_texture, validate_arc, ArcOutline, BoundingSquare,
    EncodeError, EncoderConfig, GlyphEncodeError, GlyphTexture, NearestArcs, PayloadPacker, Result,
    Texel,
};

/// Counters gathered while encoding one glyph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EncodeStats {
    /// Number of grid cells.
    pub cells: usize,
    /// Endpoint records referenced by all cells, before deduplication.
    pub endpoints: usize,
    /// Endpoint records actually stored.
    pub payload_texels: usize,
    /// Bytes saved by pointing cells at existing records.
    pub saved_bytes: usize,
}

/// Encodes glyph outlines into grid-indexed arc list textures.
///
/// An encoder can be reused across glyphs; it only keeps scratch storage
/// between calls.
#[derive(Clone, Debug, Default)]
pub struct GlyphEncoder {
    config: EncoderConfig,
    list: Vec<Texel>,
}

impl GlyphEncoder {
    pub fn new(config: EncoderConfig) -> Self {
        Self {
            config,
            list: Vec::new(),
        }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encodes `outline` against its own bounding square.
    pub fn encode(&mut self, outline: &ArcOutline) -> Result<GlyphTexture, GlyphEncodeError> {
        let square = BoundingSquare::from_arcs(&outline.arcs).map_err(|source| GlyphEncodeError {
            glyph: outline.glyph,
            source,
        })?;
        self.encode_in(outline, square)
    }

    /// Encodes `outline` against a caller-supplied square, such as an em box
    /// shared by a whole font.
    ///
    /// Fails with [`EncodeError::CoordinateOverflow`] if any arc endpoint lies
    /// outside `square`, and with [`EncodeError::DistanceOutOfRange`] if any
    /// arc's curvature is not finite or too large.
    pub fn encode_in(
        &mut self,
        outline: &ArcOutline,
        square: BoundingSquare,
    ) -> Result<GlyphTexture, GlyphEncodeError> {
        self.encode_cells(outline, square)
            .map_err(|source| GlyphEncodeError {
                glyph: outline.glyph,
                source,
            })
    }

    fn encode_cells(&mut self, outline: &ArcOutline, square: BoundingSquare) -> Result<GlyphTexture> {
        if outline.is_empty() {
            return Err(EncodeError::EmptyOutline);
        }
        let EncoderConfig {
            grid_x,
            grid_y,
            texture_width,
            ..
        } = self.config;
        if texture_width == 0 {
            return Err(EncodeError::InvalidTextureWidth);
        }
        for arc in &outline.arcs {
            validate_arc(arc, &square)?;
        }
        let nearest = NearestArcs::new(&outline.arcs, square.size, &self.config)?;
        let header_count = self.config.header_count();
        let mut headers = Vec::with_capacity(header_count);
        let mut packer = PayloadPacker::new(header_count);
        let mut endpoints = 0;

        for row in 0..grid_y {
            for col in 0..grid_x {
                let (p0, p1) = square.cell(row, col, grid_x, grid_y);
                let cell = nearest.cell(p0, p1);
                self.list.clear();
                encode_arc_list(&cell.near_arcs, &square, &mut self.list)?;
                let count = self.list.len();
                let offset = packer.push(&self.list);
                headers.push(encode_header(offset, count, cell.inside_glyph)?);
                endpoints += count;
            }
        }

        let stats = EncodeStats {
            cells: header_count,
            endpoints,
            payload_texels: packer.len(),
            saved_bytes: packer.saved_bytes(),
        };
        headers.extend_from_slice(packer.payload());
        let (width, height, texels) = layout_texture(headers, texture_width)?;
        log::debug!(
            "encoded glyph {}: {} cells, {} endpoints, {} payload texels, {} bytes saved, {width}x{height} texture",
            outline.glyph,
            stats.cells,
            stats.endpoints,
            stats.payload_texels,
            stats.saved_bytes,
        );
        Ok(GlyphTexture::new(width, height, grid_x, grid_y, texels, stats))
    }
}
