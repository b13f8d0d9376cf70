// Copyright 2026 the Arcfont Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The finished texture and the boundary it is handed across.

use bytemuck::{Pod, Zeroable};
use static_assertions::const_assert_eq;

use crate::{
    decode_header, EncodeError, EncodeStats, ListHeader, Result, Texel, SUB_TEXTURE_WIDTH,
    TEXTURE_HEIGHT, TEXTURE_WIDTH,
};

/// Uniform block the decoding shader needs to address a glyph texture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Zeroable, Pod)]
#[repr(C)]
pub struct ShaderUniforms {
    /// Width of the sampled texture in texels.
    pub texture_width: u32,
    /// Height of the sampled texture in texels.
    pub texture_height: u32,
    /// Number of texels per row when a linear offset is turned into texture
    /// coordinates.
    pub sub_row_width: u32,
    _padding: u32,
}

const_assert_eq!(size_of::<ShaderUniforms>(), 16);

impl ShaderUniforms {
    pub fn new(texture_width: u32, texture_height: u32, sub_row_width: u32) -> Self {
        Self {
            texture_width,
            texture_height,
            sub_row_width,
            _padding: 0,
        }
    }

    /// Uniforms for the shared atlas texture.
    pub fn for_atlas() -> Self {
        Self::new(TEXTURE_WIDTH, TEXTURE_HEIGHT, SUB_TEXTURE_WIDTH)
    }

    /// Column and row of the texel at linear `index`.
    pub fn texel_position(&self, index: usize) -> (u32, u32) {
        let width = self.sub_row_width.max(1) as usize;
        ((index % width) as u32, (index / width) as u32)
    }
}

/// Something that accepts finished glyph textures, typically by uploading
/// them to the GPU.
pub trait TextureSink {
    type Error;

    fn upload(&mut self, texture: &GlyphTexture, uniforms: &ShaderUniforms)
        -> Result<(), Self::Error>;
}

/// Folds `texels` into rows of `width`, padding the last row with zero
/// texels.
///
/// Returns the width, the height and the padded texels.
pub fn layout_texture(mut texels: Vec<Texel>, width: u32) -> Result<(u32, u32, Vec<Texel>)> {
    if width == 0 {
        return Err(EncodeError::InvalidTextureWidth);
    }
    let height = texels.len().div_ceil(width as usize);
    texels.resize(height * width as usize, Texel::ZERO);
    Ok((width, height as u32, texels))
}

/// An encoded glyph: list headers followed by the shared payload, folded into
/// a rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphTexture {
    width: u32,
    height: u32,
    grid_x: u32,
    grid_y: u32,
    texels: Vec<Texel>,
    stats: EncodeStats,
}

impl GlyphTexture {
    pub(crate) fn new(
        width: u32,
        height: u32,
        grid_x: u32,
        grid_y: u32,
        texels: Vec<Texel>,
        stats: EncodeStats,
    ) -> Self {
        Self {
            width,
            height,
            grid_x,
            grid_y,
            texels,
            stats,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// All `width * height` texels, padding included.
    pub fn texels(&self) -> &[Texel] {
        &self.texels
    }

    /// The texels as RGBA8 bytes, ready for upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.texels)
    }

    /// Number of list headers at the start of the texture.
    pub fn header_count(&self) -> usize {
        self.grid_x as usize * self.grid_y as usize
    }

    /// The list header of cell (`row`, `col`).
    pub fn header(&self, row: u32, col: u32) -> Option<ListHeader> {
        if row >= self.grid_y || col >= self.grid_x {
            return None;
        }
        let index = row as usize * self.grid_x as usize + col as usize;
        self.texels.get(index).copied().map(decode_header)
    }

    /// The endpoint records of cell (`row`, `col`).
    ///
    /// Returns `None` if the cell does not exist or its header points outside
    /// the payload.
    pub fn cell_records(&self, row: u32, col: u32) -> Option<&[Texel]> {
        let header = self.header(row, col)?;
        if header.count == 0 {
            return Some(&[]);
        }
        let payload_end = self.header_count() + self.stats.payload_texels;
        if header.offset < self.header_count() || header.offset + header.count > payload_end {
            return None;
        }
        self.texels.get(header.offset..header.offset + header.count)
    }

    /// The committed payload, without headers or padding.
    pub fn payload(&self) -> &[Texel] {
        let start = self.header_count();
        &self.texels[start..start + self.stats.payload_texels]
    }

    pub fn stats(&self) -> &EncodeStats {
        &self.stats
    }

    /// Uniforms for sampling this texture on its own.
    pub fn uniforms(&self) -> ShaderUniforms {
        ShaderUniforms::new(self.width, self.height, self.width)
    }

    /// Column and row of the texel at linear `index` in this texture.
    pub fn texel_position(&self, index: usize) -> (u32, u32) {
        self.uniforms().texel_position(index)
    }

    /// Hands the texture to `sink`.
    pub fn upload_to<S: TextureSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        sink.upload(self, &self.uniforms())
    }
}
