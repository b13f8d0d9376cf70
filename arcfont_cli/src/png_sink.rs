// Copyright 2026 the Arcfont Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Result;
use arcfont_encoding::{GlyphTexture, ShaderUniforms, TextureSink};

/// Writes each texture it receives to a PNG file.
pub(crate) struct PngSink {
    pub(crate) path: PathBuf,
}

impl TextureSink for PngSink {
    type Error = anyhow::Error;

    fn upload(&mut self, texture: &GlyphTexture, uniforms: &ShaderUniforms) -> Result<()> {
        let file = File::create(&self.path)?;
        let mut png_encoder =
            png::Encoder::new(BufWriter::new(file), texture.width(), texture.height());
        png_encoder.set_color(png::ColorType::Rgba);
        png_encoder.set_depth(png::BitDepth::Eight);
        let mut writer = png_encoder.write_header()?;
        writer.write_image_data(texture.as_bytes())?;
        writer.finish()?;
        log::info!(
            "wrote {}x{} texture (sub-row width {}) to {:?}",
            uniforms.texture_width,
            uniforms.texture_height,
            uniforms.sub_row_width,
            self.path
        );
        Ok(())
    }
}
