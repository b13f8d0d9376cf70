// Copyright 2026 the Arcfont Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arcfont command line encoder

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use arcfont_encoding::{
    encode_glyphs, ArcOutline, CellReference, EncoderConfig, GlyphId, GRID_SIZE,
    SUB_TEXTURE_WIDTH,
};
use clap::Parser;

mod arcs;
mod png_sink;

use png_sink::PngSink;

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = args.config();

    let outlines = args
        .inputs
        .iter()
        .enumerate()
        .map(|(idx, path)| -> Result<ArcOutline> {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let arcs =
                arcs::parse_arcs(&text).with_context(|| format!("parsing {}", path.display()))?;
            let glyph = GlyphId(idx.try_into()?);
            Ok(ArcOutline::new(glyph, arcs, args.units_per_em))
        })
        .collect::<Result<Vec<_>>>()?;

    std::fs::create_dir_all(&args.out_directory)?;
    let mut failed = 0;
    for (result, input) in encode_glyphs(&outlines, config).into_iter().zip(&args.inputs) {
        let texture = match result {
            Ok(texture) => texture,
            Err(err) => {
                eprintln!("{}: {err}: {}", input.display(), err.source);
                failed += 1;
                continue;
            }
        };
        let out_path = output_path(&args.out_directory, input);
        texture.upload_to(&mut PngSink {
            path: out_path.clone(),
        })?;
        let stats = texture.stats();
        let uniforms = texture.uniforms();
        println!(
            "Wrote {out_path:?}: {}x{} texels, {} endpoints in {} cells, {} bytes shared",
            texture.width(),
            texture.height(),
            stats.endpoints,
            stats.cells,
            stats.saved_bytes,
        );
        println!(
            "  uniforms: texture_width={} texture_height={} sub_row_width={}",
            uniforms.texture_width, uniforms.texture_height, uniforms.sub_row_width
        );
    }
    if failed > 0 {
        bail!("{failed} of {} glyphs failed to encode", outlines.len());
    }
    Ok(())
}

fn output_path(out_directory: &Path, input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or(input.as_os_str());
    out_directory.join(stem).with_extension("png")
}

#[derive(Parser, Debug)]
#[command(about, long_about = None, bin_name = "arcfont")]
struct Args {
    /// Arc list files, one glyph each
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
    /// Directory to store the textures into
    #[arg(long, short, default_value = ".")]
    out_directory: PathBuf,
    /// Number of grid cells along each axis
    #[arg(long, default_value_t = GRID_SIZE)]
    grid: u32,
    /// Width of the produced textures in texels
    #[arg(long, default_value_t = SUB_TEXTURE_WIDTH)]
    texture_width: u32,
    /// Design units per em of the source font
    #[arg(long, default_value_t = 1000)]
    units_per_em: u16,
    /// Measure cells from the sum of their corners, as older decoders expect
    #[arg(long)]
    corner_sum: bool,
}

impl Args {
    fn config(&self) -> EncoderConfig {
        EncoderConfig {
            texture_width: self.texture_width,
            cell_reference: if self.corner_sum {
                CellReference::CornerSum
            } else {
                CellReference::Center
            },
            ..EncoderConfig::default()
        }
        .with_grid(self.grid, self.grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_goes_next_to_stem() {
        let path = output_path(Path::new("out"), Path::new("glyphs/a.arcs"));
        assert_eq!(path, Path::new("out/a.png"));
    }

    #[test]
    fn arguments_build_config() {
        let args = Args::parse_from(["arcfont", "a.arcs", "--grid", "8", "--corner-sum"]);
        let config = args.config();
        assert_eq!((config.grid_x, config.grid_y), (8, 8));
        assert_eq!(config.cell_reference, CellReference::CornerSum);
        assert_eq!(config.texture_width, SUB_TEXTURE_WIDTH);
    }
}
