// Copyright 2026 the Arcfont Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{ArcOutline, EncoderConfig, GlyphEncodeError, GlyphEncoder, GlyphTexture};

/// Encodes every outline independently, returning one result per outline in
/// input order.
///
/// A failing glyph does not affect the others. With the `multithreading`
/// feature the glyphs are spread over the rayon thread pool.
pub fn encode_glyphs(
    outlines: &[ArcOutline],
    config: EncoderConfig,
) -> Vec<Result<GlyphTexture, GlyphEncodeError>> {
    log::debug!("encoding {} glyphs", outlines.len());
    let encode = |encoder: &mut GlyphEncoder, outline: &ArcOutline| {
        let result = encoder.encode(outline);
        if let Err(err) = &result {
            log::warn!("{err}: {}", err.source);
        }
        result
    };

    #[cfg(feature = "multithreading")]
    {
        use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

        outlines
            .par_iter()
            .map_init(|| GlyphEncoder::new(config), encode)
            .collect()
    }

    #[cfg(not(feature = "multithreading"))]
    {
        let mut encoder = GlyphEncoder::new(config);
        outlines
            .iter()
            .map(|outline| encode(&mut encoder, outline))
            .collect()
    }
}
