// Copyright 2026 the Arcfont Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Payload assembly with back references to identical record runs.

use crate::Texel;

/// Accumulates per-cell record runs into one payload, pointing cells with
/// identical runs at the same bytes.
///
/// Runs must be pushed in cell order; each lookup only sees what earlier cells
/// committed.
#[derive(Clone, Debug, Default)]
pub struct PayloadPacker {
    base: usize,
    payload: Vec<Texel>,
    saved_bytes: usize,
}

impl PayloadPacker {
    /// Creates an empty packer whose payload will be placed `base` texels
    /// into the texture.
    pub fn new(base: usize) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    /// Adds a cell's run and returns the texture offset the cell's header
    /// should point at.
    ///
    /// If the run already occurs anywhere in the committed payload the
    /// earliest occurrence is reused and nothing is appended.
    pub fn push(&mut self, run: &[Texel]) -> usize {
        if let Some(position) = self.find(run) {
            self.saved_bytes += size_of_val(run);
            log::trace!(
                "reusing {} records at payload position {position}",
                run.len()
            );
            return self.base + position;
        }
        let offset = self.base + self.payload.len();
        self.payload.extend_from_slice(run);
        offset
    }

    /// Position of the earliest committed copy of `run`.
    ///
    /// The first byte of the run is not compared: it holds the curvature of a
    /// contour start record, which decoders ignore.
    pub fn find(&self, run: &[Texel]) -> Option<usize> {
        if run.is_empty() || run.len() > self.payload.len() {
            return None;
        }
        let needle: &[u8] = bytemuck::cast_slice(run);
        let haystack: &[u8] = bytemuck::cast_slice(&self.payload);
        let texel = size_of::<Texel>();
        (0..=self.payload.len() - run.len()).find(|&position| {
            let start = position * texel;
            haystack[start + 1..start + needle.len()] == needle[1..]
        })
    }

    /// The committed payload.
    pub fn payload(&self) -> &[Texel] {
        &self.payload
    }

    /// Number of committed payload texels.
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Bytes not written thanks to reused runs.
    pub fn saved_bytes(&self) -> usize {
        self.saved_bytes
    }

    pub fn into_payload(self) -> Vec<Texel> {
        self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(r: u8, g: u8) -> Texel {
        Texel::new(r, g, g, g)
    }

    #[test]
    fn identical_run_is_reused() {
        let mut packer = PayloadPacker::new(4);
        let run = [t(0, 1), t(128, 2)];
        assert_eq!(packer.push(&run), 4);
        assert_eq!(packer.push(&[t(0, 9)]), 6);
        assert_eq!(packer.push(&run), 4);
        assert_eq!(packer.len(), 3);
        assert_eq!(packer.saved_bytes(), 8);
    }

    #[test]
    fn leading_curvature_byte_is_ignored() {
        let mut packer = PayloadPacker::new(0);
        packer.push(&[t(0, 1), t(128, 2), t(0, 3)]);
        // Matches the tail of the first run even though its first record
        // carries a curvature instead of the contour start marker.
        assert_eq!(packer.push(&[t(0, 2), t(0, 3)]), 1);
        // Any other byte must match exactly.
        assert_eq!(packer.push(&[t(0, 2), t(1, 3)]), 3);
    }

    #[test]
    fn match_may_span_runs() {
        let mut packer = PayloadPacker::new(0);
        packer.push(&[t(0, 1), t(128, 2)]);
        packer.push(&[t(0, 3), t(128, 4)]);
        assert_eq!(packer.find(&[t(0, 2), t(0, 3)]), Some(1));
    }

    #[test]
    fn earliest_match_wins() {
        let mut packer = PayloadPacker::new(10);
        packer.push(&[t(0, 5), t(1, 6), t(0, 5), t(1, 6)]);
        assert_eq!(packer.push(&[t(0, 5), t(1, 6)]), 10);
    }

    #[test]
    fn empty_run_points_at_end() {
        let mut packer = PayloadPacker::new(2);
        packer.push(&[t(0, 1)]);
        assert_eq!(packer.push(&[]), 3);
        assert_eq!(packer.len(), 1);
        assert_eq!(packer.saved_bytes(), 0);
    }

    #[test]
    fn run_longer_than_payload_is_committed() {
        let mut packer = PayloadPacker::new(0);
        packer.push(&[t(0, 1)]);
        assert_eq!(packer.push(&[t(0, 1), t(2, 2)]), 1);
        assert_eq!(packer.into_payload().len(), 3);
    }
}
