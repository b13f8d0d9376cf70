// Copyright 2026 the Arcfont Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plain text arc lists.
//!
//! One arc per line as `x0 y0 x1 y1 d`. Blank lines are skipped and `#`
//! starts a comment.

use anyhow::{bail, Context, Result};
use arcfont_encoding::kurbo::Point;
use arcfont_encoding::Arc;

pub(crate) fn parse_arcs(text: &str) -> Result<Vec<Arc>> {
    let mut arcs = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.split_once('#').map_or(line, |(content, _)| content);
        if line.trim().is_empty() {
            continue;
        }
        let values = line
            .split_whitespace()
            .map(str::parse::<f64>)
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("line {}: invalid number", idx + 1))?;
        let &[x0, y0, x1, y1, d] = values.as_slice() else {
            bail!("line {}: expected 5 values, found {}", idx + 1, values.len());
        };
        arcs.push(Arc::new(Point::new(x0, y0), Point::new(x1, y1), d));
    }
    Ok(arcs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_and_blank_lines() {
        let text = "# a triangle\n\n0 0 5 10 0\n5 10 10 0 0 # right edge\n  10 0 0 0 -0.25\n";
        let arcs = parse_arcs(text).unwrap();
        assert_eq!(arcs.len(), 3);
        assert_eq!(arcs[1].p1, Point::new(10.0, 0.0));
        assert_eq!(arcs[2].d, -0.25);
    }

    #[test]
    fn reports_offending_line() {
        let err = parse_arcs("0 0 1 1 0\n0 0 1 1\n").unwrap_err();
        assert_eq!(err.to_string(), "line 2: expected 5 values, found 4");
        let err = parse_arcs("0 0 one 1 0\n").unwrap_err();
        assert_eq!(err.to_string(), "line 1: invalid number");
    }
}
