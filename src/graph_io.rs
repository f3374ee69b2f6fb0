//! Text-format graph loading and parent-array serialization
//!
//! Input is a whitespace-separated token stream: `vertexCount edgeCount`
//! followed by `edgeCount` pairs `u v`. Output is `vertexCount` followed by
//! one `vertexId parentId` line per vertex in id order.

use crate::graph::{FormatError, Graph};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Parse a graph from the token stream. Fails with [`FormatError`] when the
/// declared edge count does not match the stream length or an edge
/// references an out-of-range vertex id.
pub fn read_graph<R: BufRead>(mut reader: R) -> Result<Graph> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .context("reading graph input")?;
    let mut tokens = text.split_ascii_whitespace();

    let vertex_count = next_usize(&mut tokens, "vertex count")?;
    let declared = next_usize(&mut tokens, "edge count")?;

    let mut edges = Vec::with_capacity(declared);
    for i in 0..declared {
        let (u, v) = match (tokens.next(), tokens.next()) {
            (Some(u), Some(v)) => (u, v),
            _ => {
                return Err(FormatError::EdgeCountMismatch {
                    declared,
                    found: i,
                }
                .into())
            }
        };
        let u = u
            .parse::<usize>()
            .with_context(|| format!("invalid vertex id '{u}' in edge {i}"))?;
        let v = v
            .parse::<usize>()
            .with_context(|| format!("invalid vertex id '{v}' in edge {i}"))?;
        edges.push((u, v));
    }

    let trailing = tokens.count();
    if trailing > 0 {
        return Err(FormatError::EdgeCountMismatch {
            declared,
            found: declared + trailing.div_ceil(2),
        }
        .into());
    }

    Ok(Graph::load(vertex_count, &edges)?)
}

fn next_usize<'a>(tokens: &mut impl Iterator<Item = &'a str>, what: &str) -> Result<usize> {
    let token = tokens
        .next()
        .with_context(|| format!("missing {what} in graph input"))?;
    token
        .parse::<usize>()
        .with_context(|| format!("invalid {what} '{token}'"))
}

/// Serialize a parent array: vertex count, then `vertexId parentId` lines.
pub fn write_parent_array<W: Write>(mut writer: W, parent: &[usize]) -> Result<()> {
    writeln!(writer, "{}", parent.len())?;
    for (v, &p) in parent.iter().enumerate() {
        writeln!(writer, "{v} {p}")?;
    }
    writer.flush()?;
    Ok(())
}
