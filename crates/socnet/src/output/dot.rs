//! Graphviz export.

use crate::graph::SocialGraph;
use petgraph::dot::{Config, Dot};
use std::io::{self, Write};

/// Write the network as an undirected Graphviz `graph`.
///
/// Each inserted edge becomes one DOT edge, so parallel friendships and
/// self-loops are drawn as many times as they were added.
pub fn write_dot<W: Write>(w: &mut W, graph: &SocialGraph) -> io::Result<()> {
    let labelled = graph.to_petgraph().map(|_, user| *user, |_, _| "");
    write!(w, "{}", Dot::with_config(&labelled, &[Config::EdgeNoLabel]))
}
