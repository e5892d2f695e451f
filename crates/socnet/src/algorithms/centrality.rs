//! Degree centrality.

use crate::graph::SocialGraph;
use serde::Serialize;
use std::collections::BTreeMap;

/// A user paired with its degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DegreeEntry<'a> {
    /// User id.
    pub user: &'a str,
    /// Number of neighbor entries, duplicates included.
    pub degree: usize,
}

/// Degree of every user, keyed by user id.
///
/// Degree is the raw neighbor-list length, so parallel edges count once per
/// insertion and a self-loop counts twice.
#[must_use]
pub fn degree_centrality(graph: &SocialGraph) -> BTreeMap<&str, usize> {
    graph
        .users()
        .map(|user| (user, graph.degree(user)))
        .collect()
}

/// The `limit` best-connected users, highest degree first.
///
/// Equal degrees are ordered by ascending user id.
#[must_use]
pub fn top_by_degree(graph: &SocialGraph, limit: usize) -> Vec<DegreeEntry<'_>> {
    let mut entries: Vec<DegreeEntry<'_>> = degree_centrality(graph)
        .into_iter()
        .map(|(user, degree)| DegreeEntry { user, degree })
        .collect();

    // BTreeMap already yields ascending ids; a stable sort keeps that for ties
    entries.sort_by(|a, b| b.degree.cmp(&a.degree));
    entries.truncate(limit);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::test_support::graph_from;

    #[test]
    fn test_degree_centrality_counts_neighbors() {
        let graph = graph_from(&[("alice", "bob"), ("bob", "carol"), ("alice", "dave")]);
        let centrality = degree_centrality(&graph);

        assert_eq!(centrality.len(), 4);
        assert_eq!(centrality["alice"], 2);
        assert_eq!(centrality["bob"], 2);
        assert_eq!(centrality["carol"], 1);
        assert_eq!(centrality["dave"], 1);
    }

    #[test]
    fn test_duplicate_edges_inflate_degree() {
        let graph = graph_from(&[("a", "b"), ("a", "b"), ("a", "a")]);
        let centrality = degree_centrality(&graph);

        assert_eq!(centrality["a"], 4);
        assert_eq!(centrality["b"], 2);
    }

    #[test]
    fn test_empty_graph_has_no_entries() {
        assert!(degree_centrality(&SocialGraph::new()).is_empty());
    }

    #[test]
    fn test_top_by_degree_orders_and_truncates() {
        let graph = graph_from(&[
            ("hub", "a"),
            ("hub", "b"),
            ("hub", "c"),
            ("b", "c"),
            ("a", "d"),
        ]);

        let top = top_by_degree(&graph, 3);

        assert_eq!(
            top,
            [
                DegreeEntry { user: "hub", degree: 3 },
                DegreeEntry { user: "a", degree: 2 },
                DegreeEntry { user: "b", degree: 2 },
            ]
        );
    }

    #[test]
    fn test_top_by_degree_limit_larger_than_graph() {
        let graph = graph_from(&[("a", "b")]);
        assert_eq!(top_by_degree(&graph, 10).len(), 2);
    }
}
