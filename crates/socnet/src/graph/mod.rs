//! Undirected friendship graph with insertion-ordered adjacency lists.
//!
//! Users are interned to dense indices on first appearance. Each user owns a
//! neighbor list that records every edge endpoint in the order edges were
//! inserted, so parallel edges and self-loops show up as repeated entries.
//!
//! # Iteration order
//!
//! [`SocialGraph::users`] yields users in order of first appearance as an edge
//! endpoint. Component discovery and every other whole-graph traversal walk
//! users in that order, which makes their output reproducible for a given
//! input file.

mod loader;

pub use loader::{parse_edge_line, LoadSummary};

use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;

/// In-memory social network.
///
/// The graph only grows: edges can be added one at a time or bulk-loaded
/// from an edge-list file, but nothing is ever removed.
#[derive(Debug, Clone, Default)]
pub struct SocialGraph {
    /// User ids in order of first appearance.
    users: Vec<String>,

    /// Reverse lookup: user id -> index
    user_index: HashMap<String, usize>,

    /// `adjacency[u]` lists neighbors of `u` in insertion order, duplicates kept.
    adjacency: Vec<Vec<usize>>,

    /// Every inserted edge, in insertion order.
    edges: Vec<(usize, usize)>,
}

impl SocialGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an undirected friendship between `user1` and `user2`.
    ///
    /// Appends `user2` to `user1`'s neighbors and `user1` to `user2`'s
    /// neighbors. There is no validation: repeating an edge adds duplicate
    /// entries, and a self-loop lists the user as its own neighbor twice.
    pub fn add_edge(&mut self, user1: &str, user2: &str) {
        let a = self.intern(user1);
        let b = self.intern(user2);
        self.adjacency[a].push(b);
        self.adjacency[b].push(a);
        self.edges.push((a, b));
    }

    /// Neighbors of `user` in insertion order, or an empty list if unknown.
    #[must_use]
    pub fn neighbors(&self, user: &str) -> Vec<&str> {
        self.index_of(user)
            .map(|idx| {
                self.adjacency[idx]
                    .iter()
                    .map(|&n| self.users[n].as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Length of `user`'s neighbor list, counting duplicates. Zero if unknown.
    #[must_use]
    pub fn degree(&self, user: &str) -> usize {
        self.index_of(user).map_or(0, |idx| self.adjacency[idx].len())
    }

    /// All users, in order of first appearance.
    pub fn users(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.users.iter().map(String::as_str)
    }

    /// All inserted edges as `(user1, user2)` pairs, in insertion order.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = (&str, &str)> + '_ {
        self.edges
            .iter()
            .map(|&(a, b)| (self.users[a].as_str(), self.users[b].as_str()))
    }

    /// Number of distinct users.
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Number of edge insertions, duplicates and self-loops included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether `user` appears as an endpoint of any edge.
    #[must_use]
    pub fn has_user(&self, user: &str) -> bool {
        self.user_index.contains_key(user)
    }

    /// Whether the graph has no users.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Build a petgraph view of the network.
    ///
    /// Node indices match [`SocialGraph::users`] order and every inserted
    /// edge (parallel edges and self-loops included) becomes one petgraph
    /// edge.
    #[must_use]
    pub fn to_petgraph(&self) -> UnGraph<&str, ()> {
        let mut graph = UnGraph::with_capacity(self.users.len(), self.edges.len());
        for user in &self.users {
            graph.add_node(user.as_str());
        }
        for &(a, b) in &self.edges {
            graph.add_edge(NodeIndex::new(a), NodeIndex::new(b), ());
        }
        graph
    }

    /// Get or assign the index for `user`.
    fn intern(&mut self, user: &str) -> usize {
        if let Some(&idx) = self.user_index.get(user) {
            return idx;
        }
        let idx = self.users.len();
        self.users.push(user.to_string());
        self.user_index.insert(user.to_string(), idx);
        self.adjacency.push(Vec::new());
        idx
    }
}

// Index-level access for the algorithms module
impl SocialGraph {
    pub(crate) fn index_of(&self, user: &str) -> Option<usize> {
        self.user_index.get(user).copied()
    }

    pub(crate) fn user_at(&self, idx: usize) -> &str {
        &self.users[idx]
    }

    pub(crate) fn neighbor_indices(&self, idx: usize) -> &[usize] {
        self.adjacency.get(idx).map_or(&[], Vec::as_slice)
    }
}
