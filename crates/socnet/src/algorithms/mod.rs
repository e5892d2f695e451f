//! Graph analyses over a [`SocialGraph`](crate::graph::SocialGraph).
//!
//! Every function here borrows the graph immutably and returns a derived
//! result. Queries about unknown users return empty results rather than
//! errors, so "no such user" and "nothing found" look the same to callers.

pub mod centrality;
pub mod components;
pub mod path;
pub mod recommend;

pub use centrality::{degree_centrality, top_by_degree, DegreeEntry};
pub use components::connected_components;
pub use path::shortest_path;
pub use recommend::{
    recommend_friends, recommend_scored, Recommendation, DEFAULT_MAX_RECOMMENDATIONS,
};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::graph::SocialGraph;

    /// Build a graph from `(user1, user2)` pairs.
    pub fn graph_from(edges: &[(&str, &str)]) -> SocialGraph {
        let mut graph = SocialGraph::new();
        for (a, b) in edges {
            graph.add_edge(a, b);
        }
        graph
    }
}
