//! Unweighted shortest paths via breadth-first search.

use crate::graph::SocialGraph;
use std::collections::VecDeque;

/// Shortest path from `source` to `destination`, both ends included.
///
/// Returns `[source]` when both ends are the same user, and an empty path
/// when either user is unknown or the two are not connected.
///
/// Neighbors are explored in insertion order, so among several shortest
/// paths the one returned is decided by the order edges were added.
#[must_use]
pub fn shortest_path<'g>(graph: &'g SocialGraph, source: &str, destination: &str) -> Vec<&'g str> {
    let (Some(start), Some(goal)) = (graph.index_of(source), graph.index_of(destination)) else {
        tracing::debug!(source, destination, "Shortest path requested for unknown user");
        return Vec::new();
    };

    let n = graph.user_count();
    let mut visited = vec![false; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut queue = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            return reconstruct(graph, &parent, goal);
        }

        for &next in graph.neighbor_indices(current) {
            if !visited[next] {
                visited[next] = true;
                parent[next] = Some(current);
                queue.push_back(next);
            }
        }
    }

    tracing::debug!(source, destination, "No path between users");
    Vec::new()
}

/// Walk parent links back from `goal` and return the path in forward order.
fn reconstruct<'g>(graph: &'g SocialGraph, parent: &[Option<usize>], goal: usize) -> Vec<&'g str> {
    let mut path = vec![graph.user_at(goal)];
    let mut node = goal;
    while let Some(prev) = parent[node] {
        path.push(graph.user_at(prev));
        node = prev;
    }
    path.reverse();
    path
}
