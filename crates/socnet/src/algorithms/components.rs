//! Connected components via depth-first search.

use crate::graph::SocialGraph;

/// Partition every user into connected components.
///
/// Components are discovered by walking users in first-appearance order and
/// running a depth-first search from each one not yet seen. Members of a
/// component are listed in DFS pre-order, following neighbor insertion
/// order, so the result matches a recursive traversal exactly.
///
/// The search keeps its own stack of `(node, next neighbor)` frames, so very
/// deep components cannot overflow the call stack.
#[must_use]
pub fn connected_components(graph: &SocialGraph) -> Vec<Vec<&str>> {
    let n = graph.user_count();
    let mut visited = vec![false; n];
    let mut components = Vec::new();
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..n {
        if visited[root] {
            continue;
        }

        let mut component = vec![graph.user_at(root)];
        visited[root] = true;
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let (node, cursor) = *frame;
            match graph.neighbor_indices(node).get(cursor) {
                Some(&next) => {
                    frame.1 += 1;
                    if !visited[next] {
                        visited[next] = true;
                        component.push(graph.user_at(next));
                        stack.push((next, 0));
                    }
                }
                None => {
                    stack.pop();
                }
            }
        }

        components.push(component);
    }

    tracing::debug!(
        users = n,
        components = components.len(),
        "Computed connected components"
    );
    components
}
