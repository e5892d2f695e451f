//! Friend-of-friend recommendations ranked by mutual friends.

use crate::graph::SocialGraph;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Number of recommendations returned when the caller does not ask for a
/// specific amount.
pub const DEFAULT_MAX_RECOMMENDATIONS: usize = 5;

/// A recommended user and how many friends they share with the query user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation<'a> {
    /// Candidate user id.
    pub user: &'a str,
    /// Mutual friend count.
    pub mutual_friends: usize,
}

/// Rank friends-of-friends of `user` by mutual friend count.
///
/// Candidates are never `user` itself or one of its direct friends. Each
/// distinct direct friend contributes one count per entry in its own
/// neighbor list, so a duplicated edge between a friend and a candidate
/// counts twice. Results are ordered by descending count, then by ascending
/// user id, and truncated to `max_recommendations`.
///
/// Unknown users get an empty list.
#[must_use]
pub fn recommend_scored<'g>(
    graph: &'g SocialGraph,
    user: &str,
    max_recommendations: usize,
) -> Vec<Recommendation<'g>> {
    let Some(me) = graph.index_of(user) else {
        tracing::debug!(user, "Recommendations requested for unknown user");
        return Vec::new();
    };

    let mut direct = HashSet::new();
    let friends: Vec<usize> = graph
        .neighbor_indices(me)
        .iter()
        .copied()
        .filter(|&f| direct.insert(f))
        .collect();

    let mut mutual: HashMap<usize, usize> = HashMap::new();
    for &friend in &friends {
        for &candidate in graph.neighbor_indices(friend) {
            if candidate != me && !direct.contains(&candidate) {
                *mutual.entry(candidate).or_insert(0) += 1;
            }
        }
    }

    let mut ranked: Vec<Recommendation<'g>> = mutual
        .into_iter()
        .map(|(idx, mutual_friends)| Recommendation {
            user: graph.user_at(idx),
            mutual_friends,
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.mutual_friends
            .cmp(&a.mutual_friends)
            .then_with(|| a.user.cmp(b.user))
    });
    ranked.truncate(max_recommendations);
    ranked
}

/// Recommended user ids for `user`, best first.
///
/// See [`recommend_scored`] for ranking rules.
#[must_use]
pub fn recommend_friends<'g>(
    graph: &'g SocialGraph,
    user: &str,
    max_recommendations: usize,
) -> Vec<&'g str> {
    recommend_scored(graph, user, max_recommendations)
        .into_iter()
        .map(|r| r.user)
        .collect()
}
