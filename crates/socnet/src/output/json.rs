//! JSON documents for programmatic output.

use crate::algorithms::{DegreeEntry, Recommendation};
use crate::graph::{LoadSummary, SocialGraph};
use serde::Serialize;
use std::io::{self, Write};

/// Network totals.
#[derive(Debug, Serialize)]
pub struct StatisticsJson {
    /// Distinct users.
    pub users: usize,
    /// Edge insertions.
    pub connections: usize,
}

impl From<&SocialGraph> for StatisticsJson {
    fn from(graph: &SocialGraph) -> Self {
        Self {
            users: graph.user_count(),
            connections: graph.edge_count(),
        }
    }
}

/// Result of a load, with the totals it produced.
#[derive(Debug, Serialize)]
pub struct LoadJson<'a> {
    /// Path that was read.
    pub path: String,
    /// Line and edge counts for this load.
    #[serde(flatten)]
    pub summary: &'a LoadSummary,
    /// Totals after the load.
    pub network: StatisticsJson,
}

/// Degree table.
#[derive(Debug, Serialize)]
pub struct CentralityJson<'a> {
    /// Rows, highest degree first.
    pub entries: &'a [DegreeEntry<'a>],
}

/// Shortest path query and its answer.
#[derive(Debug, Serialize)]
pub struct PathJson<'a> {
    /// Start user.
    pub source: &'a str,
    /// End user.
    pub destination: &'a str,
    /// Number of edges on the path, absent when no path exists.
    pub length: Option<usize>,
    /// Users from source to destination; empty when no path exists.
    pub path: &'a [&'a str],
}

impl<'a> PathJson<'a> {
    /// Describe `path` between `source` and `destination`.
    #[must_use]
    pub fn new(source: &'a str, destination: &'a str, path: &'a [&'a str]) -> Self {
        Self {
            source,
            destination,
            length: path.len().checked_sub(1),
            path,
        }
    }
}

/// Connected components.
#[derive(Debug, Serialize)]
pub struct ComponentsJson<'a> {
    /// Number of components.
    pub count: usize,
    /// Members of each component in discovery order.
    pub components: &'a [Vec<&'a str>],
}

/// Recommendations for one user.
#[derive(Debug, Serialize)]
pub struct RecommendationsJson<'a> {
    /// Query user.
    pub user: &'a str,
    /// Ranked candidates.
    pub recommendations: &'a [Recommendation<'a>],
}

/// Write any serializable value as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize>(w: &mut W, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(w, "{json}")
}
