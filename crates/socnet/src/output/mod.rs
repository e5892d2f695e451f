//! Output formatting for CLI commands and the interactive menu.
//!
//! Every renderer writes to a caller-supplied [`Write`] so the same code
//! drives stdout in the CLI and in-memory buffers in tests.
//!
//! Submodules:
//! - [`color`]: Color and styling helpers
//! - [`dot`]: Graphviz export
//! - [`json`]: JSON documents for programmatic output

pub mod color;
pub mod dot;
pub mod json;

use crate::algorithms::{DegreeEntry, Recommendation};
use crate::config::OutputConfig;
use crate::graph::{LoadSummary, SocialGraph};
use std::io::{self, Write};
use std::path::Path;

pub use color::{error, success, warning};

use color::{bold, colorize_user, dimmed};

/// Width of the user column in the centrality table.
const USER_COLUMN_WIDTH: usize = 20;

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text format
    Text,
    /// JSON format for programmatic use
    Json,
}

/// Report a completed load.
pub fn write_load_summary<W: Write>(
    w: &mut W,
    path: &Path,
    summary: &LoadSummary,
    config: &OutputConfig,
) -> io::Result<()> {
    let msg = format!("Network loaded successfully from {}!", path.display());
    writeln!(w, "{}", success(&msg, config))?;
    writeln!(
        w,
        "{}",
        dimmed(
            &format!(
                "Read {} line(s), added {} connection(s)",
                summary.lines_read, summary.edges_added
            ),
            config
        )
    )
}

/// Print user and connection totals.
pub fn write_statistics<W: Write>(
    w: &mut W,
    graph: &SocialGraph,
    config: &OutputConfig,
) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "{}", bold("--- Network Statistics ---", config))?;
    writeln!(w, "Total Users: {}", graph.user_count())?;
    writeln!(w, "Total Connections: {}", graph.edge_count())
}

/// Print a degree table, one row per entry.
pub fn write_centrality<W: Write>(
    w: &mut W,
    entries: &[DegreeEntry<'_>],
    limit: usize,
    config: &OutputConfig,
) -> io::Result<()> {
    writeln!(w)?;
    writeln!(
        w,
        "{}",
        bold(&format!("--- Degree Centrality (Top {limit}) ---"), config)
    )?;
    writeln!(w, "{:<USER_COLUMN_WIDTH$}Connections", "User")?;
    writeln!(w, "{}", "-".repeat(USER_COLUMN_WIDTH + 15))?;

    for entry in entries {
        // Pad before styling so escape codes do not count toward the width
        let padded = format!("{:<USER_COLUMN_WIDTH$}", entry.user);
        writeln!(w, "{}{}", colorize_user(&padded, config), entry.degree)?;
    }
    Ok(())
}

/// Print a path as `a -> b -> c`, or a not-found message if it is empty.
pub fn write_path<W: Write>(
    w: &mut W,
    source: &str,
    destination: &str,
    path: &[&str],
    config: &OutputConfig,
) -> io::Result<()> {
    if path.is_empty() {
        let msg = format!("No path found between {source} and {destination}");
        return writeln!(w, "{}", warning(&msg, config));
    }

    writeln!(w)?;
    writeln!(
        w,
        "{}",
        bold(&format!("Shortest Path (Length: {}):", path.len() - 1), config)
    )?;
    let arrow = format!(" {} ", dimmed("->", config));
    let joined: Vec<String> = path.iter().map(|u| colorize_user(u, config)).collect();
    writeln!(w, "{}", joined.join(&arrow))
}

/// Print every component with its size and members.
pub fn write_components<W: Write>(
    w: &mut W,
    components: &[Vec<&str>],
    config: &OutputConfig,
) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "{}", bold("--- Connected Components ---", config))?;
    writeln!(w, "Total Components: {}", components.len())?;
    writeln!(w)?;

    for (i, component) in components.iter().enumerate() {
        writeln!(w, "Component {} (Size: {}):", i + 1, component.len())?;
        for user in component {
            writeln!(w, "  - {}", colorize_user(user, config))?;
        }
        writeln!(w)?;
    }
    Ok(())
}

/// Print a numbered recommendation list.
pub fn write_recommendations<W: Write>(
    w: &mut W,
    user: &str,
    recommendations: &[Recommendation<'_>],
    config: &OutputConfig,
) -> io::Result<()> {
    if recommendations.is_empty() {
        let msg = format!("No recommendations available for {user}");
        return writeln!(w, "{}", warning(&msg, config));
    }

    writeln!(w)?;
    writeln!(
        w,
        "{}",
        bold(&format!("--- Friend Recommendations for {user} ---"), config)
    )?;
    for (i, rec) in recommendations.iter().enumerate() {
        let mutual = match rec.mutual_friends {
            1 => "(1 mutual friend)".to_string(),
            n => format!("({n} mutual friends)"),
        };
        writeln!(
            w,
            "{}. {} {}",
            i + 1,
            colorize_user(rec.user, config),
            dimmed(&mutual, config)
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{connected_components, recommend_scored, top_by_degree};

    fn plain() -> OutputConfig {
        OutputConfig::new(false)
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn sample() -> SocialGraph {
        let mut g = SocialGraph::new();
        g.add_edge("alice", "bob");
        g.add_edge("bob", "carol");
        g.add_edge("alice", "dave");
        g
    }

    #[test]
    fn test_write_statistics() {
        let g = sample();
        let out = render(|w| write_statistics(w, &g, &plain()));

        assert!(out.contains("Total Users: 4"));
        assert!(out.contains("Total Connections: 3"));
    }

    #[test]
    fn test_write_centrality_aligns_columns() {
        let g = sample();
        let entries = top_by_degree(&g, 10);
        let out = render(|w| write_centrality(w, &entries, 10, &plain()));

        assert!(out.contains("--- Degree Centrality (Top 10) ---"));
        assert!(out.contains(&format!("{:<20}2", "alice")));
        assert!(out.contains(&format!("{:<20}1", "dave")));
    }

    #[test]
    fn test_write_path_joins_with_arrows() {
        let out = render(|w| write_path(w, "alice", "carol", &["alice", "bob", "carol"], &plain()));

        assert!(out.contains("Shortest Path (Length: 2):"));
        assert!(out.contains("alice -> bob -> carol"));
    }

    #[test]
    fn test_write_path_empty() {
        let out = render(|w| write_path(w, "alice", "zoe", &[], &plain()));
        assert_eq!(out, "No path found between alice and zoe\n");
    }

    #[test]
    fn test_write_components() {
        let g = sample();
        let components = connected_components(&g);
        let out = render(|w| write_components(w, &components, &plain()));

        assert!(out.contains("Total Components: 1"));
        assert!(out.contains("Component 1 (Size: 4):"));
        assert!(out.contains("  - dave"));
    }

    #[test]
    fn test_write_recommendations() {
        let g = sample();
        let recs = recommend_scored(&g, "alice", 5);
        let out = render(|w| write_recommendations(w, "alice", &recs, &plain()));

        assert!(out.contains("--- Friend Recommendations for alice ---"));
        assert!(out.contains("1. carol (1 mutual friend)"));
    }

    #[test]
    fn test_write_recommendations_empty() {
        let out = render(|w| write_recommendations(w, "zoe", &[], &plain()));
        assert_eq!(out, "No recommendations available for zoe\n");
    }
}
