//! Edge-list loading.
//!
//! The network file holds one friendship per line as two whitespace-separated
//! user ids. Anything after the second token is ignored, and lines with fewer
//! than two tokens are skipped without error.

use super::SocialGraph;
use crate::error::{Error, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Outcome of a successful load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    /// Lines read from the source, including skipped ones.
    pub lines_read: usize,
    /// Edges inserted into the graph.
    pub edges_added: usize,
}

/// Split a line into an edge, or `None` if it has fewer than two tokens.
#[must_use]
pub fn parse_edge_line(line: &str) -> Option<(&str, &str)> {
    let mut tokens = line.split_whitespace();
    Some((tokens.next()?, tokens.next()?))
}

impl SocialGraph {
    /// Build a new graph from an edge-list file.
    ///
    /// # Errors
    ///
    /// See [`SocialGraph::load_from_file`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let mut graph = Self::new();
        graph.load_from_file(path)?;
        Ok(graph)
    }

    /// Append every edge in the file at `path` to this graph.
    ///
    /// Loading does not clear the graph first, so loading two files yields
    /// their union.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Open`] if the file cannot be opened and
    /// [`Error::Read`] if the OS reports a failure partway through. Edges
    /// read before a failure stay in the graph.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<LoadSummary> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let summary = self
            .load_from_reader(BufReader::new(file))
            .map_err(|source| Error::Read {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::info!(
            path = %path.display(),
            lines = summary.lines_read,
            edges = summary.edges_added,
            users = self.user_count(),
            "Loaded network"
        );
        Ok(summary)
    }

    /// Append every edge read from `reader` to this graph.
    ///
    /// Lines are decoded lossily, so stray non-UTF-8 bytes never abort a
    /// load.
    ///
    /// # Errors
    ///
    /// Propagates IO errors from the underlying reader.
    pub fn load_from_reader<R: BufRead>(&mut self, mut reader: R) -> io::Result<LoadSummary> {
        let mut summary = LoadSummary::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            summary.lines_read += 1;

            let line = String::from_utf8_lossy(&buf);
            match parse_edge_line(&line) {
                Some((user1, user2)) => {
                    self.add_edge(user1, user2);
                    summary.edges_added += 1;
                }
                None => {
                    tracing::debug!(line_number = summary.lines_read, "Skipping malformed line");
                }
            }
        }

        Ok(summary)
    }
}
