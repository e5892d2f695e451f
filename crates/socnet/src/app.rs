//! Application session state.
//!
//! This module provides the `Session` struct that owns the loaded network
//! and remembers whether a load has succeeded. Both the interactive menu and
//! the one-shot subcommands run against a session instead of global state.
//!
//! # Example
//!
//! ```no_run
//! use socnet::app::Session;
//! use socnet::config::OutputConfig;
//!
//! let mut session = Session::new(OutputConfig::from_env());
//! session.load("network.txt")?;
//! println!("{} users", session.graph().user_count());
//! # Ok::<(), socnet::error::Error>(())
//! ```

use crate::config::OutputConfig;
use crate::error::Result;
use crate::graph::{LoadSummary, SocialGraph};
use std::path::{Path, PathBuf};

/// Application context for CLI and menu operations.
#[derive(Debug, Default)]
pub struct Session {
    /// The network built from every successful load so far
    graph: SocialGraph,

    /// Most recently loaded file, `None` until a load succeeds
    source: Option<PathBuf>,

    /// Output styling
    config: OutputConfig,
}

impl Session {
    /// Create a session with an empty network.
    #[must_use]
    pub fn new(config: OutputConfig) -> Self {
        Self {
            graph: SocialGraph::new(),
            source: None,
            config,
        }
    }

    /// Load edges from `path` into the session's network.
    ///
    /// Edges accumulate across loads. The session only counts as loaded once
    /// a load has succeeded.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<LoadSummary> {
        let path = path.as_ref();
        let summary = self.graph.load_from_file(path)?;
        self.source = Some(path.to_path_buf());
        Ok(summary)
    }

    /// Whether any load has succeeded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.source.is_some()
    }

    /// Get an immutable reference to the network.
    #[must_use]
    pub fn graph(&self) -> &SocialGraph {
        &self.graph
    }

    /// Path of the most recent successful load.
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Output styling for this session.
    #[must_use]
    pub fn config(&self) -> &OutputConfig {
        &self.config
    }
}
