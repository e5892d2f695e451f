//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for socnet using clap's derive API.
//! Each command has its own argument struct with validation and helpful error messages.
//!
//! # Commands
//!
//! - `interactive`: Run the numbered menu (the default with no subcommand)
//! - `stats`: Show user and connection totals
//! - `centrality`: Show the best-connected users
//! - `path`: Find the shortest path between two users
//! - `components`: List connected components
//! - `recommend`: Suggest friends-of-friends for a user
//! - `export-dot`: Write the network as a Graphviz graph
//!
//! # Global Flags
//!
//! - `--file`: Network file to load (default: `network.txt`)
//! - `--json`: Output in JSON format (applies to query commands)
//!
//! # Example
//!
//! ```bash
//! socnet --file friends.txt stats
//! socnet path alice carol
//! socnet recommend alice --limit 3 --json
//! ```

mod args;
mod execute;
mod validators;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_NETWORK_FILE;

// Re-export argument structs
pub use args::{CentralityArgs, PathArgs, RecommendArgs};

// Re-export validators for external use
pub use validators::validate_user_id;

/// Socnet - explore a social network from an edge-list file
///
/// Each line of the network file names two friends separated by whitespace.
/// Lines with fewer than two names are ignored.
#[derive(Parser, Debug)]
#[command(name = "socnet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Network file to load
    #[arg(short, long, global = true, default_value = DEFAULT_NETWORK_FILE)]
    pub file: PathBuf,

    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the interactive menu
    ///
    /// Presents the numbered menu on the terminal. The network is loaded from
    /// within the menu, so `--file` is ignored here.
    Interactive,

    /// Show network statistics
    ///
    /// Displays the number of users and connections.
    Stats,

    /// Show degree centrality
    ///
    /// Lists users by number of connections, highest first.
    Centrality(CentralityArgs),

    /// Find the shortest path between two users
    ///
    /// Uses breadth-first search over friendships.
    Path(PathArgs),

    /// Show connected components
    ///
    /// Lists every group of mutually reachable users.
    Components,

    /// Get friend recommendations
    ///
    /// Suggests friends-of-friends ranked by mutual friend count.
    Recommend(RecommendArgs),

    /// Export the network in Graphviz DOT format
    ExportDot,
}

impl Cli {
    /// Parse CLI arguments from command line
    #[must_use]
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    ///
    /// # Errors
    ///
    /// Returns clap's error for invalid arguments.
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Execute the CLI command
    ///
    /// # Errors
    ///
    /// Returns an error if the network cannot be loaded or output fails.
    pub fn execute(&self) -> Result<()> {
        use crate::output::OutputMode;

        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        match &self.command {
            None | Some(Commands::Interactive) => execute::execute_interactive(),
            Some(Commands::Stats) => execute::execute_stats(&self.file, output_mode),
            Some(Commands::Centrality(args)) => {
                execute::execute_centrality(&self.file, args, output_mode)
            }
            Some(Commands::Path(args)) => execute::execute_path(&self.file, args, output_mode),
            Some(Commands::Components) => execute::execute_components(&self.file, output_mode),
            Some(Commands::Recommend(args)) => {
                execute::execute_recommend(&self.file, args, output_mode)
            }
            Some(Commands::ExportDot) => execute::execute_export_dot(&self.file),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_CENTRALITY_TOP, DEFAULT_MAX_RECOMMENDATIONS};

    #[test]
    fn test_no_subcommand_defaults() {
        let cli = Cli::try_parse_from(["socnet"]).unwrap();

        assert!(cli.command.is_none());
        assert_eq!(cli.file, PathBuf::from("network.txt"));
        assert!(!cli.json);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["socnet", "stats", "--file", "f.txt", "--json"]).unwrap();

        assert!(matches!(cli.command, Some(Commands::Stats)));
        assert_eq!(cli.file, PathBuf::from("f.txt"));
        assert!(cli.json);
    }

    #[test]
    fn test_centrality_default_top() {
        let cli = Cli::try_parse_from(["socnet", "centrality"]).unwrap();
        let Some(Commands::Centrality(args)) = cli.command else {
            panic!("expected centrality command");
        };
        assert_eq!(args.top, DEFAULT_CENTRALITY_TOP);
    }

    #[test]
    fn test_path_requires_two_users() {
        assert!(Cli::try_parse_from(["socnet", "path", "alice"]).is_err());

        let cli = Cli::try_parse_from(["socnet", "path", "alice", "carol"]).unwrap();
        let Some(Commands::Path(args)) = cli.command else {
            panic!("expected path command");
        };
        assert_eq!(args.source, "alice");
        assert_eq!(args.destination, "carol");
    }

    #[test]
    fn test_recommend_limit() {
        let cli = Cli::try_parse_from(["socnet", "recommend", "alice"]).unwrap();
        let Some(Commands::Recommend(args)) = cli.command else {
            panic!("expected recommend command");
        };
        assert_eq!(args.limit, DEFAULT_MAX_RECOMMENDATIONS);

        let cli = Cli::try_parse_from(["socnet", "recommend", "alice", "-n", "2"]).unwrap();
        let Some(Commands::Recommend(args)) = cli.command else {
            panic!("expected recommend command");
        };
        assert_eq!(args.limit, 2);
    }

    #[test]
    fn test_rejects_blank_user() {
        assert!(Cli::try_parse_from(["socnet", "recommend", "  "]).is_err());
        assert!(Cli::try_parse_from(["socnet", "path", "al ice", "bob"]).is_err());
    }

    #[test]
    fn test_export_dot_command_name() {
        let cli = Cli::try_parse_from(["socnet", "export-dot"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::ExportDot)));
    }
}
