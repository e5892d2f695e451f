//! Configuration for socnet.
//!
//! Defaults for the menu and subcommands live here as constants; output
//! styling is read from the environment.

use std::env;

pub use crate::algorithms::DEFAULT_MAX_RECOMMENDATIONS;

/// Network file used when no path is given.
pub const DEFAULT_NETWORK_FILE: &str = "network.txt";

/// Number of rows in the degree centrality table.
pub const DEFAULT_CENTRALITY_TOP: usize = 10;

/// Configuration for output formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create a new `OutputConfig` with explicit values.
    #[must_use]
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Create an `OutputConfig` by reading from environment variables.
    ///
    /// Reads:
    /// - `NO_COLOR`: Standard env var to disable colors (any value disables colors)
    /// - `SOCNET_COLOR`: Set to "0" or "false" to disable colors, "1" or "true" to keep them
    #[must_use]
    pub fn from_env() -> Self {
        // Respect NO_COLOR standard (https://no-color.org/)
        if env::var_os("NO_COLOR").is_some() {
            return Self { use_colors: false };
        }

        let use_colors = match env::var("SOCNET_COLOR") {
            Ok(v) if v == "0" || v.eq_ignore_ascii_case("false") => false,
            Ok(v) if v == "1" || v.eq_ignore_ascii_case("true") || v.is_empty() => true,
            Ok(v) => {
                tracing::warn!(
                    env_var = "SOCNET_COLOR",
                    value = %v,
                    "Invalid value (expected '1', 'true', '0', or 'false'), using default"
                );
                true
            }
            Err(_) => true,
        };

        Self { use_colors }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { use_colors: true }
    }
}
