//! CLI argument structs for the query commands.

use clap::Parser;

use super::validators::validate_user_id;
use crate::config::{DEFAULT_CENTRALITY_TOP, DEFAULT_MAX_RECOMMENDATIONS};

/// Arguments for the `centrality` command
#[derive(Parser, Debug, Clone)]
pub struct CentralityArgs {
    /// Number of users to show
    #[arg(short = 'n', long, default_value_t = DEFAULT_CENTRALITY_TOP)]
    pub top: usize,
}

/// Arguments for the `path` command
#[derive(Parser, Debug, Clone)]
pub struct PathArgs {
    /// User to start from
    #[arg(value_parser = validate_user_id)]
    pub source: String,

    /// User to reach
    #[arg(value_parser = validate_user_id)]
    pub destination: String,
}

/// Arguments for the `recommend` command
#[derive(Parser, Debug, Clone)]
pub struct RecommendArgs {
    /// User to recommend friends for
    #[arg(value_parser = validate_user_id)]
    pub user: String,

    /// Maximum number of recommendations
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_RECOMMENDATIONS)]
    pub limit: usize,
}
