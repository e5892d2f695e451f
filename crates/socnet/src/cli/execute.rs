//! Command execution logic.
//!
//! This module contains the implementation of all CLI commands. Query
//! commands load the network file fresh on every invocation.

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;

use super::args::{CentralityArgs, PathArgs, RecommendArgs};
use crate::algorithms::{connected_components, recommend_scored, shortest_path, top_by_degree};
use crate::app::Session;
use crate::config::OutputConfig;
use crate::graph::SocialGraph;
use crate::output::json::{
    write_json, CentralityJson, ComponentsJson, LoadJson, PathJson, RecommendationsJson,
    StatisticsJson,
};
use crate::output::{self, OutputMode};

/// Load the network for a one-shot query.
fn load_network(path: &Path) -> Result<SocialGraph> {
    SocialGraph::from_file(path)
        .with_context(|| format!("Could not load network from {}", path.display()))
}

/// Execute the interactive menu on stdin/stdout
pub fn execute_interactive() -> Result<()> {
    let mut session = Session::new(OutputConfig::from_env());
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    crate::interactive::run(&mut session, stdin.lock(), &mut handle)?;
    Ok(())
}

/// Execute the stats command
///
/// Reports what the load read alongside the resulting totals.
pub fn execute_stats(file: &Path, output_mode: OutputMode) -> Result<()> {
    let mut graph = SocialGraph::new();
    let summary = graph
        .load_from_file(file)
        .with_context(|| format!("Could not load network from {}", file.display()))?;
    let mut out = io::stdout().lock();

    match output_mode {
        OutputMode::Json => write_json(
            &mut out,
            &LoadJson {
                path: file.display().to_string(),
                summary: &summary,
                network: StatisticsJson::from(&graph),
            },
        )?,
        OutputMode::Text => {
            let config = OutputConfig::from_env();
            output::write_load_summary(&mut out, file, &summary, &config)?;
            output::write_statistics(&mut out, &graph, &config)?;
        }
    }
    Ok(())
}

/// Execute the centrality command
pub fn execute_centrality(file: &Path, args: &CentralityArgs, output_mode: OutputMode) -> Result<()> {
    let graph = load_network(file)?;
    let entries = top_by_degree(&graph, args.top);
    let mut out = io::stdout().lock();

    match output_mode {
        OutputMode::Json => write_json(&mut out, &CentralityJson { entries: &entries })?,
        OutputMode::Text => {
            output::write_centrality(&mut out, &entries, args.top, &OutputConfig::from_env())?;
        }
    }
    Ok(())
}

/// Execute the path command
pub fn execute_path(file: &Path, args: &PathArgs, output_mode: OutputMode) -> Result<()> {
    let graph = load_network(file)?;
    let path = shortest_path(&graph, &args.source, &args.destination);
    let mut out = io::stdout().lock();

    match output_mode {
        OutputMode::Json => write_json(
            &mut out,
            &PathJson::new(&args.source, &args.destination, &path),
        )?,
        OutputMode::Text => output::write_path(
            &mut out,
            &args.source,
            &args.destination,
            &path,
            &OutputConfig::from_env(),
        )?,
    }
    Ok(())
}

/// Execute the components command
pub fn execute_components(file: &Path, output_mode: OutputMode) -> Result<()> {
    let graph = load_network(file)?;
    let components = connected_components(&graph);
    let mut out = io::stdout().lock();

    match output_mode {
        OutputMode::Json => write_json(
            &mut out,
            &ComponentsJson {
                count: components.len(),
                components: &components,
            },
        )?,
        OutputMode::Text => {
            output::write_components(&mut out, &components, &OutputConfig::from_env())?;
        }
    }
    Ok(())
}

/// Execute the recommend command
pub fn execute_recommend(file: &Path, args: &RecommendArgs, output_mode: OutputMode) -> Result<()> {
    let graph = load_network(file)?;
    let recs = recommend_scored(&graph, &args.user, args.limit);
    let mut out = io::stdout().lock();

    match output_mode {
        OutputMode::Json => write_json(
            &mut out,
            &RecommendationsJson {
                user: &args.user,
                recommendations: &recs,
            },
        )?,
        OutputMode::Text => {
            output::write_recommendations(&mut out, &args.user, &recs, &OutputConfig::from_env())?;
        }
    }
    Ok(())
}

/// Execute the export-dot command
pub fn execute_export_dot(file: &Path) -> Result<()> {
    let graph = load_network(file)?;
    let mut out = io::stdout().lock();

    output::dot::write_dot(&mut out, &graph)?;
    out.flush()?;
    Ok(())
}
