//! Socnet - an in-memory social network explorer.
//!
//! This crate provides both a CLI application and a library for loading an
//! undirected friendship graph from an edge-list file and answering structural
//! queries over it: degree centrality, shortest paths, connected components
//! and friend-of-friend recommendations.
//!
//! # Example
//!
//! ```
//! use socnet::algorithms::{connected_components, recommend_friends, shortest_path};
//! use socnet::graph::SocialGraph;
//!
//! let mut graph = SocialGraph::new();
//! graph.add_edge("alice", "bob");
//! graph.add_edge("bob", "carol");
//! graph.add_edge("alice", "dave");
//!
//! assert_eq!(shortest_path(&graph, "alice", "carol"), ["alice", "bob", "carol"]);
//! assert_eq!(connected_components(&graph).len(), 1);
//! assert_eq!(recommend_friends(&graph, "alice", 5), ["carol"]);
//! ```

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod algorithms;
pub mod error;
pub mod graph;

// Public CLI module (needed by binary)
pub mod cli;

// Session state and the interactive menu
pub mod app;
pub mod interactive;

pub mod config;
pub mod output;
