//! Cogtree Core: command-hierarchy navigation for chat-bot help browsers.
//!
//! This crate provides the foundational types used across all Cogtree crates.
//! It has no internal Cogtree dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`entry`]: Capability traits a command framework implements
//! - [`alias`]: Alias derivation at registration time
//! - [`node`]: The lazily-derived help tree
//! - [`sort`]: Sibling display order
//! - [`resolve`]: Subcommand and path resolution
//! - [`registry`]: An in-memory bot/cog/command registry

#![doc = include_str!("../README.md")]

pub mod alias;
pub mod entry;
pub mod error;
pub mod node;
pub mod registry;
pub mod resolve;
pub mod sort;

// Re-export key types at crate root for convenience
pub use alias::AliasDeriver;
pub use entry::{COG_COMMANDS, Entry, NO_CATEGORY, Registry};
pub use error::{Error, Result};
pub use node::{Node, NodeKind};
pub use registry::{Bot, Cog, Command};
pub use resolve::resolve_path;
