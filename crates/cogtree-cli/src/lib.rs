//! Command-line help browser for Cogtree registries.
//!
//! Loads a bot's registry from a TOML manifest and answers the same help
//! queries a chat bot would, in the terminal.
//!
//! # Key Abstractions
//!
//! - [`CogtreeCli`]: the application, built from parsed [`CliArgs`]
//! - [`CogtreeConfig`]: layered file/env configuration
//! - [`Manifest`]: the on-disk registry description

#![doc = include_str!("../README.md")]

pub mod app;
pub mod cli;
pub mod config;
pub mod config_handlers;
pub mod help_handlers;
pub mod manifest;

pub use app::CogtreeCli;
pub use cli::{CliArgs, CogtreeCommand, ConfigAction, ConfigCommand};
pub use config::{AliasConfig, CogtreeConfig, HelpConfig};
pub use manifest::{CogSpec, CommandSpec, Manifest};
