//! Error types for Cogtree operations.
//!
//! This module provides a common `Error` type and `Result<T>` alias used across
//! all Cogtree crates. Uses `thiserror` for derive macros.
//!
//! Failing to resolve a subcommand is not an error: resolution returns
//! `Option` and callers render the miss themselves.

use thiserror::Error;

/// Errors that can occur in Cogtree operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An entry cannot be registered as given (e.g. an empty name).
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    /// A registration collides with a sibling's canonical name.
    #[error("Duplicate name '{name}' under {parent}")]
    DuplicateName {
        /// The colliding canonical name.
        name: String,
        /// Where the collision happened, for display.
        parent: String,
    },

    /// Malformed registry manifest.
    #[error("Manifest error: {0}")]
    Manifest(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid entry error.
    pub fn invalid_entry(msg: impl Into<String>) -> Self {
        Self::InvalidEntry(msg.into())
    }

    /// Create a duplicate name error.
    pub fn duplicate_name(name: impl Into<String>, parent: impl Into<String>) -> Self {
        Self::DuplicateName {
            name: name.into(),
            parent: parent.into(),
        }
    }

    /// Create a manifest error.
    pub fn manifest(msg: impl Into<String>) -> Self {
        Self::Manifest(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }
}

/// Result type alias using Cogtree's Error type.
pub type Result<T> = std::result::Result<T, Error>;
