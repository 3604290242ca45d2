//! Help page types.
//!
//! These are the values a rendering layer turns into chat messages. All
//! types derive `Serialize`/`Deserialize` so pages can be handed to other
//! processes as JSON.

use std::fmt;

use cogtree_core::{Error, Node, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Entries
// ============================================================================

/// One row of a help listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpEntry {
    /// Own name.
    pub name: String,
    /// Full invocation path.
    pub full_name: String,
    /// Optional one-line description.
    pub brief: Option<String>,
    /// Effective aliases, sorted.
    pub aliases: Vec<String>,
    /// Whether the entry is significant.
    pub significant: bool,
    /// Whether the entry has subcommands (or, for cogs, commands).
    pub is_group: bool,
    /// Whether the entry is a cog.
    pub is_cog: bool,
}

impl HelpEntry {
    /// The text shown at the start of the row.
    ///
    /// Cogs share their parent's full name, so they are labelled by name.
    pub fn label(&self) -> &str {
        if self.is_cog {
            &self.name
        } else {
            &self.full_name
        }
    }
}

impl From<&Node<'_>> for HelpEntry {
    fn from(node: &Node<'_>) -> Self {
        Self {
            name: node.name().to_string(),
            full_name: node.full_name(),
            brief: node.brief().map(String::from),
            aliases: node.aliases().iter().cloned().collect(),
            significant: node.significant(),
            is_group: node.is_group() || node.is_cog(),
            is_cog: node.is_cog(),
        }
    }
}

impl fmt::Display for HelpEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())?;
        if self.is_group {
            write!(f, " [group]")?;
        }
        if let Some(brief) = &self.brief {
            write!(f, ": {brief}")?;
        }
        Ok(())
    }
}

// ============================================================================
// Pages
// ============================================================================

/// A single page of help for one node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpPage {
    /// Page heading.
    pub title: String,
    /// The node's description, if any.
    pub description: Option<String>,
    /// The node's aliases, sorted.
    pub aliases: Vec<String>,
    /// Child rows on this page.
    pub entries: Vec<HelpEntry>,
    /// 1-based page number.
    pub page: usize,
    /// Number of pages for the node.
    pub total_pages: usize,
}

impl HelpPage {
    /// Serialize the page as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::serialization(e.to_string()))
    }
}

impl fmt::Display for HelpPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        if let Some(description) = &self.description {
            writeln!(f, "{description}")?;
        }
        if !self.aliases.is_empty() {
            writeln!(f, "Aliases: {}", self.aliases.join(", "))?;
        }
        if !self.entries.is_empty() {
            writeln!(f)?;
            for entry in &self.entries {
                writeln!(f, "  {entry}")?;
            }
        }
        write!(f, "\nPage {}/{}", self.page, self.total_pages)
    }
}

// ============================================================================
// Outcome
// ============================================================================

/// The answer to a help query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum HelpOutcome {
    /// The query resolved.
    Found {
        /// At least one page.
        pages: Vec<HelpPage>,
    },
    /// Nothing answers to the query.
    NotFound {
        /// The query as typed.
        query: String,
    },
}

impl HelpOutcome {
    /// Whether the query resolved.
    pub fn is_found(&self) -> bool {
        matches!(self, HelpOutcome::Found { .. })
    }

    /// Number of pages (0 for a miss).
    pub fn total_pages(&self) -> usize {
        match self {
            HelpOutcome::Found { pages } => pages.len(),
            HelpOutcome::NotFound { .. } => 0,
        }
    }

    /// Page `n` (1-based), clamped into range. `None` for a miss.
    pub fn page(&self, n: usize) -> Option<&HelpPage> {
        match self {
            HelpOutcome::Found { pages } if !pages.is_empty() => {
                let index = n.clamp(1, pages.len()) - 1;
                pages.get(index)
            }
            _ => None,
        }
    }
}

impl fmt::Display for HelpOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HelpOutcome::Found { pages } => match pages.first() {
                Some(page) => write!(f, "{page}"),
                None => Ok(()),
            },
            HelpOutcome::NotFound { query } => write!(f, "No command called \"{query}\" found."),
        }
    }
}
