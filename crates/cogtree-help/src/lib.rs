//! Cogtree Help: paginated help pages over a command tree.
//!
//! Resolves a help query against a registry and splits the resulting node's
//! listing into pages that a chat front end can send one at a time.
//!
//! # Key Abstractions
//!
//! - [`HelpBrowser`]: query in, [`HelpOutcome`] out
//! - [`Paginator`]: fixed-size pages over a node's children
//! - [`HelpPage`] / [`HelpEntry`]: serializable page content

#![doc = include_str!("../README.md")]

pub mod browser;
pub mod page;
pub mod paginate;

pub use browser::HelpBrowser;
pub use page::{HelpEntry, HelpOutcome, HelpPage};
pub use paginate::{DEFAULT_PER_PAGE, Paginator};
