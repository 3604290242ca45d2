//! The help browser: query in, pages out.

use cogtree_core::{Node, Registry, resolve_path};

use crate::page::HelpOutcome;
use crate::paginate::Paginator;

/// Answers help queries against one registry.
///
/// Each call to [`HelpBrowser::browse`] builds a fresh tree, so registry
/// changes between calls are always visible.
pub struct HelpBrowser<'a> {
    registry: &'a dyn Registry,
    cog_mode: bool,
    paginator: Paginator,
}

impl<'a> HelpBrowser<'a> {
    /// Create a browser over `registry`.
    ///
    /// In cog mode the root page lists cogs; otherwise it lists every
    /// top-level command.
    pub fn new(registry: &'a dyn Registry, cog_mode: bool) -> Self {
        Self {
            registry,
            cog_mode,
            paginator: Paginator::default(),
        }
    }

    /// Override the number of rows per page.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.paginator = Paginator::new(per_page);
        self
    }

    /// The paginator in use.
    pub fn paginator(&self) -> Paginator {
        self.paginator
    }

    /// Whether the root lists cogs.
    pub fn cog_mode(&self) -> bool {
        self.cog_mode
    }

    /// A fresh root node.
    pub fn root(&self) -> Node<'a> {
        Node::root(self.registry, self.cog_mode)
    }

    /// Resolve `query` and render the result.
    ///
    /// An empty query shows the root. A miss is a normal outcome.
    pub fn browse(&self, query: &str) -> HelpOutcome {
        match resolve_path(&self.root(), query) {
            Some(node) => HelpOutcome::Found {
                pages: self.paginator.paginate(&node),
            },
            None => {
                log::debug!("help query '{query}' matched nothing");
                HelpOutcome::NotFound {
                    query: query.trim().to_string(),
                }
            }
        }
    }
}
