//! Splitting a node's help into pages.

use cogtree_core::Node;

use crate::page::{HelpEntry, HelpPage};

/// Default number of listing rows per page.
pub const DEFAULT_PER_PAGE: usize = 10;

/// Title used for the root's pages.
pub const ROOT_TITLE: &str = "Help";

/// Chunks a node's children into fixed-size pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paginator {
    per_page: usize,
}

impl Paginator {
    /// Create a paginator. A size of 0 is treated as 1.
    pub fn new(per_page: usize) -> Self {
        Self {
            per_page: per_page.max(1),
        }
    }

    /// Rows per page.
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Build every page for `node`.
    ///
    /// Rows are the node's children in display order. A node without
    /// children still gets one page carrying its own details.
    pub fn paginate(&self, node: &Node<'_>) -> Vec<HelpPage> {
        let entries: Vec<HelpEntry> = node.children().iter().map(HelpEntry::from).collect();
        let chunks: Vec<Vec<HelpEntry>> = if entries.is_empty() {
            vec![Vec::new()]
        } else {
            entries
                .chunks(self.per_page)
                .map(<[HelpEntry]>::to_vec)
                .collect()
        };

        let total_pages = chunks.len();
        let title = title(node);
        let description = node.brief().map(String::from);
        let aliases: Vec<String> = node.aliases().iter().cloned().collect();
        log::debug!("paginated '{title}' into {total_pages} page(s)");

        chunks
            .into_iter()
            .enumerate()
            .map(|(i, entries)| HelpPage {
                title: title.clone(),
                description: description.clone(),
                aliases: aliases.clone(),
                entries,
                page: i + 1,
                total_pages,
            })
            .collect()
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PER_PAGE)
    }
}

/// Heading for a node's pages: `Help` at the root, the cog's name for a
/// cog, and the full invocation path otherwise.
pub fn title(node: &Node<'_>) -> String {
    if node.is_root() {
        ROOT_TITLE.to_string()
    } else if node.is_cog() {
        node.name().to_string()
    } else {
        node.full_name()
    }
}
