//! Subcommand resolution.
//!
//! Lookups match a token against each candidate's name and aliases, in
//! display order, and return the first hit. A miss is `None`: "no such
//! subcommand" is an ordinary answer for a help browser, not a failure.
//!
//! At a cog-mode root the candidates are the commands of every cog, pooled
//! in cog order, so `!help ban` works without naming the cog that owns `ban`.

use crate::node::Node;

/// Characters that separate segments of a help query.
pub const PATH_DELIMITERS: &[char] = &[' ', '\t', '\n', '/'];

impl<'a> Node<'a> {
    /// Find the first of `nodes` that answers to `token`.
    pub fn get_subcommand_node_in<I>(&self, token: &str, nodes: I) -> Option<Node<'a>>
    where
        I: IntoIterator<Item = Node<'a>>,
    {
        let found = nodes.into_iter().find(|node| node.answers_to(token));
        if found.is_none() {
            log::trace!("no subcommand '{token}' under '{}'", self.full_name());
        }
        found
    }

    /// Find the child that answers to `token`.
    ///
    /// # Example
    ///
    /// ```
    /// use cogtree_core::{Bot, Cog, Command, Node};
    ///
    /// let mut bot = Bot::new("!");
    /// bot.add_cog(Cog::new("Fun").with_command(Command::new("roll_dice")))?;
    ///
    /// let root = Node::root(&bot, true);
    /// let roll = root.get_subcommand_node("roll-dice").unwrap();
    /// assert_eq!(roll.full_name(), "!roll_dice");
    /// assert!(root.get_subcommand_node("nonexistent").is_none());
    /// # Ok::<(), cogtree_core::Error>(())
    /// ```
    pub fn get_subcommand_node(&self, token: &str) -> Option<Node<'a>> {
        if self.cog_mode() {
            let pooled = self.children().into_iter().flat_map(|cog| cog.children());
            self.get_subcommand_node_in(token, pooled)
        } else {
            self.get_subcommand_node_in(token, self.children())
        }
    }

    /// Find a cog by name or alias at a cog-mode root.
    ///
    /// Returns `None` anywhere else.
    pub fn get_cog_node(&self, token: &str) -> Option<Node<'a>> {
        if !self.cog_mode() {
            return None;
        }
        self.children()
            .into_iter()
            .find(|cog| cog.answers_to(token))
    }
}

/// Walk a whitespace- or `/`-delimited query down from `root`.
///
/// An empty query resolves to `root` itself. At a cog-mode root, a first
/// segment that matches no command may instead name a cog.
pub fn resolve_path<'a>(root: &Node<'a>, query: &str) -> Option<Node<'a>> {
    let mut current = root.clone();
    for segment in query.split(PATH_DELIMITERS).filter(|s| !s.is_empty()) {
        current = match current.get_subcommand_node(segment) {
            Some(node) => node,
            None => current.get_cog_node(segment)?,
        };
    }
    Some(current)
}
