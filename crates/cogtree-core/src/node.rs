//! Ephemeral help-tree nodes.
//!
//! A [`Node`] wraps one registry item together with the node it was reached
//! from. Nodes are built per help request, starting at [`Node::root`], and
//! are dropped when the request is done. They borrow the registry and never
//! own or modify it.
//!
//! Children are derived from the live registry on every call to
//! [`Node::children`]; nothing is cached, so two calls may return distinct
//! (but equal) nodes.
//!
//! # Kinds
//!
//! | Kind      | Wraps                  | Full name                          |
//! |-----------|------------------------|------------------------------------|
//! | `Root`    | the registry           | the invocation prefix              |
//! | `Cog`     | a cog                  | its parent's full name (no segment) |
//! | `Group`   | an entry with children | parent's full name + own name      |
//! | `Command` | a leaf entry           | parent's full name + own name      |
//!
//! The space separator is only inserted below a `Group`: directly under the
//! root or a cog, the own name is appended to the prefix as-is (`!ping`).

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

use crate::entry::{COG_COMMANDS, Entry, Registry};
use crate::sort;

static NO_ALIASES: BTreeSet<String> = BTreeSet::new();

/// Path separator used between segments of a full name.
pub const NAME_SEPARATOR: &str = " ";

/// What a [`Node`] wraps.
#[derive(Clone, Copy)]
pub enum NodeKind<'a> {
    /// A leaf command.
    Command(&'a dyn Entry),
    /// A command group.
    Group(&'a dyn Entry),
    /// A cog: a named grouping that contributes no path segment.
    Cog(&'a dyn Entry),
    /// The top of the tree.
    Root {
        /// The registry being browsed.
        registry: &'a dyn Registry,
        /// List cogs (`true`) or top-level commands (`false`) as children.
        cog_mode: bool,
    },
}

impl NodeKind<'_> {
    /// Short lowercase label for the kind.
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Command(_) => "command",
            NodeKind::Group(_) => "group",
            NodeKind::Cog(_) => "cog",
            NodeKind::Root { .. } => "root",
        }
    }
}

impl fmt::Debug for NodeKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Command(entry) | NodeKind::Group(entry) | NodeKind::Cog(entry) => {
                write!(f, "{}({:?})", self.label(), entry.name())
            }
            NodeKind::Root { registry, cog_mode } => f
                .debug_struct("root")
                .field("prefix", &registry.prefix())
                .field("cog_mode", cog_mode)
                .finish(),
        }
    }
}

struct NodeData<'a> {
    kind: NodeKind<'a>,
    parent: Option<Node<'a>>,
}

/// A cheap-to-clone handle on a help-tree node.
///
/// The parent handle keeps the ephemeral wrapper chain alive; the registry
/// entries themselves are only borrowed for `'a`.
#[derive(Clone)]
pub struct Node<'a>(Rc<NodeData<'a>>);

impl<'a> Node<'a> {
    /// Create the root of a help tree over `registry`.
    pub fn root(registry: &'a dyn Registry, cog_mode: bool) -> Self {
        Self(Rc::new(NodeData {
            kind: NodeKind::Root { registry, cog_mode },
            parent: None,
        }))
    }

    fn with_parent(&self, kind: NodeKind<'a>) -> Node<'a> {
        Node(Rc::new(NodeData {
            kind,
            parent: Some(self.clone()),
        }))
    }

    /// Wrap a child entry as a group or a command, depending on whether it
    /// has children of its own.
    fn wrap(&self, entry: &'a dyn Entry) -> Node<'a> {
        if entry.children().is_some() {
            self.with_parent(NodeKind::Group(entry))
        } else {
            self.with_parent(NodeKind::Command(entry))
        }
    }

    fn wrap_all(&self, entries: Vec<&'a dyn Entry>) -> Vec<Node<'a>> {
        let mut nodes: Vec<Node<'a>> = entries.into_iter().map(|e| self.wrap(e)).collect();
        sort::sort_nodes(&mut nodes);
        nodes
    }

    // ------------------------------------------------------------------------
    // Identity
    // ------------------------------------------------------------------------

    /// What this node wraps.
    pub fn kind(&self) -> NodeKind<'a> {
        self.0.kind
    }

    /// The wrapped entry, or `None` for the root.
    pub fn entry(&self) -> Option<&'a dyn Entry> {
        match self.0.kind {
            NodeKind::Command(entry) | NodeKind::Group(entry) | NodeKind::Cog(entry) => Some(entry),
            NodeKind::Root { .. } => None,
        }
    }

    /// The node this one was reached from; `None` only for the root.
    pub fn parent(&self) -> Option<&Node<'a>> {
        self.0.parent.as_ref()
    }

    /// Iterate over the ancestors, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = &Node<'a>> {
        std::iter::successors(self.parent(), |node| node.parent())
    }

    /// Number of ancestors (the root has depth 0).
    pub fn depth(&self) -> usize {
        self.ancestors().count()
    }

    /// Whether this node is the root.
    pub fn is_root(&self) -> bool {
        matches!(self.0.kind, NodeKind::Root { .. })
    }

    /// Whether this node wraps a cog.
    pub fn is_cog(&self) -> bool {
        matches!(self.0.kind, NodeKind::Cog(_))
    }

    /// Whether this node wraps a command group.
    pub fn is_group(&self) -> bool {
        matches!(self.0.kind, NodeKind::Group(_))
    }

    /// Whether this node wraps a leaf command.
    pub fn is_command(&self) -> bool {
        matches!(self.0.kind, NodeKind::Command(_))
    }

    /// Whether the root lists cogs rather than top-level commands.
    ///
    /// Always `false` for non-root nodes.
    pub fn cog_mode(&self) -> bool {
        matches!(self.0.kind, NodeKind::Root { cog_mode: true, .. })
    }

    fn identity(&self) -> *const () {
        match self.0.kind {
            NodeKind::Command(entry) | NodeKind::Group(entry) | NodeKind::Cog(entry) => {
                std::ptr::from_ref(entry).cast::<()>()
            }
            NodeKind::Root { registry, .. } => std::ptr::from_ref(registry).cast::<()>(),
        }
    }

    // ------------------------------------------------------------------------
    // Entry capabilities
    // ------------------------------------------------------------------------

    /// Own name. For the root this is the invocation prefix.
    pub fn name(&self) -> &'a str {
        match self.0.kind {
            NodeKind::Command(entry) | NodeKind::Group(entry) | NodeKind::Cog(entry) => {
                entry.name()
            }
            NodeKind::Root { registry, .. } => registry.prefix(),
        }
    }

    /// Effective aliases. The root has none.
    pub fn aliases(&self) -> &'a BTreeSet<String> {
        match self.entry() {
            Some(entry) => entry.aliases(),
            None => &NO_ALIASES,
        }
    }

    /// Whether this node sorts ahead of non-significant siblings.
    pub fn significant(&self) -> bool {
        self.entry().is_some_and(|entry| entry.significant())
    }

    /// Optional one-line description.
    pub fn brief(&self) -> Option<&'a str> {
        self.entry().and_then(|entry| entry.brief())
    }

    /// Whether `token` is this node's name or one of its aliases.
    pub fn answers_to(&self, token: &str) -> bool {
        self.name() == token || self.aliases().contains(token)
    }

    // ------------------------------------------------------------------------
    // Tree
    // ------------------------------------------------------------------------

    /// The full invocation path of this node, e.g. `!config set`.
    pub fn full_name(&self) -> String {
        match self.0.kind {
            NodeKind::Root { registry, .. } => registry.prefix().to_string(),
            NodeKind::Cog(_) => self.parent().map(Node::full_name).unwrap_or_default(),
            NodeKind::Command(entry) | NodeKind::Group(entry) => match self.parent() {
                None => entry.name().to_string(),
                Some(parent) if parent.is_root() || parent.is_cog() => {
                    format!("{}{}", parent.full_name(), entry.name())
                }
                Some(parent) => {
                    format!("{}{}{}", parent.full_name(), NAME_SEPARATOR, entry.name())
                }
            },
        }
    }

    /// Child nodes in display order, derived afresh from the registry.
    ///
    /// - `Command`: none.
    /// - `Group`: the group's subcommands.
    /// - `Cog`: the subcommands of the cog's synthetic `"commands"` child.
    /// - `Root`: every cog in cog mode (including any trailing cog the
    ///   registry uses for uncategorised commands), else every top-level
    ///   command.
    pub fn children(&self) -> Vec<Node<'a>> {
        match self.0.kind {
            NodeKind::Command(_) => Vec::new(),
            NodeKind::Group(entry) => self.wrap_all(entry.children().unwrap_or_default()),
            NodeKind::Cog(entry) => {
                let commands = entry
                    .children()
                    .unwrap_or_default()
                    .into_iter()
                    .find(|child| child.name() == COG_COMMANDS);
                match commands {
                    Some(group) => self.wrap_all(group.children().unwrap_or_default()),
                    None => {
                        log::debug!("cog '{}' exposes no '{COG_COMMANDS}' child", entry.name());
                        Vec::new()
                    }
                }
            }
            NodeKind::Root {
                registry,
                cog_mode: true,
            } => {
                let mut cogs: Vec<Node<'a>> = registry
                    .cogs()
                    .into_iter()
                    .map(|cog| self.with_parent(NodeKind::Cog(cog)))
                    .collect();
                sort::sort_nodes(&mut cogs);
                cogs
            }
            NodeKind::Root {
                registry,
                cog_mode: false,
            } => self.wrap_all(registry.commands()),
        }
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("kind", &self.0.kind)
            .field("full_name", &self.full_name())
            .finish()
    }
}

/// Nodes are equal when they wrap the same registry item.
impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.identity(), other.identity())
    }
}

impl Eq for Node<'_> {}

/// Compares the own name only; aliases are not consulted.
impl PartialEq<str> for Node<'_> {
    fn eq(&self, other: &str) -> bool {
        self.name() == other
    }
}

impl PartialEq<&str> for Node<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.name() == *other
    }
}

/// Display order: significant first, then by name.
///
/// Ties between distinct entries fall back to entry identity, so only equal
/// nodes compare `Equal`.
impl PartialOrd for Node<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let by_key = sort::compare(self, other);
        Some(by_key.then_with(|| self.identity().cmp(&other.identity())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{Bot, Cog, Command};

    fn bot() -> Bot {
        let mut bot = Bot::new("!");
        bot.add_cog(
            Cog::new("Admin")
                .with_description("Moderation tools")
                .with_command(
                    Command::group("config")
                        .with_brief("Manage settings")
                        .with_subcommand(Command::new("set").with_brief("Set a value"))
                        .with_subcommand(Command::new("get")),
                )
                .with_command(Command::new("do_thing").with_significant(true)),
        )
        .unwrap();
        bot.add_command(Command::new("ping")).unwrap();
        bot
    }

    // ------------------------------------------------------------------------
    // Kinds and capabilities
    // ------------------------------------------------------------------------

    #[test]
    fn test_root_node() {
        let bot = bot();
        let root = Node::root(&bot, true);
        assert!(root.is_root());
        assert!(root.cog_mode());
        assert_eq!(root.name(), "!");
        assert_eq!(root.full_name(), "!");
        assert!(root.aliases().is_empty());
        assert!(root.brief().is_none());
        assert!(!root.significant());
        assert!(root.parent().is_none());
        assert_eq!(root.depth(), 0);
    }

    #[test]
    fn test_children_kinds() {
        let bot = bot();
        let root = Node::root(&bot, false);
        let children = root.children();
        let config = children.iter().find(|n| **n == "config").unwrap();
        let ping = children.iter().find(|n| **n == "ping").unwrap();
        assert!(config.is_group());
        assert!(ping.is_command());
        assert_eq!(config.kind().label(), "group");
        assert_eq!(config.brief(), Some("Manage settings"));
    }

    #[test]
    fn test_leaf_has_no_children() {
        let bot = bot();
        let root = Node::root(&bot, false);
        let ping = root.get_subcommand_node("ping").unwrap();
        assert!(ping.children().is_empty());
    }

    // ------------------------------------------------------------------------
    // Full names
    // ------------------------------------------------------------------------

    #[test]
    fn test_full_name_flat_mode() {
        let bot = bot();
        let root = Node::root(&bot, false);
        let config = root.get_subcommand_node("config").unwrap();
        let set = config.get_subcommand_node("set").unwrap();
        assert_eq!(config.full_name(), "!config");
        assert_eq!(set.full_name(), "!config set");
        assert_eq!(set.depth(), 2);
    }

    #[test]
    fn test_full_name_cog_is_transparent() {
        let bot = bot();
        let root = Node::root(&bot, true);
        let admin = root.children().into_iter().next().unwrap();
        assert!(admin.is_cog());
        assert_eq!(admin.full_name(), "!");
        assert_eq!(admin.brief(), Some("Moderation tools"));

        let config = admin.get_subcommand_node("config").unwrap();
        let set = config.get_subcommand_node("set").unwrap();
        assert_eq!(config.full_name(), "!config");
        assert_eq!(set.full_name(), "!config set");
        assert_eq!(set.depth(), 3);
    }

    #[test]
    fn test_ancestors_nearest_first() {
        let bot = bot();
        let root = Node::root(&bot, true);
        let set = root
            .get_subcommand_node("config")
            .and_then(|config| config.get_subcommand_node("set"))
            .unwrap();
        let names: Vec<&str> = set.ancestors().map(Node::name).collect();
        assert_eq!(names, ["config", "Admin", "!"]);
    }

    // ------------------------------------------------------------------------
    // Children
    // ------------------------------------------------------------------------

    #[test]
    fn test_root_children_cog_mode() {
        let bot = bot();
        let root = Node::root(&bot, true);
        let names: Vec<&str> = root.children().iter().map(Node::name).collect();
        assert_eq!(names, ["Admin", "No Category"]);
    }

    #[test]
    fn test_uncategorised_command_cog_mode() {
        let bot = bot();
        let root = Node::root(&bot, true);
        let misc = root.children().remove(1);
        assert!(misc.is_cog());
        let names: Vec<&str> = misc.children().iter().map(Node::name).collect();
        assert_eq!(names, ["ping"]);

        let ping = root.get_subcommand_node("ping").unwrap();
        assert_eq!(ping.full_name(), "!ping");
        assert_eq!(ping.parent(), Some(&misc));
    }

    #[test]
    fn test_root_children_flat_mode_sorted() {
        let bot = bot();
        let root = Node::root(&bot, false);
        let names: Vec<&str> = root.children().iter().map(Node::name).collect();
        assert_eq!(names, ["do_thing", "config", "ping"]);
    }

    #[test]
    fn test_cog_children_sorted() {
        let bot = bot();
        let root = Node::root(&bot, true);
        let admin = root.children().remove(0);
        let names: Vec<&str> = admin.children().iter().map(Node::name).collect();
        assert_eq!(names, ["do_thing", "config"]);
    }

    #[test]
    fn test_children_not_cached() {
        let bot = bot();
        let root = Node::root(&bot, false);
        let first = root.children();
        let second = root.children();
        assert_eq!(first, second);
        assert!(!Rc::ptr_eq(&first[0].0, &second[0].0));
    }

    #[test]
    fn test_cog_without_commands_child() {
        struct BareCog {
            aliases: BTreeSet<String>,
        }

        impl Entry for BareCog {
            fn name(&self) -> &str {
                "Bare"
            }

            fn aliases(&self) -> &BTreeSet<String> {
                &self.aliases
            }

            fn children(&self) -> Option<Vec<&dyn Entry>> {
                Some(Vec::new())
            }
        }

        struct OneCog(BareCog);

        impl Registry for OneCog {
            fn prefix(&self) -> &str {
                "?"
            }

            fn cogs(&self) -> Vec<&dyn Entry> {
                vec![&self.0]
            }

            fn commands(&self) -> Vec<&dyn Entry> {
                Vec::new()
            }
        }

        let registry = OneCog(BareCog {
            aliases: BTreeSet::new(),
        });
        let root = Node::root(&registry, true);
        let cog = root.children().remove(0);
        assert!(cog.children().is_empty());
        assert!(root.get_subcommand_node("anything").is_none());
    }

    // ------------------------------------------------------------------------
    // Equality and ordering
    // ------------------------------------------------------------------------

    #[test]
    fn test_eq_str_uses_name_only() {
        let bot = bot();
        let root = Node::root(&bot, false);
        let node = root.get_subcommand_node("do-thing").unwrap();
        assert!(node == "do_thing");
        assert!(node != "do-thing");
        assert!(node.answers_to("do-thing"));
    }

    #[test]
    fn test_eq_node_uses_entry_identity() {
        let bot = bot();
        let flat = Node::root(&bot, false);
        let cogged = Node::root(&bot, true);
        let a = flat.get_subcommand_node("ping").unwrap();
        let b = flat.get_subcommand_node("ping").unwrap();
        let c = flat.get_subcommand_node("config").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        // Same registry, different wrapper and mode.
        assert_eq!(flat, cogged);
    }

    #[test]
    fn test_partial_ord_delegates_to_sorter() {
        let bot = bot();
        let root = Node::root(&bot, false);
        let do_thing = root.get_subcommand_node("do_thing").unwrap();
        let config = root.get_subcommand_node("config").unwrap();
        let ping = root.get_subcommand_node("ping").unwrap();
        assert!(do_thing < config);
        assert!(config < ping);
        assert!(ping > do_thing);
        assert!(config <= config.clone());
        assert!(config >= config.clone());
    }

    #[test]
    fn test_partial_ord_breaks_name_ties_on_identity() {
        struct Twin {
            aliases: BTreeSet<String>,
        }

        impl Entry for Twin {
            fn name(&self) -> &str {
                "twin"
            }

            fn aliases(&self) -> &BTreeSet<String> {
                &self.aliases
            }
        }

        struct Twins([Twin; 2]);

        impl Registry for Twins {
            fn prefix(&self) -> &str {
                "?"
            }

            fn cogs(&self) -> Vec<&dyn Entry> {
                Vec::new()
            }

            fn commands(&self) -> Vec<&dyn Entry> {
                self.0.iter().map(|twin| twin as &dyn Entry).collect()
            }
        }

        let registry = Twins([
            Twin {
                aliases: BTreeSet::new(),
            },
            Twin {
                aliases: BTreeSet::new(),
            },
        ]);
        let root = Node::root(&registry, false);
        let children = root.children();
        let (a, b) = (&children[0], &children[1]);
        assert!(*a == "twin" && *b == "twin");
        assert_ne!(a, b);
        assert_ne!(a.partial_cmp(b), Some(Ordering::Equal));
        assert_eq!(a.partial_cmp(b), b.partial_cmp(a).map(Ordering::reverse));
        assert_eq!(a.partial_cmp(&a.clone()), Some(Ordering::Equal));
    }

    #[test]
    fn test_debug_output() {
        let bot = bot();
        let root = Node::root(&bot, false);
        let ping = root.get_subcommand_node("ping").unwrap();
        let debug = format!("{ping:?}");
        assert!(debug.contains("command(\"ping\")"));
        assert!(debug.contains("!ping"));
    }
}
