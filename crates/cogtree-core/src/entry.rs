//! Capability traits for a command framework's registry.
//!
//! The command framework owns its commands, groups and cogs. Cogtree only
//! reads them through these two traits: [`Entry`] for a single registered
//! item and [`Registry`] for the bot as a whole. Nothing here mutates an
//! entry; alias derivation happens at registration time on the framework's
//! own types (see [`crate::registry`]).

use std::collections::BTreeSet;

/// Name of the synthetic child group every cog-like entry exposes.
pub const COG_COMMANDS: &str = "commands";

/// Name of the cog that holds commands registered outside any cog.
pub const NO_CATEGORY: &str = "No Category";

/// A registered command, group or cog as seen by the help tree.
///
/// # Example
///
/// ```
/// use std::collections::BTreeSet;
/// use cogtree_core::Entry;
///
/// struct Ping {
///     aliases: BTreeSet<String>,
/// }
///
/// impl Entry for Ping {
///     fn name(&self) -> &str {
///         "ping"
///     }
///
///     fn aliases(&self) -> &BTreeSet<String> {
///         &self.aliases
///     }
/// }
///
/// let ping = Ping { aliases: BTreeSet::new() };
/// assert!(!ping.significant());
/// assert!(ping.brief().is_none());
/// assert!(ping.children().is_none());
/// ```
pub trait Entry {
    /// Canonical name. Non-empty and unique among true siblings.
    fn name(&self) -> &str;

    /// Effective aliases, already expanded by the alias deriver.
    fn aliases(&self) -> &BTreeSet<String>;

    /// Whether the entry sorts ahead of its non-significant siblings.
    fn significant(&self) -> bool {
        false
    }

    /// Optional one-line description.
    fn brief(&self) -> Option<&str> {
        None
    }

    /// Child entries, in registration order.
    ///
    /// `None` marks a leaf command. Group-like entries return `Some`, even
    /// when the group is currently empty. Cog-like entries return a single
    /// group named [`COG_COMMANDS`] holding the cog's commands.
    fn children(&self) -> Option<Vec<&dyn Entry>> {
        None
    }
}

/// The bot-level view of a command registry.
///
/// Canonical names must be unique among true siblings. Two distinct
/// siblings sharing a name still compare unequal as nodes; their relative
/// order then follows entry identity, which is stable but arbitrary.
pub trait Registry {
    /// Invocation prefix, used as the full name of the tree's root.
    fn prefix(&self) -> &str;

    /// Every cog, in registration order.
    ///
    /// A registry with commands outside any cog should list them under a
    /// trailing cog (conventionally [`NO_CATEGORY`]), or they are neither
    /// listed nor resolvable at a cog-mode root.
    fn cogs(&self) -> Vec<&dyn Entry>;

    /// Every top-level command or group, whether it belongs to a cog or not.
    fn commands(&self) -> Vec<&dyn Entry>;
}
