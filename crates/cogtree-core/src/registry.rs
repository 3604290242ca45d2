//! In-memory command registry.
//!
//! [`Bot`], [`Cog`] and [`Command`] are a small, self-contained command
//! registry implementing [`Registry`] and [`Entry`]. Registration is where
//! aliases get expanded: [`Bot::add_command`] and [`Bot::add_cog`] run the
//! bot's [`AliasDeriver`] over every command (and nested subcommand) once,
//! rewriting its alias set in place.
//!
//! Commands added with [`Bot::add_command`] live in a trailing
//! [`NO_CATEGORY`] cog, so a cog-mode tree still lists and resolves them.

use std::collections::{BTreeSet, HashSet};

use crate::alias::AliasDeriver;
use crate::entry::{COG_COMMANDS, Entry, NO_CATEGORY, Registry};
use crate::resolve::PATH_DELIMITERS;
use crate::{Error, Result};

// ============================================================================
// Command
// ============================================================================

/// A command, or a group of subcommands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Command {
    name: String,
    aliases: BTreeSet<String>,
    significant: bool,
    brief: Option<String>,
    subcommands: Option<Vec<Command>>,
}

impl Command {
    /// Create a leaf command.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Create an empty command group.
    pub fn group(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subcommands: Some(Vec::new()),
            ..Default::default()
        }
    }

    /// Declare an alias.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.insert(alias.into());
        self
    }

    /// Declare several aliases.
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    /// Mark the command as significant.
    pub fn with_significant(mut self, significant: bool) -> Self {
        self.significant = significant;
        self
    }

    /// Set the one-line description.
    pub fn with_brief(mut self, brief: impl Into<String>) -> Self {
        self.brief = Some(brief.into());
        self
    }

    /// Add a subcommand, turning the command into a group if it was a leaf.
    pub fn with_subcommand(mut self, command: Command) -> Self {
        self.subcommands.get_or_insert_with(Vec::new).push(command);
        self
    }

    /// Subcommands, or `None` for a leaf command.
    pub fn subcommands(&self) -> Option<&[Command]> {
        self.subcommands.as_deref()
    }

    /// Whether the command is a group.
    pub fn is_group(&self) -> bool {
        self.subcommands.is_some()
    }

    /// Validate the command tree and expand every alias set in place.
    fn register(&mut self, deriver: &AliasDeriver) -> Result<()> {
        validate_command_name(&self.name, deriver)?;
        self.aliases = deriver.derive(&self.name, &self.aliases);
        log::debug!("registered '{}' with aliases {:?}", self.name, self.aliases);

        if let Some(subcommands) = self.subcommands.as_mut() {
            let mut seen = HashSet::new();
            for sub in subcommands.iter_mut() {
                if !seen.insert(sub.name.clone()) {
                    return Err(Error::duplicate_name(
                        &sub.name,
                        format!("group '{}'", self.name),
                    ));
                }
                sub.register(deriver)?;
            }
        }
        Ok(())
    }
}

impl Entry for Command {
    fn name(&self) -> &str {
        &self.name
    }

    fn aliases(&self) -> &BTreeSet<String> {
        &self.aliases
    }

    fn significant(&self) -> bool {
        self.significant
    }

    fn brief(&self) -> Option<&str> {
        self.brief.as_deref()
    }

    fn children(&self) -> Option<Vec<&dyn Entry>> {
        self.subcommands
            .as_ref()
            .map(|subs| subs.iter().map(|c| c as &dyn Entry).collect())
    }
}

fn validate_command_name(name: &str, deriver: &AliasDeriver) -> Result<()> {
    if name.is_empty() {
        return Err(Error::invalid_entry("command name is empty"));
    }
    if deriver.strip(name).is_empty() {
        return Err(Error::invalid_entry(format!(
            "command name '{name}' is made only of separators"
        )));
    }
    if name.contains(PATH_DELIMITERS) {
        return Err(Error::invalid_entry(format!(
            "command name '{name}' contains a path delimiter"
        )));
    }
    Ok(())
}

// ============================================================================
// Cog
// ============================================================================

/// A named grouping of top-level commands.
///
/// Exposes its commands to the help tree through a synthetic group named
/// [`COG_COMMANDS`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cog {
    name: String,
    description: Option<String>,
    aliases: BTreeSet<String>,
    commands: Command,
}

impl Cog {
    /// Create an empty cog.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            aliases: BTreeSet::new(),
            commands: Command::group(COG_COMMANDS),
        }
    }

    /// Set the description shown on the cog's help page.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a command to the cog.
    pub fn with_command(mut self, command: Command) -> Self {
        self.commands = self.commands.with_subcommand(command);
        self
    }

    /// The cog's commands, in registration order.
    pub fn commands(&self) -> &[Command] {
        self.commands.subcommands().unwrap_or_default()
    }

    fn commands_mut(&mut self) -> &mut Vec<Command> {
        self.commands.subcommands.get_or_insert_with(Vec::new)
    }
}

impl Entry for Cog {
    fn name(&self) -> &str {
        &self.name
    }

    fn aliases(&self) -> &BTreeSet<String> {
        &self.aliases
    }

    fn brief(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn children(&self) -> Option<Vec<&dyn Entry>> {
        Some(vec![&self.commands])
    }
}

// ============================================================================
// Bot
// ============================================================================

/// A bot's command registry.
#[derive(Clone, Debug)]
pub struct Bot {
    prefix: String,
    cogs: Vec<Cog>,
    uncategorised: Cog,
    deriver: AliasDeriver,
}

impl Bot {
    /// Create an empty registry with the given invocation prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            cogs: Vec::new(),
            uncategorised: Cog::new(NO_CATEGORY),
            deriver: AliasDeriver::default(),
        }
    }

    /// Use `deriver` for every subsequent registration.
    pub fn with_alias_deriver(mut self, deriver: AliasDeriver) -> Self {
        self.deriver = deriver;
        self
    }

    /// The alias deriver applied at registration.
    pub fn alias_deriver(&self) -> &AliasDeriver {
        &self.deriver
    }

    /// Look up a registered cog by name.
    pub fn cog(&self, name: &str) -> Option<&Cog> {
        self.cogs.iter().find(|cog| cog.name == name)
    }

    /// Commands registered outside any cog.
    pub fn uncategorised(&self) -> &[Command] {
        self.uncategorised.commands()
    }

    /// Registered cogs, followed by [`NO_CATEGORY`] when it has commands.
    fn all_cogs(&self) -> impl Iterator<Item = &Cog> {
        let has_uncategorised = !self.uncategorised().is_empty();
        let trailing = has_uncategorised.then_some(&self.uncategorised);
        self.cogs.iter().chain(trailing)
    }

    fn top_level_names(&self) -> HashSet<&str> {
        self.all_cogs()
            .flat_map(|cog| cog.commands())
            .map(|command| command.name.as_str())
            .collect()
    }

    /// Register a command that belongs to no cog.
    ///
    /// # Errors
    ///
    /// Fails if the command (or a subcommand) has an invalid name, or if a
    /// top-level command of the same name is already registered. Alias
    /// collisions are accepted.
    pub fn add_command(&mut self, mut command: Command) -> Result<()> {
        if self.top_level_names().contains(command.name.as_str()) {
            return Err(Error::duplicate_name(&command.name, "the bot"));
        }
        command.register(&self.deriver)?;
        self.uncategorised.commands_mut().push(command);
        Ok(())
    }

    /// Register a cog and all of its commands.
    ///
    /// # Errors
    ///
    /// Fails if the cog name is empty, taken or [`NO_CATEGORY`], or if any
    /// of its commands would fail [`Bot::add_command`].
    pub fn add_cog(&mut self, mut cog: Cog) -> Result<()> {
        if cog.name.trim().is_empty() {
            return Err(Error::invalid_entry("cog name is empty"));
        }
        if cog.name == NO_CATEGORY || self.cog(&cog.name).is_some() {
            return Err(Error::duplicate_name(&cog.name, "the bot's cogs"));
        }

        let mut taken: HashSet<String> = self
            .top_level_names()
            .into_iter()
            .map(String::from)
            .collect();
        let parent = format!("cog '{}'", cog.name);
        for command in cog.commands_mut() {
            if !taken.insert(command.name.clone()) {
                return Err(Error::duplicate_name(&command.name, &parent));
            }
            command.register(&self.deriver)?;
        }

        log::debug!(
            "registered cog '{}' with {} commands",
            cog.name,
            cog.commands().len()
        );
        self.cogs.push(cog);
        Ok(())
    }
}

impl Registry for Bot {
    fn prefix(&self) -> &str {
        &self.prefix
    }

    fn cogs(&self) -> Vec<&dyn Entry> {
        self.all_cogs().map(|cog| cog as &dyn Entry).collect()
    }

    fn commands(&self) -> Vec<&dyn Entry> {
        self.all_cogs()
            .flat_map(|cog| cog.commands())
            .map(|command| command as &dyn Entry)
            .collect()
    }
}
