//! TOML manifests describing a bot's command registry.
//!
//! ```toml
//! prefix = "!"
//!
//! [[cogs]]
//! name = "Admin"
//! description = "Moderation tools"
//!
//! [[cogs.commands]]
//! name = "role"
//! brief = "Manage roles"
//! significant = true
//! subcommands = [{ name = "add_member", aliases = ["grant"] }]
//!
//! [[commands]]
//! name = "ping"
//! ```
//!
//! A command with a `subcommands` key is a group, even when the list is
//! empty.

use std::path::Path;

use cogtree_core::{AliasDeriver, Bot, Cog, Command, Error, Registry, Result};
use serde::{Deserialize, Serialize};

/// A whole registry as written on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    /// Command prefix. Falls back to the configured one when absent.
    pub prefix: Option<String>,
    /// Cogs in registration order.
    pub cogs: Vec<CogSpec>,
    /// Commands that belong to no cog.
    pub commands: Vec<CommandSpec>,
}

/// One cog in a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CogSpec {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub commands: Vec<CommandSpec>,
}

/// One command (or group) in a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommandSpec {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub significant: bool,
    #[serde(default)]
    pub brief: Option<String>,
    #[serde(default)]
    pub subcommands: Option<Vec<CommandSpec>>,
}

impl From<CommandSpec> for Command {
    fn from(spec: CommandSpec) -> Self {
        let mut command = match spec.subcommands {
            Some(subs) => {
                let mut group = Command::group(spec.name);
                for sub in subs {
                    group = group.with_subcommand(sub.into());
                }
                group
            }
            None => Command::new(spec.name),
        };
        command = command
            .with_aliases(spec.aliases)
            .with_significant(spec.significant);
        if let Some(brief) = spec.brief {
            command = command.with_brief(brief);
        }
        command
    }
}

impl From<CogSpec> for Cog {
    fn from(spec: CogSpec) -> Self {
        let mut cog = Cog::new(spec.name);
        if let Some(description) = spec.description {
            cog = cog.with_description(description);
        }
        spec.commands
            .into_iter()
            .fold(cog, |cog, command| cog.with_command(command.into()))
    }
}

impl Manifest {
    /// Parse a manifest from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::manifest(e.to_string()))
    }

    /// Read and parse a manifest file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("reading manifest {}", path.display());
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| Error::manifest(format!("{}: {e}", path.display())))
    }

    /// Register everything in the manifest on a new [`Bot`].
    ///
    /// `prefix_fallback` is used when the manifest sets no prefix. Fails on
    /// invalid names and duplicate siblings, like direct registration does.
    pub fn into_bot(self, prefix_fallback: &str, deriver: AliasDeriver) -> Result<Bot> {
        let prefix = self.prefix.unwrap_or_else(|| prefix_fallback.to_string());
        let mut bot = Bot::new(prefix).with_alias_deriver(deriver);
        let cog_count = self.cogs.len();
        for cog in self.cogs {
            bot.add_cog(cog.into())?;
        }
        for command in self.commands {
            bot.add_command(command.into())?;
        }
        log::debug!(
            "registered {cog_count} cog(s) and {} top-level command(s)",
            bot.commands().len()
        );
        Ok(bot)
    }
}
