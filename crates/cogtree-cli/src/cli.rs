//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};

// ============================================================================
// CLI argument types
// ============================================================================

/// Top-level CLI arguments.
///
/// Clap's own `help` subcommand is disabled because `help` browses the
/// registry here; `--help` still prints usage.
#[derive(Parser, Debug)]
#[command(name = "cogtree", author, about, long_about = None, disable_help_subcommand = true)]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "COGTREE_CONFIG")]
    pub config: Option<String>,

    /// Registry manifest to browse, overriding the configured one.
    #[arg(short, long)]
    pub manifest: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<CogtreeCommand>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum CogtreeCommand {
    /// Show help for the root, a cog, or a command path.
    Help {
        /// Path segments, e.g. `role add`.
        path: Vec<String>,

        /// Page to show (1-based, clamped into range).
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// List commands at the root instead of cogs.
        #[arg(long)]
        flat: bool,

        /// Print the page as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the whole command tree.
    Tree {
        /// Hide the cog layer.
        #[arg(long)]
        flat: bool,
    },

    /// Show the aliases a command name would get at registration.
    Aliases {
        /// Canonical command name.
        name: String,

        /// Declared aliases.
        aliases: Vec<String>,
    },

    /// Print version information.
    Version,

    /// Configuration operations.
    Config(ConfigCommand),
}

/// Config-specific subcommands.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    /// Config subcommand to execute.
    #[command(subcommand)]
    pub command: ConfigAction,
}

/// Available config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path.
    Path,

    /// Print the effective configuration as TOML.
    Show,

    /// Create a default configuration file.
    Init {
        /// Output file path (defaults to XDG config path).
        #[arg(short, long)]
        file: Option<String>,

        /// Overwrite existing file.
        #[arg(long)]
        force: bool,
    },

    /// Export configuration as environment variables.
    Export,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_args_default() {
        let args = CliArgs::parse_from(["test"]);
        assert!(args.manifest.is_none());
        assert!(!args.verbose);
        assert!(!args.quiet);
        assert!(args.command.is_none());
    }

    #[test]
    fn test_cli_args_flags() {
        let args = CliArgs::parse_from(["test", "-v", "-m", "bot.toml", "--config", "/c.toml"]);
        assert!(args.verbose);
        assert_eq!(args.manifest.as_deref(), Some("bot.toml"));
        assert_eq!(args.config.as_deref(), Some("/c.toml"));
    }

    #[test]
    fn test_cli_args_quiet() {
        let args = CliArgs::parse_from(["test", "--quiet"]);
        assert!(!args.verbose);
        assert!(args.quiet);
    }

    // ------------------------------------------------------------------------
    // Help command tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_help_command_root() {
        let args = CliArgs::parse_from(["test", "help"]);
        match args.command {
            Some(CogtreeCommand::Help {
                path,
                page,
                flat,
                json,
            }) => {
                assert!(path.is_empty());
                assert_eq!(page, 1);
                assert!(!flat);
                assert!(!json);
            }
            _ => panic!("Expected Help command"),
        }
    }

    #[test]
    fn test_help_command_path() {
        let args = CliArgs::parse_from(["test", "help", "role", "add", "--page", "2", "--flat"]);
        match args.command {
            Some(CogtreeCommand::Help {
                path,
                page,
                flat,
                ..
            }) => {
                assert_eq!(path, ["role", "add"]);
                assert_eq!(page, 2);
                assert!(flat);
            }
            _ => panic!("Expected Help command with path"),
        }
    }

    #[test]
    fn test_tree_command() {
        let args = CliArgs::parse_from(["test", "tree", "--flat"]);
        assert!(matches!(
            args.command,
            Some(CogtreeCommand::Tree { flat: true })
        ));
    }

    #[test]
    fn test_aliases_command() {
        let args = CliArgs::parse_from(["test", "aliases", "do_thing", "dt"]);
        match args.command {
            Some(CogtreeCommand::Aliases { name, aliases }) => {
                assert_eq!(name, "do_thing");
                assert_eq!(aliases, ["dt"]);
            }
            _ => panic!("Expected Aliases command"),
        }
    }

    #[test]
    fn test_version_command() {
        let args = CliArgs::parse_from(["test", "version"]);
        assert!(matches!(args.command, Some(CogtreeCommand::Version)));
    }

    // ------------------------------------------------------------------------
    // Config command tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_config_path_command() {
        let args = CliArgs::parse_from(["test", "config", "path"]);
        match args.command {
            Some(CogtreeCommand::Config(ConfigCommand {
                command: ConfigAction::Path,
            })) => {}
            _ => panic!("Expected Config Path command"),
        }
    }

    #[test]
    fn test_config_init_command() {
        let args = CliArgs::parse_from([
            "test",
            "config",
            "init",
            "--file",
            "/tmp/c.toml",
            "--force",
        ]);
        match args.command {
            Some(CogtreeCommand::Config(ConfigCommand {
                command: ConfigAction::Init { file, force },
            })) => {
                assert_eq!(file.as_deref(), Some("/tmp/c.toml"));
                assert!(force);
            }
            _ => panic!("Expected Config Init command"),
        }
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        CliArgs::command().debug_assert();
    }
}
