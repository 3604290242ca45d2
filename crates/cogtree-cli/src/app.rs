//! The Cogtree CLI application.

use std::sync::Arc;

use cogtree_core::Result;
use tracing_subscriber::EnvFilter;

use crate::cli::{CliArgs, CogtreeCommand};
use crate::config::CogtreeConfig;
use crate::config_handlers;
use crate::help_handlers::{self, HelpOptions};

// ============================================================================
// CogtreeCli
// ============================================================================

/// The CLI application: a loaded config plus the commands that use it.
pub struct CogtreeCli {
    name: String,
    config: Arc<CogtreeConfig>,
    version: String,
}

impl CogtreeCli {
    /// Create from CLI args, loading config from file/env.
    ///
    /// `--manifest` takes precedence over the configured manifest.
    pub fn from_args(name: impl Into<String>, args: &CliArgs) -> Result<Self> {
        let mut config = CogtreeConfig::load(args.config.as_deref())?;
        if let Some(manifest) = &args.manifest {
            config.manifest = Some(manifest.clone());
        }
        Ok(Self::new(name, config))
    }

    /// Create a new CLI application.
    pub fn new(name: impl Into<String>, config: CogtreeConfig) -> Self {
        Self {
            name: name.into(),
            config: Arc::new(config),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Override the version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Get a reference to the loaded config.
    pub fn config(&self) -> &CogtreeConfig {
        &self.config
    }

    /// Initialise tracing-based logging.
    ///
    /// Uses `RUST_LOG` env var if set, otherwise defaults based on verbosity flags.
    pub fn init_logging(&self, verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("warn")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };

        // Ignore error if a subscriber is already set (e.g. in tests).
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Run the CLI with the given arguments.
    pub async fn run(&self, args: CliArgs) -> Result<()> {
        self.init_logging(args.verbose, args.quiet);

        match args.command {
            Some(CogtreeCommand::Help {
                path,
                page,
                flat,
                json,
            }) => {
                let options = HelpOptions {
                    path,
                    page,
                    flat,
                    json,
                };
                help_handlers::handle_help(&self.config, &options)
            }
            Some(CogtreeCommand::Tree { flat }) => help_handlers::handle_tree(&self.config, flat),
            Some(CogtreeCommand::Aliases { name, aliases }) => {
                help_handlers::handle_aliases(&self.config, &name, &aliases)
            }
            Some(CogtreeCommand::Version) => {
                println!("{} {}", self.name, self.version);
                Ok(())
            }
            Some(CogtreeCommand::Config(config_cmd)) => {
                config_handlers::handle_config_command(args.config.as_deref(), config_cmd.command)
            }
            None => {
                println!("{} {}: use --help for usage", self.name, self.version);
                Ok(())
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
