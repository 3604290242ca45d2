//! Configuration for the Cogtree CLI.
//!
//! Provides the [`CogtreeConfig`] struct that loads from TOML files,
//! environment variables, and defaults using the `confyg` crate.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `COGTREE_CONFIG` environment variable
//! 3. XDG default: `~/.config/cogtree/config.toml`
//! 4. Built-in defaults

use std::path::PathBuf;

use cogtree_core::{AliasDeriver, Error, Result};
use cogtree_help::DEFAULT_PER_PAGE;
use confyg::{Confygery, env};
use serde::{Deserialize, Serialize};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "COGTREE_CONFIG";

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "COGTREE";

// ============================================================================
// Configuration structs
// ============================================================================

/// Main configuration for the Cogtree CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CogtreeConfig {
    /// Path to the registry manifest to browse.
    pub manifest: Option<String>,

    /// Help rendering options.
    pub help: HelpConfig,

    /// Alias derivation options.
    pub aliases: AliasConfig,
}

/// Help rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpConfig {
    /// Command prefix, used when the manifest does not set one.
    pub prefix: String,

    /// Whether the root page lists cogs rather than commands.
    pub cog_mode: bool,

    /// Listing rows per page.
    pub per_page: usize,
}

/// Alias derivation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AliasConfig {
    /// Characters treated as word separators.
    pub separators: String,

    /// Character separators are rewritten to.
    pub hyphen: char,
}

// ============================================================================
// Default implementations
// ============================================================================

impl Default for HelpConfig {
    fn default() -> Self {
        Self {
            prefix: "!".to_string(),
            cog_mode: true,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl Default for AliasConfig {
    fn default() -> Self {
        let deriver = AliasDeriver::default();
        Self {
            separators: deriver.separators().iter().collect(),
            hyphen: deriver.hyphen(),
        }
    }
}

impl AliasConfig {
    /// Build the deriver these settings describe.
    pub fn deriver(&self) -> AliasDeriver {
        AliasDeriver::new(self.separators.chars(), self.hyphen)
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl CogtreeConfig {
    /// Load configuration from file, environment, and defaults.
    ///
    /// A config path that does not exist is not an error; defaults and
    /// environment overrides still apply.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path) {
            if path.exists() {
                log::debug!("loading config from {}", path.display());
                builder
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?;
            }
        }

        let mut env_opts = env::Options::with_top_level(ENV_PREFIX);
        env_opts.add_section("help");
        env_opts.add_section("aliases");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        let config: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))?;

        Ok(config)
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Some(PathBuf::from(path));
        }

        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("cogtree").join("config.toml"))
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Flatten this config into environment variable pairs with `COGTREE_` prefix.
    pub fn to_env_vars(&self) -> Result<Vec<(String, String)>> {
        let value = toml::Value::try_from(self).map_err(|e| Error::config(e.to_string()))?;
        let mut vars = Vec::new();
        flatten_toml_value(&value, ENV_PREFIX, &mut vars);
        Ok(vars)
    }

    /// The alias deriver described by `[aliases]`.
    pub fn alias_deriver(&self) -> AliasDeriver {
        self.aliases.deriver()
    }
}

// ============================================================================
// Helper: flatten TOML to env vars
// ============================================================================

fn flatten_toml_value(value: &toml::Value, prefix: &str, out: &mut Vec<(String, String)>) {
    match value {
        toml::Value::Table(table) => {
            for (key, val) in table {
                let env_key = format!("{}_{}", prefix, key.to_uppercase());
                flatten_toml_value(val, &env_key, out);
            }
        }
        toml::Value::Array(arr) => {
            if let Ok(json) = serde_json::to_string(arr) {
                out.push((prefix.to_string(), json));
            }
        }
        toml::Value::String(s) => out.push((prefix.to_string(), s.clone())),
        toml::Value::Integer(i) => out.push((prefix.to_string(), i.to_string())),
        toml::Value::Float(f) => out.push((prefix.to_string(), f.to_string())),
        toml::Value::Boolean(b) => out.push((prefix.to_string(), b.to_string())),
        toml::Value::Datetime(dt) => out.push((prefix.to_string(), dt.to_string())),
    }
}

// ============================================================================
// Tests
// ============================================================================
