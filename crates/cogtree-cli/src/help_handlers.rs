//! Handler functions for registry browsing commands.
//!
//! These implement `help`, `tree`, and `aliases`. Each `render_*` function
//! returns the text a handler prints, so output can be checked without a
//! terminal.

use cogtree_core::{Bot, Error, Node, Result};
use cogtree_help::HelpBrowser;

use crate::config::CogtreeConfig;
use crate::manifest::Manifest;

// ============================================================================
// Option types
// ============================================================================

/// Options for a help query.
#[derive(Debug, Clone, Default)]
pub struct HelpOptions {
    /// Path segments, joined with spaces before resolution.
    pub path: Vec<String>,
    /// 1-based page number.
    pub page: usize,
    /// List commands at the root instead of cogs.
    pub flat: bool,
    /// Emit JSON instead of text.
    pub json: bool,
}

// ============================================================================
// Helper: load the registry
// ============================================================================

const NO_MANIFEST: &str =
    "no manifest configured; pass --manifest or set `manifest` in the config file";

/// Build the bot described by the configured manifest.
pub fn load_bot(config: &CogtreeConfig) -> Result<Bot> {
    let path = config
        .manifest
        .as_deref()
        .ok_or_else(|| Error::config(NO_MANIFEST))?;
    Manifest::load(path)?.into_bot(&config.help.prefix, config.alias_deriver())
}

// ============================================================================
// Renderers
// ============================================================================

/// Render one help page, or the not-found message.
pub fn render_help(bot: &Bot, config: &CogtreeConfig, options: &HelpOptions) -> Result<String> {
    let browser = HelpBrowser::new(bot, config.help.cog_mode && !options.flat)
        .with_per_page(config.help.per_page);
    let outcome = browser.browse(&options.path.join(" "));

    match (outcome.page(options.page), options.json) {
        (Some(page), true) => page.to_json(),
        (Some(page), false) => Ok(page.to_string()),
        (None, true) => {
            serde_json::to_string_pretty(&outcome).map_err(|e| Error::serialization(e.to_string()))
        }
        (None, false) => Ok(outcome.to_string()),
    }
}

/// Render the whole tree, one node per line, indented by depth.
///
/// Significant entries are marked with `*`; aliases follow in parentheses.
pub fn render_tree(bot: &Bot, cog_mode: bool) -> String {
    let root = Node::root(bot, cog_mode);
    let mut out = String::new();
    out.push_str(&root.full_name());
    out.push('\n');
    for child in root.children() {
        render_subtree(&child, 1, &mut out);
    }
    out
}

fn render_subtree(node: &Node<'_>, depth: usize, out: &mut String) {
    let label = if node.is_cog() {
        format!("[{}]", node.name())
    } else {
        node.full_name()
    };
    out.push_str(&"  ".repeat(depth));
    out.push_str(&label);
    if node.significant() {
        out.push_str(" *");
    }
    if !node.aliases().is_empty() {
        let aliases: Vec<&str> = node.aliases().iter().map(String::as_str).collect();
        out.push_str(&format!(" ({})", aliases.join(", ")));
    }
    out.push('\n');
    for child in node.children() {
        render_subtree(&child, depth + 1, out);
    }
}

/// Render the aliases registration would give `name`, one per line.
pub fn render_aliases(config: &CogtreeConfig, name: &str, declared: &[String]) -> String {
    config
        .alias_deriver()
        .derive(name, declared)
        .into_iter()
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Handlers
// ============================================================================

/// Print help for `options.path`. A miss is reported, not an error.
pub fn handle_help(config: &CogtreeConfig, options: &HelpOptions) -> Result<()> {
    let bot = load_bot(config)?;
    println!("{}", render_help(&bot, config, options)?);
    Ok(())
}

/// Print the command tree.
pub fn handle_tree(config: &CogtreeConfig, flat: bool) -> Result<()> {
    let bot = load_bot(config)?;
    print!("{}", render_tree(&bot, config.help.cog_mode && !flat));
    Ok(())
}

/// Print derived aliases.
pub fn handle_aliases(config: &CogtreeConfig, name: &str, declared: &[String]) -> Result<()> {
    let aliases = render_aliases(config, name, declared);
    if !aliases.is_empty() {
        println!("{aliases}");
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"
        [[cogs]]
        name = "Admin"
        description = "Moderation tools"

        [[cogs.commands]]
        name = "role"
        brief = "Manage roles"
        subcommands = [{ name = "add_member" }, { name = "remove" }]

        [[cogs]]
        name = "Fun"

        [[cogs.commands]]
        name = "roll"
        significant = true
    "#;

    fn bot() -> Bot {
        Manifest::from_toml_str(MANIFEST)
            .unwrap()
            .into_bot("!", CogtreeConfig::default().alias_deriver())
            .unwrap()
    }

    fn options(path: &[&str]) -> HelpOptions {
        HelpOptions {
            path: path.iter().map(|s| s.to_string()).collect(),
            page: 1,
            ..Default::default()
        }
    }

    // ------------------------------------------------------------------------
    // load_bot tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_load_bot_requires_manifest() {
        let err = load_bot(&CogtreeConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_bot_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bot.toml");
        std::fs::write(&path, MANIFEST).unwrap();
        let config = CogtreeConfig {
            manifest: Some(path.to_string_lossy().into_owned()),
            ..Default::default()
        };
        let bot = load_bot(&config).unwrap();
        assert!(bot.cog("Fun").is_some());
    }

    // ------------------------------------------------------------------------
    // render_help tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_render_help_root() {
        let text = render_help(&bot(), &CogtreeConfig::default(), &options(&[])).unwrap();
        assert!(text.starts_with("Help\n"));
        assert!(text.contains("  Admin [group]: Moderation tools"));
        assert!(text.ends_with("Page 1/1"));
    }

    #[test]
    fn test_render_help_flat_root() {
        let mut opts = options(&[]);
        opts.flat = true;
        let text = render_help(&bot(), &CogtreeConfig::default(), &opts).unwrap();
        let roll = text.find("!roll").unwrap();
        let role = text.find("!role").unwrap();
        assert!(roll < role);
    }

    #[test]
    fn test_render_help_path_and_page() {
        let mut config = CogtreeConfig::default();
        config.help.per_page = 1;
        let mut opts = options(&["role"]);
        opts.page = 2;
        let text = render_help(&bot(), &config, &opts).unwrap();
        assert!(text.starts_with("!role\nManage roles\n"));
        assert!(text.contains("!role remove"));
        assert!(text.ends_with("Page 2/2"));
    }

    #[test]
    fn test_render_help_miss() {
        let text = render_help(&bot(), &CogtreeConfig::default(), &options(&["nope"])).unwrap();
        assert_eq!(text, "No command called \"nope\" found.");
    }

    #[test]
    fn test_render_help_json() {
        let mut opts = options(&["role", "add-member"]);
        opts.json = true;
        let json = render_help(&bot(), &CogtreeConfig::default(), &opts).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["title"], "!role add_member");

        let mut miss = options(&["nope"]);
        miss.json = true;
        let json = render_help(&bot(), &CogtreeConfig::default(), &miss).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "not_found");
    }

    #[test]
    fn test_render_help_uncategorised_cog_mode() {
        let manifest = format!("{MANIFEST}\n[[commands]]\nname = \"ping\"\nbrief = \"Pong\"\n");
        let bot = Manifest::from_toml_str(&manifest)
            .unwrap()
            .into_bot("!", CogtreeConfig::default().alias_deriver())
            .unwrap();
        let config = CogtreeConfig::default();
        assert!(config.help.cog_mode);

        let root = render_help(&bot, &config, &options(&[])).unwrap();
        assert!(root.contains("  No Category [group]"));
        let text = render_help(&bot, &config, &options(&["ping"])).unwrap();
        assert!(text.starts_with("!ping\nPong\n"));

        let tree = render_tree(&bot, true);
        assert!(tree.contains("  [No Category]\n    !ping\n"));
    }

    // ------------------------------------------------------------------------
    // render_tree tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_render_tree_cog_mode() {
        let text = render_tree(&bot(), true);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "!");
        assert_eq!(lines[1], "  [Admin]");
        assert_eq!(lines[2], "    !role");
        assert_eq!(lines[3], "      !role add_member (add-member, addmember)");
        assert!(text.contains("  [Fun]\n    !roll *\n"));
    }

    #[test]
    fn test_render_tree_flat() {
        let text = render_tree(&bot(), false);
        assert!(!text.contains("[Admin]"));
        assert!(text.starts_with("!\n  !roll *\n  !role\n"));
    }

    // ------------------------------------------------------------------------
    // render_aliases tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_render_aliases() {
        let config = CogtreeConfig::default();
        let text = render_aliases(&config, "do_thing", &["dt".to_string()]);
        assert_eq!(text, "do-thing\ndothing\ndt");
        assert_eq!(render_aliases(&config, "ping", &[]), "");
    }
}
