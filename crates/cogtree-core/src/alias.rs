//! Alias derivation.
//!
//! Users type command names in whatever style they like: `do_thing`,
//! `dothing` or `do-thing`. [`AliasDeriver`] expands a command's declared
//! aliases so that all of those spellings resolve to the same command.
//!
//! Derivation runs once, when a command is registered. The result is a set;
//! collisions with other commands' names or aliases are not rejected here and
//! are settled at lookup time by first match in sorted order.

use std::collections::BTreeSet;

/// Default word-separator characters.
pub const DEFAULT_SEPARATORS: &[char] = &['_', '-', ' '];

/// Default display hyphen.
pub const DEFAULT_HYPHEN: char = '-';

/// Expands a command's declared aliases with separator variants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AliasDeriver {
    separators: Vec<char>,
    hyphen: char,
}

impl AliasDeriver {
    /// Create a deriver with a custom separator set and display hyphen.
    pub fn new(separators: impl IntoIterator<Item = char>, hyphen: char) -> Self {
        Self {
            separators: separators.into_iter().collect(),
            hyphen,
        }
    }

    /// The recognised word-separator characters.
    pub fn separators(&self) -> &[char] {
        &self.separators
    }

    /// The character used to join words in hyphenated variants.
    pub fn hyphen(&self) -> char {
        self.hyphen
    }

    fn is_separator(&self, c: char) -> bool {
        self.separators.contains(&c)
    }

    /// Remove every separator character: `do_thing` → `dothing`.
    pub fn strip(&self, word: &str) -> String {
        word.chars().filter(|c| !self.is_separator(*c)).collect()
    }

    /// Replace every separator character with the display hyphen:
    /// `do_thing` → `do-thing`, `a__b` → `a--b`.
    pub fn hyphenate(&self, word: &str) -> String {
        word.chars()
            .map(|c| if self.is_separator(c) { self.hyphen } else { c })
            .collect()
    }

    /// Compute the effective alias set for `name`.
    ///
    /// The result contains every declared alias, plus the stripped and
    /// hyphenated variants of the name and of each declared alias. Empty
    /// strings and `name` itself are never included.
    ///
    /// # Example
    ///
    /// ```
    /// use cogtree_core::AliasDeriver;
    ///
    /// let aliases = AliasDeriver::default().derive("do_thing", Vec::<String>::new());
    /// let aliases: Vec<_> = aliases.into_iter().collect();
    /// assert_eq!(aliases, ["do-thing", "dothing"]);
    /// ```
    pub fn derive<I, S>(&self, name: &str, declared: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let declared: Vec<String> = declared
            .into_iter()
            .map(|alias| alias.as_ref().to_string())
            .collect();

        let mut aliases: BTreeSet<String> = declared.iter().cloned().collect();
        for word in declared.iter().map(String::as_str).chain([name]) {
            aliases.insert(self.strip(word));
            aliases.insert(self.hyphenate(word));
        }

        aliases.remove("");
        aliases.remove(name);
        log::trace!("derived aliases for '{name}': {aliases:?}");
        aliases
    }
}

impl Default for AliasDeriver {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATORS.iter().copied(), DEFAULT_HYPHEN)
    }
}
