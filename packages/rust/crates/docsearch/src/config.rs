//! Search configuration.
//!
//! Everything the engine needs is resolved once at startup into an
//! immutable [`SearchConfig`]: the search roots from `DOCSEARCH_PATH`,
//! command-line flags, and the `DOCSEARCH_COLORED` / `DOCSEARCH_MCOLORED`
//! overrides. Core logic never reads the process environment itself.

use std::path::PathBuf;

use crate::document::Category;
use crate::error::ConfigError;

/// Required `:`-separated list of search roots.
pub const PATH_VAR: &str = "DOCSEARCH_PATH";
/// Forces colored output when set to an active token.
pub const COLORED_VAR: &str = "DOCSEARCH_COLORED";
/// Forces matched-term highlighting when set to an active token.
pub const MCOLORED_VAR: &str = "DOCSEARCH_MCOLORED";
/// Prefix of every variable captured in an [`EnvSnapshot`].
pub const ENV_PREFIX: &str = "DOCSEARCH_";
/// Separator between roots in `DOCSEARCH_PATH`.
pub const ROOT_SEPARATOR: char = ':';

/// Values (compared case-insensitively) that switch an override on.
const ACTIVE_TOKENS: [&str; 3] = ["1", "true", "active"];

/// Returns `true` if `value` is one of the recognized active tokens.
#[must_use]
pub fn is_active(value: &str) -> bool {
    let value = value.to_lowercase();
    ACTIVE_TOKENS.contains(&value.as_str())
}

/// Ordered snapshot of the `DOCSEARCH_*` environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: Vec<(String, String)>,
}

impl EnvSnapshot {
    /// Capture the `DOCSEARCH_*` variables of the current process.
    ///
    /// Variables whose name or value is not valid UTF-8 are ignored.
    #[must_use]
    pub fn capture() -> Self {
        Self::from_vars(std::env::vars_os().filter_map(|(key, value)| {
            Some((key.into_string().ok()?, value.into_string().ok()?))
        }))
    }

    /// Build a snapshot from explicit pairs, keeping only `DOCSEARCH_*` keys.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = vars
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .filter(|(key, _)| key.starts_with(ENV_PREFIX))
            .collect();
        Self { vars }
    }

    /// Value of `key`, if captured.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    /// Captured variables in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn is_active(&self, key: &str) -> bool {
        self.get(key).is_some_and(is_active)
    }
}

/// Category restriction flags.
///
/// Several flags may be set at once; only the first one (links, then
/// cheats, then glossary) whose key exists in a document is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryFlags {
    /// `-L/--links`
    pub links: bool,
    /// `-C/--cheats`
    pub cheats: bool,
    /// `-G/--glossary`
    pub glossary: bool,
}

impl CategoryFlags {
    /// Requested categories in precedence order.
    pub fn precedence(self) -> impl Iterator<Item = Category> {
        [
            (self.links, Category::Links),
            (self.cheats, Category::Cheats),
            (self.glossary, Category::Glossary),
        ]
        .into_iter()
        .filter_map(|(on, category)| on.then_some(category))
    }

    /// `true` when no restriction was requested.
    #[must_use]
    pub fn is_empty(self) -> bool {
        !(self.links || self.cheats || self.glossary)
    }
}

/// Raw command-line choices, before environment overrides are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct SearchOptions {
    /// Category restriction flags.
    pub categories: CategoryFlags,
    /// Colored output.
    pub colored: bool,
    /// Report `DOCSEARCH_*` variables.
    pub env: bool,
    /// List topic names.
    pub inventory: bool,
    /// JSON-lines output.
    pub json: bool,
    /// Highlight the search term in headers.
    pub matched: bool,
    /// Print topic file paths instead of content.
    pub pwd: bool,
    /// Substring searched in entry descriptions.
    pub search: Option<String>,
    /// Restrict to a single topic.
    pub topic: Option<String>,
}

/// Immutable per-invocation configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct SearchConfig {
    /// Search roots, in `DOCSEARCH_PATH` order.
    pub roots: Vec<PathBuf>,
    /// Category restriction flags.
    pub categories: CategoryFlags,
    /// Topic restriction, `None` for every topic.
    pub topic: Option<String>,
    /// Substring filter; empty disables filtering.
    pub search: String,
    /// Colored output (flag or `DOCSEARCH_COLORED`).
    pub colored: bool,
    /// Matched-term highlighting (flag or `DOCSEARCH_MCOLORED`).
    pub matched: bool,
    /// JSON-lines output.
    pub json: bool,
    /// Print paths instead of content.
    pub pwd: bool,
    /// Inventory mode.
    pub inventory: bool,
    /// Environment report mode.
    pub env: bool,
    /// `DOCSEARCH_*` variables seen at startup.
    pub env_vars: EnvSnapshot,
}

impl SearchConfig {
    /// Merge command-line options with the environment snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingPath`] if `DOCSEARCH_PATH` is unset or empty.
    pub fn from_sources(
        options: SearchOptions,
        env_vars: EnvSnapshot,
    ) -> Result<Self, ConfigError> {
        let raw_roots = env_vars
            .get(PATH_VAR)
            .filter(|raw| !raw.is_empty())
            .ok_or(ConfigError::MissingPath)?;
        let roots = parse_roots(raw_roots);

        Ok(Self {
            roots,
            categories: options.categories,
            topic: options.topic.filter(|topic| !topic.is_empty()),
            search: options.search.unwrap_or_default(),
            colored: options.colored || env_vars.is_active(COLORED_VAR),
            matched: options.matched || env_vars.is_active(MCOLORED_VAR),
            json: options.json,
            pwd: options.pwd,
            inventory: options.inventory,
            env: options.env,
            env_vars,
        })
    }

    /// Search term, if one was given.
    #[must_use]
    pub fn search_term(&self) -> Option<&str> {
        Some(self.search.as_str()).filter(|term| !term.is_empty())
    }

    /// `enabled` / `disabled` for colored output.
    #[must_use]
    pub fn color_mode(&self) -> &'static str {
        mode_label(self.colored)
    }

    /// `enabled` / `disabled` for matched-term highlighting.
    #[must_use]
    pub fn matched_mode(&self) -> &'static str {
        mode_label(self.matched)
    }
}

/// Split a `DOCSEARCH_PATH` value into roots, dropping empty segments.
#[must_use]
pub fn parse_roots(raw: &str) -> Vec<PathBuf> {
    raw.split(ROOT_SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .map(PathBuf::from)
        .collect()
}

fn mode_label(enabled: bool) -> &'static str {
    if enabled { "enabled" } else { "disabled" }
}
