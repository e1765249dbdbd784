//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a docstub.toml, and if present we load settings from there.
//! This provides which files to pick up when scanning directories, what to name the stubs,
//! and how hard the record patterns may work on a single page.

use crate::catalog::DEFAULT_BACKTRACK_LIMIT;
use facet::Facet;
use std::fs;

/// Name of the optional configuration file in the working directory.
pub const CONFIG_FILE: &str = "docstub.toml";

#[derive(Facet, Clone, Debug)]
/// User preferences loaded from docstub.toml or falling back to defaults.
pub struct Config {
    #[facet(default = vec!["html".to_string()])]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
    #[facet(default = "java".to_string())]
    /// Suffix given to generated stub files.
    pub output_extension: String,
    #[facet(default = DEFAULT_BACKTRACK_LIMIT)]
    /// Step budget for each backtracking record match.
    pub backtrack_limit: usize,
}

impl Config {
    #[must_use]
    /// Load configuration from docstub.toml if present.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load() -> Self {
        if let Ok(contents) = fs::read_to_string(CONFIG_FILE) {
            if let Some(config) = Self::parse(&contents) {
                return config;
            }
            tracing::warn!("ignoring unreadable {CONFIG_FILE}");
        }
        Self::parse("").unwrap()
    }

    #[must_use]
    /// Parse configuration from TOML text, filling unset keys with defaults.
    pub fn parse(contents: &str) -> Option<Self> {
        facet_toml::from_str::<Self>(contents).ok()
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
