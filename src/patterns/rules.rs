//! Nesting rule table
//!
//! A rule pairs a parent pattern with an ordered list of child patterns.
//! Tables are ordered and immutable; earlier rules take precedence when
//! more than one parent pattern matches the same file. Hosts may ship a
//! custom table as a JSON array of rules.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::defaults;

/// Placeholder in a child pattern that stands for the portion of the parent
/// file name matched by the parent pattern's wildcard.
pub const CAPTURE_TOKEN: &str = "$(capture)";

/// Errors that can occur while loading a rule table
#[derive(Debug, Error)]
pub enum RulesError {
    /// The rules file could not be read
    #[error("failed to read rules file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The rules document is not a valid JSON array of rules
    #[error("failed to parse nesting rules: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A single nesting rule
///
/// Example: parent `"*.ts"` with children `["$(capture).js", "$(capture).d.ts"]`
/// nests a matching `.js` companion and declaration file under each
/// TypeScript source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NestingRule {
    /// Parent file pattern (e.g. `"package.json"`, `"README*"`)
    pub parent: String,
    /// Child file patterns to nest under the parent, in priority order
    #[serde(default)]
    pub children: Vec<String>,
}

impl NestingRule {
    /// Create a rule from a parent pattern and its child patterns.
    pub fn new(parent: impl Into<String>, children: &[&str]) -> Self {
        Self {
            parent: parent.into(),
            children: children.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// An ordered, immutable sequence of nesting rules.
///
/// Table order is priority order: the first rule whose parent pattern
/// matches a still-unclaimed file wins exclusive claim on it as a parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleTable {
    rules: Vec<NestingRule>,
}

impl RuleTable {
    /// Create a table from rules in priority order.
    pub fn new(rules: Vec<NestingRule>) -> Self {
        Self { rules }
    }

    /// Parse a table from a JSON array of rules.
    pub fn from_json(json: &str) -> Result<Self, RulesError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a table from a JSON rules file.
    pub fn load(path: &Path) -> Result<Self, RulesError> {
        let content = fs::read_to_string(path).map_err(|source| RulesError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// The rules in priority order.
    pub fn rules(&self) -> &[NestingRule] {
        &self.rules
    }

    /// Number of rules in the table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleTable {
    /// The built-in rule table (see [`defaults`]).
    fn default() -> Self {
        defaults::default_rules()
    }
}

/// Substitute the capture value into a child pattern.
///
/// Returns `None` when the pattern references the placeholder but no capture
/// is available; such patterns are skipped rather than matched literally.
pub(crate) fn resolve_child_pattern(child: &str, capture: Option<&str>) -> Option<String> {
    if child.contains(CAPTURE_TOKEN) {
        capture.map(|value| child.replace(CAPTURE_TOKEN, value))
    } else {
        Some(child.to_string())
    }
}
