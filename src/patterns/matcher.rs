//! Glob-style pattern matching for file names
//!
//! Patterns use `*` to match any sequence of characters; every other
//! character, including `.`, matches literally. Matching is case-insensitive.
//! Compiled regexes are cached per pattern string so repeated resolutions
//! over the same rule table stay cheap.

use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use std::sync::RwLock;

/// Thread-safe cache of compiled glob patterns.
///
/// Shared between concurrent resolutions; a lost race on first-time
/// compilation costs one extra compile, never a wrong result.
#[derive(Debug, Default)]
pub struct PatternCache {
    compiled: RwLock<HashMap<String, Regex>>,
}

impl PatternCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a file name matches a glob-style pattern.
    ///
    /// Examples:
    /// - `"*.json"` matches `"package.json"`, `"tsconfig.json"`
    /// - `".eslint*"` matches `".eslintrc"`, `".eslintignore"`
    /// - `"tsconfig.*"` matches `"tsconfig.json"`, `"tsconfig.node.json"`
    pub fn matches(&self, pattern: &str, name: &str) -> bool {
        {
            let compiled = self.compiled.read().expect("pattern cache poisoned");
            if let Some(regex) = compiled.get(pattern) {
                return regex.is_match(name);
            }
        }

        // Compile outside the lock; racing inserts are harmless since
        // compilation is a pure function of the pattern string.
        let regex = compile(pattern);
        let matched = regex.is_match(name);
        self.compiled
            .write()
            .expect("pattern cache poisoned")
            .insert(pattern.to_string(), regex);
        matched
    }

    /// Check if a file name matches any of the given patterns.
    pub fn matches_any<S: AsRef<str>>(&self, patterns: &[S], name: &str) -> bool {
        patterns.iter().any(|p| self.matches(p.as_ref(), name))
    }

    /// Filter file names down to those matching the pattern, preserving
    /// input order.
    pub fn find_matches<S: AsRef<str>>(&self, pattern: &str, names: &[S]) -> Vec<String> {
        names
            .iter()
            .map(|n| n.as_ref())
            .filter(|n| self.matches(pattern, n))
            .map(|n| n.to_string())
            .collect()
    }

    /// Extract the "capture" value from a file name for a parent pattern.
    ///
    /// For patterns with a wildcard, this is the portion of the name matched
    /// by `*` (`"*.ts"` + `"app.ts"` → `"app"`). For wildcard-free patterns
    /// it falls back to the name without its final extension
    /// (`"package.json"` → `"package"`, `".env"` → `".env"`).
    pub(crate) fn extract_capture(pattern: &str, name: &str) -> Option<String> {
        if pattern.contains('*') {
            // Capturing variant of the same translation; built on demand
            // since parents match far less often than children are probed.
            let regex = build(&translate(pattern, true));
            return regex
                .captures(name)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string());
        }

        // A lone leading dot is part of the name, not an extension separator.
        match name.rfind('.') {
            Some(idx) if idx > 0 => Some(name[..idx].to_string()),
            _ => Some(name.to_string()),
        }
    }

    /// Number of compiled patterns currently cached.
    pub fn len(&self) -> usize {
        self.compiled.read().expect("pattern cache poisoned").len()
    }

    /// Whether the cache holds no compiled patterns.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all compiled patterns. Useful for tests; correctness-neutral.
    pub fn clear(&self) {
        self.compiled
            .write()
            .expect("pattern cache poisoned")
            .clear();
    }
}

/// Translate a glob pattern into anchored regex source.
///
/// `*` becomes `.*` (or a capturing `(.*)` when `capture` is set); `.` and
/// every regex metacharacter are escaped to literals, so the output is
/// always valid regex source.
fn translate(pattern: &str, capture: bool) -> String {
    let mut source = String::with_capacity(pattern.len() + 8);
    source.push('^');
    for ch in pattern.chars() {
        match ch {
            '*' => source.push_str(if capture { "(.*)" } else { ".*" }),
            '.' | '[' | ']' | '(' | ')' | '{' | '}' | '^' | '$' | '|' | '\\' | '+' | '?' => {
                source.push('\\');
                source.push(ch);
            }
            _ => source.push(ch),
        }
    }
    source.push('$');
    source
}

fn compile(pattern: &str) -> Regex {
    build(&translate(pattern, false))
}

fn build(source: &str) -> Regex {
    RegexBuilder::new(source)
        .case_insensitive(true)
        .build()
        // Translation escapes every metacharacter, so the source is always valid
        .unwrap()
}
