//! Nesting Resolver Module
//!
//! Computes the grouping of a flat sibling file list into
//! "parent file → nested children" entries. Resolution is a single greedy
//! pass: rules are tried in table order, and a file claimed as a child (or
//! promoted to a parent) is excluded from all further candidacy. The result
//! is a pure function of the rule table and the input list; the presentation
//! layer renders it however it likes.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

use crate::patterns::rules::resolve_child_pattern;
use crate::patterns::{NestingRule, PatternCache, RuleTable};

/// One parent file with the files nested beneath it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NestingGroup {
    /// The parent file name
    pub parent: String,
    /// Child file names in resolution order
    pub children: Vec<String>,
}

/// The result of one resolution pass
///
/// Every input name appears exactly once: as a group parent, inside exactly
/// one group's children, or in `standalone`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grouping {
    /// Parent-with-children entries, in rule-priority then input order
    pub groups: Vec<NestingGroup>,
    /// Files that were neither promoted to a parent nor claimed as a child
    pub standalone: Vec<String>,
}

impl Grouping {
    /// Number of groups in the result.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether resolution produced no groups at all.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Whether the listing stays flat (no groups). Alias hosts use when
    /// deciding to skip re-rendering.
    pub fn is_flat(&self) -> bool {
        self.is_empty()
    }

    /// Total number of files nested under some parent.
    pub fn nested_count(&self) -> usize {
        self.groups.iter().map(|g| g.children.len()).sum()
    }
}

/// Resolves sibling file names into nesting groups.
///
/// Holds only the shared compiled-pattern cache; each `resolve` call is
/// independent, so concurrent calls for different directories are safe.
#[derive(Debug, Default)]
pub struct NestingResolver {
    cache: Arc<PatternCache>,
}

impl NestingResolver {
    /// Create a resolver with a fresh pattern cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver sharing an existing pattern cache.
    pub fn with_cache(cache: Arc<PatternCache>) -> Self {
        Self { cache }
    }

    /// The pattern cache this resolver compiles into.
    pub fn cache(&self) -> &PatternCache {
        &self.cache
    }

    /// Group `file_names` according to `rules`.
    ///
    /// Rules are tried in table order; within a rule, candidate parents are
    /// tried in input order and child patterns in listed order, so the
    /// result is deterministic. A parent-pattern match with zero resolved
    /// children does not form a group: the file stays available to later
    /// rules and otherwise ends up standalone.
    pub fn resolve(&self, rules: &RuleTable, file_names: &[String]) -> Grouping {
        // Names already nested under some parent
        let mut claimed: HashSet<String> = HashSet::new();
        // Names already promoted to parent-with-children
        let mut parents_claimed: HashSet<String> = HashSet::new();
        let mut groups: Vec<NestingGroup> = Vec::new();

        for rule in rules.rules() {
            for name in file_names {
                if claimed.contains(name) || parents_claimed.contains(name) {
                    continue;
                }
                if !self.cache.matches(&rule.parent, name) {
                    continue;
                }

                let capture = PatternCache::extract_capture(&rule.parent, name);
                let children = self.collect_children(
                    rule,
                    name,
                    capture.as_deref(),
                    file_names,
                    &claimed,
                    &parents_claimed,
                );

                if !children.is_empty() {
                    tracing::debug!(
                        "[Nesting] {} nests {} file(s) via parent pattern {}",
                        name,
                        children.len(),
                        rule.parent
                    );
                    claimed.extend(children.iter().cloned());
                    parents_claimed.insert(name.clone());
                    groups.push(NestingGroup {
                        parent: name.clone(),
                        children,
                    });
                }
            }
        }

        let standalone: Vec<String> = file_names
            .iter()
            .filter(|name| !claimed.contains(*name) && !parents_claimed.contains(*name))
            .cloned()
            .collect();

        tracing::debug!(
            "[Nesting] resolved {} group(s), {} standalone of {} file(s)",
            groups.len(),
            standalone.len(),
            file_names.len()
        );

        Grouping { groups, standalone }
    }

    /// Collect the children a rule nests under `parent_name`, in child-
    /// pattern then input order, deduplicated on first occurrence.
    ///
    /// Excluded as candidates: the parent itself, names already nested
    /// elsewhere, and names already promoted to parents (a group's parent
    /// must never reappear as another group's child).
    fn collect_children(
        &self,
        rule: &NestingRule,
        parent_name: &str,
        capture: Option<&str>,
        file_names: &[String],
        claimed: &HashSet<String>,
        parents_claimed: &HashSet<String>,
    ) -> Vec<String> {
        let mut children: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for child_pattern in &rule.children {
            // A $(capture) pattern with no capture available is skipped,
            // never matched literally.
            let Some(resolved) = resolve_child_pattern(child_pattern, capture) else {
                continue;
            };
            for candidate in self.cache.find_matches(&resolved, file_names) {
                if candidate == parent_name
                    || claimed.contains(&candidate)
                    || parents_claimed.contains(&candidate)
                {
                    continue;
                }
                if seen.insert(candidate.clone()) {
                    children.push(candidate);
                }
            }
        }

        children
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::{default_rules, NestingRule, RuleTable};

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn group(parent: &str, children: &[&str]) -> NestingGroup {
        NestingGroup {
            parent: parent.to_string(),
            children: names(children),
        }
    }

    fn ts_rule() -> NestingRule {
        NestingRule::new("*.ts", &["$(capture).js", "$(capture).d.ts"])
    }

    #[test]
    fn test_capture_substitution() {
        let resolver = NestingResolver::new();
        let rules = RuleTable::new(vec![NestingRule::new("*.ts", &["$(capture).js"])]);
        let result = resolver.resolve(&rules, &names(&["app.ts", "app.js", "other.js"]));

        assert_eq!(result.groups, vec![group("app.ts", &["app.js"])]);
        assert_eq!(result.standalone, names(&["other.js"]));
    }

    #[test]
    fn test_lone_match_stays_standalone() {
        let resolver = NestingResolver::new();
        let rules = RuleTable::new(vec![NestingRule::new("*.ts", &["$(capture).js"])]);
        let result = resolver.resolve(&rules, &names(&["app.ts"]));

        assert!(result.is_flat());
        assert_eq!(result.standalone, names(&["app.ts"]));
    }

    #[test]
    fn test_rule_precedence() {
        let resolver = NestingResolver::new();
        let rules = RuleTable::new(vec![
            NestingRule::new("package.json", &["tsconfig.json", "tsconfig.*.json"]),
            NestingRule::new("tsconfig.json", &["tsconfig.*.json"]),
        ]);
        let result = resolver.resolve(&rules, &names(&["package.json", "tsconfig.json"]));

        assert_eq!(result.groups, vec![group("package.json", &["tsconfig.json"])]);
        assert!(result.standalone.is_empty());
    }

    #[test]
    fn test_claimed_child_is_not_reparented() {
        let resolver = NestingResolver::new();
        let rules = RuleTable::new(vec![
            NestingRule::new("package.json", &["tsconfig.json", "tsconfig.*.json"]),
            NestingRule::new("tsconfig.json", &["tsconfig.*.json"]),
        ]);
        let result = resolver.resolve(
            &rules,
            &names(&["package.json", "tsconfig.json", "tsconfig.node.json"]),
        );

        // Everything is taken by the first rule; the tsconfig.json rule
        // finds its parent already claimed.
        assert_eq!(
            result.groups,
            vec![group("package.json", &["tsconfig.json", "tsconfig.node.json"])]
        );
    }

    #[test]
    fn test_promoted_parent_is_not_claimed_as_child() {
        let resolver = NestingResolver::new();
        let rules = RuleTable::new(vec![
            NestingRule::new("tsconfig.json", &["tsconfig.*.json"]),
            NestingRule::new("package.json", &["tsconfig.json", "tsconfig.*.json"]),
        ]);
        let result = resolver.resolve(
            &rules,
            &names(&["package.json", "tsconfig.json", "tsconfig.node.json"]),
        );

        // tsconfig.json became a parent under the first rule, so the
        // package.json rule finds no free children and forms no group.
        assert_eq!(
            result.groups,
            vec![group("tsconfig.json", &["tsconfig.node.json"])]
        );
        assert_eq!(result.standalone, names(&["package.json"]));
    }

    #[test]
    fn test_parent_never_nests_itself() {
        let resolver = NestingResolver::new();
        let rules = RuleTable::new(vec![NestingRule::new(".env", &[".env.*", "*.env"])]);
        let result = resolver.resolve(&rules, &names(&[".env", ".env.local", "prod.env"]));

        assert_eq!(result.groups, vec![group(".env", &[".env.local", "prod.env"])]);
        for g in &result.groups {
            assert!(!g.children.contains(&g.parent));
        }
    }

    #[test]
    fn test_childless_match_is_retried_by_later_rule() {
        let resolver = NestingResolver::new();
        let rules = RuleTable::new(vec![
            NestingRule::new("*.ts", &["$(capture).js"]),
            NestingRule::new("app.*", &["notes.txt"]),
        ]);
        let result = resolver.resolve(&rules, &names(&["app.ts", "notes.txt"]));

        // No app.js, so the *.ts rule forms no group and app.ts stays
        // eligible for the later rule.
        assert_eq!(result.groups, vec![group("app.ts", &["notes.txt"])]);
    }

    #[test]
    fn test_duplicate_candidates_deduplicated() {
        let resolver = NestingResolver::new();
        // Both child patterns match app.spec.ts
        let rules = RuleTable::new(vec![NestingRule::new(
            "*.ts",
            &["$(capture).*.ts", "*.spec.ts"],
        )]);
        let result = resolver.resolve(&rules, &names(&["app.ts", "app.spec.ts"]));

        assert_eq!(result.groups, vec![group("app.ts", &["app.spec.ts"])]);
    }

    #[test]
    fn test_child_order_follows_pattern_then_input_order() {
        let resolver = NestingResolver::new();
        let rules = RuleTable::new(vec![ts_rule()]);
        let result = resolver.resolve(
            &rules,
            &names(&["main.ts", "main.d.ts", "main.js", "util.ts", "util.js"]),
        );

        // $(capture).js is listed before $(capture).d.ts
        assert_eq!(
            result.groups,
            vec![
                group("main.ts", &["main.js", "main.d.ts"]),
                group("util.ts", &["util.js"]),
            ]
        );
    }

    #[test]
    fn test_case_insensitive_resolution() {
        let resolver = NestingResolver::new();
        let rules = RuleTable::new(vec![NestingRule::new("readme*", &["license*"])]);
        let result = resolver.resolve(&rules, &names(&["README.md", "LICENSE"]));

        assert_eq!(result.groups, vec![group("README.md", &["LICENSE"])]);
    }

    #[test]
    fn test_static_parent_with_capture_children_skips_nothing() {
        let resolver = NestingResolver::new();
        // Wildcard-free parent still yields a capture (basename fallback)
        let rules = RuleTable::new(vec![NestingRule::new("main.tex", &["$(capture).pdf"])]);
        let result = resolver.resolve(&rules, &names(&["main.tex", "main.pdf"]));

        assert_eq!(result.groups, vec![group("main.tex", &["main.pdf"])]);
    }

    #[test]
    fn test_empty_inputs() {
        let resolver = NestingResolver::new();
        let empty = resolver.resolve(&RuleTable::default(), &[]);
        assert!(empty.is_flat());
        assert!(empty.standalone.is_empty());

        let no_rules = resolver.resolve(&RuleTable::new(vec![]), &names(&["a.txt", "b.txt"]));
        assert!(no_rules.is_flat());
        assert_eq!(no_rules.standalone, names(&["a.txt", "b.txt"]));
    }

    #[test]
    fn test_idempotence() {
        let resolver = NestingResolver::new();
        let rules = RuleTable::default();
        let listing = names(&[
            "package.json",
            "package-lock.json",
            "tsconfig.json",
            ".eslintrc.js",
            "app.ts",
            "app.js",
            "README.md",
            "LICENSE",
            "src",
        ]);

        let first = resolver.resolve(&rules, &listing);
        let second = resolver.resolve(&rules, &listing);
        assert_eq!(first, second);

        // A fresh resolver (fresh cache) agrees too
        let third = NestingResolver::new().resolve(&rules, &listing);
        assert_eq!(first, third);
    }

    #[test]
    fn test_partition_covers_every_name_exactly_once() {
        let resolver = NestingResolver::new();
        let rules = RuleTable::default();
        let listing = names(&[
            "package.json",
            "package-lock.json",
            "yarn.lock",
            "tsconfig.json",
            "tsconfig.node.json",
            ".env",
            ".env.local",
            "Dockerfile",
            ".dockerignore",
            "app.ts",
            "app.js",
            "app.d.ts",
            "index.html",
            "README.md",
            "CHANGELOG.md",
            "LICENSE",
        ]);

        let result = resolver.resolve(&rules, &listing);

        let mut appearances: Vec<&String> = Vec::new();
        for g in &result.groups {
            assert!(!g.children.is_empty(), "empty group for {}", g.parent);
            assert!(!g.children.contains(&g.parent));
            appearances.push(&g.parent);
            appearances.extend(&g.children);
        }
        appearances.extend(&result.standalone);

        assert_eq!(appearances.len(), listing.len());
        let unique: HashSet<&String> = appearances.iter().copied().collect();
        assert_eq!(unique.len(), listing.len());
        for name in &listing {
            assert!(unique.contains(name), "{name} missing from result");
        }
    }

    #[test]
    fn test_default_table_on_npm_project() {
        let resolver = NestingResolver::new();
        let result = resolver.resolve(
            &default_rules(),
            &names(&[
                "package.json",
                "package-lock.json",
                "tsconfig.json",
                ".eslintrc.json",
                ".prettierrc",
                "vite.config.ts",
                "index.html",
            ]),
        );

        assert_eq!(result.groups.len(), 1);
        let g = &result.groups[0];
        assert_eq!(g.parent, "package.json");
        assert_eq!(
            g.children,
            names(&[
                "package-lock.json",
                "tsconfig.json",
                ".eslintrc.json",
                ".prettierrc",
                "vite.config.ts",
            ])
        );
        assert_eq!(result.standalone, names(&["index.html"]));
    }

    #[test]
    fn test_shared_cache_injection() {
        let cache = Arc::new(PatternCache::new());
        let resolver = NestingResolver::with_cache(Arc::clone(&cache));
        resolver.resolve(
            &RuleTable::new(vec![ts_rule()]),
            &names(&["app.ts", "app.js"]),
        );

        assert!(!cache.is_empty());
        cache.clear();
        // Clearing the cache never changes results
        let result = resolver.resolve(
            &RuleTable::new(vec![ts_rule()]),
            &names(&["app.ts", "app.js"]),
        );
        assert_eq!(result.groups, vec![group("app.ts", &["app.js"])]);
    }

    #[test]
    fn test_grouping_serializes_camel_case() {
        let grouping = Grouping {
            groups: vec![group("app.ts", &["app.js"])],
            standalone: names(&["index.html"]),
        };
        let json = serde_json::to_string(&grouping).unwrap();
        assert_eq!(
            json,
            r#"{"groups":[{"parent":"app.ts","children":["app.js"]}],"standalone":["index.html"]}"#
        );
    }

    #[test]
    fn test_grouping_accessors() {
        let grouping = Grouping {
            groups: vec![group("a.ts", &["a.js", "a.d.ts"]), group("b.ts", &["b.js"])],
            standalone: vec![],
        };
        assert_eq!(grouping.len(), 2);
        assert_eq!(grouping.nested_count(), 3);
        assert!(!grouping.is_empty());
        assert!(!grouping.is_flat());

        let flat = Grouping {
            groups: vec![],
            standalone: names(&["a.txt"]),
        };
        assert_eq!(flat.len(), 0);
        assert!(flat.is_empty());
        assert!(flat.is_flat());
    }
}
