//! File nesting engine
//!
//! Groups a flat list of sibling file names into "parent file → nested
//! children" entries driven by an ordered table of glob-style rules, e.g.
//! `package.json` collects its lock and tool-config files, and `app.ts`
//! collects `app.js` / `app.d.ts`. The host presentation layer supplies the
//! file names of one directory and renders the resulting [`Grouping`]; this
//! crate does no I/O and looks only at names.
//!
//! ```
//! use file_nesting::{NestingResolver, RuleTable};
//!
//! let resolver = NestingResolver::new();
//! let files: Vec<String> = ["package.json", "yarn.lock", "index.html"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//!
//! let grouping = resolver.resolve(&RuleTable::default(), &files);
//! assert_eq!(grouping.groups[0].parent, "package.json");
//! assert_eq!(grouping.groups[0].children, vec!["yarn.lock".to_string()]);
//! assert_eq!(grouping.standalone, vec!["index.html".to_string()]);
//! ```

pub mod nesting;
pub mod patterns;

pub use nesting::{Grouping, NestingGroup, NestingResolver};
pub use patterns::{default_rules, NestingRule, PatternCache, RuleTable, RulesError, CAPTURE_TOKEN};
