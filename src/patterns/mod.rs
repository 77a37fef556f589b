//! Pattern Engine Module
//!
//! Glob-style matching of file names and the nesting rule tables that drive
//! the resolver: a compiled-pattern cache, the rule/table types with JSON
//! loading, and the built-in default rule set.

pub mod defaults;
pub mod matcher;
pub mod rules;

pub use defaults::*;
pub use matcher::*;
pub use rules::*;
