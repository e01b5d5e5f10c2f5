//! Loader-rule data model
//!
//! This module contains the ordered loader-rule registry and the rule
//! definitions registered into it:
//! - [`pattern`]: Compiled file-name predicates
//! - [`rule`]: Loader rules and their processing steps
//! - [`list`]: The ordered rule registry
//! - [`base`]: Rules every environment starts with
//! - [`script`]: The script-transform rule
//! - [`markup`]: The markup rule and its parsing options

pub mod base;
pub mod list;
pub mod markup;
pub mod pattern;
pub mod rule;
pub mod script;

// Re-export commonly used types
pub use list::{RuleEntry, RuleList};
pub use pattern::MatchPattern;
pub use rule::{LoaderOptions, LoaderRule, MarkupOptions, ScriptOptions, UseEntry};
