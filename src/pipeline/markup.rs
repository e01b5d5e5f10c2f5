//! The markup rule and its parsing options
//!
//! Registered at the tail of the rule list so it runs after every earlier
//! rule and supersedes any default handling of the same extension. The
//! option literals are what the markup processor is known to accept for
//! templating-heavy markup; tests pin them exactly.

use crate::error::Result;
use crate::pipeline::pattern::MatchPattern;
use crate::pipeline::rule::{LoaderOptions, LoaderRule, MarkupOptions, UseEntry};

/// Parsing options for the markup processor
///
/// The surround pairs mark `#`-refs, `*`-directives, and optional `[` / `(`
/// binding wrappers around attribute names; each closes with the empty
/// pattern. The extra assignment operators cover `)=`, `]=`, and `)]=`.
pub fn options() -> Result<MarkupOptions> {
    Ok(MarkupOptions {
        minimize: true,
        remove_attribute_quotes: false,
        case_sensitive: true,
        custom_attr_surround: vec![
            (MatchPattern::new("#")?, MatchPattern::new(r"(?:)")?),
            (MatchPattern::new(r"\*")?, MatchPattern::new(r"(?:)")?),
            (MatchPattern::new(r"\[?\(?")?, MatchPattern::new(r"(?:)")?),
        ],
        custom_attr_assign: vec![MatchPattern::new(r"\)?\]?=")?],
    })
}

/// The markup rule appended by the configurator
pub fn rule() -> Result<LoaderRule> {
    Ok(LoaderRule::new(MatchPattern::new(r"\.html$")?)
        .with_step(UseEntry::new("html-loader").with_options(LoaderOptions::Markup(options()?))))
}
