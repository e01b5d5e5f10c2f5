//! The script-transform rule
//!
//! TypeScript sources are transpiled without type checking; type errors are
//! left to the editor and CI. The configurator prepends this rule ahead of
//! every base rule, it does not inspect it.

use crate::error::Result;
use crate::pipeline::pattern::MatchPattern;
use crate::pipeline::rule::{LoaderOptions, LoaderRule, ScriptOptions, UseEntry};

/// Name the transform rule is registered under
pub const RULE_NAME: &str = "typescript";

/// The transform rule handed to the configurator
pub fn transform() -> Result<LoaderRule> {
    Ok(LoaderRule::new(MatchPattern::new(r"\.(ts|tsx)$")?).with_step(
        UseEntry::new("ts-loader")
            .with_options(LoaderOptions::Script(ScriptOptions { transpile_only: true })),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_matches_typescript() {
        let rule = transform().unwrap();
        assert!(rule.matches("application.ts"));
        assert!(rule.matches("component.tsx"));
        assert!(!rule.matches("application.js"));
        assert!(!rule.matches("types.d"));
    }

    #[test]
    fn test_transform_transpile_only() {
        let rule = transform().unwrap();
        assert_eq!(rule.loaders(), ["ts-loader"]);
        let options = serde_json::to_value(&rule.steps[0].options).unwrap();
        assert_eq!(options, serde_json::json!({"transpileOnly": true}));
    }
}
