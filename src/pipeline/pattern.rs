//! Compiled file-name predicates for loader rules

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{self, Result};

/// A loader rule's match predicate
///
/// Wraps a compiled regular expression. Equality, ordering into the emitted
/// config, and serialization all go by the source pattern string, so a rule
/// round-trips the author's pattern verbatim.
#[derive(Debug, Clone)]
pub struct MatchPattern {
    source: String,
    regex: Regex,
}

impl MatchPattern {
    /// Compile a pattern string into a predicate
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let source = pattern.into();
        let regex = Regex::new(&source)
            .map_err(|e| error::pipeline::pattern_invalid(&source, e.to_string()))?;
        Ok(Self { source, regex })
    }

    /// The source pattern string
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Test a candidate file name against the predicate
    pub fn is_match(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }
}

impl PartialEq for MatchPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for MatchPattern {}

impl std::fmt::Display for MatchPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

impl Serialize for MatchPattern {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.source)
    }
}

impl<'de> Deserialize<'de> for MatchPattern {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let source = String::deserialize(deserializer)?;
        MatchPattern::new(source).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_matches_extension() {
        let pattern = MatchPattern::new(r"\.html$").unwrap();
        assert!(pattern.is_match("index.html"));
        assert!(pattern.is_match("admin/dashboard.html"));
        assert!(!pattern.is_match("app.js"));
        assert!(!pattern.is_match("index.html.bak"));
    }

    #[test]
    fn test_pattern_alternation() {
        let pattern = MatchPattern::new(r"\.(js|mjs|jsx)$").unwrap();
        assert!(pattern.is_match("app.js"));
        assert!(pattern.is_match("worker.mjs"));
        assert!(pattern.is_match("view.jsx"));
        assert!(!pattern.is_match("style.css"));
    }

    #[test]
    fn test_pattern_invalid() {
        let err = MatchPattern::new("([").unwrap_err();
        assert!(err.to_string().contains("(["));
    }

    #[test]
    fn test_pattern_empty_group_compiles() {
        // The empty non-capturing group is used as a "match nothing extra"
        // close delimiter in markup options.
        let pattern = MatchPattern::new("(?:)").unwrap();
        assert!(pattern.is_match(""));
        assert!(pattern.is_match("anything"));
    }

    #[test]
    fn test_pattern_equality_by_source() {
        let a = MatchPattern::new(r"\.html$").unwrap();
        let b = MatchPattern::new(r"\.html$").unwrap();
        let c = MatchPattern::new(r"\.css$").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_pattern_serializes_as_source() {
        let pattern = MatchPattern::new(r"\.html$").unwrap();
        let json = serde_json::to_string(&pattern).unwrap();
        assert_eq!(json, r#""\\.html$""#);

        let back: MatchPattern = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pattern);
    }

    #[test]
    fn test_pattern_deserialize_invalid() {
        let result = serde_json::from_str::<MatchPattern>(r#""(unclosed""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_pattern_display() {
        let pattern = MatchPattern::new(r"\.css$").unwrap();
        assert_eq!(pattern.to_string(), r"\.css$");
    }
}
