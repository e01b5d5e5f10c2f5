//! Loader rules and their processing steps

#![allow(dead_code)]

use serde::{Deserialize, Serialize};

use crate::pipeline::pattern::MatchPattern;

/// One processing step in a loader rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UseEntry {
    /// Loader package name, resolved by the downstream bundler
    pub loader: String,

    /// Options handed to the loader
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<LoaderOptions>,
}

impl UseEntry {
    /// Create a step with no options
    pub fn new(loader: impl Into<String>) -> Self {
        Self {
            loader: loader.into(),
            options: None,
        }
    }

    /// Attach options to the step
    pub fn with_options(mut self, options: LoaderOptions) -> Self {
        self.options = Some(options);
        self
    }
}

/// Options attached to a processing step
///
/// Untagged so each shape serializes as its bare option map. Deserialization
/// tries the recognized shapes first and falls back to a raw value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LoaderOptions {
    /// Markup-processor options
    Markup(MarkupOptions),
    /// Script-transform options
    Script(ScriptOptions),
    /// Free-form options for loaders without a dedicated shape
    Raw(serde_json::Value),
}

/// Markup-processor options, camelCase on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkupOptions {
    /// Collapse insignificant whitespace in matched content
    pub minimize: bool,

    /// Preserve quote characters around attribute values
    pub remove_attribute_quotes: bool,

    /// Do not normalize tag and attribute case
    pub case_sensitive: bool,

    /// (open, close) delimiter pairs marking templating syntax around
    /// attribute names
    pub custom_attr_surround: Vec<(MatchPattern, MatchPattern)>,

    /// Assignment operators recognized beyond the standard `=`
    pub custom_attr_assign: Vec<MatchPattern>,
}

/// Script-transform options, camelCase on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptOptions {
    /// Skip type checking and only strip types during the transform
    pub transpile_only: bool,
}

/// A loader rule: a match predicate plus ordered processing steps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderRule {
    /// File-name predicate deciding which files the rule applies to
    pub test: MatchPattern,

    /// Processing steps, serialized under the bundler's `use` key
    #[serde(rename = "use")]
    pub steps: Vec<UseEntry>,
}

impl LoaderRule {
    /// Create a rule with no steps
    pub fn new(test: MatchPattern) -> Self {
        Self {
            test,
            steps: Vec::new(),
        }
    }

    /// Add a processing step to the rule
    pub fn with_step(mut self, step: UseEntry) -> Self {
        self.steps.push(step);
        self
    }

    /// Test a candidate file name against the rule's predicate
    pub fn matches(&self, candidate: &str) -> bool {
        self.test.is_match(candidate)
    }

    /// Loader names of the rule's steps, in order
    pub fn loaders(&self) -> Vec<&str> {
        self.steps.iter().map(|step| step.loader.as_str()).collect()
    }
}
