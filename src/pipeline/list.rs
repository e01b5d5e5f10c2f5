//! The ordered loader-rule registry

#![allow(dead_code)]

use crate::pipeline::rule::LoaderRule;

/// A registered rule with its registration name
///
/// Head insertions carry a name so later configuration steps can look the
/// rule up; tail insertions are anonymous.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleEntry {
    /// Registration name, when one was given
    pub name: Option<String>,

    /// The rule itself
    pub rule: LoaderRule,
}

/// An environment's ordered rule registry
///
/// Rules are evaluated front to back. The list never deduplicates:
/// inserting a name that is already registered adds a second entry, and
/// name lookup resolves to the entry closest to the head.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleList {
    entries: Vec<RuleEntry>,
}

impl RuleList {
    /// Create an empty rule list
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a named rule at the head of the list
    ///
    /// The rule is evaluated before every previously registered rule.
    pub fn prepend(&mut self, name: impl Into<String>, rule: LoaderRule) {
        self.entries.insert(
            0,
            RuleEntry {
                name: Some(name.into()),
                rule,
            },
        );
    }

    /// Insert an anonymous rule at the tail of the list
    ///
    /// The rule is evaluated after every previously registered rule.
    pub fn append(&mut self, rule: LoaderRule) {
        self.entries.push(RuleEntry { name: None, rule });
    }

    /// Look up a rule by name, front to back
    pub fn get(&self, name: &str) -> Option<&LoaderRule> {
        self.entries
            .iter()
            .find(|entry| entry.name.as_deref() == Some(name))
            .map(|entry| &entry.rule)
    }

    /// Remove and return the first rule registered under `name`
    pub fn delete(&mut self, name: &str) -> Option<LoaderRule> {
        let position = self
            .entries
            .iter()
            .position(|entry| entry.name.as_deref() == Some(name))?;
        Some(self.entries.remove(position).rule)
    }

    /// Number of registered rules
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list has no rules
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in evaluation order
    pub fn iter(&self) -> std::slice::Iter<'_, RuleEntry> {
        self.entries.iter()
    }

    /// The rules alone, in evaluation order
    pub fn rules(&self) -> impl Iterator<Item = &LoaderRule> {
        self.entries.iter().map(|entry| &entry.rule)
    }
}

impl<'a> IntoIterator for &'a RuleList {
    type Item = &'a RuleEntry;
    type IntoIter = std::slice::Iter<'a, RuleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
