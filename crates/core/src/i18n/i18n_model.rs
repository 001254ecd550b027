use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A dictionary node: either a translated string or a nested group of nodes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum TranslationNode {
    Text(String),
    Group(BTreeMap<String, TranslationNode>),
}

impl TranslationNode {
    /// Walks a dot-separated path such as `loans.simulator.title`.
    pub fn find(&self, key: &str) -> Lookup<'_> {
        if key.is_empty() {
            return Lookup::Missing;
        }

        let mut node = self;
        for segment in key.split('.') {
            node = match node {
                TranslationNode::Group(children) => match children.get(segment) {
                    Some(child) => child,
                    None => return Lookup::Missing,
                },
                TranslationNode::Text(_) => return Lookup::Missing,
            };
        }

        match node {
            TranslationNode::Text(text) => Lookup::Found(text),
            TranslationNode::Group(_) => Lookup::Missing,
        }
    }
}

/// Result of a single-dictionary lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    Found(&'a str),
    Missing,
}

/// Where the text of a [`Translation`] came from.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TranslationSource {
    ActiveLanguage,
    DefaultLanguage,
    /// Both dictionaries missed; the text is the raw key
    MissingKey,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub text: String,
    pub source: TranslationSource,
}

/// How `{name}` placeholders are substituted.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlaceholderMode {
    /// Only the first `{name}` of each substitution is replaced
    #[default]
    FirstOccurrence,
    AllOccurrences,
}
