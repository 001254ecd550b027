use std::collections::BTreeMap;

use log::{debug, warn};

use super::i18n_model::{Lookup, PlaceholderMode, Translation, TranslationNode, TranslationSource};
use crate::errors::{Error, Result};

const BUNDLED_DICTIONARIES: &[(&str, &str)] = &[
    ("de", include_str!("../../locales/de.json")),
    ("en", include_str!("../../locales/en.json")),
    ("es", include_str!("../../locales/es.json")),
    ("fr", include_str!("../../locales/fr.json")),
];

/// One read-only dictionary per supported language plus the fallback language.
#[derive(Debug, Clone)]
pub struct TranslationCatalog {
    default_language: String,
    dictionaries: BTreeMap<String, TranslationNode>,
}

fn normalize_language(language: &str) -> String {
    language.trim().to_ascii_lowercase()
}

impl TranslationCatalog {
    pub fn new(
        default_language: &str,
        dictionaries: BTreeMap<String, TranslationNode>,
    ) -> Result<Self> {
        let default_language = normalize_language(default_language);
        let dictionaries: BTreeMap<String, TranslationNode> = dictionaries
            .into_iter()
            .map(|(language, root)| (normalize_language(&language), root))
            .collect();

        if let Some((language, _)) = dictionaries
            .iter()
            .find(|(_, root)| matches!(root, TranslationNode::Text(_)))
        {
            return Err(Error::Translation(format!(
                "dictionary '{}' must be an object at the top level",
                language
            )));
        }

        if !dictionaries.contains_key(&default_language) {
            return Err(Error::Translation(format!(
                "default language '{}' has no dictionary",
                default_language
            )));
        }

        Ok(Self {
            default_language,
            dictionaries,
        })
    }

    /// Parses `(language, json)` pairs.
    pub fn from_json(default_language: &str, sources: &[(&str, &str)]) -> Result<Self> {
        let mut dictionaries = BTreeMap::new();
        for (language, json) in sources {
            let root: TranslationNode = serde_json::from_str(json).map_err(|e| {
                Error::Translation(format!("dictionary '{}' is invalid: {}", language, e))
            })?;
            dictionaries.insert(language.to_string(), root);
        }
        Self::new(default_language, dictionaries)
    }

    /// The dictionaries compiled into the crate (`de`, `en`, `es`, `fr`).
    pub fn bundled(default_language: &str) -> Result<Self> {
        Self::from_json(default_language, BUNDLED_DICTIONARIES)
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    pub fn supported_languages(&self) -> impl Iterator<Item = &str> {
        self.dictionaries.keys().map(String::as_str)
    }

    pub fn is_supported(&self, language: &str) -> bool {
        self.dictionaries.contains_key(&normalize_language(language))
    }

    /// Single-dictionary lookup, no fallback.
    pub fn lookup(&self, language: &str, key: &str) -> Lookup<'_> {
        match self.dictionaries.get(&normalize_language(language)) {
            Some(root) => root.find(key),
            None => Lookup::Missing,
        }
    }

    /// Looks `key` up in `language`, then in the default language, then gives
    /// back the key itself. Never fails.
    pub fn translate(
        &self,
        language: &str,
        key: &str,
        substitutions: &[(&str, &str)],
        mode: PlaceholderMode,
    ) -> Translation {
        let (template, source) = match self.lookup(language, key) {
            Lookup::Found(text) => (text, TranslationSource::ActiveLanguage),
            Lookup::Missing => match self.lookup(&self.default_language, key) {
                Lookup::Found(text) => {
                    debug!(
                        "Translation '{}' missing for '{}', using '{}'",
                        key, language, self.default_language
                    );
                    (text, TranslationSource::DefaultLanguage)
                }
                Lookup::Missing => {
                    warn!(
                        "Translation '{}' missing for '{}' and default '{}'",
                        key, language, self.default_language
                    );
                    return Translation {
                        text: key.to_string(),
                        source: TranslationSource::MissingKey,
                    };
                }
            },
        };

        Translation {
            text: apply_substitutions(template, substitutions, mode),
            source,
        }
    }
}

/// Replaces `{name}` placeholders by literal substring replacement, one
/// substitution after the other.
pub fn apply_substitutions(
    template: &str,
    substitutions: &[(&str, &str)],
    mode: PlaceholderMode,
) -> String {
    let mut text = template.to_string();
    for (name, value) in substitutions {
        let placeholder = format!("{{{}}}", name);
        text = match mode {
            PlaceholderMode::FirstOccurrence => text.replacen(&placeholder, value, 1),
            PlaceholderMode::AllOccurrences => text.replace(&placeholder, value),
        };
    }
    text
}
