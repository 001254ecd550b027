//! I18n module - bundled dictionaries and dot-path translation lookup.

mod catalog;
mod i18n_model;

pub use catalog::{apply_substitutions, TranslationCatalog};
pub use i18n_model::{Lookup, PlaceholderMode, Translation, TranslationNode, TranslationSource};
