use super::locale_traits::LanguageDetectorTrait;

/// Reads the operating system locale through `sys-locale`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLanguageDetector;

impl LanguageDetectorTrait for SystemLanguageDetector {
    fn detect_language(&self) -> Option<String> {
        sys_locale::get_locale().and_then(|tag| primary_language(&tag))
    }
}

/// Always reports the same language. `None` simulates an environment without a hint.
#[derive(Debug, Default, Clone)]
pub struct StaticLanguageDetector(pub Option<String>);

impl StaticLanguageDetector {
    pub fn new(language: Option<&str>) -> Self {
        Self(language.and_then(primary_language))
    }
}

impl LanguageDetectorTrait for StaticLanguageDetector {
    fn detect_language(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Lowercase primary subtag of a locale tag: `de_CH.UTF-8` -> `de`.
pub fn primary_language(tag: &str) -> Option<String> {
    let language = tag
        .trim()
        .split(['-', '_', '.', '@'])
        .next()?
        .to_ascii_lowercase();

    if language.is_empty() || !language.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(language)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_language() {
        assert_eq!(primary_language("fr-FR"), Some("fr".to_string()));
        assert_eq!(primary_language("de_CH.UTF-8"), Some("de".to_string()));
        assert_eq!(primary_language("EN"), Some("en".to_string()));
        assert_eq!(primary_language(""), None);
        assert_eq!(primary_language("C.UTF-8"), Some("c".to_string()));
        assert_eq!(primary_language("*"), None);
    }

    #[test]
    fn test_static_detector() {
        assert_eq!(
            StaticLanguageDetector::new(Some("es-MX")).detect_language(),
            Some("es".to_string())
        );
        assert_eq!(StaticLanguageDetector::new(None).detect_language(), None);
    }
}
