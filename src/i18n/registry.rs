//! Language registry: Single source of truth for supported language metadata.
//!
//! The set of languages is fixed at compile time by the [`Language`] enum;
//! the registry only carries display metadata for each variant.

use crate::i18n::Language;
use serde::Serialize;
use std::sync::OnceLock;

/// Metadata for a supported language.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageConfig {
    /// The enum variant this entry describes
    pub language: Language,

    /// Switcher code (e.g., "EN", "CN", "HK")
    pub code: &'static str,

    /// English name of the language
    pub name: &'static str,

    /// Native name shown in the language switcher
    pub native_name: &'static str,

    /// BCP 47 tag for the document `lang` attribute
    pub html_lang: &'static str,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get the configuration for a language.
    ///
    /// Entries are stored in `Language::ALL` order, so every variant has one.
    pub fn config(&self, language: Language) -> &LanguageConfig {
        &self.languages[language.index()]
    }

    /// Find a language configuration by its code (ASCII case-insensitive).
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages
            .iter()
            .find(|lang| lang.code.eq_ignore_ascii_case(code))
    }

    /// All languages, in switcher order.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }
}

fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            language: Language::En,
            code: "EN",
            name: "English",
            native_name: "English",
            html_lang: "en",
        },
        LanguageConfig {
            language: Language::Cn,
            code: "CN",
            name: "Simplified Chinese",
            native_name: "简体中文",
            html_lang: "zh-CN",
        },
        LanguageConfig {
            language: Language::Hk,
            code: "HK",
            name: "Traditional Chinese (Hong Kong)",
            native_name: "繁體中文",
            html_lang: "zh-HK",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_entries_follow_enum_order() {
        let registry = LanguageRegistry::get();
        for language in Language::ALL {
            assert_eq!(registry.config(language).language, language);
        }
    }

    #[test]
    fn test_get_by_code_is_case_insensitive() {
        let registry = LanguageRegistry::get();
        let config = registry.get_by_code("hk").expect("HK should exist");
        assert_eq!(config.code, "HK");
        assert_eq!(config.html_lang, "zh-HK");
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LanguageRegistry::get().get_by_code("FR").is_none());
    }

    #[test]
    fn test_list_all_has_three_languages() {
        let all = LanguageRegistry::get().list_all();
        let codes: Vec<_> = all.iter().map(|lang| lang.code).collect();
        assert_eq!(codes, vec!["EN", "CN", "HK"]);
    }

    #[test]
    fn test_default_language_leads_the_switcher() {
        let first = LanguageRegistry::get().list_all()[0];
        assert_eq!(first.language, Language::default());
    }
}
