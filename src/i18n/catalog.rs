//! The process-wide translation catalog: Language -> key -> string.
//!
//! Built once from the static tables in `strings` and never mutated.

use crate::i18n::{strings, Language, LookupMetrics};
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::debug;

pub type Dictionary = HashMap<&'static str, &'static str>;

pub struct Catalog {
    dictionaries: HashMap<Language, Dictionary>,
}

static CATALOG: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// Get the global catalog, building it on first access.
    pub fn global() -> &'static Catalog {
        CATALOG.get_or_init(Catalog::from_static_tables)
    }

    fn from_static_tables() -> Catalog {
        let dictionaries: HashMap<Language, Dictionary> = Language::ALL
            .into_iter()
            .map(|language| (language, strings::table(language).iter().copied().collect()))
            .collect();

        Catalog { dictionaries }
    }

    /// Build a catalog from explicit tables; languages without a table get an empty dictionary.
    pub fn from_tables(
        tables: impl IntoIterator<Item = (Language, &'static [(&'static str, &'static str)])>,
    ) -> Catalog {
        let mut dictionaries: HashMap<Language, Dictionary> = Language::ALL
            .into_iter()
            .map(|language| (language, Dictionary::new()))
            .collect();

        for (language, table) in tables {
            dictionaries
                .entry(language)
                .or_default()
                .extend(table.iter().copied());
        }

        Catalog { dictionaries }
    }

    /// The full dictionary for a language.
    pub fn dictionary(&self, language: Language) -> Option<&Dictionary> {
        self.dictionaries.get(&language)
    }

    /// Raw map access; `None` when the key is absent or its value is empty.
    pub fn lookup(&self, language: Language, key: &str) -> Option<&'static str> {
        self.dictionaries
            .get(&language)
            .and_then(|dictionary| dictionary.get(key))
            .copied()
            .filter(|value| !value.is_empty())
    }

    /// Translate `key` for `language`, returning the key itself when no translation exists.
    pub fn translate<'k>(&self, language: Language, key: &'k str) -> &'k str {
        match self.lookup(language, key) {
            Some(value) => {
                LookupMetrics::global().record_hit();
                value
            }
            None => {
                LookupMetrics::global().record_fallback();
                debug!("Missing translation for '{}' in {}", key, language);
                key
            }
        }
    }
}
