//! Catalog consistency validation.
//!
//! Every key present in one language's table should be present in all the
//! others. Lookups degrade gracefully when that does not hold, so problems are
//! reported rather than enforced.

use crate::i18n::{strings, Language};
use regex::Regex;
use std::collections::{BTreeSet, HashSet};
use std::sync::OnceLock;

/// Validation report containing errors and warnings about the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that shadow or corrupt entries (duplicate keys)
    pub errors: Vec<String>,

    /// Problems that surface as raw keys in the UI
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

type Table = &'static [(&'static str, &'static str)];

pub struct CatalogValidator;

static KEY_REGEX: OnceLock<Regex> = OnceLock::new();

impl CatalogValidator {
    /// Validate the built-in tables.
    pub fn validate_builtin() -> ValidationReport {
        Self::validate(
            Language::ALL
                .into_iter()
                .map(|language| (language, strings::table(language)))
                .collect(),
        )
    }

    /// Validate a set of per-language tables.
    ///
    /// Checks for:
    /// - duplicate keys within one table (the later entry silently wins)
    /// - keys missing from some languages
    /// - empty values (rendered as the raw key)
    /// - keys that are not dotted lowercase identifiers
    pub fn validate(tables: Vec<(Language, Table)>) -> ValidationReport {
        let mut report = ValidationReport::new();

        let all_keys: BTreeSet<&str> = tables
            .iter()
            .flat_map(|(_, table)| table.iter().map(|(key, _)| *key))
            .collect();

        for (language, table) in &tables {
            let mut seen = HashSet::new();
            for (key, value) in table.iter() {
                if !seen.insert(*key) {
                    report
                        .errors
                        .push(format!("Duplicate key '{}' in {}", key, language));
                }
                if value.is_empty() {
                    report
                        .warnings
                        .push(format!("Empty value for '{}' in {}", key, language));
                }
            }

            let missing: Vec<&str> = all_keys
                .iter()
                .filter(|key| !seen.contains(*key))
                .copied()
                .collect();
            if !missing.is_empty() {
                report.warnings.push(format!(
                    "{} is missing {} key(s): {:?}",
                    language,
                    missing.len(),
                    missing
                ));
            }
        }

        for key in &all_keys {
            if !Self::is_well_formed_key(key) {
                report
                    .warnings
                    .push(format!("Malformed key '{}'", key));
            }
        }

        report
    }

    /// Keys are dotted lowercase segments, e.g. `prod.white.feat1`.
    fn is_well_formed_key(key: &str) -> bool {
        let regex = KEY_REGEX
            .get_or_init(|| Regex::new(r"^[a-z][a-z0-9_]*(\.[a-z0-9_]+)+$").unwrap());
        regex.is_match(key)
    }
}
