//! Language type: the fixed set of languages the landing page ships with.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported language.
///
/// Out-of-set languages cannot be represented; parsing from a code is the
/// only fallible boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "EN")]
    En,
    #[serde(rename = "CN")]
    Cn,
    #[serde(rename = "HK")]
    Hk,
}

impl Language {
    /// Every language, in switcher order.
    pub const ALL: [Language; 3] = [Language::En, Language::Cn, Language::Hk];

    /// Create a Language from a switcher code ("EN", "cn", " HK ").
    pub fn from_code(code: &str) -> Result<Language> {
        let code = code.trim();
        if code.is_empty() {
            bail!("Language code is empty");
        }

        match LanguageRegistry::get().get_by_code(code) {
            Some(config) => Ok(config.language),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Position in [`Language::ALL`].
    pub(crate) const fn index(self) -> usize {
        match self {
            Language::En => 0,
            Language::Cn => 1,
            Language::Hk => 2,
        }
    }

    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get().config(*self)
    }

    /// Switcher code (e.g., "EN").
    pub fn code(&self) -> &'static str {
        self.config().code
    }

    /// English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Native name of the language.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn html_lang(&self) -> &'static str {
        self.config().html_lang
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Language::from_code(s)
    }
}
