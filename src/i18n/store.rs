//! The active-language store.
//!
//! A [`LanguageStore`] holds the single piece of mutable UI state: which
//! language is active. Consumers never reach for ambient global state; the
//! store is installed for a region of code with [`LanguageStore::scope`] (async)
//! or [`LanguageStore::sync_scope`] (sync), and every accessor outside such a
//! region returns [`StoreError::NotInitialized`].

use crate::i18n::{Catalog, Language, LookupMetrics};
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;
use tracing::info;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("language store accessed outside of an initialized store scope")]
    NotInitialized,
}

tokio::task_local! {
    static ACTIVE_STORE: LanguageStore;
}

/// Shared handle to the active language. Cloning shares the same state.
#[derive(Debug, Clone)]
pub struct LanguageStore {
    active: Arc<watch::Sender<Language>>,
}

impl Default for LanguageStore {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl LanguageStore {
    pub fn new(initial: Language) -> Self {
        let (active, _) = watch::channel(initial);
        Self {
            active: Arc::new(active),
        }
    }

    /// The currently selected language.
    pub fn language(&self) -> Language {
        *self.active.borrow()
    }

    /// Replace the active language and wake every subscriber.
    pub fn set_language(&self, language: Language) {
        let previous = self.active.send_replace(language);
        if previous != language {
            LookupMetrics::global().record_language_switch();
            info!("Active language changed: {} -> {}", previous, language);
        }
    }

    /// Translate `key` in the active language, falling back to the key itself.
    pub fn translate<'k>(&self, key: &'k str) -> &'k str {
        Catalog::global().translate(self.language(), key)
    }

    /// Observe language changes; the receiver sees the current value immediately.
    pub fn subscribe(&self) -> watch::Receiver<Language> {
        self.active.subscribe()
    }

    /// Run `future` with this store installed as the current store.
    pub async fn scope<F: Future>(self, future: F) -> F::Output {
        ACTIVE_STORE.scope(self, future).await
    }

    /// Run `f` with this store installed as the current store.
    pub fn sync_scope<R>(self, f: impl FnOnce() -> R) -> R {
        ACTIVE_STORE.sync_scope(self, f)
    }

    /// The store installed by the innermost enclosing scope.
    pub fn current() -> Result<LanguageStore, StoreError> {
        ACTIVE_STORE
            .try_with(LanguageStore::clone)
            .map_err(|_| StoreError::NotInitialized)
    }
}

/// Active language of the current store.
pub fn active_language() -> Result<Language, StoreError> {
    LanguageStore::current().map(|store| store.language())
}

/// Set the active language of the current store.
pub fn set_active_language(language: Language) -> Result<(), StoreError> {
    LanguageStore::current().map(|store| store.set_language(language))
}

/// Translate `key` with the current store.
pub fn t(key: &str) -> Result<&str, StoreError> {
    LanguageStore::current().map(|store| store.translate(key))
}
