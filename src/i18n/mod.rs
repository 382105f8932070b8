//! Internationalization (i18n) module.
//!
//! # Architecture
//!
//! - `registry`: metadata for the three supported languages
//! - `language`: the `Language` enum
//! - `strings`: static per-language dictionaries
//! - `catalog`: process-wide Language -> key -> string table with fallback-to-key
//! - `store`: the active-language store and its initialization boundary
//! - `validator`: catalog consistency checks
//! - `metrics`: lookup and remote-call counters
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::{t, set_active_language, Language, LanguageStore};
//!
//! LanguageStore::default().sync_scope(|| {
//!     set_active_language(Language::Cn)?;
//!     assert_eq!(t("nav.origin")?, "品牌起源");
//!     Ok::<_, StoreError>(())
//! })?;
//! ```

mod catalog;
mod language;
mod metrics;
mod registry;
mod store;
mod strings;
mod validator;

pub use catalog::{Catalog, Dictionary};
pub use language::Language;
pub use metrics::{LookupMetrics, MetricsReport};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use store::{active_language, set_active_language, t, LanguageStore, StoreError};
pub use validator::{CatalogValidator, ValidationReport};
