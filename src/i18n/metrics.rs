//! Lookup and remote-call metrics.
//!
//! Counts dictionary hits, fallback-to-key misses, language switches, and the
//! outcome of calls made by the Gemini shim.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global metrics singleton.
pub struct LookupMetrics {
    /// Lookups answered from the dictionary
    hits: AtomicUsize,

    /// Lookups that fell back to the raw key
    fallbacks: AtomicUsize,

    /// Times the active language actually changed
    language_switches: AtomicUsize,

    /// Calls made to the remote model
    remote_calls: AtomicUsize,

    /// Remote calls that failed or returned an unusable payload
    remote_failures: AtomicUsize,
}

/// Point-in-time snapshot of [`LookupMetrics`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    pub hits: usize,
    pub fallbacks: usize,
    pub fallback_rate: f64,
    pub language_switches: usize,
    pub remote_calls: usize,
    pub remote_failures: usize,
    pub remote_success_rate: f64,
}

static METRICS: OnceLock<LookupMetrics> = OnceLock::new();

impl LookupMetrics {
    /// Get the global metrics instance.
    pub fn global() -> &'static LookupMetrics {
        METRICS.get_or_init(LookupMetrics::new)
    }

    fn new() -> Self {
        Self {
            hits: AtomicUsize::new(0),
            fallbacks: AtomicUsize::new(0),
            language_switches: AtomicUsize::new(0),
            remote_calls: AtomicUsize::new(0),
            remote_failures: AtomicUsize::new(0),
        }
    }

    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_language_switch(&self) {
        self.language_switches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_remote_call(&self) {
        self.remote_calls.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_remote_failure(&self) {
        self.remote_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    pub fn language_switches(&self) -> usize {
        self.language_switches.load(Ordering::Relaxed)
    }

    pub fn remote_calls(&self) -> usize {
        self.remote_calls.load(Ordering::Relaxed)
    }

    pub fn remote_failures(&self) -> usize {
        self.remote_failures.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.hits();
        let fallbacks = self.fallbacks();
        let lookups = hits + fallbacks;
        let fallback_rate = if lookups > 0 {
            (fallbacks as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        let calls = self.remote_calls();
        let failures = self.remote_failures();
        let remote_success_rate = if calls > 0 {
            (calls.saturating_sub(failures) as f64 / calls as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            hits,
            fallbacks,
            fallback_rate,
            language_switches: self.language_switches(),
            remote_calls: calls,
            remote_failures: failures,
            remote_success_rate,
        }
    }
}
