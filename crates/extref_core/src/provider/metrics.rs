use std::sync::atomic::{AtomicU64, Ordering};

/// Observability counters for the reference provider.
#[derive(Debug)]
pub struct ProviderMetrics {
    /// Tokens newly derived and persisted.
    refs_minted_total: AtomicU64,
    /// Tokens found under their key and returned unchanged.
    refs_reused_total: AtomicU64,
    /// Stored tokens removed by an explicit clear.
    refs_cleared_total: AtomicU64,
    /// Tokens issued without persistence because storage failed.
    unpersisted_refs_total: AtomicU64,
    /// Storage operations that returned an error.
    storage_errors_total: AtomicU64,
}

impl ProviderMetrics {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            refs_minted_total: AtomicU64::new(0),
            refs_reused_total: AtomicU64::new(0),
            refs_cleared_total: AtomicU64::new(0),
            unpersisted_refs_total: AtomicU64::new(0),
            storage_errors_total: AtomicU64::new(0),
        }
    }

    /// Record a newly minted and persisted token.
    pub fn record_mint(&self) {
        self.refs_minted_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a token reused from storage.
    pub fn record_reuse(&self) {
        self.refs_reused_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a stored token removed by a clear.
    pub fn record_clear(&self) {
        self.refs_cleared_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a token issued without persistence.
    pub fn record_unpersisted(&self) {
        self.unpersisted_refs_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed storage operation.
    pub fn record_storage_error(&self) {
        self.storage_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Current value of `refs_minted_total`.
    pub fn refs_minted_total(&self) -> u64 {
        self.refs_minted_total.load(Ordering::Relaxed)
    }

    /// Current value of `refs_reused_total`.
    pub fn refs_reused_total(&self) -> u64 {
        self.refs_reused_total.load(Ordering::Relaxed)
    }

    /// Current value of `refs_cleared_total`.
    pub fn refs_cleared_total(&self) -> u64 {
        self.refs_cleared_total.load(Ordering::Relaxed)
    }

    /// Current value of `unpersisted_refs_total`.
    pub fn unpersisted_refs_total(&self) -> u64 {
        self.unpersisted_refs_total.load(Ordering::Relaxed)
    }

    /// Current value of `storage_errors_total`.
    pub fn storage_errors_total(&self) -> u64 {
        self.storage_errors_total.load(Ordering::Relaxed)
    }
}

impl Default for ProviderMetrics {
    fn default() -> Self {
        Self::new()
    }
}
