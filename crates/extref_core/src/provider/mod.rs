//! Reference provider: get-or-create, clear, and peek over a storage port.
//!
//! The provider never fails the calling flow. Storage trouble degrades to an
//! unpersisted token for that single call; the failure is counted and logged
//! and the submission proceeds.

pub mod metrics;
pub mod port;

pub use metrics::ProviderMetrics;
pub use port::{MemoryStore, StoreError, TokenStore};

use crate::keyspace::{storage_key, token_value};
use crate::scope::RefScope;

// --- Issued reference ---------------------------------------------------

/// How an issued token came to be.
///
/// The token value is byte-identical across all three paths; provenance is
/// observability only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefProvenance {
    /// Found under the storage key and returned unchanged.
    Reused,
    /// Newly derived and persisted.
    Minted,
    /// Newly derived but not persisted because storage failed.
    MintedUnpersisted,
}

/// Token issued for one logical transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedRef {
    /// The external-reference value sent to the backend.
    pub token: String,
    /// Where the token came from.
    pub provenance: RefProvenance,
}

// --- Reference provider -------------------------------------------------

/// Issues stable external-reference tokens over an injected store.
///
/// Invariants:
/// - A stored token is returned unchanged, even if it differs from current
///   derivation (stored value wins).
/// - Repeated lookups without an intervening clear return identical tokens.
/// - Issuing operations never fail; storage errors soft-fail to an
///   unpersisted token.
#[derive(Debug)]
pub struct RefProvider<S: TokenStore> {
    store: S,
    metrics: ProviderMetrics,
}

impl<S: TokenStore> RefProvider<S> {
    /// Create a provider over the given store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            metrics: ProviderMetrics::new(),
        }
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Provider counters.
    pub fn metrics(&self) -> &ProviderMetrics {
        &self.metrics
    }

    /// Return the token stored for `scope`, minting and persisting one if
    /// absent.
    ///
    /// When the store cannot be read or written, the freshly derived token is
    /// returned unpersisted: retry deduplication is lost for that attempt
    /// only and the submission still goes out.
    pub fn get_or_create_ref(&self, scope: &RefScope) -> IssuedRef {
        let key = storage_key(scope);
        match self.store.get(&key) {
            Ok(Some(stored)) => {
                self.metrics.record_reuse();
                tracing::debug!("ExternalRefReused key={} token={}", key, stored);
                IssuedRef {
                    token: stored,
                    provenance: RefProvenance::Reused,
                }
            }
            Ok(None) => {
                let token = token_value(scope);
                match self.store.set(&key, &token) {
                    Ok(()) => {
                        self.metrics.record_mint();
                        tracing::debug!("ExternalRefMinted key={} token={}", key, token);
                        IssuedRef {
                            token,
                            provenance: RefProvenance::Minted,
                        }
                    }
                    Err(e) => self.soft_fail_mint(&key, token, &e),
                }
            }
            Err(e) => {
                let token = token_value(scope);
                self.soft_fail_mint(&key, token, &e)
            }
        }
    }

    /// Remove any stored token for `scope`.
    ///
    /// No-op when nothing is stored. A storage failure is counted and logged,
    /// never surfaced.
    pub fn clear_ref(&self, scope: &RefScope) {
        let key = storage_key(scope);
        match self.store.delete(&key) {
            Ok(true) => {
                self.metrics.record_clear();
                tracing::debug!("ExternalRefCleared key={}", key);
            }
            Ok(false) => {}
            Err(e) => {
                self.metrics.record_storage_error();
                tracing::warn!("ExternalRefClearFailed key={} error={}", key, e);
            }
        }
    }

    /// Read the stored token for `scope` without creating one.
    ///
    /// Storage failure reads as absent.
    pub fn peek_ref(&self, scope: &RefScope) -> Option<String> {
        let key = storage_key(scope);
        match self.store.get(&key) {
            Ok(found) => found,
            Err(e) => {
                self.metrics.record_storage_error();
                tracing::warn!("ExternalRefPeekFailed key={} error={}", key, e);
                None
            }
        }
    }

    fn soft_fail_mint(&self, key: &str, token: String, err: &StoreError) -> IssuedRef {
        self.metrics.record_storage_error();
        self.metrics.record_unpersisted();
        tracing::warn!("ExternalRefUnpersisted key={} error={}", key, err);
        IssuedRef {
            token,
            provenance: RefProvenance::MintedUnpersisted,
        }
    }
}
