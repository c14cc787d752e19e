//! Settlement pairing: what happens to a stored token once the backend
//! answers.
//!
//! Calling flows pair every confirmed transaction with a clear and leave the
//! token in place on failure, so a retry presents the same reference.

use crate::provider::{RefProvider, TokenStore};
use crate::scope::RefScope;

/// Backend verdict on a submitted transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettlementOutcome {
    /// The backend confirmed the transaction.
    Confirmed,
    /// The submission failed or was rejected; a retry is expected.
    Failed,
}

/// What `settle_ref` did with the stored token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefDisposition {
    /// Stored token removed; the next issue for the scope mints afresh.
    Cleared,
    /// Stored token left in place for the retry to reuse.
    Retained,
}

/// Apply the settlement rule for one transaction.
///
/// `Confirmed` clears the stored token (a no-op when nothing is stored);
/// `Failed` retains it so the retry presents the same reference.
pub fn settle_ref<S: TokenStore>(
    provider: &RefProvider<S>,
    scope: &RefScope,
    outcome: SettlementOutcome,
) -> RefDisposition {
    match outcome {
        SettlementOutcome::Confirmed => {
            provider.clear_ref(scope);
            RefDisposition::Cleared
        }
        SettlementOutcome::Failed => RefDisposition::Retained,
    }
}
