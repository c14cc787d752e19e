//! Tests for the settlement pairing between backend outcomes and stored
//! tokens.

mod common;

use common::{UnavailableStore, installment_scope, rent_scope};
use extref_core::provider::{MemoryStore, RefProvenance, RefProvider};
use extref_core::settlement::{RefDisposition, SettlementOutcome, settle_ref};

#[test]
fn test_confirmed_settlement_clears_stored_token() {
    let provider = RefProvider::new(MemoryStore::new());
    let scope = installment_scope("p7");

    let first = provider.get_or_create_ref(&scope);
    let disposition = settle_ref(&provider, &scope, SettlementOutcome::Confirmed);
    assert_eq!(disposition, RefDisposition::Cleared);
    assert_eq!(provider.peek_ref(&scope), None);

    // The next transaction under the same scope mints afresh, same value.
    let next = provider.get_or_create_ref(&scope);
    assert_eq!(next.provenance, RefProvenance::Minted);
    assert_eq!(next.token, first.token);
}

#[test]
fn test_failed_settlement_retains_token_for_retry() {
    let provider = RefProvider::new(MemoryStore::new());
    let scope = rent_scope();

    let first = provider.get_or_create_ref(&scope);
    let disposition = settle_ref(&provider, &scope, SettlementOutcome::Failed);
    assert_eq!(disposition, RefDisposition::Retained);

    let retry = provider.get_or_create_ref(&scope);
    assert_eq!(retry.provenance, RefProvenance::Reused);
    assert_eq!(retry.token, first.token);
}

#[test]
fn test_confirmation_without_stored_token_is_noop() {
    let provider = RefProvider::new(MemoryStore::new());
    let disposition = settle_ref(&provider, &rent_scope(), SettlementOutcome::Confirmed);

    assert_eq!(disposition, RefDisposition::Cleared);
    assert_eq!(provider.metrics().refs_cleared_total(), 0);
}

#[test]
fn test_settlement_rule_holds_over_unavailable_store() {
    let provider = RefProvider::new(UnavailableStore);
    let scope = rent_scope();

    assert_eq!(
        settle_ref(&provider, &scope, SettlementOutcome::Confirmed),
        RefDisposition::Cleared
    );
    assert_eq!(
        settle_ref(&provider, &scope, SettlementOutcome::Failed),
        RefDisposition::Retained
    );
}
