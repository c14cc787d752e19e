//! End-to-end flow over the durable store: mint, retry after failure, clear
//! on confirmation, each phase across a process restart.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use extref_core::provider::{RefProvenance, RefProvider};
use extref_core::scope::{OperationKind, RefScope};
use extref_core::settlement::{RefDisposition, SettlementOutcome, settle_ref};
use extref_infra::api::{SubscriptionPurchaseBody, WithExternalRef};
use extref_infra::config::StoreConfig;
use extref_infra::store::FileTokenStore;
use serde_json::json;

fn temp_store_path(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!(
        "extref_flow_{tag}_{}_{}.jsonl",
        std::process::id(),
        nanos
    ))
}

fn remove_if_exists(path: &Path) {
    let _ = std::fs::remove_file(path);
}

fn open_store(path: &Path) -> FileTokenStore {
    let config = StoreConfig {
        capacity: 64,
        fsync_on_write: false,
    };
    FileTokenStore::open(path, config).expect("open store")
}

#[test]
fn test_installment_payment_retries_then_clears_across_restarts() {
    let path = temp_store_path("installment");
    let scope = RefScope::new(OperationKind::SaleInstallment, "u1", Some("p7"))
        .expect("valid scope");

    // Attempt 1: mint, submission fails, token retained.
    {
        let provider = RefProvider::new(open_store(&path));
        let issued = provider.get_or_create_ref(&scope);
        assert_eq!(issued.token, "SALEINST-u1-p7");
        assert_eq!(issued.provenance, RefProvenance::Minted);

        assert_eq!(
            settle_ref(&provider, &scope, SettlementOutcome::Failed),
            RefDisposition::Retained
        );
    }

    // Attempt 2 after restart: the retry presents the same token, the
    // backend confirms, the token is cleared.
    {
        let provider = RefProvider::new(open_store(&path));
        let retried = provider.get_or_create_ref(&scope);
        assert_eq!(retried.token, "SALEINST-u1-p7");
        assert_eq!(retried.provenance, RefProvenance::Reused);

        assert_eq!(
            settle_ref(&provider, &scope, SettlementOutcome::Confirmed),
            RefDisposition::Cleared
        );
    }

    // Next transaction after another restart: nothing stored, fresh mint,
    // byte-identical token value.
    {
        let provider = RefProvider::new(open_store(&path));
        assert_eq!(provider.peek_ref(&scope), None);

        let fresh = provider.get_or_create_ref(&scope);
        assert_eq!(fresh.provenance, RefProvenance::Minted);
        assert_eq!(fresh.token, "SALEINST-u1-p7");
    }

    remove_if_exists(&path);
}

#[test]
fn test_subscription_retry_builds_identical_request() {
    let path = temp_store_path("subscription");
    let scope =
        RefScope::new(OperationKind::Subscription, "user42", Some("plan9")).expect("valid scope");

    let provider = RefProvider::new(open_store(&path));
    let first = WithExternalRef::new(
        SubscriptionPurchaseBody {
            plan_id: "plan9".to_string(),
        },
        &provider.get_or_create_ref(&scope),
    );
    let retry = WithExternalRef::new(
        SubscriptionPurchaseBody {
            plan_id: "plan9".to_string(),
        },
        &provider.get_or_create_ref(&scope),
    );

    let first_json = serde_json::to_value(&first).expect("serialize first");
    assert_eq!(
        first_json,
        json!({ "planId": "plan9", "externalRef": "SUB-user42-plan9" })
    );
    assert_eq!(
        first_json,
        serde_json::to_value(&retry).expect("serialize retry")
    );

    remove_if_exists(&path);
}
