use extref_core::provider::{StoreError, TokenStore};
use extref_core::scope::{OperationKind, RefScope};

/// Test helper: rent-payment scope for a fixed user.
pub fn rent_scope() -> RefScope {
    RefScope::new(OperationKind::Rent, "user42", None).expect("valid scope")
}

/// Test helper: installment-sale scope for a fixed user and the given
/// proposal.
pub fn installment_scope(proposal_id: &str) -> RefScope {
    RefScope::new(OperationKind::SaleInstallment, "u1", Some(proposal_id)).expect("valid scope")
}

/// Store double whose every operation fails as unavailable.
pub struct UnavailableStore;

impl TokenStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(unavailable())
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(unavailable())
    }

    fn delete(&self, _key: &str) -> Result<bool, StoreError> {
        Err(unavailable())
    }
}

fn unavailable() -> StoreError {
    StoreError::Unavailable {
        reason: "storage disabled".to_string(),
    }
}
