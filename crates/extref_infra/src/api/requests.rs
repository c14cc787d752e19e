//! Backend request bodies for effectful marketplace submissions.
//!
//! These structs model the JSON bodies the backend endpoints accept. Every
//! effectful submission carries the issued token as the `externalRef` field,
//! which is what the backend deduplicates repeated submissions on.

use serde::Serialize;

use extref_core::provider::IssuedRef;

/// Wrapper adding the `externalRef` field to an endpoint body.
///
/// The wrapped body's own fields are flattened into the same JSON object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithExternalRef<T: Serialize> {
    /// Endpoint-specific fields, flattened.
    #[serde(flatten)]
    pub body: T,
    /// External reference token for backend deduplication.
    pub external_ref: String,
}

impl<T: Serialize> WithExternalRef<T> {
    /// Attach an issued token to an endpoint body.
    pub fn new(body: T, issued: &IssuedRef) -> Self {
        Self {
            body,
            external_ref: issued.token.clone(),
        }
    }
}

/// Body of a subscription plan purchase.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPurchaseBody {
    /// Identifier of the plan being purchased.
    pub plan_id: String,
}

/// Body of a rent payment submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentPaymentBody {
    /// Identifier of the rental contract being paid.
    pub contract_id: String,
}

/// Body of a sale payment submission, cash or installment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalePaymentBody {
    /// Identifier of the sale proposal being paid.
    pub proposal_id: String,
}
