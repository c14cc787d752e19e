//! Backend API request types.
//!
//! Re-exports from sub-modules for convenient access.

pub mod requests;

// Re-export key types for ergonomic imports.
pub use requests::{RentPaymentBody, SalePaymentBody, SubscriptionPurchaseBody, WithExternalRef};
