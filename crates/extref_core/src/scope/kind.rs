//! Closed registry of effectful operation kinds.

/// Operation kinds that carry an external reference.
///
/// Key and token derivation use the stable wire tag, never the Rust variant
/// name, so renaming a variant cannot silently re-key stored tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// Subscription plan purchase.
    Subscription,
    /// Rent payment.
    Rent,
    /// Sale settled in cash.
    SaleCash,
    /// Sale settled in installments.
    SaleInstallment,
}

impl OperationKind {
    /// Stable wire tag used in storage keys and token values.
    pub fn as_tag(self) -> &'static str {
        match self {
            OperationKind::Subscription => "SUB",
            OperationKind::Rent => "RENT",
            OperationKind::SaleCash => "SALECASH",
            OperationKind::SaleInstallment => "SALEINST",
        }
    }

    /// Parse a wire tag back into an operation kind.
    pub fn from_tag(tag: &str) -> Option<OperationKind> {
        match tag {
            "SUB" => Some(OperationKind::Subscription),
            "RENT" => Some(OperationKind::Rent),
            "SALECASH" => Some(OperationKind::SaleCash),
            "SALEINST" => Some(OperationKind::SaleInstallment),
            _ => None,
        }
    }
}

/// Expected number of `OperationKind` variants. Update when adding variants.
/// Enables a completeness check on `ALL_KINDS` (Rust stable lacks
/// variant_count for enums).
pub const EXPECTED_KIND_COUNT: usize = 4;

/// All known `OperationKind` variants (for exhaustive iteration in tests).
pub const ALL_KINDS: &[OperationKind] = &[
    OperationKind::Subscription,
    OperationKind::Rent,
    OperationKind::SaleCash,
    OperationKind::SaleInstallment,
];
