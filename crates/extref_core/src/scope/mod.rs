//! Transaction scopes: the identity of one logical effectful operation.
//!
//! A scope is the `(operation, primary_id, secondary_id)` tuple the backend
//! deduplicates on. Validation happens once, at construction; every provider
//! operation on a constructed scope succeeds.

pub mod kind;

pub use kind::{ALL_KINDS, EXPECTED_KIND_COUNT, OperationKind};

use std::fmt;

/// Characters that cannot appear in scope identifiers: `:` separates storage
/// key segments, `-` separates token segments. Admitting either would let two
/// distinct scopes derive the same key or token.
const RESERVED_CHARS: [char; 2] = [':', '-'];

// --- Scope error --------------------------------------------------------

/// Error returned when scope identifiers cannot form unambiguous keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeError {
    /// A required identifier was empty.
    EmptyId { field: &'static str },
    /// An identifier contained a reserved delimiter character.
    ReservedChar { field: &'static str, ch: char },
}

impl fmt::Display for ScopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeError::EmptyId { field } => {
                write!(f, "scope field '{field}' is empty")
            }
            ScopeError::ReservedChar { field, ch } => {
                write!(f, "scope field '{field}' contains reserved character '{ch}'")
            }
        }
    }
}

impl std::error::Error for ScopeError {}

// --- Scope --------------------------------------------------------------

/// Identifies one logical transaction for deduplication purposes.
///
/// `operation` is the closed kind of effectful action, `primary_id` the
/// acting user, `secondary_id` the optional target resource (plan id,
/// proposal id). Fields are private so a scope can only exist validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RefScope {
    operation: OperationKind,
    primary_id: String,
    secondary_id: Option<String>,
}

impl RefScope {
    /// Build a validated scope.
    ///
    /// `primary_id` is required and non-empty; `secondary_id`, when present,
    /// must be non-empty too. Neither may contain a reserved delimiter
    /// character.
    pub fn new(
        operation: OperationKind,
        primary_id: &str,
        secondary_id: Option<&str>,
    ) -> Result<RefScope, ScopeError> {
        validate_id("primary_id", primary_id)?;
        if let Some(secondary) = secondary_id {
            validate_id("secondary_id", secondary)?;
        }

        Ok(RefScope {
            operation,
            primary_id: primary_id.to_string(),
            secondary_id: secondary_id.map(str::to_string),
        })
    }

    /// Kind of effectful action this scope belongs to.
    pub fn operation(&self) -> OperationKind {
        self.operation
    }

    /// Acting user's identifier.
    pub fn primary_id(&self) -> &str {
        &self.primary_id
    }

    /// Target resource identifier, if the operation has one.
    pub fn secondary_id(&self) -> Option<&str> {
        self.secondary_id.as_deref()
    }
}

fn validate_id(field: &'static str, value: &str) -> Result<(), ScopeError> {
    if value.is_empty() {
        return Err(ScopeError::EmptyId { field });
    }
    for ch in RESERVED_CHARS {
        if value.contains(ch) {
            return Err(ScopeError::ReservedChar { field, ch });
        }
    }
    Ok(())
}
