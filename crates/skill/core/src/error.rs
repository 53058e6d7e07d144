//! Common error infrastructure for skill-core.
//!
//! Domain-specific errors (e.g., [`crate::CatalogError`]) are defined next to the
//! types they validate. This module holds the classification shared by all of them.
//!
//! Gameplay operations on progress records never fail: out-of-range values are
//! clamped. Errors only arise at the data boundary (catalog loading, lookups by
//! identifier, legacy save conversion).

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Fatal**: Unrecoverable errors, content cannot be used
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown skill id, legacy id outside the table
    Validation,

    /// Fatal error - content is unusable, loading must abort.
    ///
    /// Examples: duplicate identifiers in a catalog file
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if the content that raised this error cannot be used.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all skill-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for error categorization and testing.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
