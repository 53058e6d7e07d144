//! Skill catalog errors.

use crate::error::{ErrorSeverity, GameError};

use super::SkillId;

/// Errors raised while loading skill content or resolving skill identifiers.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CatalogError {
    /// No definition is registered under this identifier.
    #[error("skill '{0}' not found")]
    NotFound(SkillId),

    /// A definition with this identifier is already registered.
    #[error("skill '{0}' is already defined")]
    Conflict(SkillId),

    /// A configuration record failed validation.
    #[error("malformed skill definition '{ident}': {reason}")]
    Malformed { ident: String, reason: String },

    /// Integer id from an old save is outside the legacy table.
    #[error("legacy skill id {0} is invalid")]
    InvalidLegacyId(i64),

    /// Random selection from a catalog with no regular skills.
    #[error("skill catalog has no selectable skills")]
    Empty,
}

impl CatalogError {
    pub(crate) fn malformed(ident: &str, reason: impl Into<String>) -> Self {
        Self::Malformed {
            ident: ident.to_owned(),
            reason: reason.into(),
        }
    }
}

impl GameError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        use CatalogError::*;
        match self {
            // Bad content aborts the load
            Conflict(_) | Malformed { .. } => ErrorSeverity::Fatal,

            NotFound(_) | InvalidLegacyId(_) | Empty => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use CatalogError::*;
        match self {
            NotFound(_) => "SKILL_NOT_FOUND",
            Conflict(_) => "SKILL_CONFLICT",
            Malformed { .. } => "SKILL_MALFORMED",
            InvalidLegacyId(_) => "SKILL_INVALID_LEGACY_ID",
            Empty => "SKILL_CATALOG_EMPTY",
        }
    }
}
