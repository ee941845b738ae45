//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Vouch not found: {0}")]
    VouchNotFound(String),

    #[error("Proof not found: {0}")]
    ProofNotFound(String),

    #[error("Team member not found: {0}")]
    TeamMemberNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unknown team role: {0}")]
    UnknownTeamRole(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Duplicate vouch number: {0}")]
    DuplicateVouchNumber(i32),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Short machine-readable error code
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::VouchNotFound(_) => "VOUCH_NOT_FOUND",
            Self::ProofNotFound(_) => "PROOF_NOT_FOUND",
            Self::TeamMemberNotFound(_) => "TEAM_MEMBER_NOT_FOUND",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::UnknownTeamRole(_) => "UNKNOWN_TEAM_ROLE",
            Self::DuplicateVouchNumber(_) => "DUPLICATE_VOUCH_NUMBER",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a not-found error
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::VouchNotFound(_) | Self::ProofNotFound(_) | Self::TeamMemberNotFound(_)
        )
    }

    /// Check if this is a validation error
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::UnknownTeamRole(_))
    }

    /// Check if this is a conflict error
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::DuplicateVouchNumber(_))
    }
}

impl From<crate::value_objects::TeamRoleParseError> for DomainError {
    fn from(err: crate::value_objects::TeamRoleParseError) -> Self {
        Self::UnknownTeamRole(err.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        assert!(DomainError::VouchNotFound("v1".to_string()).is_not_found());
        assert!(DomainError::UnknownTeamRole("Janitor".to_string()).is_validation());
        assert!(DomainError::DuplicateVouchNumber(7).is_conflict());
        assert!(!DomainError::DatabaseError("boom".to_string()).is_not_found());
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            DomainError::VouchNotFound("v1".to_string()).code(),
            "VOUCH_NOT_FOUND"
        );
        assert_eq!(
            DomainError::DatabaseError("boom".to_string()).code(),
            "DATABASE_ERROR"
        );
    }
}
