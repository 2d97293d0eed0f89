use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Malformed request: {message}")]
    Malformed { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    /// Opaque: every credential check collapses into this variant.
    #[error("Authentication failed")]
    Authentication,

    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("Immutable field: {field}")]
    ImmutableField { field: String },

    #[error("No updatable fields supplied")]
    NoUpdatableFields,

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn immutable_field(field: impl Into<String>) -> Self {
        Self::ImmutableField {
            field: field.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("Account 'alice01' not found");
        assert_eq!(error.to_string(), "Not found: Account 'alice01' not found");
    }

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("user_id: too short");
        assert_eq!(error.to_string(), "Validation error: user_id: too short");
    }

    #[test]
    fn test_authentication_error_is_opaque() {
        assert_eq!(DomainError::Authentication.to_string(), "Authentication failed");
    }

    #[test]
    fn test_immutable_field_error() {
        let error = DomainError::immutable_field("password");
        assert_eq!(error.to_string(), "Immutable field: password");
    }
}
