//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (missing
/// resources, rule violations). Persistence faults belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A referenced resource does not exist.
    ///
    /// Carries the resource type and the key that was searched for.
    #[error("{resource} not found with {field}: {value}")]
    NotFound {
        resource: &'static str,
        field: &'static str,
        value: String,
    },

    /// A business rule was violated. Displays as the bare message.
    #[error("{0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn not_found(
        resource: &'static str,
        field: &'static str,
        value: impl core::fmt::Display,
    ) -> Self {
        Self::NotFound {
            resource,
            field,
            value: value.to_string(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_resource_and_key() {
        let err = DomainError::not_found("Category", "categoryId", 999);
        assert_eq!(err.to_string(), "Category not found with categoryId: 999");
        assert!(err.is_not_found());
    }

    #[test]
    fn validation_displays_bare_message() {
        let err = DomainError::validation("Product already exist!!");
        assert_eq!(err.to_string(), "Product already exist!!");
        assert!(!err.is_not_found());
    }
}
