//! Service-level error type.

use thiserror::Error;

use storefront_core::DomainError;

use crate::repository::RepositoryError;

/// Error returned by the catalog services.
///
/// Domain failures and storage faults are kept apart so callers can map them
/// independently; neither is ever retried here.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl CatalogError {
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            CatalogError::Domain(e) => Some(e),
            CatalogError::Repository(_) => None,
        }
    }
}
