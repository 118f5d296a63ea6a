//! Storage abstractions for categories and products.
//!
//! Services only ever see these traits; concrete stores are constructed by the
//! caller and injected.

pub mod in_memory;

use std::sync::Arc;

use thiserror::Error;

use storefront_catalog::{Category, Product};
use storefront_core::CategoryId;

pub use in_memory::InMemoryCatalogStore;

/// Persistence fault raised by a store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// A writer panicked while holding the store lock.
    #[error("storage lock poisoned")]
    Poisoned,

    /// A write would break a referential constraint.
    #[error("integrity violation: {0}")]
    Integrity(String),

    #[error("storage error: {0}")]
    Storage(String),
}

/// Category store.
pub trait CategoryRepository: Send + Sync {
    /// Load a category together with the products it owns, ordered by id.
    fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, RepositoryError>;

    fn find_by_name(&self, name: &str) -> Result<Option<Category>, RepositoryError>;

    /// All categories ordered by identifier.
    fn find_all(&self) -> Result<Vec<Category>, RepositoryError>;

    /// Insert (no id) or update (with id) a category record.
    ///
    /// Owned products are not cascaded; they are written through
    /// [`ProductRepository::save`].
    fn save(&self, category: Category) -> Result<Category, RepositoryError>;
}

/// Product store.
pub trait ProductRepository: Send + Sync {
    /// Persist a product and return its stored form (with a generated id).
    fn save(&self, product: Product) -> Result<Product, RepositoryError>;
}

impl<S> CategoryRepository for Arc<S>
where
    S: CategoryRepository + ?Sized,
{
    fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, RepositoryError> {
        (**self).find_by_id(id)
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Category>, RepositoryError> {
        (**self).find_by_name(name)
    }

    fn find_all(&self) -> Result<Vec<Category>, RepositoryError> {
        (**self).find_all()
    }

    fn save(&self, category: Category) -> Result<Category, RepositoryError> {
        (**self).save(category)
    }
}

impl<S> ProductRepository for Arc<S>
where
    S: ProductRepository + ?Sized,
{
    fn save(&self, product: Product) -> Result<Product, RepositoryError> {
        (**self).save(product)
    }
}
