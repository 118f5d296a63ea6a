use std::sync::Arc;

use storefront_catalog::{CategoryDto, FieldMapper};
use storefront_core::DomainError;
use storefront_infra::{CatalogError, CategoryService, InMemoryCatalogStore, ProductService};

type Store = Arc<InMemoryCatalogStore>;

/// Services shared by every handler.
#[derive(Debug, Clone)]
pub struct AppServices {
    pub categories: CategoryService<Store, FieldMapper>,
    pub products: ProductService<Store, Store, FieldMapper>,
}

impl AppServices {
    /// Wire both services over one in-memory store.
    pub fn in_memory() -> Self {
        let store: Store = Arc::new(InMemoryCatalogStore::new());
        Self {
            categories: CategoryService::new(store.clone(), FieldMapper),
            products: ProductService::new(store.clone(), store, FieldMapper),
        }
    }

    /// Create the named categories, skipping names that already exist.
    pub fn seed_categories(&self, names: &[String]) -> Result<(), CatalogError> {
        for name in names {
            match self.categories.create_category(&CategoryDto::new(name.as_str())) {
                Ok(created) => {
                    tracing::info!(category_id = ?created.category_id, %name, "seeded category")
                }
                Err(CatalogError::Domain(DomainError::Validation(_))) => {
                    tracing::debug!(%name, "seed category already present");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}
