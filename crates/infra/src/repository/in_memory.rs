//! In-memory catalog store.

use std::collections::BTreeMap;
use std::sync::RwLock;

use tracing::debug;

use storefront_catalog::{Category, Product};
use storefront_core::{CategoryId, Entity, ProductId};

use super::{CategoryRepository, ProductRepository, RepositoryError};

/// In-memory category + product store for tests/dev.
///
/// Both repository traits are served from one table set so that a product
/// saved through [`ProductRepository`] shows up under its category on the next
/// [`CategoryRepository::find_by_id`], ordered by product id. Identifiers
/// start at 1.
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    inner: RwLock<Tables>,
}

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<CategoryId, String>,
    products: BTreeMap<ProductId, Product>,
    last_category_id: u64,
    last_product_id: u64,
}

impl Tables {
    fn assemble(&self, id: CategoryId, name: &str) -> Category {
        let owned = self
            .products
            .values()
            .filter(|p| p.category_id == Some(id))
            .cloned()
            .collect();
        Category::new(name).with_id(id).with_products(owned)
    }
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored products across all categories.
    pub fn product_count(&self) -> Result<usize, RepositoryError> {
        let tables = self.inner.read().map_err(|_| RepositoryError::Poisoned)?;
        Ok(tables.products.len())
    }
}

impl CategoryRepository for InMemoryCatalogStore {
    fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, RepositoryError> {
        let tables = self.inner.read().map_err(|_| RepositoryError::Poisoned)?;
        Ok(tables
            .categories
            .get(&id)
            .map(|name| tables.assemble(id, name)))
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Category>, RepositoryError> {
        let tables = self.inner.read().map_err(|_| RepositoryError::Poisoned)?;
        Ok(tables
            .categories
            .iter()
            .find(|(_, n)| n.as_str() == name)
            .map(|(id, n)| tables.assemble(*id, n)))
    }

    fn find_all(&self) -> Result<Vec<Category>, RepositoryError> {
        let tables = self.inner.read().map_err(|_| RepositoryError::Poisoned)?;
        Ok(tables
            .categories
            .iter()
            .map(|(id, name)| tables.assemble(*id, name))
            .collect())
    }

    fn save(&self, category: Category) -> Result<Category, RepositoryError> {
        let mut tables = self.inner.write().map_err(|_| RepositoryError::Poisoned)?;
        let id = match category.id() {
            Some(id) => {
                tables.last_category_id = tables.last_category_id.max(id.get());
                id
            }
            None => {
                tables.last_category_id += 1;
                CategoryId::new(tables.last_category_id)
            }
        };
        tables.categories.insert(id, category.name().to_string());
        debug!(category_id = %id, "category stored");
        Ok(tables.assemble(id, category.name()))
    }
}

impl ProductRepository for InMemoryCatalogStore {
    fn save(&self, mut product: Product) -> Result<Product, RepositoryError> {
        let mut tables = self.inner.write().map_err(|_| RepositoryError::Poisoned)?;
        if let Some(category_id) = product.category_id {
            if !tables.categories.contains_key(&category_id) {
                return Err(RepositoryError::Integrity(format!(
                    "product references missing category {category_id}"
                )));
            }
        }
        let id = match product.id {
            Some(id) => {
                tables.last_product_id = tables.last_product_id.max(id.get());
                id
            }
            None => {
                tables.last_product_id += 1;
                ProductId::new(tables.last_product_id)
            }
        };
        product.id = Some(id);
        tables.products.insert(id, product.clone());
        debug!(product_id = %id, "product stored");
        Ok(product)
    }
}
