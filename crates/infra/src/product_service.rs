//! Product use cases.
//!
//! ```text
//! add_product(category_id, dto)
//!   ↓
//! 1. Load category (NotFound if absent)
//!   ↓
//! 2. Reject a name already used inside that category
//!   ↓
//! 3. Map DTO → entity, attach to category, persist (exactly one write)
//!   ↓
//! 4. Map stored entity → DTO
//! ```
//!
//! Any failure aborts the operation before the write; nothing is retried.

use tracing::{info, instrument, warn};

use storefront_catalog::{DEFAULT_PRODUCT_IMAGE, ModelMapper, Product, ProductDto};
use storefront_core::{CategoryId, DomainError};

use crate::error::CatalogError;
use crate::repository::{CategoryRepository, ProductRepository};

/// Message of the validation error raised for a duplicate product name.
pub const PRODUCT_ALREADY_EXISTS: &str = "Product already exist!!";

/// Product service composed from injected stores and a mapper.
#[derive(Debug, Clone)]
pub struct ProductService<C, P, M> {
    categories: C,
    products: P,
    mapper: M,
}

impl<C, P, M> ProductService<C, P, M>
where
    C: CategoryRepository,
    P: ProductRepository,
    M: ModelMapper<ProductDto, Product> + ModelMapper<Product, ProductDto>,
{
    pub fn new(categories: C, products: P, mapper: M) -> Self {
        Self {
            categories,
            products,
            mapper,
        }
    }

    /// Add a product to a category.
    ///
    /// Fails with `DomainError::NotFound` when the category does not exist and
    /// with `DomainError::Validation(PRODUCT_ALREADY_EXISTS)` when the category
    /// already owns a product of the same (case-sensitive) name.
    #[instrument(skip(self, input), fields(product_name = %input.product_name))]
    pub fn add_product(
        &self,
        category_id: CategoryId,
        input: &ProductDto,
    ) -> Result<ProductDto, CatalogError> {
        let Some(category) = self.categories.find_by_id(category_id)? else {
            warn!("category not found");
            return Err(DomainError::not_found("Category", "categoryId", category_id).into());
        };

        if category.has_product_named(&input.product_name) {
            warn!("duplicate product name in category");
            return Err(DomainError::validation(PRODUCT_ALREADY_EXISTS).into());
        }

        let mut product = <M as ModelMapper<ProductDto, Product>>::map(&self.mapper, input);
        // Always a new record; the store assigns the id.
        product.id = None;
        product.assign_to(category_id);
        product.image = DEFAULT_PRODUCT_IMAGE.to_string();
        product.refresh_special_price();

        let saved = self.products.save(product)?;
        info!(product_id = ?saved.id, "product added");

        Ok(<M as ModelMapper<Product, ProductDto>>::map(&self.mapper, &saved))
    }

    /// Products owned by a category, ordered by id.
    pub fn products_by_category(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<ProductDto>, CatalogError> {
        let category = self
            .categories
            .find_by_id(category_id)?
            .ok_or_else(|| DomainError::not_found("Category", "categoryId", category_id))?;

        Ok(category
            .products()
            .iter()
            .map(|p| <M as ModelMapper<Product, ProductDto>>::map(&self.mapper, p))
            .collect())
    }
}
