//! Category use cases.

use tracing::{info, instrument, warn};

use storefront_catalog::{Category, CategoryDto, ModelMapper};
use storefront_core::{CategoryId, DomainError};

use crate::error::CatalogError;
use crate::repository::CategoryRepository;

#[derive(Debug, Clone)]
pub struct CategoryService<C, M> {
    categories: C,
    mapper: M,
}

impl<C, M> CategoryService<C, M>
where
    C: CategoryRepository,
    M: ModelMapper<CategoryDto, Category> + ModelMapper<Category, CategoryDto>,
{
    pub fn new(categories: C, mapper: M) -> Self {
        Self { categories, mapper }
    }

    /// Create a category. Names are unique across the catalog.
    ///
    /// Any identifier on the input is ignored; the store assigns one.
    #[instrument(skip(self, input), fields(category_name = %input.category_name))]
    pub fn create_category(&self, input: &CategoryDto) -> Result<CategoryDto, CatalogError> {
        if self.categories.find_by_name(&input.category_name)?.is_some() {
            warn!("category name already taken");
            return Err(DomainError::validation(format!(
                "Category with the name {} already exists !!!",
                input.category_name
            ))
            .into());
        }

        let fresh = CategoryDto {
            category_id: None,
            ..input.clone()
        };
        let category = <M as ModelMapper<CategoryDto, Category>>::map(&self.mapper, &fresh);
        let saved = self.categories.save(category)?;
        let out = self.to_dto(&saved);
        info!(category_id = ?out.category_id, "category created");
        Ok(out)
    }

    pub fn list_categories(&self) -> Result<Vec<CategoryDto>, CatalogError> {
        Ok(self
            .categories
            .find_all()?
            .iter()
            .map(|c| self.to_dto(c))
            .collect())
    }

    pub fn get_category(&self, category_id: CategoryId) -> Result<CategoryDto, CatalogError> {
        let category = self
            .categories
            .find_by_id(category_id)?
            .ok_or_else(|| DomainError::not_found("Category", "categoryId", category_id))?;
        Ok(self.to_dto(&category))
    }

    fn to_dto(&self, category: &Category) -> CategoryDto {
        <M as ModelMapper<Category, CategoryDto>>::map(&self.mapper, category)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use storefront_catalog::FieldMapper;

    use super::*;
    use crate::repository::InMemoryCatalogStore;

    fn service() -> CategoryService<Arc<InMemoryCatalogStore>, FieldMapper> {
        CategoryService::new(Arc::new(InMemoryCatalogStore::new()), FieldMapper)
    }

    #[test]
    fn create_category_assigns_an_id() {
        let service = service();

        let created = service.create_category(&CategoryDto::new("Fitness")).unwrap();

        assert_eq!(created.category_id, Some(CategoryId::new(1)));
        assert_eq!(created.category_name, "Fitness");
    }

    #[test]
    fn create_category_ignores_client_supplied_id() {
        let service = service();
        let input = CategoryDto {
            category_id: Some(CategoryId::new(77)),
            category_name: "Fitness".to_string(),
        };

        let created = service.create_category(&input).unwrap();

        assert_eq!(created.category_id, Some(CategoryId::new(1)));
    }

    #[test]
    fn create_category_rejects_taken_name() {
        let service = service();
        service.create_category(&CategoryDto::new("Fitness")).unwrap();

        let err = service.create_category(&CategoryDto::new("Fitness")).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Category with the name Fitness already exists !!!"
        );
        assert_eq!(service.list_categories().unwrap().len(), 1);
    }

    #[test]
    fn get_category_reports_missing_id() {
        let service = service();

        let err = service.get_category(CategoryId::new(999)).unwrap_err();

        assert_eq!(err.to_string(), "Category not found with categoryId: 999");
    }

    #[test]
    fn list_categories_in_id_order() {
        let service = service();
        for name in ["Fitness", "Books", "Garden"] {
            service.create_category(&CategoryDto::new(name)).unwrap();
        }

        let names: Vec<_> = service
            .list_categories()
            .unwrap()
            .into_iter()
            .map(|c| c.category_name)
            .collect();
        assert_eq!(names, vec!["Fitness", "Books", "Garden"]);
    }
}
