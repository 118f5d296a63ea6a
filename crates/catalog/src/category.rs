//! Category entity and transfer object.

use serde::{Deserialize, Serialize};

use storefront_core::{CategoryId, Entity, ProductId};

use crate::product::Product;

/// Category entity: owns the products filed under it.
///
/// Products are only added or removed through [`Category::add_product`] and
/// [`Category::remove_product`].
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    id: Option<CategoryId>,
    name: String,
    products: Vec<Product>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            products: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: CategoryId) -> Self {
        self.id = Some(id);
        self
    }

    /// Replace the owned products, re-pointing each at this category.
    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products.clear();
        for product in products {
            self.add_product(product);
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Exact, case-sensitive name match against the owned products.
    pub fn has_product_named(&self, name: &str) -> bool {
        self.products.iter().any(|p| p.name == name)
    }

    pub fn add_product(&mut self, mut product: Product) {
        if let Some(id) = self.id {
            product.assign_to(id);
        }
        self.products.push(product);
    }

    pub fn remove_product(&mut self, product_id: ProductId) -> Option<Product> {
        let idx = self
            .products
            .iter()
            .position(|p| p.id == Some(product_id))?;
        Some(self.products.remove(idx))
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> Option<Self::Id> {
        self.id
    }
}

/// Transfer object for categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    pub category_name: String,
}

impl CategoryDto {
    pub fn new(category_name: impl Into<String>) -> Self {
        Self {
            category_id: None,
            category_name: category_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fitness() -> Category {
        Category::new("Fitness").with_id(CategoryId::new(1))
    }

    #[test]
    fn added_products_point_at_owning_category() {
        let mut category = fitness();
        category.add_product(Product::new("Dumbbell", 1000.0, 10.0));

        assert_eq!(category.products().len(), 1);
        assert_eq!(category.products()[0].category_id, Some(CategoryId::new(1)));
    }

    #[test]
    fn name_check_is_exact_and_case_sensitive() {
        let category = fitness().with_products(vec![Product::new("Dumbbell", 1000.0, 10.0)]);

        assert!(category.has_product_named("Dumbbell"));
        assert!(!category.has_product_named("dumbbell"));
        assert!(!category.has_product_named("Dumbbell "));
    }

    #[test]
    fn remove_product_by_id() {
        let mut category = fitness();
        category.add_product(Product::new("Dumbbell", 1000.0, 10.0).with_id(ProductId::new(5)));
        category.add_product(Product::new("Mat", 30.0, 0.0).with_id(ProductId::new(6)));

        let removed = category.remove_product(ProductId::new(5)).unwrap();
        assert_eq!(removed.name, "Dumbbell");
        assert!(!category.has_product_named("Dumbbell"));
        assert!(category.remove_product(ProductId::new(5)).is_none());
    }

    #[test]
    fn unpersisted_category_has_no_id() {
        let category = Category::new("Books");
        assert!(!category.is_persisted());
        assert!(category.products().is_empty());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: a name is reported present exactly when a product with that name was added.
            #[test]
            fn has_product_named_matches_added_names(
                names in proptest::collection::vec("[A-Za-z][A-Za-z0-9 ]{0,20}", 0..8),
                candidate in "[A-Za-z][A-Za-z0-9 ]{0,20}"
            ) {
                let mut category = fitness();
                for name in &names {
                    category.add_product(Product::new(name.clone(), 10.0, 0.0));
                }
                prop_assert_eq!(category.has_product_named(&candidate), names.contains(&candidate));
            }
        }
    }
}
