//! Entity ↔ transfer-object mapping.

use std::sync::Arc;

use storefront_core::Entity;

use crate::category::{Category, CategoryDto};
use crate::product::{Product, ProductDto};

/// Maps a value of shape `S` into shape `T`, field by field.
///
/// Mappers are stateless from the caller's point of view and never keep the
/// source beyond the call.
pub trait ModelMapper<S, T>: Send + Sync {
    fn map(&self, source: &S) -> T;
}

impl<S, T, M> ModelMapper<S, T> for Arc<M>
where
    M: ModelMapper<S, T> + ?Sized,
{
    fn map(&self, source: &S) -> T {
        (**self).map(source)
    }
}

/// Default mapper copying same-named fields between entities and DTOs.
///
/// Ownership is not carried across: a mapped `Product` has no category and a
/// mapped `Category` has no products.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldMapper;

impl ModelMapper<ProductDto, Product> for FieldMapper {
    fn map(&self, dto: &ProductDto) -> Product {
        Product {
            id: dto.product_id,
            name: dto.product_name.clone(),
            image: dto.image.clone(),
            description: dto.description.clone(),
            quantity: dto.quantity,
            price: dto.price,
            discount: dto.discount,
            special_price: dto.special_price,
            category_id: None,
        }
    }
}

impl ModelMapper<Product, ProductDto> for FieldMapper {
    fn map(&self, product: &Product) -> ProductDto {
        ProductDto {
            product_id: product.id,
            product_name: product.name.clone(),
            image: product.image.clone(),
            description: product.description.clone(),
            quantity: product.quantity,
            price: product.price,
            discount: product.discount,
            special_price: product.special_price,
        }
    }
}

impl ModelMapper<CategoryDto, Category> for FieldMapper {
    fn map(&self, dto: &CategoryDto) -> Category {
        let category = Category::new(dto.category_name.clone());
        match dto.category_id {
            Some(id) => category.with_id(id),
            None => category,
        }
    }
}

impl ModelMapper<Category, CategoryDto> for FieldMapper {
    fn map(&self, category: &Category) -> CategoryDto {
        CategoryDto {
            category_id: category.id(),
            category_name: category.name().to_string(),
        }
    }
}
