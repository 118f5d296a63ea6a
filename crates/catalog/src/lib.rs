//! Catalog domain module.
//!
//! Categories own products; product names are unique within their category.
//! This crate is deterministic domain logic only (no IO, no HTTP, no storage).

pub mod category;
pub mod mapper;
pub mod product;

pub use category::{Category, CategoryDto};
pub use mapper::{FieldMapper, ModelMapper};
pub use product::{DEFAULT_PRODUCT_IMAGE, Product, ProductDto};
