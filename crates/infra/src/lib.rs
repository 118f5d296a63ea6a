//! Infrastructure layer: storage adapters and application services.

pub mod category_service;
pub mod error;
pub mod product_service;
pub mod repository;


pub use category_service::CategoryService;
pub use error::CatalogError;
pub use product_service::{PRODUCT_ALREADY_EXISTS, ProductService};
pub use repository::{
    CategoryRepository, InMemoryCatalogStore, ProductRepository, RepositoryError,
};
