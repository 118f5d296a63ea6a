//! Product entity and transfer object.

use serde::{Deserialize, Serialize};

use storefront_core::{CategoryId, Entity, ProductId};

/// Image assigned to every product on creation.
pub const DEFAULT_PRODUCT_IMAGE: &str = "default.png";

/// Persisted product entity.
///
/// `id` is `None` until the product store assigns one; `category_id` is the
/// owning category once the product has been attached to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Option<ProductId>,
    pub name: String,
    pub image: String,
    pub description: String,
    pub quantity: u32,
    pub price: f64,
    /// Discount as a percentage of `price` (e.g. `10.0` means 10%).
    pub discount: f64,
    pub special_price: f64,
    pub category_id: Option<CategoryId>,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64, discount: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            image: String::new(),
            description: String::new(),
            quantity: 0,
            price,
            discount,
            special_price: special_price(price, discount),
            category_id: None,
        }
    }

    pub fn with_id(mut self, id: ProductId) -> Self {
        self.id = Some(id);
        self
    }

    /// Attach this product to its owning category.
    pub fn assign_to(&mut self, category_id: CategoryId) {
        self.category_id = Some(category_id);
    }

    /// Recompute `special_price` from the current price and discount.
    pub fn refresh_special_price(&mut self) {
        self.special_price = special_price(self.price, self.discount);
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Option<Self::Id> {
        self.id
    }
}

/// Price after applying a percentage discount.
pub fn special_price(price: f64, discount: f64) -> f64 {
    price - (discount * 0.01) * price
}

/// Transfer object for products at the service boundary.
///
/// Serialized with camelCase keys. Every field but the name has a default so
/// clients may post partial payloads such as `{"productName", "price", "discount"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    #[serde(default)]
    pub product_id: Option<ProductId>,
    pub product_name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub special_price: f64,
}

impl ProductDto {
    pub fn new(product_name: impl Into<String>, price: f64, discount: f64) -> Self {
        Self {
            product_id: None,
            product_name: product_name.into(),
            image: String::new(),
            description: String::new(),
            quantity: 0,
            price,
            discount,
            special_price: 0.0,
        }
    }
}
