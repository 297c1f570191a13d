use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The sole domain entity: a catalog product.
///
/// `id` is assigned server-side at creation time and never changes
/// afterwards. `price` is kept as a [`Decimal`] internally but crosses the
/// wire as a plain JSON number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: String,
    pub in_stock: bool,
}

/// The three records every fresh store starts with.
///
/// Fixed ids ("1".."3") keep the seed data addressable in smoke tests and
/// demos; generated records use UUIDs instead.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "Laptop".to_string(),
            description: "High-performance laptop with 16GB RAM".to_string(),
            price: Decimal::from(1200),
            category: "electronics".to_string(),
            in_stock: true,
        },
        Product {
            id: "2".to_string(),
            name: "Smartphone".to_string(),
            description: "Latest model with 128GB storage".to_string(),
            price: Decimal::from(800),
            category: "electronics".to_string(),
            in_stock: true,
        },
        Product {
            id: "3".to_string(),
            name: "Coffee Maker".to_string(),
            description: "Programmable coffee maker with timer".to_string(),
            price: Decimal::from(50),
            category: "kitchen".to_string(),
            in_stock: false,
        },
    ]
}
