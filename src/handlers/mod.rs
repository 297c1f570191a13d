mod health;
mod products;
mod queries;

pub use health::{health, welcome};
pub use products::{create_product, delete_product, get_product, list_products, update_product};
pub use queries::{filter_products, product_stats, search_products};
