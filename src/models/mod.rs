mod api;
mod product;

pub use api::{
    DEFAULT_LIMIT, DEFAULT_PAGE, FilterParams, FilterResponse, HealthResponse, NewProduct,
    ProductPatch, SearchParams,
};
pub use product::{Product, seed_products};
