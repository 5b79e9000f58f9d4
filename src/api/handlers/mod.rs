//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one resource.

pub mod companies;
pub mod health;
pub mod products;

pub use companies::{
    company_list_handler, create_company_handler, delete_company_handler, get_company_handler,
    replace_company_handler, update_company_handler,
};
pub use health::health_handler;
pub use products::{
    create_product_handler, delete_product_handler, get_product_handler, product_list_handler,
    replace_product_handler, update_product_handler,
};
