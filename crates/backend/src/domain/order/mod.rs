pub mod email;
pub mod product_link;
pub mod repository;
pub mod service;
pub mod supplier_link;
