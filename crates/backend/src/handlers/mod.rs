pub mod auth;
pub mod orders;
pub mod products;
pub mod suppliers;
pub mod users;
