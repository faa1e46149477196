//! # Repositories
//!
//! Typed access to the catalog collections. Each repository wraps one
//! `Collection<T>` where `T` is the matching eshop-core document shape, so
//! what the database stores is exactly what the session state carries.

pub mod category;
pub mod product;

pub use category::CategoryRepository;
pub use product::ProductRepository;
