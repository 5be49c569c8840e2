//! Database module: models, schema and storage for the item table.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows and wire shapes
//! - `schema.rs`: SQL DDL for initializing the database (MySQL)
//! - `pool.rs`: connection pool construction
//! - `store.rs`: CRUD operations against the pool

pub mod models;
pub mod pool;
pub mod schema;
pub mod store;

pub use models::{CreatedItem, Item, NewItem};
pub use pool::open_pool;
pub use schema::MYSQL_INIT;
pub use store::ItemStore;
