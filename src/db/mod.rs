//! Database module: models and schema for the asset store.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows and conversions
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: schema bootstrap and row access over sqlx

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{Asset, NewAsset};
pub use schema::SQLITE_INIT;
pub use sqlite::{AssetStorage, SqlitePool, connect, ensure_schema};
