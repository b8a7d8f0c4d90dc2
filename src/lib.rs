pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod router;

pub use db::AssetStorage;
pub use error::{ApiError, StorageError};
