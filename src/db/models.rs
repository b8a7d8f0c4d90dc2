use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A catalogued item as stored in the `asset` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Asset {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub price: f64,
    pub website: Option<String>,
    pub description: Option<String>,
}

/// Request payload for creating an asset; the store assigns the id.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NewAsset {
    pub name: String,
    pub code: String,
    pub price: f64,
    pub website: Option<String>,
    pub description: Option<String>,
}

impl NewAsset {
    /// Promote to a stored `Asset` once the engine has assigned an id.
    pub fn into_asset(self, id: i64) -> Asset {
        Asset {
            id,
            name: self.name,
            code: self.code,
            price: self.price,
            website: self.website,
            description: self.description,
        }
    }
}
