use crate::db::AssetStorage;
use crate::handlers::assets;
use axum::{Router, routing::get};

#[derive(Clone)]
pub struct AssetApiState {
    pub storage: AssetStorage,
}

impl AssetApiState {
    pub fn new(storage: AssetStorage) -> Self {
        Self { storage }
    }
}

pub fn asset_router(state: AssetApiState) -> Router {
    Router::new()
        .route(
            "/assets",
            get(assets::list_assets).post(assets::create_asset),
        )
        .route("/assets/{id}", get(assets::get_asset))
        .with_state(state)
}
