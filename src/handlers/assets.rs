use crate::db::models::{Asset, NewAsset};
use crate::error::ApiError;
use crate::router::AssetApiState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::info;

/// POST /assets -> stores a new asset and returns it with the assigned id.
pub async fn create_asset(
    State(state): State<AssetApiState>,
    Json(asset): Json<NewAsset>,
) -> Result<(StatusCode, Json<Asset>), ApiError> {
    let id = state.storage.insert(&asset).await?;
    info!(id, code = %asset.code, "asset created");
    Ok((StatusCode::CREATED, Json(asset.into_asset(id))))
}

/// GET /assets -> all stored assets, ordered by id.
pub async fn list_assets(
    State(state): State<AssetApiState>,
) -> Result<Json<Vec<Asset>>, ApiError> {
    let assets = state.storage.list().await?;
    Ok(Json(assets))
}

/// GET /assets/{id} -> one asset, 404 when absent.
pub async fn get_asset(
    State(state): State<AssetApiState>,
    Path(id): Path<i64>,
) -> Result<Json<Asset>, ApiError> {
    let asset = state
        .storage
        .get_by_id(id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(asset))
}
