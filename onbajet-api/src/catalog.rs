use axum::{
    extract::{Path, State},
    Json,
};
use onbajet_catalog::MenuItem;

use crate::{error::AppError, state::AppState};

/// GET /v1/catalog
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<MenuItem>>, AppError> {
    let items = state.catalog.list_items().await?;
    Ok(Json(items))
}

/// GET /v1/catalog/{id}
pub async fn get_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<Json<MenuItem>, AppError> {
    let item = state
        .catalog
        .get_item(&item_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Item not found: {}", item_id)))?;
    Ok(Json(item))
}
