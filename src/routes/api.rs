use axum::extract::State;
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::state::AppState;

/// Cache status for the front page: how many remote assets are usable.
pub async fn asset_status(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let (loaded, unavailable) = state.assets.status().await;
    axum::Json(serde_json::json!({
        "loaded": loaded,
        "unavailable": unavailable,
    }))
}
