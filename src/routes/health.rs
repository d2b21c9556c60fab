use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

/// Health check endpoint; also reports what the game data loaded as
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let catalog = state.assets.catalog();
    let lexicon = state.assets.lexicon();

    // Empty data still serves, but no round can ever score
    let status = if catalog.is_empty() || lexicon.is_empty() {
        "degraded"
    } else {
        "ok"
    };

    Json(json!({
        "status": status,
        "service": "word-rack-backend",
        "version": env!("CARGO_PKG_VERSION"),
        "assets": {
            "letters": catalog.len(),
            "tiles": catalog.total_supply(),
            "words": lexicon.len()
        }
    }))
}
