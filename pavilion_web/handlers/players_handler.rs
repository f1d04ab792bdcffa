use axum::{Json, extract::State};

use pavilion_types::PlayerSummary;

use crate::handlers::ApiError;
use crate::http::AppState;

/// GET /api/v1/player-stats – List the club roster.
pub async fn player_stats(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlayerSummary>>, ApiError> {
    let players = state.roster.list_players().await.map_err(|e| {
        tracing::error!("Error fetching players: {e}");
        ApiError::Upstream("Failed to fetch players".to_string())
    })?;

    Ok(Json(players))
}
