use super::{AppState, CurrentUser};
use crate::domain::KalturaStatus;
use axum::{extract::State, Json};
use tracing::debug;

/// `GET /api/v1/services/kaltura`
pub async fn show_kaltura_config(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Json<KalturaStatus> {
    debug!(user_id = %user.id, "Serving kaltura config");
    Json(state.services.kaltura_status().await)
}
