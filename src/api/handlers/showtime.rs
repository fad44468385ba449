use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use std::sync::Arc;

pub async fn get_showtime(
    State(state): State<Arc<AppState>>,
    Path(showtime_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let showtime = state.catalog.find_showtime(&showtime_id).await?
        .ok_or(AppError::NotFound("Showtime not found".into()))?;
    Ok(Json(showtime))
}
