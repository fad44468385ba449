use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use std::sync::Arc;

pub async fn list_halls(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.catalog.list_halls().await?))
}

pub async fn get_hall(
    State(state): State<Arc<AppState>>,
    Path(hall_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let hall = state.catalog.find_hall(&hall_id).await?
        .ok_or(AppError::NotFound("Hall not found".into()))?;
    Ok(Json(hall))
}
