use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn get_seats(
    State(state): State<Arc<AppState>>,
    Path((hall_id, showtime_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    info!("get_seats: hall {} showtime {}", hall_id, showtime_id);
    let seats = state.seat_layout.generate_seats(&hall_id, &showtime_id).await?;
    Ok(Json(seats))
}
