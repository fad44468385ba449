use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::session::CurrentSession;
use crate::api::dtos::requests::{StartSelectionRequest, ToggleSeatRequest};
use crate::api::dtos::responses::{SelectionResponse, SelectionStartedResponse};
use crate::domain::models::{seat::SeatKey, session::SessionState};
use crate::domain::services::{pricing, selection};
use crate::error::AppError;
use std::sync::Arc;

pub async fn start_selection(
    State(state): State<Arc<AppState>>,
    CurrentSession(mut session): CurrentSession,
    Json(payload): Json<StartSelectionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let seats = state.selection_service
        .start_selection(&mut session, &payload.movie_id, &payload.showtime_id)
        .await?;
    state.session_repo.save(&session).await?;

    let selection = session.selection
        .ok_or(AppError::InternalWithMsg("Selection missing after start".into()))?;
    Ok(Json(SelectionStartedResponse { selection, seats }))
}

pub async fn get_selection(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(selection_view(&state, session).await?))
}

pub async fn toggle_seat(
    State(state): State<Arc<AppState>>,
    CurrentSession(mut session): CurrentSession,
    Json(payload): Json<ToggleSeatRequest>,
) -> Result<impl IntoResponse, AppError> {
    selection::toggle_seat(&mut session, SeatKey::new(payload.row, payload.seat_number))?;
    state.session_repo.save(&session).await?;
    Ok(Json(selection_view(&state, session).await?))
}

pub async fn reset_selection(
    State(state): State<Arc<AppState>>,
    CurrentSession(mut session): CurrentSession,
) -> Result<impl IntoResponse, AppError> {
    selection::reset_selection(&mut session);
    state.session_repo.save(&session).await?;
    Ok(Json(selection_view(&state, session).await?))
}

async fn selection_view(state: &AppState, session: SessionState) -> Result<SelectionResponse, AppError> {
    let Some(selection) = session.selection else {
        return Ok(SelectionResponse { selection: None, quote: None });
    };

    let quote = state.catalog.find_showtime(&selection.showtime_id).await?
        .map(|showtime| pricing::quote(&selection.seats, &showtime));
    Ok(SelectionResponse { selection: Some(selection), quote })
}
