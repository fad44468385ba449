use axum::{extract::{State, Path}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::session::CurrentSession;
use crate::api::dtos::requests::{CompleteBookingRequest, CreateBookingRequest};
use crate::api::dtos::responses::PaymentResultResponse;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

/// Books the seats currently selected in the caller's session.
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    CurrentSession(mut session): CurrentSession,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    info!("create_booking: user {} showtime {}", payload.user_id, payload.showtime_id);

    let selection = session.selection.clone()
        .ok_or(AppError::Validation("No seat selection in progress".into()))?;

    let booking = state.booking_service
        .create_booking(&mut session, &payload.user_id, &payload.movie_id, &payload.showtime_id, &selection)
        .await?;
    state.session_repo.save(&session).await?;

    Ok((StatusCode::CREATED, Json(booking)))
}

pub async fn get_active_booking(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.booking_service.active_booking(&session).await?
        .ok_or(AppError::NotFound("No active booking".into()))?;
    Ok(Json(booking))
}

pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.booking_service.get_booking(&booking_id).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;
    Ok(Json(booking))
}

/// Unknown or already settled bookings answer `{"success": false}`.
pub async fn complete_booking(
    State(state): State<Arc<AppState>>,
    CurrentSession(mut session): CurrentSession,
    Path(booking_id): Path<String>,
    Json(payload): Json<CompleteBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let success = state.booking_service
        .complete_booking(&mut session, &booking_id, payload.payment_method)
        .await?;
    state.session_repo.save(&session).await?;
    Ok(Json(PaymentResultResponse { success }))
}

pub async fn fail_booking(
    State(state): State<Arc<AppState>>,
    CurrentSession(mut session): CurrentSession,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let success = state.booking_service.fail_booking(&mut session, &booking_id).await?;
    state.session_repo.save(&session).await?;
    Ok(Json(PaymentResultResponse { success }))
}

pub async fn list_user_bookings(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.booking_service.list_bookings_for_user(&user_id).await?))
}
