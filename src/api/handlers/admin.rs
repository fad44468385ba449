use axum::{extract::{State, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::AdminBookingQuery;
use crate::domain::models::booking::PaymentStatus;
use crate::domain::services::reporting::{dashboard_stats, search_bookings};
use crate::error::AppError;
use std::sync::Arc;

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AdminBookingQuery>,
) -> Result<impl IntoResponse, AppError> {
    let status = match query.status.as_deref().map(str::trim) {
        None | Some("") | Some("all") => None,
        Some(raw) => Some(raw.parse::<PaymentStatus>().map_err(AppError::Validation)?),
    };

    let bookings = state.booking_service.list_all().await?;
    let movies = state.catalog.list_movies().await?;
    Ok(Json(search_bookings(&bookings, &movies, query.search.as_deref(), status)))
}

pub async fn get_stats(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let movies = state.catalog.list_movies().await?;
    let showtimes = state.catalog.list_showtimes().await?;
    let bookings = state.booking_service.list_all().await?;
    Ok(Json(dashboard_stats(movies.len(), showtimes.len(), &bookings)))
}
