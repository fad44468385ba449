use axum::{
    body::Body,
    extract::Request,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{admin, booking, hall, health, movie, seat, selection, showtime};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tower_cookies::CookieManagerLayer;
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Catalogue
        .route("/api/v1/movies", get(movie::list_movies))
        .route("/api/v1/movies/{movie_id}", get(movie::get_movie))
        .route("/api/v1/movies/{movie_id}/showtimes", get(movie::list_movie_showtimes))
        .route("/api/v1/genres", get(movie::list_genres))
        .route("/api/v1/halls", get(hall::list_halls))
        .route("/api/v1/halls/{hall_id}", get(hall::get_hall))
        .route("/api/v1/showtimes/{showtime_id}", get(showtime::get_showtime))

        // Seats
        .route("/api/v1/halls/{hall_id}/showtimes/{showtime_id}/seats", get(seat::get_seats))

        // Session selection
        .route(
            "/api/v1/session/selection",
            post(selection::start_selection).get(selection::get_selection).delete(selection::reset_selection),
        )
        .route("/api/v1/session/selection/toggle", post(selection::toggle_seat))

        // Bookings
        .route("/api/v1/bookings", post(booking::create_booking))
        .route("/api/v1/bookings/active", get(booking::get_active_booking))
        .route("/api/v1/bookings/{booking_id}", get(booking::get_booking))
        .route("/api/v1/bookings/{booking_id}/complete", post(booking::complete_booking))
        .route("/api/v1/bookings/{booking_id}/fail", post(booking::fail_booking))
        .route("/api/v1/users/{user_id}/bookings", get(booking::list_user_bookings))

        // Admin
        .route("/api/v1/admin/bookings", get(admin::list_bookings))
        .route("/api/v1/admin/stats", get(admin::get_stats))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        session_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
