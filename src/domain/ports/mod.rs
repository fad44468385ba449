use crate::domain::models::{
    movie::Movie, hall::Hall, showtime::Showtime, seat::SeatKey,
    booking::{Booking, PaymentMethod, PaymentStatus}, session::SessionState,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashSet;

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn list_movies(&self) -> Result<Vec<Movie>, AppError>;
    async fn find_movie(&self, id: &str) -> Result<Option<Movie>, AppError>;
    async fn list_halls(&self) -> Result<Vec<Hall>, AppError>;
    async fn find_hall(&self, id: &str) -> Result<Option<Hall>, AppError>;
    async fn list_showtimes(&self) -> Result<Vec<Showtime>, AppError>;
    async fn list_showtimes_by_movie(&self, movie_id: &str) -> Result<Vec<Showtime>, AppError>;
    async fn find_showtime(&self, id: &str) -> Result<Option<Showtime>, AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Inserts the booking unless one of its seats is already held by a
    /// non-failed booking of the same showtime (`AppError::Conflict`).
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError>;
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Booking>, AppError>;
    async fn list_by_showtime(&self, showtime_id: &str) -> Result<Vec<Booking>, AppError>;
    async fn list_all(&self) -> Result<Vec<Booking>, AppError>;
    /// Moves a booking from `from` to `to`. Returns `None` when the booking is
    /// missing or no longer in `from`.
    async fn transition_status(
        &self,
        id: &str,
        from: PaymentStatus,
        to: PaymentStatus,
        method: Option<PaymentMethod>,
    ) -> Result<Option<Booking>, AppError>;
    async fn find_pending_before(&self, cutoff: DateTime<Utc>) -> Result<Vec<Booking>, AppError>;
}

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<SessionState>, AppError>;
    async fn save(&self, session: &SessionState) -> Result<(), AppError>;
    async fn delete_idle_before(&self, cutoff: DateTime<Utc>) -> Result<usize, AppError>;
}

/// Source of the seats already taken for a hall/showtime.
#[async_trait]
pub trait OccupancyProvider: Send + Sync {
    async fn occupied_seats(&self, hall_id: &str, showtime_id: &str) -> Result<HashSet<SeatKey>, AppError>;
}
