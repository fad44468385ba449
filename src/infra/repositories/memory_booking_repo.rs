use crate::domain::{
    models::{booking::{Booking, PaymentMethod, PaymentStatus}, seat::SeatKey},
    ports::BookingRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use tokio::sync::RwLock;

/// Booking history kept in creation order.
pub struct MemoryBookingRepo {
    bookings: RwLock<Vec<Booking>>,
}

impl MemoryBookingRepo {
    pub fn new() -> Self {
        Self { bookings: RwLock::new(Vec::new()) }
    }
}

impl Default for MemoryBookingRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingRepository for MemoryBookingRepo {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError> {
        let mut bookings = self.bookings.write().await;

        if bookings.iter().any(|b| b.id == booking.id) {
            return Err(AppError::Conflict("Booking already exists".into()));
        }

        let held: HashSet<SeatKey> = bookings
            .iter()
            .filter(|b| b.showtime_id == booking.showtime_id && b.holds_seats())
            .flat_map(|b| b.seats.iter().map(|s| s.key()))
            .collect();

        if let Some(taken) = booking.seats.iter().find(|s| held.contains(&s.key())) {
            return Err(AppError::Conflict(format!("Seat {} is already booked", taken.key())));
        }

        bookings.push(booking.clone());
        Ok(booking.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError> {
        Ok(self.bookings.read().await.iter().find(|b| b.id == id).cloned())
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Booking>, AppError> {
        Ok(self.bookings.read().await.iter().filter(|b| b.user_id == user_id).cloned().collect())
    }

    async fn list_by_showtime(&self, showtime_id: &str) -> Result<Vec<Booking>, AppError> {
        Ok(self.bookings.read().await.iter().filter(|b| b.showtime_id == showtime_id).cloned().collect())
    }

    async fn list_all(&self) -> Result<Vec<Booking>, AppError> {
        Ok(self.bookings.read().await.clone())
    }

    async fn transition_status(
        &self,
        id: &str,
        from: PaymentStatus,
        to: PaymentStatus,
        method: Option<PaymentMethod>,
    ) -> Result<Option<Booking>, AppError> {
        if !from.can_transition_to(to) {
            return Err(AppError::InternalWithMsg(format!("Illegal payment transition {} -> {}", from, to)));
        }

        let mut bookings = self.bookings.write().await;
        let Some(booking) = bookings.iter_mut().find(|b| b.id == id && b.payment_status == from) else {
            return Ok(None);
        };

        booking.payment_status = to;
        if let Some(method) = method {
            booking.payment_method = method;
        }
        Ok(Some(booking.clone()))
    }

    async fn find_pending_before(&self, cutoff: DateTime<Utc>) -> Result<Vec<Booking>, AppError> {
        Ok(self.bookings.read().await
            .iter()
            .filter(|b| b.payment_status == PaymentStatus::Pending && b.created_at < cutoff)
            .cloned()
            .collect())
    }
}
