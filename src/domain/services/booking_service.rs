use std::sync::Arc;
use chrono::{DateTime, Utc};
use crate::domain::{
    models::{
        booking::{Booking, NewBookingParams, PaymentMethod, PaymentStatus},
        selection::Selection,
        session::SessionState,
    },
    ports::{BookingRepository, CatalogRepository},
};
use crate::domain::services::pricing;
use crate::error::AppError;
use tracing::{info, warn};

pub struct BookingService {
    catalog: Arc<dyn CatalogRepository>,
    booking_repo: Arc<dyn BookingRepository>,
}

impl BookingService {
    pub fn new(catalog: Arc<dyn CatalogRepository>, booking_repo: Arc<dyn BookingRepository>) -> Self {
        Self { catalog, booking_repo }
    }

    /// Records a pending booking for the session's selection. Beyond an unknown
    /// showtime (NotFound), this also refuses a showtime of another movie, a
    /// selection made for a different showtime and an empty selection
    /// (Validation), and seats already held by another booking (Conflict).
    pub async fn create_booking(
        &self,
        session: &mut SessionState,
        user_id: &str,
        movie_id: &str,
        showtime_id: &str,
        selection: &Selection,
    ) -> Result<Booking, AppError> {
        let showtime = self.catalog.find_showtime(showtime_id).await?
            .ok_or(AppError::NotFound("Showtime not found".into()))?;

        if showtime.movie_id != movie_id {
            return Err(AppError::Validation("Showtime does not belong to this movie".into()));
        }
        if !selection.is_for(movie_id, showtime_id) {
            return Err(AppError::Validation("Selection was made for a different showtime".into()));
        }
        if selection.is_empty() {
            return Err(AppError::Validation("Select at least one seat".into()));
        }

        let total_amount = pricing::price(&selection.seats, &showtime);

        let booking = Booking::new(NewBookingParams {
            user_id: user_id.to_string(),
            movie_id: movie_id.to_string(),
            showtime_id: showtime_id.to_string(),
            seats: &selection.seats,
            total_amount,
        });

        let created = self.booking_repo.create(&booking).await?;
        session.active_booking_id = Some(created.id.clone());
        session.touch();

        info!(
            "Booking created: {} for user {} showtime {} ({} seats, total {})",
            created.id, user_id, showtime_id, created.seats.len(), created.total_amount
        );
        Ok(created)
    }

    /// Marks a pending booking paid. The session's selection is cleared
    /// whatever the outcome.
    pub async fn complete_booking(
        &self,
        session: &mut SessionState,
        booking_id: &str,
        payment_method: PaymentMethod,
    ) -> Result<bool, AppError> {
        session.reset_selection();
        session.touch();

        let updated = self.booking_repo
            .transition_status(booking_id, PaymentStatus::Pending, PaymentStatus::Completed, Some(payment_method))
            .await?;

        match updated {
            Some(booking) => {
                info!("Booking completed: {} via {:?}", booking.id, payment_method);
                Ok(true)
            }
            None => {
                warn!("complete_booking: {} is unknown or no longer pending", booking_id);
                Ok(false)
            }
        }
    }

    pub async fn fail_booking(&self, session: &mut SessionState, booking_id: &str) -> Result<bool, AppError> {
        let updated = self.booking_repo
            .transition_status(booking_id, PaymentStatus::Pending, PaymentStatus::Failed, None)
            .await?;

        if updated.is_none() {
            warn!("fail_booking: {} is unknown or no longer pending", booking_id);
            return Ok(false);
        }

        if session.active_booking_id.as_deref() == Some(booking_id) {
            session.active_booking_id = None;
        }
        session.touch();
        info!("Booking failed: {}", booking_id);
        Ok(true)
    }

    /// Fails every booking still pending at `cutoff`. Returns how many moved.
    pub async fn expire_pending(&self, cutoff: DateTime<Utc>) -> Result<usize, AppError> {
        let stale = self.booking_repo.find_pending_before(cutoff).await?;
        let mut expired = 0;

        for booking in stale {
            let moved = self.booking_repo
                .transition_status(&booking.id, PaymentStatus::Pending, PaymentStatus::Failed, None)
                .await?;
            if moved.is_some() {
                info!("Pending booking {} expired unpaid", booking.id);
                expired += 1;
            }
        }
        Ok(expired)
    }

    pub async fn get_booking(&self, booking_id: &str) -> Result<Option<Booking>, AppError> {
        self.booking_repo.find_by_id(booking_id).await
    }

    pub async fn active_booking(&self, session: &SessionState) -> Result<Option<Booking>, AppError> {
        match session.active_booking_id.as_deref() {
            Some(id) => self.booking_repo.find_by_id(id).await,
            None => Ok(None),
        }
    }

    pub async fn list_bookings_for_user(&self, user_id: &str) -> Result<Vec<Booking>, AppError> {
        self.booking_repo.list_by_user(user_id).await
    }

    pub async fn list_all(&self) -> Result<Vec<Booking>, AppError> {
        self.booking_repo.list_all().await
    }
}
