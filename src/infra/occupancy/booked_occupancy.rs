use std::collections::HashSet;
use std::sync::Arc;
use async_trait::async_trait;
use tracing::debug;
use crate::domain::{models::seat::SeatKey, ports::{BookingRepository, OccupancyProvider}};
use crate::error::AppError;

/// Occupancy derived from recorded bookings. Pending and completed bookings
/// hold their seats, failed ones release them.
pub struct BookedOccupancy {
    booking_repo: Arc<dyn BookingRepository>,
}

impl BookedOccupancy {
    pub fn new(booking_repo: Arc<dyn BookingRepository>) -> Self {
        Self { booking_repo }
    }
}

#[async_trait]
impl OccupancyProvider for BookedOccupancy {
    async fn occupied_seats(&self, hall_id: &str, showtime_id: &str) -> Result<HashSet<SeatKey>, AppError> {
        let occupied: HashSet<SeatKey> = self.booking_repo
            .list_by_showtime(showtime_id)
            .await?
            .iter()
            .filter(|b| b.holds_seats())
            .flat_map(|b| b.seats.iter().map(|s| s.key()))
            .collect();
        debug!("occupied_seats: hall {} showtime {} -> {} booked", hall_id, showtime_id, occupied.len());
        Ok(occupied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{booking::{Booking, NewBookingParams, PaymentStatus}, seat::Seat};
    use crate::infra::repositories::memory_booking_repo::MemoryBookingRepo;

    async fn book(repo: &MemoryBookingRepo, showtime: &str, seats: &[(u32, u32)]) -> Booking {
        let seats: Vec<Seat> = seats.iter().map(|&(r, s)| Seat::new(r, s, false, false)).collect();
        repo.create(&Booking::new(NewBookingParams {
            user_id: "u1".into(),
            movie_id: "1".into(),
            showtime_id: showtime.into(),
            seats: &seats,
            total_amount: 0,
        })).await.unwrap()
    }

    #[tokio::test]
    async fn test_held_seats_are_occupied() {
        let repo = Arc::new(MemoryBookingRepo::new());
        book(&repo, "1", &[(1, 1), (1, 2)]).await;
        let released = book(&repo, "1", &[(2, 2)]).await;
        book(&repo, "2", &[(3, 3)]).await;
        repo.transition_status(&released.id, PaymentStatus::Pending, PaymentStatus::Failed, None).await.unwrap();

        let provider = BookedOccupancy::new(repo.clone());
        let occupied = provider.occupied_seats("1", "1").await.unwrap();
        let expected: HashSet<SeatKey> = [SeatKey::new(1, 1), SeatKey::new(1, 2)].into_iter().collect();
        assert_eq!(occupied, expected);

        // Stable across calls.
        assert_eq!(provider.occupied_seats("1", "1").await.unwrap(), expected);
    }
}
