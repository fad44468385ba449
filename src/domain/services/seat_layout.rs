use std::collections::HashSet;
use std::sync::Arc;
use crate::domain::{
    models::{hall::{Hall, is_vip_seat}, seat::{Seat, SeatKey}},
    ports::{CatalogRepository, OccupancyProvider},
};
use crate::error::AppError;
use tracing::debug;

/// Row-major seat grid for `hall`. Seat construction only depends on the
/// hall and the occupied set, whichever provider produced it.
pub fn build_layout(hall: &Hall, occupied: &HashSet<SeatKey>) -> Vec<Seat> {
    let mut seats = Vec::with_capacity(hall.total_seats());
    for row in 1..=hall.rows {
        for seat_number in 1..=hall.seats_per_row {
            seats.push(Seat::new(
                row,
                seat_number,
                is_vip_seat(hall, row, seat_number),
                occupied.contains(&SeatKey::new(row, seat_number)),
            ));
        }
    }
    seats
}

pub struct SeatLayoutService {
    catalog: Arc<dyn CatalogRepository>,
    occupancy: Arc<dyn OccupancyProvider>,
}

impl SeatLayoutService {
    pub fn new(catalog: Arc<dyn CatalogRepository>, occupancy: Arc<dyn OccupancyProvider>) -> Self {
        Self { catalog, occupancy }
    }

    /// An unknown hall yields an empty layout rather than an error.
    pub async fn generate_seats(&self, hall_id: &str, showtime_id: &str) -> Result<Vec<Seat>, AppError> {
        let Some(hall) = self.catalog.find_hall(hall_id).await? else {
            debug!("generate_seats: hall {} not found, no layout", hall_id);
            return Ok(Vec::new());
        };

        let occupied = self.occupancy.occupied_seats(hall_id, showtime_id).await?;
        let seats = build_layout(&hall, &occupied);
        debug!(
            "generate_seats: hall {} showtime {}: {} seats, {} occupied",
            hall_id, showtime_id, seats.len(), occupied.len()
        );
        Ok(seats)
    }
}
