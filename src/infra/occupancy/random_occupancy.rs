use std::collections::HashSet;
use std::sync::Arc;
use async_trait::async_trait;
use rand::Rng;
use tracing::debug;
use crate::domain::{models::{hall::Hall, seat::SeatKey}, ports::{CatalogRepository, OccupancyProvider}};
use crate::error::AppError;

/// Demo occupancy: a fresh random draw on every call.
pub struct RandomOccupancy {
    catalog: Arc<dyn CatalogRepository>,
    ratio: f64,
}

impl RandomOccupancy {
    pub fn new(catalog: Arc<dyn CatalogRepository>, ratio: f64) -> Self {
        Self { catalog, ratio: ratio.clamp(0.0, 1.0) }
    }
}

/// Draws distinct in-bounds seats. Makes at most `4 * total` attempts, so the
/// result may fall short of `floor(total * ratio)` but never exceeds it.
pub fn draw_occupied<R: Rng>(hall: &Hall, ratio: f64, rng: &mut R) -> HashSet<SeatKey> {
    let total = hall.total_seats();
    let target = (total as f64 * ratio).floor() as usize;
    let mut occupied = HashSet::with_capacity(target);
    if target == 0 {
        return occupied;
    }

    for _ in 0..total * 4 {
        if occupied.len() >= target {
            break;
        }
        let row = rng.gen_range(1..=hall.rows);
        let seat_number = rng.gen_range(1..=hall.seats_per_row);
        occupied.insert(SeatKey::new(row, seat_number));
    }
    occupied
}

#[async_trait]
impl OccupancyProvider for RandomOccupancy {
    async fn occupied_seats(&self, hall_id: &str, showtime_id: &str) -> Result<HashSet<SeatKey>, AppError> {
        let Some(hall) = self.catalog.find_hall(hall_id).await? else {
            return Ok(HashSet::new());
        };

        let occupied = draw_occupied(&hall, self.ratio, &mut rand::thread_rng());
        debug!("occupied_seats: hall {} showtime {} -> {} random", hall_id, showtime_id, occupied.len());
        Ok(occupied)
    }
}
