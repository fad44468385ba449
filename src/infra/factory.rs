use std::sync::Arc;
use tracing::info;

use crate::config::{Config, OccupancyMode};
use crate::state::AppState;
use crate::domain::ports::{BookingRepository, CatalogRepository, OccupancyProvider, SessionRepository};
use crate::domain::services::{
    booking_service::BookingService, seat_layout::SeatLayoutService, selection::SelectionService,
};
use crate::infra::catalog::seed::seed_catalog;
use crate::infra::occupancy::{booked_occupancy::BookedOccupancy, random_occupancy::RandomOccupancy};
use crate::infra::repositories::{
    memory_booking_repo::MemoryBookingRepo, memory_catalog_repo::MemoryCatalogRepo,
    memory_session_repo::MemorySessionRepo,
};

pub async fn bootstrap_state(config: &Config) -> AppState {
    let catalog: Arc<dyn CatalogRepository> = Arc::new(MemoryCatalogRepo::new(seed_catalog()));
    let booking_repo: Arc<dyn BookingRepository> = Arc::new(MemoryBookingRepo::new());
    let session_repo: Arc<dyn SessionRepository> = Arc::new(MemorySessionRepo::new());

    let occupancy: Arc<dyn OccupancyProvider> = match config.occupancy_mode {
        OccupancyMode::Random => {
            info!("Using random seat occupancy (ratio {})", config.occupancy_ratio);
            Arc::new(RandomOccupancy::new(catalog.clone(), config.occupancy_ratio))
        }
        OccupancyMode::Booked => {
            info!("Using booking-derived seat occupancy");
            Arc::new(BookedOccupancy::new(booking_repo.clone()))
        }
    };

    let seat_layout = Arc::new(SeatLayoutService::new(catalog.clone(), occupancy));
    let selection_service = Arc::new(SelectionService::new(catalog.clone(), seat_layout.clone()));
    let booking_service = Arc::new(BookingService::new(catalog.clone(), booking_repo.clone()));

    AppState {
        config: config.clone(),
        catalog,
        booking_repo,
        session_repo,
        seat_layout,
        selection_service,
        booking_service,
    }
}
