use std::sync::Arc;
use crate::domain::ports::{BookingRepository, CatalogRepository, SessionRepository};
use crate::domain::services::{
    booking_service::BookingService, seat_layout::SeatLayoutService, selection::SelectionService,
};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<dyn CatalogRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub session_repo: Arc<dyn SessionRepository>,
    pub seat_layout: Arc<SeatLayoutService>,
    pub selection_service: Arc<SelectionService>,
    pub booking_service: Arc<BookingService>,
}
