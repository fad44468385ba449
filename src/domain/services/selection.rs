use std::sync::Arc;
use crate::domain::{
    models::{seat::{Seat, SeatKey}, selection::Selection, session::SessionState},
    ports::CatalogRepository,
};
use crate::domain::services::seat_layout::SeatLayoutService;
use crate::error::AppError;
use tracing::{info, warn};

pub struct SelectionService {
    catalog: Arc<dyn CatalogRepository>,
    layout: Arc<SeatLayoutService>,
}

impl SelectionService {
    pub fn new(catalog: Arc<dyn CatalogRepository>, layout: Arc<SeatLayoutService>) -> Self {
        Self { catalog, layout }
    }

    /// Enters seat selection for a showtime: snapshots a fresh layout on the
    /// session and starts an empty selection scoped to (movie, showtime).
    pub async fn start_selection(
        &self,
        session: &mut SessionState,
        movie_id: &str,
        showtime_id: &str,
    ) -> Result<Vec<Seat>, AppError> {
        let showtime = self.catalog.find_showtime(showtime_id).await?
            .ok_or(AppError::NotFound("Showtime not found".into()))?;

        if showtime.movie_id != movie_id {
            return Err(AppError::Validation("Showtime does not belong to this movie".into()));
        }

        let seats = self.layout.generate_seats(&showtime.hall_id, &showtime.id).await?;

        session.layout = seats.clone();
        session.selection = Some(Selection::new(movie_id, showtime_id));
        session.touch();

        info!("Session {} started seat selection for showtime {}", session.id, showtime_id);
        Ok(seats)
    }
}

pub fn toggle_seat(session: &mut SessionState, key: SeatKey) -> Result<Selection, AppError> {
    let seat = session.layout_seat(key).cloned();

    let Some(selection) = session.selection.as_mut() else {
        return Err(AppError::Validation("No seat selection in progress".into()));
    };
    let seat = seat.ok_or(AppError::NotFound(format!("Seat {} not found", key)))?;

    if !selection.toggle(&seat) {
        warn!("Session {} tried to select occupied seat {}", session.id, key);
    }
    let snapshot = selection.clone();
    session.touch();
    Ok(snapshot)
}

pub fn reset_selection(session: &mut SessionState) {
    session.reset_selection();
    session.touch();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::OccupancyProvider;
    use crate::infra::catalog::seed::seed_catalog;
    use crate::infra::repositories::memory_catalog_repo::MemoryCatalogRepo;
    use async_trait::async_trait;
    use std::collections::HashSet;

    struct FixedOccupancy(HashSet<SeatKey>);

    #[async_trait]
    impl OccupancyProvider for FixedOccupancy {
        async fn occupied_seats(&self, _hall_id: &str, _showtime_id: &str) -> Result<HashSet<SeatKey>, AppError> {
            Ok(self.0.clone())
        }
    }

    fn service(occupied: &[(u32, u32)]) -> SelectionService {
        let catalog: Arc<dyn CatalogRepository> = Arc::new(MemoryCatalogRepo::new(seed_catalog()));
        let occupancy = FixedOccupancy(occupied.iter().map(|&(r, s)| SeatKey::new(r, s)).collect());
        let layout = Arc::new(SeatLayoutService::new(catalog.clone(), Arc::new(occupancy)));
        SelectionService::new(catalog, layout)
    }

    #[tokio::test]
    async fn test_start_selection_stores_layout() {
        let mut session = SessionState::new("s1".into());
        let seats = service(&[]).start_selection(&mut session, "1", "1").await.unwrap();

        assert_eq!(seats.len(), 160);
        assert_eq!(session.layout.len(), 160);
        assert!(session.selection.as_ref().unwrap().is_for("1", "1"));
        assert!(session.selection.as_ref().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_start_selection_rejects_unknown_or_foreign_showtime() {
        let svc = service(&[]);
        let mut session = SessionState::new("s1".into());

        let err = svc.start_selection(&mut session, "1", "404").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = svc.start_selection(&mut session, "2", "1").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(session.selection.is_none());
    }

    #[tokio::test]
    async fn test_restarting_replaces_previous_selection() {
        let svc = service(&[]);
        let mut session = SessionState::new("s1".into());
        svc.start_selection(&mut session, "1", "1").await.unwrap();
        toggle_seat(&mut session, SeatKey::new(1, 1)).unwrap();

        svc.start_selection(&mut session, "1", "2").await.unwrap();
        let selection = session.selection.as_ref().unwrap();
        assert!(selection.is_for("1", "2"));
        assert!(selection.is_empty());
    }

    #[tokio::test]
    async fn test_toggle_uses_layout_flags() {
        let svc = service(&[(3, 3)]);
        let mut session = SessionState::new("s1".into());
        svc.start_selection(&mut session, "1", "1").await.unwrap();

        let selection = toggle_seat(&mut session, SeatKey::new(1, 5)).unwrap();
        assert_eq!(selection.len(), 1);
        assert!(selection.seats[0].is_vip);

        let selection = toggle_seat(&mut session, SeatKey::new(3, 3)).unwrap();
        assert_eq!(selection.len(), 1, "occupied seat must be ignored");

        let selection = toggle_seat(&mut session, SeatKey::new(1, 5)).unwrap();
        assert!(selection.is_empty());
    }

    #[tokio::test]
    async fn test_toggle_errors() {
        let mut session = SessionState::new("s1".into());
        let err = toggle_seat(&mut session, SeatKey::new(1, 1)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        service(&[]).start_selection(&mut session, "1", "1").await.unwrap();
        let err = toggle_seat(&mut session, SeatKey::new(11, 1)).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_reset_keeps_context() {
        let mut session = SessionState::new("s1".into());
        service(&[]).start_selection(&mut session, "1", "1").await.unwrap();
        toggle_seat(&mut session, SeatKey::new(2, 2)).unwrap();

        reset_selection(&mut session);
        let selection = session.selection.as_ref().unwrap();
        assert!(selection.is_empty());
        assert!(selection.is_for("1", "1"));
    }
}
