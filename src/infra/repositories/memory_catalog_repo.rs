use crate::domain::{models::{movie::Movie, hall::Hall, showtime::Showtime}, ports::CatalogRepository};
use crate::infra::catalog::seed::CatalogSeed;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only catalogue. Shared freely across sessions.
pub struct MemoryCatalogRepo {
    movies: Vec<Movie>,
    halls: Vec<Hall>,
    showtimes: Vec<Showtime>,
}

impl MemoryCatalogRepo {
    pub fn new(seed: CatalogSeed) -> Self {
        Self {
            movies: seed.movies,
            halls: seed.halls,
            showtimes: seed.showtimes,
        }
    }
}

#[async_trait]
impl CatalogRepository for MemoryCatalogRepo {
    async fn list_movies(&self) -> Result<Vec<Movie>, AppError> {
        Ok(self.movies.clone())
    }
    async fn find_movie(&self, id: &str) -> Result<Option<Movie>, AppError> {
        Ok(self.movies.iter().find(|m| m.id == id).cloned())
    }
    async fn list_halls(&self) -> Result<Vec<Hall>, AppError> {
        Ok(self.halls.clone())
    }
    async fn find_hall(&self, id: &str) -> Result<Option<Hall>, AppError> {
        Ok(self.halls.iter().find(|h| h.id == id).cloned())
    }
    async fn list_showtimes(&self) -> Result<Vec<Showtime>, AppError> {
        Ok(self.showtimes.clone())
    }
    async fn list_showtimes_by_movie(&self, movie_id: &str) -> Result<Vec<Showtime>, AppError> {
        Ok(self.showtimes.iter().filter(|s| s.movie_id == movie_id).cloned().collect())
    }
    async fn find_showtime(&self, id: &str) -> Result<Option<Showtime>, AppError> {
        Ok(self.showtimes.iter().find(|s| s.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::catalog::seed::seed_catalog;

    #[tokio::test]
    async fn test_lookups() {
        let repo = MemoryCatalogRepo::new(seed_catalog());

        assert_eq!(repo.list_movies().await.unwrap().len(), 6);
        assert_eq!(repo.find_movie("3").await.unwrap().unwrap().title, "Inception");
        assert!(repo.find_movie("42").await.unwrap().is_none());

        let hall = repo.find_hall("1").await.unwrap().unwrap();
        assert_eq!((hall.rows, hall.seats_per_row), (10, 16));
        assert!(repo.find_hall("9").await.unwrap().is_none());

        let showtimes: Vec<String> = repo.list_showtimes_by_movie("1").await.unwrap()
            .into_iter().map(|s| s.id).collect();
        assert_eq!(showtimes, vec!["1", "2"]);
        assert!(repo.list_showtimes_by_movie("6").await.unwrap().is_empty());

        let st = repo.find_showtime("3").await.unwrap().unwrap();
        assert_eq!((st.hall_id.as_str(), st.price, st.vip_price), ("3", 20000, Some(35000)));
        assert!(repo.find_showtime("nope").await.unwrap().is_none());
    }
}
