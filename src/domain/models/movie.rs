use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub poster_url: String,
    pub backdrop_url: String,
    pub release_date: String,
    pub duration_min: u32,
    pub genres: Vec<String>,
    pub rating: f32,
    pub language: String,
    pub description: String,
    pub director: String,
    pub cast: Vec<String>,
    pub trailer_url: Option<String>,
}

impl Movie {
    pub fn matches_term(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term)
            || self.genres.iter().any(|g| g.to_lowercase().contains(&term))
            || self.director.to_lowercase().contains(&term)
            || self.cast.iter().any(|c| c.to_lowercase().contains(&term))
    }

    pub fn has_any_genre(&self, genres: &[String]) -> bool {
        self.genres.iter().any(|g| genres.contains(g))
    }
}
