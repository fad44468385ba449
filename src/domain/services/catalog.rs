use crate::domain::models::movie::Movie;

pub fn filter_movies(movies: &[Movie], search: Option<&str>, genres: &[String]) -> Vec<Movie> {
    let term = search.map(str::trim).filter(|t| !t.is_empty());

    movies
        .iter()
        .filter(|m| term.is_none_or(|t| m.matches_term(t)))
        .filter(|m| genres.is_empty() || m.has_any_genre(genres))
        .cloned()
        .collect()
}

pub fn list_genres(movies: &[Movie]) -> Vec<String> {
    let mut genres: Vec<String> = Vec::new();
    for genre in movies.iter().flat_map(|m| m.genres.iter()) {
        if !genres.contains(genre) {
            genres.push(genre.clone());
        }
    }
    genres
}
