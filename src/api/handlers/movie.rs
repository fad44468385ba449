use axum::{extract::{State, Path, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::MovieListQuery;
use crate::domain::services::catalog::{filter_movies, list_genres as distinct_genres};
use crate::error::AppError;
use std::sync::Arc;

pub async fn list_movies(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MovieListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let movies = state.catalog.list_movies().await?;
    let filtered = filter_movies(&movies, query.search.as_deref(), &query.genre_list());
    Ok(Json(filtered))
}

pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let movie = state.catalog.find_movie(&movie_id).await?
        .ok_or(AppError::NotFound("Movie not found".into()))?;
    Ok(Json(movie))
}

/// Unknown movies simply have no showtimes.
pub async fn list_movie_showtimes(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let showtimes = state.catalog.list_showtimes_by_movie(&movie_id).await?;
    Ok(Json(showtimes))
}

pub async fn list_genres(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let movies = state.catalog.list_movies().await?;
    Ok(Json(distinct_genres(&movies)))
}
