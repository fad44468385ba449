use serde::Serialize;
use crate::domain::models::{
    booking::{Booking, PaymentStatus},
    movie::Movie,
};

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct DashboardStats {
    pub total_movies: usize,
    pub total_showtimes: usize,
    pub total_bookings: usize,
    pub total_revenue: u64,
    pub tickets_sold: usize,
}

pub fn dashboard_stats(movie_count: usize, showtime_count: usize, bookings: &[Booking]) -> DashboardStats {
    let completed = || bookings.iter().filter(|b| b.payment_status == PaymentStatus::Completed);

    DashboardStats {
        total_movies: movie_count,
        total_showtimes: showtime_count,
        total_bookings: bookings.len(),
        total_revenue: completed().map(|b| b.total_amount).sum(),
        tickets_sold: completed().map(|b| b.seats.len()).sum(),
    }
}

/// Admin booking search over movie title, booking id and user id.
pub fn search_bookings(
    bookings: &[Booking],
    movies: &[Movie],
    search: Option<&str>,
    status: Option<PaymentStatus>,
) -> Vec<Booking> {
    let term = search.map(|t| t.trim().to_lowercase()).filter(|t| !t.is_empty());

    bookings
        .iter()
        .filter(|b| status.is_none_or(|s| b.payment_status == s))
        .filter(|b| {
            let Some(term) = term.as_deref() else { return true };
            let title_hit = movies
                .iter()
                .find(|m| m.id == b.movie_id)
                .is_some_and(|m| m.title.to_lowercase().contains(term));
            title_hit
                || b.id.to_lowercase().contains(term)
                || b.user_id.to_lowercase().contains(term)
        })
        .cloned()
        .collect()
}
