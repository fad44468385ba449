use crate::domain::models::booking::PaymentMethod;
use serde::Deserialize;

#[derive(Deserialize, Default)]
pub struct MovieListQuery {
    pub search: Option<String>,
    /// Comma separated, e.g. `Action,Drama`.
    pub genres: Option<String>,
}

impl MovieListQuery {
    pub fn genre_list(&self) -> Vec<String> {
        self.genres
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(String::from)
            .collect()
    }
}

#[derive(Deserialize)]
pub struct StartSelectionRequest {
    pub movie_id: String,
    pub showtime_id: String,
}

#[derive(Deserialize)]
pub struct ToggleSeatRequest {
    pub row: u32,
    pub seat_number: u32,
}

#[derive(Deserialize)]
pub struct CreateBookingRequest {
    pub user_id: String,
    pub movie_id: String,
    pub showtime_id: String,
}

#[derive(Deserialize)]
pub struct CompleteBookingRequest {
    pub payment_method: PaymentMethod,
}

#[derive(Deserialize, Default)]
pub struct AdminBookingQuery {
    pub search: Option<String>,
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_list_parsing() {
        let query = MovieListQuery { search: None, genres: Some(" Action, ,Drama,".into()) };
        assert_eq!(query.genre_list(), vec!["Action", "Drama"]);
        assert!(MovieListQuery::default().genre_list().is_empty());
    }

    #[test]
    fn test_payment_method_wire_names() {
        let req: CompleteBookingRequest = serde_json::from_str(r#"{"payment_method":"airtelmoney"}"#).unwrap();
        assert_eq!(req.payment_method, PaymentMethod::AirtelMoney);
        assert!(serde_json::from_str::<CompleteBookingRequest>(r#"{"payment_method":"cash"}"#).is_err());
    }
}
