use crate::domain::models::{seat::Seat, selection::Selection};
use crate::domain::services::pricing::PriceQuote;
use serde::Serialize;

#[derive(Serialize)]
pub struct SelectionStartedResponse {
    pub selection: Selection,
    pub seats: Vec<Seat>,
}

#[derive(Serialize)]
pub struct SelectionResponse {
    pub selection: Option<Selection>,
    pub quote: Option<PriceQuote>,
}

#[derive(Serialize)]
pub struct PaymentResultResponse {
    pub success: bool,
}
