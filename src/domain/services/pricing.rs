use serde::Serialize;
use crate::domain::models::{seat::Seat, showtime::Showtime};

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PriceQuote {
    pub regular_count: usize,
    pub vip_count: usize,
    pub regular_price: u64,
    pub vip_price: u64,
    pub total: u64,
}

pub fn quote(seats: &[Seat], showtime: &Showtime) -> PriceQuote {
    let vip_count = seats.iter().filter(|s| s.is_vip).count();
    let regular_count = seats.len() - vip_count;
    let regular_price = showtime.price;
    let vip_price = showtime.effective_vip_price();

    PriceQuote {
        regular_count,
        vip_count,
        regular_price,
        vip_price,
        total: (regular_count as u64)
            .saturating_mul(regular_price)
            .saturating_add((vip_count as u64).saturating_mul(vip_price)),
    }
}

pub fn price(seats: &[Seat], showtime: &Showtime) -> u64 {
    quote(seats, showtime).total
}
