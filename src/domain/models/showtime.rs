use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Showtime {
    pub id: String,
    pub movie_id: String,
    pub hall_id: String,
    pub date: String,
    pub time: String,
    pub price: u64,
    pub vip_price: Option<u64>,
}

impl Showtime {
    /// VIP seats fall back to one and a half times the base price, rounded half up.
    /// Saturates at `u64::MAX` for absurd base prices.
    pub fn effective_vip_price(&self) -> u64 {
        self.vip_price
            .unwrap_or_else(|| self.price.saturating_mul(3).div_ceil(2))
    }
}
