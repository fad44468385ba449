use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VipSeatOverride {
    pub row: u32,
    pub seats: Vec<u32>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Hall {
    pub id: String,
    pub name: String,
    pub rows: u32,
    pub seats_per_row: u32,
    #[serde(default)]
    pub vip_rows: Vec<u32>,
    #[serde(default)]
    pub vip_seats: Vec<VipSeatOverride>,
}

impl Hall {
    pub fn total_seats(&self) -> usize {
        self.rows as usize * self.seats_per_row as usize
    }

    pub fn contains(&self, row: u32, seat_number: u32) -> bool {
        (1..=self.rows).contains(&row) && (1..=self.seats_per_row).contains(&seat_number)
    }
}

/// The single VIP rule: a whole VIP row, or an explicit per-row override.
pub fn is_vip_seat(hall: &Hall, row: u32, seat_number: u32) -> bool {
    hall.vip_rows.contains(&row)
        || hall
            .vip_seats
            .iter()
            .any(|o| o.row == row && o.seats.contains(&seat_number))
}
