use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeatKey {
    pub row: u32,
    pub seat_number: u32,
}

impl SeatKey {
    pub fn new(row: u32, seat_number: u32) -> Self {
        Self { row, seat_number }
    }
}

impl fmt::Display for SeatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.seat_number)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Seat {
    pub id: String,
    pub row: u32,
    pub seat_number: u32,
    pub is_vip: bool,
    pub is_occupied: bool,
    pub is_selected: bool,
}

impl Seat {
    pub fn new(row: u32, seat_number: u32, is_vip: bool, is_occupied: bool) -> Self {
        Self {
            id: SeatKey::new(row, seat_number).to_string(),
            row,
            seat_number,
            is_vip,
            is_occupied,
            is_selected: false,
        }
    }

    pub fn key(&self) -> SeatKey {
        SeatKey::new(self.row, self.seat_number)
    }
}
