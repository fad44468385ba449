use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;
use crate::domain::models::seat::{Seat, SeatKey};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Mpesa,
    TigoPesa,
    AirtelMoney,
    CreditCard,
    BankTransfer,
}

impl PaymentMethod {
    /// Recorded on a booking until the customer actually pays.
    pub const PLACEHOLDER: PaymentMethod = PaymentMethod::Mpesa;
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, PaymentStatus::Pending)
    }

    pub fn can_transition_to(&self, next: PaymentStatus) -> bool {
        matches!(
            (self, next),
            (PaymentStatus::Pending, PaymentStatus::Completed) | (PaymentStatus::Pending, PaymentStatus::Failed)
        )
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(PaymentStatus::Pending),
            "completed" => Ok(PaymentStatus::Completed),
            "failed" => Ok(PaymentStatus::Failed),
            other => Err(format!("unknown payment status: {}", other)),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct BookedSeat {
    pub row: u32,
    pub seat_number: u32,
    pub is_vip: bool,
}

impl BookedSeat {
    pub fn key(&self) -> SeatKey {
        SeatKey::new(self.row, self.seat_number)
    }
}

impl From<&Seat> for BookedSeat {
    fn from(seat: &Seat) -> Self {
        Self {
            row: seat.row,
            seat_number: seat.seat_number,
            is_vip: seat.is_vip,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Booking {
    pub id: String,
    pub user_id: String,
    pub movie_id: String,
    pub showtime_id: String,
    pub seats: Vec<BookedSeat>,
    pub total_amount: u64,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

pub struct NewBookingParams<'a> {
    pub user_id: String,
    pub movie_id: String,
    pub showtime_id: String,
    pub seats: &'a [Seat],
    pub total_amount: u64,
}

impl Booking {
    pub fn new(params: NewBookingParams<'_>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: params.user_id,
            movie_id: params.movie_id,
            showtime_id: params.showtime_id,
            seats: params.seats.iter().map(BookedSeat::from).collect(),
            total_amount: params.total_amount,
            payment_method: PaymentMethod::PLACEHOLDER,
            payment_status: PaymentStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// Seats this booking still holds. Failed bookings release theirs.
    pub fn holds_seats(&self) -> bool {
        self.payment_status != PaymentStatus::Failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_pending_transitions() {
        use PaymentStatus::*;
        assert!(Pending.can_transition_to(Completed));
        assert!(Pending.can_transition_to(Failed));
        assert!(!Pending.can_transition_to(Pending));
        assert!(!Completed.can_transition_to(Failed));
        assert!(!Completed.can_transition_to(Pending));
        assert!(!Failed.can_transition_to(Completed));
        assert!(Completed.is_terminal() && Failed.is_terminal() && !Pending.is_terminal());
    }

    #[test]
    fn test_payment_method_wire_names() {
        let json = serde_json::to_string(&PaymentMethod::AirtelMoney).unwrap();
        assert_eq!(json, "\"airtelmoney\"");
        let parsed: PaymentMethod = serde_json::from_str("\"banktransfer\"").unwrap();
        assert_eq!(parsed, PaymentMethod::BankTransfer);
        assert!(serde_json::from_str::<PaymentMethod>("\"paypal\"").is_err());
    }

    #[test]
    fn test_booking_snapshots_seats() {
        let mut seats = vec![Seat::new(1, 2, true, false), Seat::new(5, 5, false, false)];
        let booking = Booking::new(NewBookingParams {
            user_id: "u1".into(),
            movie_id: "1".into(),
            showtime_id: "1".into(),
            seats: &seats,
            total_amount: 40000,
        });

        seats[0].is_occupied = true;
        seats[0].is_vip = false;

        assert_eq!(booking.seats[0], BookedSeat { row: 1, seat_number: 2, is_vip: true });
        assert_eq!(booking.payment_status, PaymentStatus::Pending);
        assert_eq!(booking.payment_method, PaymentMethod::PLACEHOLDER);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("Completed".parse::<PaymentStatus>().unwrap(), PaymentStatus::Completed);
        assert!("refunded".parse::<PaymentStatus>().is_err());
    }
}
