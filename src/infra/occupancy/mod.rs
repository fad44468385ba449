pub mod booked_occupancy;
pub mod random_occupancy;
