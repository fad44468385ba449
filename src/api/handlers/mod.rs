pub mod admin;
pub mod booking;
pub mod hall;
pub mod health;
pub mod movie;
pub mod seat;
pub mod selection;
pub mod showtime;
