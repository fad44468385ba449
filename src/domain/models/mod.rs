pub mod booking;
pub mod hall;
pub mod movie;
pub mod seat;
pub mod selection;
pub mod session;
pub mod showtime;
