pub mod booking_service;
pub mod catalog;
pub mod pricing;
pub mod reporting;
pub mod seat_layout;
pub mod selection;
