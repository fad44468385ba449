pub mod catalog;
pub mod factory;
pub mod occupancy;
pub mod repositories;
