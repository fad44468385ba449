pub mod memory_booking_repo;
pub mod memory_catalog_repo;
pub mod memory_session_repo;
