pub mod sqlite_studio_repo;
pub mod sqlite_service_repo;
pub mod sqlite_reservation_repo;

pub mod postgres_studio_repo;
pub mod postgres_service_repo;
pub mod postgres_reservation_repo;
