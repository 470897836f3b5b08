pub mod availability;
pub mod reservation;
pub mod service;
pub mod studio;
