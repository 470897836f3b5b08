pub mod availability;
pub mod availability_service;
pub mod capacity;
pub mod category;
pub mod ledger;
pub mod schedule;
