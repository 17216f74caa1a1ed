//! Deliveries Domain Concerns

pub mod clients;
pub mod geocoding;
