//! Clients

pub mod changes;
pub mod data;
pub mod errors;
pub mod pagination;
pub mod records;
mod repository;
pub mod service;
pub mod validation;

pub use errors::ClientsServiceError;
pub use service::*;
pub use validation::ValidationError;
