//! Error handling for the Points core.

pub mod domain;

pub use domain::DomainError;
