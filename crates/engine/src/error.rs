//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`Validation`] thrown when an entry is rejected (blank name, non-positive
//!   amount or volume). Nothing is written.
//! - [`InactiveVehicle`] thrown when a fuel event targets a retired vehicle.
//! - [`KeyNotFound`] thrown when an item are not found.
//! - [`InvalidValue`] thrown when text cannot be parsed into a domain value.
//!
//!  [`Validation`]: EngineError::Validation
//!  [`InactiveVehicle`]: EngineError::InactiveVehicle
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`InvalidValue`]: EngineError::InvalidValue
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Vehicle \"{0}\" is not active")]
    InactiveVehicle(String),
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("Invalid value: {0}")]
    InvalidValue(String),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl EngineError {
    /// `true` for errors caused by the operator's input rather than by the
    /// storage or the filesystem.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::InactiveVehicle(_) | Self::KeyNotFound(_) | Self::InvalidValue(_)
        )
    }
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Validation(a), Self::Validation(b)) => a == b,
            (Self::InactiveVehicle(a), Self::InactiveVehicle(b)) => a == b,
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::InvalidValue(a), Self::InvalidValue(b)) => a == b,
            (Self::Csv(a), Self::Csv(b)) => a.to_string() == b.to_string(),
            (Self::Io(a), Self::Io(b)) => a.to_string() == b.to_string(),
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
