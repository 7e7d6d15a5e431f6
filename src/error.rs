use thiserror::Error;

use crate::models::facility::FacilityId;

/// Failures of the durable key-value storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("durable storage is unavailable")]
    Unavailable,
    #[error("storage backend rejected the operation: {0}")]
    Backend(String),
    #[error("failed to encode stored value: {0}")]
    Encode(#[from] serde_json::Error),
    #[cfg(feature = "ssr")]
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("rating must be between 1 and 5 stars, got {0}")]
    StarsOutOfRange(u8),
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("price must be a positive amount, got {0}")]
    InvalidPrice(f64),
    #[error("slot {start}:00 for {hours}h is outside opening hours {opens}:00-{closes}:00")]
    InvalidSlot {
        start: u8,
        hours: u8,
        opens: u8,
        closes: u8,
    },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BookingError {
    #[error("facility {0} is not open for booking")]
    NotBookable(FacilityId),
    #[error("facility {facility_id} is already booked on {date} at {start_hour}:00")]
    SlotTaken {
        facility_id: FacilityId,
        date: chrono::NaiveDate,
        start_hour: u8,
    },
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("no booking ids left to assign")]
    IdsExhausted,
}
