// src/models/booking.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{CLOSING_HOUR, OPENING_HOUR};
use crate::error::ValidationError;
use crate::models::facility::FacilityId;
use crate::models::user::UserId;

pub type BookingId = u32;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Confirmed,
    Cancelled,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub reference: Uuid, // Shown on the confirmation page
    pub facility_id: FacilityId,
    pub user_id: UserId,
    pub date: NaiveDate,
    pub start_hour: u8,
    pub hours: u8,
    pub total_price: f64,
    pub status: BookingStatus,
}

impl Booking {
    pub fn end_hour(&self) -> u8 {
        self.start_hour.saturating_add(self.hours)
    }

    pub fn is_active(&self) -> bool {
        self.status == BookingStatus::Confirmed
    }

    /// True when this confirmed booking occupies any hour of the requested slot.
    pub fn clashes_with(&self, facility_id: FacilityId, request: &BookingRequest) -> bool {
        self.is_active()
            && self.facility_id == facility_id
            && self.date == request.date
            && self.start_hour < request.end_hour()
            && request.start_hour < self.end_hour()
    }
}

/// A user's request for a slot at some facility.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub user_id: UserId,
    pub date: NaiveDate,
    pub start_hour: u8,
    pub hours: u8,
}

impl BookingRequest {
    pub fn end_hour(&self) -> u8 {
        self.start_hour.saturating_add(self.hours)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let within_hours = self.hours >= 1
            && self.start_hour >= OPENING_HOUR
            && self.end_hour() <= CLOSING_HOUR;
        if within_hours {
            Ok(())
        } else {
            Err(ValidationError::InvalidSlot {
                start: self.start_hour,
                hours: self.hours,
                opens: OPENING_HOUR,
                closes: CLOSING_HOUR,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(start_hour: u8, hours: u8) -> BookingRequest {
        BookingRequest {
            user_id: 7,
            date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            start_hour,
            hours,
        }
    }

    #[test]
    fn slots_must_fit_opening_hours() {
        assert!(request(6, 2).validate().is_ok());
        assert!(request(21, 2).validate().is_ok());
        assert!(request(5, 1).validate().is_err());
        assert!(request(22, 2).validate().is_err());
        assert!(request(10, 0).validate().is_err());
        assert!(request(250, 10).validate().is_err());
    }

    #[test]
    fn adjacent_slots_do_not_clash() {
        let booking = Booking {
            id: 1,
            reference: Uuid::nil(),
            facility_id: 2,
            user_id: 7,
            date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            start_hour: 18,
            hours: 2,
            total_price: 3000.0,
            status: BookingStatus::Confirmed,
        };

        assert!(booking.clashes_with(2, &request(19, 1)));
        assert!(booking.clashes_with(2, &request(17, 2)));
        assert!(!booking.clashes_with(2, &request(20, 1)));
        assert!(!booking.clashes_with(2, &request(16, 2)));
        assert!(!booking.clashes_with(3, &request(18, 2)));

        let cancelled = Booking {
            status: BookingStatus::Cancelled,
            ..booking
        };
        assert!(!cancelled.clashes_with(2, &request(18, 2)));
    }

    #[test]
    fn stored_bookings_with_out_of_range_hours_do_not_overflow() {
        let json = r#"{
            "id": 4,
            "reference": "00000000-0000-0000-0000-000000000000",
            "facilityId": 2,
            "userId": 7,
            "date": "2026-03-14",
            "startHour": 250,
            "hours": 10,
            "totalPrice": 0.0,
            "status": "confirmed"
        }"#;
        let booking: Booking = serde_json::from_str(json).unwrap();

        assert_eq!(booking.end_hour(), u8::MAX);
        assert!(!booking.clashes_with(2, &request(18, 2)));
    }
}
