use futures::{Stream, StreamExt};
use leptos::logging::{log, warn};
use uuid::Uuid;

use crate::error::BookingError;
use crate::models::booking::{Booking, BookingId, BookingRequest, BookingStatus};
use crate::models::facility::Facility;
use crate::models::user::UserId;
use crate::stores::subject::{Snapshots, Subject};

#[derive(Default)]
pub struct BookingStore {
    bookings: Subject<Vec<Booking>>,
}

impl BookingStore {
    pub fn new(bookings: Vec<Booking>) -> Self {
        Self {
            bookings: Subject::new(bookings),
        }
    }

    pub fn snapshot(&self) -> Vec<Booking> {
        self.bookings.get()
    }

    pub fn list(&self) -> Snapshots<Vec<Booking>> {
        self.bookings.subscribe()
    }

    pub fn for_user(&self, user_id: UserId) -> Vec<Booking> {
        self.bookings.with(|bookings| {
            bookings
                .iter()
                .filter(|b| b.user_id == user_id)
                .cloned()
                .collect()
        })
    }

    pub fn list_for_user(
        &self,
        user_id: UserId,
    ) -> impl Stream<Item = Vec<Booking>> + Send + Unpin + 'static {
        self.list().map(move |bookings| {
            bookings
                .into_iter()
                .filter(|b| b.user_id == user_id)
                .collect()
        })
    }

    pub fn get_by_id(&self, id: BookingId) -> Option<Booking> {
        self.bookings
            .with(|bookings| bookings.iter().find(|b| b.id == id).cloned())
    }

    pub fn count_total(&self) -> impl Stream<Item = usize> + Send + Unpin + 'static {
        self.list().map(|bookings| bookings.len())
    }

    /// Books a slot at an approved facility, refusing hours that are already taken.
    pub fn book(
        &self,
        facility: &Facility,
        request: BookingRequest,
    ) -> Result<Booking, BookingError> {
        request.validate()?;
        if !facility.is_visible() {
            return Err(BookingError::NotBookable(facility.id));
        }

        let booking = self.bookings.try_modify(|bookings| {
            if bookings.iter().any(|b| b.clashes_with(facility.id, &request)) {
                return Err(BookingError::SlotTaken {
                    facility_id: facility.id,
                    date: request.date,
                    start_hour: request.start_hour,
                });
            }
            let id = match bookings.iter().map(|b| b.id).max() {
                Some(max) => max.checked_add(1).ok_or(BookingError::IdsExhausted)?,
                None => 1,
            };
            let booking = Booking {
                id,
                reference: Uuid::new_v4(),
                facility_id: facility.id,
                user_id: request.user_id,
                date: request.date,
                start_hour: request.start_hour,
                hours: request.hours,
                total_price: facility.price * f64::from(request.hours),
                status: BookingStatus::Confirmed,
            };
            bookings.push(booking.clone());
            Ok(booking)
        });

        match &booking {
            Ok(booking) => log!(
                "[BOOKINGS] Booking {} confirmed at facility {} on {} {}:00-{}:00",
                booking.id,
                booking.facility_id,
                booking.date,
                booking.start_hour,
                booking.end_hour()
            ),
            Err(err) => warn!("[BOOKINGS] Booking refused: {}", err),
        }
        booking
    }

    /// Cancels a booking and frees its slot.
    pub fn cancel(&self, id: BookingId) {
        let cancelled = self.bookings.modify(|bookings| {
            match bookings.iter_mut().find(|b| b.id == id && b.is_active()) {
                Some(booking) => {
                    booking.status = BookingStatus::Cancelled;
                    true
                }
                None => false,
            }
        });
        if cancelled {
            log!("[BOOKINGS] Booking {} cancelled", id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::models::facility::{FacilityStatus, NewFacility};
    use chrono::NaiveDate;
    use futures::FutureExt;

    fn turf(status: FacilityStatus) -> Facility {
        let mut facility = NewFacility {
            name: "Goal Zone".into(),
            location: "Thane West".into(),
            price: 1500.0,
            ..NewFacility::default()
        }
        .into_facility(2);
        facility.status = status;
        facility
    }

    fn request(user_id: UserId, start_hour: u8, hours: u8) -> BookingRequest {
        BookingRequest {
            user_id,
            date: NaiveDate::from_ymd_opt(2026, 10, 24).unwrap(),
            start_hour,
            hours,
        }
    }

    #[test]
    fn booking_prices_the_slot_and_numbers_sequentially() {
        let store = BookingStore::default();
        let facility = turf(FacilityStatus::Approved);

        let first = store.book(&facility, request(1, 18, 2)).unwrap();
        let second = store.book(&facility, request(2, 20, 1)).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.total_price, 3000.0);
        assert_ne!(first.reference, second.reference);
        assert_eq!(store.for_user(1), vec![first]);
    }

    #[test]
    fn overlapping_slots_are_refused_until_cancelled() {
        let store = BookingStore::default();
        let facility = turf(FacilityStatus::Approved);
        let taken = store.book(&facility, request(1, 18, 2)).unwrap();

        let clash = store.book(&facility, request(2, 19, 2));
        assert!(matches!(clash, Err(BookingError::SlotTaken { start_hour: 19, .. })));
        assert_eq!(store.snapshot().len(), 1);

        store.cancel(taken.id);
        assert_eq!(
            store.get_by_id(taken.id).unwrap().status,
            BookingStatus::Cancelled
        );
        assert!(store.book(&facility, request(2, 19, 2)).is_ok());
    }

    #[test]
    fn booking_refuses_once_ids_run_out() {
        let facility = turf(FacilityStatus::Approved);
        let last = Booking {
            id: u32::MAX,
            reference: Uuid::nil(),
            facility_id: facility.id,
            user_id: 1,
            date: NaiveDate::from_ymd_opt(2026, 10, 24).unwrap(),
            start_hour: 6,
            hours: 1,
            total_price: 1500.0,
            status: BookingStatus::Confirmed,
        };
        let store = BookingStore::new(vec![last]);

        assert_eq!(
            store.book(&facility, request(2, 18, 1)),
            Err(BookingError::IdsExhausted)
        );
        assert_eq!(store.snapshot().len(), 1);
    }

    #[test]
    fn only_approved_facilities_take_bookings() {
        let store = BookingStore::default();
        for status in [FacilityStatus::Pending, FacilityStatus::Rejected] {
            assert_eq!(
                store.book(&turf(status), request(1, 10, 1)),
                Err(BookingError::NotBookable(2))
            );
        }
    }

    #[test]
    fn slots_outside_opening_hours_are_invalid() {
        let store = BookingStore::default();
        let result = store.book(&turf(FacilityStatus::Approved), request(1, 22, 3));
        assert!(matches!(
            result,
            Err(BookingError::Invalid(ValidationError::InvalidSlot { start: 22, .. }))
        ));
    }

    #[test]
    fn per_user_stream_and_totals_follow_bookings() {
        let store = BookingStore::default();
        let facility = turf(FacilityStatus::Approved);
        let mut mine = store.list_for_user(1);
        let mut total = store.count_total();

        assert_eq!(mine.next().now_or_never().flatten(), Some(vec![]));
        assert_eq!(total.next().now_or_never().flatten(), Some(0));

        store.book(&facility, request(2, 7, 1)).unwrap();
        store.book(&facility, request(1, 9, 1)).unwrap();

        assert_eq!(mine.next().now_or_never().flatten().map(|b| b.len()), Some(0));
        assert_eq!(mine.next().now_or_never().flatten().map(|b| b.len()), Some(1));
        assert_eq!(total.next().now_or_never().flatten(), Some(1));
        assert_eq!(total.next().now_or_never().flatten(), Some(2));
    }
}
