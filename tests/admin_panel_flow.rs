use chrono::NaiveDate;
use futures::{FutureExt, Stream, StreamExt};
use std::sync::Arc;
use turfbook::config::{SESSION_KEY, USERS_KEY};
use turfbook::guards::{Access, AccessControl};
use turfbook::models::booking::BookingRequest;
use turfbook::models::facility::{FacilityStatus, NewFacility, Verdict};
use turfbook::models::rating::Rating;
use turfbook::models::user::{Role, User};
use turfbook::state::AppState;
use turfbook::storage::{MemoryStorage, Storage};
use turfbook::stores::SessionStore;

const USERS: &str = r#"[
    {"id":1,"email":"root@turf.in","role":"super-admin","isBanned":false},
    {"id":2,"email":"owner@turf.in","role":"admin","isBanned":false},
    {"id":3,"email":"player@turf.in","role":"user","isBanned":false}
]"#;

fn next<S: Stream + Unpin>(stream: &mut S) -> Option<S::Item> {
    stream.next().now_or_never().flatten()
}

fn state_with_users() -> (Arc<MemoryStorage>, AppState) {
    let storage = Arc::new(MemoryStorage::with_entry(USERS_KEY, USERS));
    let state = AppState::new(storage.clone());
    (storage, state)
}

#[test]
fn submitted_turf_goes_live_after_approval() {
    let (_, state) = state_with_users();
    let mut visible = state.facilities.list_visible();
    let mut pending = state.facilities.list_pending();
    assert_eq!(next(&mut visible).map(|list| list.len()), Some(5));
    assert_eq!(next(&mut pending).map(|list| list.len()), Some(2));

    let id = state.facilities.add(NewFacility {
        name: "Striker Dome".into(),
        location: "Vashi".into(),
        price: 1250.0,
        description: "Indoor 6-a-side".into(),
        image_url: "assets/images/StrikerDome.jpg".into(),
    })
    .unwrap();
    assert_eq!(id, 9);
    assert_eq!(next(&mut visible).map(|list| list.len()), Some(5));
    assert_eq!(next(&mut pending).map(|list| list.len()), Some(3));

    state.facilities.set_status(id, Verdict::Approved);
    let listed = next(&mut visible).unwrap();
    assert_eq!(listed.last().map(|f| f.id), Some(9));
    assert_eq!(state.stats().active_facilities, 6);
}

#[test]
fn only_super_admins_reach_the_admin_panel() {
    let (storage, state) = state_with_users();
    let session = SessionStore::load(storage.clone());
    let guard = AccessControl::role(Role::SuperAdmin);

    assert_eq!(
        guard.check(session.current().as_ref()),
        Access::Denied { redirect_to: "/login" }
    );

    let owner = state.users.get_by_id(2).unwrap();
    session.sign_in(owner);
    assert!(!guard.check(session.current().as_ref()).is_allowed());

    let root = state.users.get_by_id(1).unwrap();
    session.sign_in(root);
    assert!(guard.check(session.current().as_ref()).is_allowed());

    let stored: User = serde_json::from_str(&storage.get(SESSION_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(stored.role, Role::SuperAdmin);
}

#[test]
fn bans_persist_across_restarts() {
    let (storage, state) = state_with_users();
    let mut count = state.users.count();
    assert_eq!(next(&mut count), Some(3));

    state.users.toggle_ban(3);
    assert_eq!(next(&mut count), Some(3));

    let restarted = AppState::new(storage);
    assert!(restarted.users.get_by_id(3).unwrap().is_banned);
    assert!(!restarted.users.get_by_id(2).unwrap().is_banned);
}

#[test]
fn player_books_and_rates_an_approved_turf() {
    let (_, state) = state_with_users();
    let turf = state.facilities.get_by_id(2).unwrap();
    assert_eq!(turf.status, FacilityStatus::Approved);

    let booking = state
        .bookings
        .book(
            &turf,
            BookingRequest {
                user_id: 3,
                date: NaiveDate::from_ymd_opt(2026, 11, 1).unwrap(),
                start_hour: 19,
                hours: 2,
            },
        )
        .unwrap();
    assert_eq!(booking.total_price, 3000.0);
    assert_eq!(state.stats().total_bookings, 1);

    state.facilities.add_rating(2, Rating::new(4, "Good turf").unwrap());
    state.facilities.add_rating(2, Rating::new(5, "").unwrap());
    let rated = state.facilities.get_by_id(2).unwrap();
    assert_eq!(state.facilities.average_rating(&rated), 4.5);

    let pending_turf = state.facilities.get_by_id(3).unwrap();
    assert!(state
        .bookings
        .book(
            &pending_turf,
            BookingRequest {
                user_id: 3,
                date: NaiveDate::from_ymd_opt(2026, 11, 1).unwrap(),
                start_hour: 7,
                hours: 1,
            },
        )
        .is_err());
}
