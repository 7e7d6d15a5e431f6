use chrono::NaiveDate;
use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::use_navigate;
use std::sync::Arc;

use crate::config::{CLOSING_HOUR, OPENING_HOUR};
use crate::models::booking::BookingRequest;
use crate::models::facility::FacilityId;
use crate::state::AppState;
use crate::stores::SessionStore;

#[component]
pub fn BookingForm(facility_id: FacilityId) -> impl IntoView {
    let state = expect_context::<AppState>();
    let session = expect_context::<Arc<SessionStore>>();
    let navigate = use_navigate();
    let (date, set_date) = create_signal(String::new());
    let (start_hour, set_start_hour) = create_signal(18u8);
    let (hours, set_hours) = create_signal(1u8);
    let (error, set_error) = create_signal(None::<String>);

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(user) = session.current() else {
            set_error.set(Some("Sign in to book a slot.".to_string()));
            return;
        };
        let Ok(date) = NaiveDate::parse_from_str(&date.get_untracked(), "%Y-%m-%d") else {
            set_error.set(Some("Pick a date for your game.".to_string()));
            return;
        };
        let Some(facility) = state.facilities.get_by_id(facility_id) else {
            set_error.set(Some("This turf is no longer listed.".to_string()));
            return;
        };

        let request = BookingRequest {
            user_id: user.id,
            date,
            start_hour: start_hour.get_untracked(),
            hours: hours.get_untracked(),
        };
        match state.bookings.book(&facility, request) {
            Ok(booking) => {
                set_error.set(None);
                navigate(&format!("/confirmation/{}", booking.id), Default::default());
            }
            Err(err) => set_error.set(Some(err.to_string())),
        }
    };

    view! {
        <form on:submit=handle_submit>
            <h3>{ "Book a Slot" }</h3>
            <input type="date" on:input=move |e| set_date.set(event_target_value(&e)) />
            <label>
                { "Start hour" }
                <input
                    type="number"
                    min=OPENING_HOUR
                    max={CLOSING_HOUR - 1}
                    prop:value=move || start_hour.get()
                    on:input=move |e| set_start_hour.set(event_target_value(&e).parse::<u8>().unwrap_or(OPENING_HOUR))
                />
            </label>
            <label>
                { "Hours" }
                <input
                    type="number"
                    min=1
                    prop:value=move || hours.get()
                    on:input=move |e| set_hours.set(event_target_value(&e).parse::<u8>().unwrap_or(1))
                />
            </label>
            {move || error.get().map(|message| view! { <p class="error">{ message }</p> })}
            <button type="submit">{ "Book Now" }</button>
        </form>
    }
}
