use leptos::*;
use leptos_router::{use_params_map, A};
use std::sync::Arc;

use crate::models::booking::{Booking, BookingId};
use crate::state::AppState;
use crate::stores::SessionStore;
use crate::utils::reactive::signal_from_stream;

fn describe(booking: &Booking, facility_name: &str) -> String {
    format!(
        "{} on {} from {}:00 to {}:00 (₹{:.0})",
        facility_name,
        booking.date.format("%d %b %Y"),
        booking.start_hour,
        booking.end_hour(),
        booking.total_price
    )
}

#[component]
pub fn MyBookings() -> impl IntoView {
    let state = expect_context::<AppState>();
    let session = expect_context::<Arc<SessionStore>>();
    let Some(user) = session.current() else {
        return view! { <p>{ "Sign in to see your bookings." }</p> }.into_view();
    };
    let bookings = signal_from_stream(
        state.bookings.for_user(user.id),
        state.bookings.list_for_user(user.id),
    );

    view! {
        <section>
            <h2>{ "My Bookings" }</h2>
            <ul>
                <For
                    each=move || bookings.get()
                    key=|booking| (booking.id, booking.is_active())
                    children=move |booking| {
                        let name = state
                            .facilities
                            .get_by_id(booking.facility_id)
                            .map(|f| f.name)
                            .unwrap_or_else(|| format!("Turf #{}", booking.facility_id));
                        let action = if booking.is_active() {
                            let store = state.bookings.clone();
                            let id = booking.id;
                            view! { <button on:click=move |_| store.cancel(id)>{ "Cancel" }</button> }
                                .into_view()
                        } else {
                            view! { <span>{ " - cancelled" }</span> }.into_view()
                        };
                        view! {
                            <li>
                                { describe(&booking, &name) }
                                { action }
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
    .into_view()
}

#[component]
pub fn BookingConfirmation() -> impl IntoView {
    let state = expect_context::<AppState>();
    let facilities = state.facilities.clone();
    let params = use_params_map();
    let booking = move || {
        params
            .with(|p| p.get("id").and_then(|raw| raw.parse::<BookingId>().ok()))
            .and_then(|id| state.bookings.get_by_id(id))
    };

    view! {
        <div class="booking-confirmation">
        {move || match booking() {
            Some(booking) => {
                let name = facilities
                    .get_by_id(booking.facility_id)
                    .map(|f| f.name)
                    .unwrap_or_default();
                view! {
                    <section>
                        <h2>{ "Booking Confirmed" }</h2>
                        <p>{ describe(&booking, &name) }</p>
                        <p>{ format!("Reference: {}", booking.reference) }</p>
                        <A href="/my-bookings">{ "Go to my bookings" }</A>
                    </section>
                }.into_view()
            }
            None => view! { <p>{ "Booking not found." }</p> }.into_view(),
        }}
        </div>
    }
}
