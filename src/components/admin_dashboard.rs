use leptos::*;

use crate::state::AppState;
use crate::utils::reactive::signal_from_stream;

/// Live totals across the stores.
#[component]
pub fn AdminDashboard() -> impl IntoView {
    let state = expect_context::<AppState>();
    let stats = state.stats();

    let total_users = signal_from_stream(stats.total_users, state.users.count());
    let total_facilities = signal_from_stream(stats.total_facilities, state.facilities.count_total());
    let total_bookings = signal_from_stream(stats.total_bookings, state.bookings.count_total());
    let active_facilities = signal_from_stream(stats.active_facilities, state.facilities.count_active());

    view! {
        <section>
            <h2>{ "Dashboard" }</h2>
            <dl>
                <dt>{ "Total users" }</dt>
                <dd>{ move || total_users.get() }</dd>
                <dt>{ "Total facilities" }</dt>
                <dd>{ move || total_facilities.get() }</dd>
                <dt>{ "Total bookings" }</dt>
                <dd>{ move || total_bookings.get() }</dd>
                <dt>{ "Active courts" }</dt>
                <dd>{ move || active_facilities.get() }</dd>
            </dl>
        </section>
    }
}
