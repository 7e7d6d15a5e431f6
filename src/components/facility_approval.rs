use leptos::*;

use crate::models::facility::Verdict;
use crate::state::AppState;
use crate::utils::reactive::signal_from_stream;

#[component]
pub fn FacilityApproval() -> impl IntoView {
    let state = expect_context::<AppState>();
    let pending = signal_from_stream(state.facilities.pending(), state.facilities.list_pending());
    let store = state.facilities.clone();

    view! {
        <section>
            <h2>{ "Facility Approval" }</h2>
            <Show
                when=move || pending.with(|list| !list.is_empty())
                fallback=|| view! { <p>{ "Nothing is waiting for review." }</p> }
            >
                <ul>
                    <For
                        each=move || pending.get()
                        key=|facility| facility.id
                        children={
                            let store = store.clone();
                            move |facility| {
                                let id = facility.id;
                                let approve = store.clone();
                                let reject = store.clone();
                                view! {
                                    <li>
                                        <strong>{ facility.name.clone() }</strong>
                                        { format!(" - {}, ₹{:.0}/hour", facility.location, facility.price) }
                                        <button on:click=move |_| approve.set_status(id, Verdict::Approved)>{ "Approve" }</button>
                                        <button on:click=move |_| reject.set_status(id, Verdict::Rejected)>{ "Reject" }</button>
                                    </li>
                                }
                            }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}
