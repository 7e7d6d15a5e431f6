/// Public listing of approved turfs.
use leptos::*;
use leptos_router::A;

use crate::models::facility::Facility;
use crate::state::AppState;
use crate::utils::reactive::signal_from_stream;

#[component]
pub fn FacilityList() -> impl IntoView {
    let state = expect_context::<AppState>();
    let facilities = signal_from_stream(state.facilities.visible(), state.facilities.list_visible());

    view! {
        <section>
            <h2>{ "Available Turfs" }</h2>
            <Show
                when=move || facilities.with(|list| !list.is_empty())
                fallback=|| view! { <p>{ "No turfs are open for booking right now." }</p> }
            >
                <For
                    each=move || facilities.get()
                    key=|facility| (facility.id, facility.ratings.len())
                    children=move |facility| view! { <FacilityCard facility=facility /> }
                />
            </Show>
        </section>
    }
}

#[component]
pub fn FacilityCard(facility: Facility) -> impl IntoView {
    let href = format!("/turf/{}", facility.id);
    let rating = match facility.ratings.len() {
        0 => "Not rated yet".to_string(),
        n => format!("{:.1} / 5 ({} ratings)", facility.average_rating(), n),
    };

    view! {
        <article class="facility-card">
            <img src=facility.image_url.clone() alt=facility.name.clone() />
            <h3>{ facility.name.clone() }</h3>
            <p>{ facility.location.clone() }</p>
            <p>{ format!("₹{:.0} per hour", facility.price) }</p>
            <p>{ rating }</p>
            <A href=href>{ "View details" }</A>
        </article>
    }
}
