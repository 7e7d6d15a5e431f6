use leptos::*;
use leptos_router::use_params_map;

use crate::components::booking_form::BookingForm;
use crate::components::rating_form::RatingForm;
use crate::components::ratings_list::RatingsList;
use crate::models::facility::FacilityId;
use crate::state::AppState;
use crate::utils::reactive::signal_from_stream;

#[component]
pub fn FacilityDetails() -> impl IntoView {
    let state = expect_context::<AppState>();
    let params = use_params_map();
    let facilities = signal_from_stream(state.facilities.snapshot(), state.facilities.list());

    let facility_id = move || {
        params.with(|p| p.get("id").and_then(|raw| raw.parse::<FacilityId>().ok()))
    };
    let facility = move || {
        let id = facility_id()?;
        facilities.with(|list| list.iter().find(|f| f.id == id && f.is_visible()).cloned())
    };

    view! {
        <div class="facility-details">
        {move || match facility() {
            Some(facility) => view! {
                <section>
                    <h2>{ facility.name.clone() }</h2>
                    <img src=facility.image_url.clone() alt=facility.name.clone() />
                    <p>{ facility.location.clone() }</p>
                    <p>{ facility.description.clone() }</p>
                    <p>{ format!("₹{:.0} per hour", facility.price) }</p>
                    <p>{ format!("Average rating: {:.1} / 5", facility.average_rating()) }</p>
                    <RatingsList ratings=facility.ratings.clone() />
                    <RatingForm facility_id=facility.id />
                    <BookingForm facility_id=facility.id />
                </section>
            }.into_view(),
            None => view! { <p>{ "Turf not found." }</p> }.into_view(),
        }}
        </div>
    }
}
