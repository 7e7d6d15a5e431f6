use leptos::ev::SubmitEvent;
use leptos::*;

use crate::models::facility::FacilityId;
use crate::models::rating::{Rating, Stars};
use crate::state::AppState;

#[component]
pub fn RatingForm(facility_id: FacilityId) -> impl IntoView {
    let state = expect_context::<AppState>();
    let (stars, set_stars) = create_signal(Stars::MAX);
    let (comment, set_comment) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let submit_rating = move |ev: SubmitEvent| {
        ev.prevent_default();
        match Rating::new(stars.get_untracked(), comment.get_untracked()) {
            Ok(rating) => {
                state.facilities.add_rating(facility_id, rating);
                set_comment.set(String::new());
                set_error.set(None);
            }
            Err(err) => set_error.set(Some(err.to_string())),
        }
    };

    view! {
        <form on:submit=submit_rating>
            <h3>{ "Rate this turf" }</h3>
            <input
                type="number"
                min=Stars::MIN
                max=Stars::MAX
                prop:value=move || stars.get()
                on:input=move |e| set_stars.set(event_target_value(&e).parse::<u8>().unwrap_or(0))
            />
            <textarea
                placeholder="How was your game?"
                prop:value=move || comment.get()
                on:input=move |e| set_comment.set(event_target_value(&e))
            />
            {move || error.get().map(|message| view! { <p class="error">{ message }</p> })}
            <button type="submit">{ "Submit Rating" }</button>
        </form>
    }
}
