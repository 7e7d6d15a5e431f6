use leptos::ev::SubmitEvent;
use leptos::*;

use crate::models::facility::NewFacility;
use crate::state::AppState;

/// Submission form for a new turf. Submissions wait for admin approval.
#[component]
pub fn FacilityForm() -> impl IntoView {
    let state = expect_context::<AppState>();
    let (name, set_name) = create_signal(String::new());
    let (location, set_location) = create_signal(String::new());
    let (price, set_price) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());
    let (image_url, set_image_url) = create_signal(String::new());
    let (feedback, set_feedback) = create_signal(None::<Result<String, String>>);

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let data = NewFacility {
            name: name.get_untracked(),
            location: location.get_untracked(),
            price: price.get_untracked().trim().parse().unwrap_or(0.0),
            description: description.get_untracked(),
            image_url: image_url.get_untracked(),
        };
        if let Err(err) = data.validate() {
            set_feedback.set(Some(Err(err.to_string())));
            return;
        }

        let Some(id) = state.facilities.add(data) else {
            set_feedback.set(Some(Err("No more turfs can be added.".to_string())));
            return;
        };
        set_feedback.set(Some(Ok(format!("Turf #{} submitted for approval.", id))));

        // Reset values
        set_name.set(String::new());
        set_location.set(String::new());
        set_price.set(String::new());
        set_description.set(String::new());
        set_image_url.set(String::new());
    };

    view! {
        <form on:submit=handle_submit>
            <h3>{ "Add a Turf" }</h3>
            <input type="text" placeholder="Name" prop:value=move || name.get() on:input=move |e| set_name.set(event_target_value(&e)) />
            <input type="text" placeholder="Location" prop:value=move || location.get() on:input=move |e| set_location.set(event_target_value(&e)) />
            <input type="number" placeholder="Price per hour" prop:value=move || price.get() on:input=move |e| set_price.set(event_target_value(&e)) />
            <textarea placeholder="Description" prop:value=move || description.get() on:input=move |e| set_description.set(event_target_value(&e)) />
            <input type="text" placeholder="Image URL" prop:value=move || image_url.get() on:input=move |e| set_image_url.set(event_target_value(&e)) />
            {move || feedback.get().map(|outcome| match outcome {
                Ok(message) => view! { <p>{ message }</p> },
                Err(message) => view! { <p class="error">{ message }</p> },
            })}
            <button type="submit">{ "Submit Turf" }</button>
        </form>
    }
}
