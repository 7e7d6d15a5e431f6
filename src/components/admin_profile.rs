use leptos::ev::SubmitEvent;
use leptos::*;
use std::sync::Arc;

use crate::stores::SessionStore;
use crate::utils::reactive::signal_from_stream;

/// The signed-in admin's account details.
#[component]
pub fn AdminProfile() -> impl IntoView {
    let session = expect_context::<Arc<SessionStore>>();
    let current = signal_from_stream(session.current(), session.watch());
    let (display_name, set_display_name) = create_signal(
        current
            .get_untracked()
            .map(|user| user.role.label().to_string())
            .unwrap_or_default(),
    );
    let (saved, set_saved) = create_signal(None::<String>);

    // Display names are not stored yet, the change lasts until reload.
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let name = display_name.get_untracked();
        if name.trim().is_empty() {
            set_saved.set(Some("Display name cannot be empty.".to_string()));
            return;
        }
        set_saved.set(Some(format!("Display name set to {}.", name.trim())));
    };

    view! {
        <section>
            <h2>{ "Profile" }</h2>
            <dl>
                <dt>{ "Email" }</dt>
                <dd>{ move || current.get().map(|user| user.email).unwrap_or_default() }</dd>
                <dt>{ "Role" }</dt>
                <dd>{ move || current.get().map(|user| user.role.label()).unwrap_or_default() }</dd>
            </dl>
            <form on:submit=handle_submit>
                <label>
                    { "Display name" }
                    <input
                        type="text"
                        prop:value=move || display_name.get()
                        on:input=move |e| set_display_name.set(event_target_value(&e))
                    />
                </label>
                {move || saved.get().map(|message| view! { <p>{ message }</p> })}
                <button type="submit">{ "Update Profile" }</button>
            </form>
        </section>
    }
}
