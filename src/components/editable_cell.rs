use leptos::*;

/// Text input that reports its value once editing is committed.
#[component]
pub fn EditableCell(
    value: String,
    on_commit: impl Fn(String) + 'static,
) -> impl IntoView {
    let (input_value, set_input_value) = create_signal(value);

    let handle_input = move |e: web_sys::Event| {
        set_input_value.set(event_target_value(&e));
    };

    view! {
        <input
            type="text"
            prop:value=move || input_value.get()
            on:input=handle_input
            on:change=move |_| on_commit(input_value.get_untracked())
        />
    }
}
