use leptos::*;
use leptos_router::A;
use std::sync::Arc;

use crate::stores::SessionStore;
use crate::utils::reactive::signal_from_stream;

#[component]
pub fn LoginNotice() -> impl IntoView {
    let session = expect_context::<Arc<SessionStore>>();
    // Starts signed out on both sides of hydration; the replayed session
    // arrives once the page is live.
    let current = signal_from_stream(None, session.watch());

    view! {
        <section>
            <h2>{ "Sign in" }</h2>
            {move || match current.get() {
                Some(user) => {
                    let session = session.clone();
                    view! {
                        <p>{ format!("Signed in as {} ({})", user.email, user.role) }</p>
                        <button on:click=move |_| session.sign_out()>{ "Sign out" }</button>
                    }.into_view()
                }
                None => view! {
                    <p>{ "You need to sign in to view this page." }</p>
                    <A href="/">{ "Back to turfs" }</A>
                }.into_view(),
            }}
        </section>
    }
}
