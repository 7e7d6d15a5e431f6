use leptos::*;
use leptos_router::Redirect;
use std::sync::Arc;

use crate::guards::{Access, AccessControl};
use crate::stores::SessionStore;

/// Renders `children` only when the signed-in user passes `access`;
/// otherwise redirects to the guard's login path.
///
/// The session lives in the browser, so the check runs in an effect once the
/// page is live. Server renders and the first hydrating pass show a
/// placeholder.
#[component]
pub fn RequireAccess(access: AccessControl, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<Arc<SessionStore>>();
    let (verdict, set_verdict) = create_signal(None::<Access>);

    create_effect(move |_| {
        set_verdict.set(Some(access.check(session.current().as_ref())));
    });

    view! {
        <div class="guarded">
        {move || match verdict.get() {
            None => view! { <p class="checking-access">{ "Checking access..." }</p> }.into_view(),
            Some(Access::Allowed) => children().into_view(),
            Some(Access::Denied { redirect_to }) => view! { <Redirect path=redirect_to /> }.into_view(),
        }}
        </div>
    }
}
