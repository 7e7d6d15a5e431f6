use leptos::*;

use crate::state::AppState;
use crate::utils::reactive::signal_from_stream;

#[component]
pub fn UserManagement() -> impl IntoView {
    let state = expect_context::<AppState>();
    let users = signal_from_stream(state.users.snapshot(), state.users.list());
    let store = state.users.clone();

    view! {
        <section>
            <h2>{ "User Management" }</h2>
            <table>
                <thead>
                    <tr>
                        <th>{ "Email" }</th>
                        <th>{ "Role" }</th>
                        <th>{ "Status" }</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || users.get()
                        key=|user| (user.id, user.is_banned)
                        children=move |user| {
                            let id = user.id;
                            let toggle = store.clone();
                            view! {
                                <tr>
                                    <td>{ user.email.clone() }</td>
                                    <td>{ user.role.label() }</td>
                                    <td>{ if user.is_banned { "Banned" } else { "Active" } }</td>
                                    <td>
                                        <button on:click=move |_| toggle.toggle_ban(id)>
                                            { if user.is_banned { "Unban" } else { "Ban" } }
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}
