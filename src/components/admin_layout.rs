use leptos::*;
use leptos_router::{Outlet, A};

#[component]
pub fn AdminLayout() -> impl IntoView {
    view! {
        <div class="admin-panel">
            <nav>
                <A href="/admin-panel/dashboard">{ "Dashboard" }</A>
                <A href="/admin-panel/facility-approval">{ "Facility Approval" }</A>
                <A href="/admin-panel/user-management">{ "User Management" }</A>
                <A href="/admin-panel/profile">{ "Profile" }</A>
            </nav>
            <Outlet />
        </div>
    }
}
