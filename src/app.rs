/// Main application entry point for the turf booking site.
/// Builds the store context once and wires every page to its route and guard.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::{
    admin_dashboard::AdminDashboard,
    admin_layout::AdminLayout,
    admin_profile::AdminProfile,
    facility_approval::FacilityApproval,
    facility_details::FacilityDetails,
    facility_list::FacilityList,
    facility_management::FacilityManagement,
    login_notice::LoginNotice,
    my_bookings::{BookingConfirmation, MyBookings},
    require_access::RequireAccess,
    user_management::UserManagement,
};
use crate::guards::AccessControl;
use crate::models::user::Role;
use crate::state::{client_session, AppState};

const SIGNED_IN: AccessControl = AccessControl::authenticated();
const SUPER_ADMIN: AccessControl = AccessControl::role(Role::SuperAdmin);

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The server hands in its own state; the browser builds one here.
    let state = use_context::<AppState>().unwrap_or_else(AppState::detached);
    provide_context(state);
    provide_context(client_session());

    view! {
        <Stylesheet id="leptos" href="/pkg/turfbook.css" />
        <Title text="Turf Booking" />
        <Router>
            <header>
                <h1>{ "Turf Booking" }</h1>
                <nav>
                    <A href="/">{ "Turfs" }</A>
                    <A href="/my-bookings">{ "My Bookings" }</A>
                    <A href="/admin-panel">{ "Admin" }</A>
                </nav>
            </header>
            <main>
                <Routes>
                    <Route path="/" view=FacilityList />
                    <Route path="/login" view=LoginNotice />
                    <Route path="/turf/:id" view=|| view! {
                        <RequireAccess access=SIGNED_IN><FacilityDetails /></RequireAccess>
                    } />
                    <Route path="/my-bookings" view=|| view! {
                        <RequireAccess access=SIGNED_IN><MyBookings /></RequireAccess>
                    } />
                    <Route path="/confirmation/:id" view=|| view! {
                        <RequireAccess access=SIGNED_IN><BookingConfirmation /></RequireAccess>
                    } />
                    <Route path="/admin/turfs" view=|| view! {
                        <RequireAccess access=SIGNED_IN><FacilityManagement /></RequireAccess>
                    } />
                    <Route path="/admin-panel" view=|| view! {
                        <RequireAccess access=SUPER_ADMIN><AdminLayout /></RequireAccess>
                    }>
                        <Route path="" view=|| view! { <Redirect path="/admin-panel/dashboard" /> } />
                        <Route path="dashboard" view=AdminDashboard />
                        <Route path="facility-approval" view=FacilityApproval />
                        <Route path="user-management" view=UserManagement />
                        <Route path="profile" view=AdminProfile />
                    </Route>
                    <Route path="/*any" view=|| view! { <Redirect path="/" /> } />
                </Routes>
            </main>
        </Router>
    }
}
