pub mod admin_dashboard;
pub mod admin_layout;
pub mod admin_profile;
pub mod booking_form;
pub mod editable_cell;
pub mod facility_approval;
pub mod facility_details;
pub mod facility_form;
pub mod facility_list;
pub mod facility_management;
pub mod login_notice;
pub mod my_bookings;
pub mod rating_form;
pub mod ratings_list;
pub mod require_access;
pub mod user_management;
