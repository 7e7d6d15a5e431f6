pub mod booking;
pub mod facility;
pub mod seed;
pub mod session;
pub mod subject;
pub mod user;

pub use booking::BookingStore;
pub use facility::FacilityStore;
pub use session::SessionStore;
pub use subject::{Snapshots, Subject};
pub use user::UserStore;
