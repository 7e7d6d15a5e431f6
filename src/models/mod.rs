pub mod booking;
pub mod facility;
pub mod rating;
pub mod user;
