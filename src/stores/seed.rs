//! Demo turfs the catalogue starts with.
use crate::models::facility::{Facility, FacilityStatus};

fn turf(
    id: u32,
    name: &str,
    location: &str,
    price: f64,
    description: &str,
    image: &str,
    status: FacilityStatus,
) -> Facility {
    Facility {
        id,
        name: name.to_string(),
        location: location.to_string(),
        price,
        description: description.to_string(),
        image_url: format!("assets/images/{image}"),
        status,
        ratings: Vec::new(),
    }
}

pub fn facilities() -> Vec<Facility> {
    use FacilityStatus::*;

    vec![
        turf(1, "City Arena", "Kalyan West", 1200.0,
            "Premium 5-a-side AstroTurf with brilliant floodlights for night games.",
            "CityArena.jpg", Approved),
        turf(2, "Goal Zone", "Thane West", 1500.0,
            "Spacious, well-maintained ground for 7-a-side football and cricket.",
            "Goalzone.jpg", Approved),
        turf(3, "Kick Off", "Dombivli East", 1000.0,
            "A clean and affordable turf that is perfect for daily practice sessions.",
            "Kickoff.jpg", Pending),
        turf(4, "The Turf Park", "Andheri West", 1800.0,
            "Rooftop turf offering a premium experience with excellent amenities.",
            "TheTurfPark.jpg", Approved),
        turf(5, "Playmakers Arena", "Borivali East", 1400.0,
            "FIFA-approved turf for a professional playing feel, perfect for competitive matches.",
            "PlaymakersArena.jpg", Approved),
        turf(6, "Sportsville", "Navi Mumbai", 1600.0,
            "A massive multi-sport complex with multiple pitches for football and cricket.",
            "Sportsville.jpg", Rejected),
        turf(7, "Box Play", "Ghatkopar West", 1350.0,
            "Ideal for fast-paced 5-a-side games and box cricket, with a great cafe.",
            "BoxPlay.jpg", Approved),
        turf(8, "The Green Pitch", "Mulund West", 1100.0,
            "A lush green, well-maintained turf offering great value for money.",
            "TheGreenPitch.jpg", Pending),
    ]
}
