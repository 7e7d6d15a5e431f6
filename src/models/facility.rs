// src/models/facility.rs
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::models::rating::Rating;

pub type FacilityId = u32;

/// Admin-approval state of a facility.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum FacilityStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl FacilityStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            FacilityStatus::Pending => "pending",
            FacilityStatus::Approved => "approved",
            FacilityStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for FacilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of an admin review. Facilities can never be sent back to pending.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Approved,
    Rejected,
}

impl From<Verdict> for FacilityStatus {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Approved => FacilityStatus::Approved,
            Verdict::Rejected => FacilityStatus::Rejected,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub id: FacilityId,
    pub name: String,
    pub location: String,
    pub price: f64, // Per hour, in rupees
    pub description: String,
    pub image_url: String,
    #[serde(default)]
    pub status: FacilityStatus,
    #[serde(default)]
    pub ratings: Vec<Rating>,
}

impl Facility {
    /// Mean star count, or 0 when nobody has rated the facility yet.
    pub fn average_rating(&self) -> f64 {
        if self.ratings.is_empty() {
            return 0.0;
        }
        let total: u32 = self.ratings.iter().map(|r| u32::from(r.stars.get())).sum();
        f64::from(total) / self.ratings.len() as f64
    }

    /// Only approved facilities are shown publicly and can be booked.
    pub fn is_visible(&self) -> bool {
        self.status == FacilityStatus::Approved
    }
}

/// Data submitted for a new facility; id, status and ratings are assigned by the store.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewFacility {
    pub name: String,
    pub location: String,
    pub price: f64,
    pub description: String,
    pub image_url: String,
}

impl NewFacility {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyField("name"));
        }
        if self.location.trim().is_empty() {
            return Err(ValidationError::EmptyField("location"));
        }
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(ValidationError::InvalidPrice(self.price));
        }
        Ok(())
    }

    pub(crate) fn into_facility(self, id: FacilityId) -> Facility {
        Facility {
            id,
            name: self.name,
            location: self.location,
            price: self.price,
            description: self.description,
            image_url: self.image_url,
            status: FacilityStatus::Pending,
            ratings: Vec::new(),
        }
    }
}

/// Partial update: every `Some` field replaces the stored value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FacilityPatch {
    pub id: FacilityId,
    pub name: Option<String>,
    pub location: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl FacilityPatch {
    pub fn new(id: FacilityId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub(crate) fn apply_to(self, facility: &mut Facility) {
        if let Some(name) = self.name {
            facility.name = name;
        }
        if let Some(location) = self.location {
            facility.location = location;
        }
        if let Some(price) = self.price {
            facility.price = price;
        }
        if let Some(description) = self.description {
            facility.description = description;
        }
        if let Some(image_url) = self.image_url {
            facility.image_url = image_url;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facility_with(stars: &[u8]) -> Facility {
        let mut facility = NewFacility {
            name: "City Arena".into(),
            location: "Kalyan West".into(),
            price: 1200.0,
            ..NewFacility::default()
        }
        .into_facility(1);
        facility.ratings = stars.iter().map(|&s| Rating::new(s, "").unwrap()).collect();
        facility
    }

    #[test]
    fn average_of_no_ratings_is_zero() {
        assert_eq!(facility_with(&[]).average_rating(), 0.0);
    }

    #[test]
    fn average_is_sum_over_count() {
        assert_eq!(facility_with(&[5, 4, 3]).average_rating(), 4.0);
        assert_eq!(facility_with(&[5, 4]).average_rating(), 4.5);
        assert_eq!(facility_with(&[1]).average_rating(), 1.0);
    }

    #[test]
    fn new_facilities_start_pending_without_ratings() {
        let facility = facility_with(&[]);
        assert_eq!(facility.status, FacilityStatus::Pending);
        assert!(!facility.is_visible());
    }

    #[test]
    fn validation_rejects_blank_names_and_bad_prices() {
        let mut data = NewFacility {
            name: " ".into(),
            location: "Thane".into(),
            price: 900.0,
            ..NewFacility::default()
        };
        assert_eq!(data.validate(), Err(ValidationError::EmptyField("name")));

        data.name = "Goal Zone".into();
        data.price = 0.0;
        assert_eq!(data.validate(), Err(ValidationError::InvalidPrice(0.0)));

        data.price = 1500.0;
        assert_eq!(data.validate(), Ok(()));
    }

    #[test]
    fn patch_only_touches_present_fields() {
        let mut facility = facility_with(&[4]);
        FacilityPatch::new(1).price(1300.0).apply_to(&mut facility);

        assert_eq!(facility.price, 1300.0);
        assert_eq!(facility.name, "City Arena");
        assert_eq!(facility.ratings.len(), 1);
    }

    #[test]
    fn verdict_maps_onto_status() {
        assert_eq!(FacilityStatus::from(Verdict::Approved), FacilityStatus::Approved);
        assert_eq!(FacilityStatus::from(Verdict::Rejected), FacilityStatus::Rejected);
        assert_eq!(
            serde_json::to_string(&FacilityStatus::Rejected).unwrap(),
            r#""rejected""#
        );
    }
}
