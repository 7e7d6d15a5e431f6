use futures::{Stream, StreamExt};
use leptos::logging::{error, log, warn};

use crate::models::facility::{
    Facility, FacilityId, FacilityPatch, FacilityStatus, NewFacility, Verdict,
};
use crate::models::rating::Rating;
use crate::stores::seed;
use crate::stores::subject::{Snapshots, Subject};

fn only(status: FacilityStatus) -> impl Fn(Vec<Facility>) -> Vec<Facility> {
    move |facilities| {
        facilities
            .into_iter()
            .filter(|facility| facility.status == status)
            .collect()
    }
}

/// Catalogue of turfs and their approval state.
#[derive(Default)]
pub struct FacilityStore {
    facilities: Subject<Vec<Facility>>,
}

impl FacilityStore {
    pub fn new(facilities: Vec<Facility>) -> Self {
        Self {
            facilities: Subject::new(facilities),
        }
    }

    /// Store preloaded with the demo turfs.
    pub fn seeded() -> Self {
        Self::new(seed::facilities())
    }

    pub fn snapshot(&self) -> Vec<Facility> {
        self.facilities.get()
    }

    pub fn visible(&self) -> Vec<Facility> {
        only(FacilityStatus::Approved)(self.snapshot())
    }

    pub fn pending(&self) -> Vec<Facility> {
        only(FacilityStatus::Pending)(self.snapshot())
    }

    pub fn list(&self) -> Snapshots<Vec<Facility>> {
        self.facilities.subscribe()
    }

    /// Publicly listed facilities, in catalogue order.
    pub fn list_visible(&self) -> impl Stream<Item = Vec<Facility>> + Send + Unpin + 'static {
        self.list().map(only(FacilityStatus::Approved))
    }

    /// Facilities awaiting an admin verdict.
    pub fn list_pending(&self) -> impl Stream<Item = Vec<Facility>> + Send + Unpin + 'static {
        self.list().map(only(FacilityStatus::Pending))
    }

    pub fn get_by_id(&self, id: FacilityId) -> Option<Facility> {
        self.facilities
            .with(|facilities| facilities.iter().find(|f| f.id == id).cloned())
    }

    pub fn add_rating(&self, id: FacilityId, rating: Rating) {
        let stars = rating.stars.get();
        let added = self.facilities.modify(|facilities| {
            match facilities.iter_mut().find(|f| f.id == id) {
                Some(facility) => {
                    facility.ratings.push(rating);
                    true
                }
                None => false,
            }
        });
        if added {
            log!("[FACILITIES] {}-star rating added to facility {}", stars, id);
        } else {
            warn!("[FACILITIES] Rating ignored, facility {} not found", id);
        }
    }

    pub fn average_rating(&self, facility: &Facility) -> f64 {
        facility.average_rating()
    }

    /// Appends a pending facility and returns the id it was given, or `None`
    /// once the id space is used up.
    pub fn add(&self, data: NewFacility) -> Option<FacilityId> {
        let mut assigned = None;
        self.facilities.modify(|facilities| {
            assigned = match facilities.iter().map(|f| f.id).max() {
                Some(max) => max.checked_add(1),
                None => Some(1),
            };
            match assigned {
                Some(id) => {
                    facilities.push(data.into_facility(id));
                    true
                }
                None => false,
            }
        });
        match assigned {
            Some(id) => log!("[FACILITIES] Facility {} submitted for approval", id),
            None => error!("[FACILITIES] Submission refused, no facility ids left"),
        }
        assigned
    }

    pub fn update(&self, patch: FacilityPatch) {
        let id = patch.id;
        let updated = self.facilities.modify(|facilities| {
            match facilities.iter_mut().find(|f| f.id == id) {
                Some(facility) => {
                    patch.apply_to(facility);
                    true
                }
                None => false,
            }
        });
        if !updated {
            warn!("[FACILITIES] Update ignored, facility {} not found", id);
        }
    }

    pub fn delete(&self, id: FacilityId) {
        let removed = self.facilities.modify(|facilities| {
            let before = facilities.len();
            facilities.retain(|f| f.id != id);
            facilities.len() != before
        });
        if removed {
            log!("[FACILITIES] Facility {} deleted", id);
        }
    }

    /// Records an admin verdict. Any facility may be re-reviewed at any time.
    pub fn set_status(&self, id: FacilityId, verdict: Verdict) {
        let status = FacilityStatus::from(verdict);
        let changed = self.facilities.modify(|facilities| {
            match facilities.iter_mut().find(|f| f.id == id) {
                Some(facility) => {
                    facility.status = status;
                    true
                }
                None => false,
            }
        });
        if changed {
            log!("[FACILITIES] Facility {} marked {}", id, status);
        } else {
            warn!("[FACILITIES] Status change ignored, facility {} not found", id);
        }
    }

    pub fn count_total(&self) -> impl Stream<Item = usize> + Send + Unpin + 'static {
        self.list().map(|facilities| facilities.len())
    }

    pub fn count_active(&self) -> impl Stream<Item = usize> + Send + Unpin + 'static {
        self.list_visible().map(|facilities| facilities.len())
    }
}
