#[cfg(feature = "ssr")]
use actix_web::{web, HttpResponse};
#[cfg(feature = "ssr")]
use leptos::logging::log;

#[cfg(feature = "ssr")]
use crate::models::facility::FacilityId;
#[cfg(feature = "ssr")]
use crate::state::AppState;

/// Registers the read-only JSON endpoints under `/api`.
#[cfg(feature = "ssr")]
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/facilities", web::get().to(list_facilities)) // GET /api/facilities
            .route("/facilities/visible", web::get().to(list_visible_facilities)) // GET /api/facilities/visible
            .route("/facilities/{id}", web::get().to(get_facility)) // GET /api/facilities/{id}
            .route("/users", web::get().to(list_users)) // GET /api/users
            .route("/stats", web::get().to(dashboard_stats)), // GET /api/stats
    );
}

#[cfg(feature = "ssr")]
pub async fn list_facilities(state: web::Data<AppState>) -> HttpResponse {
    let facilities = state.facilities.snapshot();
    log!("[API] Returning {} facilities", facilities.len());
    HttpResponse::Ok().json(facilities)
}

#[cfg(feature = "ssr")]
pub async fn list_visible_facilities(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.facilities.visible())
}

#[cfg(feature = "ssr")]
pub async fn get_facility(state: web::Data<AppState>, id: web::Path<FacilityId>) -> HttpResponse {
    let id = id.into_inner();
    match state.facilities.get_by_id(id) {
        Some(facility) => HttpResponse::Ok().json(facility),
        None => {
            log!("[API] Facility {} not found", id);
            HttpResponse::NotFound().body(format!("Facility {} not found", id))
        }
    }
}

#[cfg(feature = "ssr")]
pub async fn list_users(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.users.snapshot())
}

#[cfg(feature = "ssr")]
pub async fn dashboard_stats(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.stats())
}
