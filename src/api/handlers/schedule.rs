use actix_web::{get, web, HttpResponse, Responder};
use chrono::{Datelike, Local};

use crate::{
    data::{catalog::PlantCatalog, zones},
    logic::schedule::planting_schedule,
    models::request::{ErrorResponse, ScheduleQuery},
};

/// GET /api/zones
/// Lists the supported USDA hardiness zones, coldest first.
#[utoipa::path(
    get,
    path = "/api/zones",
    tag = "schedule",
    responses((status = 200, description = "Zone names", body = [String]))
)]
#[get("/zones")]
pub async fn list_zones() -> impl Responder {
    HttpResponse::Ok().json(zones::zone_names())
}

/// GET /api/schedule/{zone}?year=YYYY
/// Returns the planting calendar of the catalog for a zone.
#[utoipa::path(
    get,
    path = "/api/schedule/{zone}",
    tag = "schedule",
    params(
        ("zone" = String, Path, description = "USDA hardiness zone, e.g. 6a (case-insensitive)"),
        ScheduleQuery,
    ),
    responses(
        (status = 200, description = "Planting calendar sorted by date", body = crate::models::request::PlantingScheduleResponse),
        (status = 400, description = "Unknown zone or unusable year", body = ErrorResponse),
    )
)]
#[get("/schedule/{zone}")]
pub async fn get_schedule(
    catalog: web::Data<PlantCatalog>,
    path: web::Path<String>,
    query: web::Query<ScheduleQuery>,
) -> impl Responder {
    let zone = path.into_inner();
    let year = query.year.unwrap_or_else(|| Local::now().year());

    match planting_schedule(&catalog, &zone, year) {
        Ok(schedule) => HttpResponse::Ok().json(schedule),
        Err(e) => HttpResponse::BadRequest().json(ErrorResponse::new(e)),
    }
}
