use actix_web::{get, web, HttpResponse, Responder};

use crate::data::catalog::PlantCatalog;

/// GET /api/plants
/// Returns the whole plant catalog in load order.
#[utoipa::path(
    get,
    path = "/api/plants",
    tag = "plants",
    responses((status = 200, description = "Plant catalog", body = [crate::models::plant::Plant]))
)]
#[get("/plants")]
pub async fn list_plants(catalog: web::Data<PlantCatalog>) -> impl Responder {
    HttpResponse::Ok().json(catalog.plants())
}
