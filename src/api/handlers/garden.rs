use actix_web::{post, web, HttpResponse, Responder};

use crate::{
    data::catalog::PlantCatalog,
    logic::optimizer::{garden_score, optimize_garden},
    models::{
        garden::Garden,
        request::{
            CreateGardenQuery, ErrorResponse, OptimizeRequest, OptimizeResponse, ScoreResponse,
        },
    },
};

/// POST /api/garden?width=W&height=H
/// Returns an empty garden of the requested size.
#[utoipa::path(
    post,
    path = "/api/garden",
    tag = "garden",
    params(CreateGardenQuery),
    responses(
        (status = 200, description = "Empty garden", body = Garden),
        (status = 400, description = "Zero or oversized dimensions", body = ErrorResponse),
    )
)]
#[post("/garden")]
pub async fn create_garden(query: web::Query<CreateGardenQuery>) -> impl Responder {
    match Garden::new(query.width, query.height) {
        Ok(garden) => HttpResponse::Ok().json(garden),
        Err(e) => HttpResponse::BadRequest().json(ErrorResponse::new(e)),
    }
}

/// POST /api/optimize
/// Places the requested plants greedily and scores the resulting layout.
#[utoipa::path(
    post,
    path = "/api/optimize",
    tag = "garden",
    request_body = OptimizeRequest,
    responses(
        (status = 200, description = "Planted garden, its score and each placement", body = OptimizeResponse),
        (status = 400, description = "Invalid garden, unknown plant or full garden", body = ErrorResponse),
    )
)]
#[post("/optimize")]
pub async fn post_optimize(
    catalog: web::Data<PlantCatalog>,
    body: web::Json<OptimizeRequest>,
) -> impl Responder {
    let OptimizeRequest {
        garden,
        plants_to_place,
    } = body.into_inner();

    let mut garden = match garden.normalized() {
        Ok(garden) => garden,
        Err(e) => return HttpResponse::BadRequest().json(ErrorResponse::new(e)),
    };

    match optimize_garden(&mut garden, &plants_to_place, &catalog) {
        Ok(placements) => {
            let score = garden_score(&garden, &catalog);
            HttpResponse::Ok().json(OptimizeResponse {
                garden,
                score,
                placements,
            })
        }
        Err(e) => {
            log::warn!("Optimization rejected: {e}");
            HttpResponse::BadRequest().json(ErrorResponse::new(e))
        }
    }
}

/// POST /api/score
/// Scores an already planted garden.
#[utoipa::path(
    post,
    path = "/api/score",
    tag = "garden",
    request_body = Garden,
    responses(
        (status = 200, description = "Companion score of the layout", body = ScoreResponse),
        (status = 400, description = "Invalid garden", body = ErrorResponse),
    )
)]
#[post("/score")]
pub async fn post_score(
    catalog: web::Data<PlantCatalog>,
    body: web::Json<Garden>,
) -> impl Responder {
    match body.into_inner().normalized() {
        Ok(garden) => HttpResponse::Ok().json(ScoreResponse {
            score: garden_score(&garden, &catalog),
        }),
        Err(e) => HttpResponse::BadRequest().json(ErrorResponse::new(e)),
    }
}
