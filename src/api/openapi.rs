use utoipa::OpenApi;

use crate::models::{
    garden::{Garden, GridCell, Placement},
    plant::{CareInfo, FrostTolerance, Plant, PlantingInfo, PlantingType},
    request::{
        ErrorResponse, OptimizeRequest, OptimizeResponse, PlantingAction, PlantingDate,
        PlantingScheduleResponse, ScoreResponse,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Garden God API",
        description = "Companion-planting garden layout: places plants on a grid so that companions sit together and antagonists stay apart, scores layouts, and builds frost-zone planting calendars.",
        version = "0.1.0",
        license(name = "MIT"),
    ),
    paths(
        crate::api::handlers::plants::list_plants,
        crate::api::handlers::schedule::list_zones,
        crate::api::handlers::schedule::get_schedule,
        crate::api::handlers::garden::create_garden,
        crate::api::handlers::garden::post_optimize,
        crate::api::handlers::garden::post_score,
    ),
    components(
        schemas(
            // Enums
            PlantingType, FrostTolerance, PlantingAction,
            // Catalog
            Plant, PlantingInfo, CareInfo,
            // Garden
            Garden, GridCell, Placement,
            // Requests and responses
            OptimizeRequest, OptimizeResponse, ScoreResponse,
            PlantingDate, PlantingScheduleResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "plants",   description = "Plant catalog"),
        (name = "garden",   description = "Garden creation, greedy layout and scoring"),
        (name = "schedule", description = "Frost zones and planting calendar"),
    )
)]
pub struct ApiDoc;
