use actix_web::{error, web, HttpResponse};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    api::{
        handlers::{
            create_garden, get_schedule, index, list_plants, list_zones, post_optimize,
            post_score,
        },
        openapi::ApiDoc,
    },
    models::request::ErrorResponse,
};

/// Registers the UI, the JSON API under `/api`, the OpenAPI document and Swagger UI.
///
/// The plant catalog must be provided as `web::Data<PlantCatalog>` app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .service(index)
        .service(
            web::scope("/api")
                .service(list_plants)
                .service(list_zones)
                .service(get_schedule)
                .service(create_garden)
                .service(post_optimize)
                .service(post_score),
        )
        .service(
            SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
}

/// Malformed JSON bodies become `400 {"error": ...}`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = format!("JSON deserialization error: {err}");
        error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(ErrorResponse::new(message)),
        )
        .into()
    })
}

/// Malformed query strings become `400 {"error": ...}`.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let message = format!("Query string error: {err}");
        error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(ErrorResponse::new(message)),
        )
        .into()
    })
}
