use actix_web::{get, http::header::ContentType, HttpResponse, Responder};

const INDEX_HTML: &str = include_str!("../../../static/index.html");

/// GET /
/// Serves the bundled single-page planner.
#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}
