use actix_web::{middleware, web, App, HttpServer};
use env_logger::Env;
use gardengod::{config::Config, data::catalog::PlantCatalog};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|e| {
        log::error!("Invalid configuration: {e}");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    let catalog = match &config.plants_path {
        Some(path) => PlantCatalog::load(path).await,
        None => PlantCatalog::builtin(),
    }
    .map_err(|e| {
        log::error!("Failed to load plant catalog: {e}");
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    })?;
    log::info!("Plant catalog ready with {} plants", catalog.len());
    let catalog = web::Data::new(catalog);

    let bind_addr = config.bind_addr.clone();
    log::info!("🌱 Garden God API started at http://{bind_addr}");
    log::info!("   GET  /api/plants");
    log::info!("   GET  /api/zones");
    log::info!("   GET  /api/schedule/{{zone}}?year=YYYY");
    log::info!("   POST /api/garden?width=W&height=H");
    log::info!("   POST /api/optimize");
    log::info!("   POST /api/score");
    log::info!("   📖 Swagger UI → http://{bind_addr}/swagger-ui/");
    log::info!("   📌 OpenAPI spec → http://{bind_addr}/api-docs/openapi.json");

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(catalog.clone())
            .configure(gardengod::api::routes::configure)
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }
    server.bind(bind_addr)?.run().await
}
