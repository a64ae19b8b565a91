use actix_web::{middleware, web, App, HttpServer};
use penguin_predict::config::Settings;
use penguin_predict::routes::{self, handle_form_payload_error, AppState};
use penguin_predict::services::{ModelStore, PredictionHistory};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration before logging so the configured level applies
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    // Initialize logging (RUST_LOG wins over the configured level)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match settings.logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "json" => subscriber.json().init(),
        _ => subscriber.compact().init(),
    }

    info!("Starting penguin species prediction service...");

    let model = ModelStore::load(&settings.model.path, &settings.model.columns_path)
        .await
        .map_err(|e| {
            error!("Failed to load model: {}", e);
            std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
        })?;

    info!(
        "Model loaded from {} ({} classes, {} columns)",
        settings.model.path.display(),
        model.classifier().n_classes(),
        model.columns().len()
    );

    let history = PredictionHistory::new(settings.history.max_entries);
    match settings.history.max_entries {
        Some(max) => info!("Prediction history capped at {} entries", max),
        None => info!("Prediction history is unbounded"),
    }

    let app_state = AppState::new(model, history);

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::FormConfig::default().error_handler(handle_form_payload_error))
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
