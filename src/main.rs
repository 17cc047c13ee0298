use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use skill_match::config::Settings;
use skill_match::core::ResumeExtractor;
use skill_match::routes::{self, AppState};
use skill_match::services::ExtractionCache;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };

    init_logging(&settings.logging.level, &settings.logging.format);

    info!("Starting Skill Match extraction service...");

    // Build the vocabulary once; it is read-only from here on
    let vocabulary = match settings.build_vocabulary() {
        Ok(vocab) => Arc::new(vocab),
        Err(e) => {
            error!("Invalid skill vocabulary: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };

    info!(
        "Vocabulary loaded ({} skills, {})",
        vocabulary.len(),
        if settings.vocabulary.is_some() { "configured" } else { "builtin" }
    );

    let extractor = ResumeExtractor::new(vocabulary);

    let cache = ExtractionCache::new(settings.cache.capacity, settings.cache.ttl_secs);
    if cache.is_enabled() {
        info!(
            "Extraction cache initialized ({} entries, TTL: {}s)",
            settings.cache.capacity, settings.cache.ttl_secs
        );
    } else {
        info!("Extraction cache disabled");
    }

    let max_text_bytes = settings.extraction.max_text_bytes;

    // Build application state
    let app_state = AppState {
        extractor,
        cache,
        max_text_bytes,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config(max_text_bytes))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}

/// Initialize structured logging
///
/// `RUST_LOG` wins when set; otherwise the configured level applies.
fn init_logging(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match format {
        "pretty" => subscriber.pretty().init(),
        "json" => subscriber.json().init(),
        _ => subscriber.init(),
    }
}
