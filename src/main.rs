use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{http::header, middleware::NormalizePath, web, App, HttpServer};
use anyhow::Context;
use jobfinder_backend::{
    clients::job_service::HttpJobService,
    db::postgres::{create_pool, run_migrations},
    graceful_shutdown::shutdown_signal,
    middlewares::auth::AuthMiddleware,
    repositories::local_store::LocalStore,
    routes::configure_routes,
    settings::{AppConfig, LogFormat},
    store::{memory::InMemoryStore, redis::RedisStore},
    AppState, Backends,
};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt().json().with_env_filter(filter).init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

fn build_cors(origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .max_age(3600);

    if origins.iter().any(|o| o == "*") {
        return cors.allow_any_origin();
    }

    origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}

fn build_store(config: &AppConfig) -> Arc<dyn LocalStore> {
    match config.redis_url.as_deref() {
        Some(url) => match RedisStore::new(url) {
            Ok(store) => {
                tracing::info!("Using Redis for the local store");
                Arc::new(store)
            }
            Err(e) => {
                tracing::error!("Redis unavailable ({}), falling back to in-memory store", e);
                Arc::new(InMemoryStore::new())
            }
        },
        None => {
            tracing::info!("No Redis configured, using in-memory store");
            Arc::new(InMemoryStore::new())
        }
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::new().context("Failed to load configuration")?;
    init_tracing(&config);
    tracing::info!("Loaded configuration: {:?}", config);

    let pool = create_pool(&config.database_url)
        .await
        .context("Failed to create database connection pool")?;

    if config.run_migrations {
        run_migrations(&pool).await.context("Failed to run database migrations")?;
    }

    let job_service = HttpJobService::new(config.job_service_base(), config.job_service_timeout_secs)
        .map_err(|e| anyhow::anyhow!("Failed to build job service client: {}", e))?;

    let backends = Backends::postgres(pool, build_store(&config), Arc::new(job_service));
    let app_state = web::Data::new(AppState::new(&config, backends));

    let server_addr = format!("{}:{}", config.host, config.port);
    let origins = config.cors_origins();
    let max_resume_bytes = config.max_resume_bytes;

    tracing::info!(
        "🚀 Starting Job Finder API v{} on {}",
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(AuthMiddleware)
            .wrap(NormalizePath::trim())
            .wrap(TracingLogger::default())
            .wrap(build_cors(&origins))
            .configure(configure_routes(max_resume_bytes))
    })
    .workers(config.worker_count)
    .bind(&server_addr)
    .with_context(|| format!("Failed to bind {}", server_addr))?
    .run();

    let handle = server.handle();

    tokio::select! {
        res = server => res.context("Server error")?,
        _ = shutdown_signal() => {
            handle.stop(true).await;
        }
    }

    tracing::info!("Job Finder API stopped");
    Ok(())
}
