use actix_web::{App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use salon_analytics::config::{AppConfig, Config};
use salon_analytics::middleware::{cors, RequestId};
use salon_analytics::{modules, Repositories};

fn init_tracing(app: &AppConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("salon_analytics={},actix_web=info", app.log_level).into()
    });
    let registry = tracing_subscriber::registry().with(filter);

    if app.json_logs() {
        registry
            .with(tracing_subscriber::fmt::layer().json().flatten_event(true))
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    init_tracing(&config.app);
    config
        .validate()
        .context("Configuration validation failed")?;

    tracing::info!("Starting salon analytics service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let repos = Repositories::from_config(&config.storage)
        .await
        .context("Failed to initialize storage")?;

    if let Err(e) = repos.ping().await {
        tracing::warn!("Storage not reachable at startup: {}", e);
    }

    let bind_address = config.server.bind_address();
    let cors_config = config.cors.clone();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(cors(&cors_config))
            .wrap(TracingLogger::default())
            .wrap(RequestId)
            .configure(|cfg| modules::configure(cfg, &repos))
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("Server terminated with an error")
}
