//! taskdeck server – entry point.
//!
//! Startup order:
//! 1. Parse configuration from environment variables.
//! 2. Initialise structured tracing.
//! 3. Select the record store (`PostgreSQL` when a database URL is
//!    configured, in-memory otherwise).
//! 4. Build the router and start the HTTP server with graceful shutdown.

use std::sync::Arc;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use tracing::{info, warn};

use taskdeck::config::Config;
use taskdeck::http;
use taskdeck::task::adapters::memory::InMemoryTaskRepository;
use taskdeck::task::adapters::postgres::PostgresTaskRepository;
use taskdeck::task::services::TaskService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::from_env();

    init_tracing(&cfg);
    info!(version = env!("CARGO_PKG_VERSION"), "taskdeck starting");

    let app = match cfg.database_url.as_deref() {
        Some(url) => {
            let manager = ConnectionManager::<PgConnection>::new(url);
            let pool = Pool::builder().build(manager)?;
            info!("using postgres record store");
            http::router(TaskService::new(
                Arc::new(PostgresTaskRepository::new(pool)),
                Arc::new(DefaultClock),
            ))
        }
        None => {
            info!("no database configured, using in-memory record store");
            http::router(TaskService::new(
                Arc::new(InMemoryTaskRepository::new()),
                Arc::new(DefaultClock),
            ))
        }
    };

    let listener = tokio::net::TcpListener::bind(&cfg.bind_address).await?;
    info!(addr = %cfg.bind_address, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("taskdeck stopped");
    Ok(())
}

/// Initialise the tracing subscriber from the configured filter, warning
/// when the configured value is not a valid filter expression.
fn init_tracing(cfg: &Config) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| cfg.log_level.parse::<tracing_subscriber::EnvFilter>())
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true);

    if cfg.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

/// Resolves when SIGINT (Ctrl-C) or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to install CTRL+C signal handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => warn!(error = %e, "failed to install SIGTERM signal handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
