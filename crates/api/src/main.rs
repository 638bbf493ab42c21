use axum::{extract::FromRef, Router};

use hangout_config::config;
use hangout_database::{Database, DatabaseInfo};
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as ScalarServable};

mod routes;
mod util;

#[derive(Clone)]
pub struct AppState {
    pub database: Database,
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.database.clone()
    }
}

/// Build the application router
///
/// Paths not matched by the API fall through to `static_dir` when given.
pub fn web(state: AppState, static_dir: Option<&str>) -> Router {
    let mut app = Router::new()
        .merge(Scalar::with_url("/scalar", routes::ApiDoc::openapi()))
        .nest("/api", routes::router());

    if let Some(static_dir) = static_dir {
        app = app.fallback_service(ServeDir::new(static_dir));
    }

    app.layer(TraceLayer::new_for_http()).with_state(state)
}

/// Resolves once the process is asked to stop
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {error}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(error) => {
                tracing::error!("Failed to listen for SIGTERM: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutting down.");
}

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Configure logging and environment
    hangout_config::configure!(api);

    let config = config().await;
    let database = DatabaseInfo::Auto
        .connect()
        .await
        .expect("Unable to connect to database");

    database
        .migrate_database()
        .await
        .expect("Unable to migrate database");

    // Configure Axum and router
    let app = web(AppState { database }, config.api.static_dir());

    // Configure TCP listener and bind
    let address = format!("{}:{}", config.api.host, config.api.port);
    let listener = TcpListener::bind(&address).await?;
    tracing::info!("Listening on {address}");
    tracing::info!(
        "Play around with the API: http://localhost:{}/scalar",
        config.api.port
    );

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
}
