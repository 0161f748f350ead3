use interview_tracker_server::{
    app,
    auth::{AppState, GoogleEndpoints, GoogleOAuthClient, SessionBinder},
    calendar::GoogleCalendarClient,
    config::ServerConfig,
};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = ServerConfig::from_env().expect("failed to load configuration");
    tracing::info!("Loaded configuration");

    // Missing Google credentials are fatal before anything binds
    let oauth_config = match config.oauth_config() {
        Ok(oauth_config) => oauth_config,
        Err(e) => {
            tracing::error!(error = %e, "invalid Google OAuth configuration");
            std::process::exit(1);
        }
    };

    if config.session.uses_default_secret() {
        tracing::warn!("SESSION__SECRET is not set; using the development default");
    }

    let http_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .expect("failed to create HTTP client");

    let oauth_client = match GoogleOAuthClient::new(
        &oauth_config,
        &GoogleEndpoints::default(),
        http_client.clone(),
    ) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "invalid Google OAuth configuration");
            std::process::exit(1);
        }
    };

    // Create database connection pool
    let db_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    // Run migrations
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("failed to run migrations");

    let app_state = Arc::new(AppState::new(
        db_pool,
        oauth_client,
        SessionBinder::new(&config.session),
        GoogleCalendarClient::new(http_client),
    ));

    let app = app::router(app_state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .expect("failed to bind to address");

    tracing::info!("listening on http://{}", config.listen_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
