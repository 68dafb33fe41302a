//! Rehla Admin Server
//!
//! REST API backend for the Rehla UAE travel-booking admin dashboard.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rehla_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("rehla_server={},tower_http=debug", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Rehla Admin Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository, config.auth.clone());

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Authentication
        .route("/auth/login", post(api::auth::login))
        .route("/auth/me", get(api::auth::me))
        // Attractions
        .route("/attractions", get(api::attractions::list_attractions))
        .route("/attractions", post(api::attractions::create_attraction))
        .route("/attractions/:id", get(api::attractions::get_attraction))
        .route("/attractions/:id", put(api::attractions::update_attraction))
        .route("/attractions/:id", delete(api::attractions::delete_attraction))
        // Hotels
        .route("/hotels", get(api::hotels::list_hotels))
        .route("/hotels", post(api::hotels::create_hotel))
        .route("/hotels/:id", get(api::hotels::get_hotel))
        .route("/hotels/:id", put(api::hotels::update_hotel))
        .route("/hotels/:id", delete(api::hotels::delete_hotel))
        // Transport
        .route("/transport", get(api::transport::list_transport))
        .route("/transport", post(api::transport::create_transport))
        .route("/transport/:id", get(api::transport::get_transport))
        .route("/transport/:id", put(api::transport::update_transport))
        .route("/transport/:id", delete(api::transport::delete_transport))
        // Travel submissions
        .route("/submissions", get(api::submissions::list_submissions))
        .route("/submissions", post(api::submissions::create_submission))
        .route("/submissions/:id", get(api::submissions::get_submission))
        .route("/submissions/:id", put(api::submissions::update_submission))
        .route("/submissions/:id/status", put(api::submissions::update_submission_status))
        // Bookings
        .route("/bookings", get(api::bookings::list_bookings))
        .route("/bookings", post(api::bookings::create_booking))
        .route("/bookings/:id", get(api::bookings::get_booking))
        .route("/bookings/:id", put(api::bookings::update_booking))
        .route("/bookings/:id/status", put(api::bookings::update_booking_status))
        .route("/bookings/:id/download", post(api::bookings::record_download))
        // Customers
        .route("/customers", get(api::customers::list_customers))
        // Statistics
        .route("/stats", get(api::stats::get_stats))
        // Settings
        .route("/settings", get(api::settings::get_settings))
        .route("/settings", put(api::settings::update_settings))
        // Staff accounts
        .route("/staff", get(api::staff::list_staff))
        .route("/staff", post(api::staff::create_staff))
        .route("/staff/:id", get(api::staff::get_staff))
        .route("/staff/:id", put(api::staff::update_staff))
        .route("/staff/:id", delete(api::staff::delete_staff))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
