//! # Appointments API
//!
//! The HTTP tool server in front of the slot generator. An orchestration
//! layer calls these endpoints as remote tools; each request is answered from
//! its own input and today's date, with no state kept between calls.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate requests into calls on the core generator
//! - **Middleware**: Error to HTTP mapping
//! - **Config**: Environment-driven settings

/// Configuration module for API settings
pub mod config;
/// Request handlers for the appointment tools
pub mod handlers;
/// Error handling shared by the handlers
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use appointments_core::{
    clock::{Clock, SystemClock},
    scheduling::{SchedulingPolicy, SlotGenerator},
};
use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use eyre::Result;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Slot generator configured with the facility policy and doctor pool
    pub generator: SlotGenerator,
    /// Source of today's date for queries without a start date
    pub clock: Arc<dyn Clock>,
}

impl ApiState {
    pub fn new(generator: SlotGenerator, clock: Arc<dyn Clock>) -> Self {
        Self { generator, clock }
    }

    /// State backed by the wall clock and the configured doctor pool.
    pub fn from_config(config: &config::ApiConfig) -> Self {
        Self::new(
            SlotGenerator::new(SchedulingPolicy::default(), config.doctor_pool.clone()),
            Arc::new(SystemClock),
        )
    }
}

/// Builds the application router with all routes and layers attached
pub fn router(state: Arc<ApiState>, config: &config::ApiConfig) -> Router {
    let app = Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Appointment tool endpoints
        .merge(routes::appointments::routes())
        .with_state(state);

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)),
        None => app,
    };

    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    )
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(origins)
}

/// Starts the API server with the provided configuration
///
/// Initializes logging, builds the router and serves until the listener
/// fails.
pub async fn start_server(config: config::ApiConfig) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::from_config(&config));
    let app = router(state, &config);

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(
        doctors = ?config.doctor_pool.ids(),
        "Appointment server listening on http://{}", addr
    );
    axum::serve(listener, app).await?;

    Ok(())
}
