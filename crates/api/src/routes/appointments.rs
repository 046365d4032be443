use axum::{routing::post, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/appointments/available",
            post(handlers::appointments::query_available_appointments),
        )
        .route(
            "/api/appointments/book",
            post(handlers::appointments::book_appointment),
        )
}
