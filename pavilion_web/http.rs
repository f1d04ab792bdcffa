use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use pavilion_app::{BlobStore, ProfileRepository, roster::RosterClient};

use crate::handlers::{player_stats, submit_profile, upload_image};

/// 10 MiB cap for original photos; they are downscaled again server-side.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<RosterClient>,
    pub store: Arc<dyn BlobStore>,
    pub profiles: Arc<dyn ProfileRepository>,
}

pub struct WebRouter {}

impl WebRouter {
    pub fn router(state: AppState) -> Router {
        // The form is an internal tool served from anywhere on the club
        // LAN, so CORS stays permissive.
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([CONTENT_TYPE])
            .max_age(Duration::from_secs(60 * 60));

        Router::new()
            .route("/api/v1/player-stats", get(player_stats))
            .route(
                "/api/v1/upload",
                post(upload_image).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
            )
            .route("/api/v1/submit", post(submit_profile))
            .fallback_service(ServeDir::new("pavilion_web/assets"))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    pub async fn serve(state: AppState, port: u16) -> Result<(), std::io::Error> {
        let router = Self::router(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = tokio::net::TcpListener::bind(addr).await?;

        tracing::info!("HTTP server started, listening on http://{addr}");
        axum::serve(listener, router).await
    }
}
