//! Artifact HTTP server: routing, shared state, listener setup.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use showreel_core::{ArtifactSource, FsArtifactSource, ShowreelConfig};
use tower_http::cors::CorsLayer;

use crate::handlers::{image_artifact, json_artifact, stream_recording, text_artifact};

/// Shared state for artifact request handlers.
///
/// Holds only immutable configuration and the filesystem seam; requests
/// never share mutable state, so concurrent streams cannot interfere.
#[derive(Clone)]
pub struct AppState {
    /// Read-only artifact access
    pub source: Arc<dyn ArtifactSource>,
    /// Server and streaming settings
    pub config: ShowreelConfig,
}

impl AppState {
    /// Production state over the local filesystem.
    pub fn new(config: ShowreelConfig) -> Self {
        let source: Arc<dyn ArtifactSource> =
            Arc::new(FsArtifactSource::new(config.streaming.read_buffer_size));
        Self { source, config }
    }

    /// State with a substituted artifact source, for tests.
    pub fn with_source(config: ShowreelConfig, source: Arc<dyn ArtifactSource>) -> Self {
        Self { source, config }
    }
}

/// Build the artifact router.
///
/// Cross-origin requests are allowed from any origin: this is a
/// local-network diagnostic server sitting behind the dashboard, not a
/// public-facing one.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/artifact/recording", get(stream_recording))
        .route("/artifact/image", get(image_artifact))
        .route("/artifact/json", get(json_artifact))
        .route("/artifact/text", get(text_artifact))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Run the artifact server until the listener fails.
///
/// # Errors
///
/// Returns an error if the listen address cannot be bound.
pub async fn run_server(config: ShowreelConfig) -> Result<(), Box<dyn std::error::Error>> {
    let address = format!("{}:{}", config.server.host, config.server.port);
    let app = router(AppState::new(config));

    println!("Showreel artifact server running on http://{address}");
    let listener = tokio::net::TcpListener::bind(&address).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
