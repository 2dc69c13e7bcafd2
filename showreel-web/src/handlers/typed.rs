//! Whole-buffer artifact endpoints: structured JSON, plain text, images.
//!
//! These artifact kinds (screenshots, JSON summaries, text logs) are small
//! relative to recordings, so each is read fully into memory and returned
//! in one piece. No partial-content support.

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use showreel_core::artifact::ArtifactKind;
use tracing::debug;

use super::ArtifactQuery;
use crate::error::ArtifactRequestError;
use crate::server::AppState;

/// Serve a structured JSON artifact.
///
/// The file must parse as JSON; the original bytes are passed through on
/// success so the client sees the document exactly as written.
///
/// # Errors
///
/// - `ArtifactRequestError::MissingPath` - If `path` is absent or empty
/// - `ArtifactRequestError::NotFound` - If the file cannot be read
/// - `ArtifactRequestError::MalformedJson` - If the contents are not
///   valid JSON; the response body carries the parser diagnostic
pub async fn json_artifact(
    State(state): State<AppState>,
    Query(query): Query<ArtifactQuery>,
) -> Result<Response, ArtifactRequestError> {
    let path = query.target()?;
    let contents = state.source.read_all(path).await?;

    if let Err(error) = serde_json::from_slice::<serde_json::Value>(&contents) {
        return Err(ArtifactRequestError::MalformedJson {
            diagnostic: error.to_string(),
        });
    }

    debug!("serving {} artifact: {}", ArtifactKind::Json, path.display());
    Ok(([(header::CONTENT_TYPE, "application/json")], contents).into_response())
}

/// Serve a plain-text artifact.
///
/// # Errors
///
/// - `ArtifactRequestError::MissingPath` - If `path` is absent or empty
/// - `ArtifactRequestError::NotFound` - If the file cannot be read
pub async fn text_artifact(
    State(state): State<AppState>,
    Query(query): Query<ArtifactQuery>,
) -> Result<Response, ArtifactRequestError> {
    let path = query.target()?;
    let contents = state.source.read_all(path).await?;

    debug!("serving {} artifact: {}", ArtifactKind::Text, path.display());
    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        contents,
    )
        .into_response())
}

/// Serve a screenshot or other static image artifact.
///
/// Content type is guessed from the file extension; anything
/// unrecognized goes out as an opaque byte stream.
///
/// # Errors
///
/// - `ArtifactRequestError::MissingPath` - If `path` is absent or empty
/// - `ArtifactRequestError::NotFound` - If the file cannot be read
pub async fn image_artifact(
    State(state): State<AppState>,
    Query(query): Query<ArtifactQuery>,
) -> Result<Response, ArtifactRequestError> {
    let path = query.target()?;
    let contents = state.source.read_all(path).await?;
    let content_type = mime_guess::from_path(path).first_or_octet_stream();

    debug!(
        "serving {} artifact: {} ({})",
        ArtifactKind::Image,
        path.display(),
        content_type
    );
    Ok((
        [(header::CONTENT_TYPE, content_type.to_string())],
        contents,
    )
        .into_response())
}
