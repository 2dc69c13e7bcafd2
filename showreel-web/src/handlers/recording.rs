//! Recording artifact streaming with HTTP range support.
//!
//! Serves session-recording video with partial-content semantics: an
//! optional `Range` header selects a start offset and the server returns
//! at most one chunk-sized window per request. Without a header the whole
//! file is streamed. Bytes go out in offset order through a bounded
//! reader, so memory use stays flat regardless of recording size.

use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use showreel_core::artifact::ArtifactKind;
use showreel_core::range::{RangePlan, negotiate};
use tracing::debug;

use super::ArtifactQuery;
use crate::error::ArtifactRequestError;
use crate::server::AppState;

/// Stream a recording artifact, honoring `Range` requests.
///
/// A mid-stream failure (file deleted, disk error, client disconnect)
/// abandons the transfer; the headers are already flushed, so the client
/// only observes a truncated body.
///
/// # Errors
///
/// - `ArtifactRequestError::MissingPath` - If `path` is absent or empty
/// - `ArtifactRequestError::NotFound` - If the file cannot be stat'd
/// - `ArtifactRequestError::RangeNotSatisfiable` - If the requested start
///   lies past the end of the file
pub async fn stream_recording(
    State(state): State<AppState>,
    Query(query): Query<ArtifactQuery>,
    headers: HeaderMap,
) -> Result<Response, ArtifactRequestError> {
    let path = query.target()?;
    let stat = state.source.stat(path).await?;

    let range_header = extract_range_header(&headers);
    let plan = negotiate(
        range_header.as_deref(),
        stat.size,
        state.config.streaming.chunk_window,
    )?;

    let content_type = state.config.streaming.recording_content_type;
    match plan {
        RangePlan::Full { total_size } => {
            debug!(
                "serving {} artifact in full: {} ({} bytes)",
                ArtifactKind::Recording,
                path.display(),
                total_size
            );
            let stream = state.source.open_window(path, 0, total_size).await?;
            Ok((
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, content_type.to_string()),
                    (header::CONTENT_LENGTH, total_size.to_string()),
                ],
                Body::from_stream(stream),
            )
                .into_response())
        }
        RangePlan::Partial(window) => {
            debug!(
                "serving {} artifact window {}: {}",
                ArtifactKind::Recording,
                window.content_range(),
                path.display()
            );
            let stream = state
                .source
                .open_window(path, window.start, window.content_length())
                .await?;
            Ok((
                StatusCode::PARTIAL_CONTENT,
                [
                    (header::CONTENT_RANGE, window.content_range()),
                    (header::ACCEPT_RANGES, "bytes".to_string()),
                    (header::CONTENT_TYPE, content_type.to_string()),
                    (header::CONTENT_LENGTH, window.content_length().to_string()),
                ],
                Body::from_stream(stream),
            )
                .into_response())
        }
    }
}

/// Extract the raw `Range` header value, if any.
fn extract_range_header(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::RANGE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}
