//! HTTP-facing error mapping for artifact requests.
//!
//! Every error is terminal for its request and none is process-fatal;
//! the listener keeps serving subsequent requests.

use axum::body::Body;
use axum::http::{Response, StatusCode};
use axum::response::IntoResponse;
use showreel_core::ArtifactError;

/// Request-terminal errors for the artifact endpoints.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactRequestError {
    /// The `path` query parameter was absent or empty. Rejected before
    /// any filesystem access.
    #[error("missing 'path' query parameter")]
    MissingPath,

    /// Stat or read failed; sub-causes are never exposed to clients.
    #[error("artifact not found: {path}")]
    NotFound { path: String },

    /// The requested start offset lies at or beyond the end of the file.
    #[error("range start {start} is beyond the {size} byte artifact")]
    RangeNotSatisfiable { start: u64, size: u64 },

    /// Structured artifact was readable but not valid JSON.
    #[error("malformed JSON artifact: {diagnostic}")]
    MalformedJson { diagnostic: String },
}

impl From<ArtifactError> for ArtifactRequestError {
    fn from(error: ArtifactError) -> Self {
        match error {
            ArtifactError::NotFound { path } => ArtifactRequestError::NotFound { path },
            ArtifactError::RangeNotSatisfiable { start, size } => {
                ArtifactRequestError::RangeNotSatisfiable { start, size }
            }
        }
    }
}

impl IntoResponse for ArtifactRequestError {
    fn into_response(self) -> Response<Body> {
        let (status, message) = match self {
            ArtifactRequestError::MissingPath => (
                StatusCode::BAD_REQUEST,
                "Missing 'path' query parameter".to_string(),
            ),
            ArtifactRequestError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, "File not found".to_string())
            }
            ArtifactRequestError::RangeNotSatisfiable { .. } => (
                StatusCode::RANGE_NOT_SATISFIABLE,
                "Requested range not satisfiable".to_string(),
            ),
            ArtifactRequestError::MalformedJson { diagnostic } => {
                (StatusCode::INTERNAL_SERVER_ERROR, diagnostic)
            }
        };

        (status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ArtifactRequestError::MissingPath.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ArtifactRequestError::NotFound {
                path: "/tmp/gone.mp4".to_string()
            }
            .into_response()
            .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ArtifactRequestError::RangeNotSatisfiable { start: 10, size: 5 }
                .into_response()
                .status(),
            StatusCode::RANGE_NOT_SATISFIABLE
        );
        assert_eq!(
            ArtifactRequestError::MalformedJson {
                diagnostic: "expected value at line 1 column 1".to_string()
            }
            .into_response()
            .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_core_errors_convert() {
        let not_found = ArtifactError::NotFound {
            path: "/tmp/a".to_string(),
        };
        assert!(matches!(
            ArtifactRequestError::from(not_found),
            ArtifactRequestError::NotFound { .. }
        ));

        let unsatisfiable = ArtifactError::RangeNotSatisfiable { start: 9, size: 3 };
        assert!(matches!(
            ArtifactRequestError::from(unsatisfiable),
            ArtifactRequestError::RangeNotSatisfiable { start: 9, size: 3 }
        ));
    }
}
