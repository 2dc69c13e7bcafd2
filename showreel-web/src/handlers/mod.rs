//! HTTP request handlers organized by artifact kind

pub mod recording;
pub mod typed;

use std::path::{Path, PathBuf};

use serde::Deserialize;

// Re-export handler functions
pub use recording::stream_recording;
pub use typed::{image_artifact, json_artifact, text_artifact};

use crate::error::ArtifactRequestError;

/// Query parameters shared by all artifact endpoints.
#[derive(Debug, Deserialize)]
pub struct ArtifactQuery {
    /// Absolute filesystem path of the artifact, resolved upstream by the
    /// automation engine that wrote it
    pub path: Option<PathBuf>,
}

impl ArtifactQuery {
    /// Validated target path for this request.
    ///
    /// # Errors
    ///
    /// - `ArtifactRequestError::MissingPath` - If the parameter is absent
    ///   or empty; no filesystem access has happened at that point
    pub fn target(&self) -> Result<&Path, ArtifactRequestError> {
        match self.path.as_deref() {
            Some(path) if !path.as_os_str().is_empty() => Ok(path),
            _ => Err(ArtifactRequestError::MissingPath),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_present() {
        let query = ArtifactQuery {
            path: Some(PathBuf::from("/artifacts/run-1/recording.mp4")),
        };
        assert_eq!(
            query.target().unwrap(),
            Path::new("/artifacts/run-1/recording.mp4")
        );
    }

    #[test]
    fn test_target_absent() {
        let query = ArtifactQuery { path: None };
        assert!(matches!(
            query.target(),
            Err(ArtifactRequestError::MissingPath)
        ));
    }

    #[test]
    fn test_target_empty() {
        let query = ArtifactQuery {
            path: Some(PathBuf::new()),
        };
        assert!(matches!(
            query.target(),
            Err(ArtifactRequestError::MissingPath)
        ));
    }
}
