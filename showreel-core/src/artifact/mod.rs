//! Artifact domain types and filesystem resolution.
//!
//! An artifact is a file written by the automation engine (recording,
//! screenshot, JSON summary, text log), addressed by absolute path. This
//! module defines the artifact vocabulary and the read-only filesystem
//! seam the HTTP handlers go through.

mod source;

use std::fmt;
use std::path::Path;

pub use source::{ArtifactSource, FsArtifactSource};

/// Kinds of artifacts produced by an automation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Session-recording video
    Recording,
    /// Screenshot or other static image
    Image,
    /// Structured JSON document
    Json,
    /// Plain-text log
    Text,
}

impl ArtifactKind {
    /// Short lowercase name used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Recording => "recording",
            ArtifactKind::Image => "image",
            ArtifactKind::Json => "json",
            ArtifactKind::Text => "text",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of resolving an artifact path against the filesystem.
///
/// Derived by a fresh stat on every request, never cached, so concurrent
/// modification of the underlying file between requests is observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactStat {
    /// Size of the artifact in bytes
    pub size: u64,
}

/// Errors from artifact resolution and range negotiation.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    /// Stat, open, or read failed. Sub-causes (absent file, permission
    /// denied, I/O error) are not distinguished; clients see only that
    /// the artifact is unavailable, and the cause goes to the log.
    #[error("artifact not found: {path}")]
    NotFound { path: String },

    #[error("range start {start} is beyond the {size} byte artifact")]
    RangeNotSatisfiable { start: u64, size: u64 },
}

impl ArtifactError {
    /// Collapse any filesystem failure for `path` into `NotFound`.
    pub fn not_found(path: &Path) -> Self {
        ArtifactError::NotFound {
            path: path.display().to_string(),
        }
    }
}
