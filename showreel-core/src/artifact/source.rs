//! Filesystem access seam for artifact requests.
//!
//! `ArtifactSource` isolates the HTTP handlers from the filesystem so
//! tests can observe and substitute the access pattern. `FsArtifactSource`
//! is the production implementation over tokio's async file I/O.

use std::io::SeekFrom;
use std::path::Path;

use async_trait::async_trait;
use bytes::Bytes;
use futures::StreamExt;
use futures::stream::BoxStream;
use tokio::io::AsyncSeekExt;
use tracing::debug;

use super::{ArtifactError, ArtifactStat};
use crate::config::StreamingConfig;
use crate::stream::window_stream;

/// Read-only access to artifacts addressed by absolute path.
///
/// Every method re-queries the filesystem; nothing is cached across
/// requests. Implementations must be safe to share between concurrent
/// requests.
#[async_trait]
pub trait ArtifactSource: Send + Sync {
    /// Stat the artifact at `path`.
    ///
    /// # Errors
    ///
    /// - `ArtifactError::NotFound` - For any stat failure and for paths
    ///   that are not regular files
    async fn stat(&self, path: &Path) -> Result<ArtifactStat, ArtifactError>;

    /// Read the entire artifact into memory.
    ///
    /// # Errors
    ///
    /// - `ArtifactError::NotFound` - For any read failure
    async fn read_all(&self, path: &Path) -> Result<Vec<u8>, ArtifactError>;

    /// Open a bounded read of `len` bytes starting at byte `start`.
    ///
    /// Failures before the first byte map to `NotFound`; failures after
    /// that surface through the stream items and abort the transfer.
    ///
    /// # Errors
    ///
    /// - `ArtifactError::NotFound` - If the artifact cannot be opened or
    ///   the start offset cannot be reached
    async fn open_window(
        &self,
        path: &Path,
        start: u64,
        len: u64,
    ) -> Result<BoxStream<'static, std::io::Result<Bytes>>, ArtifactError>;
}

/// Production `ArtifactSource` backed by the local filesystem.
#[derive(Debug, Clone)]
pub struct FsArtifactSource {
    read_buffer_size: usize,
}

impl FsArtifactSource {
    /// Create a source reading in chunks of `read_buffer_size` bytes.
    pub fn new(read_buffer_size: usize) -> Self {
        Self { read_buffer_size }
    }
}

impl Default for FsArtifactSource {
    fn default() -> Self {
        Self::new(StreamingConfig::default().read_buffer_size)
    }
}

#[async_trait]
impl ArtifactSource for FsArtifactSource {
    async fn stat(&self, path: &Path) -> Result<ArtifactStat, ArtifactError> {
        match tokio::fs::metadata(path).await {
            Ok(metadata) if metadata.is_file() => Ok(ArtifactStat {
                size: metadata.len(),
            }),
            Ok(_) => {
                debug!("artifact path is not a regular file: {}", path.display());
                Err(ArtifactError::not_found(path))
            }
            Err(error) => {
                debug!("artifact stat failed for {}: {}", path.display(), error);
                Err(ArtifactError::not_found(path))
            }
        }
    }

    async fn read_all(&self, path: &Path) -> Result<Vec<u8>, ArtifactError> {
        match tokio::fs::read(path).await {
            Ok(contents) => Ok(contents),
            Err(error) => {
                debug!("artifact read failed for {}: {}", path.display(), error);
                Err(ArtifactError::not_found(path))
            }
        }
    }

    async fn open_window(
        &self,
        path: &Path,
        start: u64,
        len: u64,
    ) -> Result<BoxStream<'static, std::io::Result<Bytes>>, ArtifactError> {
        let mut file = tokio::fs::File::open(path).await.map_err(|error| {
            debug!("artifact open failed for {}: {}", path.display(), error);
            ArtifactError::not_found(path)
        })?;

        if start > 0 {
            file.seek(SeekFrom::Start(start)).await.map_err(|error| {
                debug!("artifact seek failed for {}: {}", path.display(), error);
                ArtifactError::not_found(path)
            })?;
        }

        Ok(window_stream(file, len, self.read_buffer_size).boxed())
    }
}
