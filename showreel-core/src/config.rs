//! Centralized configuration for Showreel.
//!
//! All tunable parameters and settings are defined here to avoid
//! hard-coded values scattered throughout the codebase.

/// Central configuration for all Showreel components.
///
/// Groups related configuration settings into logical sections.
#[derive(Debug, Clone, Default)]
pub struct ShowreelConfig {
    pub server: ServerConfig,
    pub streaming: StreamingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the artifact server binds to
    pub host: String,
    /// Listening port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 9090,
        }
    }
}

/// Streaming and file I/O configuration.
///
/// Controls the partial-content window size and read buffering for
/// recording delivery.
#[derive(Debug, Clone)]
pub struct StreamingConfig {
    /// Maximum bytes served per range request
    pub chunk_window: u64,
    /// Buffer size for chunked file reads
    pub read_buffer_size: usize,
    /// Content type for recording artifacts
    pub recording_content_type: &'static str,
}

impl Default for StreamingConfig {
    fn default() -> Self {
        Self {
            chunk_window: 1_000_000, // 1 MB, decimal
            read_buffer_size: 65536, // 64 KiB
            recording_content_type: "video/mp4",
        }
    }
}
