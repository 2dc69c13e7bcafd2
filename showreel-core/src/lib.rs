//! Showreel Core - artifact resolution and streaming primitives
//!
//! This crate provides the building blocks for serving recorded automation
//! artifacts over HTTP: filesystem resolution, byte-range negotiation,
//! bounded streaming reads, and configuration management.

pub mod artifact;
pub mod config;
pub mod range;
pub mod stream;
pub mod tracing_setup;

// Re-export main types for convenient access
pub use artifact::{ArtifactError, ArtifactKind, ArtifactSource, ArtifactStat, FsArtifactSource};
pub use config::ShowreelConfig;
pub use range::{ByteWindow, RangePlan};
