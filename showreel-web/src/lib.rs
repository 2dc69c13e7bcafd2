//! Showreel Web - Artifact HTTP API

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
//!
//! Serves recorded automation artifacts (session recordings, screenshots,
//! JSON summaries, text logs) to the operator dashboard over HTTP. The
//! recording endpoint supports partial-content delivery; the other kinds
//! are simple whole-buffer responses.

pub mod error;
pub mod handlers;
pub mod server;

// Re-export main types
pub use server::{AppState, router, run_server};
