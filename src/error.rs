// src/error.rs

//! Error types shared across the orgsync library
//!
//! Command handlers in the binary use `anyhow`; everything under `src/`
//! returns this crate-level `Result`.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A describe/query/list call against an org failed. Always fatal.
    #[error("service query failed: {0}")]
    QueryError(String),

    /// A batch retrieval request failed. Aborts the remaining batches of
    /// the current stage; already-completed batches are not rolled back.
    #[error("metadata retrieval failed: {0}")]
    RetrieveError(String),

    /// A package install failed. "Already installed" conflicts are
    /// classified and recovered by the caller; everything else is fatal.
    #[error("install of package {version_id} failed: {message}")]
    InstallError { version_id: String, message: String },

    /// The vendor CLI could not be found, spawned, or timed out.
    #[error("command failed: {0}")]
    CommandError(String),

    /// The vendor CLI produced output that does not match the expected
    /// response shape.
    #[error("unexpected response shape: {0}")]
    ParseError(String),

    /// Chunk size must be positive.
    #[error("invalid chunk size: {0}")]
    InvalidChunkSize(usize),

    #[error("XML error: {0}")]
    XmlError(#[from] quick_xml::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("invalid glob pattern: {0}")]
    PatternError(#[from] glob::PatternError),

    #[error("glob walk failed: {0}")]
    GlobError(#[from] glob::GlobError),
}
