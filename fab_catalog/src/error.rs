//! Error types for fab_catalog

use fab_common::DecodeError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Unified error type for catalog export operations
#[derive(Debug)]
pub enum CatalogError {
    /// HTTP request failed (network error, timeout, etc.)
    Network(reqwest::Error),
    /// Dataset server answered with a non-success status
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },
    /// Storing a downloaded dataset in the cache failed
    CacheWrite { path: PathBuf, source: io::Error },
    /// Reading a cached dataset failed
    CacheRead { path: PathBuf, source: io::Error },
    /// Cached dataset could not be decoded
    Decode {
        locale: String,
        path: PathBuf,
        source: DecodeError,
    },
    /// Writing the CSV catalog failed
    Write { path: PathBuf, source: io::Error },
}

impl CatalogError {
    /// Pipeline step that failed, used in the exit diagnostic
    pub fn step(&self) -> &'static str {
        match self {
            CatalogError::Network(_)
            | CatalogError::HttpStatus { .. }
            | CatalogError::CacheWrite { .. } => "fetch",
            CatalogError::CacheRead { .. } | CatalogError::Decode { .. } => "decode",
            CatalogError::Write { .. } => "write",
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Network(e) => write!(f, "Network error: {}", e),
            CatalogError::HttpStatus { url, status } => {
                write!(f, "HTTP error: {} for {}", status, url)
            }
            CatalogError::CacheWrite { path, source } => {
                write!(f, "Failed to store dataset at {}: {}", path.display(), source)
            }
            CatalogError::CacheRead { path, source } => {
                write!(f, "Failed to read cached dataset {}: {}", path.display(), source)
            }
            CatalogError::Decode {
                locale,
                path,
                source,
            } => write!(
                f,
                "Failed to decode '{}' dataset {}: {}",
                locale,
                path.display(),
                source
            ),
            CatalogError::Write { path, source } => {
                write!(f, "Failed to write {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Network(e) => Some(e),
            CatalogError::HttpStatus { .. } => None,
            CatalogError::CacheWrite { source, .. } => Some(source),
            CatalogError::CacheRead { source, .. } => Some(source),
            CatalogError::Decode { source, .. } => Some(source),
            CatalogError::Write { source, .. } => Some(source),
        }
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        CatalogError::Network(err)
    }
}

/// Result alias for catalog export operations
pub type Result<T> = std::result::Result<T, CatalogError>;
