//! Error taxonomy shared by the loaders.

use std::path::PathBuf;

/// Errors surfaced by resource lookups.
///
/// Absence of a resource is never an error: the locator returns `None` and
/// the loaders return `Ok(None)` when no candidate file exists. Only files
/// that resolved but cannot be read or decoded produce a `ResourceError`,
/// since those indicate a packaging defect rather than a missing resource.
#[derive(Debug)]
pub enum ResourceError {
    /// A resolved file could not be read after the existence probe saw it.
    Io {
        /// Path that caused the error.
        path: PathBuf,
        /// Source I/O error.
        source: std::io::Error,
    },
    /// A resolved file exists but failed to parse or decode.
    ///
    /// Deliberately distinct from absence, so corrupted string tables or
    /// object files are never masked by a silent fallback.
    Malformed {
        /// Path of the offending file.
        path: PathBuf,
        /// Decoder-specific failure.
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl std::fmt::Display for ResourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            Self::Malformed { path, source } => {
                write!(f, "failed to decode {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ResourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Malformed { source, .. } => Some(source.as_ref()),
        }
    }
}
