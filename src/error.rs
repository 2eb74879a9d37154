//! Error types for receipt rendering and export

use thiserror::Error;

use crate::labels::{LabelLookup, Language};

/// Result type alias for receipt operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while editing, rendering or exporting a receipt
#[derive(Error, Debug)]
pub enum Error {
    /// The render target is detached or has a zero-sized box
    #[error("element not visible: {0}")]
    NotVisible(String),

    /// Failed to rasterize the receipt
    #[error("Rasterization failed: {0}")]
    RasterError(String),

    /// The pixel buffer could not be allocated
    #[error("Out of memory: {0}")]
    OutOfMemory(String),

    /// Operation timed out
    #[error("Operation timed out after {0}ms")]
    Timeout(u64),

    /// A font set reported a loading failure
    #[error("Font loading failed: {0}")]
    FontError(String),

    /// Failed to initialize the rasterizer
    #[error("Rasterizer initialization failed: {0}")]
    InitializationError(String),

    /// A record edit named an unknown field or carried the wrong value type
    #[error("Invalid edit: {0}")]
    InvalidEdit(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Failed to write the exported file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize or parse JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Coarse category of an export failure, used to pick actionable guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportErrorKind {
    Rasterization,
    OutOfMemory,
    NotVisible,
    Timeout,
    Unknown,
}

impl ExportErrorKind {
    fn headline_key(self) -> &'static str {
        match self {
            ExportErrorKind::Rasterization => "export.error.raster",
            ExportErrorKind::OutOfMemory => "export.error.memory",
            ExportErrorKind::NotVisible => "export.error.hidden",
            ExportErrorKind::Timeout => "export.error.timeout",
            ExportErrorKind::Unknown => "export.error.unknown",
        }
    }

    fn hint_key(self) -> &'static str {
        match self {
            ExportErrorKind::Rasterization => "export.hint.raster",
            ExportErrorKind::OutOfMemory => "export.hint.memory",
            ExportErrorKind::NotVisible => "export.hint.hidden",
            ExportErrorKind::Timeout => "export.hint.timeout",
            ExportErrorKind::Unknown => "export.hint.unknown",
        }
    }
}

impl Error {
    /// Classify this error for export reporting.
    pub fn export_kind(&self) -> ExportErrorKind {
        match self {
            Error::NotVisible(_) => ExportErrorKind::NotVisible,
            Error::OutOfMemory(_) => ExportErrorKind::OutOfMemory,
            Error::Timeout(_) => ExportErrorKind::Timeout,
            Error::RasterError(_) | Error::FontError(_) | Error::InitializationError(_) => {
                ExportErrorKind::Rasterization
            }
            Error::Io(e) if e.kind() == std::io::ErrorKind::OutOfMemory => {
                ExportErrorKind::OutOfMemory
            }
            _ => ExportErrorKind::Unknown,
        }
    }
}

/// A categorized export failure as shown to the user.
///
/// The raw error text is kept in `detail` for logs; `user_message` is what a
/// UI should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFailure {
    pub kind: ExportErrorKind,
    pub detail: String,
}

impl ExportFailure {
    pub fn user_message(&self, labels: &dyn LabelLookup, lang: Language) -> String {
        format!(
            "{}\n{}",
            labels.lookup(self.kind.headline_key(), lang),
            labels.lookup(self.kind.hint_key(), lang)
        )
    }
}

impl From<&Error> for ExportFailure {
    fn from(err: &Error) -> Self {
        ExportFailure {
            kind: err.export_kind(),
            detail: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::BundledLabels;

    #[test]
    fn classifies_export_errors() {
        assert_eq!(
            Error::NotVisible("zero size".into()).export_kind(),
            ExportErrorKind::NotVisible
        );
        assert_eq!(
            Error::OutOfMemory("4GB".into()).export_kind(),
            ExportErrorKind::OutOfMemory
        );
        assert_eq!(
            Error::RasterError("bad".into()).export_kind(),
            ExportErrorKind::Rasterization
        );
        assert_eq!(Error::Timeout(10).export_kind(), ExportErrorKind::Timeout);
        assert_eq!(
            Error::Other("?".into()).export_kind(),
            ExportErrorKind::Unknown
        );
    }

    #[test]
    fn memory_failure_suggests_closing_tabs() {
        let failure = ExportFailure::from(&Error::OutOfMemory("alloc".into()));
        let msg = failure.user_message(&BundledLabels, Language::En);
        assert!(msg.to_lowercase().contains("close other tabs"));
        assert!(!msg.contains("alloc"));
    }
}
