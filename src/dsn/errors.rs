/// Errors from the connection-string domain layer.
use thiserror::Error;

use crate::source::SourceError;

/// Errors that stop an invocation before any line is rendered.
///
/// Unsupported schemes and unknown format tokens are not errors: they are
/// rendered as diagnostic lines.
#[derive(Debug, Error)]
pub enum DsnError {
    /// The connection string is not a parsable URL.
    #[error("Malformed connection string '{redacted}': {source}")]
    InvalidUrl {
        /// The input with any password masked.
        redacted: String,
        /// Parser error from the `url` crate.
        source: url::ParseError,
    },

    /// The URL parsed but has no host component.
    #[error("Malformed connection string '{redacted}': missing host")]
    MissingHost {
        /// The input with any password masked.
        redacted: String,
    },

    /// A user, password or path character the URL parser would have escaped.
    #[error("Malformed connection string '{redacted}': {field} must be percent-encoded")]
    UnescapedField {
        /// The input with any password masked.
        redacted: String,
        /// Which component was rewritten.
        field: &'static str,
    },

    /// Failure reading the connection string or writing dotfiles.
    #[error(transparent)]
    Source(#[from] SourceError),
}

impl DsnError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidUrl { .. } | Self::MissingHost { .. } | Self::UnescapedField { .. } => 2,
            Self::Source(source) => match source {
                SourceError::KeyNotFound { .. }
                | SourceError::AmbiguousKey { .. }
                | SourceError::FileMissing { .. } => 4,
                SourceError::NotWritable { .. } => 3,
                _ => 1,
            },
        }
    }

    /// Machine-readable code for the JSON error envelope.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidUrl { .. } | Self::MissingHost { .. } | Self::UnescapedField { .. } => {
                "malformed_url"
            }
            Self::Source(source) => match source {
                SourceError::KeyNotFound { .. } => "key_not_found",
                SourceError::AmbiguousKey { .. } => "ambiguous_key",
                SourceError::ConfigRead { .. } | SourceError::ConfigParse { .. } => "config_error",
                SourceError::FileMissing { .. } => "file_not_found",
                SourceError::NotWritable { .. } => "permission_denied",
                SourceError::NoHomeDir | SourceError::Io { .. } => "io_error",
            },
        }
    }
}
