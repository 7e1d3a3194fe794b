/// Shared serializable output types for all commands.
///
/// These types are what gets written to stdout — either as JSON or rendered
/// as text/table. Rendered lines come straight from `dsn::RenderedLine`.
use serde::{Deserialize, Serialize};

/// A supported format token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfoOutput {
    /// Token name as typed on the command line.
    pub name: String,
    /// What the token renders.
    pub description: String,
}

/// A line appended to a dotfile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppendOutput {
    /// File that was appended to.
    pub file: String,
    /// Text appended (without the trailing newline).
    pub text: String,
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional list of candidates (for ambiguous config keys).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<String>>,
}

impl ErrorOutput {
    /// Construct from a `DsnError`.
    #[must_use]
    pub fn from_dsn_error(err: &crate::dsn::DsnError) -> Self {
        use crate::dsn::DsnError;
        use crate::source::SourceError;

        let candidates = match err {
            DsnError::Source(SourceError::AmbiguousKey { candidates, .. }) => {
                Some(candidates.clone())
            }
            _ => None,
        };
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
                candidates,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsn::DsnError;
    use crate::source::SourceError;

    #[test]
    fn test_ambiguous_envelope_has_candidates() {
        let err = DsnError::from(SourceError::AmbiguousKey {
            hint: "HEROKU".to_owned(),
            candidates: vec!["A_URL".to_owned(), "B_URL".to_owned()],
        });
        let out = ErrorOutput::from_dsn_error(&err);
        assert!(!out.ok);
        assert_eq!(out.error.code, "ambiguous_key");
        assert_eq!(out.error.candidates.as_deref().map(<[String]>::len), Some(2));
    }

    #[test]
    fn test_envelope_json_shape() {
        let err = DsnError::from(SourceError::KeyNotFound {
            hint: "X".to_owned(),
        });
        let json = serde_json::to_value(ErrorOutput::from_dsn_error(&err)).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["error"]["code"], "key_not_found");
        assert!(json["error"].get("candidates").is_none());
    }
}
