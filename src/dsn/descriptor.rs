/// Connection descriptor: the parsed form of a connection URL.
use std::str::FromStr;

use url::Url;

use super::errors::DsnError;

/// The only scheme the renderers know how to express.
pub const SUPPORTED_SCHEME: &str = "postgres";

/// Port assumed when the URL carries none.
const POSTGRES_DEFAULT_PORT: u16 = 5432;

/// Fields of a connection URL, extracted once per invocation.
///
/// `user`, `password` and `database` are kept exactly as they appear in the
/// URL, percent-escapes included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionDescriptor {
    pub scheme: String,
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
}

impl ConnectionDescriptor {
    /// Parse a raw connection string.
    ///
    /// # Errors
    ///
    /// - `DsnError::InvalidUrl` — no scheme, bad port, or otherwise unparsable
    /// - `DsnError::MissingHost` — the URL has no (or an empty) host
    /// - `DsnError::UnescapedField` — user, password or path holds characters
    ///   that must be percent-encoded
    pub fn parse(raw: &str) -> Result<Self, DsnError> {
        let trimmed = raw.trim();
        let url = Url::parse(trimmed).map_err(|source| DsnError::InvalidUrl {
            redacted: redact(raw),
            source,
        })?;

        if let Some(field) = rewritten_field(&url, trimmed) {
            return Err(DsnError::UnescapedField {
                redacted: redact(raw),
                field,
            });
        }

        let host = match url.host_str() {
            Some(h) if !h.is_empty() => h.to_owned(),
            _ => {
                return Err(DsnError::MissingHost {
                    redacted: redact(raw),
                });
            }
        };

        let scheme = url.scheme().to_owned();
        let port = url.port().unwrap_or_else(|| default_port(&scheme));

        Ok(Self {
            database: strip_leading_separator(url.path()).to_owned(),
            user: url.username().to_owned(),
            password: url.password().unwrap_or_default().to_owned(),
            host,
            port,
            scheme,
        })
    }

    /// Whether the renderers can express this descriptor.
    #[must_use]
    pub fn is_supported(&self) -> bool {
        self.scheme == SUPPORTED_SCHEME
    }
}

impl FromStr for ConnectionDescriptor {
    type Err = DsnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn default_port(scheme: &str) -> u16 {
    match scheme {
        "mysql" => 3306,
        _ => POSTGRES_DEFAULT_PORT,
    }
}

/// The first of user, password or path that the parser escaped.
///
/// `Url::parse` percent-encodes a raw `@`, space and the like instead of
/// failing, which would silently change credentials.
fn rewritten_field(url: &Url, raw: &str) -> Option<&'static str> {
    let fields = [
        ("user", url.username()),
        ("password", url.password().unwrap_or_default()),
        ("path", url.path()),
    ];
    fields
        .into_iter()
        .find(|(_, value)| !raw.contains(value))
        .map(|(name, _)| name)
}

/// Drop exactly one leading `/`; deeper separators are part of the name.
fn strip_leading_separator(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

/// Mask the password of a connection string for logs and error messages.
///
/// Unparsable input is replaced wholesale since it may still hold a secret.
#[must_use]
pub fn redact(raw: &str) -> String {
    match Url::parse(raw.trim()) {
        Ok(mut url) => {
            if url.password().is_some() {
                let _ = url.set_password(Some("****"));
            }
            url.to_string()
        }
        Err(_) => "<redacted>".to_owned(),
    }
}
