/// Rendering a descriptor into each tool's syntax.
///
/// Every template here is consumed by shells and client tools, so flag
/// spelling and order must not drift.
use super::descriptor::ConnectionDescriptor;
use super::format::{FormatToken, KNOWN_FORMATS};

/// Alias name used when none is given.
pub const DEFAULT_ALIAS_NAME: &str = "aliasname";

/// Parameters for the `alias` format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasSpec {
    /// Name bound by the alias declaration.
    pub name: String,
    /// Format wrapped by the alias.
    pub command: FormatToken,
}

impl Default for AliasSpec {
    fn default() -> Self {
        Self {
            name: DEFAULT_ALIAS_NAME.to_owned(),
            command: FormatToken::Psql,
        }
    }
}

impl AliasSpec {
    /// Build from optional CLI values, falling back to the defaults.
    #[must_use]
    pub fn new(name: Option<&str>, command: Option<&str>) -> Self {
        Self {
            name: name.unwrap_or(DEFAULT_ALIAS_NAME).to_owned(),
            command: command.map(FormatToken::parse).unwrap_or_default(),
        }
    }
}

/// Render one token.
///
/// Does not look at the scheme; callers check `is_supported` once per batch.
#[must_use]
pub fn render(d: &ConnectionDescriptor, token: &FormatToken, alias: &AliasSpec) -> String {
    match token {
        FormatToken::Psql => format!(
            "psql -h {} -d {} -U {} -p {}",
            d.host, d.database, d.user, d.port
        ),
        FormatToken::Pgpass => format!(
            "{}:{}:{}:{}:{}",
            d.host, d.port, d.database, d.user, d.password
        ),
        FormatToken::RailsYaml => format!(
            "host: {}\ndatabase: {}\nusername: {}\npassword: {}\nport: {}",
            d.host, d.database, d.user, d.password, d.port
        ),
        FormatToken::PgDump => format!(
            "pg_dump {} -h {} -p {} -U {}",
            d.database, d.host, d.port, d.user
        ),
        FormatToken::PgRestore => format!(
            "pg_restore -d {} -h {} -p {} -U {}",
            d.database, d.host, d.port, d.user
        ),
        FormatToken::Sqitch => format!(
            "sqitch -d {} -h {} -p {} -u {}",
            d.database, d.host, d.port, d.user
        ),
        FormatToken::Alias => render_alias(d, alias),
        FormatToken::Unknown(name) => unknown_format_line(name),
    }
}

/// Wrap the alias command's rendering in an alias declaration.
///
/// An `alias` command is coerced to `psql`, so this recurses at most once.
fn render_alias(d: &ConnectionDescriptor, alias: &AliasSpec) -> String {
    let inner_token = match &alias.command {
        FormatToken::Alias => &FormatToken::Psql,
        other => other,
    };
    let inner = render(d, inner_token, alias);
    format!("alias {}='{inner}'", alias.name)
}

/// Diagnostic line for a token outside the known set.
#[must_use]
pub fn unknown_format_line(name: &str) -> String {
    format!(
        "{name} not known or supported. Please use one of |{}|",
        KNOWN_FORMATS.join(",")
    )
}

/// Diagnostic line replacing a whole batch for a non-postgres URL.
#[must_use]
pub fn unsupported_scheme_line(scheme: &str) -> String {
    format!("{scheme} not supported yet")
}
