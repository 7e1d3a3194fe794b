/// Format tokens: the closed set of output syntaxes.
use std::fmt;

/// Names of every known token, in the order they are advertised to users.
pub const KNOWN_FORMATS: [&str; 7] = [
    "psql",
    "pgpass",
    "rails_yaml",
    "pg_dump",
    "pg_restore",
    "alias",
    "sqitch",
];

/// An output syntax selected by name.
///
/// Unrecognized names are kept as `Unknown` rather than rejected, so one bad
/// token in a batch only costs its own line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormatToken {
    /// Interactive client command line. Also the default for empty tokens.
    #[default]
    Psql,
    /// `~/.pgpass` credentials line.
    Pgpass,
    /// `database.yml` connection block.
    RailsYaml,
    /// `pg_dump` command line.
    PgDump,
    /// `pg_restore` command line.
    PgRestore,
    /// `sqitch` command line.
    Sqitch,
    /// Shell alias around another format.
    Alias,
    /// Anything else, as typed.
    Unknown(String),
}

impl FormatToken {
    /// Resolve a token by name. Surrounding whitespace is ignored and an empty
    /// name means `psql`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "" | "psql" => Self::Psql,
            "pgpass" => Self::Pgpass,
            "rails_yaml" => Self::RailsYaml,
            "pg_dump" => Self::PgDump,
            "pg_restore" => Self::PgRestore,
            "sqitch" => Self::Sqitch,
            "alias" => Self::Alias,
            other => Self::Unknown(other.to_owned()),
        }
    }

    /// Split a comma-separated list into tokens, preserving order.
    #[must_use]
    pub fn parse_list(spec: &str) -> Vec<Self> {
        spec.split(',').map(Self::parse).collect()
    }

    /// The token's name as a user would type it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Psql => "psql",
            Self::Pgpass => "pgpass",
            Self::RailsYaml => "rails_yaml",
            Self::PgDump => "pg_dump",
            Self::PgRestore => "pg_restore",
            Self::Sqitch => "sqitch",
            Self::Alias => "alias",
            Self::Unknown(name) => name,
        }
    }

    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }

    /// One-line description for `dburl formats`.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Psql => "psql command line (default)",
            Self::Pgpass => "line for ~/.pgpass",
            Self::RailsYaml => "Rails database.yml connection keys",
            Self::PgDump => "pg_dump command line",
            Self::PgRestore => "pg_restore command line",
            Self::Sqitch => "sqitch command line",
            Self::Alias => "shell alias wrapping another format (see --aliascommand)",
            Self::Unknown(_) => "",
        }
    }
}

impl From<&str> for FormatToken {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for FormatToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names_round_trip() {
        for name in KNOWN_FORMATS {
            let token = FormatToken::parse(name);
            assert!(token.is_known(), "{name} should be known");
            assert_eq!(token.as_str(), name);
        }
    }

    #[test]
    fn test_empty_is_psql() {
        assert_eq!(FormatToken::parse(""), FormatToken::Psql);
        assert_eq!(FormatToken::parse("   "), FormatToken::Psql);
    }

    #[test]
    fn test_unknown_is_kept() {
        assert_eq!(
            FormatToken::parse(" foo "),
            FormatToken::Unknown("foo".to_owned())
        );
        // Case matters.
        assert!(!FormatToken::parse("PSQL").is_known());
    }

    #[test]
    fn test_parse_list_whitespace_and_empties() {
        let tokens = FormatToken::parse_list("psql ,  pg_dump,,rails_yaml,");
        assert_eq!(
            tokens,
            vec![
                FormatToken::Psql,
                FormatToken::PgDump,
                FormatToken::Psql,
                FormatToken::RailsYaml,
                FormatToken::Psql,
            ]
        );
        assert_eq!(FormatToken::parse_list(""), vec![FormatToken::Psql]);
    }
}
