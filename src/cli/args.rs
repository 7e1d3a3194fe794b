/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// dburl — render a database URL as psql, pgpass, pg_dump and friends.
#[derive(Debug, Parser)]
#[command(
    name = "dburl",
    about = "Render a database connection URL in the syntax your next tool expects",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output format. `text` prints one rendered entry per line.
    #[arg(long, global = true, value_name = "FORMAT", default_value = "text")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, global = true, conflicts_with = "output")]
    pub json: bool,

    /// Connection string to use instead of looking one up in the config store.
    #[arg(long, global = true, env = "DBURL_URL", value_name = "URL", hide_env_values = true)]
    pub url: Option<String>,

    /// JSON file of config vars (e.g. `heroku config --json`). Defaults to the
    /// process environment.
    #[arg(long, global = true, env = "DBURL_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). Logs go to stderr.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Rendered text only, one entry per line.
    #[default]
    Text,
    /// JSON array or object (pretty-printed).
    Json,
    /// Compact single-line JSON.
    Compact,
    /// Newline-delimited JSON (one object per line).
    Ndjson,
    /// Aligned table with headers (human-readable).
    Table,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the connection string in one or more formats.
    Render(RenderArgs),
    /// Append an alias and a pgpass line to local dotfiles.
    Append(AppendArgs),
    /// List the supported format tokens.
    Formats,
}

/// Which config var holds the connection string.
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Config var name or hint, e.g. `HEROKU_POSTGRESQL_NAVY`. Defaults to `DATABASE_URL`.
    #[arg(value_name = "CONFIG_VAR")]
    pub hint: Option<String>,
}

/// Arguments for `dburl render`.
#[derive(Debug, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Comma-separated formats: psql, pgpass, rails_yaml, pg_dump, pg_restore, alias, sqitch.
    #[arg(
        short,
        long,
        env = "DBURL_FORMAT",
        value_name = "FORMATS",
        default_value = "psql"
    )]
    pub format: String,

    /// Name bound by the `alias` format.
    #[arg(long, value_name = "NAME")]
    pub aliasname: Option<String>,

    /// Format wrapped by the `alias` format (default: psql).
    #[arg(long, value_name = "FORMAT")]
    pub aliascommand: Option<String>,
}

/// Arguments for `dburl append`.
#[derive(Debug, Args)]
pub struct AppendArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Also append `alias NAME='psql …'` to the bash file.
    #[arg(long, value_name = "NAME")]
    pub alias: Option<String>,

    /// Bash file to append the alias to (default: ~/.bash_profile).
    #[arg(long, value_name = "PATH")]
    pub bashfile: Option<PathBuf>,

    /// pgpass file to append credentials to (default: ~/.pgpass).
    #[arg(long, value_name = "PATH")]
    pub pgpass: Option<PathBuf>,
}
