#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! dburl — render a database connection URL for psql, pgpass, pg_dump and friends.

mod cli;
mod commands;
mod dsn;
mod logging;
mod source;
mod types;

use clap::Parser;

use cli::{Cli, OutputCtx, write_error};
use commands::SourceCtx;
use types::ErrorOutput;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = logging::init_logging(cli.verbose, cli.quiet) {
        eprintln!("Failed to initialize logging: {err}");
    }

    let ctx = OutputCtx::new(cli.output, cli.json);
    let source = SourceCtx {
        url: cli.url.clone(),
        config: cli.config.clone(),
    };

    match commands::dispatch(&cli.command, &source, &ctx) {
        Ok(()) => {}
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            let error_output = ErrorOutput::from_dsn_error(&err);
            write_error(&error_output, cli.output, cli.json);
            std::process::exit(err.exit_code());
        }
    }
}
