/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod append;
pub mod formats;
pub mod render;

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::cli::OutputCtx;
use crate::cli::args::Command;
use crate::dsn::DsnError;
use crate::source::{EnvStore, JsonFileStore, lookup};

/// Where the connection string comes from: an explicit URL, a JSON config
/// file, or the process environment, in that order.
#[derive(Debug, Default)]
pub struct SourceCtx {
    pub url: Option<String>,
    pub config: Option<PathBuf>,
}

impl SourceCtx {
    /// Fetch the raw connection string for `hint`.
    ///
    /// # Errors
    ///
    /// Returns `DsnError::Source` if the config store cannot be read or the
    /// hint does not resolve to a single config var.
    pub fn connection_string(&self, hint: Option<&str>) -> Result<String, DsnError> {
        if let Some(url) = &self.url {
            if let Some(hint) = hint {
                warn!(hint, "--url given, ignoring config var hint");
            }
            return Ok(url.clone());
        }

        let var = if let Some(path) = &self.config {
            let store = JsonFileStore::new(path);
            debug!(file = %store.path().display(), "reading config vars");
            lookup(&store, hint)?
        } else {
            lookup(&EnvStore, hint)?
        };
        debug!(key = %var.key, "using config var");
        Ok(var.value)
    }
}

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns `DsnError` on any command failure.
pub fn dispatch(command: &Command, source: &SourceCtx, ctx: &OutputCtx) -> Result<(), DsnError> {
    match command {
        Command::Render(args) => render::run(args, source, ctx),
        Command::Append(args) => append::run(args, source, ctx),
        Command::Formats => formats::run(ctx),
    }
}
