/// `render` command: print the connection string in the requested formats.
use tracing::debug;

use super::SourceCtx;
use crate::cli::OutputCtx;
use crate::cli::args::RenderArgs;
use crate::cli::output::write_rendered;
use crate::dsn::{AliasSpec, DsnError, render_batch};

/// Run `dburl render`.
///
/// # Errors
///
/// Returns `DsnError` if the connection string cannot be fetched or parsed.
/// Nothing is printed in that case.
pub fn run(args: &RenderArgs, source: &SourceCtx, ctx: &OutputCtx) -> Result<(), DsnError> {
    let raw = source.connection_string(args.source.hint.as_deref())?;
    let alias = AliasSpec::new(args.aliasname.as_deref(), args.aliascommand.as_deref());
    debug!(formats = %args.format, alias = %alias.name, "rendering");

    let batch = render_batch(&raw, &args.format, &alias)?;
    debug!(host = %batch.descriptor().host, lines = batch.lines().len(), "rendered batch");
    write_rendered(&batch, ctx);
    Ok(())
}
