/// `append` command: add an alias and a pgpass line to local dotfiles.
use std::path::PathBuf;

use tracing::warn;

use super::SourceCtx;
use crate::cli::OutputCtx;
use crate::cli::args::AppendArgs;
use crate::cli::output::{write_appends, write_rendered};
use crate::dsn::{AliasSpec, Batch, ConnectionDescriptor, DsnError, FormatToken, render};
use crate::source::SourceError;
use crate::source::dotfiles::{append_line, default_bashfile, default_pgpass, ensure_exists};
use crate::types::AppendOutput;

/// Run `dburl append`.
///
/// Both target files are checked before anything is written, so a missing
/// file leaves every dotfile untouched.
///
/// # Errors
///
/// Returns `DsnError` if the connection string cannot be fetched or parsed,
/// or a dotfile is missing or not writable.
pub fn run(args: &AppendArgs, source: &SourceCtx, ctx: &OutputCtx) -> Result<(), DsnError> {
    let raw = source.connection_string(args.source.hint.as_deref())?;
    let descriptor = ConnectionDescriptor::parse(&raw)?;

    if !descriptor.is_supported() {
        warn!(scheme = %descriptor.scheme, "unsupported scheme, nothing appended");
        let batch = Batch::new(descriptor, Vec::new(), AliasSpec::default());
        write_rendered(&batch, ctx);
        return Ok(());
    }

    let plan = plan(args, &descriptor)?;
    for (path, _) in &plan {
        ensure_exists(path)?;
    }

    let mut report = Vec::with_capacity(plan.len());
    for (path, text) in plan {
        append_line(&path, &text)?;
        report.push(AppendOutput {
            file: path.display().to_string(),
            text,
        });
    }

    write_appends(&report, ctx);
    Ok(())
}

/// The `(file, line)` pairs to append, alias first.
fn plan(args: &AppendArgs, d: &ConnectionDescriptor) -> Result<Vec<(PathBuf, String)>, SourceError> {
    let mut entries = Vec::with_capacity(2);

    if let Some(name) = &args.alias {
        let bashfile = resolve_path(args.bashfile.as_ref(), default_bashfile)?;
        let alias = AliasSpec::new(Some(name.as_str()), None);
        entries.push((bashfile, render(d, &FormatToken::Alias, &alias)));
    }

    let pgpass = resolve_path(args.pgpass.as_ref(), default_pgpass)?;
    entries.push((pgpass, render(d, &FormatToken::Pgpass, &AliasSpec::default())));

    Ok(entries)
}

fn resolve_path(
    explicit: Option<&PathBuf>,
    default: fn() -> Result<PathBuf, SourceError>,
) -> Result<PathBuf, SourceError> {
    match explicit {
        Some(path) => Ok(path.clone()),
        None => default(),
    }
}
