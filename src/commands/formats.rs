/// `formats` command: list supported format tokens.
use crate::cli::OutputCtx;
use crate::cli::output::write_formats;
use crate::dsn::{DsnError, FormatToken, KNOWN_FORMATS};
use crate::types::FormatInfoOutput;

/// Run `dburl formats`.
///
/// # Errors
///
/// Never fails; returns `Result` for dispatch uniformity.
pub fn run(ctx: &OutputCtx) -> Result<(), DsnError> {
    let formats: Vec<FormatInfoOutput> = KNOWN_FORMATS
        .iter()
        .map(|name| {
            let token = FormatToken::parse(name);
            FormatInfoOutput {
                name: token.as_str().to_owned(),
                description: token.description().to_owned(),
            }
        })
        .collect();

    write_formats(&formats, ctx);
    Ok(())
}
