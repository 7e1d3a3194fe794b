/// Output formatting: text, JSON and table modes.
use std::io::Write;

use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use super::args::OutputFormat;
use crate::dsn::{LineKind, RenderedLine};
use crate::types::{AppendOutput, ErrorOutput, FormatInfoOutput};

/// Resolve the effective output format, handling the `--json` flag.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag { OutputFormat::Json } else { fmt }
}

/// Output context passed to all formatters.
pub struct OutputCtx {
    pub format: OutputFormat,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
        }
    }
}

// --- Rendered lines ---

/// Write rendered lines to stdout.
///
/// Text mode prints each line's text verbatim, so the output can be pasted
/// or appended to a shell file directly.
pub fn write_rendered<I>(lines: I, ctx: &OutputCtx)
where
    I: IntoIterator<Item = RenderedLine>,
{
    match ctx.format {
        OutputFormat::Text => {
            for line in lines {
                println!("{line}");
            }
        }
        OutputFormat::Json => print_json(&lines.into_iter().collect::<Vec<_>>()),
        OutputFormat::Compact => print_compact_json(&lines.into_iter().collect::<Vec<_>>()),
        OutputFormat::Ndjson => print_ndjson(&lines.into_iter().collect::<Vec<_>>()),
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(UTF8_BORDERS_ONLY);
            table.set_header(["FORMAT", "OUTPUT"]);
            for line in lines {
                let label = match line.kind {
                    LineKind::Rendered => line.label,
                    LineKind::UnknownFormat => format!("{} (unknown)", line.label),
                    LineKind::UnsupportedScheme => format!("{} (unsupported)", line.label),
                };
                table.add_row([label, line.text]);
            }
            println!("{table}");
        }
    }
}

// --- Formats ---

/// Write the list of supported formats to stdout.
pub fn write_formats(formats: &[FormatInfoOutput], ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(formats),
        OutputFormat::Compact => print_compact_json(formats),
        OutputFormat::Ndjson => print_ndjson(formats),
        OutputFormat::Text => {
            let width = formats.iter().map(|f| f.name.len()).max().unwrap_or(0);
            for f in formats {
                println!("{:<width$}  {}", f.name, f.description);
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(UTF8_BORDERS_ONLY);
            table.set_header(["FORMAT", "DESCRIPTION"]);
            for f in formats {
                table.add_row([f.name.as_str(), f.description.as_str()]);
            }
            println!("{table}");
        }
    }
}

// --- Append ---

/// Write the dotfile append report to stdout.
pub fn write_appends(appends: &[AppendOutput], ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(appends),
        OutputFormat::Compact => print_compact_json(appends),
        OutputFormat::Ndjson => print_ndjson(appends),
        OutputFormat::Text => {
            for a in appends {
                println!("Appending {} to {}", a.text, a.file);
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(UTF8_BORDERS_ONLY);
            table.set_header(["FILE", "APPENDED"]);
            for a in appends {
                table.add_row([a.file.as_str(), a.text.as_str()]);
            }
            println!("{table}");
        }
    }
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, format: OutputFormat, json_flag: bool) {
    let fmt = resolve_format(format, json_flag);
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    match fmt {
        OutputFormat::Json | OutputFormat::Compact | OutputFormat::Ndjson => {
            let s = serde_json::to_string_pretty(err).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        OutputFormat::Text | OutputFormat::Table => {
            let _ = writeln!(out, "Error: {}", err.error.message);
            if let Some(candidates) = &err.error.candidates {
                let _ = writeln!(out, "  Candidates:");
                for c in candidates {
                    let _ = writeln!(out, "    {c}");
                }
            }
        }
    }
}

// --- Generic JSON helpers ---

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

fn print_compact_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

fn print_ndjson<T: Serialize>(values: &[T]) {
    for v in values {
        match serde_json::to_string(v) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("JSON serialization error: {e}"),
        }
    }
}
