/// Batch rendering: one connection string, many formats.
use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use super::descriptor::{ConnectionDescriptor, redact};
use super::errors::DsnError;
use super::format::FormatToken;
use super::render::{AliasSpec, render, unsupported_scheme_line};

/// What a rendered line represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Output of a known format.
    Rendered,
    /// Diagnostic for an unrecognized token.
    UnknownFormat,
    /// The single line emitted for a non-postgres URL.
    UnsupportedScheme,
}

/// One line of batch output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedLine {
    /// The requested token, or the URL scheme for `UnsupportedScheme`.
    pub label: String,
    pub kind: LineKind,
    /// The rendered text. May span several lines (`rails_yaml`).
    pub text: String,
}

impl fmt::Display for RenderedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A parsed descriptor plus the tokens to render against it.
///
/// Iterating renders lazily; iterating again re-renders from the same
/// descriptor without parsing the URL again.
#[derive(Debug, Clone)]
pub struct Batch {
    descriptor: ConnectionDescriptor,
    tokens: Vec<FormatToken>,
    alias: AliasSpec,
}

impl Batch {
    #[must_use]
    pub fn new(descriptor: ConnectionDescriptor, tokens: Vec<FormatToken>, alias: AliasSpec) -> Self {
        Self {
            descriptor,
            tokens,
            alias,
        }
    }

    #[must_use]
    pub fn descriptor(&self) -> &ConnectionDescriptor {
        &self.descriptor
    }

    /// Lazily render every token in order.
    #[must_use]
    pub fn lines(&self) -> Lines<'_> {
        Lines {
            batch: self,
            next: 0,
            unsupported_done: false,
        }
    }
}

impl<'a> IntoIterator for &'a Batch {
    type Item = RenderedLine;
    type IntoIter = Lines<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines()
    }
}

/// Iterator over a batch's rendered lines.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    batch: &'a Batch,
    next: usize,
    unsupported_done: bool,
}

impl Iterator for Lines<'_> {
    type Item = RenderedLine;

    fn next(&mut self) -> Option<Self::Item> {
        let d = &self.batch.descriptor;

        if !d.is_supported() {
            if self.unsupported_done {
                return None;
            }
            self.unsupported_done = true;
            return Some(RenderedLine {
                label: d.scheme.clone(),
                kind: LineKind::UnsupportedScheme,
                text: unsupported_scheme_line(&d.scheme),
            });
        }

        let token = self.batch.tokens.get(self.next)?;
        self.next += 1;

        let kind = if token.is_known() {
            LineKind::Rendered
        } else {
            warn!(format = token.as_str(), "unknown format token");
            LineKind::UnknownFormat
        };
        Some(RenderedLine {
            label: token.as_str().to_owned(),
            kind,
            text: render(d, token, &self.batch.alias),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.batch.descriptor.is_supported() {
            self.batch.tokens.len() - self.next
        } else {
            usize::from(!self.unsupported_done)
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Lines<'_> {}

/// Parse `raw` once and prepare every token in `format_spec` for rendering.
///
/// # Errors
///
/// Returns `DsnError` when the connection string is malformed. Unknown
/// formats and unsupported schemes are not errors; they become diagnostic
/// lines.
pub fn render_batch(raw: &str, format_spec: &str, alias: &AliasSpec) -> Result<Batch, DsnError> {
    let descriptor = ConnectionDescriptor::parse(raw)?;
    debug!(url = %redact(raw), scheme = %descriptor.scheme, "parsed connection string");

    if !descriptor.is_supported() {
        warn!(scheme = %descriptor.scheme, "unsupported scheme, skipping all formats");
    }

    let tokens = FormatToken::parse_list(format_spec);
    debug!(count = tokens.len(), "format tokens");
    Ok(Batch::new(descriptor, tokens, alias.clone()))
}
